//! Normalization of raw prompt answers into renderer input.

use std::fmt;

use super::config::EmptyTokenPolicy;
use super::error::AppError;

/// Case rule applied to every token of a list answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Casing {
    /// First letter of each word uppercased, remaining letters lowercased.
    Title,
    Lower,
}

impl Casing {
    pub fn apply(self, token: &str) -> String {
        match self {
            Casing::Title => title_case(token),
            Casing::Lower => token.to_lowercase(),
        }
    }
}

/// Domain entity name: trimmed, non-empty, first character uppercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityName(String);

impl EntityName {
    /// Normalize a raw name answer. The remainder after the first character
    /// is kept verbatim.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let trimmed = raw.trim();
        let mut chars = trimmed.chars();
        let Some(first) = chars.next() else {
            return Err(AppError::empty_input("Name"));
        };

        let mut name: String = first.to_uppercase().collect();
        name.push_str(chars.as_str());
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything the skeleton renderer needs, already normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    pub name: EntityName,
    pub types: Vec<String>,
    pub predicates: Vec<String>,
    pub actions: Vec<String>,
}

/// Split a list answer on single spaces and apply `casing` to each token.
///
/// A blank answer yields no tokens. Runs of spaces inside the answer yield
/// empty tokens unless `policy` is [`EmptyTokenPolicy::Collapse`].
/// Order and duplicates are kept.
pub fn tokenize(raw: &str, casing: Casing, policy: EmptyTokenPolicy) -> Vec<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    trimmed
        .split(' ')
        .filter(|token| policy == EmptyTokenPolicy::Preserve || !token.is_empty())
        .map(|token| casing.apply(token))
        .collect()
}

fn title_case(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    let mut previous_cased = false;
    for c in token.chars() {
        if previous_cased {
            out.extend(c.to_lowercase());
        } else {
            push_titlecase(&mut out, c);
        }
        previous_cased = c.is_uppercase() || c.is_lowercase() || is_latin_titlecase(c);
    }
    out
}

/// Titlecase mapping for a word-initial character. Covers the Latin digraphs
/// and `ß`; other characters with a distinct titlecase form (ligatures such
/// as `ﬁ`) fall back to their uppercase mapping.
fn push_titlecase(out: &mut String, c: char) {
    match c {
        'Ǆ' | 'ǅ' | 'ǆ' => out.push('ǅ'),
        'Ǉ' | 'ǈ' | 'ǉ' => out.push('ǈ'),
        'Ǌ' | 'ǋ' | 'ǌ' => out.push('ǋ'),
        'Ǳ' | 'ǲ' | 'ǳ' => out.push('ǲ'),
        'ß' => out.push_str("Ss"),
        _ => out.extend(c.to_uppercase()),
    }
}

fn is_latin_titlecase(c: char) -> bool {
    matches!(c, 'ǅ' | 'ǈ' | 'ǋ' | 'ǲ')
}
