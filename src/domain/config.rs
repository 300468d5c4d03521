//! Generator configuration (`py2pddl.toml`).

use serde::Deserialize;

use super::error::AppError;

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = "py2pddl.toml";

/// Handling of empty tokens produced by consecutive spaces in a list answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyTokenPolicy {
    /// Keep empty tokens; each renders as a stub with an empty name.
    #[default]
    Preserve,
    /// Drop empty tokens before rendering.
    Collapse,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenConfig {
    #[serde(default)]
    pub empty: EmptyTokenPolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub tokens: TokenConfig,
}

/// Parse generator configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<GeneratorConfig, AppError> {
    let config: GeneratorConfig = toml::from_str(content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = parse_config_content("").unwrap();
        assert_eq!(config.tokens.empty, EmptyTokenPolicy::Preserve);
    }

    #[test]
    fn collapse_policy_parses() {
        let config = parse_config_content("[tokens]\nempty = \"collapse\"\n").unwrap();
        assert_eq!(config.tokens.empty, EmptyTokenPolicy::Collapse);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = parse_config_content("[tokens]\nsplit = \"tab\"\n").unwrap_err();
        assert!(matches!(err, AppError::TomlParseError(_)));
    }

    #[test]
    fn unknown_policy_is_rejected() {
        let err = parse_config_content("[tokens]\nempty = \"drop\"\n").unwrap_err();
        assert!(matches!(err, AppError::TomlParseError(_)));
    }
}
