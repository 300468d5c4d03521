//! Six-section skeleton renderer.

mod sections;

use std::fmt;

use super::Answers;

pub use sections::{
    action_stubs, domain_header, object_init_goal_stubs, predicate_stubs, problem_header,
    type_declarations,
};

/// Placed after every major section. Sections end with a newline, so this
/// leaves exactly one blank line between them.
pub const SECTION_SEPARATOR: &str = "\n";

/// Placed between consecutive stub blocks of the same kind.
pub const STUB_SEPARATOR: &str = "\n";

/// Generated skeleton text. Write-once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skeleton(String);

impl Skeleton {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Skeleton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Render all sections in order and join them.
///
/// Deterministic: identical answers always give byte-identical output.
pub fn render(answers: &Answers) -> Skeleton {
    let sections = [
        domain_header(&answers.name),
        type_declarations(&answers.types),
        predicate_stubs(&answers.predicates),
        action_stubs(&answers.actions),
        problem_header(&answers.name),
        object_init_goal_stubs(),
    ];

    Skeleton(sections.join(SECTION_SEPARATOR))
}
