//! Section renderers. Each is pure: normalized input in, text out, and each
//! non-empty fragment ends with a newline.

use super::STUB_SEPARATOR;
use crate::domain::EntityName;

pub fn domain_header(name: &EntityName) -> String {
    format!(
        "from py2pddl import Domain, create_type, create_objs\n\
         from py2pddl import predicate, action, goal, init\n\
         \n\
         \n\
         class {name}Domain(Domain):\n"
    )
}

pub fn type_declarations(types: &[String]) -> String {
    types.iter().map(|typ| format!("    {typ} = create_type(\"{typ}\")\n")).collect()
}

pub fn predicate_stubs(predicates: &[String]) -> String {
    predicates
        .iter()
        .map(|predicate| {
            format!(
                "    @predicate(...)\n    def {predicate}(self):\n        \"\"\"Complete the method signature\"\"\"\n"
            )
        })
        .collect::<Vec<_>>()
        .join(STUB_SEPARATOR)
}

pub fn action_stubs(actions: &[String]) -> String {
    actions
        .iter()
        .map(|action| {
            format!(
                "    @action(...)\n    def {action}(self):\n        \"\"\"This should be a pass\"\"\"\n        \
                 precond: list = None  # to fill in\n        \
                 effect: list = None  # to fill in\n        \
                 return precond, effect\n"
            )
        })
        .collect::<Vec<_>>()
        .join(STUB_SEPARATOR)
}

/// Starts with a newline so the problem class sits two blank lines below
/// the domain class body.
pub fn problem_header(name: &EntityName) -> String {
    format!("\nclass {name}Problem({name}Domain):\n")
}

const OBJECT_STUB: &str = "    def __init__(self):\n        \"\"\"To fill in\"\"\"\n";

const INIT_STUB: &str = "    @init\n    def init(self) -> list:\n        # To fill in\n        # Return type is a list\n        return None\n";

const GOAL_STUB: &str = "    @goal\n    def goal(self) -> list:\n        # To fill in\n        # Return type is a list\n        return None\n";

/// Object initializer, `init` and `goal` stubs, separated like major sections.
pub fn object_init_goal_stubs() -> String {
    [OBJECT_STUB, INIT_STUB, GOAL_STUB].join(super::SECTION_SEPARATOR)
}
