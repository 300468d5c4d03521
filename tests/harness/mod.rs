#![allow(dead_code, unused_imports)]

pub(crate) mod test_context;

pub(crate) use test_context::TestContext;

/// Piped answers for the rocket example: name, types, predicates, actions.
pub(crate) const ROCKET_ANSWERS: &str = "rocket\nlocation stage\nlaunched docked\nlaunch\n";
