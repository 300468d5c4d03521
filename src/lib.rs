//! py2pddl-init: interactive generator for py2pddl domain/problem skeletons.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{InitOptions, InitOutcome, init, init_with};
pub use domain::{AppError, Answers, EmptyTokenPolicy, EntityName, Skeleton, render};
