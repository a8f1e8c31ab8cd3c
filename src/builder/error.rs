//! Build errors for state machines and transition rules.

use thiserror::Error;

/// A single problem found while validating a machine configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("cannot build a machine from an empty state list")]
    EmptyStates,

    #[error("duplicate state identifier {identifier}")]
    DuplicateState { identifier: String },
}

/// Errors that can occur when building state machines and transition rules.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid machine configuration: {}", join_violations(.violations))]
    InvalidConfig { violations: Vec<ConfigViolation> },

    #[error("transition event name not specified, call .event(name)")]
    MissingEventName,

    #[error("transition source state not specified, call .from(state)")]
    MissingSource,

    #[error("transition destination state not specified, call .to(state)")]
    MissingDestination,
}

fn join_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
