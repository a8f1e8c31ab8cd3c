//! Configuration bundle a machine can be built from.

use crate::builder::error::{BuildError, ConfigViolation};
use crate::core::{SharedState, State};
use crate::machine::TransitionRule;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// States and rules to seed a machine with.
///
/// States are registered in order, then rules in order. `initial_index`
/// selects the starting state; without it (or when out of range) the first
/// state wins.
#[derive(Clone, Default)]
pub struct MachineConfig {
    pub states: Vec<SharedState>,
    pub transitions: Vec<TransitionRule>,
    pub initial_index: Option<usize>,
}

impl MachineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state<S: State + 'static>(mut self, state: S) -> Self {
        self.states.push(Arc::new(state));
        self
    }

    pub fn shared_state(mut self, state: SharedState) -> Self {
        self.states.push(state);
        self
    }

    pub fn transition(mut self, rule: TransitionRule) -> Self {
        self.transitions.push(rule);
        self
    }

    pub fn initial_index(mut self, index: usize) -> Self {
        self.initial_index = Some(index);
        self
    }

    /// Validate the bundle, accumulating ALL violations.
    ///
    /// An empty state list and every identifier shared by more than one state
    /// are each reported once.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

        if self.states.is_empty() {
            checks.push(Validation::fail(ConfigViolation::EmptyStates));
        }

        let mut seen: HashMap<&str, usize> = HashMap::new();
        for state in &self.states {
            let count = seen.entry(state.identifier()).or_insert(0);
            *count += 1;
            // Report on the second sighting only, in configuration order.
            if *count == 2 {
                checks.push(Validation::fail(ConfigViolation::DuplicateState {
                    identifier: state.identifier().to_string(),
                }));
            }
        }

        if checks.is_empty() {
            return Validation::success(());
        }
        Validation::all_vec(checks).map(|_| ())
    }

    pub(crate) fn check(&self) -> Result<(), BuildError> {
        match self.validate() {
            Validation::Success(_) => Ok(()),
            Validation::Failure(violations) => Err(BuildError::InvalidConfig {
                violations: violations.iter().cloned().collect(),
            }),
        }
    }
}

impl fmt::Debug for MachineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MachineConfig")
            .field(
                "states",
                &self.states.iter().map(|s| s.identifier()).collect::<Vec<_>>(),
            )
            .field("transitions", &self.transitions)
            .field("initial_index", &self.initial_index)
            .finish()
    }
}
