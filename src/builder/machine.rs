//! Builder for constructing state machines.

use crate::builder::config::MachineConfig;
use crate::builder::error::BuildError;
use crate::builder::transition::TransitionRuleBuilder;
use crate::core::{SharedState, State};
use crate::machine::{StateMachine, TransitionRule};
use std::sync::Arc;

/// Builder for constructing state machines with a fluent API.
///
/// # Example
///
/// ```rust
/// use statemachine::{StateMachineBuilder, TransitionRuleBuilder};
///
/// let machine = StateMachineBuilder::new()
///     .state("solid")
///     .state("liquid")
///     .transition(TransitionRuleBuilder::new().event("melt").from("solid").to("liquid"))
///     .unwrap()
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.current_identifier(), Some("solid"));
/// ```
#[derive(Debug, Default)]
pub struct StateMachineBuilder {
    config: MachineConfig,
    history_limit: Option<Option<usize>>,
}

impl StateMachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a state.
    pub fn state<S: State + 'static>(mut self, state: S) -> Self {
        self.config.states.push(Arc::new(state));
        self
    }

    /// Add a state that is also referenced elsewhere, e.g. by rules.
    pub fn shared_state(mut self, state: SharedState) -> Self {
        self.config.states.push(state);
        self
    }

    /// Add multiple states at once.
    pub fn states<I>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = SharedState>,
    {
        self.config.states.extend(states);
        self
    }

    /// Add a transition rule using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionRuleBuilder) -> Result<Self, BuildError> {
        let rule = builder.build()?;
        self.config.transitions.push(rule);
        Ok(self)
    }

    /// Add a pre-built transition rule.
    pub fn add_transition(mut self, rule: TransitionRule) -> Self {
        self.config.transitions.push(rule);
        self
    }

    /// Add multiple transition rules at once.
    pub fn transitions(mut self, rules: Vec<TransitionRule>) -> Self {
        self.config.transitions.extend(rules);
        self
    }

    /// Start in the state at `index` (in the order states were added).
    pub fn initial_index(mut self, index: usize) -> Self {
        self.config.initial_index = Some(index);
        self
    }

    /// Retain at most `limit` transitions in the history, or every
    /// transition when `None`. Defaults to [`crate::DEFAULT_HISTORY_LIMIT`].
    pub fn history_limit(mut self, limit: Option<usize>) -> Self {
        self.history_limit = Some(limit);
        self
    }

    /// Take the configuration bundle collected so far.
    ///
    /// The history limit is a machine setting and is not part of the bundle.
    pub fn into_config(self) -> MachineConfig {
        self.config
    }

    /// Build the state machine.
    /// Returns an error if the configuration is invalid.
    pub fn build(self) -> Result<StateMachine, BuildError> {
        let mut machine = StateMachine::from_config(self.config)?;
        if let Some(limit) = self.history_limit {
            machine.set_history_limit(limit);
        }
        Ok(machine)
    }
}
