//! Event-driven state machine.

use crate::builder::{BuildError, MachineConfig};
use crate::core::{SharedState, State, StateHistory, StateTransition};
use crate::machine::error::MachineError;
use crate::machine::rule::TransitionRule;
use chrono::Utc;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Number of transitions a machine keeps in its history unless configured
/// otherwise.
pub const DEFAULT_HISTORY_LIMIT: usize = 1024;

/// Result of emitting a single event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EmitOutcome {
    /// The machine moved to a new state
    Transitioned { from: String, to: String },

    /// A rule exists for the event but does not apply from the current state
    NotApplicable,

    /// No rule is registered under the event name
    UnknownEvent,
}

impl EmitOutcome {
    /// True if the event committed a state change.
    pub fn is_transition(&self) -> bool {
        matches!(self, Self::Transitioned { .. })
    }
}

/// A finite state machine driven by named events.
///
/// Holds a registry of states keyed by identifier, a registry of transition
/// rules keyed by event name, and the current state. The first state ever
/// registered becomes current unless one was selected explicitly.
///
/// The history retains the most recent [`DEFAULT_HISTORY_LIMIT`] transitions
/// by default; see [`StateMachine::set_history_limit`].
///
/// The machine does no internal locking. Share it across threads by wrapping
/// the whole machine in a single lock.
///
/// # Example
///
/// ```rust
/// use statemachine::{EmitOutcome, StateMachine, TransitionRule};
///
/// let mut machine = StateMachine::new();
/// machine
///     .add_state("solid")
///     .add_state("liquid")
///     .add_transition(TransitionRule::new("melt", "solid", "liquid"));
///
/// assert_eq!(machine.current_identifier(), Some("solid"));
/// assert!(machine.emit("melt").unwrap().is_transition());
/// assert_eq!(machine.current_identifier(), Some("liquid"));
/// assert_eq!(machine.emit("melt").unwrap(), EmitOutcome::NotApplicable);
/// ```
pub struct StateMachine {
    current: Option<SharedState>,
    states: HashMap<String, SharedState>,
    transitions: HashMap<String, TransitionRule>,
    history: StateHistory,
}

impl StateMachine {
    /// Create an empty machine with no states, rules or current state.
    pub fn new() -> Self {
        Self {
            current: None,
            states: HashMap::new(),
            transitions: HashMap::new(),
            history: StateHistory::with_limit(DEFAULT_HISTORY_LIMIT),
        }
    }

    /// Build a machine from a configuration bundle.
    ///
    /// The bundle is validated before anything is registered, so an invalid
    /// configuration never yields a partially populated machine.
    pub fn from_config(config: MachineConfig) -> Result<Self, BuildError> {
        config.check().inspect_err(|error| {
            warn!(%error, "rejected machine configuration");
        })?;

        let MachineConfig {
            states,
            transitions,
            initial_index,
        } = config;

        let mut machine = Self::new();
        if let Some(index) = initial_index {
            match states.get(index) {
                Some(state) => machine.current = Some(Arc::clone(state)),
                None => warn!(
                    index,
                    count = states.len(),
                    "initial state index out of range, defaulting to the first state"
                ),
            }
        }

        for state in states {
            machine.add_shared_state(state);
        }
        for rule in transitions {
            machine.add_transition(rule);
        }

        debug!(
            states = machine.states.len(),
            transitions = machine.transitions.len(),
            current = machine.current_identifier(),
            "state machine built from configuration"
        );
        Ok(machine)
    }

    /// Register a state under its identifier.
    pub fn add_state<S: State + 'static>(&mut self, state: S) -> &mut Self {
        self.add_shared_state(Arc::new(state))
    }

    /// Register a shared state under its identifier.
    ///
    /// Re-registering an identifier replaces the registry entry but leaves the
    /// current state alone. If there is no current state yet, this one
    /// becomes current.
    pub fn add_shared_state(&mut self, state: SharedState) -> &mut Self {
        let identifier = state.identifier().to_string();

        if self.current.is_none() {
            debug!(state = %identifier, "default current state");
            self.current = Some(Arc::clone(&state));
        }

        if self.states.insert(identifier.clone(), state).is_some() {
            debug!(state = %identifier, "replaced state registration");
        } else {
            debug!(state = %identifier, "registered state");
        }
        self
    }

    /// Register a transition rule under its event name.
    ///
    /// A later rule with the same event name silently replaces the earlier one.
    pub fn add_transition(&mut self, rule: TransitionRule) -> &mut Self {
        let event = rule.event.clone();
        match self.transitions.insert(event.clone(), rule) {
            Some(_) => debug!(%event, "replaced transition rule"),
            None => debug!(%event, "registered transition rule"),
        }
        self
    }

    /// Emit an event.
    ///
    /// Unknown events and rules that do not apply from the current state are
    /// no-ops, not errors. A rule that applies but points at an unregistered
    /// destination fails with [`MachineError::DestinationNotRegistered`].
    ///
    /// The rule's `on_transition` callback runs on the caller's stack after the
    /// destination is resolved and before it is committed.
    pub fn emit(&mut self, event: &str) -> Result<EmitOutcome, MachineError> {
        let Some(rule) = self.transitions.get(event) else {
            trace!(event, "no rule registered for event");
            return Ok(EmitOutcome::UnknownEvent);
        };

        let Some(previous) = self.current.as_ref() else {
            trace!(event, "machine has no current state");
            return Ok(EmitOutcome::NotApplicable);
        };

        if !rule.can_execute(previous.identifier()) {
            trace!(
                event,
                current = previous.identifier(),
                source = %rule.source,
                "rule does not apply from current state"
            );
            return Ok(EmitOutcome::NotApplicable);
        }

        let destination_id = rule.destination.resolve();
        let Some(destination) = self.states.get(destination_id) else {
            warn!(
                event,
                destination = destination_id,
                "destination state not registered"
            );
            return Err(MachineError::DestinationNotRegistered {
                event: event.to_string(),
                destination: destination_id.to_string(),
            });
        };

        if let Some(callback) = &rule.on_transition {
            callback(rule, &**destination, &**previous);
        }

        let destination = Arc::clone(destination);
        let transition = StateTransition {
            event: event.to_string(),
            from: previous.identifier().to_string(),
            to: destination.identifier().to_string(),
            timestamp: Utc::now(),
        };
        debug!(
            event,
            from = %transition.from,
            to = %transition.to,
            "state transition"
        );

        self.current = Some(destination);
        let outcome = EmitOutcome::Transitioned {
            from: transition.from.clone(),
            to: transition.to.clone(),
        };
        self.history.push(transition);
        Ok(outcome)
    }

    /// Emit an event and react to the new state.
    ///
    /// `reaction` is called with the new current state only when the event
    /// committed a transition.
    pub fn emit_with<F>(&mut self, event: &str, reaction: F) -> Result<EmitOutcome, MachineError>
    where
        F: FnOnce(&dyn State),
    {
        let outcome = self.emit(event)?;
        if outcome.is_transition() {
            if let Some(state) = self.current_state() {
                reaction(state);
            }
        }
        Ok(outcome)
    }

    /// Emit events in order, stopping at the first error.
    ///
    /// Steps committed before the failure stay committed; the sequence is not
    /// atomic.
    pub fn emit_sequence<I>(&mut self, events: I) -> Result<Vec<EmitOutcome>, MachineError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut outcomes = Vec::new();
        for (step, event) in events.into_iter().enumerate() {
            let event = event.as_ref();
            let outcome = self
                .emit(event)
                .map_err(|source| MachineError::InvalidSequence {
                    step,
                    event: event.to_string(),
                    source: Box::new(source),
                })?;
            outcomes.push(outcome);
        }
        Ok(outcomes)
    }

    /// Force the current state, bypassing transition rules.
    ///
    /// Overrides are not recorded in the history.
    pub fn set_state(&mut self, identifier: &str) -> Result<(), MachineError> {
        let Some(state) = self.states.get(identifier) else {
            warn!(state = identifier, "cannot override to unknown state");
            return Err(MachineError::StateNotFound {
                identifier: identifier.to_string(),
            });
        };

        debug!(state = identifier, "state overridden");
        self.current = Some(Arc::clone(state));
        Ok(())
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> Option<&dyn State> {
        self.current.as_deref()
    }

    /// Identifier of the current state, `None` before any state was added.
    pub fn current_identifier(&self) -> Option<&str> {
        self.current.as_ref().map(|state| state.identifier())
    }

    /// Look up a registered state by identifier.
    pub fn state(&self, identifier: &str) -> Option<&SharedState> {
        self.states.get(identifier)
    }

    /// Check whether a state is registered under `identifier`.
    pub fn contains_state(&self, identifier: &str) -> bool {
        self.states.contains_key(identifier)
    }

    /// Look up the rule registered for an event.
    pub fn transition(&self, event: &str) -> Option<&TransitionRule> {
        self.transitions.get(event)
    }

    /// Number of registered states.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Number of registered rules (one per event name).
    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }

    /// Events whose rule applies from the current state, sorted by name.
    ///
    /// An event listed here may still fail if its destination is not
    /// registered.
    pub fn available_events(&self) -> Vec<&str> {
        let Some(current) = self.current_identifier() else {
            return Vec::new();
        };

        let mut events: Vec<&str> = self
            .transitions
            .iter()
            .filter(|(_, rule)| rule.can_execute(current))
            .map(|(event, _)| event.as_str())
            .collect();
        events.sort_unstable();
        events
    }

    /// Get transition history (pure)
    pub fn history(&self) -> &StateHistory {
        &self.history
    }

    /// Drop all recorded transitions. The current state is not affected.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Change how many transitions the history retains.
    ///
    /// `None` keeps every transition, `Some(0)` disables recording. Lowering
    /// the limit evicts the oldest transitions immediately.
    pub fn set_history_limit(&mut self, limit: Option<usize>) -> &mut Self {
        debug!(?limit, "history limit changed");
        self.history.set_limit(limit);
        self
    }
}

impl Default for StateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StateMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut states: Vec<&str> = self.states.keys().map(String::as_str).collect();
        states.sort_unstable();
        let mut events: Vec<&str> = self.transitions.keys().map(String::as_str).collect();
        events.sort_unstable();

        f.debug_struct("StateMachine")
            .field("current", &self.current_identifier())
            .field("states", &states)
            .field("events", &events)
            .field("history", &self.history.len())
            .finish()
    }
}
