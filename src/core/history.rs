//! State transition history tracking.
//!
//! Every committed transition is recorded by identifier, so the history can be
//! inspected or serialized for diagnostics without holding on to state objects.
//! A history may carry a retention limit, in which case only the most recent
//! transitions are kept.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single committed transition.
///
/// # Example
///
/// ```rust
/// use statemachine::core::StateTransition;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     event: "melt".to_string(),
///     from: "solid".to_string(),
///     to: "liquid".to_string(),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.to, "liquid");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition {
    /// The event that triggered the transition
    pub event: String,
    /// Identifier of the state being left
    pub from: String,
    /// Identifier of the state being entered
    pub to: String,
    /// When the transition was committed
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of committed transitions.
///
/// # Example
///
/// ```rust
/// use statemachine::core::{StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         event: "melt".to_string(),
///         from: "solid".to_string(),
///         to: "liquid".to_string(),
///         timestamp: Utc::now(),
///     })
///     .record(StateTransition {
///         event: "evaporate".to_string(),
///         from: "liquid".to_string(),
///         to: "gas".to_string(),
///         timestamp: Utc::now(),
///     });
///
/// assert_eq!(history.get_path(), vec!["solid", "liquid", "gas"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateHistory {
    transitions: Vec<StateTransition>,
    #[serde(skip)]
    limit: Option<usize>,
}

impl StateHistory {
    /// Create a new empty, unbounded history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
            limit: None,
        }
    }

    /// Create an empty history that keeps at most `limit` transitions.
    ///
    /// Once full, recording a transition evicts the oldest one. A limit of
    /// zero records nothing.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            transitions: Vec::new(),
            limit: Some(limit),
        }
    }

    /// Maximum number of retained transitions, `None` when unbounded.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: StateTransition) -> Self {
        let mut history = self.clone();
        history.push(transition);
        history
    }

    pub(crate) fn push(&mut self, transition: StateTransition) {
        if self.limit == Some(0) {
            return;
        }
        self.transitions.push(transition);
        self.evict_overflow();
    }

    pub(crate) fn set_limit(&mut self, limit: Option<usize>) {
        self.limit = limit;
        self.evict_overflow();
    }

    fn evict_overflow(&mut self) {
        if let Some(limit) = self.limit {
            let excess = self.transitions.len().saturating_sub(limit);
            if excess > 0 {
                self.transitions.drain(..excess);
            }
        }
    }

    pub(crate) fn clear(&mut self) {
        self.transitions.clear();
    }

    /// Get the sequence of state identifiers visited.
    ///
    /// Starts with the source of the first retained transition, followed by
    /// the target of every transition. Empty when nothing was recorded.
    pub fn get_path(&self) -> Vec<&str> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(first.from.as_str());
        }
        path.extend(self.transitions.iter().map(|t| t.to.as_str()));
        path
    }

    /// Elapsed time between the first and last recorded transitions.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            last.timestamp
                .signed_duration_since(first.timestamp)
                .to_std()
                .ok()
        } else {
            None
        }
    }

    /// Get all transitions in the order they were committed.
    pub fn transitions(&self) -> &[StateTransition] {
        &self.transitions
    }

    /// Most recent transition, if any.
    pub fn last(&self) -> Option<&StateTransition> {
        self.transitions.last()
    }

    /// Number of retained transitions.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// True if no transition is retained.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
