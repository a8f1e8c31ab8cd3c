//! Transition rules: named, directed edges between states.

use crate::core::{State, StateRef};
use std::fmt;
use std::sync::Arc;

/// Callback invoked with `(rule, new_state, previous_state)` right before a
/// transition is committed.
pub type TransitionCallback = Arc<dyn Fn(&TransitionRule, &dyn State, &dyn State) + Send + Sync>;

/// A named transition from one state to another.
///
/// Source and destination may be given as identifiers or as state objects;
/// both are resolved to identifiers when the rule is evaluated.
///
/// # Example
///
/// ```rust
/// use statemachine::{State, TransitionRule};
///
/// let melt = TransitionRule::new("melt", "solid", "liquid")
///     .on_transition(|rule, new_state, previous| {
///         println!("{}: {} -> {}", rule.event, previous.identifier(), new_state.identifier());
///     });
///
/// assert!(melt.can_execute("solid"));
/// assert!(!melt.can_execute("liquid"));
/// ```
#[derive(Clone)]
pub struct TransitionRule {
    pub event: String,
    pub source: StateRef,
    pub destination: StateRef,
    pub on_transition: Option<TransitionCallback>,
}

impl TransitionRule {
    pub fn new(
        event: impl Into<String>,
        source: impl Into<StateRef>,
        destination: impl Into<StateRef>,
    ) -> Self {
        Self {
            event: event.into(),
            source: source.into(),
            destination: destination.into(),
            on_transition: None,
        }
    }

    /// Attach the callback fired before the transition is committed.
    pub fn on_transition<F>(mut self, callback: F) -> Self
    where
        F: Fn(&TransitionRule, &dyn State, &dyn State) + Send + Sync + 'static,
    {
        self.on_transition = Some(Arc::new(callback));
        self
    }

    /// Check if this rule applies from the state with the given identifier.
    pub fn can_execute(&self, current: &str) -> bool {
        self.source.resolve() == current
    }
}

impl fmt::Debug for TransitionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionRule")
            .field("event", &self.event)
            .field("source", &self.source)
            .field("destination", &self.destination)
            .field("on_transition", &self.on_transition.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SharedState;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug)]
    struct Base {
        id: String,
    }

    impl State for Base {
        fn identifier(&self) -> &str {
            &self.id
        }
    }

    #[test]
    fn can_execute_matches_source_identifier() {
        let rule = TransitionRule::new("move", "0", "1");

        assert!(rule.can_execute("0"));
        assert!(!rule.can_execute("1"));
    }

    #[test]
    fn can_execute_resolves_state_objects() {
        let source: SharedState = Arc::new(Base {
            id: "0".to_string(),
        });
        let rule = TransitionRule::new("move", source, StateRef::of("2"));

        assert!(rule.can_execute("0"));
    }

    #[test]
    fn empty_identifiers_are_matched_like_any_other() {
        assert!(TransitionRule::new("move", "", "1").can_execute(""));
        assert!(!TransitionRule::new("move", "", "1").can_execute("1"));
        assert!(TransitionRule::new("back", "1", "").can_execute("1"));
    }

    #[test]
    fn callback_is_shared_between_clones() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let rule = TransitionRule::new("move", "0", "1").on_transition(move |_, _, _| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let clone = rule.clone();

        let from = "0";
        let to = "1";
        if let Some(callback) = &clone.on_transition {
            callback(&clone, &to, &from);
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(rule.on_transition.is_some());
    }

    #[test]
    fn debug_hides_callback_body() {
        let rule = TransitionRule::new("melt", "solid", "liquid").on_transition(|_, _, _| {});
        let rendered = format!("{rule:?}");

        assert!(rendered.contains("melt"));
        assert!(rendered.contains("on_transition: true"));
    }
}
