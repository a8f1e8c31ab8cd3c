//! Identity resolution for transition endpoints.
//!
//! A rule may name its source or destination either by identifier or by
//! pointing at a concrete state object. Both resolve to the same canonical
//! identifier before any comparison happens.

use super::state::{SharedState, State};
use std::fmt;
use std::sync::Arc;

/// Reference to a state, by identifier or by object.
///
/// # Example
///
/// ```rust
/// use statemachine::core::{SharedState, StateRef};
/// use std::sync::Arc;
///
/// let by_name = StateRef::from("liquid");
/// let liquid: SharedState = Arc::new("liquid");
/// let by_object = StateRef::from(liquid);
///
/// assert_eq!(by_name.resolve(), "liquid");
/// assert_eq!(by_object.resolve(), "liquid");
/// ```
#[derive(Clone)]
pub enum StateRef {
    /// A bare state identifier
    Identifier(String),
    /// A concrete state object
    State(SharedState),
}

impl StateRef {
    /// Wrap a concrete state value.
    pub fn of<S: State + 'static>(state: S) -> Self {
        Self::State(Arc::new(state))
    }

    /// Resolve to the canonical identifier.
    ///
    /// Every identifier is valid, including the empty string.
    pub fn resolve(&self) -> &str {
        match self {
            Self::Identifier(identifier) => identifier,
            Self::State(state) => state.identifier(),
        }
    }
}

impl fmt::Debug for StateRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(identifier) => f.debug_tuple("Identifier").field(identifier).finish(),
            Self::State(state) => f.debug_tuple("State").field(state).finish(),
        }
    }
}

impl fmt::Display for StateRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.resolve())
    }
}

impl From<&str> for StateRef {
    fn from(identifier: &str) -> Self {
        Self::Identifier(identifier.to_string())
    }
}

impl From<String> for StateRef {
    fn from(identifier: String) -> Self {
        Self::Identifier(identifier)
    }
}

impl From<SharedState> for StateRef {
    fn from(state: SharedState) -> Self {
        Self::State(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn identifier_resolves_to_itself() {
        assert_eq!(StateRef::from("1").resolve(), "1");
        assert_eq!(StateRef::from("1".to_string()).resolve(), "1");
    }

    #[test]
    fn state_object_resolves_to_its_identifier() {
        let state = StateRef::of(Base {
            id: "2".to_string(),
        });
        assert_eq!(state.resolve(), "2");
    }

    #[test]
    fn both_forms_resolve_identically() {
        let shared: SharedState = Arc::new(Base {
            id: "state1".to_string(),
        });

        assert_eq!(
            StateRef::from(shared).resolve(),
            StateRef::from("state1").resolve()
        );
    }

    #[test]
    fn empty_identifier_is_an_ordinary_identifier() {
        assert_eq!(StateRef::from("").resolve(), "");
        assert_eq!(StateRef::of(Base { id: String::new() }).resolve(), "");
    }

    #[test]
    fn display_shows_identifier() {
        assert_eq!(StateRef::from("gas").to_string(), "gas");
        assert_eq!(StateRef::from("").to_string(), "");
    }
}
