//! Core State trait for state machine states.
//!
//! The engine only ever asks a state for its identifier. Everything else
//! about a state belongs to the host application.

use std::fmt::Debug;
use std::sync::Arc;

/// Trait for state machine states.
///
/// A state is any value that can report a stable, unique identifier. Two
/// distinct states registered with the same machine must not share an
/// identifier.
///
/// # Example
///
/// ```rust
/// use statemachine::core::State;
///
/// #[derive(Debug)]
/// struct Door {
///     id: String,
/// }
///
/// impl State for Door {
///     fn identifier(&self) -> &str {
///         &self.id
///     }
/// }
///
/// let open = Door { id: "open".to_string() };
/// assert_eq!(open.identifier(), "open");
/// ```
pub trait State: Debug + Send + Sync {
    /// Get the identifier used to register and look up this state.
    fn identifier(&self) -> &str;
}

/// A state shared between the machine's registry and any rules referring to it.
pub type SharedState = Arc<dyn State>;

impl State for String {
    fn identifier(&self) -> &str {
        self
    }
}

impl State for &'static str {
    fn identifier(&self) -> &str {
        self
    }
}
