//! Runtime errors returned while driving a state machine.

use thiserror::Error;

/// Errors that can occur while emitting events or overriding state.
///
/// All of them leave the machine's current state untouched, except that an
/// [`MachineError::InvalidSequence`] keeps every step committed before the
/// failing one.
#[derive(Debug, Error)]
pub enum MachineError {
    #[error("destination state '{destination}' of event '{event}' is not registered")]
    DestinationNotRegistered { event: String, destination: String },

    #[error("state '{identifier}' does not exist")]
    StateNotFound { identifier: String },

    #[error("invalid transition sequence ==> {source}")]
    InvalidSequence {
        /// Zero-based position of the failing event in the sequence
        step: usize,
        event: String,
        #[source]
        source: Box<MachineError>,
    },
}

impl MachineError {
    /// The innermost error, looking through sequence wrappers.
    pub fn root_cause(&self) -> &MachineError {
        match self {
            Self::InvalidSequence { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn sequence_error_wraps_underlying_message() {
        let error = MachineError::InvalidSequence {
            step: 1,
            event: "jump".to_string(),
            source: Box::new(MachineError::DestinationNotRegistered {
                event: "jump".to_string(),
                destination: "2".to_string(),
            }),
        };

        assert_eq!(
            error.to_string(),
            "invalid transition sequence ==> destination state '2' of event 'jump' is not registered"
        );
        assert!(error.source().is_some());
        assert!(matches!(
            error.root_cause(),
            MachineError::DestinationNotRegistered { .. }
        ));
    }

    #[test]
    fn state_not_found_names_identifier() {
        let error = MachineError::StateNotFound {
            identifier: "plasma".to_string(),
        };
        assert_eq!(error.to_string(), "state 'plasma' does not exist");
        assert!(std::ptr::eq(error.root_cause(), &error));
    }
}
