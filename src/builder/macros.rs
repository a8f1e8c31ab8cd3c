//! Macros for ergonomic state definitions.

/// Generate a `State` implementation for simple enums.
///
/// Identifiers default to the variant name; `Variant => "id"` overrides it.
///
/// # Example
///
/// ```
/// use statemachine::core::State;
/// use statemachine::state_enum;
///
/// state_enum! {
///     pub enum Phase {
///         Solid => "solid",
///         Liquid => "liquid",
///         Gas,
///     }
/// }
///
/// assert_eq!(Phase::Solid.identifier(), "solid");
/// assert_eq!(Phase::Gas.identifier(), "Gas");
/// ```
#[macro_export]
macro_rules! state_enum {
    (@identifier $variant:ident $identifier:literal) => {
        $identifier
    };
    (@identifier $variant:ident) => {
        stringify!($variant)
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(=> $identifier:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn identifier(&self) -> &str {
                match self {
                    $(Self::$variant => $crate::state_enum!(@identifier $variant $($identifier)?)),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::State;

    state_enum! {
        enum TestState {
            Initial,
            Processing,
            Complete => "done",
        }
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(TestState::Initial.identifier(), "Initial");
        assert_eq!(TestState::Processing.identifier(), "Processing");
        assert_eq!(TestState::Complete.identifier(), "done");
    }

    #[test]
    fn state_enum_supports_visibility() {
        state_enum! {
            pub enum PublicState {
                A,
                B,
            }
        }

        assert_eq!(PublicState::B.identifier(), "B");
    }

    #[test]
    fn generated_enum_registers_with_machine() {
        let mut machine = crate::StateMachine::new();
        machine
            .add_state(TestState::Initial)
            .add_state(TestState::Complete)
            .add_transition(crate::TransitionRule::new(
                "finish",
                "Initial",
                crate::core::StateRef::of(TestState::Complete),
            ));

        machine.emit("finish").unwrap();
        assert_eq!(machine.current_identifier(), Some("done"));
    }
}
