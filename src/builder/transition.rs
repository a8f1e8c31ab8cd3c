//! Builder for constructing transition rules.

use crate::builder::error::BuildError;
use crate::core::{State, StateRef};
use crate::machine::{TransitionCallback, TransitionRule};
use std::sync::Arc;

/// Builder for constructing transition rules with a fluent API.
#[derive(Default)]
pub struct TransitionRuleBuilder {
    event: Option<String>,
    source: Option<StateRef>,
    destination: Option<StateRef>,
    on_transition: Option<TransitionCallback>,
}

impl TransitionRuleBuilder {
    /// Create a new transition rule builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the event name that triggers the rule (required).
    pub fn event(mut self, name: impl Into<String>) -> Self {
        self.event = Some(name.into());
        self
    }

    /// Set the source state (required).
    pub fn from(mut self, state: impl Into<StateRef>) -> Self {
        self.source = Some(state.into());
        self
    }

    /// Set the destination state (required).
    pub fn to(mut self, state: impl Into<StateRef>) -> Self {
        self.destination = Some(state.into());
        self
    }

    /// Add a callback fired before the transition commits (optional).
    pub fn on_transition<F>(mut self, callback: F) -> Self
    where
        F: Fn(&TransitionRule, &dyn State, &dyn State) + Send + Sync + 'static,
    {
        self.on_transition = Some(Arc::new(callback));
        self
    }

    /// Build the rule.
    pub fn build(self) -> Result<TransitionRule, BuildError> {
        let event = self
            .event
            .filter(|name| !name.is_empty())
            .ok_or(BuildError::MissingEventName)?;
        let source = self.source.ok_or(BuildError::MissingSource)?;
        let destination = self.destination.ok_or(BuildError::MissingDestination)?;

        Ok(TransitionRule {
            event,
            source,
            destination,
            on_transition: self.on_transition,
        })
    }
}
