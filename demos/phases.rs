//! Phase Transitions
//!
//! This demo wires up the solid/liquid/gas diagram and drives it with events.
//!
//! Key concepts:
//! - States declared with the `state_enum!` macro
//! - Rules referring to states by identifier or by object
//! - Per-rule callbacks and per-call reactions
//! - Sequences that stop at the first failure without rolling back
//!
//! Run with: RUST_LOG=statemachine=debug cargo run --example phases

use statemachine::{
    state_enum, BuildError, State, StateMachineBuilder, StateRef, TransitionRule,
    TransitionRuleBuilder,
};

state_enum! {
    enum Phase {
        Solid => "solid",
        Liquid => "liquid",
        Gas => "gas",
    }
}

fn announce(rule: &TransitionRule, new_state: &dyn State, previous: &dyn State) {
    println!(
        "  [{}] {} -> {}",
        rule.event,
        previous.identifier(),
        new_state.identifier()
    );
}

fn main() -> Result<(), BuildError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "statemachine=info".to_string()),
        )
        .init();

    println!("=== Phase Transitions Demo ===\n");

    let mut machine = StateMachineBuilder::new()
        .state(Phase::Solid)
        .state(Phase::Liquid)
        .state(Phase::Gas)
        .add_transition(TransitionRule::new("melt", "solid", "liquid").on_transition(announce))
        .add_transition(TransitionRule::new("freeze", "liquid", "solid").on_transition(announce))
        .add_transition(
            TransitionRule::new("evaporate", StateRef::of(Phase::Liquid), StateRef::of(Phase::Gas))
                .on_transition(announce),
        )
        .transition(
            TransitionRuleBuilder::new()
                .event("condense")
                .from("gas")
                .to("liquid")
                .on_transition(announce),
        )?
        .add_transition(TransitionRule::new("ionize", "gas", "plasma"))
        .build()?;

    println!("Initial state: {:?}", machine.current_identifier());
    println!("Available events: {:?}\n", machine.available_events());

    println!("Single transitions:");
    for event in ["melt", "melt", "freeze"] {
        match machine.emit_with(event, |state| println!("  new state {}", state.identifier())) {
            Ok(outcome) => println!("  {event}: {outcome:?}"),
            Err(error) => println!("  {event}: {error}"),
        }
    }

    println!("\nSequence:");
    match machine.emit_sequence(["melt", "evaporate", "condense", "freeze"]) {
        Ok(outcomes) => println!("  completed {} steps", outcomes.len()),
        Err(error) => println!("  {error}"),
    }

    println!("\nFailing sequence:");
    if let Err(error) = machine.emit_sequence(["melt", "evaporate", "ionize", "condense"]) {
        println!("  {error}");
    }
    println!("  state after failure: {:?}", machine.current_identifier());

    println!("\nVisited: {:?}", machine.history().get_path());

    println!("\n=== Demo Complete ===");
    Ok(())
}
