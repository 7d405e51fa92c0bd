//! States of Matter
//!
//! This example demonstrates a config-driven state machine with
//! single-step undo/redo.
//!
//! Key concepts:
//! - Declarative transition table via the `fsm_config!` macro
//! - Event-driven transitions and direct state assignment
//! - One-slot undo/redo history
//!
//! Run with: cargo run --example matter

use statecraft::{Fsm, fsm_config};

fn main() {
    println!("=== States of Matter ===\n");

    let config = fsm_config! {
        initial: "solid",
        states: {
            "solid" => { "melt" => "liquid" },
            "liquid" => { "freeze" => "solid", "boil" => "gas" },
            "gas" => { "condense" => "liquid" },
        }
    }
    .expect("table is well-formed");

    let mut fsm = Fsm::new(config).expect("config is valid");
    println!("Initial state: {}", fsm.state());
    println!("All states: {:?}\n", fsm.states());

    fsm.trigger("melt").expect("solid can melt");
    println!("After melt:    {}", fsm.state());

    fsm.trigger("boil").expect("liquid can boil");
    println!("After boil:    {}", fsm.state());

    println!("\nWho handles `freeze`? {:?}", fsm.states_handling("freeze"));

    if fsm.undo() {
        println!("\nUndo:          {}", fsm.state());
    }
    if fsm.redo() {
        println!("Redo:          {}", fsm.state());
    }

    // an event the current state does not define is a typed error
    let err = fsm.trigger("melt").unwrap_err();
    println!("\nRejected:      {err}");
    println!("State held at: {}", fsm.state());

    fsm.reset();
    println!("\nAfter reset:   {}", fsm.state());

    println!("\n=== Example Complete ===");
}
