//! Property-based tests for the FSM engine.
//!
//! These tests use proptest to check the engine's invariants across many
//! randomly generated configurations and operation sequences.

use proptest::prelude::*;
use statecraft::{Fsm, FsmConfig};

const MAX_STATES: usize = 6;
const MAX_EVENTS: usize = 4;

#[derive(Clone, Debug)]
enum Op {
    Change(usize),
    ChangeUnknown,
    Trigger(usize),
    TriggerUnknown,
    Undo,
    Redo,
    Reset,
    ClearHistory,
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..MAX_STATES).prop_map(Op::Change),
        Just(Op::ChangeUnknown),
        (0..MAX_EVENTS).prop_map(Op::Trigger),
        Just(Op::TriggerUnknown),
        Just(Op::Undo),
        Just(Op::Redo),
        Just(Op::Reset),
        Just(Op::ClearHistory),
    ]
}

prop_compose! {
    fn arbitrary_config()(
        state_count in 2..=MAX_STATES,
        edges in prop::collection::vec(
            (0..MAX_STATES, 0..MAX_EVENTS, 0..MAX_STATES),
            0..12,
        ),
        initial_pick in 0..MAX_STATES,
    ) -> FsmConfig {
        let name = |i: usize| format!("s{}", i % state_count);
        let event = |k: usize| format!("e{k}");

        let mut builder = FsmConfig::builder().initial(name(initial_pick));
        for i in 0..state_count {
            builder = builder.state(name(i));
            for (from, ev, to) in &edges {
                if from % state_count == i {
                    builder = builder.on(event(*ev), name(*to));
                }
            }
        }
        builder.build().expect("generated config is structurally valid")
    }
}

fn apply(fsm: &mut Fsm, op: &Op) {
    match op {
        Op::Change(i) => {
            let target = format!("s{}", i % fsm.states().len());
            let _ = fsm.change_state(&target);
        }
        Op::ChangeUnknown => {
            let _ = fsm.change_state("zzz_missing");
        }
        Op::Trigger(k) => {
            let _ = fsm.trigger(&format!("e{k}"));
        }
        Op::TriggerUnknown => {
            let _ = fsm.trigger("zzz_event");
        }
        Op::Undo => {
            fsm.undo();
        }
        Op::Redo => {
            fsm.redo();
        }
        Op::Reset => fsm.reset(),
        Op::ClearHistory => fsm.clear_history(),
    }
}

/// The observable surface that failed operations must not touch.
fn snapshot(fsm: &Fsm) -> (String, Option<String>, u64, bool) {
    (
        fsm.state().to_string(),
        fsm.previous_state().map(str::to_string),
        fsm.history().change_count(),
        fsm.history().redo_armed(),
    )
}

proptest! {
    #[test]
    fn current_state_is_always_configured(
        config in arbitrary_config(),
        ops in prop::collection::vec(arbitrary_op(), 0..40),
    ) {
        let mut fsm = Fsm::new(config).unwrap();
        for op in &ops {
            apply(&mut fsm, op);
            prop_assert!(fsm.states().contains(&fsm.state()));
        }
    }

    #[test]
    fn failed_operations_never_mutate(
        config in arbitrary_config(),
        ops in prop::collection::vec(arbitrary_op(), 0..20),
    ) {
        let mut fsm = Fsm::new(config).unwrap();
        for op in &ops {
            apply(&mut fsm, op);
        }

        let before = snapshot(&fsm);
        prop_assert!(fsm.change_state("zzz_missing").is_err());
        prop_assert_eq!(snapshot(&fsm), before.clone());

        prop_assert!(fsm.trigger("zzz_event").is_err());
        prop_assert_eq!(snapshot(&fsm), before);
    }

    #[test]
    fn undo_with_no_prior_changes_is_refused(config in arbitrary_config()) {
        let mut fsm = Fsm::new(config).unwrap();
        let initial = fsm.state().to_string();

        prop_assert!(!fsm.undo());
        prop_assert_eq!(fsm.state(), initial);
    }

    #[test]
    fn reset_always_lands_on_initial(
        config in arbitrary_config(),
        ops in prop::collection::vec(arbitrary_op(), 0..30),
    ) {
        let initial = config.initial().to_string();
        let mut fsm = Fsm::new(config).unwrap();
        for op in &ops {
            apply(&mut fsm, op);
        }

        fsm.reset();
        prop_assert_eq!(fsm.state(), initial);
    }

    #[test]
    fn states_handling_is_exactly_the_defining_subset(
        config in arbitrary_config(),
        event_pick in 0..MAX_EVENTS,
    ) {
        let event = format!("e{event_pick}");
        let fsm = Fsm::new(config).unwrap();

        let expected: Vec<&str> = fsm
            .config()
            .states()
            .iter()
            .filter(|def| def.transitions.contains_key(&event))
            .map(|def| def.name.as_str())
            .collect();

        prop_assert_eq!(fsm.states_handling(&event), expected);
    }

    #[test]
    fn redo_requires_a_preceding_undo(
        config in arbitrary_config(),
        ops in prop::collection::vec(arbitrary_op(), 0..20),
    ) {
        let mut fsm = Fsm::new(config).unwrap();
        for op in &ops {
            apply(&mut fsm, op);
        }

        // a forward change always disarms redo
        let first = fsm.states()[0].to_string();
        fsm.change_state(&first).unwrap();
        prop_assert!(!fsm.redo());
    }

    #[test]
    fn config_roundtrips_through_json(config in arbitrary_config()) {
        let json = serde_json::to_string(&config).unwrap();
        let back: FsmConfig = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(config, back);
    }
}
