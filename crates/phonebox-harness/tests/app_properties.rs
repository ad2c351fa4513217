//! Property-based tests for the App state machine.
//!
//! Tests verify that invariants hold under arbitrary event sequences.
//! This ensures behavioral correctness across all possible execution paths.

use std::time::Duration;

use phonebox_app::{App, AppAction, AppEvent, Bridge, KeyInput};
use phonebox_core::{Environment, TimerConfig, TimerHandle, TimerKind};
use phonebox_harness::{InvariantRegistry, PhoneSnapshot, SimEnv};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Key(KeyInput),
    Host(String),
    FireLive(TimerKind),
    FireStale(TimerKind),
    Wait(u64),
}

fn key_strategy() -> impl Strategy<Value = KeyInput> {
    prop_oneof![
        4 => prop::sample::select(vec!['0', '1', '2', '3', '4', 'a', 'c', 'd', 'e', 'r', ' ', '1'])
            .prop_map(KeyInput::Char),
        2 => prop::sample::select(vec!['c', 'l', 'n', 's', 'r', 'o', 'q', 'x']).prop_map(KeyInput::Ctrl),
        5 => prop::sample::select(vec![
            KeyInput::Enter,
            KeyInput::Backspace,
            KeyInput::Tab,
            KeyInput::Esc,
            KeyInput::Left,
            KeyInput::Right,
            KeyInput::Up,
            KeyInput::Down,
        ]),
    ]
}

fn host_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(r#"{"action":"show"}"#.to_owned()),
        Just(r#"{"action":"hide"}"#.to_owned()),
        Just(r#"{"action":"endCall"}"#.to_owned()),
        (0u64..4).prop_map(|id| format!(r#"{{"action":"receiveCall","callData":{{"id":{id}}}}}"#)),
        "[a-z]{0,6}".prop_map(|title| {
            format!(r#"{{"action":"addNotification","notification":{{"title":"{title}"}}}}"#)
        }),
        prop::option::of("[0-9]{4}").prop_map(|pin| {
            let pin = pin.map_or_else(|| "null".to_owned(), |p| format!(r#""{p}""#));
            format!(r#"{{"action":"updatePhoneData","phoneData":{{"pinCode":{pin}}}}}"#)
        }),
        prop::sample::select(vec!["camera", "dialer", "mail", "maps"]).prop_map(|app| {
            format!(r#"{{"action":"loadAppContent","appName":"{app}","content":"<p/>"}}"#)
        }),
        (-50.0f64..150.0).prop_map(|b| format!(r#"{{"action":"updateBattery","battery":{b}}}"#)),
    ]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => key_strategy().prop_map(Op::Key),
        3 => host_strategy().prop_map(Op::Host),
        2 => prop::sample::select(TimerKind::ALL.to_vec()).prop_map(Op::FireLive),
        1 => prop::sample::select(TimerKind::ALL.to_vec()).prop_map(Op::FireStale),
        1 => (1u64..600).prop_map(Op::Wait),
    ]
}

/// Apply one operation. Returns the actions the App produced.
fn apply(app: &mut App, bridge: &mut Bridge<SimEnv>, op: &Op) -> Vec<AppAction> {
    let events = match op {
        Op::Key(key) => vec![AppEvent::Key(*key)],
        Op::Host(message) => bridge.handle_raw(message.as_bytes()),
        Op::FireLive(kind) => match app.timers().handle(*kind) {
            Some(handle) => bridge.handle_timer(handle),
            None => vec![],
        },
        Op::FireStale(kind) => match app.timers().handle(*kind) {
            Some(handle) if handle.generation > 0 => bridge.handle_timer(TimerHandle {
                kind: *kind,
                generation: handle.generation - 1,
            }),
            _ => vec![],
        },
        Op::Wait(secs) => {
            bridge.env().advance(Duration::from_secs(*secs));
            vec![]
        },
    };

    events.into_iter().flat_map(|event| app.handle(event)).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Every phone invariant holds after every step.
    #[test]
    fn invariants_hold_under_arbitrary_ops(ops in prop::collection::vec(op_strategy(), 1..80)) {
        let env = SimEnv::default();
        let mut app = App::new(TimerConfig::default(), env.now());
        let mut bridge = Bridge::new(env);
        let registry = InvariantRegistry::standard();

        let _ = app.start();
        for (step, op) in ops.iter().enumerate() {
            let _ = apply(&mut app, &mut bridge, op);
            registry.assert_all(&PhoneSnapshot::from_app(&app), &format!("at step {step} ({op:?})"));
        }
    }

    /// Wall time seen by the App never moves backwards.
    #[test]
    fn app_time_is_monotonic(ops in prop::collection::vec(op_strategy(), 1..60)) {
        let env = SimEnv::default();
        let mut app = App::new(TimerConfig::default(), env.now());
        let mut bridge = Bridge::new(env);

        let mut last = app.now();
        for op in &ops {
            let _ = apply(&mut app, &mut bridge, op);
            prop_assert!(app.now() >= last);
            last = app.now();
        }
    }

    /// Stale timer fires never change state.
    #[test]
    fn stale_timer_fire_is_noop(
        ops in prop::collection::vec(op_strategy(), 0..40),
        kind in prop::sample::select(TimerKind::ALL.to_vec()),
    ) {
        let env = SimEnv::default();
        let mut app = App::new(TimerConfig::default(), env.now());
        let mut bridge = Bridge::new(env);

        let _ = app.start();
        for op in &ops {
            let _ = apply(&mut app, &mut bridge, op);
        }

        let before = PhoneSnapshot::from_app(&app);
        let actions = apply(&mut app, &mut bridge, &Op::FireStale(kind));
        prop_assert!(actions.is_empty());
        prop_assert_eq!(PhoneSnapshot::from_app(&app), before);
    }

    /// Host requests carry only the declared outbound actions.
    #[test]
    fn host_requests_use_phone_namespace(ops in prop::collection::vec(op_strategy(), 1..60)) {
        let env = SimEnv::default();
        let mut app = App::new(TimerConfig::default(), env.now());
        let mut bridge = Bridge::new(env);

        for op in &ops {
            for action in apply(&mut app, &mut bridge, op) {
                if let AppAction::Host(request) = action {
                    prop_assert!(request.action().starts_with("phone:"));
                }
            }
        }
    }
}
