use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use medic_core::models::controls::ControlState;
use medic_core::models::protocol::{Protocol, Trigger};
use medic_engine::evaluator::{evaluate, first_checked, threshold_count, trigger_met};
use medic_engine::presenter::{PanelRegistry, Presenter};
use medic_engine::surface::PanelBoard;
use medic_protocols::registry::ProtocolRegistry;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

fn example_protocol() -> Protocol {
    Protocol::from_json(
        r#"{
            "code": "A-1",
            "title": "Example",
            "category": "A",
            "fallback": "fallback",
            "decision_points": [
                {"key": "red-flag", "label": "Red flag", "kind": "red_flag"},
                {"key": "dp1", "label": "DP1", "kind": "disposition"},
                {"key": "dp2", "label": "DP2", "kind": "disposition"},
                {"key": "dp3", "label": "DP3", "kind": "disposition"},
                {"key": "dp4", "label": "DP4", "kind": "disposition"},
                {"key": "retest", "label": "Retest", "kind": "retest"},
                {"key": "fallback", "label": "Return to duty", "kind": "fallback"}
            ]
        }"#,
    )
    .unwrap()
}

fn centor(checked: &[&str]) -> ControlState {
    let mut controls =
        ControlState::with_registered(["cent1", "cent2", "cent3", "cent4", "cent5"]);
    for id in checked {
        controls.set(id, true);
    }
    controls
}

#[test]
fn earlier_decision_point_wins() {
    let result = evaluate(&example_protocol(), &ControlState::with_checked(["dp2", "dp4"]));
    assert_eq!(result.active, "dp2");
}

#[test]
fn nothing_checked_yields_fallback() {
    let result = evaluate(&example_protocol(), &ControlState::new());
    assert_eq!(result.active, "fallback");
    assert!(!result.subquestion_visible);
    assert_eq!(result.threshold_count, None);
}

#[test]
fn red_flag_beats_everything() {
    let protocol = example_protocol();
    let result = evaluate(&protocol, &ControlState::with_checked(["red-flag", "dp1"]));
    assert_eq!(result.active, "red-flag");

    let everything = ControlState::with_checked(["retest", "dp4", "dp3", "dp2", "dp1", "red-flag"]);
    assert_eq!(evaluate(&protocol, &everything).active, "red-flag");
}

#[test]
fn fallback_decision_point_is_never_scanned() {
    let result = evaluate(&example_protocol(), &ControlState::with_checked(["fallback"]));
    assert_eq!(result.active, "fallback");
}

#[test]
fn evaluation_is_idempotent() {
    let protocol = example_protocol();
    let controls = ControlState::with_checked(["dp3", "retest"]);
    assert_eq!(evaluate(&protocol, &controls), evaluate(&protocol, &controls));
}

#[test]
fn empty_protocol_yields_fallback() {
    let mut protocol = example_protocol();
    protocol.decision_points.clear();
    let result = evaluate(&protocol, &ControlState::with_checked(["dp1"]));
    assert_eq!(result.active, "fallback");

    protocol.fallback.clear();
    assert_eq!(evaluate(&protocol, &ControlState::new()).active, "rtd");
}

#[test]
fn first_checked_scans_keys_in_order() {
    let controls = ControlState::with_checked(["b", "c"]);
    assert_eq!(first_checked(["a", "b", "c"], &controls, "rtd"), "b");
    assert_eq!(first_checked(["a"], &controls, "rtd"), "rtd");
    assert_eq!(first_checked(std::iter::empty(), &controls, "rtd"), "rtd");
}

#[test]
fn centor_three_of_four_reveals_strep_question() {
    let registry = ProtocolRegistry::builtin().unwrap();
    let protocol = registry.get("A-1").unwrap();

    let result = evaluate(protocol, &centor(&["cent1", "cent2", "cent3"]));
    assert!(result.subquestion_visible);
    assert_eq!(result.threshold_count, Some(3));

    let result = evaluate(protocol, &centor(&["cent1", "cent4"]));
    assert!(!result.subquestion_visible);
    assert_eq!(result.threshold_count, Some(2));
}

#[test]
fn centor_reset_forces_count_to_zero() {
    let registry = ProtocolRegistry::builtin().unwrap();
    let protocol = registry.get("A-1").unwrap();

    let result = evaluate(protocol, &centor(&["cent1", "cent2", "cent3", "cent5"]));
    assert!(!result.subquestion_visible);
    assert_eq!(result.threshold_count, Some(0));
}

#[test]
fn subquestion_is_independent_of_active_point() {
    let registry = ProtocolRegistry::builtin().unwrap();
    let protocol = registry.get("A-1").unwrap();

    let mut controls = centor(&["cent1", "cent2", "cent3"]);
    controls.set("red-flag", true);
    let result = evaluate(protocol, &controls);
    assert_eq!(result.active, "red-flag");
    assert!(result.subquestion_visible);
}

#[test]
fn unregistered_threshold_member_fails_closed() {
    let members: Vec<String> = ["cent1", "cent2", "cent3", "cent4"]
        .iter()
        .map(|m| m.to_string())
        .collect();
    let controls = ControlState::with_checked(["cent1", "cent2", "cent3"]);
    assert_eq!(threshold_count(&members, Some("cent5"), &controls), None);

    let trigger = Trigger::Threshold {
        members,
        minimum: 3,
        reset: Some("cent5".to_string()),
    };
    assert!(!trigger_met(&trigger, "unused", &controls));
}

#[test]
fn threshold_decision_point_activates() {
    let registry = ProtocolRegistry::builtin().unwrap();
    let protocol = registry.get("K-1").unwrap();
    let mut controls = ControlState::with_registered(protocol.control_ids());

    controls.set("heat2", true);
    assert_eq!(evaluate(protocol, &controls).active, "rtd");

    controls.set("heat4", true);
    let result = evaluate(protocol, &controls);
    assert_eq!(result.active, "dp1");
    assert_eq!(result.threshold_count, Some(2));

    controls.set("retest", true);
    assert_eq!(evaluate(protocol, &controls).active, "dp1");

    controls.set("heat5", true);
    assert_eq!(evaluate(protocol, &controls).active, "retest");
}

#[test]
fn control_trigger_reads_another_control() {
    let registry = ProtocolRegistry::builtin().unwrap();
    let protocol = registry.get("A-1").unwrap();
    let mut controls = ControlState::with_registered(protocol.control_ids());
    controls.set("strep-positive", true);
    controls.set("dp2", true);
    assert_eq!(evaluate(protocol, &controls).active, "dp1");
}

struct WarnCounter(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for WarnCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::WARN {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

#[test]
fn incomplete_threshold_group_warns_once_per_cycle() {
    let registry = ProtocolRegistry::builtin().unwrap();
    let protocol = registry.get("A-1").unwrap();
    let controls = ControlState::with_registered(
        protocol.control_ids().into_iter().filter(|id| *id != "cent4"),
    );

    let warnings = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry().with(WarnCounter(Arc::clone(&warnings)));
    tracing::subscriber::with_default(subscriber, || {
        let presenter = Presenter::new(PanelRegistry::for_protocol(protocol, str::to_string));
        let mut board = PanelBoard::new();
        let result = evaluate(protocol, &controls);
        assert_eq!(result.threshold_count, Some(0));
        presenter.present(protocol, &result, &controls, true, &mut board);
    });

    assert_eq!(warnings.load(Ordering::SeqCst), 1);
}
