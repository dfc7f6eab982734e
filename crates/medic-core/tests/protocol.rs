use medic_core::code::ProtocolCode;
use medic_core::models::controls::ControlState;
use medic_core::models::protocol::{DispositionKind, Protocol, Trigger, DEFAULT_FALLBACK_KEY};

const SORE_THROAT: &str = r#"{
    "code": "A-1",
    "title": "Sore Throat/Hoarseness",
    "category": "A",
    "decision_points": [
        {"key": "red-flag", "label": "Any red flag?", "kind": "red_flag", "text": ["Refer now."]},
        {"key": "dp1", "label": "Fever over 101F?", "kind": "disposition"},
        {"key": "strep", "label": "Centor 3 or more", "kind": "disposition",
         "trigger": {"type": "threshold", "members": ["cent1", "cent2", "cent3", "cent4"], "minimum": 3, "reset": "cent5"}}
    ],
    "instructions": ["Salt water gargles."],
    "subquestion": {"region": "strep-test", "prompt": "Rapid strep result?", "trigger": {"type": "control", "id": "dp1"}}
}"#;

#[test]
fn parses_protocol_codes() {
    let code = ProtocolCode::parse("K-12").unwrap();
    assert_eq!(code.category, "K");
    assert_eq!(code.number, 12);
    assert_eq!(code.to_string(), "K-12");
}

#[test]
fn rejects_malformed_codes() {
    for bad in [
        "", "A", "A-", "-1", "a-1", "A-0", "A-x", "A1", "A-+1", "A-01", " A-1", "A-1 ",
    ] {
        assert!(ProtocolCode::parse(bad).is_err(), "{bad} should be rejected");
    }
}

#[test]
fn json_defaults_fill_optional_fields() {
    let protocol = Protocol::from_json(SORE_THROAT).unwrap();
    assert_eq!(protocol.fallback, DEFAULT_FALLBACK_KEY);
    assert!(!protocol.requires_screening);
    assert_eq!(protocol.decision_points[1].trigger, Trigger::Checkbox);
    assert!(protocol.decision_points[1].text.is_empty());
    assert_eq!(protocol.decision_points[0].kind, DispositionKind::RedFlag);
}

#[test]
fn control_ids_cover_every_trigger() {
    let protocol = Protocol::from_json(SORE_THROAT).unwrap();
    let ids: Vec<&str> = protocol.control_ids().into_iter().collect();
    assert_eq!(
        ids,
        vec!["cent1", "cent2", "cent3", "cent4", "cent5", "dp1", "red-flag"]
    );
}

#[test]
fn panel_keys_include_fallback_once() {
    let protocol = Protocol::from_json(SORE_THROAT).unwrap();
    assert_eq!(protocol.panel_keys(), vec!["red-flag", "dp1", "strep", "rtd"]);
}

#[test]
fn text_lookup_degrades_to_empty() {
    let protocol = Protocol::from_json(SORE_THROAT).unwrap();
    assert_eq!(protocol.text_for("red-flag"), ["Refer now.".to_string()]);
    assert_eq!(protocol.text_for("rtd"), ["Salt water gargles.".to_string()]);
    assert!(protocol.text_for("dp1").is_empty());
    assert!(protocol.text_for("nope").is_empty());
}

#[test]
fn control_state_tracks_registration() {
    let mut state = ControlState::with_registered(["dp1", "dp2"]);
    assert!(state.is_registered("dp1"));
    assert!(!state.is_checked("dp1"));
    assert!(!state.is_registered("dp3"));

    assert_eq!(state.set("dp2", true), Some(false));
    assert_eq!(state.checked_ids().collect::<Vec<_>>(), vec!["dp2"]);

    state.clear();
    assert_eq!(state.checked_ids().count(), 0);
    assert_eq!(state.len(), 2);
}
