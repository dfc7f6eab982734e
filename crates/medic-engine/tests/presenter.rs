use medic_core::models::controls::ControlState;
use medic_core::models::protocol::{DispositionKind, Protocol};
use medic_engine::evaluator::evaluate;
use medic_engine::presenter::{Indicator, IndicatorColor, PanelRegistry, PanelState, Presenter};
use medic_engine::surface::PanelBoard;
use medic_protocols::registry::ProtocolRegistry;

/// Every assignment of the protocol's controls, as a bitmask over
/// `control_ids()` order.
fn assignments(protocol: &Protocol) -> impl Iterator<Item = ControlState> + '_ {
    let ids: Vec<&str> = protocol.control_ids().into_iter().collect();
    (0u32..(1 << ids.len())).map(move |mask| {
        ids.iter()
            .enumerate()
            .map(|(bit, id)| (id.to_string(), mask & (1 << bit) != 0))
            .collect()
    })
}

#[test]
fn at_most_one_panel_is_ever_visible() {
    let registry = ProtocolRegistry::builtin().unwrap();
    for protocol in registry.protocols() {
        let presenter = Presenter::new(PanelRegistry::for_protocol(protocol, str::to_string));
        let mut board = PanelBoard::new();

        for controls in assignments(protocol) {
            for gate_open in [false, true] {
                let result = evaluate(protocol, &controls);
                let state = presenter.present(protocol, &result, &controls, gate_open, &mut board);

                let visible: Vec<&str> = board.visible_panels().collect();
                assert!(visible.len() <= 1, "{}: {visible:?}", protocol.code);
                assert_eq!(visible.first().copied(), state.visible_key());

                let expected = protocol
                    .ranked()
                    .find(|dp| {
                        medic_engine::evaluator::trigger_met(&dp.trigger, &dp.key, &controls)
                    })
                    .map(|dp| dp.key.as_str());
                match expected {
                    Some(key) => assert_eq!(state, PanelState::Shown(key.to_string())),
                    None if gate_open || !protocol.requires_screening => {
                        assert_eq!(state, PanelState::Shown(protocol.fallback.clone()))
                    }
                    None => assert_eq!(state, PanelState::AwaitingScreening),
                }
            }
        }
    }
}

#[test]
fn checking_higher_priority_supersedes_lower() {
    let registry = ProtocolRegistry::builtin().unwrap();
    let protocol = registry.get("B-1").unwrap();
    let presenter = Presenter::new(PanelRegistry::for_protocol(protocol, str::to_string));
    let mut board = PanelBoard::new();

    let mut controls = ControlState::with_registered(protocol.control_ids());
    controls.set("dp3", true);
    let result = evaluate(protocol, &controls);
    presenter.present(protocol, &result, &controls, true, &mut board);
    assert!(board.is_visible("dp3"));

    controls.set("red-flag", true);
    let result = evaluate(protocol, &controls);
    presenter.present(protocol, &result, &controls, true, &mut board);
    assert_eq!(board.visible_panels().collect::<Vec<_>>(), vec!["red-flag"]);
}

#[test]
fn missing_panel_leaves_everything_hidden() {
    let registry = ProtocolRegistry::builtin().unwrap();
    let protocol = registry.get("H-2").unwrap();

    let mut panels = PanelRegistry::new();
    panels.insert("red-flag", "red-flag".to_string());
    panels.insert("rtd", "rtd".to_string());
    let presenter = Presenter::new(panels);
    let mut board = PanelBoard::new();

    let controls = ControlState::with_checked(["dp1"]);
    let result = evaluate(protocol, &controls);
    let state = presenter.present(protocol, &result, &controls, true, &mut board);

    assert_eq!(state, PanelState::Missing("dp1".to_string()));
    assert_eq!(board.visible_panels().count(), 0);
}

#[test]
fn screening_gate_holds_back_fallback_only() {
    let registry = ProtocolRegistry::builtin().unwrap();
    let protocol = registry.get("D-2").unwrap();
    assert!(protocol.requires_screening);
    let presenter = Presenter::new(PanelRegistry::for_protocol(protocol, str::to_string));
    let mut board = PanelBoard::new();

    let controls = ControlState::with_registered(protocol.control_ids());
    let result = evaluate(protocol, &controls);
    let state = presenter.present(protocol, &result, &controls, false, &mut board);
    assert_eq!(state, PanelState::AwaitingScreening);
    assert_eq!(board.visible_panels().count(), 0);

    let state = presenter.present(protocol, &result, &controls, true, &mut board);
    assert_eq!(state, PanelState::Shown("rtd".to_string()));

    let controls = ControlState::with_checked(["dp1"]);
    let result = evaluate(protocol, &controls);
    let state = presenter.present(protocol, &result, &controls, false, &mut board);
    assert_eq!(state, PanelState::Shown("dp1".to_string()));
}

#[test]
fn indicators_mirror_checked_state() {
    let registry = ProtocolRegistry::builtin().unwrap();
    let protocol = registry.get("C-1").unwrap();
    let presenter = Presenter::new(PanelRegistry::for_protocol(protocol, str::to_string));
    let mut board = PanelBoard::new();

    let controls = ControlState::with_checked(["red-flag", "dp2"]);
    let result = evaluate(protocol, &controls);
    presenter.present(protocol, &result, &controls, true, &mut board);

    let red = board.indicator("red-flag").unwrap();
    assert_eq!((red.label, red.color), ("YES", IndicatorColor::Red));
    let dp2 = board.indicator("dp2").unwrap();
    assert_eq!((dp2.label, dp2.color), ("YES", IndicatorColor::Amber));
    let dp1 = board.indicator("dp1").unwrap();
    assert_eq!((dp1.label, dp1.color), ("NO", IndicatorColor::Neutral));
    assert!(board.indicator("rtd").is_none());
}

#[test]
fn indicator_labels() {
    let unchecked = Indicator::for_point(DispositionKind::RedFlag, false);
    assert_eq!(unchecked.label, "NO");
    assert!(!unchecked.checked);
    let retest = Indicator::for_point(DispositionKind::Retest, true);
    assert_eq!(retest.color, IndicatorColor::Amber);
}

#[test]
fn subquestion_region_follows_result() {
    let registry = ProtocolRegistry::builtin().unwrap();
    let protocol = registry.get("A-1").unwrap();
    let presenter = Presenter::new(PanelRegistry::for_protocol(protocol, str::to_string));
    let mut board = PanelBoard::new();

    let mut controls = ControlState::with_registered(protocol.control_ids());
    for id in ["cent1", "cent2", "cent3"] {
        controls.set(id, true);
    }
    let result = evaluate(protocol, &controls);
    presenter.present(protocol, &result, &controls, true, &mut board);
    assert!(board.region_visible("strep-test"));

    controls.set("cent3", false);
    let result = evaluate(protocol, &controls);
    presenter.present(protocol, &result, &controls, true, &mut board);
    assert!(!board.region_visible("strep-test"));
}
