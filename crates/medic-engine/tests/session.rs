use medic_engine::presenter::PanelState;
use medic_engine::session::{panel_id, Session};
use medic_engine::surface::PanelBoard;
use medic_protocols::registry::ProtocolRegistry;

#[test]
fn opening_registers_controls_and_waits_for_screening() {
    let registry = ProtocolRegistry::builtin().unwrap();
    let mut board = PanelBoard::new();
    let session = Session::open(registry.get("A-1").unwrap(), &mut board);

    assert_eq!(*session.state(), PanelState::AwaitingScreening);
    assert!(session.controls().is_registered("cent5"));
    assert!(session.controls().is_registered("strep-positive"));
    assert_eq!(session.controls().checked_ids().count(), 0);
    assert_eq!(board.visible_panels().count(), 0);
}

#[test]
fn screening_acknowledgement_reveals_fallback() {
    let registry = ProtocolRegistry::builtin().unwrap();
    let mut board = PanelBoard::new();
    let mut session = Session::open(registry.get("A-1").unwrap(), &mut board);

    let state = session.acknowledge_screening(&mut board).clone();
    assert_eq!(state, PanelState::Shown("rtd".to_string()));
    assert!(board.is_visible(&panel_id("A-1", "rtd")));
}

#[test]
fn unscreened_protocol_shows_fallback_immediately() {
    let registry = ProtocolRegistry::builtin().unwrap();
    let mut board = PanelBoard::new();
    let session = Session::open(registry.get("A-2").unwrap(), &mut board);
    assert!(session.gate_open());
    assert_eq!(*session.state(), PanelState::Shown("rtd".to_string()));
}

#[test]
fn centor_reset_scenario() {
    let registry = ProtocolRegistry::builtin().unwrap();
    let mut board = PanelBoard::new();
    let mut session = Session::open(registry.get("A-1").unwrap(), &mut board);

    for id in ["cent1", "cent2", "cent3"] {
        session.set_control(id, true, &mut board);
    }
    assert_eq!(session.result().threshold_count, Some(3));
    assert!(board.region_visible("strep-test"));

    session.set_control("cent5", true, &mut board);
    assert_eq!(session.result().threshold_count, Some(0));
    assert!(!board.region_visible("strep-test"));
    assert_eq!(session.controls().checked_ids().count(), 4);
}

#[test]
fn each_toggle_leaves_a_consistent_board() {
    let registry = ProtocolRegistry::builtin().unwrap();
    let mut board = PanelBoard::new();
    let mut session = Session::open(registry.get("B-1").unwrap(), &mut board);

    session.set_control("dp3", true, &mut board);
    assert_eq!(board.visible_panels().collect::<Vec<_>>(), vec!["B-1/dp3"]);

    session.set_control("dp1", true, &mut board);
    assert_eq!(board.visible_panels().collect::<Vec<_>>(), vec!["B-1/dp1"]);

    session.set_control("red-flag", true, &mut board);
    assert_eq!(board.visible_panels().collect::<Vec<_>>(), vec!["B-1/red-flag"]);

    session.set_control("red-flag", false, &mut board);
    session.set_control("dp1", false, &mut board);
    assert_eq!(board.visible_panels().collect::<Vec<_>>(), vec!["B-1/dp3"]);
}

#[test]
fn unknown_control_is_ignored() {
    let registry = ProtocolRegistry::builtin().unwrap();
    let mut board = PanelBoard::new();
    let mut session = Session::open(registry.get("B-1").unwrap(), &mut board);

    let before = session.state().clone();
    let after = session.set_control("dp9", true, &mut board).clone();
    assert_eq!(before, after);
    assert!(!session.controls().is_registered("dp9"));
}

#[test]
fn reset_clears_controls_and_gate() {
    let registry = ProtocolRegistry::builtin().unwrap();
    let mut board = PanelBoard::new();
    let mut session = Session::open(registry.get("K-1").unwrap(), &mut board);

    session.set_control("red-flag", true, &mut board);
    session.acknowledge_screening(&mut board);
    let state = session.reset(&mut board).clone();

    assert_eq!(state, PanelState::AwaitingScreening);
    assert!(!session.screening_acknowledged());
    assert_eq!(board.visible_panels().count(), 0);
}
