use medic_engine::session::Session;
use medic_engine::surface::PanelBoard;
use medic_export::error::ExportError;
use medic_export::note::DispositionNote;
use medic_export::render::{render_default, render_note};
use medic_protocols::registry::ProtocolRegistry;

fn fixed_time() -> jiff::Timestamp {
    "2026-03-01T12:00:00Z".parse().unwrap()
}

fn note_for(code: &str, checked: &[&str], screened: bool) -> DispositionNote {
    let registry = ProtocolRegistry::builtin().unwrap();
    let mut board = PanelBoard::new();
    let mut session = Session::open(registry.get(code).unwrap(), &mut board);
    for id in checked {
        session.set_control(id, true, &mut board);
    }
    if screened {
        session.acknowledge_screening(&mut board);
    }
    DispositionNote::build(
        session.protocol(),
        session.controls(),
        session.result(),
        session.state(),
        session.screening_acknowledged(),
        fixed_time(),
    )
}

#[test]
fn note_records_answers_and_disposition() {
    let note = note_for("B-1", &["dp2"], false);
    assert_eq!(note.answers.len(), 4);
    assert_eq!(note.answers[2].answer, "YES");
    assert_eq!(note.answers[0].answer, "NO");

    let disposition = note.disposition.unwrap();
    assert_eq!(disposition.key, "dp2");
    assert_eq!(disposition.text, vec!["Refer to the AEM/PA the same day."]);
}

#[test]
fn fallback_note_uses_protocol_instructions() {
    let note = note_for("A-1", &[], true);
    let disposition = note.disposition.unwrap();
    assert_eq!(disposition.key, "rtd");
    assert!(disposition.text[0].starts_with("Minor-care protocol"));
}

#[test]
fn unscreened_note_has_no_disposition() {
    let note = note_for("A-1", &[], false);
    assert!(note.disposition.is_none());
    assert!(note.awaiting_screening);

    let text = render_default(&note).unwrap();
    assert!(text.contains("pending screening confirmation"));
}

#[test]
fn default_template_renders_note() {
    let note = note_for("A-1", &["cent1", "cent2", "cent3", "red-flag"], false);
    let text = render_default(&note).unwrap();

    assert!(text.starts_with("A-1 Sore Throat/Hoarseness"));
    assert!(text.contains("Generated 2026-03-01T12:00:00Z"));
    assert!(text.contains("[YES] Unable to swallow saliva"));
    assert!(text.contains("[NO] Rapid strep test positive"));
    assert!(text.contains("Criteria met: 3"));
    assert!(text.contains("Follow-up: Three or more Centor criteria"));
    assert!(text.contains("Refer to the supervising provider NOW."));
}

#[test]
fn custom_template_sees_note_fields() {
    let note = note_for("K-1", &["heat1", "heat3"], false);
    let text = render_note(
        "short",
        "{{ protocol_code }}: {{ disposition.key }} ({{ answers | length }} questions)",
        &note,
    )
    .unwrap();
    assert_eq!(text, "K-1: dp1 (3 questions)");
}

#[test]
fn broken_template_is_a_parse_error() {
    let note = note_for("L-2", &[], false);
    let err = render_note("broken", "{% if %}", &note).unwrap_err();
    assert!(matches!(err, ExportError::TemplateParse(_)));
}
