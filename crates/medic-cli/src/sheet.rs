use std::io::{self, Write};

use medic_core::models::controls::ControlState;
use medic_core::models::protocol::{Protocol, Trigger};
use medic_engine::evaluator::trigger_met;
use medic_engine::presenter::{Indicator, PanelState};
use medic_engine::session::Session;

/// Print an open protocol sheet: questions with their answers, the
/// follow-up group, and the visible disposition panel.
pub fn write_sheet(out: &mut impl Write, session: &Session, show_indicators: bool) -> io::Result<()> {
    let protocol = session.protocol();
    let controls = session.controls();
    let result = session.result();

    writeln!(out, "{} {}", protocol.code, protocol.title)?;
    for dp in protocol.ranked() {
        let mark = if show_indicators {
            let checked = trigger_met(&dp.trigger, &dp.key, controls);
            format!("[{:<3}] ", Indicator::for_point(dp.kind, checked).label)
        } else {
            String::new()
        };
        writeln!(out, "  {mark}{:<10} {}", dp.key, dp.label)?;
        write_trigger(out, protocol, controls, &dp.trigger)?;
    }

    if let Some(rule) = &protocol.subquestion {
        writeln!(out, "  Follow-up ({}):", rule.region)?;
        write_trigger(out, protocol, controls, &rule.trigger)?;
        if result.subquestion_visible {
            writeln!(out, "  >> {}", rule.prompt)?;
        }
    }
    if let Some(count) = result.threshold_count {
        writeln!(out, "  Criteria count: {count}")?;
    }

    writeln!(out)?;
    write_panel(out, protocol, session.state())
}

pub fn write_panel(out: &mut impl Write, protocol: &Protocol, state: &PanelState) -> io::Result<()> {
    match state {
        PanelState::Shown(key) => {
            let title = if protocol.is_fallback(key) {
                "Minor-care protocol / return to duty"
            } else {
                protocol
                    .decision_point(key)
                    .map_or(key.as_str(), |dp| dp.label.as_str())
            };
            writeln!(out, "Disposition [{key}]: {title}")?;
            for line in protocol.text_for(key) {
                writeln!(out, "  {line}")?;
            }
            Ok(())
        }
        PanelState::AwaitingScreening => {
            writeln!(out, "Disposition pending screening confirmation.")
        }
        PanelState::Missing(key) => {
            writeln!(out, "No disposition panel available for '{key}'.")
        }
    }
}

fn write_trigger(
    out: &mut impl Write,
    protocol: &Protocol,
    controls: &ControlState,
    trigger: &Trigger,
) -> io::Result<()> {
    match trigger {
        Trigger::Checkbox => Ok(()),
        Trigger::Control { id } => {
            writeln!(out, "      {} {id}", checkbox(controls.is_checked(id)))
        }
        Trigger::Threshold {
            members,
            minimum,
            reset,
        } => {
            writeln!(out, "      {minimum} or more of:")?;
            for id in members.iter().chain(reset) {
                writeln!(
                    out,
                    "        {} {:<8} {}",
                    checkbox(controls.is_checked(id)),
                    id,
                    protocol.control_label(id).unwrap_or_default()
                )?;
            }
            Ok(())
        }
    }
}

fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}
