use std::io::Write;

use medic_engine::session::Session;
use medic_engine::surface::PanelBoard;
use medic_export::note::DispositionNote;
use medic_export::render::{render_default, render_note};
use medic_protocols::error::ProtocolError;
use medic_protocols::overlay::Overlay;
use medic_protocols::registry::ProtocolRegistry;

use crate::config::MedicConfig;
use crate::sheet::write_sheet;

/// Built-in protocols, with the configured overlay merged on top.
pub fn try_registry(config: &MedicConfig) -> Result<ProtocolRegistry, ProtocolError> {
    match &config.overlay_path {
        Some(path) => ProtocolRegistry::with_overlay(Overlay::load(path)?),
        None => ProtocolRegistry::builtin(),
    }
}

pub fn load_registry(config: &MedicConfig) -> eyre::Result<ProtocolRegistry> {
    Ok(try_registry(config)?)
}

pub fn list_categories(registry: &ProtocolRegistry, out: &mut impl Write) -> eyre::Result<()> {
    for menu in registry.menus() {
        writeln!(
            out,
            "{:<3} {:<20} {} protocols",
            menu.code,
            menu.title,
            menu.protocols.len()
        )?;
    }
    Ok(())
}

pub fn list_protocols(
    registry: &ProtocolRegistry,
    category: &str,
    out: &mut impl Write,
) -> eyre::Result<()> {
    let menu = registry.menu(category)?;
    writeln!(out, "{}: {}", menu.code, menu.title)?;
    for protocol in registry.protocols_in(category)? {
        writeln!(out, "  {:<5} {}", protocol.code, protocol.title)?;
    }
    Ok(())
}

/// Print a protocol's full content: every decision point with its text.
pub fn show_protocol(
    registry: &ProtocolRegistry,
    code: &str,
    out: &mut impl Write,
) -> eyre::Result<()> {
    let protocol = registry.get(code)?;
    writeln!(out, "{} {}", protocol.code, protocol.title)?;
    if protocol.requires_screening {
        writeln!(out, "(screening confirmation required before minor care)")?;
    }
    for (rank, dp) in protocol.ranked().enumerate() {
        writeln!(out)?;
        writeln!(out, "{}. [{}] {}", rank + 1, dp.key, dp.label)?;
        for line in protocol.text_for(&dp.key) {
            writeln!(out, "     {line}")?;
        }
    }
    writeln!(out)?;
    writeln!(out, "Minor care / return to duty [{}]:", protocol.fallback)?;
    for line in protocol.text_for(&protocol.fallback) {
        writeln!(out, "     {line}")?;
    }
    Ok(())
}

/// Arguments of a one-shot evaluation.
#[derive(Debug, Clone, Default)]
pub struct EvaluateArgs {
    pub code: String,
    pub checks: Vec<String>,
    pub screened: bool,
    pub note: bool,
    pub json: bool,
}

pub fn evaluate(
    registry: &ProtocolRegistry,
    config: &MedicConfig,
    args: &EvaluateArgs,
    out: &mut impl Write,
) -> eyre::Result<()> {
    let protocol = registry.get(&args.code)?;
    let mut board = PanelBoard::new();
    let mut session = Session::open(protocol, &mut board);

    for id in &args.checks {
        if !session.controls().is_registered(id) {
            let known: Vec<&str> = protocol.control_ids().into_iter().collect();
            return Err(eyre::eyre!(
                "unknown control '{id}' for {}; expected one of: {}",
                protocol.code,
                known.join(", ")
            ));
        }
        session.set_control(id, true, &mut board);
    }
    if args.screened {
        session.acknowledge_screening(&mut board);
    }

    if args.json {
        let body = serde_json::json!({
            "protocol": protocol.code,
            "result": session.result(),
            "panel": session.state(),
        });
        serde_json::to_writer_pretty(&mut *out, &body)?;
        writeln!(out)?;
    } else {
        write_sheet(out, &session, config.show_indicators)?;
    }

    if args.note {
        let note = DispositionNote::from_session(&session);
        writeln!(out)?;
        write!(out, "{}", render_configured_note(config, &note)?)?;
    }
    Ok(())
}

/// Render a note with the configured template, or the built-in one.
pub fn render_configured_note(config: &MedicConfig, note: &DispositionNote) -> eyre::Result<String> {
    let rendered = match &config.note_template {
        Some(path) => {
            let content = std::fs::read_to_string(path).map_err(|e| {
                eyre::eyre!("failed to read note template at {}: {e}", path.display())
            })?;
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("note_template");
            render_note(name, &content, note)?
        }
        None => render_default(note)?,
    };
    Ok(rendered)
}

/// Validate the configured registry. Returns whether it is usable.
pub fn validate(config: &MedicConfig, out: &mut impl Write) -> eyre::Result<bool> {
    match try_registry(config) {
        Ok(registry) => {
            writeln!(
                out,
                "ok: {} protocols in {} categories",
                registry.len(),
                registry.menus().len()
            )?;
            Ok(true)
        }
        Err(ProtocolError::Invalid(issues)) => {
            for issue in &issues {
                writeln!(out, "error: {issue}")?;
            }
            writeln!(out, "{} problem(s) found", issues.len())?;
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}
