use std::io::{BufRead, Write};

use medic_engine::navigation::{Navigator, View};
use medic_engine::session::Session;
use medic_engine::surface::PanelBoard;
use medic_export::note::DispositionNote;
use medic_protocols::registry::ProtocolRegistry;

use crate::commands::{list_categories, list_protocols, render_configured_note};
use crate::config::MedicConfig;
use crate::sheet::write_sheet;

const HELP: &str = "\
Commands:
  <A>              open a category by letter
  <A-1>            open a protocol by code
  check <id>...    check controls on the open protocol
  uncheck <id>...  uncheck controls
  screen           confirm screening is complete
  reset            uncheck everything
  note             print a disposition note
  back             previous screen
  home             category list
  help             this text
  quit             leave";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Interactive navigation shell: category list, protocol menu, and the
/// open protocol sheet.
pub struct Shell<'r> {
    nav: Navigator<'r>,
    config: &'r MedicConfig,
    session: Option<Session>,
    board: PanelBoard,
}

impl<'r> Shell<'r> {
    pub fn new(registry: &'r ProtocolRegistry, config: &'r MedicConfig) -> Self {
        Self {
            nav: Navigator::new(registry),
            config,
            session: None,
            board: PanelBoard::new(),
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn view(&self) -> &View {
        self.nav.current()
    }

    /// Read commands until `quit` or end of input.
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> eyre::Result<()> {
        self.write_view(out)?;
        write!(out, "> ")?;
        out.flush()?;

        for line in input.lines() {
            let line = line?;
            if self.handle(&line, out)? == Flow::Quit {
                break;
            }
            write!(out, "> ")?;
            out.flush()?;
        }
        writeln!(out)?;
        Ok(())
    }

    /// Handle one input line. Navigation mistakes are reported to the user
    /// and never end the shell.
    pub fn handle(&mut self, line: &str, out: &mut impl Write) -> eyre::Result<Flow> {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Ok(Flow::Continue);
        };
        let args: Vec<&str> = words.collect();

        match command {
            "quit" | "exit" => return Ok(Flow::Quit),
            "help" | "?" => writeln!(out, "{HELP}")?,
            "home" => {
                while self.nav.depth() > 1 {
                    self.nav.back();
                }
                self.close_session();
                self.write_view(out)?;
            }
            "back" => {
                self.nav.back();
                if self.nav.open_protocol().is_none() {
                    self.close_session();
                }
                self.write_view(out)?;
            }
            "check" | "uncheck" => self.toggle(&args, command == "check", out)?,
            "screen" => match &mut self.session {
                Some(session) => {
                    session.acknowledge_screening(&mut self.board);
                    self.write_view(out)?;
                }
                None => writeln!(out, "Open a protocol first.")?,
            },
            "reset" => match &mut self.session {
                Some(session) => {
                    session.reset(&mut self.board);
                    self.write_view(out)?;
                }
                None => writeln!(out, "Open a protocol first.")?,
            },
            "note" => match &self.session {
                Some(session) => {
                    let note = DispositionNote::from_session(session);
                    write!(out, "{}", render_configured_note(self.config, &note)?)?;
                }
                None => writeln!(out, "Open a protocol first.")?,
            },
            code if code.contains('-') => self.open_protocol(code, out)?,
            code => self.open_category(code, out)?,
        }
        Ok(Flow::Continue)
    }

    fn open_category(&mut self, code: &str, out: &mut impl Write) -> eyre::Result<()> {
        match self.nav.select_category(&code.to_ascii_uppercase()) {
            Ok(_) => {
                self.close_session();
                self.write_view(out)?;
            }
            Err(e) => writeln!(out, "{e}. Type `help` for commands.")?,
        }
        Ok(())
    }

    fn open_protocol(&mut self, code: &str, out: &mut impl Write) -> eyre::Result<()> {
        match self.nav.select_protocol(&code.to_ascii_uppercase()) {
            Ok(protocol) => {
                self.board.clear();
                self.session = Some(Session::open(protocol, &mut self.board));
                self.write_view(out)?;
            }
            Err(e) => writeln!(out, "{e}")?,
        }
        Ok(())
    }

    fn toggle(&mut self, ids: &[&str], checked: bool, out: &mut impl Write) -> eyre::Result<()> {
        let Some(session) = &mut self.session else {
            writeln!(out, "Open a protocol first.")?;
            return Ok(());
        };
        if ids.is_empty() {
            writeln!(out, "Name at least one control.")?;
            return Ok(());
        }
        for id in ids {
            if session.controls().is_registered(id) {
                session.set_control(id, checked, &mut self.board);
            } else {
                writeln!(out, "Unknown control '{id}'.")?;
            }
        }
        self.write_view(out)
    }

    fn close_session(&mut self) {
        self.session = None;
        self.board.clear();
    }

    fn write_view(&self, out: &mut impl Write) -> eyre::Result<()> {
        match self.nav.current() {
            View::Home => list_categories(self.nav.registry(), out)?,
            View::Category(code) => list_protocols(self.nav.registry(), code, out)?,
            View::Protocol(_) => {
                if let Some(session) = &self.session {
                    write_sheet(out, session, self.config.show_indicators)?;
                }
            }
        }
        Ok(())
    }
}
