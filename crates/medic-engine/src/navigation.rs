use serde::Serialize;

use medic_core::models::category::CategoryMenu;
use medic_core::models::protocol::Protocol;
use medic_protocols::registry::ProtocolRegistry;

use crate::error::EngineError;

/// One screen of the navigation shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", content = "code", rename_all = "snake_case")]
pub enum View {
    Home,
    Category(String),
    Protocol(String),
}

static HOME: View = View::Home;

/// Category → protocol navigation with back support.
pub struct Navigator<'r> {
    registry: &'r ProtocolRegistry,
    stack: Vec<View>,
}

impl<'r> Navigator<'r> {
    pub fn new(registry: &'r ProtocolRegistry) -> Self {
        Self {
            registry,
            stack: vec![View::Home],
        }
    }

    pub fn current(&self) -> &View {
        self.stack.last().unwrap_or(&HOME)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn registry(&self) -> &'r ProtocolRegistry {
        self.registry
    }

    /// Open a category menu. Always starts again from the home screen.
    pub fn select_category(&mut self, code: &str) -> Result<&'r CategoryMenu, EngineError> {
        let menu = self.registry.menu(code)?;
        self.stack.truncate(1);
        self.stack.push(View::Category(menu.code.clone()));
        tracing::info!(category = %menu.code, "category selected");
        Ok(menu)
    }

    /// Open a protocol. From a category screen the protocol must be listed
    /// there; from home it opens directly under its own category; from
    /// another protocol it replaces that protocol.
    pub fn select_protocol(&mut self, code: &str) -> Result<&'r Protocol, EngineError> {
        let protocol = self.registry.get(code)?;

        let mut base = self.stack.len();
        if matches!(self.current(), View::Protocol(_)) {
            base -= 1;
        }
        let parent = base
            .checked_sub(1)
            .and_then(|i| self.stack.get(i))
            .cloned()
            .unwrap_or(View::Home);

        match parent {
            View::Category(category) => {
                let listed = self.registry.menu(&category)?.protocols.iter().any(|c| c == code);
                if !listed {
                    return Err(EngineError::NotInCategory {
                        protocol: code.to_string(),
                        category,
                    });
                }
                self.stack.truncate(base);
            }
            _ => {
                self.stack.truncate(1);
                self.stack.push(View::Category(protocol.category.clone()));
            }
        }

        self.stack.push(View::Protocol(protocol.code.clone()));
        tracing::info!(protocol = %protocol.code, "protocol selected");
        Ok(protocol)
    }

    /// Step back one screen. Home is the floor.
    pub fn back(&mut self) -> &View {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
        self.current()
    }

    /// Code of the protocol on screen, if any.
    pub fn open_protocol(&self) -> Option<&str> {
        match self.current() {
            View::Protocol(code) => Some(code.as_str()),
            _ => None,
        }
    }
}
