use std::collections::BTreeMap;

use medic_core::models::category::CategoryMenu;
use medic_core::models::protocol::Protocol;

use crate::all_categories;
use crate::error::ProtocolError;
use crate::overlay::Overlay;
use crate::validate::validate;

/// Validated table of protocols keyed by code, plus the category menus
/// that reach them. Immutable once built.
#[derive(Debug, Clone)]
pub struct ProtocolRegistry {
    menus: Vec<CategoryMenu>,
    protocols: BTreeMap<String, Protocol>,
}

impl ProtocolRegistry {
    /// Registry over the built-in categories.
    pub fn builtin() -> Result<Self, ProtocolError> {
        let (menus, protocols) = builtin_parts();
        Self::from_parts(menus, protocols)
    }

    /// Built-in categories with `overlay` merged on top.
    pub fn with_overlay(overlay: Overlay) -> Result<Self, ProtocolError> {
        let (mut menus, mut protocols) = builtin_parts();
        if let Err(err) = overlay.apply(&mut menus, &mut protocols) {
            tracing::warn!(%err, "protocol overlay rejected");
            return Err(err);
        }
        Self::from_parts(menus, protocols)
    }

    /// Validate and index. Any configuration problem rejects the whole set.
    pub fn from_parts(
        menus: Vec<CategoryMenu>,
        protocols: Vec<Protocol>,
    ) -> Result<Self, ProtocolError> {
        let issues = validate(&menus, &protocols);
        if !issues.is_empty() {
            for issue in &issues {
                tracing::warn!(%issue, "protocol configuration problem");
            }
            return Err(ProtocolError::Invalid(issues));
        }

        let protocols: BTreeMap<String, Protocol> = protocols
            .into_iter()
            .map(|p| (p.code.clone(), p))
            .collect();

        tracing::info!(
            categories = menus.len(),
            protocols = protocols.len(),
            "protocol registry loaded"
        );
        Ok(Self { menus, protocols })
    }

    pub fn menus(&self) -> &[CategoryMenu] {
        &self.menus
    }

    pub fn menu(&self, category: &str) -> Result<&CategoryMenu, ProtocolError> {
        self.menus
            .iter()
            .find(|m| m.code == category)
            .ok_or_else(|| ProtocolError::UnknownCategory(category.to_string()))
    }

    pub fn get(&self, code: &str) -> Result<&Protocol, ProtocolError> {
        self.protocols
            .get(code)
            .ok_or_else(|| ProtocolError::UnknownProtocol(code.to_string()))
    }

    /// Protocols of a category in menu order.
    pub fn protocols_in(&self, category: &str) -> Result<Vec<&Protocol>, ProtocolError> {
        let menu = self.menu(category)?;
        Ok(menu
            .protocols
            .iter()
            .filter_map(|code| self.protocols.get(code))
            .collect())
    }

    /// Every protocol in menu order.
    pub fn protocols(&self) -> impl Iterator<Item = &Protocol> {
        self.menus
            .iter()
            .flat_map(|m| &m.protocols)
            .filter_map(|code| self.protocols.get(code))
    }

    pub fn len(&self) -> usize {
        self.protocols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.protocols.is_empty()
    }
}

fn builtin_parts() -> (Vec<CategoryMenu>, Vec<Protocol>) {
    let categories = all_categories();
    let menus = categories.iter().map(|c| c.menu()).collect();
    let protocols = categories
        .iter()
        .flat_map(|c| c.protocols().iter().cloned())
        .collect();
    (menus, protocols)
}
