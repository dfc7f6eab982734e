use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use medic_core::models::category::CategoryMenu;
use medic_core::models::protocol::Protocol;

use crate::error::{ConfigIssue, ProtocolError};

/// Extra or replacement protocol data loaded from JSON.
///
/// ```json
/// {
///   "categories": [{"code": "M", "title": "Local", "protocols": ["M-1"]}],
///   "protocols": [{
///     "code": "M-1", "title": "...", "category": "M",
///     "decision_points": [{"key": "rtd", "label": "...", "kind": "fallback"}]
///   }]
/// }
/// ```
///
/// New protocols must be listed in a menu, either an overlay category or an
/// entry merged into an existing one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Overlay {
    #[serde(default)]
    pub categories: Vec<CategoryMenu>,
    #[serde(default)]
    pub protocols: Vec<Protocol>,
}

impl Overlay {
    pub fn from_json(json: &str) -> Result<Self, ProtocolError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ProtocolError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ProtocolError::OverlayRead {
            path: path.to_path_buf(),
            source,
        })?;
        let overlay = Self::from_json(&contents)?;
        tracing::info!(
            path = %path.display(),
            protocols = overlay.protocols.len(),
            categories = overlay.categories.len(),
            "loaded protocol overlay"
        );
        Ok(overlay)
    }

    /// Codes defined more than once inside this overlay. Replacing a
    /// built-in is allowed; two overlay entries for one code are not.
    pub fn duplicates(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        let mut categories = BTreeSet::new();
        for menu in &self.categories {
            if !categories.insert(menu.code.as_str()) {
                issues.push(ConfigIssue::DuplicateCategory {
                    code: menu.code.clone(),
                });
            }
        }

        let mut protocols = BTreeSet::new();
        for protocol in &self.protocols {
            if !protocols.insert(protocol.code.as_str()) {
                issues.push(ConfigIssue::DuplicateProtocol {
                    code: protocol.code.clone(),
                });
            }
        }

        issues
    }

    /// Merge into an existing menu and protocol set. Protocols replace
    /// built-ins with the same code; menu entries are appended to the
    /// category with the same code, or added as a new category.
    ///
    /// Nothing is merged when the overlay defines a code twice.
    pub fn apply(
        self,
        menus: &mut Vec<CategoryMenu>,
        protocols: &mut Vec<Protocol>,
    ) -> Result<(), ProtocolError> {
        let issues = self.duplicates();
        if !issues.is_empty() {
            return Err(ProtocolError::Invalid(issues));
        }

        for protocol in self.protocols {
            match protocols.iter_mut().find(|p| p.code == protocol.code) {
                Some(existing) => {
                    tracing::debug!(code = %protocol.code, "overlay replaces protocol");
                    *existing = protocol;
                }
                None => protocols.push(protocol),
            }
        }

        for menu in self.categories {
            match menus.iter_mut().find(|m| m.code == menu.code) {
                Some(existing) => {
                    for code in menu.protocols {
                        if !existing.protocols.contains(&code) {
                            existing.protocols.push(code);
                        }
                    }
                }
                None => menus.push(menu),
            }
        }
        Ok(())
    }
}
