//! medic-protocols
//!
//! The protocol registry: every algorithm sheet, grouped by body-region
//! category. Pure data plus validation; the evaluator lives in
//! `medic-engine`.

pub mod builder;
pub mod categories;
pub mod error;
pub mod overlay;
pub mod registry;
pub mod validate;

use medic_core::models::category::CategoryMenu;
use medic_core::models::protocol::Protocol;

/// Trait implemented by each body-region category of the menu.
pub trait Category: Send + Sync {
    /// Letter code (e.g., "A").
    fn code(&self) -> &str;

    /// Menu title (e.g., "Ear, Nose, Throat").
    fn title(&self) -> &str;

    /// Protocols of this category in menu order.
    fn protocols(&self) -> &[Protocol];

    fn find(&self, code: &str) -> Option<&Protocol> {
        self.protocols().iter().find(|p| p.code == code)
    }

    /// Menu entry listing this category's protocols.
    fn menu(&self) -> CategoryMenu {
        CategoryMenu {
            code: self.code().to_string(),
            title: self.title().to_string(),
            protocols: self.protocols().iter().map(|p| p.code.clone()).collect(),
        }
    }

    /// Format the category as an indented outline of protocols and their
    /// questions.
    fn to_outline(&self) -> String {
        let mut output = format!("{}: {}\n", self.code(), self.title());
        for protocol in self.protocols() {
            output.push_str(&format!("  {} {}\n", protocol.code, protocol.title));
            for dp in protocol.ranked() {
                output.push_str(&format!("    [{}] {}\n", dp.key, dp.label));
            }
        }
        output
    }
}

/// Return all built-in categories in menu order.
pub fn all_categories() -> Vec<Box<dyn Category>> {
    vec![
        Box::new(categories::ent::Ent),
        Box::new(categories::musculoskeletal::Musculoskeletal),
        Box::new(categories::gastrointestinal::Gastrointestinal),
        Box::new(categories::cardiorespiratory::Cardiorespiratory),
        Box::new(categories::genitourinary::Genitourinary),
        Box::new(categories::neurological::Neurological),
        Box::new(categories::constitutional::Constitutional),
        Box::new(categories::eye::Eye),
        Box::new(categories::gynecological::Gynecological),
        Box::new(categories::dermatological::Dermatological),
        Box::new(categories::environmental::Environmental),
        Box::new(categories::miscellaneous::Miscellaneous),
    ]
}

/// Look up a built-in category by letter code.
pub fn get_category(code: &str) -> Option<Box<dyn Category>> {
    all_categories().into_iter().find(|c| c.code() == code)
}
