use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A body-region entry of the navigation menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryMenu {
    pub code: String,
    pub title: String,
    /// Protocol codes in menu order.
    pub protocols: Vec<String>,
}
