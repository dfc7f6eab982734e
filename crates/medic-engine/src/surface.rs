use std::collections::{BTreeMap, BTreeSet};

use crate::presenter::{Indicator, Surface};

/// In-memory [`Surface`] that records the visible state of one sheet.
///
/// Panels are addressed by string id. Used by the terminal renderer and
/// to observe presenter output.
#[derive(Debug, Clone, Default)]
pub struct PanelBoard {
    visible: BTreeSet<String>,
    regions: BTreeMap<String, bool>,
    indicators: BTreeMap<String, Indicator>,
}

impl PanelBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visible_panels(&self) -> impl Iterator<Item = &str> {
        self.visible.iter().map(String::as_str)
    }

    pub fn is_visible(&self, panel: &str) -> bool {
        self.visible.contains(panel)
    }

    pub fn region_visible(&self, region: &str) -> bool {
        self.regions.get(region).copied().unwrap_or(false)
    }

    pub fn indicator(&self, key: &str) -> Option<Indicator> {
        self.indicators.get(key).copied()
    }

    pub fn indicators(&self) -> impl Iterator<Item = (&str, Indicator)> {
        self.indicators.iter().map(|(k, i)| (k.as_str(), *i))
    }

    /// Forget everything, e.g. when another protocol is opened.
    pub fn clear(&mut self) {
        self.visible.clear();
        self.regions.clear();
        self.indicators.clear();
    }
}

impl Surface for PanelBoard {
    type Handle = String;

    fn show_panel(&mut self, handle: &String) {
        self.visible.insert(handle.clone());
    }

    fn hide_panel(&mut self, handle: &String) {
        self.visible.remove(handle);
    }

    fn set_region_visible(&mut self, region: &str, visible: bool) {
        self.regions.insert(region.to_string(), visible);
    }

    fn set_indicator(&mut self, key: &str, indicator: Indicator) {
        self.indicators.insert(key.to_string(), indicator);
    }
}
