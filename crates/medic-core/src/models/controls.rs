use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Checked state of every control on the current protocol sheet.
///
/// The UI owns this state; evaluation only reads it. A control is
/// "registered" once it has an entry, checked or not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ControlState {
    controls: BTreeMap<String, bool>,
}

impl ControlState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every id as unchecked.
    pub fn with_registered<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        let mut state = Self::new();
        for id in ids {
            state.register(id);
        }
        state
    }

    /// Shorthand for a state where exactly `ids` are registered and checked.
    pub fn with_checked<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        ids.into_iter().map(|id| (id.to_string(), true)).collect()
    }

    /// Register `id` as unchecked unless it is already known.
    pub fn register(&mut self, id: &str) {
        self.controls.entry(id.to_string()).or_insert(false);
    }

    /// Set a control, registering it if needed. Returns the previous value.
    pub fn set(&mut self, id: &str, checked: bool) -> Option<bool> {
        self.controls.insert(id.to_string(), checked)
    }

    pub fn is_checked(&self, id: &str) -> bool {
        self.controls.get(id).copied().unwrap_or(false)
    }

    pub fn is_registered(&self, id: &str) -> bool {
        self.controls.contains_key(id)
    }

    pub fn checked_ids(&self) -> impl Iterator<Item = &str> {
        self.controls
            .iter()
            .filter(|(_, checked)| **checked)
            .map(|(id, _)| id.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.controls.iter().map(|(id, checked)| (id.as_str(), *checked))
    }

    pub fn clear(&mut self) {
        for checked in self.controls.values_mut() {
            *checked = false;
        }
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }
}

impl FromIterator<(String, bool)> for ControlState {
    fn from_iter<T: IntoIterator<Item = (String, bool)>>(iter: T) -> Self {
        Self {
            controls: iter.into_iter().collect(),
        }
    }
}
