use serde::Serialize;

use medic_core::models::controls::ControlState;
use medic_core::models::evaluation::EvaluationResult;
use medic_core::models::protocol::{DispositionKind, Protocol};

use crate::evaluator::trigger_met;

/// Color of a decision point's status indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorColor {
    Neutral,
    Amber,
    Red,
}

/// The "YES"/"NO" label and color shown beside a decision point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Indicator {
    pub checked: bool,
    pub label: &'static str,
    pub color: IndicatorColor,
}

impl Indicator {
    pub fn for_point(kind: DispositionKind, checked: bool) -> Self {
        let color = match (checked, kind) {
            (false, _) => IndicatorColor::Neutral,
            (true, DispositionKind::RedFlag) => IndicatorColor::Red,
            (true, _) => IndicatorColor::Amber,
        };
        Self {
            checked,
            label: if checked { "YES" } else { "NO" },
            color,
        }
    }
}

/// Output side of the presenter: whatever draws panels.
pub trait Surface {
    /// Opaque reference to one disposition panel.
    type Handle;

    fn show_panel(&mut self, handle: &Self::Handle);

    fn hide_panel(&mut self, handle: &Self::Handle);

    fn set_region_visible(&mut self, region: &str, visible: bool);

    fn set_indicator(&mut self, key: &str, indicator: Indicator);
}

/// Decision-point key to panel handle, scoped to one protocol.
#[derive(Debug, Clone)]
pub struct PanelRegistry<H> {
    panels: Vec<(String, H)>,
}

impl<H> Default for PanelRegistry<H> {
    fn default() -> Self {
        Self { panels: Vec::new() }
    }
}

impl<H> PanelRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// One handle per panel key of `protocol`, fallback included.
    pub fn for_protocol(protocol: &Protocol, mut make_handle: impl FnMut(&str) -> H) -> Self {
        let mut registry = Self::new();
        for key in protocol.panel_keys() {
            let handle = make_handle(key);
            registry.insert(key, handle);
        }
        registry
    }

    /// Register a handle, replacing any previous one for `key`.
    pub fn insert(&mut self, key: &str, handle: H) {
        match self.panels.iter_mut().find(|(k, _)| k == key) {
            Some(slot) => slot.1 = handle,
            None => self.panels.push((key.to_string(), handle)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&H> {
        self.panels.iter().find(|(k, _)| k == key).map(|(_, h)| h)
    }

    pub fn handles(&self) -> impl Iterator<Item = &H> {
        self.panels.iter().map(|(_, h)| h)
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}

/// What the presenter ended up showing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "key", rename_all = "snake_case")]
pub enum PanelState {
    /// The panel for this key is the only one visible.
    Shown(String),
    /// Nothing is checked and the fallback waits on the screening gate.
    AwaitingScreening,
    /// The active key has no registered panel; everything stays hidden.
    Missing(String),
}

impl PanelState {
    pub fn visible_key(&self) -> Option<&str> {
        match self {
            PanelState::Shown(key) => Some(key.as_str()),
            _ => None,
        }
    }
}

/// Applies evaluation results to a [`Surface`] through a protocol's
/// [`PanelRegistry`].
#[derive(Debug, Clone)]
pub struct Presenter<H> {
    panels: PanelRegistry<H>,
}

impl<H> Presenter<H> {
    pub fn new(panels: PanelRegistry<H>) -> Self {
        Self { panels }
    }

    /// Hide every panel, then show the active one.
    ///
    /// The fallback panel stays hidden while `gate_open` is false. A
    /// missing handle is logged and leaves all panels hidden.
    pub fn present<S>(
        &self,
        protocol: &Protocol,
        result: &EvaluationResult,
        controls: &ControlState,
        gate_open: bool,
        surface: &mut S,
    ) -> PanelState
    where
        S: Surface<Handle = H>,
    {
        for handle in self.panels.handles() {
            surface.hide_panel(handle);
        }

        let state = if protocol.is_fallback(&result.active) && !gate_open {
            PanelState::AwaitingScreening
        } else {
            match self.panels.get(&result.active) {
                Some(handle) => {
                    surface.show_panel(handle);
                    PanelState::Shown(result.active.clone())
                }
                None => {
                    tracing::warn!(
                        protocol = %protocol.code,
                        key = %result.active,
                        "no panel registered for active decision point"
                    );
                    PanelState::Missing(result.active.clone())
                }
            }
        };

        if let Some(rule) = &protocol.subquestion {
            surface.set_region_visible(&rule.region, result.subquestion_visible);
        }

        for dp in protocol.ranked() {
            let checked = trigger_met(&dp.trigger, &dp.key, controls);
            surface.set_indicator(&dp.key, Indicator::for_point(dp.kind, checked));
        }

        state
    }
}
