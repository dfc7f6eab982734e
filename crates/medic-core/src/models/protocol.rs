use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Key of the routine disposition ("return to duty") when a protocol does
/// not name its own.
pub const DEFAULT_FALLBACK_KEY: &str = "rtd";

fn default_fallback() -> String {
    DEFAULT_FALLBACK_KEY.to_string()
}

/// What kind of disposition a decision point leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DispositionKind {
    /// Escalate immediately. Always listed first.
    RedFlag,
    /// Referral or treatment branch (DP1..DPn).
    Disposition,
    /// Re-examine after a short interval.
    Retest,
    /// Routine disposition shown when nothing else applies. Has no control.
    Fallback,
}

/// How a decision point (or a subquestion group) decides it is "checked".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum Trigger {
    /// The control whose id equals the owner's key.
    #[default]
    Checkbox,
    /// A control with a different id.
    Control { id: String },
    /// At least `minimum` of `members` are checked. A checked `reset`
    /// control forces the count to zero.
    Threshold {
        members: Vec<String>,
        minimum: usize,
        #[serde(default)]
        reset: Option<String>,
    },
}

impl Trigger {
    /// Every control id this trigger reads. `own_key` is the id a
    /// [`Trigger::Checkbox`] resolves to.
    pub fn control_ids<'a>(&'a self, own_key: &'a str) -> Vec<&'a str> {
        match self {
            Trigger::Checkbox => vec![own_key],
            Trigger::Control { id } => vec![id.as_str()],
            Trigger::Threshold { members, reset, .. } => members
                .iter()
                .map(String::as_str)
                .chain(reset.as_deref())
                .collect(),
        }
    }
}

/// One row of a protocol's priority list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DecisionPoint {
    pub key: String,
    /// The question shown next to the control.
    pub label: String,
    pub kind: DispositionKind,
    /// Guidance shown in this decision point's disposition panel.
    #[serde(default)]
    pub text: Vec<String>,
    #[serde(default)]
    pub trigger: Trigger,
}

impl DecisionPoint {
    pub fn control_ids(&self) -> Vec<&str> {
        match self.kind {
            DispositionKind::Fallback => Vec::new(),
            _ => self.trigger.control_ids(&self.key),
        }
    }
}

/// A dependent question group revealed when its trigger is met, regardless
/// of which decision point ends up active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubquestionRule {
    /// Id of the region to reveal. A `Checkbox` trigger reads the control
    /// with this id.
    pub region: String,
    pub prompt: String,
    pub trigger: Trigger,
}

/// One symptom algorithm ("ADT sheet").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Protocol {
    pub code: String,
    pub title: String,
    /// Letter code of the body-region category this protocol belongs to.
    pub category: String,
    /// Priority order: index 0 wins.
    pub decision_points: Vec<DecisionPoint>,
    #[serde(default = "default_fallback")]
    pub fallback: String,
    /// Minor-care protocol and return precautions.
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub subquestion: Option<SubquestionRule>,
    /// Fallback disposition stays hidden until screening is acknowledged.
    #[serde(default)]
    pub requires_screening: bool,
    /// Labels of controls that are not decision points themselves, such as
    /// threshold members or subquestion answers.
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
}

impl Protocol {
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn decision_point(&self, key: &str) -> Option<&DecisionPoint> {
        self.decision_points.iter().find(|dp| dp.key == key)
    }

    /// Decision points taking part in the priority scan, highest first.
    pub fn ranked(&self) -> impl Iterator<Item = &DecisionPoint> {
        self.decision_points
            .iter()
            .filter(|dp| dp.kind != DispositionKind::Fallback)
    }

    /// Every key that owns a disposition panel, fallback included.
    pub fn panel_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.decision_points.iter().map(|dp| dp.key.as_str()).collect();
        if !keys.contains(&self.fallback.as_str()) {
            keys.push(self.fallback.as_str());
        }
        keys
    }

    /// Every control id read by this protocol's triggers.
    pub fn control_ids(&self) -> BTreeSet<&str> {
        let mut ids: BTreeSet<&str> = self
            .decision_points
            .iter()
            .flat_map(DecisionPoint::control_ids)
            .collect();
        if let Some(rule) = &self.subquestion {
            ids.extend(rule.trigger.control_ids(&rule.region));
        }
        ids
    }

    /// Panel text for `key`. The fallback key falls back to the protocol
    /// instructions; unknown keys yield no text.
    pub fn text_for(&self, key: &str) -> &[String] {
        match self.decision_point(key) {
            Some(dp) if !dp.text.is_empty() => dp.text.as_slice(),
            _ if key == self.fallback => self.instructions.as_slice(),
            _ => &[],
        }
    }

    /// Label shown next to control `id`.
    pub fn control_label(&self, id: &str) -> Option<&str> {
        self.labels
            .get(id)
            .map(String::as_str)
            .or_else(|| self.decision_point(id).map(|dp| dp.label.as_str()))
    }

    pub fn is_fallback(&self, key: &str) -> bool {
        key == self.fallback
    }
}
