use std::collections::BTreeMap;

use medic_core::models::protocol::{
    DecisionPoint, DispositionKind, Protocol, SubquestionRule, Trigger, DEFAULT_FALLBACK_KEY,
};

pub const RED_FLAG_KEY: &str = "red-flag";
pub const RETEST_KEY: &str = "retest";

/// Fluent construction of a [`Protocol`] for the built-in category tables.
///
/// Decision points are ranked in the order they are added. [`build`]
/// appends the fallback decision point last.
///
/// [`build`]: ProtocolBuilder::build
pub struct ProtocolBuilder {
    protocol: Protocol,
    fallback_label: String,
}

impl ProtocolBuilder {
    pub fn new(code: &str, title: &str) -> Self {
        let category = code.split('-').next().unwrap_or_default().to_string();
        Self {
            protocol: Protocol {
                code: code.to_string(),
                title: title.to_string(),
                category,
                decision_points: Vec::new(),
                fallback: DEFAULT_FALLBACK_KEY.to_string(),
                instructions: Vec::new(),
                subquestion: None,
                requires_screening: false,
                labels: BTreeMap::new(),
            },
            fallback_label: "No red flags or decision points present".to_string(),
        }
    }

    pub fn red_flag(self, label: &str, text: &[&str]) -> Self {
        self.push(RED_FLAG_KEY, label, DispositionKind::RedFlag, text, Trigger::Checkbox)
    }

    pub fn disposition(self, key: &str, label: &str, text: &[&str]) -> Self {
        self.push(key, label, DispositionKind::Disposition, text, Trigger::Checkbox)
    }

    /// A disposition driven by another control, e.g. the answer to a
    /// revealed subquestion.
    pub fn disposition_on(self, key: &str, control: &str, label: &str, text: &[&str]) -> Self {
        let trigger = Trigger::Control {
            id: control.to_string(),
        };
        self.push(key, label, DispositionKind::Disposition, text, trigger)
    }

    /// A disposition that activates once `minimum` of `members` are checked.
    pub fn threshold(
        self,
        key: &str,
        label: &str,
        members: &[&str],
        minimum: usize,
        reset: Option<&str>,
        text: &[&str],
    ) -> Self {
        let trigger = threshold_trigger(members, minimum, reset);
        self.push(key, label, DispositionKind::Disposition, text, trigger)
    }

    pub fn retest(self, label: &str, text: &[&str]) -> Self {
        self.push(RETEST_KEY, label, DispositionKind::Retest, text, Trigger::Checkbox)
    }

    pub fn subquestion(mut self, region: &str, prompt: &str, trigger: Trigger) -> Self {
        self.protocol.subquestion = Some(SubquestionRule {
            region: region.to_string(),
            prompt: prompt.to_string(),
            trigger,
        });
        self
    }

    /// Minor-care and return-precaution text shown with the fallback.
    pub fn instructions(mut self, text: &[&str]) -> Self {
        self.protocol.instructions = lines(text);
        self
    }

    pub fn fallback_label(mut self, label: &str) -> Self {
        self.fallback_label = label.to_string();
        self
    }

    /// Label a control that is not a decision point.
    pub fn label(mut self, id: &str, text: &str) -> Self {
        self.protocol.labels.insert(id.to_string(), text.to_string());
        self
    }

    /// Hide the fallback until screening is acknowledged.
    pub fn screening(mut self) -> Self {
        self.protocol.requires_screening = true;
        self
    }

    pub fn build(mut self) -> Protocol {
        self.protocol.decision_points.push(DecisionPoint {
            key: self.protocol.fallback.clone(),
            label: self.fallback_label,
            kind: DispositionKind::Fallback,
            text: Vec::new(),
            trigger: Trigger::Checkbox,
        });
        self.protocol
    }

    fn push(
        mut self,
        key: &str,
        label: &str,
        kind: DispositionKind,
        text: &[&str],
        trigger: Trigger,
    ) -> Self {
        self.protocol.decision_points.push(DecisionPoint {
            key: key.to_string(),
            label: label.to_string(),
            kind,
            text: lines(text),
            trigger,
        });
        self
    }
}

fn lines(text: &[&str]) -> Vec<String> {
    text.iter().map(|line| line.to_string()).collect()
}

/// Shorthand for a subquestion revealed by `minimum` of `members`.
pub fn threshold_trigger(members: &[&str], minimum: usize, reset: Option<&str>) -> Trigger {
    Trigger::Threshold {
        members: members.iter().map(|m| m.to_string()).collect(),
        minimum,
        reset: reset.map(str::to_string),
    }
}
