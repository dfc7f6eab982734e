use serde::Serialize;

use medic_core::models::controls::ControlState;
use medic_core::models::evaluation::EvaluationResult;
use medic_core::models::protocol::{DispositionKind, Protocol};
use medic_engine::evaluator::trigger_met;
use medic_engine::presenter::{Indicator, PanelState};
use medic_engine::session::Session;

/// One decision point and the answer recorded for it.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerLine {
    pub key: String,
    pub label: String,
    pub kind: DispositionKind,
    pub answer: &'static str,
}

/// The disposition that was on screen.
#[derive(Debug, Clone, Serialize)]
pub struct DispositionSummary {
    pub key: String,
    pub label: String,
    pub kind: DispositionKind,
    pub text: Vec<String>,
}

/// Everything needed to document one pass through a protocol sheet.
#[derive(Debug, Clone, Serialize)]
pub struct DispositionNote {
    pub protocol_code: String,
    pub protocol_title: String,
    pub answers: Vec<AnswerLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disposition: Option<DispositionSummary>,
    pub awaiting_screening: bool,
    pub screening_acknowledged: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subquestion: Option<String>,
    pub generated_at: jiff::Timestamp,
}

impl DispositionNote {
    pub fn from_session(session: &Session) -> Self {
        Self::build(
            session.protocol(),
            session.controls(),
            session.result(),
            session.state(),
            session.screening_acknowledged(),
            jiff::Timestamp::now(),
        )
    }

    pub fn build(
        protocol: &Protocol,
        controls: &ControlState,
        result: &EvaluationResult,
        state: &PanelState,
        screening_acknowledged: bool,
        generated_at: jiff::Timestamp,
    ) -> Self {
        let answers = protocol
            .ranked()
            .map(|dp| {
                let checked = trigger_met(&dp.trigger, &dp.key, controls);
                AnswerLine {
                    key: dp.key.clone(),
                    label: dp.label.clone(),
                    kind: dp.kind,
                    answer: Indicator::for_point(dp.kind, checked).label,
                }
            })
            .collect();

        let disposition = state.visible_key().map(|key| {
            let (label, kind) = match protocol.decision_point(key) {
                Some(dp) => (dp.label.clone(), dp.kind),
                None => ("Return to duty".to_string(), DispositionKind::Fallback),
            };
            DispositionSummary {
                key: key.to_string(),
                label,
                kind,
                text: protocol.text_for(key).to_vec(),
            }
        });

        if let PanelState::Missing(key) = state {
            tracing::warn!(protocol = %protocol.code, %key, "note written without a disposition panel");
        }

        let subquestion = protocol
            .subquestion
            .as_ref()
            .filter(|_| result.subquestion_visible)
            .map(|rule| rule.prompt.clone());

        Self {
            protocol_code: protocol.code.clone(),
            protocol_title: protocol.title.clone(),
            answers,
            disposition,
            awaiting_screening: *state == PanelState::AwaitingScreening,
            screening_acknowledged,
            threshold_count: result.threshold_count,
            subquestion,
            generated_at,
        }
    }
}
