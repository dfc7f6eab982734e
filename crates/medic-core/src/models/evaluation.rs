use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Outcome of one evaluation pass over a protocol. Recomputed on every
/// control change and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EvaluationResult {
    /// Key of the highest-priority checked decision point, or the
    /// protocol's fallback key.
    pub active: String,
    pub subquestion_visible: bool,
    /// Displayed counter of the protocol's threshold rule, if it has one.
    pub threshold_count: Option<usize>,
}

impl EvaluationResult {
    pub fn fallback(key: impl Into<String>) -> Self {
        Self {
            active: key.into(),
            subquestion_visible: false,
            threshold_count: None,
        }
    }
}
