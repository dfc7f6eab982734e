use std::path::PathBuf;

use thiserror::Error;

/// A single problem found while validating protocol configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigIssue {
    #[error("protocol code '{code}' is malformed or does not match its category")]
    InvalidCode { code: String },

    #[error("protocol '{code}' is defined more than once")]
    DuplicateProtocol { code: String },

    #[error("category '{code}' is defined more than once")]
    DuplicateCategory { code: String },

    #[error("protocol '{code}' is not listed in any category menu")]
    UnlistedProtocol { code: String },

    #[error("category '{category}' lists '{code}' which is not defined")]
    MissingProtocol { category: String, code: String },

    #[error("protocol '{code}' is listed in more than one menu slot")]
    DuplicateMenuEntry { code: String },

    #[error("protocol '{code}' belongs to category '{category}' but is listed under '{listed_under}'")]
    CategoryMismatch {
        code: String,
        category: String,
        listed_under: String,
    },

    #[error("protocol '{protocol}' has more than one decision point keyed '{key}'")]
    DuplicateDecisionPoint { protocol: String, key: String },

    #[error("protocol '{protocol}' has an empty fallback key")]
    EmptyFallback { protocol: String },

    #[error("protocol '{protocol}': fallback decision point '{key}' is not the protocol's fallback")]
    StrayFallback { protocol: String, key: String },

    #[error("protocol '{protocol}' has no fallback decision point keyed '{key}'")]
    MissingFallback { protocol: String, key: String },

    #[error("protocol '{protocol}': fallback decision point '{key}' must be ranked last")]
    MisplacedFallback { protocol: String, key: String },

    #[error("protocol '{protocol}': red flag '{key}' is ranked below a lower-priority decision point")]
    RedFlagOutOfOrder { protocol: String, key: String },

    #[error("protocol '{protocol}' labels control '{id}' which no trigger reads")]
    UnusedLabel { protocol: String, id: String },

    #[error(
        "protocol '{protocol}': threshold on '{owner}' needs {minimum} of {members} members"
    )]
    InvalidThreshold {
        protocol: String,
        owner: String,
        minimum: usize,
        members: usize,
    },
}

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("invalid protocol configuration: {}", join_issues(.0))]
    Invalid(Vec<ConfigIssue>),

    #[error("unknown protocol: {0}")]
    UnknownProtocol(String),

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("failed to read overlay at {path}: {source}")]
    OverlayRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed overlay: {0}")]
    OverlayParse(#[from] serde_json::Error),
}

fn join_issues(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
