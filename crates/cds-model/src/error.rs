use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown triage level: {0}")]
    UnknownTriageLevel(String),
    #[error("unknown ward: {0}")]
    UnknownWard(String),
    #[error("unknown rule severity: {0}")]
    UnknownRuleSeverity(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
