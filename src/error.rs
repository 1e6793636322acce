use reqwest::StatusCode;
use thiserror::Error;

/// Represents errors that can occur while triggering a downstream build.
#[derive(Debug, Error)]
pub enum TriggerError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("No Travis API token configured for trigger '{0}'")]
    MissingToken(String),
    #[error("Could not determine the commit: {0}")]
    Commit(String),
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),
    #[error("Failed to reach Travis: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Travis rejected the build request. Status: {status}. Error: {body}")]
    Rejected { status: StatusCode, body: String },
}

impl From<config::ConfigError> for TriggerError {
    fn from(e: config::ConfigError) -> Self {
        TriggerError::Config(e.to_string())
    }
}

impl TriggerError {
    /// Returns true when the failure happened before any request left the process.
    pub fn is_local(&self) -> bool {
        !matches!(
            self,
            TriggerError::Transport(_) | TriggerError::Rejected { .. }
        )
    }
}
