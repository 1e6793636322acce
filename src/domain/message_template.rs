use crate::domain::CommitId;
use serde::{Deserialize, Serialize};

/// Placeholder replaced by the commit identifier when a message is rendered.
pub const COMMIT_PLACEHOLDER: &str = "%COMMIT";

/// Build message sent to Travis, with `%COMMIT` standing in for the commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageTemplate(String);

impl MessageTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn has_placeholder(&self) -> bool {
        self.0.contains(COMMIT_PLACEHOLDER)
    }

    /// Substitutes every `%COMMIT` with `commit`.
    ///
    /// ```
    /// use ci_trigger::{CommitId, MessageTemplate};
    ///
    /// let template = MessageTemplate::new("Triggered by build for %COMMIT");
    /// let commit = CommitId::new("C").unwrap();
    /// assert_eq!(template.render(&commit), "Triggered by build for C");
    /// ```
    pub fn render(&self, commit: &CommitId) -> String {
        self.0.replace(COMMIT_PLACEHOLDER, commit.as_str())
    }
}

impl From<&str> for MessageTemplate {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
