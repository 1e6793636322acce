use crate::domain::{BranchName, CommitId, MessageTemplate, ProjectSlug};
use secrecy::{ExposeSecret, SecretString};

/// Everything needed to ask Travis for one downstream build.
///
/// Built once per invocation and dropped after the request is sent. The token
/// is kept as a secret so it never shows up in `Debug` output.
#[derive(Debug, Clone)]
pub struct TriggerRequest {
    project: ProjectSlug,
    branch: BranchName,
    token: SecretString,
    message: MessageTemplate,
}

impl TriggerRequest {
    /// Creates a new `TriggerRequest`.
    ///
    /// # Returns
    ///
    /// Returns `Err(String)` if the token is missing, empty or only whitespace.
    pub fn new(
        project: ProjectSlug,
        branch: BranchName,
        token: Option<SecretString>,
        message: MessageTemplate,
    ) -> Result<Self, String> {
        let token = match token {
            Some(token) if !token.expose_secret().trim().is_empty() => token,
            _ => return Err("API token must not be empty.".to_string()),
        };
        Ok(Self {
            project,
            branch,
            token,
            message,
        })
    }

    pub fn project(&self) -> &ProjectSlug {
        &self.project
    }

    pub fn branch(&self) -> &BranchName {
        &self.branch
    }

    pub fn token(&self) -> &SecretString {
        &self.token
    }

    pub fn message(&self, commit: &CommitId) -> String {
        self.message.render(commit)
    }
}
