use crate::commit::CommitSource;
use crate::{
    BranchName, CommitId, MessageTemplate, ProjectSlug, TravisClient, TriggerError,
    TriggerReceipt, TriggerRequest, TriggerSettings,
};
use secrecy::{ExposeSecret, SecretString};
use tracing::{info, warn};

/// A named task that asks Travis to build a downstream project.
#[derive(Debug, Clone)]
pub struct TriggerTask {
    name: String,
    project: ProjectSlug,
    branch: BranchName,
    message: MessageTemplate,
    token: Option<SecretString>,
}

/// A fully resolved trigger that has not been sent yet.
#[derive(Debug, Clone)]
pub struct PlannedTrigger {
    pub request: TriggerRequest,
    pub commit: CommitId,
}

impl PlannedTrigger {
    pub fn message(&self) -> String {
        self.request.message(&self.commit)
    }
}

impl TriggerTask {
    pub fn new(
        name: impl Into<String>,
        project: ProjectSlug,
        branch: BranchName,
        message: MessageTemplate,
        token: Option<SecretString>,
    ) -> Self {
        Self {
            name: name.into(),
            project,
            branch,
            message,
            token,
        }
    }

    /// Builds a task from its configuration entry.
    pub fn from_settings(
        name: &str,
        settings: &TriggerSettings,
        token: Option<SecretString>,
    ) -> Result<Self, TriggerError> {
        let project = ProjectSlug::new(settings.project.clone())
            .map_err(|e| TriggerError::Config(format!("trigger '{name}': {e}")))?;
        let branch = BranchName::new(settings.branch.clone())
            .map_err(|e| TriggerError::Config(format!("trigger '{name}': {e}")))?;
        let message = MessageTemplate::new(settings.message.clone());
        if !message.has_placeholder() {
            warn!("Message of trigger '{}' does not mention %COMMIT", name);
        }
        Ok(Self::new(name, project, branch, message, token))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn project(&self) -> &ProjectSlug {
        &self.project
    }

    pub fn branch(&self) -> &BranchName {
        &self.branch
    }

    /// Checks the token, resolves the commit and renders the message without
    /// touching the network.
    pub fn plan(&self, commits: &dyn CommitSource) -> Result<PlannedTrigger, TriggerError> {
        let token = self
            .token
            .as_ref()
            .filter(|token| !token.expose_secret().trim().is_empty())
            .cloned()
            .ok_or_else(|| TriggerError::MissingToken(self.name.clone()))?;

        let request = TriggerRequest::new(
            self.project.clone(),
            self.branch.clone(),
            Some(token),
            self.message.clone(),
        )
        .map_err(TriggerError::Config)?;

        let commit = commits.commit_id()?;
        info!("Trigger '{}' uses commit {}", self.name, commit.short());

        Ok(PlannedTrigger { request, commit })
    }

    /// Sends exactly one build request to Travis.
    pub async fn run(
        &self,
        client: &TravisClient,
        commits: &dyn CommitSource,
    ) -> Result<TriggerReceipt, TriggerError> {
        let planned = self.plan(commits)?;
        let receipt = client
            .trigger_build(&planned.request, &planned.commit)
            .await?;

        match receipt.request_id {
            Some(id) => info!(
                "Travis accepted build request {} for {} ({})",
                id,
                self.project,
                self.branch.as_str()
            ),
            None => info!(
                "Travis accepted build request for {} ({})",
                self.project,
                self.branch.as_str()
            ),
        }
        if let Some(remaining) = receipt.remaining_requests {
            info!("{} build requests remaining", remaining);
        }
        Ok(receipt)
    }
}
