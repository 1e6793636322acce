mod env;
mod git;

pub use env::*;
pub use git::*;

use crate::{CommitId, TriggerError};
use tracing::debug;

/// Somewhere the ambient commit identifier can be read from.
pub trait CommitSource {
    /// Short label used in logs and error messages.
    fn describe(&self) -> String;

    fn commit_id(&self) -> Result<CommitId, TriggerError>;
}

/// A commit passed in by the caller, e.g. on the command line.
#[derive(Debug, Clone)]
pub struct ExplicitCommit(pub String);

impl CommitSource for ExplicitCommit {
    fn describe(&self) -> String {
        "--commit".to_string()
    }

    fn commit_id(&self) -> Result<CommitId, TriggerError> {
        CommitId::new(&self.0).map_err(TriggerError::Commit)
    }
}

/// Tries each source in order and returns the first commit found.
#[derive(Default)]
pub struct CommitChain {
    sources: Vec<Box<dyn CommitSource + Send + Sync>>,
}

impl CommitChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, source: impl CommitSource + Send + Sync + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// The usual lookup order: explicit value, CI variables, then the local `HEAD`.
    pub fn standard(
        explicit: Option<String>,
        env_vars: &[String],
        repo_path: impl Into<std::path::PathBuf>,
    ) -> Self {
        let mut chain = Self::new();
        if let Some(commit) = explicit {
            chain = chain.with(ExplicitCommit(commit));
        }
        chain
            .with(EnvCommit::new(env_vars.to_vec()))
            .with(GitHeadCommit::new(repo_path))
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl CommitSource for CommitChain {
    fn describe(&self) -> String {
        self.sources
            .iter()
            .map(|source| source.describe())
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn commit_id(&self) -> Result<CommitId, TriggerError> {
        let mut failures = Vec::new();
        for source in &self.sources {
            match source.commit_id() {
                Ok(commit) => {
                    debug!("Resolved commit {} from {}", commit, source.describe());
                    return Ok(commit);
                }
                Err(e) => failures.push(format!("{}: {}", source.describe(), e)),
            }
        }
        if failures.is_empty() {
            return Err(TriggerError::Commit("no commit source configured".to_string()));
        }
        Err(TriggerError::Commit(failures.join("; ")))
    }
}
