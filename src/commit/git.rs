use crate::commit::CommitSource;
use crate::{CommitId, TriggerError};
use git2::Repository;
use std::path::PathBuf;

/// Reads the commit `HEAD` points to in the repository containing `path`.
#[derive(Debug, Clone)]
pub struct GitHeadCommit {
    path: PathBuf,
}

impl GitHeadCommit {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CommitSource for GitHeadCommit {
    fn describe(&self) -> String {
        format!("git HEAD at {}", self.path.display())
    }

    fn commit_id(&self) -> Result<CommitId, TriggerError> {
        let repo = Repository::discover(&self.path)?;
        let commit = repo.head()?.peel_to_commit()?;
        CommitId::new(commit.id().to_string()).map_err(TriggerError::Commit)
    }
}
