use crate::commit::CommitSource;
use crate::{CommitId, TriggerError};
use std::env;

/// Reads the commit from the first set, non-empty variable in `vars`.
///
/// CI services export the commit under different names (`TRAVIS_COMMIT`,
/// `GITHUB_SHA`, `GIT_COMMIT`), so the list is taken from configuration.
#[derive(Debug, Clone)]
pub struct EnvCommit {
    vars: Vec<String>,
}

impl EnvCommit {
    pub fn new(vars: Vec<String>) -> Self {
        Self { vars }
    }
}

impl CommitSource for EnvCommit {
    fn describe(&self) -> String {
        format!("environment [{}]", self.vars.join(", "))
    }

    fn commit_id(&self) -> Result<CommitId, TriggerError> {
        self.vars
            .iter()
            .filter_map(|var| env::var(var).ok())
            .find(|value| !value.trim().is_empty())
            .ok_or_else(|| TriggerError::Commit("no commit variable is set".to_string()))
            .and_then(|value| CommitId::new(value).map_err(TriggerError::Commit))
    }
}
