use crate::{CommitChain, Settings, TravisClient, TriggerError, TriggerTask};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::info;

pub struct Application {
    client: TravisClient,
    tasks: BTreeMap<String, TriggerTask>,
    commit_env_vars: Vec<String>,
}

impl Application {
    pub fn build(configuration: Settings) -> Result<Self, TriggerError> {
        let client = TravisClient::new(
            &configuration.travis.base_url,
            configuration.travis.timeout(),
        )?;

        let tasks = configuration
            .triggers
            .iter()
            .map(|(name, settings)| {
                TriggerTask::from_settings(name, settings, configuration.travis.api_token.clone())
                    .map(|task| (name.clone(), task))
            })
            .collect::<Result<BTreeMap<_, _>, _>>()?;

        info!("Loaded {} trigger(s) against {}", tasks.len(), configuration.travis.base_url);

        Ok(Self {
            client,
            tasks,
            commit_env_vars: configuration.commit.env_vars,
        })
    }

    pub fn client(&self) -> &TravisClient {
        &self.client
    }

    pub fn task_names(&self) -> Vec<&str> {
        self.tasks.keys().map(String::as_str).collect()
    }

    /// Looks up a trigger by name. Without a name, the only configured
    /// trigger is used.
    pub fn task(&self, name: Option<&str>) -> Result<&TriggerTask, TriggerError> {
        match name {
            Some(name) => self.tasks.get(name).ok_or_else(|| {
                TriggerError::Config(format!(
                    "unknown trigger '{name}'. Known triggers: {}",
                    self.task_names().join(", ")
                ))
            }),
            None => {
                let mut tasks = self.tasks.values();
                match (tasks.next(), tasks.next()) {
                    (Some(task), None) => Ok(task),
                    (None, _) => Err(TriggerError::Config("no triggers configured".to_string())),
                    (Some(_), Some(_)) => Err(TriggerError::Config(format!(
                        "several triggers configured, pick one of: {}",
                        self.task_names().join(", ")
                    ))),
                }
            }
        }
    }

    pub fn commit_sources(&self, explicit: Option<String>, repo_path: PathBuf) -> CommitChain {
        CommitChain::standard(explicit, &self.commit_env_vars, repo_path)
    }
}
