use ci_trigger::{Application, CommitSettings, Settings, TravisSettings, TriggerSettings};
use secrecy::SecretString;
use std::collections::BTreeMap;
use std::net::TcpListener;
use wiremock::MockServer;

pub const SITE_PROJECT: &str = "junit-pioneer/junit-pioneer.github.io";
pub const SITE_REQUESTS_PATH: &str = "/repo/junit-pioneer%2Fjunit-pioneer.github.io/requests";

/// generate settings with a single `site_build` trigger aimed at `base_url`
pub fn site_settings(base_url: &str, token: Option<&str>) -> Settings {
    let mut triggers = BTreeMap::new();
    triggers.insert(
        "site_build".to_string(),
        TriggerSettings {
            project: SITE_PROJECT.to_string(),
            branch: "grandmaster".to_string(),
            message: "Triggered by successful JUnit Pioneer build for %COMMIT".to_string(),
        },
    );

    Settings {
        travis: TravisSettings {
            base_url: base_url.to_string(),
            api_token: token.map(|t| SecretString::from(t.to_string())),
            timeout_seconds: 5,
        },
        commit: CommitSettings { env_vars: vec![] },
        triggers,
    }
}

pub struct TestApp {
    pub mock_server: MockServer,
    pub application: Application,
}

impl TestApp {
    pub async fn spawn(token: Option<&str>) -> Self {
        let mock_server = MockServer::start().await;
        let application = Application::build(site_settings(&mock_server.uri(), token)).unwrap();
        Self {
            mock_server,
            application,
        }
    }
}

/// an address nothing is listening on
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
