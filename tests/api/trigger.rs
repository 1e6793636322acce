use crate::helpers::{SITE_PROJECT, SITE_REQUESTS_PATH, TestApp, site_settings, unreachable_url};

use ci_trigger::{Application, CommitId, CommitSource, ExplicitCommit, TriggerError};
use mockall::mock;
use wiremock::{
    Mock, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

mock! {
    Commits {}

    impl CommitSource for Commits {
        fn describe(&self) -> String;
        fn commit_id(&self) -> Result<CommitId, TriggerError>;
    }
}

#[tokio::test]
async fn site_build_sends_exactly_one_request() {
    // Arrange
    let app = TestApp::spawn(Some("travis-token")).await;
    Mock::given(method("POST"))
        .and(path(SITE_REQUESTS_PATH))
        .and(header("Authorization", "token travis-token"))
        .and(header("Travis-API-Version", "3"))
        .and(body_json(serde_json::json!({
            "request": {
                "branch": "grandmaster",
                "message": "Triggered by successful JUnit Pioneer build for 9d1e2f3"
            }
        })))
        .respond_with(ResponseTemplate::new(202).set_body_json(serde_json::json!({
            "@type": "pending",
            "remaining_requests": 49,
            "request": { "id": 77 }
        })))
        .expect(1)
        .mount(&app.mock_server)
        .await;

    let mut commits = MockCommits::new();
    commits.expect_describe().return_const("mock".to_string());
    commits
        .expect_commit_id()
        .times(1)
        .returning(|| Ok(CommitId::new("9d1e2f3").unwrap()));

    // Act
    let task = app.application.task(None).unwrap();
    let receipt = task.run(app.application.client(), &commits).await.unwrap();

    // Assert
    assert_eq!(task.project().as_str(), SITE_PROJECT);
    assert_eq!(receipt.request_id, Some(77));
    assert_eq!(receipt.remaining_requests, Some(49));
}

#[tokio::test]
async fn missing_token_fails_without_network_call() {
    // Arrange
    let app = TestApp::spawn(None).await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(202))
        .expect(0)
        .mount(&app.mock_server)
        .await;

    let mut commits = MockCommits::new();
    commits.expect_commit_id().never();

    // Act
    let task = app.application.task(Some("site_build")).unwrap();
    let outcome = task.run(app.application.client(), &commits).await;

    // Assert
    let error = outcome.unwrap_err();
    assert!(matches!(error, TriggerError::MissingToken(_)));
    assert!(error.is_local());
}

#[tokio::test]
async fn rejected_request_is_not_retried() {
    // Arrange
    let app = TestApp::spawn(Some("travis-token")).await;
    Mock::given(method("POST"))
        .and(path(SITE_REQUESTS_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&app.mock_server)
        .await;

    // Act
    let task = app.application.task(None).unwrap();
    let outcome = task
        .run(app.application.client(), &ExplicitCommit("abc".to_string()))
        .await;

    // Assert
    match outcome {
        Err(TriggerError::Rejected { status, body }) => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected a rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_endpoint_reports_transport_error() {
    // Arrange
    let application =
        Application::build(site_settings(&unreachable_url(), Some("travis-token"))).unwrap();

    // Act
    let task = application.task(None).unwrap();
    let outcome = task
        .run(application.client(), &ExplicitCommit("abc".to_string()))
        .await;

    // Assert
    let error = outcome.unwrap_err();
    assert!(matches!(error, TriggerError::Transport(_)));
    assert!(!error.is_local());
}

#[tokio::test]
async fn failing_commit_lookup_sends_nothing() {
    // Arrange
    let app = TestApp::spawn(Some("travis-token")).await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(202))
        .expect(0)
        .mount(&app.mock_server)
        .await;

    let mut commits = MockCommits::new();
    commits
        .expect_commit_id()
        .times(1)
        .returning(|| Err(TriggerError::Commit("no commit variable is set".to_string())));

    // Act
    let task = app.application.task(None).unwrap();
    let outcome = task.run(app.application.client(), &commits).await;

    // Assert
    assert!(matches!(outcome, Err(TriggerError::Commit(_))));
}

#[tokio::test]
async fn explicit_commit_takes_precedence_in_standard_chain() {
    // Arrange
    let app = TestApp::spawn(Some("travis-token")).await;
    Mock::given(method("POST"))
        .and(body_json(serde_json::json!({
            "request": {
                "branch": "grandmaster",
                "message": "Triggered by successful JUnit Pioneer build for feedbeef"
            }
        })))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&app.mock_server)
        .await;

    let commits = app
        .application
        .commit_sources(Some("feedbeef".to_string()), ".".into());

    // Act
    let task = app.application.task(None).unwrap();
    let planned = task.plan(&commits).unwrap();
    let outcome = task.run(app.application.client(), &commits).await;

    // Assert
    assert_eq!(planned.commit.as_str(), "feedbeef");
    assert!(outcome.is_ok());
}
