use crate::{CommitId, TriggerError, TriggerRequest};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Url};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

const API_VERSION_HEADER: &str = "Travis-API-Version";
const API_VERSION: &str = "3";

/// Client for the Travis CI v3 API.
#[derive(Clone, Debug)]
pub struct TravisClient {
    http_client: Client,
    base_url: Url,
}

/// What Travis reported after accepting a build request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriggerReceipt {
    pub request_id: Option<u64>,
    pub remaining_requests: Option<u64>,
}

impl TravisClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, TriggerError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| TriggerError::Config(format!("Invalid Travis URL '{base_url}': {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(TriggerError::Config(format!(
                "Travis URL '{base_url}' cannot be used as a base URL"
            )));
        }
        let http_client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("ci-trigger/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TriggerError::Config(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            http_client,
            base_url,
        })
    }

    /// URL of the build request endpoint; the slug is sent as a single
    /// path segment, so `owner/name` becomes `owner%2Fname`.
    pub fn requests_url(&self, request: &TriggerRequest) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .push("repo")
                .push(request.project().as_str())
                .push("requests");
        }
        url
    }

    /// Sends a single build request. Failures are returned to the caller and
    /// never retried.
    pub async fn trigger_build(
        &self,
        request: &TriggerRequest,
        commit: &CommitId,
    ) -> Result<TriggerReceipt, TriggerError> {
        let url = self.requests_url(request);
        let request_body = BuildRequestBody {
            request: BuildRequest {
                branch: request.branch().as_str().to_owned(),
                message: request.message(commit),
            },
        };

        info!(
            "Requesting build of {} on branch {}",
            request.project(),
            request.branch().as_str()
        );

        let response = self
            .http_client
            .post(url)
            .header(API_VERSION_HEADER, API_VERSION)
            .header(
                AUTHORIZATION,
                format!("token {}", request.token().expose_secret()),
            )
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(TriggerError::Rejected { status, body });
        }

        let receipt = match response.json::<BuildRequestResponse>().await {
            Ok(body) => TriggerReceipt {
                request_id: body.request.and_then(|r| r.id),
                remaining_requests: body.remaining_requests,
            },
            Err(e) => {
                warn!("Travis accepted the request but its response was unreadable: {}", e);
                TriggerReceipt::default()
            }
        };
        Ok(receipt)
    }
}

#[derive(Serialize)]
struct BuildRequestBody {
    request: BuildRequest,
}

#[derive(Serialize)]
struct BuildRequest {
    branch: String,
    message: String,
}

#[derive(Deserialize)]
struct BuildRequestResponse {
    #[serde(default)]
    remaining_requests: Option<u64>,
    #[serde(default)]
    request: Option<AcceptedRequest>,
}

#[derive(Deserialize)]
struct AcceptedRequest {
    #[serde(default)]
    id: Option<u64>,
}
