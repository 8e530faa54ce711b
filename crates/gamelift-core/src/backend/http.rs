//! GameLift JSON protocol over HTTP
//!
//! Every action is a `POST /` with an `X-Amz-Target: GameLift.<Action>`
//! header and an `application/x-amz-json-1.1` body. Failures come back as a
//! non-2xx status with an `{"__type": ..., "message": ...}` body.
//!
//! Requests are sent unsigned. Point the endpoint at GameLift Local or at a
//! gateway that signs on the client's behalf.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, trace};
use url::Url;

use super::model::*;
use super::{BackendResult, SessionBackend};
use crate::error::{BackendError, CoreError, Result};

const CONTENT_TYPE: &str = "application/x-amz-json-1.1";
const TARGET_PREFIX: &str = "GameLift";

/// Error body returned by the service
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(rename = "__type", default)]
    kind: Option<String>,
    #[serde(default, alias = "Message")]
    message: Option<String>,
}

/// [`SessionBackend`] speaking the GameLift JSON protocol
#[derive(Debug, Clone)]
pub struct HttpBackend {
    http: reqwest::Client,
    endpoint: Url,
}

impl HttpBackend {
    /// Build a backend for `endpoint` with a per-request timeout
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| CoreError::Http(format!("Invalid endpoint '{}': {}", endpoint, e)))?;

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CoreError::Http(e.to_string()))?;

        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn call<Req, Resp>(&self, action: &str, request: &Req) -> BackendResult<Resp>
    where
        Req: Serialize + Sync,
        Resp: DeserializeOwned,
    {
        let body = serde_json::to_vec(request)
            .map_err(|e| BackendError::MalformedResponse(format!("encode {action}: {e}")))?;

        debug!("POST {} {}.{}", self.endpoint, TARGET_PREFIX, action);
        trace!("Request body: {}", String::from_utf8_lossy(&body));

        let response = self
            .http
            .post(self.endpoint.clone())
            .header("Content-Type", CONTENT_TYPE)
            .header("X-Amz-Target", format!("{TARGET_PREFIX}.{action}"))
            .body(body)
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        let status = response.status();
        let header_kind = response
            .headers()
            .get("x-amzn-ErrorType")
            .and_then(|v| v.to_str().ok())
            .map(|v| v.split(':').next().unwrap_or(v).to_string());
        let text = response
            .text()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        trace!("Response {}: {}", status, text);

        if !status.is_success() {
            return Err(classify_failure(status, header_kind, &text));
        }

        let text = if text.trim().is_empty() { "{}" } else { text.as_str() };
        serde_json::from_str(text)
            .map_err(|e| BackendError::MalformedResponse(format!("{action}: {e}")))
    }
}

fn classify_failure(status: StatusCode, header_kind: Option<String>, body: &str) -> BackendError {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    let message = parsed
        .message
        .unwrap_or_else(|| format!("Request failed with HTTP {}", status.as_u16()));

    match parsed.kind.or(header_kind) {
        Some(kind) => BackendError::from_exception(&kind, message),
        None => match status {
            StatusCode::NOT_FOUND => BackendError::NotFound { message },
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                BackendError::Unauthorized { message }
            }
            StatusCode::TOO_MANY_REQUESTS => BackendError::Throttled { message },
            StatusCode::BAD_REQUEST => BackendError::InvalidRequest { message },
            _ => BackendError::Service {
                code: format!("HTTP{}", status.as_u16()),
                message,
            },
        },
    }
}

#[async_trait]
impl SessionBackend for HttpBackend {
    async fn create_game_session(
        &self,
        request: CreateGameSessionRequest,
    ) -> BackendResult<CreateGameSessionResponse> {
        self.call("CreateGameSession", &request).await
    }

    async fn describe_game_session_details(
        &self,
        request: DescribeGameSessionDetailsRequest,
    ) -> BackendResult<DescribeGameSessionDetailsResponse> {
        self.call("DescribeGameSessionDetails", &request).await
    }

    async fn create_player_session(
        &self,
        request: CreatePlayerSessionRequest,
    ) -> BackendResult<CreatePlayerSessionResponse> {
        self.call("CreatePlayerSession", &request).await
    }

    async fn describe_game_session_queues(
        &self,
        request: DescribeGameSessionQueuesRequest,
    ) -> BackendResult<DescribeGameSessionQueuesResponse> {
        self.call("DescribeGameSessionQueues", &request).await
    }

    async fn search_game_sessions(
        &self,
        request: SearchGameSessionsRequest,
    ) -> BackendResult<SearchGameSessionsResponse> {
        self.call("SearchGameSessions", &request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_invalid_endpoint() {
        let err = HttpBackend::new("not a url", Duration::from_secs(5)).unwrap_err();
        assert!(err.to_string().contains("Invalid endpoint"));
    }

    #[test]
    fn test_classify_failure_uses_type_field() {
        let err = classify_failure(
            StatusCode::BAD_REQUEST,
            None,
            r#"{"__type":"com.amazonaws.gamelift#NotFoundException","message":"No session"}"#,
        );
        assert!(err.is_not_found());
        assert_eq!(err.message(), "No session");
    }

    #[test]
    fn test_classify_failure_accepts_capitalized_message() {
        let err = classify_failure(
            StatusCode::BAD_REQUEST,
            None,
            r#"{"__type":"InvalidRequestException","Message":"FleetId is invalid"}"#,
        );
        assert!(err.is_bad_request());
        assert_eq!(err.message(), "FleetId is invalid");
    }

    #[test]
    fn test_classify_failure_falls_back_to_header_then_status() {
        let err = classify_failure(
            StatusCode::BAD_REQUEST,
            Some("ThrottlingException".to_string()),
            "",
        );
        assert!(err.is_rate_limited());

        let err = classify_failure(StatusCode::SERVICE_UNAVAILABLE, None, "<html>");
        assert_eq!(err.message(), "Request failed with HTTP 503");
        assert!(matches!(err, BackendError::Service { .. }));
    }
}
