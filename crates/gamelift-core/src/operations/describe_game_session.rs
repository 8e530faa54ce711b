//! DescribeGameSession (backed by DescribeGameSessionDetails)

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use crate::backend::model::{DescribeGameSessionDetailsRequest, DescribeGameSessionDetailsResponse};
use crate::backend::{BackendResult, SessionBackend};
use crate::error::BackendError;
use crate::proxy::Operation;
use crate::status::SessionStatus;

/// Success payload of DescribeGameSession
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DescribedGameSession {
    pub session_id: String,
    pub status: SessionStatus,
}

#[derive(Debug, Clone)]
pub struct DescribeGameSessionOp {
    pub session_id: String,
}

#[async_trait]
impl Operation for DescribeGameSessionOp {
    const NAME: &'static str = "describe game session";

    type Request = DescribeGameSessionDetailsRequest;
    type Response = DescribeGameSessionDetailsResponse;
    type Output = DescribedGameSession;

    fn build_request(&self) -> DescribeGameSessionDetailsRequest {
        debug!("Requesting to describe game session with ID: {}", self.session_id);
        DescribeGameSessionDetailsRequest {
            game_session_id: self.session_id.clone(),
        }
    }

    async fn submit(
        backend: &dyn SessionBackend,
        request: DescribeGameSessionDetailsRequest,
    ) -> BackendResult<DescribeGameSessionDetailsResponse> {
        backend.describe_game_session_details(request).await
    }

    fn extract(
        &self,
        response: DescribeGameSessionDetailsResponse,
    ) -> BackendResult<DescribedGameSession> {
        let session = response
            .game_session_details
            .into_iter()
            .next()
            .and_then(|detail| detail.game_session)
            .ok_or_else(|| BackendError::NotFound {
                message: format!("No game session details returned for '{}'", self.session_id),
            })?;

        Ok(DescribedGameSession {
            status: SessionStatus::from(&session.status),
            session_id: session.game_session_id,
        })
    }
}
