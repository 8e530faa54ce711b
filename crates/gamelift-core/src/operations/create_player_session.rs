//! CreatePlayerSession

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use crate::backend::model::{CreatePlayerSessionRequest, CreatePlayerSessionResponse};
use crate::backend::{BackendResult, SessionBackend};
use crate::error::BackendError;
use crate::proxy::Operation;

/// Where a player connects to, handed to success subscribers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerSessionInfo {
    pub ip_address: String,
    /// Port as text, ready to be joined onto a connect URL
    pub port: String,
    pub player_session_id: String,
}

#[derive(Debug, Clone)]
pub struct CreatePlayerSessionOp {
    pub game_session_id: String,
    pub player_id: String,
}

#[async_trait]
impl Operation for CreatePlayerSessionOp {
    const NAME: &'static str = "create player session";

    type Request = CreatePlayerSessionRequest;
    type Response = CreatePlayerSessionResponse;
    type Output = PlayerSessionInfo;

    fn build_request(&self) -> CreatePlayerSessionRequest {
        debug!("Setting game session ID: {}", self.game_session_id);
        debug!("Setting player ID: {}", self.player_id);
        CreatePlayerSessionRequest {
            game_session_id: self.game_session_id.clone(),
            player_id: self.player_id.clone(),
        }
    }

    async fn submit(
        backend: &dyn SessionBackend,
        request: CreatePlayerSessionRequest,
    ) -> BackendResult<CreatePlayerSessionResponse> {
        backend.create_player_session(request).await
    }

    fn extract(&self, response: CreatePlayerSessionResponse) -> BackendResult<PlayerSessionInfo> {
        let session = response.player_session.ok_or_else(|| {
            BackendError::MalformedResponse(
                "CreatePlayerSession response carried no player session".to_string(),
            )
        })?;

        Ok(PlayerSessionInfo {
            ip_address: session.ip_address,
            port: session.port.to_string(),
            player_session_id: session.player_session_id,
        })
    }
}
