//! SearchGameSessions

use async_trait::async_trait;
use tracing::debug;

use crate::backend::model::{SearchGameSessionsRequest, SearchGameSessionsResponse};
use crate::backend::{BackendResult, SessionBackend};
use crate::proxy::Operation;

/// Search parameters; all four are sent even when empty
#[derive(Debug, Clone, Default)]
pub struct SearchGameSessionsOp {
    pub fleet_id: String,
    pub alias_id: String,
    pub filter_expression: String,
    pub sort_expression: String,
}

#[async_trait]
impl Operation for SearchGameSessionsOp {
    const NAME: &'static str = "search game sessions";

    type Request = SearchGameSessionsRequest;
    type Response = SearchGameSessionsResponse;
    type Output = Vec<String>;

    fn build_request(&self) -> SearchGameSessionsRequest {
        debug!("Setting fleet id: {}", self.fleet_id);
        debug!("Setting alias id: {}", self.alias_id);
        debug!("Setting filter expression: {}", self.filter_expression);
        debug!("Setting sort expression: {}", self.sort_expression);
        SearchGameSessionsRequest {
            fleet_id: self.fleet_id.clone(),
            alias_id: self.alias_id.clone(),
            filter_expression: self.filter_expression.clone(),
            sort_expression: self.sort_expression.clone(),
        }
    }

    async fn submit(
        backend: &dyn SessionBackend,
        request: SearchGameSessionsRequest,
    ) -> BackendResult<SearchGameSessionsResponse> {
        backend.search_game_sessions(request).await
    }

    fn extract(&self, response: SearchGameSessionsResponse) -> BackendResult<Vec<String>> {
        Ok(response
            .game_sessions
            .into_iter()
            .map(|session| session.game_session_id)
            .collect())
    }
}
