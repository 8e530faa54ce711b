//! DescribeGameSessionQueues
//!
//! Returns the destination ARNs of the named queue verbatim. Splitting an ARN
//! into region and fleet/alias ID is left to the caller.

use async_trait::async_trait;
use tracing::debug;

use crate::backend::model::{DescribeGameSessionQueuesRequest, DescribeGameSessionQueuesResponse};
use crate::backend::{BackendResult, SessionBackend};
use crate::error::BackendError;
use crate::proxy::Operation;

#[derive(Debug, Clone)]
pub struct DescribeGameSessionQueuesOp {
    pub queue_name: String,
}

#[async_trait]
impl Operation for DescribeGameSessionQueuesOp {
    const NAME: &'static str = "describe game session queues";

    type Request = DescribeGameSessionQueuesRequest;
    type Response = DescribeGameSessionQueuesResponse;
    type Output = Vec<String>;

    fn build_request(&self) -> DescribeGameSessionQueuesRequest {
        debug!("Setting queue name: {}", self.queue_name);
        DescribeGameSessionQueuesRequest {
            names: vec![self.queue_name.clone()],
        }
    }

    async fn submit(
        backend: &dyn SessionBackend,
        request: DescribeGameSessionQueuesRequest,
    ) -> BackendResult<DescribeGameSessionQueuesResponse> {
        backend.describe_game_session_queues(request).await
    }

    fn extract(&self, response: DescribeGameSessionQueuesResponse) -> BackendResult<Vec<String>> {
        let queue = response
            .game_session_queues
            .into_iter()
            .next()
            .ok_or_else(|| BackendError::NotFound {
                message: format!("No game session queue named '{}'", self.queue_name),
            })?;

        Ok(queue
            .destinations
            .into_iter()
            .map(|destination| destination.destination_arn)
            .collect())
    }
}
