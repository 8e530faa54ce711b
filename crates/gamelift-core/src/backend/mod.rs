//! The seam between proxies and whatever actually talks to GameLift
//!
//! Proxies only see [`SessionBackend`]. The crate ships an HTTP
//! implementation behind the `http-backend` feature; tests use
//! [`crate::testing::RecordingBackend`].

#[cfg(feature = "http-backend")]
pub mod http;
pub mod model;

use async_trait::async_trait;

use crate::error::BackendError;
use model::*;

#[cfg(feature = "http-backend")]
pub use http::HttpBackend;

/// Result of one backend call
pub type BackendResult<T> = std::result::Result<T, BackendError>;

/// Asynchronous GameLift session API
#[async_trait]
pub trait SessionBackend: Send + Sync {
    async fn create_game_session(
        &self,
        request: CreateGameSessionRequest,
    ) -> BackendResult<CreateGameSessionResponse>;

    async fn describe_game_session_details(
        &self,
        request: DescribeGameSessionDetailsRequest,
    ) -> BackendResult<DescribeGameSessionDetailsResponse>;

    async fn create_player_session(
        &self,
        request: CreatePlayerSessionRequest,
    ) -> BackendResult<CreatePlayerSessionResponse>;

    async fn describe_game_session_queues(
        &self,
        request: DescribeGameSessionQueuesRequest,
    ) -> BackendResult<DescribeGameSessionQueuesResponse>;

    async fn search_game_sessions(
        &self,
        request: SearchGameSessionsRequest,
    ) -> BackendResult<SearchGameSessionsResponse>;
}
