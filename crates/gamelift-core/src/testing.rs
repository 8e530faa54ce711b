//! In-process backend for tests
//!
//! [`RecordingBackend`] records every request it receives and answers each
//! call from a scripted outcome. Unscripted calls fail with a `Service`
//! error so a test that forgets to script a response sees its failure
//! delegate fire.
//!
//! ```rust,ignore
//! let backend = Arc::new(
//!     RecordingBackend::new().with_search_game_sessions(Ok(SearchGameSessionsResponse {
//!         game_sessions: vec![],
//!         next_token: None,
//!     })),
//! );
//! let client = GameLiftClient::new(backend.clone(), Handle::current());
//! // ... activate a proxy ...
//! assert_eq!(backend.call_count(), 1);
//! ```

use async_trait::async_trait;
use std::sync::{Mutex, PoisonError};

use crate::backend::model::*;
use crate::backend::{BackendResult, SessionBackend};
use crate::error::BackendError;

/// A request the backend received
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    CreateGameSession(CreateGameSessionRequest),
    DescribeGameSessionDetails(DescribeGameSessionDetailsRequest),
    CreatePlayerSession(CreatePlayerSessionRequest),
    DescribeGameSessionQueues(DescribeGameSessionQueuesRequest),
    SearchGameSessions(SearchGameSessionsRequest),
}

/// Scripted fake backend
#[derive(Default)]
pub struct RecordingBackend {
    calls: Mutex<Vec<RecordedCall>>,
    create_game_session: Option<BackendResult<CreateGameSessionResponse>>,
    describe_game_session_details: Option<BackendResult<DescribeGameSessionDetailsResponse>>,
    create_player_session: Option<BackendResult<CreatePlayerSessionResponse>>,
    describe_game_session_queues: Option<BackendResult<DescribeGameSessionQueuesResponse>>,
    search_game_sessions: Option<BackendResult<SearchGameSessionsResponse>>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_create_game_session(
        mut self,
        outcome: BackendResult<CreateGameSessionResponse>,
    ) -> Self {
        self.create_game_session = Some(outcome);
        self
    }

    #[must_use]
    pub fn with_describe_game_session_details(
        mut self,
        outcome: BackendResult<DescribeGameSessionDetailsResponse>,
    ) -> Self {
        self.describe_game_session_details = Some(outcome);
        self
    }

    #[must_use]
    pub fn with_create_player_session(
        mut self,
        outcome: BackendResult<CreatePlayerSessionResponse>,
    ) -> Self {
        self.create_player_session = Some(outcome);
        self
    }

    #[must_use]
    pub fn with_describe_game_session_queues(
        mut self,
        outcome: BackendResult<DescribeGameSessionQueuesResponse>,
    ) -> Self {
        self.describe_game_session_queues = Some(outcome);
        self
    }

    #[must_use]
    pub fn with_search_game_sessions(
        mut self,
        outcome: BackendResult<SearchGameSessionsResponse>,
    ) -> Self {
        self.search_game_sessions = Some(outcome);
        self
    }

    /// Every request received so far, in arrival order
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn record(&self, call: RecordedCall) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);
    }
}

fn scripted<T: Clone>(outcome: &Option<BackendResult<T>>, action: &str) -> BackendResult<T> {
    outcome.clone().unwrap_or_else(|| {
        Err(BackendError::Service {
            code: "Unscripted".to_string(),
            message: format!("No scripted response for {action}"),
        })
    })
}

#[async_trait]
impl SessionBackend for RecordingBackend {
    async fn create_game_session(
        &self,
        request: CreateGameSessionRequest,
    ) -> BackendResult<CreateGameSessionResponse> {
        self.record(RecordedCall::CreateGameSession(request));
        scripted(&self.create_game_session, "CreateGameSession")
    }

    async fn describe_game_session_details(
        &self,
        request: DescribeGameSessionDetailsRequest,
    ) -> BackendResult<DescribeGameSessionDetailsResponse> {
        self.record(RecordedCall::DescribeGameSessionDetails(request));
        scripted(
            &self.describe_game_session_details,
            "DescribeGameSessionDetails",
        )
    }

    async fn create_player_session(
        &self,
        request: CreatePlayerSessionRequest,
    ) -> BackendResult<CreatePlayerSessionResponse> {
        self.record(RecordedCall::CreatePlayerSession(request));
        scripted(&self.create_player_session, "CreatePlayerSession")
    }

    async fn describe_game_session_queues(
        &self,
        request: DescribeGameSessionQueuesRequest,
    ) -> BackendResult<DescribeGameSessionQueuesResponse> {
        self.record(RecordedCall::DescribeGameSessionQueues(request));
        scripted(
            &self.describe_game_session_queues,
            "DescribeGameSessionQueues",
        )
    }

    async fn search_game_sessions(
        &self,
        request: SearchGameSessionsRequest,
    ) -> BackendResult<SearchGameSessionsResponse> {
        self.record(RecordedCall::SearchGameSessions(request));
        scripted(&self.search_game_sessions, "SearchGameSessions")
    }
}
