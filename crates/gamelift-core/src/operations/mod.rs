//! The five session operations
//!
//! Each operation is an [`AsyncProxy`] built by a [`SessionOperations`]
//! factory function. Factories only copy parameters and never fail.
//!
//! ```rust,ignore
//! let status = SessionOperations::create_game_session(
//!     &client,
//!     GameSessionConfig::new(8).with_alias_id("alias-1234"),
//!     false,
//! )
//! .with_on_success(|session_id| println!("created {session_id}"))
//! .with_on_failure(|message| eprintln!("failed: {message}"))
//! .activate();
//! ```

pub mod create_game_session;
pub mod create_player_session;
pub mod describe_game_session;
pub mod describe_game_session_queues;
pub mod search_game_sessions;

pub use create_game_session::{CreateGameSessionOp, GameSessionConfig, GameSessionProperty};
pub use create_player_session::{CreatePlayerSessionOp, PlayerSessionInfo};
pub use describe_game_session::{DescribeGameSessionOp, DescribedGameSession};
pub use describe_game_session_queues::DescribeGameSessionQueuesOp;
pub use search_game_sessions::SearchGameSessionsOp;

use crate::client::GameLiftClient;
use crate::proxy::AsyncProxy;

pub type CreateGameSession = AsyncProxy<CreateGameSessionOp>;
pub type DescribeGameSession = AsyncProxy<DescribeGameSessionOp>;
pub type CreatePlayerSession = AsyncProxy<CreatePlayerSessionOp>;
pub type DescribeGameSessionQueues = AsyncProxy<DescribeGameSessionQueuesOp>;
pub type SearchGameSessions = AsyncProxy<SearchGameSessionsOp>;

/// Factory for session operation proxies
pub struct SessionOperations;

impl SessionOperations {
    /// Create a game session
    ///
    /// With `use_local` the request addresses `config.local_fleet_id`,
    /// otherwise `config.alias_id`. Success subscribers receive the new
    /// game session ID.
    pub fn create_game_session(
        client: &GameLiftClient,
        config: GameSessionConfig,
        use_local: bool,
    ) -> CreateGameSession {
        AsyncProxy::new(client, CreateGameSessionOp { config, use_local })
    }

    /// Describe a game session's ID and status
    pub fn describe_game_session(
        client: &GameLiftClient,
        session_id: impl Into<String>,
    ) -> DescribeGameSession {
        AsyncProxy::new(
            client,
            DescribeGameSessionOp {
                session_id: session_id.into(),
            },
        )
    }

    /// Reserve a slot for `player_id` in a game session
    pub fn create_player_session(
        client: &GameLiftClient,
        game_session_id: impl Into<String>,
        player_id: impl Into<String>,
    ) -> CreatePlayerSession {
        AsyncProxy::new(
            client,
            CreatePlayerSessionOp {
                game_session_id: game_session_id.into(),
                player_id: player_id.into(),
            },
        )
    }

    /// List the destination ARNs of a queue
    pub fn describe_game_session_queues(
        client: &GameLiftClient,
        queue_name: impl Into<String>,
    ) -> DescribeGameSessionQueues {
        AsyncProxy::new(
            client,
            DescribeGameSessionQueuesOp {
                queue_name: queue_name.into(),
            },
        )
    }

    /// Search game sessions on a fleet or alias
    pub fn search_game_sessions(
        client: &GameLiftClient,
        fleet_id: impl Into<String>,
        alias_id: impl Into<String>,
        filter_expression: impl Into<String>,
        sort_expression: impl Into<String>,
    ) -> SearchGameSessions {
        AsyncProxy::new(
            client,
            SearchGameSessionsOp {
                fleet_id: fleet_id.into(),
                alias_id: alias_id.into(),
                filter_expression: filter_expression.into(),
                sort_expression: sort_expression.into(),
            },
        )
    }
}
