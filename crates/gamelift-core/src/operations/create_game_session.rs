//! CreateGameSession

use async_trait::async_trait;
use tracing::debug;

use crate::backend::model::{CreateGameSessionRequest, CreateGameSessionResponse, GameProperty};
use crate::backend::{BackendResult, SessionBackend};
use crate::error::BackendError;
use crate::proxy::Operation;

/// One key/value property passed to the game server on session creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSessionProperty {
    pub key: String,
    pub value: String,
}

/// Caller-supplied configuration for a new game session
///
/// # Example
///
/// ```rust
/// use gamelift_core::GameSessionConfig;
///
/// let config = GameSessionConfig::new(16)
///     .with_alias_id("alias-1234")
///     .with_local_fleet_id("fleet-local")
///     .with_property("map", "volcano")
///     .with_property("mode", "ranked");
///
/// assert_eq!(config.properties.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameSessionConfig {
    /// Maximum concurrent player sessions
    pub max_players: i32,
    /// Fleet ID used when addressing GameLift Local
    pub local_fleet_id: String,
    /// Alias ID used when addressing the regional service
    pub alias_id: String,
    /// Game properties, in the order they are sent
    pub properties: Vec<GameSessionProperty>,
}

impl GameSessionConfig {
    #[must_use]
    pub fn new(max_players: i32) -> Self {
        Self {
            max_players,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_alias_id(mut self, alias_id: impl Into<String>) -> Self {
        self.alias_id = alias_id.into();
        self
    }

    #[must_use]
    pub fn with_local_fleet_id(mut self, fleet_id: impl Into<String>) -> Self {
        self.local_fleet_id = fleet_id.into();
        self
    }

    /// Append a game property
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push(GameSessionProperty {
            key: key.into(),
            value: value.into(),
        });
        self
    }
}

/// Parameters of a CreateGameSession call
#[derive(Debug, Clone)]
pub struct CreateGameSessionOp {
    pub config: GameSessionConfig,
    /// Address the local fleet ID instead of the alias ID
    pub use_local: bool,
}

#[async_trait]
impl Operation for CreateGameSessionOp {
    const NAME: &'static str = "create game session";

    type Request = CreateGameSessionRequest;
    type Response = CreateGameSessionResponse;
    type Output = String;

    fn build_request(&self) -> CreateGameSessionRequest {
        let (fleet_id, alias_id) = if self.use_local {
            debug!("Setting fleet ID: {}", self.config.local_fleet_id);
            (Some(self.config.local_fleet_id.clone()), None)
        } else {
            debug!("Setting alias ID: {}", self.config.alias_id);
            (None, Some(self.config.alias_id.clone()))
        };

        let game_properties = self
            .config
            .properties
            .iter()
            .map(|property| {
                debug!(
                    "New game property added. Key: ({}) Value: ({})",
                    property.key, property.value
                );
                GameProperty {
                    key: property.key.clone(),
                    value: property.value.clone(),
                }
            })
            .collect();

        CreateGameSessionRequest {
            maximum_player_session_count: self.config.max_players,
            fleet_id,
            alias_id,
            game_properties,
        }
    }

    async fn submit(
        backend: &dyn SessionBackend,
        request: CreateGameSessionRequest,
    ) -> BackendResult<CreateGameSessionResponse> {
        backend.create_game_session(request).await
    }

    fn extract(&self, response: CreateGameSessionResponse) -> BackendResult<String> {
        response
            .game_session
            .map(|session| session.game_session_id)
            .ok_or_else(|| {
                BackendError::MalformedResponse(
                    "CreateGameSession response carried no game session".to_string(),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::model::GameSession;
    use pretty_assertions::assert_eq;

    fn config() -> GameSessionConfig {
        GameSessionConfig::new(10)
            .with_alias_id("alias-prod")
            .with_local_fleet_id("fleet-local")
            .with_property("map", "volcano")
            .with_property("difficulty", "hard")
    }

    #[test]
    fn test_local_addressing_sends_fleet_id_only() {
        let op = CreateGameSessionOp {
            config: config(),
            use_local: true,
        };
        let request = op.build_request();
        assert_eq!(request.fleet_id.as_deref(), Some("fleet-local"));
        assert_eq!(request.alias_id, None);
        assert_eq!(request.maximum_player_session_count, 10);
    }

    #[test]
    fn test_remote_addressing_sends_alias_id_only() {
        let op = CreateGameSessionOp {
            config: config(),
            use_local: false,
        };
        let request = op.build_request();
        assert_eq!(request.alias_id.as_deref(), Some("alias-prod"));
        assert_eq!(request.fleet_id, None);
    }

    #[test]
    fn test_properties_keep_order() {
        let op = CreateGameSessionOp {
            config: config(),
            use_local: false,
        };
        let keys: Vec<_> = op
            .build_request()
            .game_properties
            .into_iter()
            .map(|p| p.key)
            .collect();
        assert_eq!(keys, vec!["map", "difficulty"]);
    }

    #[test]
    fn test_extract_session_id() {
        let op = CreateGameSessionOp {
            config: config(),
            use_local: false,
        };
        let response = CreateGameSessionResponse {
            game_session: Some(GameSession {
                game_session_id: "gsess-42".to_string(),
                ..GameSession::default()
            }),
        };
        assert_eq!(op.extract(response).unwrap(), "gsess-42");
        assert!(op.extract(CreateGameSessionResponse::default()).is_err());
    }
}
