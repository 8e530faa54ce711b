//! Request and response shapes of the GameLift JSON protocol
//!
//! Only the fields the proxies read or write are modelled. Unknown response
//! fields are ignored.

use serde::{Deserialize, Serialize};

use crate::status::GameSessionStatusCode;

/// A key/value game property attached to a new game session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GameProperty {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateGameSessionRequest {
    pub maximum_player_session_count: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fleet_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub game_properties: Vec<GameProperty>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateGameSessionResponse {
    #[serde(default)]
    pub game_session: Option<GameSession>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GameSession {
    #[serde(default)]
    pub game_session_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fleet_id: Option<String>,
    #[serde(default)]
    pub status: GameSessionStatusCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_player_session_count: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_player_session_count: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeGameSessionDetailsRequest {
    pub game_session_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeGameSessionDetailsResponse {
    #[serde(default)]
    pub game_session_details: Vec<GameSessionDetail>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GameSessionDetail {
    #[serde(default)]
    pub game_session: Option<GameSession>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protection_policy: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreatePlayerSessionRequest {
    pub game_session_id: String,
    pub player_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreatePlayerSessionResponse {
    #[serde(default)]
    pub player_session: Option<PlayerSession>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlayerSession {
    #[serde(default)]
    pub player_session_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_session_id: Option<String>,
    #[serde(default)]
    pub ip_address: String,
    #[serde(default)]
    pub port: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeGameSessionQueuesRequest {
    pub names: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeGameSessionQueuesResponse {
    #[serde(default)]
    pub game_session_queues: Vec<GameSessionQueue>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GameSessionQueue {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_session_queue_arn: Option<String>,
    #[serde(default)]
    pub destinations: Vec<GameSessionQueueDestination>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GameSessionQueueDestination {
    #[serde(default)]
    pub destination_arn: String,
}

/// Search request; every field is sent even when empty
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchGameSessionsRequest {
    pub fleet_id: String,
    pub alias_id: String,
    pub filter_expression: String,
    pub sort_expression: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchGameSessionsResponse {
    #[serde(default)]
    pub game_sessions: Vec<GameSession>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}
