//! Game session status codes and their local translation

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Status code as reported by the backend
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GameSessionStatusCode {
    Activating,
    Active,
    Error,
    /// Also what an absent status field deserializes to
    #[default]
    NotSet,
    Terminated,
    Terminating,
    /// A code this client does not know about
    Unknown(String),
}

impl GameSessionStatusCode {
    /// Wire representation
    pub fn as_str(&self) -> &str {
        match self {
            GameSessionStatusCode::Activating => "ACTIVATING",
            GameSessionStatusCode::Active => "ACTIVE",
            GameSessionStatusCode::Error => "ERROR",
            GameSessionStatusCode::NotSet => "NOT_SET",
            GameSessionStatusCode::Terminated => "TERMINATED",
            GameSessionStatusCode::Terminating => "TERMINATING",
            GameSessionStatusCode::Unknown(code) => code,
        }
    }

    /// Parse a wire code; never fails
    pub fn parse(code: &str) -> Self {
        match code {
            "ACTIVATING" => GameSessionStatusCode::Activating,
            "ACTIVE" => GameSessionStatusCode::Active,
            "ERROR" => GameSessionStatusCode::Error,
            "NOT_SET" | "" => GameSessionStatusCode::NotSet,
            "TERMINATED" => GameSessionStatusCode::Terminated,
            "TERMINATING" => GameSessionStatusCode::Terminating,
            other => GameSessionStatusCode::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for GameSessionStatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for GameSessionStatusCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for GameSessionStatusCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(GameSessionStatusCode::parse(&code))
    }
}

/// Game session status handed to success subscribers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionStatus {
    Activating,
    Active,
    Error,
    NotSet,
    Terminated,
    Terminating,
    NoStatus,
}

impl From<&GameSessionStatusCode> for SessionStatus {
    fn from(code: &GameSessionStatusCode) -> Self {
        match code {
            GameSessionStatusCode::Activating => SessionStatus::Activating,
            GameSessionStatusCode::Active => SessionStatus::Active,
            GameSessionStatusCode::Error => SessionStatus::Error,
            GameSessionStatusCode::NotSet => SessionStatus::NotSet,
            GameSessionStatusCode::Terminated => SessionStatus::Terminated,
            GameSessionStatusCode::Terminating => SessionStatus::Terminating,
            GameSessionStatusCode::Unknown(code) => {
                tracing::warn!("Unrecognized game session status '{}', reporting NoStatus", code);
                SessionStatus::NoStatus
            }
        }
    }
}

impl From<GameSessionStatusCode> for SessionStatus {
    fn from(code: GameSessionStatusCode) -> Self {
        SessionStatus::from(&code)
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionStatus::Activating => "activating",
            SessionStatus::Active => "active",
            SessionStatus::Error => "error",
            SessionStatus::NotSet => "not-set",
            SessionStatus::Terminated => "terminated",
            SessionStatus::Terminating => "terminating",
            SessionStatus::NoStatus => "no-status",
        };
        f.write_str(name)
    }
}
