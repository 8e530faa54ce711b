//! # gamelift-core
//!
//! Fire-and-forget proxies for the GameLift session API.
//!
//! Five operations are exposed, all built on the same validated async proxy:
//!
//! | Operation | Success payload |
//! |---|---|
//! | [`SessionOperations::create_game_session`] | game session ID |
//! | [`SessionOperations::describe_game_session`] | [`DescribedGameSession`] |
//! | [`SessionOperations::create_player_session`] | [`PlayerSessionInfo`] |
//! | [`SessionOperations::describe_game_session_queues`] | destination ARNs |
//! | [`SessionOperations::search_game_sessions`] | game session IDs |
//!
//! Every failure subscriber receives the backend's error message as a
//! `String`.
//!
//! ## Layers
//!
//! - **client** - [`GameLiftClient`], the shared backend handle
//! - **proxy** - [`AsyncProxy`] and the [`Operation`] trait
//! - **operations** - the five operation mappings and their factory
//! - **backend** - the [`SessionBackend`] seam and the HTTP implementation
//! - **config** - profiles loaded from TOML
//!
//! ## Example
//!
//! ```rust,ignore
//! use gamelift_core::{Config, GameLiftClient, SessionOperations};
//!
//! let config = Config::load()?;
//! let client = GameLiftClient::connect(config.resolve_profile(None)?).await?;
//!
//! let status = SessionOperations::create_player_session(&client, "gsess-1", "player-7")
//!     .with_on_success(|info| println!("connect to {}:{}", info.ip_address, info.port))
//!     .with_on_failure(|message| eprintln!("{message}"))
//!     .activate();
//! ```

pub mod backend;
pub mod client;
pub mod config;
pub mod delegate;
pub mod error;
pub mod operations;
pub mod proxy;
pub mod status;
pub mod testing;

pub use backend::SessionBackend;
#[cfg(feature = "http-backend")]
pub use backend::HttpBackend;
pub use client::GameLiftClient;
pub use config::{Config, ConfigError, Profile};
pub use delegate::{MulticastDelegate, SubscriptionId};
pub use error::{BackendError, CoreError, Result};
pub use operations::{
    DescribedGameSession, GameSessionConfig, GameSessionProperty, PlayerSessionInfo,
    SessionOperations,
};
pub use proxy::{ActivateStatus, AsyncProxy, Operation};
pub use status::{GameSessionStatusCode, SessionStatus};
