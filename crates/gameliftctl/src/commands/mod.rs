//! Command execution
//!
//! Each command builds one proxy, binds both delegates to a channel,
//! activates it and waits for the single completion.

use gamelift_core::{AsyncProxy, GameLiftClient, GameSessionConfig, Operation, SessionOperations};
use serde::Serialize;
use serde_json::{Value, json};
use tokio::sync::mpsc;
use tracing::debug;

use crate::cli::Commands;
use crate::error::{GameLiftCtlError, Result};

/// Run one command and return the JSON document to print
pub async fn execute(command: &Commands, client: &GameLiftClient, use_local: bool) -> Result<Value> {
    match command {
        Commands::CreateGameSession {
            max_players,
            fleet_id,
            alias_id,
            properties,
        } => {
            let mut config = GameSessionConfig::new(*max_players);
            if let Some(fleet_id) = fleet_id {
                config = config.with_local_fleet_id(fleet_id);
            }
            if let Some(alias_id) = alias_id {
                config = config.with_alias_id(alias_id);
            }
            for (key, value) in properties {
                config = config.with_property(key, value);
            }

            let session_id =
                complete(SessionOperations::create_game_session(client, config, use_local)).await?;
            Ok(json!({ "game_session_id": session_id }))
        }
        Commands::DescribeGameSession { session_id } => {
            let described =
                complete(SessionOperations::describe_game_session(client, session_id)).await?;
            to_json(&described)
        }
        Commands::CreatePlayerSession {
            session_id,
            player_id,
        } => {
            let info = complete(SessionOperations::create_player_session(
                client, session_id, player_id,
            ))
            .await?;
            to_json(&info)
        }
        Commands::DescribeQueues { queue_name } => {
            let destinations = complete(SessionOperations::describe_game_session_queues(
                client, queue_name,
            ))
            .await?;
            Ok(json!({ "queue_name": queue_name, "destinations": destinations }))
        }
        Commands::SearchGameSessions {
            fleet_id,
            alias_id,
            filter,
            sort,
        } => {
            let ids = complete(SessionOperations::search_game_sessions(
                client, fleet_id, alias_id, filter, sort,
            ))
            .await?;
            Ok(json!({ "game_session_ids": ids }))
        }
    }
}

/// Activate `proxy` and wait for whichever delegate fires
async fn complete<Op>(proxy: AsyncProxy<Op>) -> Result<Op::Output>
where
    Op: Operation,
    Op::Output: Clone,
{
    let (tx, mut rx) = mpsc::unbounded_channel();
    let failure_tx = tx.clone();

    let status = proxy
        .with_on_success(move |output: &Op::Output| {
            let _ = tx.send(Ok(output.clone()));
        })
        .with_on_failure(move |message: &String| {
            let _ = failure_tx.send(Err(message.clone()));
        })
        .activate();

    if !status.is_success() {
        return Err(GameLiftCtlError::Refused {
            operation: Op::NAME,
            status,
        });
    }

    debug!("Waiting for {} to complete", Op::NAME);
    match rx.recv().await {
        Some(Ok(output)) => Ok(output),
        Some(Err(message)) => Err(GameLiftCtlError::OperationFailed {
            operation: Op::NAME,
            message,
        }),
        None => Err(GameLiftCtlError::NoCompletion {
            operation: Op::NAME,
        }),
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}
