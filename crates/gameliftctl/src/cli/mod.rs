//! CLI structure and command definitions

use clap::{ArgGroup, Parser, Subcommand};

/// Drive GameLift session operations from the command line
#[derive(Parser, Debug)]
#[command(name = "gameliftctl")]
#[command(version, about = "GameLift session client for fleets, queues and players")]
#[command(long_about = "
GameLift session client for fleets, queues and players

Every command submits one request and prints the result as JSON.

EXAMPLES:
    # Against GameLift Local on port 9080
    gameliftctl --local create-game-session --max-players 8 --fleet-id fleet-123

    # Using a configured profile
    gameliftctl --profile prod describe-game-session --session-id gsess-1

    # Reserve a slot for a player
    gameliftctl create-player-session --session-id gsess-1 --player-id player-7

For more help on a specific command, run:
    gameliftctl <command> --help
")]
pub struct Cli {
    /// Profile to use for this command
    #[arg(long, short, global = true, env = "GAMELIFTCTL_PROFILE")]
    pub profile: Option<String>,

    /// Path to alternate configuration file
    #[arg(long, global = true, env = "GAMELIFTCTL_CONFIG_FILE")]
    pub config_file: Option<String>,

    /// Address GameLift Local instead of a configured profile
    #[arg(long, global = true)]
    pub local: bool,

    /// Port of GameLift Local, used with --local
    #[arg(long, global = true, default_value_t = gamelift_core::config::config::DEFAULT_LOCAL_PORT)]
    pub local_port: u16,

    /// Enable verbose logging
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a game session on a fleet (local) or alias (remote)
    #[command(group(ArgGroup::new("target").required(true).multiple(true).args(["fleet_id", "alias_id"])))]
    CreateGameSession {
        /// Maximum number of concurrent players
        #[arg(long)]
        max_players: i32,

        /// Fleet addressed when running against GameLift Local
        #[arg(long)]
        fleet_id: Option<String>,

        /// Alias addressed when running against the regional service
        #[arg(long)]
        alias_id: Option<String>,

        /// Game property as key=value (repeatable)
        #[arg(long = "property", value_parser = parse_property)]
        properties: Vec<(String, String)>,
    },

    /// Describe a game session's ID and status
    DescribeGameSession {
        /// Game session ID
        #[arg(long)]
        session_id: String,
    },

    /// Reserve a player slot in a game session
    CreatePlayerSession {
        /// Game session ID
        #[arg(long)]
        session_id: String,

        /// Player ID
        #[arg(long)]
        player_id: String,
    },

    /// List the destination ARNs of a game session queue
    #[command(name = "describe-queues")]
    DescribeQueues {
        /// Queue name
        #[arg(long)]
        queue_name: String,
    },

    /// Search game sessions on a fleet or alias
    SearchGameSessions {
        #[arg(long, default_value = "")]
        fleet_id: String,

        #[arg(long, default_value = "")]
        alias_id: String,

        /// Filter expression, e.g. "hasAvailablePlayerSessions=true"
        #[arg(long, default_value = "")]
        filter: String,

        /// Sort expression, e.g. "creationTimeMillis ASC"
        #[arg(long, default_value = "")]
        sort: String,
    },
}

fn parse_property(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got '{s}'")),
    }
}
