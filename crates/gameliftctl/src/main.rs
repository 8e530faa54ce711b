use anyhow::{Context, Result};
use clap::Parser;
use gamelift_core::{Config, ConfigError, GameLiftClient, Profile};
use tracing::{debug, info, trace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod error;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level
    init_tracing(cli.verbose);

    let profile = resolve_profile(&cli)?;
    trace!("Resolved profile: {:?}", profile);

    let client = GameLiftClient::connect(&profile)
        .await
        .context("Failed to create GameLift client")?;

    let start = std::time::Instant::now();
    let result = commands::execute(&cli.command, &client, profile.use_local).await;
    info!("Command completed in {:?}", start.elapsed());
    client.shutdown();

    match result {
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Pick the profile for this invocation
///
/// `--local` wins over any configuration. With no profiles configured but
/// `GAMELIFT_ENDPOINT` set, a default profile is used so the endpoint
/// override alone is enough.
fn resolve_profile(cli: &Cli) -> Result<Profile> {
    if cli.local {
        debug!("Using GameLift Local on port {}", cli.local_port);
        return Ok(Profile::local(cli.local_port));
    }

    let config = if let Some(config_file) = &cli.config_file {
        let path = std::path::PathBuf::from(config_file);
        debug!("Loading config from explicit path: {:?}", path);
        Config::load_from_path(&path)?
    } else {
        debug!("Loading config from default location");
        Config::load()?
    };

    match config.resolve_profile(cli.profile.as_deref()) {
        Ok(profile) => Ok(profile.clone()),
        Err(ConfigError::NoProfiles { .. })
            if std::env::var("GAMELIFT_ENDPOINT").is_ok_and(|v| !v.is_empty()) =>
        {
            debug!("No profiles configured, using GAMELIFT_ENDPOINT");
            Ok(Profile::default())
        }
        Err(e) => Err(e.into()),
    }
}

fn init_tracing(verbose: u8) {
    // Check for RUST_LOG env var first, then fall back to verbosity flag
    let filter = if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::EnvFilter::from_default_env()
    } else {
        let level = match verbose {
            0 => "gameliftctl=warn,gamelift_core=warn",
            1 => "gameliftctl=info,gamelift_core=info",
            2 => "gameliftctl=debug,gamelift_core=debug",
            _ => "gameliftctl=trace,gamelift_core=trace",
        };
        tracing_subscriber::EnvFilter::new(level)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false)
                .with_thread_names(false)
                .compact(),
        )
        .init();

    debug!("Tracing initialized with verbosity level: {}", verbose);
}
