//! Entry point: parse CLI, load config and dispatch to command handlers.

use clap::Parser;
use mlb_hitter_lookup::{
    cli::{App, Commands, GetCmd},
    commands::{
        build_workflow,
        player_stats::{handle_player_stats, PlayerStatsParams},
        serve::handle_serve,
    },
    Config,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mlb_hitter_lookup=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let app = App::parse();

    let config = Config::from_env()?.with_overrides(
        match &app.command {
            Commands::Serve { bind } => *bind,
            Commands::Get { .. } => None,
        },
        app.api.api_base_url.clone(),
        app.api.timeout_secs,
    )?;

    match app.command {
        Commands::Serve { .. } => handle_serve(&config).await?,

        Commands::Get { cmd } => match cmd {
            GetCmd::PlayerStats {
                name,
                player_id,
                scope,
                season,
                json,
            } => {
                let workflow = build_workflow(&config)?;
                handle_player_stats(
                    &workflow,
                    PlayerStatsParams {
                        name,
                        player_id,
                        scope,
                        season,
                        as_json: json,
                    },
                )
                .await?
            }
        },
    }

    Ok(())
}
