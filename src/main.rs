mod api;
mod cli;
mod config;
mod error;
mod model;
mod service;
mod startup;
mod util;

use clap::Parser;
use std::{
    io::{self, BufRead, Write},
    process::ExitCode,
};

use crate::{
    api::DiscordClient,
    cli::{prompt, Cli},
    config::{RemovalConfig, DISCORD_API_URL},
    error::AppError,
    service::remover::RemovalEngine,
};

const BANNER: &str = concat!("discord-rm ", env!("CARGO_PKG_VERSION"));

const SELF_BOT_WARNING: &str = "WARNING: Automating a user account is against Discord's \
Terms of Service and can get the account terminated. Use at your own risk.";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    startup::init_tracing(cli.log_level());

    println!("{}", BANNER);

    let config = match prepare(cli) {
        Ok(Some(config)) => config,
        Ok(None) => {
            println!("Aborting operation.");
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("ERROR: {}", e);
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!("Using {:?}", config);

    let http_client = match startup::setup_reqwest_client() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("ERROR: {}", AppError::from(e));
            return ExitCode::FAILURE;
        }
    };

    let api = DiscordClient::new(&http_client, &config);
    let report = RemovalEngine::new(&api, &config).run().await;

    if report.status.exit_code() == 0 {
        println!("{}", report);
    } else {
        eprintln!("{}", report);
    }

    ExitCode::from(report.status.exit_code())
}

/// Collects the session configuration from the command line, environment and prompts.
///
/// # Arguments
/// - `cli` - Parsed command line
///
/// # Returns
/// - `Ok(Some(RemovalConfig))` - Validated configuration, confirmed by the user
/// - `Ok(None)` - The user declined the confirmation prompt
/// - `Err(AppError)` - Invalid configuration or failed prompt
fn prepare(mut cli: Cli) -> Result<Option<RemovalConfig>, AppError> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let token = match std::env::var("DISCORD_TOKEN") {
        Ok(token) if !token.trim().is_empty() => token,
        _ => prompt::ask(&mut input, &mut output, "Enter your Discord token: ")?,
    };

    if cli.interactive {
        prompt::fill_identity(&mut input, &mut output, &mut cli)?;
    }

    let api_url = std::env::var("DISCORD_API_URL").unwrap_or_else(|_| DISCORD_API_URL.to_string());
    let config = RemovalConfig::from_cli(&cli, token, api_url)?;

    writeln!(output, "{}", SELF_BOT_WARNING)?;

    if !cli.no_confirm && !confirm_removal(&mut input, &mut output, &config)? {
        return Ok(None);
    }

    Ok(Some(config))
}

fn confirm_removal<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    config: &RemovalConfig,
) -> Result<bool, AppError> {
    let target = if config.is_dm() {
        format!("direct message channel {}", config.channel_id)
    } else {
        format!("channel {} in guild {}", config.channel_id, config.guild_id)
    };
    let question = format!(
        "Delete all messages from {} in {}? [y/N] ",
        config.sender_id, target
    );

    Ok(prompt::confirm(input, output, &question)?)
}
