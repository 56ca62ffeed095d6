//! Telegram Card main entry point
//!
//! This is the command-line interface for generating Telegram profile cards.

use anyhow::Context;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use telegram_card::card::{build_card, CardAction, CardRequest, Theme};
use telegram_card::config::{load_config_or_default, Config};
use telegram_card::fetch::{build_http_client, scrape_profile};
use telegram_card::output::{output_for, OutputFormat};
use tracing_subscriber::EnvFilter;

/// Telegram Card: preview cards for public Telegram profiles
///
/// Fetches the public t.me page of a channel, group, bot or user and prints
/// the card data for it. Without a username, prints where the card service
/// would redirect to.
#[derive(Parser, Debug)]
#[command(name = "telegram-card")]
#[command(version = "1.0.0")]
#[command(about = "Preview cards for public Telegram profiles", long_about = None)]
struct Cli {
    /// Handle (e.g. "durov") or a card URL ("...?username=durov&theme=dark")
    #[arg(value_name = "TARGET")]
    target: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Card theme (light or dark), overrides the config and the card URL
    #[arg(short, long)]
    theme: Option<String>,

    /// Output format (json or text)
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = load_config_or_default(cli.config.as_deref()).with_context(|| {
        format!(
            "Failed to load configuration from {}",
            cli.config
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "defaults".to_string())
        )
    })?;

    let request = build_request(&cli)?;

    match request.resolve(config.card.theme, &config.card.redirect_url) {
        CardAction::Redirect { location } => {
            tracing::info!("No username given, redirecting");
            println!("Location: {}", location);
            Ok(())
        }
        CardAction::Render { handle, theme } => handle_render(&config, &cli, &handle, theme).await,
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("telegram_card=warn,warn"),
            1 => EnvFilter::new("telegram_card=info,warn"),
            2 => EnvFilter::new("telegram_card=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Builds the card request from the positional target and `--theme`
fn build_request(cli: &Cli) -> anyhow::Result<CardRequest> {
    let mut request = match cli.target.as_deref() {
        Some(target) if target.contains("://") => {
            CardRequest::from_url(target).context("Invalid card URL")?
        }
        Some(handle) => CardRequest::new(Some(handle.to_string()), None),
        None => CardRequest::default(),
    };

    if let Some(theme) = cli.theme.as_deref() {
        request.theme = Some(Theme::from_name(theme));
    }

    Ok(request)
}

/// Fetches the profile and writes its card
async fn handle_render(config: &Config, cli: &Cli, handle: &str, theme: Theme) -> anyhow::Result<()> {
    tracing::info!("Generating {} card for @{}", theme, handle);

    let client = build_http_client(&config.fetch).context("Failed to build HTTP client")?;
    let result = scrape_profile(&client, &config.fetch.base_url, handle).await;

    if let Ok(record) = &result {
        tracing::info!("@{} is a {} profile", record.handle, record.kind);
    }

    let card = build_card(result, theme);
    let format = cli.format.unwrap_or(config.output.format);

    let stdout = std::io::stdout();
    let mut writer = stdout.lock();
    output_for(format).write_card(&card, &mut writer)?;
    writer.flush()?;

    Ok(())
}
