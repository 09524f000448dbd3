use std::future::Future;
use std::io::Write;
use std::time::Duration;

use clap::Parser;
use dialoguer::{Input, Select};
use indicatif::ProgressBar;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use config::{Config, API_URL_ENV};
use error::{Result, ReviewCliError};
use gherkin_review::{cli, commands, config, error, http};
use gherkin_review_common::view::review::Decision;
use gherkin_review_common::{ApiClient, ReadinessGate, RejectionReason};

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// 通信中はスピナーを表示
async fn with_spinner<F>(message: &'static str, task: F) -> Result<()>
where
    F: Future<Output = Result<()>>,
{
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    let result = task.await;
    spinner.finish_and_clear();
    result
}

/// 却下理由とコメントを対話的に入力（Escで理由なし）
fn prompt_rejection(comment: Option<String>) -> Result<(Option<RejectionReason>, Option<String>)> {
    let labels: Vec<&str> = RejectionReason::ALL.iter().map(|r| r.label()).collect();
    let picked = Select::new()
        .with_prompt("Rejection reason")
        .items(&labels)
        .interact_opt()
        .map_err(|e| ReviewCliError::Prompt(e.to_string()))?;
    let reason = picked.map(|i| RejectionReason::ALL[i]);

    let comment = match (reason, comment) {
        (Some(_), None) => Some(
            Input::<String>::new()
                .with_prompt("Comment (optional)")
                .allow_empty(true)
                .interact_text()
                .map_err(|e| ReviewCliError::Prompt(e.to_string()))?,
        ),
        (_, comment) => comment,
    };
    Ok((reason, comment))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Commands::Config { set_api_url, show } = cli.command {
        let mut config = Config::load_from_or_default(&Config::config_path()?);
        if let Some(url) = set_api_url {
            config.set_api_base_url(url)?;
            tracing::info!("saved API base URL to {}", Config::config_path()?.display());
            println!("✔ API base URL saved");
        }

        if show {
            let effective = config.client_config(cli.api_url.as_deref());
            println!("Settings:");
            println!("  Config file:  {}", Config::config_path()?.display());
            println!("  API base URL: {}", effective.base_url);
            println!("  Timeout:      {}s", config.timeout_seconds);
            println!("  ({} overrides the config file)", API_URL_ENV);
        }
        return Ok(());
    }

    let config = Config::load()?;
    let client_config = config.client_config(cli.api_url.as_deref());
    tracing::debug!("using API base URL {}", client_config.base_url);
    let transport = http::ReqwestTransport::new(client_config.timeout_ms)?;
    let client = ApiClient::new(transport, client_config);
    let gate = ReadinessGate::new();
    // スピナーと混ざらないよう、出力は完了後にまとめて書く
    let mut buffer = Vec::new();

    let result = match cli.command {
        Commands::List => with_spinner("Loading...", commands::list(&client, &gate, &mut buffer)).await,
        Commands::Show { id } => {
            with_spinner("Loading...", commands::show(&client, &gate, &id, &mut buffer)).await
        }
        Commands::Accept { id } => {
            let task = commands::decide(&client, &gate, &id, Decision::Accept, None, None, &mut buffer);
            with_spinner("Accepting...", task).await
        }
        Commands::Reject { id, reason, comment } => {
            let (reason, comment) = match reason {
                Some(reason) => (Some(reason), comment),
                None => prompt_rejection(comment)?,
            };
            let task =
                commands::decide(&client, &gate, &id, Decision::Reject, reason, comment, &mut buffer);
            with_spinner("Rejecting...", task).await
        }
        Commands::Export => with_spinner("Exporting...", commands::export(&client, &mut buffer)).await,
        Commands::Feedback => with_spinner("Loading...", commands::feedback(&client, &mut buffer)).await,
        Commands::Config { .. } => Ok(()),
    };

    let mut stdout = std::io::stdout();
    stdout.write_all(&buffer)?;
    stdout.flush()?;
    result
}
