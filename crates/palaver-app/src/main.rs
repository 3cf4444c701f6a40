mod cli;
mod repl;
mod terminal;

use std::io::IsTerminal;
use std::process::ExitCode;
use std::time::Duration;

use palaver_ai::{CompletionConfig, Conversation, OpenAiClient, Session};
use palaver_common::PalaverError;
use palaver_config::PalaverConfig;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

use crate::terminal::TerminalPresenter;

/// Load environment variables from a `.env` file (KEY=VALUE lines) in the
/// current directory. Variables already set in the environment win.
fn load_dotenv() {
    let Ok(contents) = std::fs::read_to_string(".env") else {
        return;
    };
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            let value = value.trim().trim_matches('"').trim_matches('\'');
            if std::env::var(key).is_err() {
                std::env::set_var(key, value);
            }
        }
    }
}

fn init_logging(directive: &str) {
    let filter = EnvFilter::from_default_env();
    let filter = match directive.parse::<Directive>() {
        Ok(directive) => filter.add_directive(directive),
        Err(e) => {
            eprintln!("palaver: ignoring log directive {directive:?}: {e}");
            filter.add_directive(LevelFilter::INFO.into())
        }
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

/// Apply command-line overrides and re-check the result.
fn apply_overrides(config: &mut PalaverConfig, args: &cli::Args) -> Result<(), PalaverError> {
    if let Some(ref model) = args.model {
        config.completion.model = model.clone();
    }
    if let Some(max_turns) = args.max_turns {
        config.session.max_turns = max_turns;
    }
    palaver_config::validation::validate(config)?;
    Ok(())
}

fn completion_config(config: &PalaverConfig, credential: String) -> CompletionConfig {
    let section = &config.completion;
    CompletionConfig::new(credential)
        .with_endpoint(section.endpoint.clone())
        .with_model(section.model.clone())
        .with_max_tokens(section.max_tokens)
        .with_temperature(section.temperature)
        .with_timeouts(
            Duration::from_secs(u64::from(section.connect_timeout_secs)),
            Duration::from_secs(u64::from(section.request_timeout_secs)),
        )
}

async fn run(config: PalaverConfig) -> Result<(), PalaverError> {
    let credential = palaver_config::resolve_api_key(&config)?;
    let client = OpenAiClient::new(completion_config(&config, credential))
        .map_err(|e| PalaverError::Ai(e.to_string()))?;

    let session = Session::new(
        config.session.system_prompt.clone(),
        config.session.max_turns as usize,
    );
    let mut conversation = Conversation::new(session, client);

    let interactive = std::io::stdin().is_terminal();
    let mut presenter = TerminalPresenter::new(std::io::stdout(), !interactive);
    if interactive {
        presenter.notice(&format!(
            "Chatting with {} (enter to send, trailing \\ for a new line, /clear, /exit)",
            config.completion.model
        ));
    }

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    repl::run(&mut conversation, stdin, &mut presenter).await
}

fn main() -> ExitCode {
    // Load .env file before anything else
    load_dotenv();

    let args = cli::parse();

    let mut config = match palaver_config::load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("palaver: {e}");
            return ExitCode::FAILURE;
        }
    };

    let directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.directive().to_string());
    init_logging(&directive);

    tracing::info!("Palaver v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Err(e) = apply_overrides(&mut config, &args) {
        tracing::error!("{e}");
        eprintln!("palaver: {e}");
        return ExitCode::FAILURE;
    }
    tracing::debug!(config = %palaver_config::config_to_json(&config), "Config loaded");

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to create tokio runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(config)) {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("palaver: {e}");
            ExitCode::FAILURE
        }
    }
}
