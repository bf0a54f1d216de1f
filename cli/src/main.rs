//! CLI entrypoint for Prompt Companion
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use companion_application::{ConversationLogger, NoConversationLogger, RunSessionUseCase};
use companion_infrastructure::{
    ApiCredential, ConfigError, ConfigLoader, FileConfig, JsonTranscriptStore,
    JsonlConversationLogger, OpenRouterGateway, load_dotenv,
};
use companion_presentation::{Cli, ConsolePresenter, OutputConfig, ReadlineInput, ReplConfig};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // .env must be loaded before the figment reads PROMPT_COMPANION_* overrides
    let dotenv_path = load_dotenv();

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(ConfigError::from)
            .context("Failed to load configuration")?
    };

    let _log_guard = init_tracing(cli.verbose, config.logging.file.as_deref())?;

    info!("Starting Prompt Companion");
    if let Some(path) = dotenv_path {
        info!("Environment loaded from {}", path.display());
    }

    let session_config = config
        .session_config()
        .map_err(ConfigError::from)
        .context("Invalid [model] configuration")?;

    // Missing credential is the one fatal startup condition
    let credential = ApiCredential::from_env(&config.api.api_key_env)?;

    // === Dependency Injection ===
    let gateway = Arc::new(OpenRouterGateway::new(&config.api, credential)?);
    let store = Arc::new(JsonTranscriptStore::new(config.transcript.file.clone()));
    let logger = conversation_logger(&config);

    let use_case = RunSessionUseCase::new(gateway, session_config, store).with_logger(logger);

    let presenter = ConsolePresenter::new(&output_config(&config));
    let mut input = ReadlineInput::new(&repl_config(&config))?;

    let exit = use_case.execute(&mut input, &presenter).await?;
    info!(?exit, "Session finished");

    Ok(())
}

/// Set up diagnostics. `RUST_LOG` wins over `-v`; with `[logging] file` set,
/// output goes to that file instead of stderr.
fn init_tracing(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    let file_name = path
        .file_name()
        .with_context(|| format!("Log file path has no file name: {}", path.display()))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

fn conversation_logger(config: &FileConfig) -> Arc<dyn ConversationLogger> {
    match config.logging.conversation_log.as_ref() {
        Some(path) => match JsonlConversationLogger::new(path) {
            Some(logger) => {
                info!("Conversation log: {}", logger.path().display());
                Arc::new(logger)
            }
            None => {
                warn!("Conversation logging disabled");
                Arc::new(NoConversationLogger)
            }
        },
        None => Arc::new(NoConversationLogger),
    }
}

fn output_config(config: &FileConfig) -> OutputConfig {
    OutputConfig {
        color: config.output.color,
        clear_screen: config.output.clear_screen,
    }
}

fn repl_config(config: &FileConfig) -> ReplConfig {
    ReplConfig {
        history_file: config.repl.history_file.clone(),
    }
}
