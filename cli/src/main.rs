//! CLI entrypoint for strands
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use strands_application::{
    CallbackPresenter, ManageWelcomeUseCase, PresenterParams, StoreConversationUseCase,
    StoreInKnowledgeBaseUseCase, StoreInput,
};
use strands_domain::{CallbackRecord, ChatMessage, WelcomeAction};
use strands_infrastructure::{
    ConfigLoader, FileConfig, FileWelcomeStore, JsonlKnowledgeBase, JsonlRecordSource,
    SystemPromptLoader,
};
use strands_presentation::{Cli, Command, ConsoleNotifier, Panel, TerminalRenderer};
use tokio::io::AsyncReadExt;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // Logs go to stderr off-thread so they never tear spinner frames on stdout
    let (writer, _log_guard) = tracing_appender::non_blocking(std::io::stderr());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(writer)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let params = config
        .presenter
        .to_params()
        .with_color(config.presenter.color && !cli.no_color);
    if !params.color {
        colored::control::set_override(false);
    }

    info!("Starting strands");

    let cwd = std::env::current_dir()?;
    let default_kb = cli
        .knowledge_base_id
        .clone()
        .or_else(|| config.knowledge_base.id.clone());

    match cli.command {
        None => show_welcome_panel(&cwd, &params),
        Some(Command::Replay { file, pace_ms }) => replay(&file, pace_ms, &params).await,
        Some(Command::Welcome { action, content }) => manage_welcome(&cwd, &action, content),
        Some(Command::Store { content, title }) => {
            let content = if content == "-" {
                read_stdin().await?
            } else {
                content
            };
            let use_case = knowledge_base(&config, default_kb);
            let mut input = StoreInput::new(content);
            if let Some(title) = title {
                input = input.with_title(title);
            }
            let receipt = use_case.store(input)?;
            for line in receipt.summary_lines() {
                println!("{}", line);
            }
            receipt.wait().await;
            Ok(())
        }
        Some(Command::StoreConversation { user, response }) => {
            let response = match response {
                Some(path) => Some(read_chat_message(&path).await?),
                None => None,
            };
            let use_case = knowledge_base(&config, default_kb);
            let stored =
                StoreConversationUseCase::new(&use_case).execute(&user, response.as_ref(), None)?;
            match stored {
                Some(receipt) => {
                    for line in receipt.summary_lines() {
                        println!("{}", line);
                    }
                    receipt.wait().await;
                }
                None => info!("No knowledge base configured, nothing stored"),
            }
            Ok(())
        }
        Some(Command::Prompt) => {
            let explicit = cli
                .system_prompt
                .as_deref()
                .or(config.prompt.system_prompt.as_deref());
            println!("{}", SystemPromptLoader::in_dir(&cwd).resolve(explicit));
            Ok(())
        }
    }
}

/// Feed a recorded session through one presenter.
async fn replay(file: &Path, pace_ms: u64, params: &PresenterParams) -> Result<()> {
    // === Dependency Injection ===
    let renderer = Arc::new(TerminalRenderer::new(params));
    let mut presenter = CallbackPresenter::new(renderer);
    if params.notify_on_completion {
        presenter = presenter.with_notifier(Arc::new(ConsoleNotifier));
    }
    let callback = Arc::new(presenter).callback();

    let mut source = JsonlRecordSource::open(file).await?;
    while let Some(record) = source.next_record().await? {
        callback(&record);
        if pace_ms > 0 {
            tokio::time::sleep(Duration::from_millis(pace_ms)).await;
        }
    }
    callback(&CallbackRecord::new().with_force_stop());

    if source.skipped() > 0 {
        warn!("Skipped {} invalid record(s)", source.skipped());
    }

    println!();
    println!("{}", Panel::goodbye().render(params.color));
    Ok(())
}

fn manage_welcome(cwd: &Path, action: &str, content: Option<String>) -> Result<()> {
    let action = WelcomeAction::parse(action, content)?;
    let use_case = ManageWelcomeUseCase::new(Arc::new(FileWelcomeStore::in_dir(cwd)));
    let outcome = use_case.execute(action)?;
    println!("{}", outcome.message());
    Ok(())
}

fn show_welcome_panel(cwd: &Path, params: &PresenterParams) -> Result<()> {
    let use_case = ManageWelcomeUseCase::new(Arc::new(FileWelcomeStore::in_dir(cwd)));
    let outcome = use_case.execute(WelcomeAction::View)?;
    println!("{}", Panel::welcome(outcome.message()).render(params.color));
    Ok(())
}

fn knowledge_base(config: &FileConfig, default_kb: Option<String>) -> StoreInKnowledgeBaseUseCase {
    let store = Arc::new(JsonlKnowledgeBase::new(
        config.knowledge_base.directory.clone(),
    ));
    StoreInKnowledgeBaseUseCase::new(store).with_default_knowledge_base(default_kb)
}

async fn read_stdin() -> Result<String> {
    let mut content = String::new();
    tokio::io::stdin().read_to_string(&mut content).await?;
    Ok(content)
}

async fn read_chat_message(path: &Path) -> Result<ChatMessage> {
    let text = tokio::fs::read_to_string(path).await?;
    serde_json::from_str(&text)
        .map_err(|e| anyhow!("Invalid chat message in {}: {}", path.display(), e))
}
