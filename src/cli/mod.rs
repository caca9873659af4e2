//! Command-line interface parsing and handling
//!
//! This module handles parsing command-line arguments and executing the
//! appropriate commands.

pub mod model_list;

use std::error::Error;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::cli::model_list::list_models;
use crate::core::config::Config;
use crate::core::registry::ModelRegistry;
use crate::ui::run_chat;

#[derive(Parser)]
#[command(name = "parley")]
#[command(about = "A terminal chat client for OpenRouter's chat-completions API")]
#[command(
    long_about = "Parley is a line-oriented terminal chat client that talks to OpenRouter's \
chat-completions API. Pick one of the built-in models, type messages, and read \
the replies; the full history is resent on every call.\n\n\
Environment Variables:\n\
  OPENROUTER_API_KEY  Bearer token for the gateway (kept in memory only)\n\
  RUST_LOG            Diagnostic log filter (e.g. parley=debug)\n\n\
Chat Commands:\n\
  /help               Show available commands\n\
  /models             List the selectable models\n\
  /model <id>         Switch to another model\n\
  /key <token>        Set the API key for this session\n\
  /save               Export the conversation to a text file\n\
  /new                Start a new conversation\n\
  /quit               Exit"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Model to chat with (a registry id; see 'parley models')
    #[arg(short = 'm', long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Bearer token for the gateway; overrides OPENROUTER_API_KEY
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the chat session (default)
    Chat,
    /// List the built-in models
    Models,
    /// Persist a default model in the config file
    SetDefaultModel {
        /// Registry id of the model
        model: String,
    },
}

pub fn main() -> Result<(), Box<dyn Error>> {
    tokio::runtime::Runtime::new()
        .unwrap()
        .block_on(async_main())
}

async fn async_main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    match args.command {
        Some(Commands::Models) => list_models(),
        Some(Commands::SetDefaultModel { model }) => set_default_model(&model),
        Some(Commands::Chat) | None => run_chat(args.model, args.api_key).await,
    }
}

fn set_default_model(model: &str) -> Result<(), Box<dyn Error>> {
    let registry = ModelRegistry::builtin();
    let Some(spec) = registry.find(model) else {
        return Err(
            format!("Unknown model '{model}'. Run 'parley models' to list available models.")
                .into(),
        );
    };

    let mut config = Config::load()?;
    config.default_model = Some(spec.id.clone());
    config.save()?;
    println!("🎯 Default model set to {} ({})", spec.id, spec.display_name);
    Ok(())
}
