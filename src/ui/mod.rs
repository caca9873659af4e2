//! Interactive chat loop
//!
//! A deliberately thin, line-oriented front end: prompt, read a line,
//! dispatch slash commands, otherwise send the message and print the reply.
//! The loop blocks while a call is in flight, so a second message cannot be
//! submitted until the current one resolves. All state it touches lives on
//! the [`SessionContext`].

use std::error::Error;
use std::io::{self, Write as _};
use std::path::Path;

use chrono::Local;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::commands::{parse_input, ChatCommand, ParsedInput, COMMAND_HELP};
use crate::core::config::Config;
use crate::core::conversation::export_filename;
use crate::core::message::Message;
use crate::core::registry::ModelRegistry;
use crate::core::session::SessionContext;

enum LoopControl {
    Continue,
    Quit,
}

pub async fn run_chat(
    model_arg: Option<String>,
    api_key_arg: Option<String>,
) -> Result<(), Box<dyn Error>> {
    let registry = ModelRegistry::builtin();
    let config = Config::load()?;

    let model = match model_arg.as_deref().or(config.default_model.as_deref()) {
        Some(id) => registry
            .find(id)
            .ok_or_else(|| {
                format!("Unknown model '{id}'. Run 'parley models' to list available models.")
            })?
            .clone(),
        None => registry.default_model().clone(),
    };

    let api_key = api_key_arg.or_else(|| std::env::var("OPENROUTER_API_KEY").ok());
    let mut session = SessionContext::new(model, api_key);

    print_banner(&session);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("You: ");
        io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            // EOF on stdin ends the session.
            break;
        };

        match parse_input(&line) {
            ParsedInput::Empty => {}
            ParsedInput::Message(content) => send_message(&mut session, content).await,
            ParsedInput::Command(command) => {
                if let LoopControl::Quit = handle_command(&mut session, &registry, command) {
                    break;
                }
            }
            ParsedInput::Unknown(name) => {
                println!("Unknown command: /{name}. Type /help for the list.");
            }
        }
    }

    Ok(())
}

fn print_banner(session: &SessionContext) {
    println!("🤖 Parley — chatting with {}", session.model().display_name);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    if !session.has_credential() {
        println!("⚠️  No API key found. Set OPENROUTER_API_KEY or use /key <token>.");
    }
    println!("Type a message and press Enter. /help lists commands; /quit exits.");
    println!();
}

async fn send_message(session: &mut SessionContext, content: String) {
    // Checked before the message enters the log, so a keyless attempt leaves
    // no trace to resend later.
    if !session.has_credential() {
        println!("❌ No API key set. Use /key <token> or export OPENROUTER_API_KEY.");
        return;
    }

    session.conversation.append(Message::user(content));

    println!("Thinking...");
    match session.send().await {
        Ok(reply) => {
            println!();
            println!("{}", reply.content);
            println!();
            session.conversation.append(reply);
        }
        Err(e) => {
            // The call is over; the user's message stays in the log and can
            // be resent by typing again.
            println!("❌ {e}");
        }
    }
}

fn handle_command(
    session: &mut SessionContext,
    registry: &ModelRegistry,
    command: ChatCommand,
) -> LoopControl {
    match command {
        ChatCommand::Help => {
            println!("Commands:");
            for (syntax, description) in COMMAND_HELP {
                println!("  {syntax:<14} {description}");
            }
        }
        ChatCommand::ListModels => {
            for model in registry.models() {
                let marker = if model.id == session.model().id {
                    "*"
                } else {
                    " "
                };
                println!("{marker} {} — {}", model.id, model.display_name);
            }
            println!();
            println!("Switch with /model <id>.");
        }
        ChatCommand::SelectModel(wanted) => {
            if wanted.is_empty() {
                println!("Usage: /model <id>");
            } else {
                match registry
                    .find(&wanted)
                    .or_else(|| registry.find_by_display_name(&wanted))
                {
                    Some(model) => {
                        session.set_model(model.clone());
                        println!(
                            "Model switched to {} ({})",
                            model.id, model.display_name
                        );
                        println!("   {}", model.description);
                    }
                    None => {
                        println!("Unknown model: {wanted}. Use /models to list them.");
                    }
                }
            }
        }
        ChatCommand::SetKey(token) => match token {
            Some(token) => {
                session.set_api_key(token);
                println!("API key set for this session.");
            }
            None => println!("Usage: /key <token>"),
        },
        ChatCommand::Save => {
            if session.conversation.is_empty() {
                println!("Nothing to save - the conversation is empty.");
            } else {
                let filename = export_filename(Local::now());
                match session.conversation.export_to_path(Path::new(&filename)) {
                    Ok(()) => println!("Conversation saved to {filename}"),
                    Err(e) => println!("❌ Save failed: {e}"),
                }
            }
        }
        ChatCommand::New => {
            session.conversation.reset();
            println!("Started a new conversation.");
        }
        ChatCommand::Quit => return LoopControl::Quit,
    }

    LoopControl::Continue
}
