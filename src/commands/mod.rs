//! Slash-command parsing for the chat loop
//!
//! Input starting with `/` is dispatched as a command; everything else is a
//! chat message. Parsing is pure so the loop can stay a thin shell around it.

/// Commands the chat loop understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    Help,
    ListModels,
    /// Switch the active model. The argument may be a registry id or a
    /// display name; an empty argument prompts a usage hint.
    SelectModel(String),
    /// Set the session credential. `None` when no token was supplied.
    SetKey(Option<String>),
    Save,
    New,
    Quit,
}

/// One line of user input, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedInput {
    Empty,
    Message(String),
    Command(ChatCommand),
    Unknown(String),
}

/// Command names and help lines shown by `/help`.
pub const COMMAND_HELP: &[(&str, &str)] = &[
    ("/help", "Show available commands"),
    ("/models", "List the selectable models"),
    ("/model <id>", "Switch to another model"),
    ("/key <token>", "Set the API key for this session"),
    ("/save", "Export the conversation to a text file"),
    ("/new", "Start a new conversation"),
    ("/quit", "Exit"),
];

pub fn parse_input(input: &str) -> ParsedInput {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return ParsedInput::Empty;
    }
    if !trimmed.starts_with('/') {
        return ParsedInput::Message(trimmed.to_string());
    }

    let mut parts = trimmed[1..].splitn(2, ' ');
    let name = match parts.next() {
        Some(name) if !name.is_empty() => name,
        // A bare "/" is just a message.
        _ => return ParsedInput::Message(trimmed.to_string()),
    };
    let args = parts.next().unwrap_or("").trim();

    match name.to_ascii_lowercase().as_str() {
        "help" => ParsedInput::Command(ChatCommand::Help),
        "models" => ParsedInput::Command(ChatCommand::ListModels),
        "model" => ParsedInput::Command(ChatCommand::SelectModel(args.to_string())),
        "key" => ParsedInput::Command(ChatCommand::SetKey(
            Some(args.to_string()).filter(|token| !token.is_empty()),
        )),
        "save" => ParsedInput::Command(ChatCommand::Save),
        "new" => ParsedInput::Command(ChatCommand::New),
        "quit" | "exit" => ParsedInput::Command(ChatCommand::Quit),
        _ => ParsedInput::Unknown(name.to_string()),
    }
}
