//! Conversation log for one interactive session
//!
//! An ordered, append-only record of the messages exchanged so far. The log
//! enforces no role alternation: after a failed call the user's message stays
//! in place, so consecutive user entries are legal. State lives only in
//! memory unless the user explicitly exports it to a transcript file.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Local};

use crate::api::models::ChatMessage;
use crate::core::message::Message;

#[derive(Debug, Default)]
pub struct ConversationLog {
    messages: Vec<Message>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to the end of the log. Earlier entries are never
    /// touched; there is no size bound within a session.
    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Clear the log for a new conversation.
    pub fn reset(&mut self) {
        self.messages.clear();
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Map the full history to wire payload messages. Every prior message is
    /// resent on every call; the adapter does no truncation or windowing.
    pub fn api_messages(&self) -> Vec<ChatMessage> {
        self.messages
            .iter()
            .map(|msg| ChatMessage {
                role: msg.role.as_str().to_string(),
                content: msg.content.clone(),
            })
            .collect()
    }

    /// Write the transcript as repeated `Label: content` blocks, each
    /// followed by a blank line.
    pub fn write_transcript<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for msg in &self.messages {
            writeln!(writer, "{}: {}", msg.role.label(), msg.content)?;
            writeln!(writer)?;
        }
        Ok(())
    }

    /// Export the transcript to `path`. Exporting an empty log is an error
    /// and creates no file; callers are expected to check first.
    pub fn export_to_path(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if self.is_empty() {
            return Err("nothing to save - the conversation is empty".into());
        }

        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_transcript(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

/// Timestamped export filename, unique per second to avoid collisions.
pub fn export_filename(timestamp: DateTime<Local>) -> String {
    format!("chat_export_{}.txt", timestamp.format("%Y%m%d_%H%M%S"))
}
