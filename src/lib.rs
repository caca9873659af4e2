//! Parley is a line-oriented terminal chat client for OpenRouter's
//! chat-completions API.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`core`] owns the conversation log, the built-in model registry, the
//!   per-session context, and persistent configuration.
//! - [`api`] defines the chat-completions payloads and the adapter that
//!   performs the single outbound call per user action.
//! - [`commands`] implements slash-command parsing used by the chat loop.
//! - [`ui`] runs the interactive prompt loop.
//!
//! Runtime entrypoints live in the binary crate (`src/main.rs`) and route
//! through [`crate::cli::main`], which dispatches into [`ui::run_chat`] for
//! interactive sessions.

pub mod api;
pub mod cli;
pub mod commands;
pub mod core;
pub mod ui;
