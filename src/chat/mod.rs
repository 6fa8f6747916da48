//! Chat application module for interactive conversations with DeepSeek.
//!
//! This module provides the REPL chat interface built on top of the profundo
//! client library. It supports:
//!
//! - A conversation session seeded with a system prompt
//! - Slash commands for session control
//! - Configurable model, system prompt, and temperature
//!
//! # Architecture
//!
//! The module is organized into several components:
//!
//! - [`config`]: CLI argument parsing and configuration
//! - [`session`]: Core chat session management and API interaction
//! - [`commands`]: Slash command parsing and handling

mod commands;
mod config;
mod session;

pub use crate::render::{PlainTextRenderer, Renderer};
pub use commands::{ChatCommand, help_text, parse_command};
pub use config::{ChatArgs, ChatConfig};
pub use session::{ChatSession, SessionStats};
