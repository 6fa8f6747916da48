// Public modules
pub mod chat;
pub mod client;
pub mod config;
pub mod error;
pub mod observability;
pub mod render;
pub mod types;

// Re-exports
pub use client::DeepSeek;
pub use config::{Config, Resolver};
pub use error::{Error, Result};
pub use render::{PlainTextRenderer, Renderer};
pub use types::*;
