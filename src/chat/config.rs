//! Configuration types for the chat application.
//!
//! This module provides CLI argument parsing via `arrrg` and configuration
//! structures for controlling chat behavior. Command-line arguments override
//! the values resolved from the secrets file and environment.

use arrrg_derive::CommandLine;

use crate::config::Config;
use crate::types::{DEFAULT_TEMPERATURE, Model};

/// Command-line arguments for the profundo-chat tool.
#[derive(CommandLine, Debug, Default, PartialEq)]
pub struct ChatArgs {
    /// Model to use for chat.
    #[arrrg(optional, "Model to use (default: deepseek-chat)", "MODEL")]
    pub model: Option<String>,

    /// System prompt to set context for the conversation.
    #[arrrg(optional, "System prompt for the conversation", "PROMPT")]
    pub system: Option<String>,

    /// Sampling temperature.
    #[arrrg(optional, "Sampling temperature (default: 0.3)", "TEMP")]
    pub temperature: Option<f32>,

    /// Path to the secrets file.
    #[arrrg(optional, "Secrets file path (default: secrets.yaml)", "PATH")]
    pub secrets: Option<String>,

    /// Disable ANSI colors and styles.
    #[arrrg(flag, "Disable ANSI colors/styles")]
    pub no_color: bool,
}

impl Eq for ChatArgs {}

/// Configuration for a chat session.
///
/// This struct holds the session-facing values after layering command-line
/// arguments over the resolved process [`Config`].
#[derive(Debug, Clone, PartialEq)]
pub struct ChatConfig {
    /// The model to use for generating responses.
    pub model: Model,

    /// The system prompt seeding the conversation.
    pub system_prompt: String,

    /// Sampling temperature sent with every request.
    pub temperature: f32,

    /// Whether to use ANSI colors and styles in output.
    pub use_color: bool,
}

impl ChatConfig {
    /// Creates a chat configuration from resolved process configuration.
    pub fn from_resolved(config: &Config) -> Self {
        Self {
            model: config.model.clone(),
            system_prompt: config.system_prompt.clone(),
            temperature: DEFAULT_TEMPERATURE,
            use_color: true,
        }
    }

    /// Layers command-line arguments over this configuration.
    pub fn with_args(mut self, args: &ChatArgs) -> Self {
        if let Some(model) = &args.model {
            self.model = Model::from(model.as_str());
        }
        if let Some(system) = &args.system {
            self.system_prompt = system.clone();
        }
        if let Some(temperature) = args.temperature {
            self.temperature = temperature;
        }
        if args.no_color {
            self.use_color = false;
        }
        self
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    /// Sets the system prompt.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    /// Sets the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Disables ANSI color output.
    pub fn without_color(mut self) -> Self {
        self.use_color = false;
        self
    }
}
