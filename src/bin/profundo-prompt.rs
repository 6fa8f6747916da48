//! Command-line tool for one-shot DeepSeek completions.
//!
//! Sends a single user message to the completions endpoint and prints the
//! reply. The prompt is taken from the positional arguments, or from stdin
//! when no arguments are given.
//!
//! # Usage
//!
//! ```bash
//! # Prompt from arguments
//! profundo-prompt "¿Qué es un capacitor?"
//!
//! # Prompt from stdin
//! echo "¿Qué es un capacitor?" | profundo-prompt
//!
//! # Override the model
//! profundo-prompt --model deepseek-reasoner "Explica la ley de Ohm"
//! ```

use std::io::Read;
use std::path::Path;
use std::process;

use arrrg::CommandLine;
use arrrg_derive::CommandLine;

use profundo::{
    ChatCompletionParams, Config, DeepSeek, Message, Model,
};

/// Command-line arguments for the profundo-prompt tool.
#[derive(CommandLine, Debug, Default, PartialEq)]
struct Args {
    /// Model to use for the completion.
    #[arrrg(optional, "Model to use (default: deepseek-chat)", "MODEL")]
    model: Option<String>,

    /// System prompt overriding the resolved one.
    #[arrrg(optional, "System prompt for the completion", "PROMPT")]
    system: Option<String>,

    /// Sampling temperature.
    #[arrrg(optional, "Sampling temperature (default: 0.3)", "TEMP")]
    temperature: Option<f32>,

    /// Path to the secrets file.
    #[arrrg(optional, "Secrets file path (default: secrets.yaml)", "PATH")]
    secrets: Option<String>,
}

impl Eq for Args {}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (args, free) = Args::from_command_line_relaxed("profundo-prompt [OPTIONS] [PROMPT]");

    let secrets_path = args.secrets.as_deref().map(Path::new);
    let config = match Config::resolve_with_secrets(secrets_path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("profundo-prompt: {err}");
            process::exit(1);
        }
    };

    let prompt = if free.is_empty() {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer.trim().to_string()
    } else {
        free.join(" ")
    };
    if prompt.is_empty() {
        eprintln!("profundo-prompt: no prompt given");
        process::exit(1);
    }

    let model = match args.model {
        Some(name) => Model::from(name),
        None => config.model.clone(),
    };
    let system_prompt = args.system.unwrap_or_else(|| config.system_prompt.clone());

    let client = DeepSeek::new(Some(config.api_key.clone()))?;
    let mut params = ChatCompletionParams::new(
        model,
        vec![Message::system(system_prompt), Message::user(prompt)],
    );
    if let Some(temperature) = args.temperature {
        params = params.with_temperature(temperature);
    }

    match client.complete(params).await {
        Ok(completion) => match completion.first_content() {
            Some(content) => {
                println!("{content}");
                Ok(())
            }
            None => {
                eprintln!("profundo-prompt: response contained no choices");
                process::exit(1);
            }
        },
        Err(err) => {
            eprintln!("profundo-prompt: {err}");
            process::exit(1);
        }
    }
}
