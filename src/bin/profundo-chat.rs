//! Interactive chat application for conversing with DeepSeek.
//!
//! This binary provides a REPL interface for chatting with DeepSeek models.
//! Configuration is resolved once at startup from the secrets file, the
//! environment, and built-in defaults; a missing API key stops the process
//! before any input is accepted.
//!
//! # Usage
//!
//! ```bash
//! # Basic usage with default settings
//! profundo-chat
//!
//! # Specify a model
//! profundo-chat --model deepseek-reasoner
//!
//! # Set a system prompt
//! profundo-chat --system "Eres un asistente experto en electrónica"
//!
//! # Disable colors (useful for piping output)
//! profundo-chat --no-color
//! ```
//!
//! # Commands
//!
//! While chatting, you can use slash commands:
//! - `/help` - Show available commands
//! - `/reset` - Reset the conversation
//! - `/model <name>` - Change the model
//! - `/system [prompt]` - Set or restore the system prompt
//! - `/history` - Print the full transcript
//! - `/stats` - Show session statistics
//! - `/quit` - Exit the application

use std::path::Path;
use std::process;

use arrrg::CommandLine;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use profundo::chat::{
    ChatArgs, ChatCommand, ChatConfig, ChatSession, PlainTextRenderer, Renderer, help_text,
    parse_command,
};
use profundo::{Config, DeepSeek, Model};

/// Main entry point for the profundo-chat application.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (args, _) = ChatArgs::from_command_line_relaxed("profundo-chat [OPTIONS]");

    // Missing credentials are fatal before any input is accepted.
    let secrets_path = args.secrets.as_deref().map(Path::new);
    let config = match Config::resolve_with_secrets(secrets_path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("profundo-chat: {err}");
            process::exit(1);
        }
    };
    let chat_config = ChatConfig::from_resolved(&config).with_args(&args);
    let use_color = chat_config.use_color;

    let client = DeepSeek::new(Some(config.api_key.clone()))?;
    let mut session = ChatSession::new(client, chat_config);
    let mut renderer = PlainTextRenderer::with_color(use_color);
    let mut rl = DefaultEditor::new()?;

    // Keep the process alive if Ctrl+C arrives while a request is in flight;
    // there is no cancellation path, the request runs to completion.
    ctrlc::set_handler(|| {})?;

    println!("DeepSeek Chat (model: {})", session.model());
    println!("Type /help for commands, /quit to exit\n");

    loop {
        let readline = rl.readline("You: ");

        match readline {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line);

                // Check for slash commands
                if let Some(cmd) = parse_command(line) {
                    match cmd {
                        ChatCommand::Quit => {
                            println!("Goodbye!");
                            break;
                        }
                        ChatCommand::Reset => {
                            session.reset();
                            renderer.print_info("Conversation reset.");
                        }
                        ChatCommand::Help => {
                            for line in help_text().lines() {
                                println!("    {}", line);
                            }
                        }
                        ChatCommand::Model(model_name) => {
                            let model = model_name
                                .parse()
                                .unwrap_or_else(|_| Model::Custom(model_name.clone()));
                            session.set_model(model);
                            renderer.print_info(&format!("Model changed to: {}", model_name));
                        }
                        ChatCommand::System(prompt) => {
                            session.set_system_prompt(prompt.clone());
                            match prompt {
                                Some(p) => {
                                    renderer.print_info(&format!("System prompt set to: {}", p))
                                }
                                None => renderer.print_info("System prompt restored to default."),
                            }
                        }
                        ChatCommand::Temperature(value) => {
                            session.set_temperature(Some(value));
                            renderer.print_info(&format!("temperature set to {:.2}", value));
                        }
                        ChatCommand::ClearTemperature => {
                            session.set_temperature(None);
                            renderer.print_info("temperature reset to default");
                        }
                        ChatCommand::History => {
                            print_transcript(&session, &mut renderer);
                        }
                        ChatCommand::Stats => {
                            print_stats(&session);
                        }
                        ChatCommand::Invalid(message) => {
                            renderer.print_error(&message);
                        }
                    }
                    continue;
                }

                // Regular message - send to API and print the reply. Errors
                // land in the transcript as assistant turns, so rendering the
                // last reply always shows what happened.
                session.submit(line).await;
                if let Some(reply) = session.last_reply() {
                    renderer.print_turn(reply.role.label(), &reply.content);
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C at prompt - soft interrupt
                println!();
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D - exit
                println!("\nGoodbye!");
                break;
            }
            Err(err) => {
                renderer.print_error(&format!("Input error: {}", err));
                break;
            }
        }
    }

    Ok(())
}

fn print_transcript(session: &ChatSession, renderer: &mut PlainTextRenderer) {
    if session.transcript().is_empty() {
        renderer.print_info("(empty conversation)");
        return;
    }
    for turn in session.transcript() {
        renderer.print_turn(turn.role.label(), &turn.content);
    }
}

fn print_stats(session: &ChatSession) {
    let stats = session.stats();
    println!("    Session Statistics:");
    println!("      Model: {}", stats.model);
    println!("      Turns: {}", stats.turn_count);
    println!("      Temperature: {:.2}", stats.temperature);
    println!("      System prompt: {}", stats.system_prompt);
    println!(
        "      Requests: {} ({} errors)",
        stats.total_requests, stats.error_turns
    );
}
