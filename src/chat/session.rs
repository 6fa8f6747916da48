//! Core chat session management.
//!
//! This module provides the `ChatSession` struct which owns the conversation
//! history and issues one completion request per user submission.

use crate::chat::config::ChatConfig;
use crate::client::DeepSeek;
use crate::observability;
use crate::types::{ChatCompletionParams, DEFAULT_TEMPERATURE, Message, Model, Role};

/// A chat session that manages conversation state and API interactions.
///
/// The history is an ordered sequence of turns whose first element is always
/// the current system prompt; the system turn is never part of the rendered
/// transcript. The session is an explicitly owned object so the logic stays
/// framework-independent and testable in isolation.
pub struct ChatSession {
    client: DeepSeek,
    config: ChatConfig,
    default_system_prompt: String,
    history: Vec<Message>,
    request_count: u64,
    error_count: u64,
}

/// Aggregated stats for a chat session.
#[derive(Debug, Clone)]
pub struct SessionStats {
    /// The model used for the session.
    pub model: Model,

    /// The current system prompt.
    pub system_prompt: String,

    /// The sampling temperature.
    pub temperature: f32,

    /// The number of visible (non-system) turns in the conversation.
    pub turn_count: usize,

    /// Total number of API requests made.
    pub total_requests: u64,

    /// Number of turns that recorded an error instead of a real reply.
    pub error_turns: u64,
}

impl ChatSession {
    /// Creates a new chat session seeded with the configured system prompt.
    pub fn new(client: DeepSeek, config: ChatConfig) -> Self {
        let history = vec![Message::system(config.system_prompt.clone())];
        let default_system_prompt = config.system_prompt.clone();
        Self {
            client,
            config,
            default_system_prompt,
            history,
            request_count: 0,
            error_count: 0,
        }
    }

    /// Submits a user message and returns the updated transcript.
    ///
    /// This method:
    /// 1. Ignores empty input (no turns appended, no request issued)
    /// 2. Appends the user turn to history
    /// 3. Issues exactly one completion request carrying the full history
    /// 4. Appends the reply as an assistant turn
    ///
    /// Failures (network errors, non-2xx statuses, malformed or empty
    /// response bodies) are recorded in the transcript as an assistant turn
    /// of the form `Error: <description>` rather than raised. Redraw timing
    /// is left to the caller.
    pub async fn submit(&mut self, user_input: &str) -> &[Message] {
        let text = user_input.trim();
        if text.is_empty() {
            return self.transcript();
        }
        observability::SESSION_SUBMITS.click();

        self.history.push(Message::user(text));

        let params = ChatCompletionParams::new(self.config.model.clone(), self.history.clone())
            .with_temperature(self.config.temperature);
        self.request_count += 1;
        let outcome = self.client.complete(params).await;
        let reply = match outcome {
            Ok(completion) => match completion.first_content() {
                Some(content) => content.to_string(),
                None => self.record_error("response contained no choices".to_string()),
            },
            Err(err) => self.record_error(err.to_string()),
        };

        self.history.push(Message::assistant(reply));
        self.transcript()
    }

    /// Resets the conversation back to a single system turn.
    ///
    /// Configuration is not re-resolved; the already-resolved system prompt
    /// seeds the fresh history.
    pub fn reset(&mut self) -> &[Message] {
        observability::SESSION_RESETS.click();
        self.history = vec![Message::system(self.config.system_prompt.clone())];
        self.transcript()
    }

    /// Returns the visible transcript: every turn except the seed system turn.
    pub fn transcript(&self) -> &[Message] {
        &self.history[1..]
    }

    /// Returns the full history including the system turn.
    pub fn history(&self) -> &[Message] {
        &self.history
    }

    /// Returns the most recent assistant reply, if any.
    pub fn last_reply(&self) -> Option<&Message> {
        self.history.iter().rev().find(|m| m.role == Role::Assistant)
    }

    /// Changes the model used for responses.
    pub fn set_model(&mut self, model: Model) {
        self.config.model = model;
    }

    /// Returns the current model.
    pub fn model(&self) -> &Model {
        &self.config.model
    }

    /// Sets or restores the system prompt.
    ///
    /// `None` restores the prompt resolved at startup. The seed turn at
    /// index 0 is rewritten so history always starts with the current prompt.
    pub fn set_system_prompt(&mut self, prompt: Option<String>) {
        let prompt = prompt.unwrap_or_else(|| self.default_system_prompt.clone());
        self.config.system_prompt = prompt.clone();
        self.history[0] = Message::system(prompt);
    }

    /// Returns the current system prompt.
    pub fn system_prompt(&self) -> &str {
        &self.config.system_prompt
    }

    /// Sets the sampling temperature. `None` restores the default.
    pub fn set_temperature(&mut self, temperature: Option<f32>) {
        self.config.temperature = temperature.unwrap_or(DEFAULT_TEMPERATURE);
    }

    /// Returns the current sampling temperature.
    pub fn temperature(&self) -> f32 {
        self.config.temperature
    }

    /// Returns the current session statistics snapshot.
    pub fn stats(&self) -> SessionStats {
        SessionStats {
            model: self.config.model.clone(),
            system_prompt: self.config.system_prompt.clone(),
            temperature: self.config.temperature,
            turn_count: self.transcript().len(),
            total_requests: self.request_count,
            error_turns: self.error_count,
        }
    }

    fn record_error(&mut self, description: String) -> String {
        observability::SESSION_ERROR_TURNS.click();
        self.error_count += 1;
        format!("Error: {description}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{KnownModel, Role};

    fn session() -> ChatSession {
        let client = DeepSeek::new(Some("sk-test".to_string())).unwrap();
        let config = crate::config::Config {
            api_key: "sk-test".to_string(),
            model: Model::Known(KnownModel::DeepSeekChat),
            system_prompt: "Eres un asistente.".to_string(),
        };
        ChatSession::new(client, ChatConfig::from_resolved(&config))
    }

    #[test]
    fn new_session_seeds_system_turn() {
        let session = session();
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].role, Role::System);
        assert_eq!(session.history()[0].content, "Eres un asistente.");
        assert!(session.transcript().is_empty());
    }

    #[test]
    fn empty_submit_is_a_noop() {
        let mut session = session();
        let before = session.history().to_vec();
        tokio_test::block_on(async {
            session.submit("").await;
            session.submit("   ").await;
        });
        assert_eq!(session.history(), &before[..]);
        assert_eq!(session.stats().total_requests, 0);
    }

    #[test]
    fn reset_restores_seed_state() {
        let mut session = session();
        session.history.push(Message::user("hola"));
        session.history.push(Message::assistant("Hola."));
        let transcript = session.reset();
        assert!(transcript.is_empty());
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].role, Role::System);
        assert_eq!(session.history()[0].content, "Eres un asistente.");
    }

    #[test]
    fn set_system_prompt_rewrites_seed_turn() {
        let mut session = session();
        session.set_system_prompt(Some("Sé breve.".to_string()));
        assert_eq!(session.history()[0].content, "Sé breve.");
        assert_eq!(session.system_prompt(), "Sé breve.");

        session.set_system_prompt(None);
        assert_eq!(session.history()[0].content, "Eres un asistente.");
    }

    #[test]
    fn set_model_and_temperature() {
        let mut session = session();
        session.set_model(Model::Known(KnownModel::DeepSeekReasoner));
        assert_eq!(
            session.model(),
            &Model::Known(KnownModel::DeepSeekReasoner)
        );

        session.set_temperature(Some(0.9));
        assert_eq!(session.temperature(), 0.9);
        session.set_temperature(None);
        assert_eq!(session.temperature(), DEFAULT_TEMPERATURE);
    }

    #[test]
    fn last_reply_finds_latest_assistant_turn() {
        let mut session = session();
        assert!(session.last_reply().is_none());
        session.history.push(Message::user("hola"));
        session.history.push(Message::assistant("Hola."));
        session.history.push(Message::user("adiós"));
        session.history.push(Message::assistant("Adiós."));
        assert_eq!(session.last_reply().unwrap().content, "Adiós.");
    }
}
