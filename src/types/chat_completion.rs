use serde::{Deserialize, Serialize};

/// A chat completion returned by the API.
///
/// Only the first choice's message content is consumed by the chat session;
/// the rest of the body is carried for callers that want it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatCompletion {
    /// The completion choices. The API returns at least one on success.
    pub choices: Vec<ChatChoice>,

    /// The model that generated the completion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Token accounting for the request, when the API reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<CompletionUsage>,
}

/// One completion choice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatChoice {
    /// The generated message.
    pub message: ChatChoiceMessage,

    /// Why generation stopped, when the API reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

/// The message inside a completion choice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatChoiceMessage {
    /// The generated text.
    pub content: String,
}

/// Token usage reported by the API.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompletionUsage {
    /// Tokens consumed by the prompt.
    pub prompt_tokens: u64,

    /// Tokens generated for the completion.
    pub completion_tokens: u64,

    /// Total tokens for the request.
    pub total_tokens: u64,
}

impl ChatCompletion {
    /// Returns the content of the first choice, if any.
    pub fn first_content(&self) -> Option<&str> {
        self.choices.first().map(|choice| choice.message.content.as_str())
    }
}
