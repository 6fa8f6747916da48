//! Wire types for the DeepSeek chat completions API.

mod chat_completion;
mod chat_completion_params;
mod message;
mod model;
mod role;

pub use chat_completion::{ChatChoice, ChatChoiceMessage, ChatCompletion, CompletionUsage};
pub use chat_completion_params::{ChatCompletionParams, DEFAULT_TEMPERATURE};
pub use message::Message;
pub use model::{KnownModel, Model};
pub use role::Role;
