use serde::Serialize;

use crate::types::{Message, Model};

/// Default sampling temperature.
///
/// Low-randomness completions suited to factual and technical answers.
pub const DEFAULT_TEMPERATURE: f32 = 0.3;

/// Parameters for a chat completion request.
///
/// Serializes to the body expected by the `chat/completions` endpoint:
/// `{ "model": ..., "messages": [...], "temperature": ... }`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChatCompletionParams {
    /// The model that generates the completion.
    pub model: Model,

    /// The full conversation history, in insertion order.
    pub messages: Vec<Message>,

    /// Sampling temperature.
    pub temperature: f32,
}

impl ChatCompletionParams {
    /// Create parameters for the given model and message history with the
    /// default temperature.
    pub fn new(model: Model, messages: Vec<Message>) -> Self {
        Self {
            model,
            messages,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    /// Sets the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::KnownModel;
    use serde_json::{json, to_value};

    #[test]
    fn serializes_to_wire_format() {
        let params = ChatCompletionParams::new(
            Model::Known(KnownModel::DeepSeekChat),
            vec![
                Message::system("Eres un asistente."),
                Message::user("¿Qué es un capacitor?"),
            ],
        );
        let json = to_value(&params).unwrap();

        assert_eq!(json["model"], json!("deepseek-chat"));
        assert_eq!(
            json["messages"],
            json!([
                {"role": "system", "content": "Eres un asistente."},
                {"role": "user", "content": "¿Qué es un capacitor?"}
            ])
        );
        // f32 widening makes an exact JSON comparison brittle.
        let temperature = json["temperature"].as_f64().unwrap();
        assert!((temperature - 0.3).abs() < 1e-6);
    }

    #[test]
    fn temperature_override() {
        let params = ChatCompletionParams::new(Model::Known(KnownModel::DeepSeekChat), vec![])
            .with_temperature(0.9);
        assert_eq!(params.temperature, 0.9);
    }
}
