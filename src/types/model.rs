use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Represents a DeepSeek model identifier.
///
/// This can be a predefined model version or a custom string value
/// for models that may be added in the future.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Model {
    /// Known model versions.
    Known(KnownModel),

    /// Custom model identifier (for future models or private deployments).
    Custom(String),
}

/// Known DeepSeek model versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KnownModel {
    /// The general-purpose chat model.
    #[serde(rename = "deepseek-chat")]
    DeepSeekChat,

    /// The reasoning model.
    #[serde(rename = "deepseek-reasoner")]
    DeepSeekReasoner,
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Model::Known(known_model) => write!(f, "{}", known_model),
            Model::Custom(custom) => write!(f, "{}", custom),
        }
    }
}

impl fmt::Display for KnownModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KnownModel::DeepSeekChat => write!(f, "deepseek-chat"),
            KnownModel::DeepSeekReasoner => write!(f, "deepseek-reasoner"),
        }
    }
}

impl FromStr for Model {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Err("model name must not be empty".to_string()),
            "deepseek-chat" => Ok(Model::Known(KnownModel::DeepSeekChat)),
            "deepseek-reasoner" => Ok(Model::Known(KnownModel::DeepSeekReasoner)),
            other => Ok(Model::Custom(other.to_string())),
        }
    }
}

impl From<KnownModel> for Model {
    fn from(model: KnownModel) -> Self {
        Model::Known(model)
    }
}

impl From<String> for Model {
    fn from(model: String) -> Self {
        model.parse().unwrap_or(Model::Custom(model))
    }
}

impl From<&str> for Model {
    fn from(model: &str) -> Self {
        Model::from(model.to_string())
    }
}
