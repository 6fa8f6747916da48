//! Layered configuration resolution.
//!
//! A key is looked up in the secrets file, then in the process environment,
//! with hard-coded defaults as the last resort. The result is resolved once
//! at startup and stays immutable for the process lifetime; resetting a
//! conversation re-seeds history with the already-resolved system prompt but
//! never re-resolves configuration.

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::{KnownModel, Model};

/// Environment variable naming the secrets file to load.
pub const SECRETS_PATH_VAR: &str = "PROFUNDO_SECRETS";

/// Default secrets file path, relative to the working directory.
pub const DEFAULT_SECRETS_PATH: &str = "secrets.yaml";

/// Configuration key for the API credential.
pub const API_KEY_VAR: &str = "DEEPSEEK_API_KEY";

/// Configuration key for the model identifier.
pub const MODEL_VAR: &str = "MODEL";

/// Configuration key for the system prompt.
pub const SYSTEM_PROMPT_VAR: &str = "SYSTEM_PROMPT";

/// Default model identifier.
pub const DEFAULT_MODEL: KnownModel = KnownModel::DeepSeekChat;

/// Default system prompt.
pub const DEFAULT_SYSTEM_PROMPT: &str =
    "Eres un asistente experto en electrónica, claro y breve. Responde en español.";

/// Ordered lookup over the configuration sources.
///
/// The resolver snapshots its sources at construction; lookups have no side
/// effects beyond read access.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    secrets: BTreeMap<String, String>,
    env: BTreeMap<String, String>,
}

impl Resolver {
    /// Creates a resolver over explicit secrets and environment maps.
    pub fn new(secrets: BTreeMap<String, String>, env: BTreeMap<String, String>) -> Self {
        Self { secrets, env }
    }

    /// Creates a resolver from the process environment.
    ///
    /// The secrets file is named by `PROFUNDO_SECRETS`, falling back to
    /// `./secrets.yaml`. A missing file yields an empty secrets layer; a file
    /// that exists but does not parse is an error.
    pub fn from_process() -> Result<Self> {
        Self::from_process_with_secrets(None)
    }

    /// Creates a resolver from the process environment with an explicit
    /// secrets file path, bypassing `PROFUNDO_SECRETS`.
    pub fn from_process_with_secrets(path: Option<&Path>) -> Result<Self> {
        let fallback;
        let path = match path {
            Some(path) => path,
            None => {
                fallback =
                    env::var(SECRETS_PATH_VAR).unwrap_or_else(|_| DEFAULT_SECRETS_PATH.to_string());
                Path::new(&fallback)
            }
        };
        let secrets = load_secrets_file(path)?;
        let env = env::vars().collect();
        Ok(Self { secrets, env })
    }

    /// Resolves a key against the secrets layer, then the environment layer.
    pub fn resolve(&self, key: &str) -> Option<&str> {
        self.secrets
            .get(key)
            .or_else(|| self.env.get(key))
            .map(String::as_str)
    }

    /// Resolves a key, falling back to the supplied default.
    pub fn resolve_or(&self, key: &str, default: &str) -> String {
        self.resolve(key).unwrap_or(default).to_string()
    }
}

/// Loads the secrets file as a flat string-to-string mapping.
///
/// A missing file is not an error; the secrets layer is simply empty.
pub fn load_secrets_file(path: &Path) -> Result<BTreeMap<String, String>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(BTreeMap::new());
        }
        Err(err) => {
            return Err(Error::io(
                format!("failed to read secrets file {}", path.display()),
                err,
            ));
        }
    };
    let secrets: BTreeMap<String, String> = serde_yaml::from_str(&contents)?;
    Ok(secrets)
}

/// Configuration resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The API credential sent as a bearer token.
    pub api_key: String,

    /// The model used for completions.
    pub model: Model,

    /// The system prompt seeding every conversation.
    pub system_prompt: String,
}

impl Config {
    /// Resolves configuration from the process environment and secrets file.
    ///
    /// A missing or empty `DEEPSEEK_API_KEY` is a fatal, non-recoverable
    /// startup condition; callers are expected to surface the error and stop
    /// before accepting any input.
    pub fn resolve() -> Result<Self> {
        Self::resolve_with(&Resolver::from_process()?)
    }

    /// Resolves configuration using an explicit secrets file path.
    pub fn resolve_with_secrets(path: Option<&Path>) -> Result<Self> {
        Self::resolve_with(&Resolver::from_process_with_secrets(path)?)
    }

    /// Resolves configuration against an explicit resolver.
    pub fn resolve_with(resolver: &Resolver) -> Result<Self> {
        let api_key = resolver
            .resolve(API_KEY_VAR)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                Error::authentication(format!(
                    "{API_KEY_VAR} not found in the secrets file or environment"
                ))
            })?
            .to_string();
        let model = resolver
            .resolve_or(MODEL_VAR, &DEFAULT_MODEL.to_string())
            .parse::<Model>()
            .map_err(|err| Error::bad_request(err, Some(MODEL_VAR.to_string())))?;
        let system_prompt = resolver.resolve_or(SYSTEM_PROMPT_VAR, DEFAULT_SYSTEM_PROMPT);
        Ok(Self {
            api_key,
            model,
            system_prompt,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn resolver(secrets: &[(&str, &str)], env: &[(&str, &str)]) -> Resolver {
        let secrets = secrets
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let env = env
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Resolver::new(secrets, env)
    }

    #[test]
    fn secrets_beat_environment() {
        let r = resolver(
            &[("DEEPSEEK_API_KEY", "from-secrets")],
            &[("DEEPSEEK_API_KEY", "from-env")],
        );
        assert_eq!(r.resolve("DEEPSEEK_API_KEY"), Some("from-secrets"));
    }

    #[test]
    fn environment_beats_default() {
        let r = resolver(&[], &[("MODEL", "deepseek-reasoner")]);
        assert_eq!(r.resolve_or("MODEL", "deepseek-chat"), "deepseek-reasoner");
    }

    #[test]
    fn default_when_unset() {
        let r = resolver(&[], &[]);
        assert_eq!(r.resolve("MODEL"), None);
        assert_eq!(r.resolve_or("MODEL", "deepseek-chat"), "deepseek-chat");
    }

    #[test]
    fn resolve_with_defaults() {
        let r = resolver(&[("DEEPSEEK_API_KEY", "sk-test")], &[]);
        let config = Config::resolve_with(&r).unwrap();
        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.model, Model::Known(KnownModel::DeepSeekChat));
        assert_eq!(config.system_prompt, DEFAULT_SYSTEM_PROMPT);
    }

    #[test]
    fn missing_api_key_is_fatal() {
        let r = resolver(&[], &[("MODEL", "deepseek-chat")]);
        let err = Config::resolve_with(&r).unwrap_err();
        assert!(err.is_authentication());
    }

    #[test]
    fn empty_api_key_is_fatal() {
        let r = resolver(&[("DEEPSEEK_API_KEY", "")], &[]);
        let err = Config::resolve_with(&r).unwrap_err();
        assert!(err.is_authentication());
    }

    #[test]
    fn overrides_from_both_layers() {
        let r = resolver(
            &[("SYSTEM_PROMPT", "Sé breve.")],
            &[
                ("DEEPSEEK_API_KEY", "sk-test"),
                ("MODEL", "deepseek-reasoner"),
            ],
        );
        let config = Config::resolve_with(&r).unwrap();
        assert_eq!(config.model, Model::Known(KnownModel::DeepSeekReasoner));
        assert_eq!(config.system_prompt, "Sé breve.");
    }

    #[test]
    fn secrets_file_parses_yaml_mapping() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "DEEPSEEK_API_KEY: sk-from-file").unwrap();
        writeln!(file, "MODEL: deepseek-reasoner").unwrap();
        let secrets = load_secrets_file(file.path()).unwrap();
        assert_eq!(
            secrets.get("DEEPSEEK_API_KEY").map(String::as_str),
            Some("sk-from-file")
        );
        assert_eq!(
            secrets.get("MODEL").map(String::as_str),
            Some("deepseek-reasoner")
        );
    }

    #[test]
    fn missing_secrets_file_is_empty() {
        let secrets = load_secrets_file(Path::new("/nonexistent/secrets.yaml")).unwrap();
        assert!(secrets.is_empty());
    }

    #[test]
    fn malformed_secrets_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "- just\n- a\n- list").unwrap();
        assert!(load_secrets_file(file.path()).is_err());
    }
}
