use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use secrecy::Secret;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub log_format: LogFormat,
    pub completion: CompletionSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Hosted chat-completion service settings.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionSettings {
    pub endpoint: String,
    pub customer_id: String,
    pub api_key: Secret<String>,
    pub model: String,
    pub timeout_secs: u64,
}

impl Settings {
    /// Defaults, then `configuration.*` if present, then `ECOLEARN__*` env vars.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        defaults()?
            .add_source(File::with_name("configuration").required(false))
            .add_source(Environment::with_prefix("ECOLEARN").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("host", "0.0.0.0")?
        .set_default("port", 3000)?
        .set_default("log_level", "info")?
        .set_default("log_format", "pretty")?
        .set_default(
            "completion.endpoint",
            "https://oi-server.onrender.com/chat/completions",
        )?
        .set_default("completion.customer_id", "cus_Rm8BMrUUnJsXep")?
        .set_default("completion.api_key", "xxx")?
        .set_default("completion.model", "openrouter/anthropic/claude-sonnet-4")?
        .set_default("completion.timeout_secs", 120)
}
