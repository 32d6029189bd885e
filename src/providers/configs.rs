use anyhow::{anyhow, Context, Result};
use std::env;
use std::time::Duration;

pub const OPENAI_DEFAULT_HOST: &str = "http://localhost:8888";
pub const OPENAI_DEFAULT_API_KEY: &str = "xxx";
pub const DEFAULT_TIMEOUT_SECS: u64 = 600;

pub trait ProviderConfig {
    /// Load configuration from environment variables
    fn from_env() -> Result<Self>
    where
        Self: Sized;

    /// Helper function to get environment variables with error handling
    fn get_env(key: &str, required: bool, default: Option<String>) -> Result<Option<String>> {
        match env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(env::VarError::NotPresent) if !required => Ok(default),
            Err(env::VarError::NotPresent) => Err(anyhow!(
                "Environment variable '{}' is required but not set.",
                key
            )),
            Err(e) => Err(e.into()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct OpenAiProviderConfig {
    pub host: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl OpenAiProviderConfig {
    pub fn new<H: Into<String>, K: Into<String>>(host: H, api_key: K) -> Self {
        Self {
            host: host.into(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for OpenAiProviderConfig {
    fn default() -> Self {
        Self::new(OPENAI_DEFAULT_HOST, OPENAI_DEFAULT_API_KEY)
    }
}

impl ProviderConfig for OpenAiProviderConfig {
    fn from_env() -> Result<Self> {
        // Local OpenAI-compatible servers accept any key, so none of these are required
        let host = Self::get_env("OPENAI_API_HOST", false, None)?
            .unwrap_or_else(|| OPENAI_DEFAULT_HOST.to_string());

        let api_key = Self::get_env("OPENAI_API_KEY", false, None)?
            .unwrap_or_else(|| OPENAI_DEFAULT_API_KEY.to_string());

        let timeout = match Self::get_env("OPENAI_TIMEOUT_SECS", false, None)? {
            Some(secs) => Duration::from_secs(
                secs.trim()
                    .parse()
                    .with_context(|| format!("OPENAI_TIMEOUT_SECS is not a number: {}", secs))?,
            ),
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self::new(host, api_key).with_timeout(timeout))
    }
}
