use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Default sampling temperature passed through to the provider unchanged.
const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Default maximum output tokens per completion.
const DEFAULT_MAX_OUTPUT_TOKENS: i32 = 1024;

/// Built-in persona text, overridable via SYSTEM_PROMPT_PATH.
const DEFAULT_SYSTEM_PROMPT: &str = include_str!("../../prompts/master_prompt.txt");

#[derive(Debug, Clone)]
pub struct ChatConfig {
    pub common: core_config::Config,
    pub mongodb: MongoConfig,
    pub openai: OpenAiSettings,
    pub chat: ChatParams,
}

#[derive(Debug, Clone)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
}

#[derive(Debug, Clone)]
pub struct OpenAiSettings {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
}

#[derive(Debug, Clone)]
pub struct ChatParams {
    pub temperature: f32,
    pub max_output_tokens: i32,
    /// Fixed system-instruction block prepended to every prompt. Treated as
    /// an opaque configuration payload, not logic.
    pub system_prompt: String,
}

impl ChatConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        let system_prompt = match env::var("SYSTEM_PROMPT_PATH") {
            Ok(path) => std::fs::read_to_string(&path).map_err(|e| {
                AppError::ConfigError(anyhow::anyhow!(
                    "Failed to read system prompt at {}: {}",
                    path,
                    e
                ))
            })?,
            Err(_) => DEFAULT_SYSTEM_PROMPT.to_string(),
        };

        Ok(ChatConfig {
            common: common_config,
            mongodb: MongoConfig {
                uri: get_env("MONGODB_URI", Some("mongodb://localhost:27017"), is_prod)?,
                database: get_env("MONGODB_DATABASE", Some("chat_db"), is_prod)?,
            },
            openai: OpenAiSettings {
                api_key: get_env("OPENAI_API_KEY", None, is_prod)?,
                model: get_env("OPENAI_MODEL", Some("gpt-4o"), is_prod)?,
                api_base: get_env(
                    "OPENAI_API_BASE",
                    Some("https://api.openai.com/v1"),
                    is_prod,
                )?,
            },
            chat: ChatParams {
                temperature: get_env(
                    "CHAT_TEMPERATURE",
                    Some(&DEFAULT_TEMPERATURE.to_string()),
                    is_prod,
                )?
                .parse()
                .unwrap_or(DEFAULT_TEMPERATURE),
                max_output_tokens: get_env(
                    "CHAT_MAX_OUTPUT_TOKENS",
                    Some(&DEFAULT_MAX_OUTPUT_TOKENS.to_string()),
                    is_prod,
                )?
                .parse()
                .unwrap_or(DEFAULT_MAX_OUTPUT_TOKENS),
                system_prompt,
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
