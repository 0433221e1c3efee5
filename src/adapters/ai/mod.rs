//! AI Provider Adapters.
//!
//! Implementations of the AIProvider port.
//!
//! ## Available Adapters
//!
//! - `MockAIProvider` - Configurable mock for testing
//! - `OpenAIProvider` - OpenAI Chat Completions
//! - `AnthropicProvider` - Anthropic Messages API

mod anthropic_provider;
mod mock_provider;
mod openai_provider;
mod retry;

pub use anthropic_provider::{AnthropicConfig, AnthropicProvider};
pub use mock_provider::{MockAIProvider, MockError, MockResponse};
pub use openai_provider::{OpenAIConfig, OpenAIProvider};

use std::sync::Arc;
use tracing::info;

use crate::config::{AiConfig, AiProvider};
use crate::ports::{AIError, AIProvider as AIProviderPort};

/// Builds the configured primary provider.
///
/// # Errors
///
/// `AuthenticationFailed` when the selected provider has no key, or
/// `InvalidRequest` when the HTTP client cannot be built.
pub fn build_provider(config: &AiConfig) -> Result<Arc<dyn AIProviderPort>, AIError> {
    let provider: Arc<dyn AIProviderPort> = match config.primary_provider {
        AiProvider::Anthropic => {
            let key = config
                .anthropic_api_key
                .as_deref()
                .filter(|k| !k.is_empty())
                .ok_or(AIError::AuthenticationFailed)?;
            let mut provider_config = AnthropicConfig::new(key)
                .with_model(&config.anthropic_model)
                .with_timeout(config.timeout())
                .with_max_retries(config.max_retries)
                .with_default_max_tokens(config.max_tokens);
            if let Some(url) = &config.base_url {
                provider_config = provider_config.with_base_url(url);
            }
            Arc::new(AnthropicProvider::new(provider_config)?)
        }
        AiProvider::OpenAI => {
            let key = config
                .openai_api_key
                .as_deref()
                .filter(|k| !k.is_empty())
                .ok_or(AIError::AuthenticationFailed)?;
            let mut provider_config = OpenAIConfig::new(key)
                .with_model(&config.openai_model)
                .with_timeout(config.timeout())
                .with_max_retries(config.max_retries)
                .with_default_max_tokens(config.max_tokens);
            if let Some(url) = &config.base_url {
                provider_config = provider_config.with_base_url(url);
            }
            Arc::new(OpenAIProvider::new(provider_config)?)
        }
    };

    let info = provider.provider_info();
    info!(provider = %info.name, model = %info.model, "AI provider configured");
    Ok(provider)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_anthropic_by_default() {
        let config = AiConfig {
            anthropic_api_key: Some("sk-ant-xxx".to_string()),
            ..Default::default()
        };
        let provider = build_provider(&config).unwrap();
        let info = provider.provider_info();
        assert_eq!(info.name, "anthropic");
        assert_eq!(info.model, config.anthropic_model);
    }

    #[test]
    fn builds_openai_when_selected() {
        let config = AiConfig {
            openai_api_key: Some("sk-xxx".to_string()),
            primary_provider: AiProvider::OpenAI,
            openai_model: "gpt-4o".to_string(),
            ..Default::default()
        };
        let info = build_provider(&config).unwrap().provider_info();
        assert_eq!(info.name, "openai");
        assert_eq!(info.model, "gpt-4o");
    }

    #[test]
    fn missing_key_is_rejected() {
        let config = AiConfig {
            openai_api_key: Some("sk-xxx".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            build_provider(&config),
            Err(AIError::AuthenticationFailed)
        ));
    }
}
