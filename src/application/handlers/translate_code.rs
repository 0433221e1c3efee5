//! TranslateCode handler - ports source code between languages.

use std::sync::Arc;
use tracing::debug;

use super::completion::complete_prompt;
use super::errors::ToolError;
use crate::domain::prompt::TranslationRequest;
use crate::ports::{AIProvider, RequestMetadata, TokenUsage, ToolKind};

/// Completion limit for translations.
const TRANSLATION_MAX_TOKENS: u32 = 2048;

/// Result of a code translation.
#[derive(Debug, Clone)]
pub struct TranslateCodeResult {
    pub translated_code: String,
    pub model: String,
    pub usage: TokenUsage,
}

/// Handler for the code translator.
pub struct TranslateCodeHandler<P>
where
    P: AIProvider + ?Sized,
{
    ai_provider: Arc<P>,
}

impl<P> TranslateCodeHandler<P>
where
    P: AIProvider + ?Sized,
{
    pub fn new(ai_provider: Arc<P>) -> Self {
        Self { ai_provider }
    }

    pub async fn handle(
        &self,
        request: TranslationRequest,
    ) -> Result<TranslateCodeResult, ToolError> {
        if let Some(field) = request.missing_field() {
            return Err(ToolError::MissingField(field));
        }

        debug!(
            from = %request.from_language,
            to = %request.to_language,
            "Translating code"
        );
        let completion = complete_prompt(
            self.ai_provider.as_ref(),
            RequestMetadata::for_tool(ToolKind::CodeTranslator),
            request.prompt(),
            Some(TRANSLATION_MAX_TOKENS),
        )
        .await?;

        Ok(TranslateCodeResult {
            translated_code: completion.text,
            model: completion.model,
            usage: completion.usage,
        })
    }
}
