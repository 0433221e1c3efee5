//! ComposeEmail handler - turns rough notes into an email body.

use std::sync::Arc;

use super::completion::complete_prompt;
use super::errors::ToolError;
use crate::domain::prompt::EmailDraft;
use crate::ports::{AIProvider, RequestMetadata, TokenUsage, ToolKind};

/// Result of composing an email.
#[derive(Debug, Clone)]
pub struct ComposeEmailResult {
    /// Email body, trimmed.
    pub email: String,
    pub model: String,
    pub usage: TokenUsage,
}

/// Handler for the email composer.
pub struct ComposeEmailHandler<P>
where
    P: AIProvider + ?Sized,
{
    ai_provider: Arc<P>,
}

impl<P> ComposeEmailHandler<P>
where
    P: AIProvider + ?Sized,
{
    pub fn new(ai_provider: Arc<P>) -> Self {
        Self { ai_provider }
    }

    pub async fn handle(&self, draft: EmailDraft) -> Result<ComposeEmailResult, ToolError> {
        if draft.raw_thoughts.trim().is_empty() {
            return Err(ToolError::EmptyInput);
        }

        let completion = complete_prompt(
            self.ai_provider.as_ref(),
            RequestMetadata::for_tool(ToolKind::EmailComposer),
            draft.prompt(),
            None,
        )
        .await?;

        Ok(ComposeEmailResult {
            email: completion.text,
            model: completion.model,
            usage: completion.usage,
        })
    }
}
