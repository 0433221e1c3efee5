//! GeneratePrompt handler - expands rough text into a structured prompt.

use std::sync::Arc;

use super::completion::{complete_prompt, ToolCompletion};
use super::errors::ToolError;
use crate::domain::prompt::{reformat, render_blocks, Block, PromptBrief};
use crate::ports::{AIProvider, RequestMetadata, TokenUsage, ToolKind};

/// A generated prompt and its display form.
#[derive(Debug, Clone)]
pub struct GeneratedPrompt {
    /// Prompt text as returned by the model, trimmed.
    pub text: String,
    /// `text` split into headings, paragraphs and lists.
    pub blocks: Vec<Block>,
    pub model: String,
    pub usage: TokenUsage,
}

impl GeneratedPrompt {
    pub(crate) fn from_completion(completion: ToolCompletion) -> Self {
        Self {
            blocks: reformat(&completion.text),
            text: completion.text,
            model: completion.model,
            usage: completion.usage,
        }
    }

    /// HTML rendering of `blocks`.
    pub fn to_html(&self) -> String {
        render_blocks(&self.blocks)
    }
}

/// Handler for the prompt generator.
pub struct GeneratePromptHandler<P>
where
    P: AIProvider + ?Sized,
{
    ai_provider: Arc<P>,
}

impl<P> GeneratePromptHandler<P>
where
    P: AIProvider + ?Sized,
{
    pub fn new(ai_provider: Arc<P>) -> Self {
        Self { ai_provider }
    }

    pub async fn handle(&self, brief: PromptBrief) -> Result<GeneratedPrompt, ToolError> {
        if brief.text.trim().is_empty() {
            return Err(ToolError::EmptyInput);
        }

        let completion = complete_prompt(
            self.ai_provider.as_ref(),
            RequestMetadata::for_tool(ToolKind::PromptGenerator),
            brief.prompt(),
            None,
        )
        .await?;

        Ok(GeneratedPrompt::from_completion(completion))
    }
}
