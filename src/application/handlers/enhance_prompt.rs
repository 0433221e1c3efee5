//! EnhancePrompt handler - asks the model to refine a generated prompt.

use std::sync::Arc;

use super::completion::complete_prompt;
use super::errors::ToolError;
use super::generate_prompt::GeneratedPrompt;
use crate::domain::prompt::enhance_prompt;
use crate::ports::{AIProvider, RequestMetadata, ToolKind};

/// Handler for the prompt enhancer.
pub struct EnhancePromptHandler<P>
where
    P: AIProvider + ?Sized,
{
    ai_provider: Arc<P>,
}

impl<P> EnhancePromptHandler<P>
where
    P: AIProvider + ?Sized,
{
    pub fn new(ai_provider: Arc<P>) -> Self {
        Self { ai_provider }
    }

    /// Enhances `existing`, usually the text of an earlier [`GeneratedPrompt`].
    pub async fn handle(&self, existing: &str) -> Result<GeneratedPrompt, ToolError> {
        if existing.trim().is_empty() {
            return Err(ToolError::EmptyInput);
        }

        let completion = complete_prompt(
            self.ai_provider.as_ref(),
            RequestMetadata::for_tool(ToolKind::PromptEnhancer),
            enhance_prompt(existing),
            None,
        )
        .await?;

        Ok(GeneratedPrompt::from_completion(completion))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAIProvider;
    use crate::domain::prompt::Block;

    #[tokio::test]
    async fn enhances_existing_prompt() {
        let provider = Arc::new(
            MockAIProvider::new().with_response("- Be specific\n- Use examples\n"),
        );
        let handler = EnhancePromptHandler::new(provider.clone());

        let enhanced = handler.handle("Write a poem about rain").await.unwrap();

        assert_eq!(enhanced.text, "- Be specific\n- Use examples");
        assert_eq!(
            enhanced.blocks,
            vec![Block::List {
                ordered: false,
                items: vec!["Be specific".to_string(), "Use examples".to_string()],
            }]
        );
        assert!(provider
            .last_prompt()
            .unwrap()
            .contains("\"Write a poem about rain\""));
    }

    #[tokio::test]
    async fn nothing_to_enhance() {
        let provider = Arc::new(MockAIProvider::new());
        let handler = EnhancePromptHandler::new(provider.clone());

        assert!(matches!(
            handler.handle("   ").await,
            Err(ToolError::EmptyInput)
        ));
        assert_eq!(provider.call_count(), 0);
    }
}
