//! Single-turn model call shared by the tool handlers.

use tracing::{info, warn};

use super::errors::ToolError;
use crate::ports::{AIProvider, CompletionRequest, MessageRole, RequestMetadata, TokenUsage};

/// Trimmed text of one completion.
#[derive(Debug, Clone)]
pub(crate) struct ToolCompletion {
    pub text: String,
    pub model: String,
    pub usage: TokenUsage,
}

/// Sends `prompt` as the only user message and returns the trimmed reply.
pub(crate) async fn complete_prompt<P>(
    provider: &P,
    metadata: RequestMetadata,
    prompt: String,
    max_tokens: Option<u32>,
) -> Result<ToolCompletion, ToolError>
where
    P: AIProvider + ?Sized,
{
    let tool = metadata.tool;
    let trace_id = metadata.trace_id.clone();

    let mut request = CompletionRequest::new(metadata).with_message(MessageRole::User, prompt);
    if let Some(max) = max_tokens {
        request = request.with_max_tokens(max);
    }

    let response = provider.complete(request).await.map_err(|err| {
        warn!(%tool, %trace_id, error = %err, "Model call failed");
        ToolError::Transport(err)
    })?;

    info!(
        %tool,
        %trace_id,
        model = %response.model,
        total_tokens = response.usage.total_tokens,
        "Model call completed"
    );

    Ok(ToolCompletion {
        text: response.trimmed().to_string(),
        model: response.model,
        usage: response.usage,
    })
}
