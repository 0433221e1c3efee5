//! Errors returned by the tool handlers.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, Locale, MessageKey};
use crate::domain::suggestion::SuggestionParseError;
use crate::ports::{AIError, ToolKind};

/// Failure of a single tool invocation.
///
/// Every variant aborts the invocation before any session state changes.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Required text input was blank.
    #[error("Input is empty")]
    EmptyInput,

    /// A required request field was blank.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// The model call failed.
    #[error("AI provider error: {0}")]
    Transport(#[from] AIError),

    /// The model answered with something that is not a suggestion list.
    #[error("Failed to parse model output: {0}")]
    Parse(#[from] SuggestionParseError),
}

impl ToolError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ToolError::EmptyInput => ErrorCode::EmptyField,
            ToolError::MissingField(_) => ErrorCode::ValidationFailed,
            ToolError::Transport(_) => ErrorCode::AIProviderError,
            ToolError::Parse(_) => ErrorCode::SuggestionParseFailed,
        }
    }

    /// Message catalog key shown to the user for this failure.
    pub fn message_key(&self, tool: ToolKind) -> MessageKey {
        match self {
            ToolError::EmptyInput => MessageKey::PleaseEnterText,
            ToolError::MissingField(_) => MessageKey::MissingRequiredFields,
            ToolError::Parse(_) => MessageKey::FailedToParse,
            ToolError::Transport(err) if err.is_network() => MessageKey::NetworkError,
            ToolError::Transport(_) => match tool {
                ToolKind::WritingAnalysis => MessageKey::FailedToAnalyze,
                ToolKind::EmailComposer => MessageKey::FailedToGenerateEmail,
                ToolKind::PromptGenerator | ToolKind::PromptEnhancer => {
                    MessageKey::FailedToGeneratePrompt
                }
                ToolKind::CodeTranslator => MessageKey::FailedToTranslate,
            },
        }
    }

    /// Localized text shown to the user for this failure.
    pub fn user_message(&self, tool: ToolKind, locale: Locale) -> &'static str {
        locale.message(self.message_key(tool))
    }
}

impl From<ToolError> for DomainError {
    fn from(err: ToolError) -> Self {
        let code = err.code();
        let error = DomainError::new(code, err.to_string());
        match err {
            ToolError::MissingField(field) => error.with_detail("field", field),
            _ => error,
        }
    }
}
