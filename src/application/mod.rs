//! Application layer - tool handlers.
//!
//! This layer orchestrates domain operations and the model call each tool
//! makes through the ports.

pub mod handlers;

pub use handlers::{
    AnalyzeTextHandler, AnalyzeTextResult, ComposeEmailHandler, ComposeEmailResult,
    EnhancePromptHandler, GeneratePromptHandler, GeneratedPrompt, ToolError,
    TranslateCodeHandler, TranslateCodeResult,
};
