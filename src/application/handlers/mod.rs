//! Application handlers.
//!
//! One handler per tool. Each builds a prompt, makes a single model call
//! through the `AIProvider` port and shapes the reply.

mod analyze_text;
mod completion;
mod compose_email;
mod enhance_prompt;
mod errors;
mod generate_prompt;
mod translate_code;

pub use analyze_text::{AnalyzeTextHandler, AnalyzeTextResult};
pub use compose_email::{ComposeEmailHandler, ComposeEmailResult};
pub use enhance_prompt::EnhancePromptHandler;
pub use errors::ToolError;
pub use generate_prompt::{GeneratePromptHandler, GeneratedPrompt};
pub use translate_code::{TranslateCodeHandler, TranslateCodeResult};
