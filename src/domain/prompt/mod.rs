//! Prompt module - prompt text for each tool and formatting of model
//! output for display.

mod reformat;
mod templates;

pub use reformat::{reformat, render_blocks, Block};
pub use templates::{
    analysis_prompt, enhance_prompt, EmailDraft, EmailTone, PromptBrief, PromptLength,
    PromptType, TranslationRequest,
};
