//! Domain layer containing the writing-assistant logic and types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (IDs, timestamps, locale, errors)
//! - `document` - Editor markup, text extraction and position tracking
//! - `suggestion` - Model suggestions, parsing and the suggestion store
//! - `reconcile` - Locating, highlighting and applying suggestions
//! - `prompt` - Prompt templates and model output formatting

pub mod document;
pub mod foundation;
pub mod prompt;
pub mod reconcile;
pub mod suggestion;
