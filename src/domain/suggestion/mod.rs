//! Suggestion module - categorized edits proposed by the model.
//!
//! ## Components
//!
//! - `Suggestion` - immutable proposed edit with a snapshot origin
//! - `SuggestionStatus` - Pending → Accepted | Dismissed
//! - `SuggestionStore` - ordered active set, history and position map
//! - `parse_suggestions` - strict parsing of the model payload

mod category;
mod parse;
mod store;
#[allow(clippy::module_inception)]
mod suggestion;

pub use category::{Category, CategoryFilter, FALLBACK_HIGHLIGHT};
pub use parse::{parse_suggestions, strip_code_fences, SuggestionParseError};
pub use store::SuggestionStore;
pub use suggestion::{ResolvedSuggestion, Suggestion, SuggestionStatus};
