//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, the locale catalog, the state machine
//! trait and the error types that form the vocabulary of the Draftwise domain.

mod errors;
mod ids;
mod locale;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{SessionId, SuggestionId};
pub use locale::{Locale, MessageKey};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
