//! Reconcile module - keeps model suggestions and the edited document in
//! agreement.
//!
//! ## Components
//!
//! - `locate` / `resolve` - find issue text in markup
//! - `render` - regenerate highlight markers for pending suggestions
//! - `apply` / `apply_all` - replace issue text with suggested text
//! - `EditingSession` - aggregate owning one document and its suggestions

mod apply;
mod highlight;
mod locator;
mod session;

pub use apply::{apply, apply_all, ApplyAllReport, ApplyOutcome};
pub use highlight::{marker_for, render};
pub use locator::{locate, locate_anchored, resolve, PatternVariant, Span, SpanNotFound};
pub use session::{EditingSession, SessionError};
