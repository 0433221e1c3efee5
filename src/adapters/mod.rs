//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - language model providers (Anthropic, OpenAI, mock)

pub mod ai;

pub use ai::build_provider;
