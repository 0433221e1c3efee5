//! Draftwise - AI-assisted writing tools
//!
//! The core is a writing session: the model returns suggestions for the
//! user's text, each suggestion is highlighted in place, and accepting one
//! rewrites exactly the text it refers to. Smaller tools compose emails,
//! generate and enhance prompts, and translate code through the same
//! `AIProvider` port.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
