//! Conversation session domain.
//!
//! - [`Message`] - a single turn of conversation history
//! - [`Role`] - who produced the turn

pub mod entities;

pub use entities::{Message, Role};
