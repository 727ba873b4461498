//! Interactive chat module
//!
//! Provides a line-editor based chat interface that keeps conversation
//! history between turns.

mod repl;

pub use repl::{ChatRepl, ReplCommand};
