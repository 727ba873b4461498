//! Deterministic fallback text

use crate::core::string::head_chars;

const QUERY_PREVIEW_CHARS: usize = 100;

/// Apology returned when every attempt failed.
///
/// Embeds the first 100 characters of the query and the last failure so the
/// user sees what was asked and why no recommendation came back.
pub fn fallback_response(query: &str, last_error: &str) -> String {
    format!(
        "I apologize, but I'm having trouble processing your request right now.\n\n\
         Your question: \"{}\"\n\n\
         In the meantime you can:\n\
         - Try rephrasing your question\n\
         - Ask about a specific make, budget or vehicle type\n\
         - Try again in a few moments\n\n\
         (Technical details: {})",
        head_chars(query, QUERY_PREVIEW_CHARS),
        last_error
    )
}
