//! Terminal progress reporting

pub mod reporter;
