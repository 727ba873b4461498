//! Query intent
//!
//! Keyword-based routing from free text to the specialist categories that
//! should be consulted. Not a statistical classifier: the mapping is a
//! deterministic membership test over fixed vocabularies.

pub mod category;
pub mod classifier;

pub use category::SpecialistCategory;
pub use classifier::IntentClassifier;
