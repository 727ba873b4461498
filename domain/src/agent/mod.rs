//! Agent profiles
//!
//! An [`AgentProfile`] is everything needed to run one LLM agent: its
//! display name, instruction text, model, and the [`AgentRole`] that decides
//! which tools it may call.

pub mod instructions;
pub mod profile;

pub use profile::{AgentProfile, AgentRole};
