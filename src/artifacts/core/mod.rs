//! Core utilities and shared types
//!
//! - `config`: Repository root discovery and policy settings
//! - `error`: Error kinds surfaced by every operation

pub mod config;
pub mod error;

/// Name of the repository directory inside the work tree
pub const REPOSITORY_DIR: &str = ".mygit";
