//! Repository data structures
//!
//! - `access`: Roles, commands and per-branch policies
//! - `branch`: Branch names and the symbolic HEAD target
//! - `core`: Error kinds and repository configuration
//! - `index`: Staging area entries
//! - `objects`: Object types (blob, commit) and their identifiers
//! - `status`: Working tree status classification

pub mod access;
pub mod branch;
pub mod core;
pub mod index;
pub mod objects;
pub mod status;
