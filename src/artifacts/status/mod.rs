//! Working tree status inspection
//!
//! - `file_status`: Classification labels for changed files
//! - `inspector`: Comparison of working tree hashes against the index and the last commit

pub mod file_status;
pub mod inspector;
