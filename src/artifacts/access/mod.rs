//! Access control data
//!
//! - `role`: Roles and the commands each role may run
//! - `policy`: Per-user branch creation flag and per-branch access levels

pub mod policy;
pub mod role;
