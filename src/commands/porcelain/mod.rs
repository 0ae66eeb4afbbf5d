//! Porcelain commands (user-facing operations)
//!
//! ## Commands
//!
//! - `init`: Initialize a new repository
//! - `add`: Stage a file for commit
//! - `commit`: Create a new commit on the current branch
//! - `status`: Show working tree status
//! - `log`: Show commit history
//! - `branch`: List branches
//! - `create_branch`: Create a branch at the current head
//! - `checkout`: Switch the current branch

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod create_branch;
pub mod init;
pub mod log;
pub mod status;
