//! Object types and operations
//!
//! Every stored object is identified by the SHA-1 of its exact stored bytes:
//!
//! - **Blob**: File content (raw bytes, stored verbatim)
//! - **Commit**: Snapshot record (message, timestamp, author, flat tree, parent),
//!   stored as an indented JSON document
//!
//! Both kinds share a single flat namespace under `.mygit/objects/<hash>`.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
