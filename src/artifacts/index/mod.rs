//! Staging area entries
//!
//! The index file is plain text, one `<hash> <filename>` line per staged file.

pub mod index_entry;
