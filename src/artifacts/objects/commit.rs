//! Commit object
//!
//! Commits represent snapshots of the tracked files at a point in time.
//! They contain:
//! - A flat tree mapping file names to blob ids
//! - The parent commit id (empty for the first commit on a branch)
//! - The author and an RFC 3339 timestamp
//! - The commit message
//!
//! ## Format
//!
//! On disk, with two-space indentation and no trailing newline:
//! ```text
//! {
//!   "message": "<message>",
//!   "timestamp": "<RFC 3339>",
//!   "author": "<author>",
//!   "tree": {
//!     "<file name>": "<blob id>"
//!   },
//!   "parent": "<commit id or empty>"
//! }
//! ```
//!
//! The commit id is the SHA-1 of exactly these bytes, so the serialization is
//! canonical: fields keep this order, tree keys are sorted, an empty tree is `{}`
//! and the characters `<`, `>`, `&`, U+2028 and U+2029 are written as `\u` escapes.

use crate::artifacts::core::error::RepositoryError;
use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Flat snapshot: file name to blob id
pub type CommitTree = BTreeMap<String, ObjectId>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    message: String,
    timestamp: String,
    author: String,
    #[serde(default)]
    tree: CommitTree,
    #[serde(default, with = "parent_field")]
    parent: Option<ObjectId>,
}

impl Commit {
    /// Create a new commit stamped with the current local time
    pub fn new(
        message: String,
        author: String,
        tree: CommitTree,
        parent: Option<ObjectId>,
    ) -> Self {
        let timestamp = chrono::Local::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);

        Self::new_with_timestamp(message, timestamp, author, tree, parent)
    }

    pub fn new_with_timestamp(
        message: String,
        timestamp: String,
        author: String,
        tree: CommitTree,
        parent: Option<ObjectId>,
    ) -> Self {
        Commit {
            message,
            timestamp,
            author,
            tree,
            parent,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn short_message(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn tree(&self) -> &CommitTree {
        &self.tree
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let json = serde_json::to_string_pretty(self).context("Unable to serialize commit")?;

        Ok(Bytes::from(escape_html(&json)))
    }
}

impl Unpackable for Commit {
    fn deserialize(content: Bytes) -> anyhow::Result<Self> {
        serde_json::from_slice(&content)
            .map_err(|error| RepositoryError::corrupt("commit object", error).into())
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }
}

// `<`, `>` and `&` only ever appear inside JSON strings, so replacing them in the
// serialized document keeps it valid while matching HTML-safe encoders.
fn escape_html(json: &str) -> String {
    let mut escaped = String::with_capacity(json.len());

    for c in json.chars() {
        match c {
            '<' => escaped.push_str("\\u003c"),
            '>' => escaped.push_str("\\u003e"),
            '&' => escaped.push_str("\\u0026"),
            '\u{2028}' => escaped.push_str("\\u2028"),
            '\u{2029}' => escaped.push_str("\\u2029"),
            _ => escaped.push(c),
        }
    }

    escaped
}

/// The parent is stored as a plain string, empty for a root commit
mod parent_field {
    use crate::artifacts::objects::object_id::ObjectId;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        parent: &Option<ObjectId>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match parent {
            Some(parent) => serializer.serialize_str(parent.as_ref()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<ObjectId>, D::Error> {
        let parent = String::deserialize(deserializer)?;
        let parent = parent.trim();

        if parent.is_empty() {
            Ok(None)
        } else {
            ObjectId::try_parse(parent.to_string())
                .map(Some)
                .map_err(serde::de::Error::custom)
        }
    }
}
