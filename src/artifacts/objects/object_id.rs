//! Object identifier (SHA-1 hash)
//!
//! Object IDs are 40-character lowercase hexadecimal strings representing SHA-1 hashes.
//! They uniquely identify all stored objects (blobs and commits).
//!
//! ## Storage
//!
//! Objects are stored flat in `.mygit/objects/<hash>`

use crate::artifacts::core::error::RepositoryError;
use crate::artifacts::objects::OBJECT_ID_LENGTH;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::path::PathBuf;

/// Object identifier (SHA-1 hash)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object ID from a string
    ///
    /// # Returns
    ///
    /// Validated ObjectId, or a `Corrupt` error if the length or characters are invalid
    pub fn try_parse(id: String) -> anyhow::Result<Self> {
        if id.len() != OBJECT_ID_LENGTH {
            anyhow::bail!(RepositoryError::corrupt(
                "object id",
                format!("invalid length {} for '{}'", id.len(), id)
            ));
        }
        if !id.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')) {
            anyhow::bail!(RepositoryError::corrupt(
                "object id",
                format!("invalid characters in '{}'", id)
            ));
        }
        Ok(Self(id))
    }

    pub(crate) fn from_hex_digest(digest: String) -> Self {
        Self(digest)
    }

    /// Convert to the file name used in the object store
    pub fn to_path(&self) -> PathBuf {
        PathBuf::from(&self.0)
    }

    /// First 7 characters of the hash
    pub fn to_short_oid(&self) -> String {
        self.0.split_at(7).0.to_string()
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for ObjectId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ObjectId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = String::deserialize(deserializer)?;
        ObjectId::try_parse(id).map_err(serde::de::Error::custom)
    }
}
