//! Object database
//!
//! A write-once, content-addressed store. Every object lives in
//! `.mygit/objects/<hash>` where the hash is the SHA-1 of the stored bytes.
//! Blobs and commits share the namespace; an existing file is never rewritten.

use crate::artifacts::core::error::RepositoryError;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Object, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use bytes::Bytes;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    pub fn contains(&self, object_id: &ObjectId) -> bool {
        self.path.join(object_id.to_path()).exists()
    }

    /// Store the content of the file at `file_path` as a blob
    pub fn store_file(&self, file_path: &Path) -> anyhow::Result<ObjectId> {
        let content = std::fs::read(file_path)
            .with_context(|| format!("Unable to read file {}", file_path.display()))?;

        self.store(&Blob::new(Bytes::from(content)))
    }

    /// Store an object unless an object with the same id already exists
    pub fn store(&self, object: &impl Object) -> anyhow::Result<ObjectId> {
        let object_content = object.serialize()?;
        let object_id = ObjectId::hash(&object_content);
        let object_path = self.path.join(object_id.to_path());

        // write the object to disk unless it already exists
        if object_path.exists() {
            debug!(oid = %object_id, kind = %object.object_type(), "object already stored");
        } else {
            self.write_object(object_path, object_content)?;
            debug!(oid = %object_id, kind = %object.object_type(), "object stored");
        }

        Ok(object_id)
    }

    pub fn load(&self, object_id: &ObjectId) -> anyhow::Result<Bytes> {
        let object_path = self.path.join(object_id.to_path());

        if !object_path.exists() {
            anyhow::bail!(RepositoryError::not_found("object", object_id.as_ref()));
        }

        self.read_object(object_path)
    }

    pub fn parse_object_as_commit(&self, object_id: &ObjectId) -> anyhow::Result<Commit> {
        let object_content = self.load(object_id)?;

        Commit::deserialize(object_content)
            .with_context(|| format!("Unable to parse commit {}", object_id))
    }

    fn read_object(&self, object_path: PathBuf) -> anyhow::Result<Bytes> {
        let object_content = std::fs::read(&object_path).context(format!(
            "Unable to read object file {}",
            object_path.display()
        ))?;

        Ok(object_content.into())
    }

    fn write_object(&self, object_path: PathBuf, object_content: Bytes) -> anyhow::Result<()> {
        let object_dir = object_path
            .parent()
            .context(format!("Invalid object path {}", object_path.display()))?;
        let temp_object_path = object_dir.join(Self::generate_temp_name());

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_object_path)
            .context(format!(
                "Unable to open object file {}",
                temp_object_path.display()
            ))?;

        file.write_all(&object_content).context(format!(
            "Unable to write object file {}",
            temp_object_path.display()
        ))?;
        drop(file);

        // rename the temp file to the object file so readers never see a partial object
        std::fs::rename(&temp_object_path, &object_path).context(format!(
            "Unable to rename object file to {}",
            object_path.display()
        ))?;

        Ok(())
    }

    fn generate_temp_name() -> String {
        let nanos = chrono::Utc::now()
            .timestamp_nanos_opt()
            .unwrap_or_default();

        format!("tmp-obj-{}-{}", std::process::id(), nanos)
    }
}
