//! Index (staging area)
//!
//! The index tracks which files go into the next commit. It is an append-only
//! text file with one `<hash> <filename>` line per `add`; the same name may
//! appear several times and the last line wins when the file is read back.
//! Commit deletes the file, and a missing file reads as an empty staging area.

use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::commit::CommitTree;
use anyhow::Context;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `.mygit/index`)
    path: Box<Path>,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Append an entry to the staging area
    pub fn stage(&self, entry: &IndexEntry) -> anyhow::Result<()> {
        let mut index_file = std::fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(self.path())
            .with_context(|| format!("Unable to open index file {}", self.path.display()))?;

        index_file
            .write_all(entry.to_line().as_bytes())
            .with_context(|| format!("Unable to write index file {}", self.path.display()))?;

        debug!(name = %entry.name, oid = %entry.oid, "file staged");
        Ok(())
    }

    /// Read the staged entries, later lines overriding earlier ones
    pub fn read_staged(&self) -> anyhow::Result<CommitTree> {
        if !self.exists() {
            return Ok(CommitTree::new());
        }

        let index_file = std::fs::File::open(self.path())
            .with_context(|| format!("Unable to open index file {}", self.path.display()))?;

        let mut staged = CommitTree::new();
        for line in BufReader::new(index_file).lines() {
            let line = line.context("Unable to read index file")?;

            if let Some(entry) = IndexEntry::try_parse_line(&line)
                .with_context(|| format!("Invalid index line '{}'", line))?
            {
                staged.insert(entry.name, entry.oid);
            }
        }

        Ok(staged)
    }

    /// Delete the index file
    pub fn clear(&self) -> anyhow::Result<()> {
        match std::fs::remove_file(self.path()) {
            Ok(()) => {
                debug!("index cleared");
                Ok(())
            }
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error)
                .with_context(|| format!("Unable to remove index file {}", self.path.display())),
        }
    }
}
