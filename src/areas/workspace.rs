use crate::artifacts::core::REPOSITORY_DIR;
use crate::artifacts::core::error::RepositoryError;
use crate::artifacts::objects::blob::Blob;
use anyhow::Context;
use bytes::Bytes;
use std::path::Path;
use tracing::warn;
use walkdir::WalkDir;

const IGNORED_PATHS: [&str; 1] = [REPOSITORY_DIR];

/// The work tree: only regular files directly under the root are tracked
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Names of the top-level regular files, sorted
    pub fn list_files(&self) -> anyhow::Result<Vec<String>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.with_context(|| {
                format!("Unable to list work tree {}", self.path.display())
            })?;

            // links count under their own name when they resolve to a regular file
            let is_file = entry.file_type().is_file()
                || (entry.path_is_symlink() && entry.path().is_file());
            if !is_file {
                continue;
            }

            match entry.file_name().to_str() {
                Some(name) if !IGNORED_PATHS.contains(&name) => files.push(name.to_string()),
                Some(_) => {}
                None => warn!(path = ?entry.path(), "skipping file with non UTF-8 name"),
            }
        }

        Ok(files)
    }

    pub fn file_exists(&self, name: &str) -> bool {
        self.path.join(name).is_file()
    }

    pub fn read_file(&self, name: &str) -> anyhow::Result<Bytes> {
        let file_path = self.path.join(name);

        let content = std::fs::read(&file_path)
            .with_context(|| format!("Unable to read file {}", file_path.display()))?;

        Ok(content.into())
    }

    pub fn parse_blob(&self, name: &str) -> anyhow::Result<Blob> {
        Ok(Blob::new(self.read_file(name)?))
    }

    /// Name under which the file at `file_path` is tracked
    ///
    /// The file must be a regular file directly inside the work tree root. Only
    /// the parent directory is resolved, so a symbolic link is tracked under its
    /// own name with the content of its target.
    pub fn tracked_name(&self, file_path: &Path) -> anyhow::Result<String> {
        let name = file_path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                RepositoryError::UserError(format!(
                    "not a regular file: {}",
                    file_path.display()
                ))
            })?;

        let parent = match file_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let parent = parent
            .canonicalize()
            .with_context(|| format!("Unable to resolve {}", file_path.display()))?;

        if parent.as_path() != &*self.path {
            anyhow::bail!(RepositoryError::UserError(format!(
                "only files at the top level of the work tree can be tracked: {}",
                file_path.display()
            )));
        }

        if IGNORED_PATHS.contains(&name) {
            anyhow::bail!(RepositoryError::UserError(format!(
                "cannot track {}",
                name
            )));
        }

        if !parent.join(name).is_file() {
            anyhow::bail!(RepositoryError::UserError(format!(
                "not a regular file: {}",
                file_path.display()
            )));
        }

        Ok(name.to_string())
    }
}
