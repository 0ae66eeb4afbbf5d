use crate::areas::repository::Repository;
use crate::artifacts::access::role::Command;
use crate::artifacts::index::index_entry::IndexEntry;
use std::io::Write;
use std::path::Path;

impl Repository {
    /// Store `file_path` as a blob and stage it under its name in the work tree
    ///
    /// A missing file is reported on the output and is not an error.
    pub fn add(&self, user: &str, file_path: &Path) -> anyhow::Result<()> {
        self.access().authorize_command(user, Command::Add)?;

        if !file_path.exists() {
            writeln!(self.writer(), "File does not exist: {}", file_path.display())?;
            return Ok(());
        }

        let name = self.workspace().tracked_name(file_path)?;
        let blob = self.workspace().parse_blob(&name)?;
        let blob_id = self.database().store(&blob)?;

        self.index().stage(&IndexEntry::new(name.clone(), blob_id.clone()))?;

        writeln!(self.writer(), "Added {} to index (hash: {})", name, blob_id)?;

        Ok(())
    }
}
