use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;

/// One staged file: the blob id of its content and its name in the work tree
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct IndexEntry {
    pub name: String,
    pub oid: ObjectId,
}

impl IndexEntry {
    /// Parse a `<hash> <filename>` line
    ///
    /// Lines without a separator yield `None` and are skipped by readers. File
    /// names may contain spaces, only the first space separates the fields.
    pub fn try_parse_line(line: &str) -> anyhow::Result<Option<Self>> {
        match line.split_once(' ') {
            Some((oid, name)) => {
                let oid = ObjectId::try_parse(oid.to_string())?;
                Ok(Some(IndexEntry::new(name.to_string(), oid)))
            }
            None => Ok(None),
        }
    }

    pub fn to_line(&self) -> String {
        format!("{} {}\n", self.oid, self.name)
    }
}
