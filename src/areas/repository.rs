use crate::areas::access::Access;
use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::artifacts::core::REPOSITORY_DIR;
use crate::artifacts::core::config::RepositoryConfig;
use crate::artifacts::core::error::RepositoryError;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::Path;

pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    index: Index,
    database: Database,
    workspace: Workspace,
    refs: Refs,
    access: Access,
}

impl Repository {
    pub fn new(config: &RepositoryConfig, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        if !config.work_tree.is_dir() {
            anyhow::bail!(RepositoryError::not_found(
                "work tree",
                config.work_tree.display().to_string()
            ));
        }

        let path = config.work_tree.canonicalize().with_context(|| {
            format!("Unable to resolve work tree {}", config.work_tree.display())
        })?;
        let repository_path = path.join(REPOSITORY_DIR);

        let index = Index::new(repository_path.join("index").into_boxed_path());
        let database = Database::new(repository_path.join("objects").into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());
        let refs = Refs::new(repository_path.clone().into_boxed_path());
        let access = Access::new(
            repository_path.into_boxed_path(),
            config.branch_policy_fallback,
        );

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            index,
            database,
            workspace,
            refs,
            access,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn repository_path(&self) -> Box<Path> {
        self.path.join(REPOSITORY_DIR).into_boxed_path()
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn access(&self) -> &Access {
        &self.access
    }
}
