//! A minimal local version-control engine
//!
//! `mygit` keeps a content-addressed object store and a branch/commit graph under a
//! single `.mygit/` directory, and gates every operation through a role-based access
//! mediator configured by two JSON documents living next to the objects.
//!
//! - `areas`: the on-disk stores (objects, refs, index, workspace, access policies)
//! - `artifacts`: value types shared by the stores (object ids, commits, branch names, roles)
//! - `commands`: the user-facing operations composed from the areas

pub mod areas;
pub mod artifacts;
pub mod commands;
