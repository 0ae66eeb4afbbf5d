//! Core repository components
//!
//! This module contains the fundamental building blocks of a repository:
//!
//! - `access`: Role and branch policy mediator gating every operation
//! - `database`: Write-once object store for blobs and commits
//! - `index`: Append-only staging area consumed by commit
//! - `refs`: Branch heads and the symbolic HEAD
//! - `repository`: High-level repository operations and coordination
//! - `workspace`: Top-level working directory file operations

pub mod access;
pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod workspace;
