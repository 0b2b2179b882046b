//! Core repository components
//!
//! This module contains the physical areas of a repository:
//!
//! - `database`: Commit store, one JSON record per commit
//! - `refs`: Branch ledger (branch histories and the current branch)
//! - `repository`: High-level repository state and coordination
//! - `staging`: Staging mirror holding copies of staged files
//! - `workspace`: Working tree traversal

pub mod database;
pub mod refs;
pub mod repository;
pub mod staging;
pub mod workspace;
