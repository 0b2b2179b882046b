//! Data structures and algorithms shared by the repository areas
//!
//! - `branch`: Branch names and commit histories
//! - `core`: Repository layout configuration and locking
//! - `ignore`: Glob-based ignore patterns
//! - `objects`: Commit records and file changes
//! - `status`: Working tree inspection and change classification

pub mod branch;
pub mod core;
pub mod ignore;
pub mod objects;
pub mod status;
