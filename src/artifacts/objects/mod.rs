//! Commit records and their parts
//!
//! A commit is an immutable snapshot of the staging area at the moment it was
//! taken. Unlike git there is no blob or tree indirection: every commit owns
//! the full content of each file it touched.
//!
//! - **CommitId**: opaque, randomly generated identifier
//! - **FileChange**: one affected path, its change kind and its content
//! - **Commit**: message, author, timestamp, parent link and changes
//!
//! Commits are stored as JSON, one file per commit named after its id.

pub mod commit;
pub mod commit_id;
pub mod file_change;

/// Number of characters shown for abbreviated commit ids
pub const SHORT_ID_LENGTH: usize = 8;
