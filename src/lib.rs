//! snapvc: a local, snapshot-based version control engine
//!
//! The crate is organized the same way as the on-disk repository it manages:
//!
//! - `areas`: the physical areas of a repository (working tree, staging mirror,
//!   commit database, branch refs) and the `Repository` coordinating them
//! - `artifacts`: the data types flowing between areas (commits, branches,
//!   ignore patterns, status reports, layout configuration)
//! - `commands`: the repository operations (`init`, `stage`, `commit`,
//!   `status`, `log`, branch management) and their terminal rendering
//!
//! ```no_run
//! use snapvc::{Repository, RepositoryLayout};
//!
//! let mut repository = Repository::init("./project", RepositoryLayout::default())?;
//! repository.stage(&["notes.txt"])?;
//! if let Some(commit) = repository.commit("First snapshot", "alice")? {
//!     println!("created {}", commit.id());
//! }
//! # Ok::<(), snapvc::RepositoryError>(())
//! ```

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;

pub use areas::repository::Repository;
pub use artifacts::branch::history::Branch;
pub use artifacts::branch::branch_name::BranchName;
pub use artifacts::core::layout::RepositoryLayout;
pub use artifacts::ignore::IgnoreMatcher;
pub use artifacts::objects::commit::Commit;
pub use artifacts::objects::commit_id::CommitId;
pub use artifacts::objects::file_change::{ChangeKind, FileChange};
pub use artifacts::status::file_status::FileStatus;
pub use artifacts::status::status_info::RepositoryStatus;
pub use errors::{RepositoryError, RepositoryResult};
