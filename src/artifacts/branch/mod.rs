//! Branches
//!
//! - `branch_name`: validated branch names
//! - `history`: a branch's ordered commit history and head pointer

pub mod branch_name;
pub mod history;

/// Names rejected by git's ref-name rules also make unsafe file names here
pub const INVALID_BRANCH_NAME_REGEX: &str =
    r"^\.|\/\.|\.\.|^\/|\/$|\.lock$|\.json$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";
