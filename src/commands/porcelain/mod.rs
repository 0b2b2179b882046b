//! Repository operations
//!
//! Each command is an `impl Repository` block:
//!
//! - `init`: Create a new repository
//! - `add`: Stage files for commit
//! - `commit`: Record the staged files as a commit
//! - `status`: Compare the working tree with the staging area
//! - `log`: Show the current branch's history
//! - `branch`: Create branches
//! - `checkout`: Switch the current branch

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod init;
pub mod log;
pub mod status;
