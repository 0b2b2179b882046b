//! Repository commands
//!
//! - `porcelain`: the operations of a repository, one `impl Repository` block per command
//! - `printer`: text rendering of their results for the command line

pub mod porcelain;
pub mod printer;
