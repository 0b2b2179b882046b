//! Working tree status inspection
//!
//! This module compares the working tree against the staging mirror.
//!
//! ## Components
//!
//! - `file_status`: per-path status labels
//! - `inspector`: content comparison and commit-time change classification
//! - `status_info`: the staged/unstaged status report

pub mod file_status;
pub mod inspector;
pub mod status_info;
