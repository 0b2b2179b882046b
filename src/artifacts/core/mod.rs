//! Core utilities and shared types
//!
//! - `atomic`: temp-file-and-rename writes for metadata records
//! - `layout`: names of every file and directory a repository owns on disk
//! - `lock`: advisory lock serializing top-level repository operations

pub mod atomic;
pub mod layout;
pub mod lock;
