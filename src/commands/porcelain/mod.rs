//! User-facing commands
//!
//! - `diff`: print a unified diff of two files

pub mod diff;
