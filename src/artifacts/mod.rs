//! Diff data structures and algorithms
//!
//! - `core`: shared terminal plumbing (pager wrapper)
//! - `diff`: line encoding, Myers' linear-space search, edit scripts and hunks

pub mod core;
pub mod diff;
