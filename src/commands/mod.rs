//! Command implementations
//!
//! - `porcelain`: user-facing commands that read input through a
//!   [`Session`](crate::areas::session::Session) and write to its writer

pub mod porcelain;
