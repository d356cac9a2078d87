//! Where diff input comes from and where its output goes
//!
//! - `workspace`: resolving and loading files as bounded line sets
//! - `session`: a workspace bound to an output writer

pub mod session;
pub mod workspace;
