pub mod areas;
pub mod artifacts;
pub mod commands;

pub use artifacts::diff::{
    DiffError, DiffResult, Edit, EditKind, Hunk, HunkAssembler, diff_lines,
};

/// Environment variable holding the `tracing` filter directives
pub const LOG_ENV: &str = "LDIFF_LOG";

/// When to colorize diff output
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorChoice {
    /// Colorize when writing to a terminal and `NO_COLOR` is unset
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn apply(self) {
        match self {
            ColorChoice::Auto => {}
            ColorChoice::Always => colored::control::set_override(true),
            ColorChoice::Never => colored::control::set_override(false),
        }
    }
}
