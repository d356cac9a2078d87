//! Line diffing
//!
//! The pipeline, leaves first:
//!
//! - `line_encoder`: maps every distinct line to a small integer code
//! - `myers`: linear-space Myers search marking lines outside the LCS
//! - `edit_script`: flattens the marks into ordered per-line edits
//! - `hunk`: groups edits into unified-diff hunks with bounded context
//! - `diff_algorithm`: the `DiffAlgorithm` trait and `MyersDiff`, tying it together
//! - `diff_target`: one side of a file diff (path, timestamp, lines)
//!
//! Everything in the pipeline is pure and owned by a single diff computation.

pub mod diff_algorithm;
pub mod diff_target;
pub mod edit_script;
pub mod error;
pub mod hunk;
pub mod line_encoder;
pub mod myers;

pub use diff_algorithm::{DiffAlgorithm, Edit, EditKind, MyersDiff};
pub use error::{DiffError, DiffResult, Side};
pub use hunk::{DEFAULT_CONTEXT, Hunk, HunkAssembler};

/// Diffs two line sequences and returns the hunks with `context` lines of context
pub fn diff_lines<'d, S: AsRef<str>>(
    a: &'d [S],
    b: &'d [S],
    context: usize,
) -> DiffResult<Vec<Hunk<'d>>> {
    MyersDiff::new(a, b).hunks(context)
}
