use crate::artifacts::diff::edit_script::linearize;
use crate::artifacts::diff::error::DiffResult;
use crate::artifacts::diff::hunk::{Hunk, HunkAssembler};
use crate::artifacts::diff::line_encoder::LineEncoder;
use crate::artifacts::diff::myers::{EditMarks, compute_lcs};
use derive_new::new;
use std::fmt::Display;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditKind {
    Equal,
    Delete,
    Insert,
}

impl EditKind {
    pub fn symbol(&self) -> char {
        match self {
            EditKind::Equal => ' ',
            EditKind::Delete => '-',
            EditKind::Insert => '+',
        }
    }
}

/// One line of an edit script
///
/// Line numbers are 1-based. A deleted line has no position in the new file and
/// an inserted line has none in the old file; kept lines carry both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edit<'d> {
    kind: EditKind,
    a_line: Option<usize>,
    b_line: Option<usize>,
    text: &'d str,
}

impl<'d> Edit<'d> {
    pub fn equal(a_line: usize, b_line: usize, text: &'d str) -> Self {
        Self {
            kind: EditKind::Equal,
            a_line: Some(a_line),
            b_line: Some(b_line),
            text,
        }
    }

    pub fn delete(a_line: usize, text: &'d str) -> Self {
        Self {
            kind: EditKind::Delete,
            a_line: Some(a_line),
            b_line: None,
            text,
        }
    }

    pub fn insert(b_line: usize, text: &'d str) -> Self {
        Self {
            kind: EditKind::Insert,
            a_line: None,
            b_line: Some(b_line),
            text,
        }
    }

    pub fn kind(&self) -> EditKind {
        self.kind
    }

    pub fn a_line(&self) -> Option<usize> {
        self.a_line
    }

    pub fn b_line(&self) -> Option<usize> {
        self.b_line
    }

    pub fn text(&self) -> &'d str {
        self.text
    }

    pub fn is_change(&self) -> bool {
        self.kind != EditKind::Equal
    }

    pub fn as_string(&self) -> String {
        format!("{}{}", self.kind.symbol(), self.text)
    }
}

impl Display for Edit<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

pub trait DiffAlgorithm<'d> {
    /// Lines outside a longest common subsequence, marked per side
    fn lcs(&self) -> DiffResult<EditMarks>;

    /// The full edit script, one record per line of either input
    fn diff(&self) -> DiffResult<Vec<Edit<'d>>>;

    fn hunks(&self, context: usize) -> DiffResult<Vec<Hunk<'d>>> {
        let edits = self.diff()?;
        Ok(HunkAssembler::new(context).assemble(&edits))
    }

    fn format_diff(&self) -> DiffResult<String> {
        let formatted = self
            .diff()?
            .iter()
            .map(|edit| edit.as_string())
            .collect::<Vec<_>>()
            .join("\n");

        Ok(formatted)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MyersDiff<'d, S> {
    a: &'d [S],
    b: &'d [S],
}

impl<'d, S: AsRef<str>> DiffAlgorithm<'d> for MyersDiff<'d, S> {
    fn lcs(&self) -> DiffResult<EditMarks> {
        let encoded = LineEncoder::encode(self.a, self.b)?;
        let marks = compute_lcs(&encoded.a, &encoded.b)?;

        debug!(
            old_lines = self.a.len(),
            new_lines = self.b.len(),
            distinct = encoded.distinct,
            edit_distance = marks.edit_distance(),
            "computed shortest edit script"
        );

        Ok(marks)
    }

    fn diff(&self) -> DiffResult<Vec<Edit<'d>>> {
        let marks = self.lcs()?;
        linearize(self.a, self.b, &marks)
    }
}
