//! Grouping of an edit script into unified-diff hunks
//!
//! A hunk is a run of changes padded with at most `context` unchanged lines on
//! each side. Two changes separated by `2 * context` unchanged lines or fewer end
//! up in the same hunk; one more unchanged line and they are split, with the gap
//! between the two hunks never shown.

use crate::artifacts::diff::diff_algorithm::{Edit, EditKind};

/// Lines of unchanged context kept around each change
pub const DEFAULT_CONTEXT: usize = 3;

/// Widest context the assembler works with; anything larger already shows whole files
const MAX_CONTEXT: usize = usize::MAX / 2 - 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk<'d> {
    a_start: usize,
    b_start: usize,
    a_size: usize,
    b_size: usize,
    edits: Vec<Edit<'d>>,
}

impl<'d> Hunk<'d> {
    /// 1-based line in the old file the hunk starts at
    pub fn a_start(&self) -> usize {
        self.a_start
    }

    /// 1-based line in the new file the hunk starts at
    pub fn b_start(&self) -> usize {
        self.b_start
    }

    /// Lines taken from the old file (kept and deleted)
    pub fn a_size(&self) -> usize {
        self.a_size
    }

    /// Lines taken from the new file (kept and inserted)
    pub fn b_size(&self) -> usize {
        self.b_size
    }

    pub fn edits(&self) -> &[Edit<'d>] {
        &self.edits
    }

    pub fn header(&self) -> String {
        format!(
            "@@ -{},{} +{},{} @@",
            self.a_start, self.a_size, self.b_start, self.b_size
        )
    }
}

/// Hunk being accumulated while scanning the edit script
#[derive(Debug, Clone, Copy)]
struct Pending {
    start: usize,
    a_start: usize,
    b_start: usize,
    a_size: usize,
    b_size: usize,
}

impl Pending {
    fn close<'d>(self, edits: &[Edit<'d>], end: usize, trimmed: usize) -> Hunk<'d> {
        let (a_size, b_size) = (self.a_size - trimmed, self.b_size - trimmed);
        let hunk = Hunk {
            a_start: empty_anchor(self.a_start, a_size),
            b_start: empty_anchor(self.b_start, b_size),
            a_size,
            b_size,
            edits: edits[self.start..end].to_vec(),
        };

        debug_assert_eq!(
            hunk.a_size,
            hunk.edits.iter().filter(|e| e.kind() != EditKind::Insert).count()
        );
        debug_assert_eq!(
            hunk.b_size,
            hunk.edits.iter().filter(|e| e.kind() != EditKind::Delete).count()
        );

        hunk
    }
}

/// An empty side is anchored on the line before the hunk, as `patch` expects,
/// except at the top of a file where it stays at line 1
fn empty_anchor(start: usize, size: usize) -> usize {
    if size == 0 && start > 1 {
        start - 1
    } else {
        start
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HunkAssembler {
    context: usize,
}

impl Default for HunkAssembler {
    fn default() -> Self {
        Self::new(DEFAULT_CONTEXT)
    }
}

impl HunkAssembler {
    pub fn new(context: usize) -> Self {
        Self {
            context: context.min(MAX_CONTEXT),
        }
    }

    pub fn assemble<'d>(&self, edits: &[Edit<'d>]) -> Vec<Hunk<'d>> {
        let context = self.context;
        let split = 2 * context + 1;

        let mut hunks = Vec::new();
        let mut pending = Pending {
            start: 0,
            a_start: 1,
            b_start: 1,
            a_size: 0,
            b_size: 0,
        };
        // consecutive unchanged lines ending at the current edit
        let mut run = 0;
        // lines of each file consumed so far
        let (mut a_seen, mut b_seen) = (0, 0);

        for (i, edit) in edits.iter().enumerate() {
            match edit.kind() {
                EditKind::Equal => {
                    run += 1;
                    a_seen += 1;
                    b_seen += 1;
                    pending.a_size += 1;
                    pending.b_size += 1;

                    // the first `split` lines of a diff have nothing to close yet
                    if run == split && i + 1 != split {
                        hunks.push(pending.close(edits, i - context, context + 1));
                        pending = Pending {
                            start: i - context,
                            a_start: a_seen - context,
                            b_start: b_seen - context,
                            a_size: context + 1,
                            b_size: context + 1,
                        };
                    }
                }
                kind => {
                    let leading = run == i;
                    let threshold = if leading { context } else { 2 * context };
                    if run > threshold {
                        pending = Pending {
                            start: i - context,
                            a_start: a_seen - context + 1,
                            b_start: b_seen - context + 1,
                            a_size: context,
                            b_size: context,
                        };
                    }
                    run = 0;

                    if kind == EditKind::Delete {
                        a_seen += 1;
                        pending.a_size += 1;
                    } else {
                        b_seen += 1;
                        pending.b_size += 1;
                    }
                }
            }
        }

        if edits.len() - pending.start > run {
            let trimmed = run.saturating_sub(context);
            hunks.push(pending.close(edits, edits.len() - trimmed, trimmed));
        }

        hunks
    }
}
