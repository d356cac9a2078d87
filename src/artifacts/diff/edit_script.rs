use crate::artifacts::diff::diff_algorithm::Edit;
use crate::artifacts::diff::error::{DiffError, DiffResult};
use crate::artifacts::diff::myers::EditMarks;

/// Flattens per-side change marks into a single ordered edit script.
///
/// Each round emits the removed lines at the current position of `a`, then the
/// added lines at the current position of `b`, then the kept lines shared by both.
/// Within a changed region deletions therefore always precede insertions.
pub fn linearize<'d, S: AsRef<str>>(
    a: &'d [S],
    b: &'d [S],
    marks: &EditMarks,
) -> DiffResult<Vec<Edit<'d>>> {
    let (n, m) = (a.len(), b.len());
    if marks.removed.len() != n || marks.added.len() != m {
        return Err(DiffError::InvariantViolation(format!(
            "edit marks cover {}/{} lines but inputs have {n}/{m}",
            marks.removed.len(),
            marks.added.len()
        )));
    }

    let mut edits = Vec::with_capacity(n.max(m));
    let (mut i, mut j) = (0, 0);

    while i < n || j < m {
        let position = (i, j);

        while i < n && marks.removed[i] {
            edits.push(Edit::delete(i + 1, a[i].as_ref()));
            i += 1;
        }

        while j < m && marks.added[j] {
            edits.push(Edit::insert(j + 1, b[j].as_ref()));
            j += 1;
        }

        while i < n && j < m && !marks.removed[i] && !marks.added[j] {
            edits.push(Edit::equal(i + 1, j + 1, a[i].as_ref()));
            i += 1;
            j += 1;
        }

        if (i, j) == position {
            return Err(DiffError::InvariantViolation(format!(
                "edit marks out of sync at old line {}, new line {}",
                i + 1,
                j + 1
            )));
        }
    }

    Ok(edits)
}
