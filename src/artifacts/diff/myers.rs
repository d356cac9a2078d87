//! Linear-space Myers shortest-edit-script search
//!
//! Works on the integer codes produced by the line encoder. Every sub-problem is
//! first stripped of its common prefix and suffix; what is left is either trivial
//! (one side empty) or split in two at a middle snake found by running a forward
//! search from the top-left corner and a reverse search from the bottom-right corner
//! until their frontiers meet.
//!
//! Sub-problems are kept on an explicit work stack instead of the call stack, so
//! inputs with a large edit distance cannot overflow it.
//!
//! See "An O(ND) Difference Algorithm and Its Variations" (Myers, 1986), section 4b.

use crate::artifacts::diff::error::{DiffError, DiffResult};
use tracing::trace;

/// Per-line change marks for both sides of a diff
///
/// Lines left unmarked on either side form the common subsequence: read in order,
/// the unmarked lines of `removed` equal the unmarked lines of `added`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditMarks {
    pub removed: Vec<bool>,
    pub added: Vec<bool>,
}

impl EditMarks {
    pub fn new(a_len: usize, b_len: usize) -> Self {
        Self {
            removed: vec![false; a_len],
            added: vec![false; b_len],
        }
    }

    /// Number of deleted plus inserted lines
    pub fn edit_distance(&self) -> usize {
        self.removed.iter().filter(|&&m| m).count() + self.added.iter().filter(|&&m| m).count()
    }

    pub fn is_unchanged(&self) -> bool {
        self.edit_distance() == 0
    }
}

/// Half-open window `a[a_lo..a_hi]` x `b[b_lo..b_hi]` of the edit graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Window {
    a_lo: usize,
    a_hi: usize,
    b_lo: usize,
    b_hi: usize,
}

impl Window {
    fn split_at(self, x: usize, y: usize) -> DiffResult<(Window, Window)> {
        let inside = (self.a_lo..=self.a_hi).contains(&x) && (self.b_lo..=self.b_hi).contains(&y);
        let at_corner =
            (x, y) == (self.a_lo, self.b_lo) || (x, y) == (self.a_hi, self.b_hi);

        if !inside || at_corner {
            return Err(DiffError::InvariantViolation(format!(
                "middle snake ({x}, {y}) does not split {:?}",
                self
            )));
        }

        Ok((
            Window {
                a_hi: x,
                b_hi: y,
                ..self
            },
            Window {
                a_lo: x,
                b_lo: y,
                ..self
            },
        ))
    }
}

/// State shared by every step of one LCS computation
///
/// `down` holds the furthest x reached by the forward search on each diagonal,
/// `up` the furthest (smallest) x reached by the reverse search. Both are indexed
/// by diagonal plus an offset so indices never go negative.
struct Search<'s> {
    a: &'s [u32],
    b: &'s [u32],
    down: Vec<isize>,
    up: Vec<isize>,
    offset: isize,
    marks: EditMarks,
}

impl<'s> Search<'s> {
    fn new(a: &'s [u32], b: &'s [u32]) -> Self {
        let offset = a.len() + b.len() + 1;

        Self {
            a,
            b,
            down: vec![0; 2 * offset + 2],
            up: vec![0; 2 * offset + 2],
            offset: offset as isize,
            marks: EditMarks::new(a.len(), b.len()),
        }
    }

    fn run(mut self) -> DiffResult<EditMarks> {
        let mut pending = vec![Window {
            a_lo: 0,
            a_hi: self.a.len(),
            b_lo: 0,
            b_hi: self.b.len(),
        }];

        while let Some(window) = pending.pop() {
            let window = self.trim_common_affixes(window);

            if window.a_lo == window.a_hi {
                self.marks.added[window.b_lo..window.b_hi].fill(true);
            } else if window.b_lo == window.b_hi {
                self.marks.removed[window.a_lo..window.a_hi].fill(true);
            } else {
                let (x, y) = self.middle_snake(window)?;
                let (head, tail) = window.split_at(x, y)?;
                pending.push(tail);
                pending.push(head);
            }
        }

        Ok(self.marks)
    }

    fn trim_common_affixes(&self, mut w: Window) -> Window {
        while w.a_lo < w.a_hi && w.b_lo < w.b_hi && self.a[w.a_lo] == self.b[w.b_lo] {
            w.a_lo += 1;
            w.b_lo += 1;
        }

        while w.a_lo < w.a_hi && w.b_lo < w.b_hi && self.a[w.a_hi - 1] == self.b[w.b_hi - 1] {
            w.a_hi -= 1;
            w.b_hi -= 1;
        }

        w
    }

    fn middle_snake(&mut self, w: Window) -> DiffResult<(usize, usize)> {
        let (a_lo, a_hi) = (w.a_lo as isize, w.a_hi as isize);
        let (b_lo, b_hi) = (w.b_lo as isize, w.b_hi as isize);

        // diagonals the forward and reverse searches start on
        let down_k = a_lo - b_lo;
        let up_k = a_hi - b_hi;

        let delta = (a_hi - a_lo) - (b_hi - b_lo);
        let odd_delta = delta & 1 != 0;
        let down_offset = self.offset - down_k;
        let up_offset = self.offset - up_k;
        let max_d = (a_hi - a_lo + b_hi - b_lo) / 2 + 1;

        self.down[at(down_offset, down_k + 1)] = a_lo;
        self.up[at(up_offset, up_k - 1)] = a_hi;

        for d in 0..=max_d {
            for k in (down_k - d..=down_k + d).step_by(2) {
                let mut x = if k == down_k - d {
                    self.down[at(down_offset, k + 1)]
                } else {
                    let right = self.down[at(down_offset, k - 1)] + 1;
                    let below = self.down[at(down_offset, k + 1)];
                    if k < down_k + d && below >= right {
                        below
                    } else {
                        right
                    }
                };
                let mut y = x - k;

                while x < a_hi && y < b_hi && self.a[x as usize] == self.b[y as usize] {
                    x += 1;
                    y += 1;
                }
                self.down[at(down_offset, k)] = x;

                if odd_delta && up_k - d < k && k < up_k + d && self.up[at(up_offset, k)] <= x {
                    trace!(d, x, y, "forward search met reverse search");
                    return Ok((x as usize, (x - k) as usize));
                }
            }

            for k in (up_k - d..=up_k + d).step_by(2) {
                let mut x = if k == up_k + d {
                    self.up[at(up_offset, k - 1)]
                } else {
                    let left = self.up[at(up_offset, k + 1)] - 1;
                    let above = self.up[at(up_offset, k - 1)];
                    if k > up_k - d && above < left {
                        above
                    } else {
                        left
                    }
                };
                let mut y = x - k;

                while x > a_lo && y > b_lo && self.a[(x - 1) as usize] == self.b[(y - 1) as usize] {
                    x -= 1;
                    y -= 1;
                }
                self.up[at(up_offset, k)] = x;

                if !odd_delta && down_k - d <= k && k <= down_k + d {
                    let reached = self.down[at(down_offset, k)];
                    if x <= reached {
                        trace!(d, x = reached, y = reached - k, "reverse search met forward search");
                        return Ok((reached as usize, (reached - k) as usize));
                    }
                }
            }
        }

        Err(DiffError::MiddleSnakeNotFound {
            a_lo: w.a_lo,
            a_hi: w.a_hi,
            b_lo: w.b_lo,
            b_hi: w.b_hi,
            max_d: max_d as usize,
        })
    }
}

#[inline]
fn at(offset: isize, k: isize) -> usize {
    (offset + k) as usize
}

/// Marks the lines of `a` and `b` that are not part of a longest common subsequence
pub fn compute_lcs(a: &[u32], b: &[u32]) -> DiffResult<EditMarks> {
    Search::new(a, b).run()
}
