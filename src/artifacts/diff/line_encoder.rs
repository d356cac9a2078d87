use crate::artifacts::diff::error::{DiffError, DiffResult, Side};
use std::collections::HashMap;

/// Longest sequence the search vectors can index.
pub const MAX_SEQUENCE_LEN: usize = i32::MAX as usize;

/// Both sides of a diff mapped onto one shared code space
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedLines {
    pub a: Vec<u32>,
    pub b: Vec<u32>,
    pub distinct: usize,
}

/// Assigns every distinct line a dense integer code, so the engine compares
/// `u32`s instead of strings. Codes are handed out in first-seen order, `a`
/// before `b`.
#[derive(Debug, Default)]
pub struct LineEncoder<'d> {
    codes: HashMap<&'d str, u32>,
}

impl<'d> LineEncoder<'d> {
    fn new() -> Self {
        Self::default()
    }

    pub fn encode<S: AsRef<str>>(a: &'d [S], b: &'d [S]) -> DiffResult<EncodedLines> {
        Self::encode_with_limit(a, b, MAX_SEQUENCE_LEN)
    }

    pub(crate) fn encode_with_limit<S: AsRef<str>>(
        a: &'d [S],
        b: &'d [S],
        limit: usize,
    ) -> DiffResult<EncodedLines> {
        check_len(Side::Old, a.len(), limit)?;
        check_len(Side::New, b.len(), limit)?;

        let mut encoder = Self::new();
        let a = encoder.encode_side(a);
        let b = encoder.encode_side(b);

        Ok(EncodedLines {
            a,
            b,
            distinct: encoder.distinct(),
        })
    }

    fn encode_side<S: AsRef<str>>(&mut self, lines: &'d [S]) -> Vec<u32> {
        lines.iter().map(|line| self.code(line.as_ref())).collect()
    }

    fn code(&mut self, line: &'d str) -> u32 {
        let next = self.codes.len() as u32;
        *self.codes.entry(line).or_insert(next)
    }

    pub fn distinct(&self) -> usize {
        self.codes.len()
    }
}

fn check_len(side: Side, len: usize, limit: usize) -> DiffResult<()> {
    if len > limit {
        return Err(DiffError::InputTooLarge { side, len, limit });
    }

    Ok(())
}
