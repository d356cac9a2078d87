use crate::areas::session::Session;
use crate::areas::workspace::ReadLimits;
use crate::artifacts::diff::diff_algorithm::{DiffAlgorithm, Edit, EditKind, MyersDiff};
use crate::artifacts::diff::diff_target::DiffTarget;
use crate::artifacts::diff::hunk::{DEFAULT_CONTEXT, Hunk};
use colored::{ColoredString, Colorize};
use derive_new::new;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, new)]
pub struct DiffOptions {
    /// Unchanged lines shown around each change
    pub context: usize,
    /// Compare a missing file as if it were empty
    pub new_file: bool,
    pub limits: ReadLimits,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self::new(DEFAULT_CONTEXT, false, ReadLimits::default())
    }
}

impl Session {
    /// Prints a unified diff of `old` against `new`.
    ///
    /// Returns whether the files differ; identical files print nothing.
    pub fn diff(&self, old: &Path, new: &Path, opts: &DiffOptions) -> anyhow::Result<bool> {
        let a = self.load_target(old, opts)?;
        let b = self.load_target(new, opts)?;

        if !a.exists() && !b.exists() {
            anyhow::bail!("{}: No such file", old.display());
        }

        self.print_diff(&a, &b, opts.context)
    }

    fn load_target(&self, file: &Path, opts: &DiffOptions) -> anyhow::Result<DiffTarget> {
        if opts.new_file && !self.workspace().exists(file) {
            return Ok(DiffTarget::from_nothing(file));
        }

        DiffTarget::from_file(file, self.workspace(), &opts.limits)
    }

    fn print_diff(&self, a: &DiffTarget, b: &DiffTarget, context: usize) -> anyhow::Result<bool> {
        let hunks = MyersDiff::new(a.lines(), b.lines()).hunks(context)?;
        debug!(hunks = hunks.len(), "assembled hunks");

        if hunks.is_empty() {
            return Ok(false);
        }

        writeln!(self.writer(), "{}", format!("--- {}", a.label()).bold())?;
        writeln!(self.writer(), "{}", format!("+++ {}", b.label()).bold())?;

        for hunk in &hunks {
            self.print_diff_hunk(hunk)?;
        }

        Ok(true)
    }

    fn print_diff_hunk(&self, hunk: &Hunk) -> anyhow::Result<()> {
        writeln!(self.writer(), "{}", hunk.header().cyan())?;

        for edit in hunk.edits() {
            writeln!(self.writer(), "{}", paint(edit))?;
        }

        Ok(())
    }
}

fn paint(edit: &Edit) -> ColoredString {
    match edit.kind() {
        EditKind::Equal => edit.as_string().normal(),
        EditKind::Delete => edit.as_string().red(),
        EditKind::Insert => edit.as_string().green(),
    }
}
