use anyhow::Context;
use chrono::{DateTime, Local};
use derive_new::new;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_MAX_LINES: usize = 100_000;
pub const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// Upper bounds on what the workspace will load for diffing
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct ReadLimits {
    pub max_lines: usize,
    pub max_bytes: u64,
}

impl Default for ReadLimits {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LINES, DEFAULT_MAX_BYTES)
    }
}

pub type LineSet = Vec<String>;

/// Directory that relative paths given on the command line are resolved against
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn resolve(&self, file_path: &Path) -> PathBuf {
        self.path.join(file_path)
    }

    pub fn exists(&self, file_path: &Path) -> bool {
        self.resolve(file_path).exists()
    }

    pub fn read_file(&self, file_path: &Path, limits: &ReadLimits) -> anyhow::Result<String> {
        let full_path = self.resolve(file_path);

        if !full_path.exists() {
            anyhow::bail!("{}: No such file", file_path.display());
        }
        if full_path.is_dir() {
            anyhow::bail!("{}: Is a directory", file_path.display());
        }

        let size = std::fs::metadata(&full_path)
            .with_context(|| format!("failed to stat {}", file_path.display()))?
            .len();
        if size > limits.max_bytes {
            anyhow::bail!(
                "{}: file is {} bytes, larger than the {} byte limit",
                file_path.display(),
                size,
                limits.max_bytes
            );
        }

        let bytes = std::fs::read(&full_path)
            .with_context(|| format!("failed to read {}", file_path.display()))?;
        if bytes.contains(&0) {
            anyhow::bail!("{}: binary file, refusing to diff", file_path.display());
        }

        String::from_utf8(bytes)
            .with_context(|| format!("{}: binary file, refusing to diff", file_path.display()))
    }

    pub fn read_lines(&self, file_path: &Path, limits: &ReadLimits) -> anyhow::Result<LineSet> {
        let content = self.read_file(file_path, limits)?;
        let lines = content.lines().map(|s| s.to_string()).collect::<LineSet>();

        if lines.len() > limits.max_lines {
            anyhow::bail!(
                "{}: file has {} lines, more than the {} line limit",
                file_path.display(),
                lines.len(),
                limits.max_lines
            );
        }

        debug!(file = %file_path.display(), lines = lines.len(), "loaded file");
        Ok(lines)
    }

    pub fn stat_file(&self, file_path: &Path) -> anyhow::Result<DateTime<Local>> {
        let modified = std::fs::metadata(self.resolve(file_path))
            .and_then(|metadata| metadata.modified())
            .with_context(|| format!("failed to stat {}", file_path.display()))?;

        Ok(modified.into())
    }
}
