use crate::areas::workspace::{LineSet, ReadLimits, Workspace};
use chrono::{DateTime, Local};
use derive_new::new;
use std::path::{Path, PathBuf};

const NULL_PATH: &str = "/dev/null";
const NULL_TIMESTAMP: &str = "1970-01-01 00:00:00.000000000 +0000";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.9f %z";

/// One side of a file comparison
#[derive(Debug, Clone, new)]
pub struct DiffTarget {
    pub(crate) file: PathBuf,
    pub(crate) modified: Option<DateTime<Local>>,
    pub(crate) data: LineSet,
}

impl DiffTarget {
    pub fn from_file(
        file: &Path,
        workspace: &Workspace,
        limits: &ReadLimits,
    ) -> anyhow::Result<Self> {
        let data = workspace.read_lines(file, limits)?;
        let modified = workspace.stat_file(file)?;

        Ok(Self {
            file: file.to_path_buf(),
            modified: Some(modified),
            data,
        })
    }

    /// Stand-in for a file that does not exist, compared as empty
    pub fn from_nothing(file: &Path) -> Self {
        Self {
            file: file.to_path_buf(),
            modified: None,
            data: Vec::new(),
        }
    }

    pub fn exists(&self) -> bool {
        self.modified.is_some()
    }

    pub fn lines(&self) -> &[String] {
        &self.data
    }

    pub fn diff_path(&self) -> PathBuf {
        if self.exists() {
            self.file.clone()
        } else {
            Path::new(NULL_PATH).to_path_buf()
        }
    }

    pub fn timestamp(&self) -> String {
        match self.modified {
            Some(modified) => modified.format(TIMESTAMP_FORMAT).to_string(),
            None => NULL_TIMESTAMP.to_string(),
        }
    }

    /// `--- path<TAB>timestamp` style label used in the diff header
    pub fn label(&self) -> String {
        format!("{}\t{}", self.diff_path().display(), self.timestamp())
    }
}
