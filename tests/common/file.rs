use derive_new::new;
use filetime::FileTime;
use std::path::{Path, PathBuf};

/// Fixed modification time stamped on fixture files so headers are predictable
pub const FIXED_MTIME_SECS: i64 = 1_700_000_000;
pub const FIXED_MTIME_NANOS: u32 = 123_456_789;

#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct FileSpec {
    pub path: PathBuf,
    pub content: String,
}

pub fn write_file(file_spec: FileSpec) {
    // make sure the parent directory exists
    if let Some(parent) = file_spec.path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", parent, e));
    }

    std::fs::write(&file_spec.path, &file_spec.content)
        .unwrap_or_else(|e| panic!("Failed to write file {:?}: {}", file_spec.path, e));

    let mtime = FileTime::from_unix_time(FIXED_MTIME_SECS, FIXED_MTIME_NANOS);
    filetime::set_file_mtime(&file_spec.path, mtime)
        .unwrap_or_else(|e| panic!("Failed to set mtime of {:?}: {}", file_spec.path, e));
}

/// Header timestamp of a file written by [`write_file`], in the local timezone
pub fn fixed_timestamp() -> String {
    use chrono::{Local, TimeZone};

    Local
        .timestamp_opt(FIXED_MTIME_SECS, FIXED_MTIME_NANOS)
        .unwrap()
        .format("%Y-%m-%d %H:%M:%S%.9f %z")
        .to_string()
}

/// Writes `lines_count` lines of random words and returns them
pub fn write_generated_lines(path: &Path, lines_count: usize) -> Vec<String> {
    use fake::{Fake, faker::lorem::en::Words};

    let lines = (0..lines_count)
        .map(|n| format!("{n}: {}", Words(3..6).fake::<Vec<String>>().join(" ")))
        .collect::<Vec<_>>();

    write_file(FileSpec::new(path.to_path_buf(), lines.join("\n") + "\n"));

    lines
}
