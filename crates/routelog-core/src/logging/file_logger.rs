//! File sink: plain records appended to an existing file
//!
//! The sink never creates its target. A path that does not already name a
//! regular file is refused, so a typo cannot scatter log files around.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::record::Record;
use crate::error::{LogError, LogResult};

/// Append-mode handle on an attached log file
///
/// Each sink owns its own handle, even when two sinks point at the same path.
/// The handle is closed when the sink is dropped.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: File,
}

impl FileSink {
    /// Open `path` for appending
    ///
    /// Fails with [`LogError::NoFilePath`] for an empty path,
    /// [`LogError::FileNotFound`] when the path is not an existing file and
    /// [`LogError::Io`] when the open itself fails.
    pub fn open(path: impl AsRef<Path>) -> LogResult<Self> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(LogError::NoFilePath);
        }
        if !path.is_file() {
            return Err(LogError::FileNotFound(path.to_path_buf()));
        }

        // No `create`: the file must still exist at open time
        let file = OpenOptions::new()
            .append(true)
            .open(path)
            .map_err(|e| LogError::io(path, e))?;

        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    /// Path this sink appends to
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Render a record as a plain line, without the trailing newline
    pub fn render(record: &Record<'_>) -> String {
        format!(
            "[{}] [{}] [{}] [{}] - {}",
            record.timestamp_str(),
            record.severity.header(),
            record.name,
            record.count,
            record.message
        )
    }

    /// Append a record and flush it to the OS
    pub fn write(&mut self, record: &Record<'_>) -> LogResult<()> {
        let line = Self::render(record);
        writeln!(self.file, "{}", line).map_err(|e| LogError::io(&self.path, e))?;
        self.file.flush().map_err(|e| LogError::io(&self.path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Severity;
    use std::fs;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_open_existing_file() {
        let tmp = NamedTempFile::new().unwrap();
        let sink = FileSink::open(tmp.path()).unwrap();
        assert_eq!(sink.path(), tmp.path());
    }

    #[test]
    fn test_open_missing_file_is_refused() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.log");

        let err = FileSink::open(&missing).unwrap_err();
        assert!(matches!(err, LogError::FileNotFound(_)));
        assert!(!missing.exists(), "sink must not create the file");
    }

    #[test]
    fn test_open_directory_is_refused() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            FileSink::open(dir.path()),
            Err(LogError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_open_empty_path() {
        assert!(matches!(FileSink::open(""), Err(LogError::NoFilePath)));
    }

    #[test]
    fn test_render_has_no_escape_codes() {
        let record = Record::now(Severity::Error, "Admin Log", 3, "boom");
        let line = FileSink::render(&record);
        assert!(!line.contains('\x1b'));
        assert!(line.ends_with("] [ERROR] [Admin Log] [3] - boom"));
    }

    #[test]
    fn test_write_appends() {
        let tmp = NamedTempFile::new().unwrap();
        fs::write(tmp.path(), "existing line\n").unwrap();

        let mut sink = FileSink::open(tmp.path()).unwrap();
        sink.write(&Record::now(Severity::Critical, "app", 0, "one")).unwrap();
        sink.write(&Record::now(Severity::Ok, "app", 1, "two")).unwrap();

        let content = fs::read_to_string(tmp.path()).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "existing line");
        assert!(lines[1].ends_with("[CRITICAL] [app] [0] - one"));
        assert!(lines[2].ends_with("[OK] [app] [1] - two"));
    }

    #[test]
    fn test_two_sinks_same_path() {
        let tmp = NamedTempFile::new().unwrap();
        let mut a = FileSink::open(tmp.path()).unwrap();
        let mut b = FileSink::open(tmp.path()).unwrap();

        a.write(&Record::now(Severity::Info, "a", 0, "from a")).unwrap();
        b.write(&Record::now(Severity::Info, "b", 0, "from b")).unwrap();

        let content = fs::read_to_string(tmp.path()).unwrap();
        assert_eq!(content.lines().count(), 2);
    }

    #[cfg(unix)]
    #[test]
    fn test_open_read_only_file_is_io_error() {
        let tmp = NamedTempFile::new().unwrap();
        let mut perms = fs::metadata(tmp.path()).unwrap().permissions();
        perms.set_readonly(true);
        fs::set_permissions(tmp.path(), perms).unwrap();

        // Root ignores file permissions
        if fs::OpenOptions::new().append(true).open(tmp.path()).is_ok() {
            return;
        }

        let err = FileSink::open(tmp.path()).unwrap_err();
        assert!(matches!(err, LogError::Io { .. }));
        assert!(err.to_string().contains(&tmp.path().display().to_string()));
    }
}
