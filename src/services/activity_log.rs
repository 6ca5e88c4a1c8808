//! Flat append-only activity log shown on the control panel.
//!
//! One line per terminal action outcome, `timestamp - LEVEL - message`.
//! The file is created at startup and only ever appended to; the viewer
//! reads the most recent lines back in file order. Concurrent writers
//! rely on filesystem append semantics — each line is a single write.

use chrono::Utc;
use std::{
    io::{self, ErrorKind},
    path::{Path, PathBuf},
    sync::Arc,
};
use tokio::{fs, io::AsyncWriteExt};

/// Number of lines `/get_logs` returns.
pub const TAIL_LINES: usize = 20;

/// Sentinel returned when the log file does not exist yet.
pub const NOT_FOUND_SENTINEL: &str = "Log file not found.";

/// Handle to the activity-log file, injected into every component that
/// reports outcomes. Cloning shares the same underlying path.
#[derive(Clone, Debug)]
pub struct ActivityLog {
    path: Arc<PathBuf>,
}

impl ActivityLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the log file (and its parent directory) if absent.
    pub async fn ensure_exists(&self) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.path.as_ref())
            .await?;
        Ok(())
    }

    /// Record a successful outcome.
    pub async fn info(&self, message: &str) {
        tracing::info!("{message}");
        self.append("INFO", message).await;
    }

    /// Record a failed outcome.
    pub async fn error(&self, message: &str) {
        tracing::error!("{message}");
        self.append("ERROR", message).await;
    }

    /// Append one formatted line. A failed append must not fail the action
    /// that produced the message, so errors are only reported via tracing.
    async fn append(&self, level: &str, message: &str) {
        let line = format!(
            "{} - {} - {}\n",
            Utc::now().format("%Y-%m-%d %H:%M:%S"),
            level,
            message
        );

        let result = async {
            let mut file = fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(self.path.as_ref())
                .await?;
            file.write_all(line.as_bytes()).await?;
            file.flush().await
        }
        .await;

        if let Err(err) = result {
            tracing::warn!("failed to append to activity log {}: {}", self.path.display(), err);
        }
    }

    /// Return the last [`TAIL_LINES`] lines in file order, or `None` when
    /// the file does not exist.
    pub async fn tail(&self) -> io::Result<Option<String>> {
        let contents = match fs::read_to_string(self.path.as_ref()).await {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err),
        };

        let lines: Vec<&str> = contents.lines().collect();
        let start = lines.len().saturating_sub(TAIL_LINES);
        Ok(Some(lines[start..].join("\n")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_in(dir: &tempfile::TempDir) -> ActivityLog {
        ActivityLog::new(dir.path().join("activity.txt"))
    }

    #[tokio::test]
    async fn tail_of_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(log_in(&dir).tail().await.unwrap(), None);
    }

    #[tokio::test]
    async fn tail_returns_last_twenty_lines_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let log = log_in(&dir);
        for i in 0..25 {
            log.append("INFO", &format!("line {i}")).await;
        }

        let tail = log.tail().await.unwrap().unwrap();
        let lines: Vec<&str> = tail.lines().collect();
        assert_eq!(lines.len(), TAIL_LINES);
        assert!(lines[0].ends_with("line 5"));
        assert!(lines[19].ends_with("line 24"));
    }

    #[tokio::test]
    async fn lines_carry_timestamp_level_and_message() {
        let dir = tempfile::tempdir().unwrap();
        let log = log_in(&dir);
        log.error("something failed").await;

        let tail = log.tail().await.unwrap().unwrap();
        let mut parts = tail.splitn(3, " - ");
        let timestamp = parts.next().unwrap();
        assert_eq!(parts.next(), Some("ERROR"));
        assert_eq!(parts.next(), Some("something failed"));
        assert!(timestamp.contains(':'));
    }

    #[tokio::test]
    async fn ensure_exists_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let log = ActivityLog::new(dir.path().join("logs/nested/activity.txt"));
        log.ensure_exists().await.unwrap();
        assert_eq!(log.tail().await.unwrap(), Some(String::new()));
    }
}
