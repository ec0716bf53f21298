//! Append-only submission log
//!
//! Each entry is written as a single JSON line and flushed immediately.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{NixciError, NixciResult};

use super::entry::SubmissionEntry;

/// Handles writing submission entries to the log file
pub struct SubmissionLog {
    /// Path to the log file
    log_path: PathBuf,
}

impl SubmissionLog {
    /// Create a new SubmissionLog that writes to the specified path
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append an entry as a JSON line, creating the file and its parent
    /// directory on first use
    pub fn log(&self, entry: &SubmissionEntry) -> NixciResult<()> {
        if let Some(parent) = self.log_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| NixciError::Io(format!("Failed to create log directory: {}", e)))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| NixciError::Io(format!("Failed to open submission log: {}", e)))?;

        let json = serde_json::to_string(entry)
            .map_err(|e| NixciError::Json(format!("Failed to serialize submission: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| NixciError::Io(format!("Failed to write submission: {}", e)))?;

        file.flush()
            .map_err(|e| NixciError::Io(format!("Failed to flush submission log: {}", e)))?;

        Ok(())
    }

    /// Read all entries, oldest first
    pub fn read_all(&self) -> NixciResult<Vec<SubmissionEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| NixciError::Io(format!("Failed to open submission log: {}", e)))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                NixciError::Io(format!(
                    "Failed to read submission log line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: SubmissionEntry = serde_json::from_str(&line).map_err(|e| {
                NixciError::Json(format!(
                    "Failed to parse submission at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            entries.push(entry);
        }

        Ok(entries)
    }

    /// Read the most recent N entries
    pub fn read_recent(&self, count: usize) -> NixciResult<Vec<SubmissionEntry>> {
        let all_entries = self.read_all()?;
        let start = all_entries.len().saturating_sub(count);
        Ok(all_entries[start..].to_vec())
    }

    /// Number of non-blank lines in the log
    pub fn entry_count(&self) -> NixciResult<usize> {
        if !self.log_path.exists() {
            return Ok(0);
        }

        let file = File::open(&self.log_path)
            .map_err(|e| NixciError::Io(format!("Failed to open submission log: {}", e)))?;

        let count = BufReader::new(file)
            .lines()
            .map_while(Result::ok)
            .filter(|l| !l.trim().is_empty())
            .count();

        Ok(count)
    }

    pub fn exists(&self) -> bool {
        self.log_path.exists()
    }

    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Field, RegistrationDraft};
    use tempfile::TempDir;

    fn create_test_log() -> (SubmissionLog, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let log = SubmissionLog::new(temp_dir.path().join("data").join("submissions.log"));
        (log, temp_dir)
    }

    fn create_test_entry(email: &str) -> SubmissionEntry {
        let mut draft = RegistrationDraft::default();
        draft.set(Field::Email, email.into()).unwrap();
        draft.set(Field::Password, "Abcdef1!".into()).unwrap();
        SubmissionEntry::from_draft(&draft).unwrap()
    }

    #[test]
    fn test_log_and_read() {
        let (log, _temp) = create_test_log();
        let entry = create_test_entry("a@b.co");

        log.log(&entry).unwrap();

        let entries = log.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, entry.id);
        assert_eq!(entries[0].email, "a@b.co");
    }

    #[test]
    fn test_password_never_written() {
        let (log, _temp) = create_test_log();
        log.log(&create_test_entry("a@b.co")).unwrap();

        let raw = std::fs::read_to_string(log.path()).unwrap();
        assert!(!raw.contains("Abcdef1!"));
    }

    #[test]
    fn test_read_recent() {
        let (log, _temp) = create_test_log();
        for i in 0..5 {
            log.log(&create_test_entry(&format!("user{}@example.com", i)))
                .unwrap();
        }

        assert_eq!(log.entry_count().unwrap(), 5);

        let recent = log.read_recent(2).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].email, "user3@example.com");
        assert_eq!(recent[1].email, "user4@example.com");
    }

    #[test]
    fn test_empty_log() {
        let (log, _temp) = create_test_log();

        assert!(!log.exists());
        assert_eq!(log.entry_count().unwrap(), 0);
        assert!(log.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_blank_lines_skipped_and_bad_lines_reported() {
        let (log, _temp) = create_test_log();
        log.log(&create_test_entry("a@b.co")).unwrap();

        let mut file = OpenOptions::new().append(true).open(log.path()).unwrap();
        writeln!(file).unwrap();
        assert_eq!(log.read_all().unwrap().len(), 1);

        writeln!(file, "{{not json").unwrap();
        let err = log.read_all().unwrap_err();
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_survives_restart() {
        let (log, _temp) = create_test_log();
        log.log(&create_test_entry("a@b.co")).unwrap();

        let reopened = SubmissionLog::new(log.path().clone());
        assert_eq!(reopened.read_all().unwrap().len(), 1);
    }
}
