use crate::models::EmployeeRecord;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_FILE: &str = "employee_data.json";

/// JSON snapshot of the whole employee list.
#[derive(Debug, Clone)]
pub struct DataFile {
    path: PathBuf,
}

impl DataFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DataFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every record from disk.
    ///
    /// A missing or unreadable file yields an empty list. This is the
    /// store's fail-soft policy: the failure is logged, never returned.
    pub fn load_all(&self) -> Vec<EmployeeRecord> {
        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "no data file yet, starting empty");
            return Vec::new();
        }
        let parsed = fs::read_to_string(&self.path)
            .context("reading data file")
            .and_then(|s| serde_json::from_str::<Vec<EmployeeRecord>>(&s).context("parsing data file"));
        match parsed {
            Ok(records) => records,
            Err(e) => {
                let reason = format!("{e:#}");
                tracing::warn!(path = %self.path.display(), error = %reason, "ignoring unreadable data file");
                Vec::new()
            }
        }
    }

    /// Overwrites the snapshot with `records`.
    ///
    /// The JSON goes to a sibling `.tmp` file first and is renamed over the
    /// target, so an interrupted write leaves the previous snapshot intact.
    pub fn save_all(&self, records: &[EmployeeRecord]) -> Result<()> {
        let s = serde_json::to_string_pretty(records).context("encoding employee records")?;
        let tmp = self.tmp_path();
        fs::write(&tmp, s).with_context(|| format!("writing {}", tmp.display()))?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e).with_context(|| format!("replacing {}", self.path.display()));
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
