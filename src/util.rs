use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};

#[derive(Debug, Clone, Copy)]
pub struct RunClock {
    started: DateTime<Utc>,
}

impl RunClock {
    pub fn start() -> Self {
        Self::at(Utc::now())
    }

    fn at(started: DateTime<Utc>) -> Self {
        Self { started }
    }

    pub fn run_id(&self) -> String {
        format!("run-{}", self.compact())
    }

    pub fn report_file_name(&self) -> String {
        format!("report-{}.json", self.compact())
    }

    pub fn started_at(&self) -> String {
        self.started.to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    fn compact(&self) -> String {
        self.started.format("%Y%m%dT%H%M%SZ").to_string()
    }
}

pub fn sha256_bytes(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}

pub fn render_json_pretty<T: Serialize>(value: &T) -> Result<String> {
    let mut rendered = serde_json::to_string_pretty(value).context("failed to serialize json")?;
    rendered.push('\n');
    Ok(rendered)
}

pub fn write_json_pretty<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let rendered = render_json_pretty(value)?;

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, rendered).with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn run_clock_names_run_and_report_from_one_instant() {
        let clock = RunClock::at(Utc.with_ymd_and_hms(2026, 3, 7, 9, 5, 1).unwrap());

        assert_eq!(clock.run_id(), "run-20260307T090501Z");
        assert_eq!(clock.report_file_name(), "report-20260307T090501Z.json");
        assert_eq!(clock.started_at(), "2026-03-07T09:05:01Z");
    }

    #[test]
    fn sha256_of_empty_input_is_known_digest() {
        assert_eq!(
            sha256_bytes(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn write_json_pretty_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.json");

        write_json_pretty(&path, &serde_json::json!({"sections": 2})).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.ends_with("}\n"));
        assert!(written.contains("\"sections\": 2"));
    }
}
