//! Row sources
//!
//! Rows are produced by something outside this program. `FileRowSource`
//! reads `<section>.csv` or `<section>.json` from a directory; `DemoRowSource`
//! generates plausible rows so the screen is usable without any data.

use crate::error::AdminError;
use crate::model::{Row, RowId, RowSet, Section};
use chrono::{Duration, Local};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Provides the rows of one section
pub trait RowSource {
    fn load(&self, section: Section) -> Result<RowSet, AdminError>;

    /// Short description for the status line
    fn describe(&self) -> String;
}

/// Parse a row identifier from its text form
pub fn parse_row_id(value: &str) -> Result<RowId, AdminError> {
    value
        .trim()
        .parse::<RowId>()
        .map_err(|_| AdminError::InvalidRowId {
            value: value.to_string(),
        })
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "false" | "0" | "no" | "off"
    )
}

// ═══════════════════════════════════════════════════════════════════════════════
// File Source
// ═══════════════════════════════════════════════════════════════════════════════

pub struct FileRowSource {
    dir: PathBuf,
}

impl FileRowSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl RowSource for FileRowSource {
    fn load(&self, section: Section) -> Result<RowSet, AdminError> {
        let csv_path = self.dir.join(format!("{}.csv", section.slug()));
        let json_path = self.dir.join(format!("{}.json", section.slug()));

        let rows = if csv_path.exists() {
            load_csv(&csv_path)?
        } else {
            load_json(&json_path)?
        };

        info!(section = section.slug(), rows = rows.len(), "rows loaded");
        Ok(rows)
    }

    fn describe(&self) -> String {
        self.dir.display().to_string()
    }
}

/// Load a CSV file whose header row has an `id` column.
///
/// An optional `enabled` column is read as a flag; every other column is
/// displayed.
pub fn load_csv(path: &Path) -> Result<RowSet, AdminError> {
    let format_error = |e: csv::Error| AdminError::RowFormat {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let file = fs::File::open(path).map_err(|source| AdminError::RowIo {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    let header_record = reader.headers().map_err(format_error)?.clone();
    let id_col = header_record
        .iter()
        .position(|h| h.eq_ignore_ascii_case("id"))
        .ok_or_else(|| AdminError::RowFormat {
            path: path.to_path_buf(),
            message: "missing id column".to_string(),
        })?;
    let enabled_col = header_record
        .iter()
        .position(|h| h.eq_ignore_ascii_case("enabled"));

    let is_display_col = |i: usize| i != id_col && Some(i) != enabled_col;

    let headers: Vec<String> = header_record
        .iter()
        .enumerate()
        .filter(|(i, _)| is_display_col(*i))
        .map(|(_, h)| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(format_error)?;
        let id = parse_row_id(record.get(id_col).unwrap_or(""))?;
        let enabled = enabled_col
            .and_then(|c| record.get(c))
            .map(parse_flag)
            .unwrap_or(true);
        let cells = record
            .iter()
            .enumerate()
            .filter(|(i, _)| is_display_col(*i))
            .map(|(_, v)| v.to_string())
            .collect();
        rows.push(Row { id, cells, enabled });
    }

    check_unique_ids(path, &rows)?;
    Ok(RowSet::new(headers, rows))
}

/// Load a JSON file of the form `{"headers": [...], "rows": [{"id": 1, "cells": [...]}]}`
pub fn load_json(path: &Path) -> Result<RowSet, AdminError> {
    let contents = fs::read_to_string(path).map_err(|source| AdminError::RowIo {
        path: path.to_path_buf(),
        source,
    })?;

    let rows: RowSet = serde_json::from_str(&contents).map_err(|e| AdminError::RowFormat {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    check_unique_ids(path, &rows.rows)?;
    Ok(rows)
}

fn check_unique_ids(path: &Path, rows: &[Row]) -> Result<(), AdminError> {
    let mut seen = HashSet::new();
    for row in rows {
        if !seen.insert(row.id) {
            return Err(AdminError::RowFormat {
                path: path.to_path_buf(),
                message: format!("duplicate id {}", row.id),
            });
        }
    }
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════════
// Demo Source
// ═══════════════════════════════════════════════════════════════════════════════

const LOGIN_STATUSES: [&str; 5] = [
    "Not logged in",
    "Logged in",
    "Wrong password",
    "Needs 2FA",
    "Needs phone",
];

/// Generated rows, `count` per section
pub struct DemoRowSource {
    count: usize,
}

impl Default for DemoRowSource {
    fn default() -> Self {
        Self::new(57)
    }
}

impl DemoRowSource {
    pub fn new(count: usize) -> Self {
        Self { count }
    }
}

impl RowSource for DemoRowSource {
    fn load(&self, section: Section) -> Result<RowSet, AdminError> {
        let now = Local::now();
        let headers: Vec<String> = match section {
            Section::Accounts => vec!["Account", "Backup Email", "Login Status", "Created"],
            Section::LoginLogs => vec!["Account", "Result", "Message", "Time"],
            Section::Phones => vec!["Number", "Country", "Bound Account"],
            Section::BrowserEnvs => vec!["Env ID", "Name", "Proxy"],
            Section::Nodes => vec!["Name", "Host", "Port"],
            Section::Channels => vec!["Account", "Channel URL", "Status"],
        }
        .into_iter()
        .map(String::from)
        .collect();

        let rows = (1..=self.count)
            .map(|n| {
                let account = format!("user{:03}@gmail.com", n);
                let time = (now - Duration::hours(n as i64))
                    .format("%Y-%m-%d %H:%M")
                    .to_string();
                let cells = match section {
                    Section::Accounts => vec![
                        account,
                        format!("backup{:03}@outlook.com", n),
                        LOGIN_STATUSES[n % LOGIN_STATUSES.len()].to_string(),
                        time,
                    ],
                    Section::LoginLogs => vec![
                        account,
                        if n % 3 == 0 { "failed" } else { "success" }.to_string(),
                        LOGIN_STATUSES[n % LOGIN_STATUSES.len()].to_string(),
                        time,
                    ],
                    Section::Phones => vec![
                        format!("+1 555 01{:02}", n % 100),
                        "US".to_string(),
                        if n % 2 == 0 { account } else { String::new() },
                    ],
                    Section::BrowserEnvs => vec![
                        format!("env-{:05}", 10_000 + n),
                        format!("Profile {}", n),
                        format!("socks5://10.0.{}.{}:1080", n / 250, n % 250),
                    ],
                    Section::Nodes => vec![
                        format!("node-{:02}", n),
                        format!("10.1.{}.{}", n / 250, n % 250),
                        (20_000 + n).to_string(),
                    ],
                    Section::Channels => vec![
                        account,
                        format!("https://youtube.com/channel/UC{:08}", n),
                        if n % 4 == 0 { "Not created" } else { "Created" }.to_string(),
                    ],
                };
                Row {
                    id: n as RowId,
                    cells,
                    enabled: n % 5 != 0,
                }
            })
            .collect();

        debug!(section = section.slug(), rows = self.count, "demo rows generated");
        Ok(RowSet::new(headers, rows))
    }

    fn describe(&self) -> String {
        "demo data".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_row_id() {
        assert_eq!(parse_row_id("42").unwrap(), 42);
        assert_eq!(parse_row_id(" 7 ").unwrap(), 7);
        assert!(matches!(
            parse_row_id("x1"),
            Err(AdminError::InvalidRowId { .. })
        ));
    }

    #[test]
    fn test_load_csv_with_id_and_enabled() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("accounts.csv"),
            "id,account,enabled,status\n1,a@example.com,true,ok\n2,b@example.com,0,locked\n",
        )
        .unwrap();

        let rows = FileRowSource::new(dir.path()).load(Section::Accounts).unwrap();
        assert_eq!(rows.headers, vec!["account", "status"]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows.rows[0].cells, vec!["a@example.com", "ok"]);
        assert!(rows.rows[0].enabled);
        assert!(!rows.rows[1].enabled);
    }

    #[test]
    fn test_load_csv_requires_id_column() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("phones.csv");
        fs::write(&path, "number\n555\n").unwrap();
        assert!(matches!(
            load_csv(&path),
            Err(AdminError::RowFormat { .. })
        ));
    }

    #[test]
    fn test_load_csv_rejects_duplicate_ids() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nodes.csv");
        fs::write(&path, "id,name\n1,a\n1,b\n").unwrap();
        let err = load_csv(&path).unwrap_err();
        assert!(err.to_string().contains("duplicate id 1"));
    }

    #[test]
    fn test_load_json() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("nodes.json"),
            r#"{"headers": ["Name"], "rows": [{"id": 3, "cells": ["node-a"]}, {"id": 4, "cells": ["node-b"], "enabled": false}]}"#,
        )
        .unwrap();

        let rows = FileRowSource::new(dir.path()).load(Section::Nodes).unwrap();
        assert_eq!(rows.headers, vec!["Name"]);
        assert_eq!(rows.rows[0].id, 3);
        assert!(rows.rows[0].enabled);
        assert!(!rows.rows[1].enabled);
    }

    #[test]
    fn test_load_json_with_notices() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("phones.json"),
            r#"{"headers": ["Number"], "rows": [{"id": 1, "cells": ["+1 555"]}],
                "notices": [{"message": "1 number expired", "severity": "warning"}, {"message": "ok"}]}"#,
        )
        .unwrap();

        let rows = FileRowSource::new(dir.path()).load(Section::Phones).unwrap();
        assert_eq!(rows.notices.len(), 2);
        assert_eq!(rows.notices[0].severity, "warning");
        assert_eq!(rows.notices[1].severity, "");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let result = FileRowSource::new(dir.path()).load(Section::Channels);
        assert!(matches!(result, Err(AdminError::RowIo { .. })));
    }

    #[test]
    fn test_demo_source_shapes_rows() {
        let source = DemoRowSource::new(12);
        for section in [
            Section::Accounts,
            Section::LoginLogs,
            Section::Phones,
            Section::BrowserEnvs,
            Section::Nodes,
            Section::Channels,
        ] {
            let rows = source.load(section).unwrap();
            assert_eq!(rows.len(), 12);
            assert!(rows.rows.iter().all(|r| r.cells.len() == rows.headers.len()));
        }
    }
}
