//! Export selected rows as an HTML table

use crate::error::AdminError;
use crate::model::{Row, Section};
use crate::util::escape_html;
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Render rows as a standalone HTML table. Every cell is escaped.
pub fn render_html(section: Section, headers: &[String], rows: &[&Row]) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>");
    html.push_str(&escape_html(Some(section.name())));
    html.push_str("</title></head>\n<body>\n<table>\n<thead><tr><th>ID</th>");
    for header in headers {
        html.push_str("<th>");
        html.push_str(&escape_html(Some(header)));
        html.push_str("</th>");
    }
    html.push_str("<th>Enabled</th></tr></thead>\n<tbody>\n");

    for row in rows {
        html.push_str(&format!("<tr><td>{}</td>", row.id));
        for cell in &row.cells {
            html.push_str("<td>");
            html.push_str(&escape_html(Some(cell)));
            html.push_str("</td>");
        }
        html.push_str(&format!(
            "<td>{}</td></tr>\n",
            if row.enabled { "yes" } else { "no" }
        ));
    }

    html.push_str("</tbody>\n</table>\n</body>\n</html>\n");
    html
}

/// Write the rows to `<dir>/<section>-selection-<timestamp>.html`
pub fn export_rows(
    dir: &Path,
    section: Section,
    headers: &[String],
    rows: &[&Row],
    now: DateTime<Local>,
) -> Result<PathBuf, AdminError> {
    let path = dir.join(format!(
        "{}-selection-{}.html",
        section.slug(),
        now.format("%Y%m%d-%H%M%S")
    ));

    let io_error = |source| AdminError::Export {
        path: path.clone(),
        source,
    };

    fs::create_dir_all(dir).map_err(io_error)?;
    fs::write(&path, render_html(section, headers, rows)).map_err(io_error)?;

    info!(path = %path.display(), rows = rows.len(), "selection exported");
    Ok(path)
}
