use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::model::metrics::AnalysisReport;

pub mod json;
pub mod text;

#[derive(Debug, Clone)]
pub struct ReportMeta {
    pub tool_name: String,
    pub tool_version: String,
    pub input: String,
}

impl ReportMeta {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            tool_name: env!("CARGO_PKG_NAME").to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            input: input.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct WrittenReports {
    pub summary: PathBuf,
    pub text: PathBuf,
}

/// Writes `summary.json` and `report.txt` into `out_dir`, creating it.
pub fn write_reports(
    report: &AnalysisReport,
    meta: &ReportMeta,
    out_dir: &Path,
) -> std::io::Result<WrittenReports> {
    fs::create_dir_all(out_dir)?;

    let summary = out_dir.join("summary.json");
    let json = json::render_summary_json(report, meta).map_err(std::io::Error::other)?;
    write_text(&summary, &json)?;

    let text = out_dir.join("report.txt");
    write_text(&text, &text::render_report_text(report, meta))?;

    Ok(WrittenReports { summary, text })
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    if !contents.ends_with('\n') {
        w.write_all(b"\n")?;
    }
    w.flush()
}

pub fn format_f64_2(v: f64) -> String {
    format!("{:.2}", v)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
