//! File exports of tabular views: quoted CSV, pretty JSON, and a plain-text
//! report standing in for the PDF download.

mod applications;
mod report;
mod table;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use report::render_report;
pub use table::render_csv;

/// Rendered for every missing optional value.
pub const MISSING_VALUE: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Json,
    /// Plain-text report, also accepted as `pdf`.
    Text,
}

impl ExportFormat {
    pub const fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Text => "txt",
        }
    }

    pub const fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
            ExportFormat::Text => "text/plain",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = UnknownExportFormat;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "txt" | "text" | "pdf" | "report" => Ok(ExportFormat::Text),
            other => Err(UnknownExportFormat(other.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported export format '{0}' (expected csv, json, or txt)")]
pub struct UnknownExportFormat(pub String);

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("export is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),
}

/// A row type that knows its CSV columns and report paragraph.
pub trait Exportable {
    const CSV_HEADER: &'static [&'static str];

    fn csv_fields(&self) -> Vec<String>;

    fn report_heading(&self) -> String;

    fn report_details(&self) -> Vec<(&'static str, String)>;
}

impl<T: Exportable> Exportable for &T {
    const CSV_HEADER: &'static [&'static str] = T::CSV_HEADER;

    fn csv_fields(&self) -> Vec<String> {
        (**self).csv_fields()
    }

    fn report_heading(&self) -> String {
        (**self).report_heading()
    }

    fn report_details(&self) -> Vec<(&'static str, String)> {
        (**self).report_details()
    }
}

/// Downloadable export body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub filename: String,
    pub content_type: &'static str,
    pub body: String,
}

impl ExportArtifact {
    /// Write into `dir`, creating it when missing.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(&self.filename);
        std::fs::write(&path, self.body.as_bytes())?;
        debug!(path = %path.display(), bytes = self.body.len(), "export written");
        Ok(path)
    }

    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename)
    }
}

/// Naming and headings for one family of exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportFormatter {
    pub csv_prefix: &'static str,
    pub json_prefix: &'static str,
    pub report_prefix: &'static str,
    pub report_title: &'static str,
    pub total_label: &'static str,
}

impl ExportFormatter {
    pub const APPLICATIONS: ExportFormatter = ExportFormatter {
        csv_prefix: "applications_",
        json_prefix: "applications_",
        report_prefix: "applications_report_",
        report_title: "Applications Report",
        total_label: "Total Applications",
    };

    pub const MARKET_DEMAND: ExportFormatter = ExportFormatter {
        csv_prefix: "market-demand-skills-",
        json_prefix: "market-demand-insights-",
        report_prefix: "market-demand-report-",
        report_title: "Market Demand Report",
        total_label: "Total Skills",
    };

    pub fn filename(&self, format: ExportFormat, generated_at: DateTime<Utc>) -> String {
        let prefix = match format {
            ExportFormat::Csv => self.csv_prefix,
            ExportFormat::Json => self.json_prefix,
            ExportFormat::Text => self.report_prefix,
        };
        format!(
            "{prefix}{}.{}",
            generated_at.format("%Y-%m-%d"),
            format.extension()
        )
    }

    /// JSON exports serialize the item list itself.
    pub fn export<T>(
        &self,
        items: &[T],
        format: ExportFormat,
        generated_at: DateTime<Utc>,
    ) -> Result<ExportArtifact, ExportError>
    where
        T: Exportable + Serialize,
    {
        match format {
            ExportFormat::Csv => self.csv(items, generated_at),
            ExportFormat::Json => self.json(items, generated_at),
            ExportFormat::Text => Ok(self.report(items, generated_at)),
        }
    }

    pub fn csv<T: Exportable>(
        &self,
        items: &[T],
        generated_at: DateTime<Utc>,
    ) -> Result<ExportArtifact, ExportError> {
        Ok(self.artifact(ExportFormat::Csv, generated_at, render_csv(items)?))
    }

    pub fn json<P: Serialize + ?Sized>(
        &self,
        payload: &P,
        generated_at: DateTime<Utc>,
    ) -> Result<ExportArtifact, ExportError> {
        let body = serde_json::to_string_pretty(payload)?;
        Ok(self.artifact(ExportFormat::Json, generated_at, body))
    }

    pub fn report<T: Exportable>(&self, items: &[T], generated_at: DateTime<Utc>) -> ExportArtifact {
        let body = render_report(self.report_title, self.total_label, items, generated_at);
        self.artifact(ExportFormat::Text, generated_at, body)
    }

    fn artifact(
        &self,
        format: ExportFormat,
        generated_at: DateTime<Utc>,
        body: String,
    ) -> ExportArtifact {
        ExportArtifact {
            filename: self.filename(format, generated_at),
            content_type: format.content_type(),
            body,
        }
    }
}

pub(crate) fn percent(value: Option<impl fmt::Display>) -> String {
    value
        .map(|value| format!("{value}%"))
        .unwrap_or_else(|| MISSING_VALUE.to_string())
}

pub(crate) fn or_missing(value: Option<impl fmt::Display>) -> String {
    value
        .map(|value| value.to_string())
        .unwrap_or_else(|| MISSING_VALUE.to_string())
}
