//! JSON and CSV export
//!
//! Rendering (payload → text) and persisting (text → file) are separate
//! steps. [`ApiResponse`](crate::ApiResponse) composes them in its
//! `to_*` / `save_*` methods.

pub mod csv;
pub mod file;
pub mod json;

use crate::{
    error::{Error, Result},
    response::ApiResponse,
};
use std::{fmt, str::FromStr};

pub use file::{sanitize_file_stem, write_atomic};

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExportFormat {
    /// Pretty-printed JSON, keys in response order
    #[default]
    Json,
    /// Comma-separated values with a header row
    Csv,
}

impl ExportFormat {
    /// File extension without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    /// Render a response in this format.
    pub fn render(&self, response: &ApiResponse) -> Result<String> {
        match self {
            ExportFormat::Json => response.to_json_pretty(),
            ExportFormat::Csv => response.to_csv(),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(Error::InvalidParameter {
                name: "format",
                reason: format!("unsupported export format '{other}' (expected json or csv)"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_parsing() {
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!(" CSV ".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert!(matches!(
            "xlsx".parse::<ExportFormat>(),
            Err(Error::InvalidParameter { name: "format", .. })
        ));
    }

    #[test]
    fn test_render_dispatches() {
        let response = ApiResponse::new(json!([{"a": 1}]));
        assert_eq!(ExportFormat::Csv.render(&response).unwrap(), "a\n1\n");
        assert!(ExportFormat::Json.render(&response).unwrap().contains("\"a\": 1"));
    }
}
