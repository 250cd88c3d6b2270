//! Logical API requests

use crate::error::{Error, Result};
use std::fmt;

/// One logical GET request: an endpoint path plus optional query parameters.
///
/// The path is relative to the transport's base URL and must start with `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    path: String,
    query: Vec<(String, String)>,
}

impl ApiRequest {
    /// Create a request for `path`. A missing leading `/` is added.
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let path = if path.starts_with('/') {
            path
        } else {
            format!("/{path}")
        };

        Self {
            path,
            query: Vec::new(),
        }
    }

    /// Append a query parameter. Values are percent-encoded by the transport.
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// The endpoint path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query parameters in insertion order.
    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }
}

impl fmt::Display for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        for (i, (key, value)) in self.query.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{sep}{key}={value}")?;
        }
        Ok(())
    }
}

/// Validate a string path parameter (language, country code, standings type, ...).
///
/// Only ASCII alphanumerics, `-`, `_` and `.` are accepted, and `.`/`..` are
/// rejected, so the value can never change which endpoint is addressed.
pub fn segment<'a>(name: &'static str, value: &'a str) -> Result<&'a str> {
    if value.is_empty() {
        return Err(Error::InvalidParameter {
            name,
            reason: "must not be empty".to_string(),
        });
    }

    if value == "." || value == ".." {
        return Err(Error::InvalidParameter {
            name,
            reason: format!("'{value}' is not a valid path segment"),
        });
    }

    if let Some(bad) = value
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
    {
        return Err(Error::InvalidParameter {
            name,
            reason: format!("unexpected character {bad:?} in '{value}'"),
        });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_slash_is_added() {
        assert_eq!(ApiRequest::new("api/v1/event/1").path(), "/api/v1/event/1");
        assert_eq!(ApiRequest::new("/api/v1/event/1").path(), "/api/v1/event/1");
    }

    #[test]
    fn test_display_includes_query() {
        let request = ApiRequest::new("/api/v1/search")
            .query("q", "arsenal")
            .query("page", 2);
        assert_eq!(request.to_string(), "/api/v1/search?q=arsenal&page=2");
    }

    #[test]
    fn test_segment_accepts_codes() {
        assert_eq!(segment("language", "en").unwrap(), "en");
        assert_eq!(segment("country_code", "GB").unwrap(), "GB");
        assert_eq!(segment("type", "total").unwrap(), "total");
        assert_eq!(segment("entity_type", "unique-tournament").unwrap(), "unique-tournament");
    }

    #[test]
    fn test_segment_rejects_path_tricks() {
        for bad in ["", "..", ".", "en/../../admin", "a b", "x?y=1", "é"] {
            let err = segment("language", bad).unwrap_err();
            assert!(
                matches!(err, Error::InvalidParameter { name: "language", .. }),
                "{bad:?} should be rejected"
            );
        }
    }
}
