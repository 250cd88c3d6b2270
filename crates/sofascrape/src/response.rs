//! Response wrapper
//!
//! [`ApiResponse`] owns the decoded JSON payload of one API call and offers
//! the same operations regardless of its shape: indexed access, length,
//! iteration and export.
//!
//! # Example
//!
//! ```rust
//! use sofascrape::{ApiResponse, Key};
//! use serde_json::json;
//!
//! let response = ApiResponse::new(json!([{"a": 1, "b": 2}, {"a": 3}]));
//!
//! assert_eq!(response.len().unwrap(), 2);
//! assert_eq!(response.get(0).unwrap()["a"], 1);
//! assert_eq!(response.to_csv().unwrap(), "a,b\n1,2\n3,\n");
//! # let _ = Key::from("events");
//! ```

use crate::{
    error::{Error, Result},
    export::{self, ExportFormat},
    observability,
};
use serde_json::Value;
use std::{
    borrow::Cow,
    fmt,
    path::{Path, PathBuf},
};

/// Index into a payload: a key for objects or a position for arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key<'a> {
    /// Object key
    Name(&'a str),
    /// Array position
    Position(usize),
}

impl<'a> From<&'a str> for Key<'a> {
    fn from(name: &'a str) -> Self {
        Key::Name(name)
    }
}

impl<'a> From<&'a String> for Key<'a> {
    fn from(name: &'a String) -> Self {
        Key::Name(name.as_str())
    }
}

impl From<usize> for Key<'_> {
    fn from(position: usize) -> Self {
        Key::Position(position)
    }
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Name(name) => write!(f, "{name:?}"),
            Key::Position(position) => write!(f, "{position}"),
        }
    }
}

/// Decoded payload of a single API call.
///
/// The payload is immutable; every export recomputes from it. Responses
/// returned by the resource methods also remember which endpoint produced
/// them, which names the file written by
/// [`save_as_endpoint`](Self::save_as_endpoint).
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    payload: Value,
    endpoint: Option<Cow<'static, str>>,
}

impl ApiResponse {
    /// Wrap a payload.
    pub fn new(payload: Value) -> Self {
        Self {
            payload,
            endpoint: None,
        }
    }

    /// Tag the response with the endpoint that produced it.
    pub fn with_endpoint(mut self, endpoint: impl Into<Cow<'static, str>>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Endpoint name such as `events_lineups`, if known.
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    /// The payload, unchanged.
    pub fn data(&self) -> &Value {
        &self.payload
    }

    /// Take the payload back.
    pub fn into_data(self) -> Value {
        self.payload
    }

    /// Index the payload by object key or array position.
    ///
    /// # Errors
    ///
    /// - [`Error::KeyNotFound`] for a missing object key
    /// - [`Error::IndexOutOfRange`] for a position past the end of an array
    /// - [`Error::NotIndexable`] when the key kind does not fit the payload,
    ///   or the payload is a scalar
    pub fn get<'k>(&self, key: impl Into<Key<'k>>) -> Result<&Value> {
        match (&self.payload, key.into()) {
            (Value::Object(map), Key::Name(name)) => map
                .get(name)
                .ok_or_else(|| Error::KeyNotFound(name.to_string())),
            (Value::Array(items), Key::Position(index)) => {
                items.get(index).ok_or(Error::IndexOutOfRange {
                    index,
                    len: items.len(),
                })
            }
            (other, _) => Err(Error::NotIndexable(type_name(other))),
        }
    }

    /// JSON-pointer lookup (`/events/0/id`).
    pub fn pointer(&self, pointer: &str) -> Option<&Value> {
        self.payload.pointer(pointer)
    }

    /// New response over a clone of one sub-value.
    ///
    /// Useful for exporting the `events` array of a listing as CSV.
    ///
    /// The selection keeps the endpoint name, suffixed with the key.
    pub fn select<'k>(&self, key: impl Into<Key<'k>>) -> Result<ApiResponse> {
        let key = key.into();
        let selected = ApiResponse::new(self.get(key)?.clone());
        Ok(match &self.endpoint {
            Some(endpoint) => selected.with_endpoint(match key {
                Key::Name(name) => format!("{endpoint}_{name}"),
                Key::Position(position) => format!("{endpoint}_{position}"),
            }),
            None => selected,
        })
    }

    /// Number of top-level keys or elements.
    ///
    /// # Errors
    ///
    /// [`Error::NotSized`] for scalar payloads.
    pub fn len(&self) -> Result<usize> {
        match &self.payload {
            Value::Object(map) => Ok(map.len()),
            Value::Array(items) => Ok(items.len()),
            other => Err(Error::NotSized(type_name(other))),
        }
    }

    /// Whether [`len`](Self::len) is zero.
    pub fn is_empty(&self) -> Result<bool> {
        self.len().map(|len| len == 0)
    }

    /// Iterate over object values (in key order) or array elements.
    ///
    /// Each call starts a fresh pass. Scalars yield nothing.
    pub fn iter(&self) -> Values<'_> {
        let inner = match &self.payload {
            Value::Object(map) => ValuesInner::Object(map.values()),
            Value::Array(items) => ValuesInner::Array(items.iter()),
            _ => ValuesInner::Empty,
        };
        Values { inner }
    }

    /// Whether the payload is an array of objects, i.e. exportable as CSV.
    pub fn is_tabular(&self) -> bool {
        export::csv::is_tabular(&self.payload)
    }

    /// Compact JSON text.
    pub fn to_json(&self) -> Result<String> {
        export::json::to_string(&self.payload)
    }

    /// JSON text with a four-space indent.
    pub fn to_json_pretty(&self) -> Result<String> {
        export::json::to_string_pretty(&self.payload)
    }

    /// CSV text with a header row.
    ///
    /// # Errors
    ///
    /// [`Error::NotTabular`] unless the payload is an array of objects.
    pub fn to_csv(&self) -> Result<String> {
        export::csv::to_string(&self.payload)
    }

    /// Write pretty JSON to `path`, returning the path written.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();
        let bytes = export::write_atomic(path, |w| export::json::write_pretty(&self.payload, w))?;
        observability::log_export(ExportFormat::Json.extension(), path, bytes);
        Ok(path.to_path_buf())
    }

    /// Write CSV to `path`, returning the path written.
    ///
    /// No file is created when the payload is not tabular.
    pub fn save_csv(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();
        export::csv::rows(&self.payload)?;
        let bytes = export::write_atomic(path, |w| export::csv::write_csv(&self.payload, w))?;
        observability::log_export(ExportFormat::Csv.extension(), path, bytes);
        Ok(path.to_path_buf())
    }

    /// Write `<dir>/<stem>.<ext>` in the given format.
    ///
    /// The stem is sanitized (see [`export::sanitize_file_stem`]).
    pub fn save(
        &self,
        format: ExportFormat,
        dir: impl AsRef<Path>,
        stem: &str,
    ) -> Result<PathBuf> {
        let path = export::file::export_path(dir.as_ref(), stem, format.extension());
        match format {
            ExportFormat::Json => self.save_json(path),
            ExportFormat::Csv => self.save_csv(path),
        }
    }

    /// Like [`save`](Self::save), with the file named after the endpoint
    /// that produced the response (`<dir>/events_lineups.json`), or
    /// `output` for responses built by hand.
    pub fn save_as_endpoint(
        &self,
        format: ExportFormat,
        dir: impl AsRef<Path>,
    ) -> Result<PathBuf> {
        let stem = self.endpoint().unwrap_or(export::file::DEFAULT_FILE_STEM);
        self.save(format, dir, stem)
    }
}

impl From<Value> for ApiResponse {
    fn from(payload: Value) -> Self {
        Self::new(payload)
    }
}

impl From<ApiResponse> for Value {
    fn from(response: ApiResponse) -> Self {
        response.payload
    }
}

impl<'a> IntoIterator for &'a ApiResponse {
    type Item = &'a Value;
    type IntoIter = Values<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for ApiResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.payload, f)
    }
}

/// Iterator returned by [`ApiResponse::iter`].
pub struct Values<'a> {
    inner: ValuesInner<'a>,
}

impl fmt::Debug for Values<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Values")
            .field("remaining", &self.len())
            .finish()
    }
}

enum ValuesInner<'a> {
    Object(serde_json::map::Values<'a>),
    Array(std::slice::Iter<'a, Value>),
    Empty,
}

impl<'a> Iterator for Values<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            ValuesInner::Object(values) => values.next(),
            ValuesInner::Array(items) => items.next(),
            ValuesInner::Empty => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            ValuesInner::Object(values) => values.size_hint(),
            ValuesInner::Array(items) => items.size_hint(),
            ValuesInner::Empty => (0, Some(0)),
        }
    }
}

impl ExactSizeIterator for Values<'_> {}

/// Short name of a JSON value's type, for error messages.
pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
