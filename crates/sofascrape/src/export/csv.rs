//! CSV rendering for tabular payloads
//!
//! A payload is tabular when it is an array whose elements are all objects.
//! Columns are the union of the object keys in first-seen order; a row that
//! lacks a column gets an empty cell.

use crate::{
    error::{Error, Result},
    response::type_name,
};
use serde_json::{Map, Value};
use std::{
    borrow::Cow,
    io::{self, Write},
};

const SEP: char = ',';

/// Borrow the rows of a tabular payload, or explain why it is not tabular.
pub fn rows(payload: &Value) -> Result<Vec<&Map<String, Value>>> {
    let Value::Array(items) = payload else {
        return Err(Error::NotTabular(format!(
            "expected an array of objects, got {}",
            type_name(payload)
        )));
    };

    items
        .iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::Object(map) => Ok(map),
            other => Err(Error::NotTabular(format!(
                "element {i} is {}, expected object",
                type_name(other)
            ))),
        })
        .collect()
}

/// True when [`rows`] would succeed.
pub fn is_tabular(payload: &Value) -> bool {
    match payload {
        Value::Array(items) => items.iter().all(Value::is_object),
        _ => false,
    }
}

/// Union of row keys, in the order they are first seen.
pub fn columns<'a>(rows: &[&'a Map<String, Value>]) -> Vec<&'a str> {
    let mut seen = std::collections::HashSet::new();
    let mut columns = Vec::new();
    for row in rows {
        for key in row.keys() {
            if seen.insert(key.as_str()) {
                columns.push(key.as_str());
            }
        }
    }
    columns
}

/// Text of a single cell.
///
/// Strings are written as-is, null and missing cells are empty, nested
/// arrays and objects are embedded as compact JSON.
pub fn cell(value: Option<&Value>) -> Cow<'_, str> {
    match value {
        None | Some(Value::Null) => Cow::Borrowed(""),
        Some(Value::String(s)) => Cow::Borrowed(s.as_str()),
        Some(Value::Bool(b)) => Cow::Borrowed(if *b { "true" } else { "false" }),
        Some(Value::Number(n)) => Cow::Owned(n.to_string()),
        Some(nested) => Cow::Owned(nested.to_string()),
    }
}

/// Write a tabular payload as CSV. Nothing is written if the payload is
/// not tabular.
pub fn write_csv<W: Write>(payload: &Value, mut w: W) -> Result<()> {
    let rows = rows(payload)?;
    let columns = columns(&rows);
    if columns.is_empty() {
        return Ok(());
    }

    write_row(&mut w, columns.iter().copied())?;
    for row in &rows {
        write_row(&mut w, columns.iter().map(|c| cell(row.get(*c))))?;
    }
    w.flush()?;
    Ok(())
}

/// Render a tabular payload as a CSV string.
pub fn to_string(payload: &Value) -> Result<String> {
    let mut buf = Vec::new();
    write_csv(payload, &mut buf)?;
    // cells come from `str`s, so the buffer is UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn needs_quotes(field: &str) -> bool {
    field.contains(SEP) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

fn write_row<W, I, S>(mut w: W, cells: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut count = 0usize;
    let mut only_empty = false;
    for cell in cells {
        let cell = cell.as_ref();
        if count > 0 {
            write!(w, "{SEP}")?;
        }
        count += 1;
        only_empty = count == 1 && cell.is_empty();
        if needs_quotes(cell) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            w.write_all(cell.as_bytes())?;
        }
    }
    // a lone empty field would otherwise be a blank line, which readers skip
    if only_empty {
        w.write_all(b"\"\"")?;
    }
    writeln!(w)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_missing_cells_are_empty() {
        let payload = json!([{"a": 1, "b": 2}, {"a": 3}]);
        assert_eq!(to_string(&payload).unwrap(), "a,b\n1,2\n3,\n");
    }

    #[test]
    fn test_single_column_empty_cells_keep_their_rows() {
        let payload = json!([{"a": 1}, {"a": null}, {}, {"a": ""}]);
        let csv = to_string(&payload).unwrap();
        assert_eq!(csv, "a\n1\n\"\"\n\"\"\n\"\"\n");
        assert_eq!(csv.lines().filter(|l| !l.is_empty()).count(), 5);
    }

    #[test]
    fn test_columns_union_in_first_seen_order() {
        let payload = json!([{"b": 1}, {"a": 2, "b": 3}, {"c": 4}]);
        assert_eq!(to_string(&payload).unwrap(), "b,a,c\n1,,\n3,2,\n,,4\n");
    }

    #[test]
    fn test_cell_rendering() {
        let payload = json!([{
            "name": "Real Madrid",
            "score": 2.5,
            "home": true,
            "winner": null,
            "tags": ["a", "b"],
            "team": {"id": 1}
        }]);
        assert_eq!(
            to_string(&payload).unwrap(),
            "name,score,home,winner,tags,team\n\
             Real Madrid,2.5,true,,\"[\"\"a\"\",\"\"b\"\"]\",\"{\"\"id\"\":1}\"\n"
        );
    }

    #[test]
    fn test_quoting() {
        let payload = json!([{"note": "a,b", "quote": "say \"hi\"", "line": "x\ny"}]);
        assert_eq!(
            to_string(&payload).unwrap(),
            "note,quote,line\n\"a,b\",\"say \"\"hi\"\"\",\"x\ny\"\n"
        );
    }

    #[test]
    fn test_empty_array_is_empty_output() {
        assert_eq!(to_string(&json!([])).unwrap(), "");
        assert!(is_tabular(&json!([])));
    }

    #[test]
    fn test_non_tabular_payloads() {
        for payload in [json!({"a": 1}), json!(5), json!([1, 2]), json!([{"a": 1}, 2])] {
            assert!(!is_tabular(&payload));
            assert!(matches!(to_string(&payload), Err(Error::NotTabular(_))));
        }
    }

    #[test]
    fn test_non_tabular_writes_nothing() {
        let mut buf = Vec::new();
        assert!(write_csv(&json!([{"a": 1}, "x"]), &mut buf).is_err());
        assert!(buf.is_empty());
    }
}
