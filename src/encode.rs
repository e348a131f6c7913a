//! TOON encoding.
//!
//! Converts a [`Value`] tree into canonical TOON text. Under a fixed
//! configuration the output is deterministic: with `sort_keys` enabled it is
//! independent of the original key insertion order.
//!
//! The encoder applies the format's space-saving shapes:
//!
//! - **Tabular arrays**: arrays of objects sharing one non-empty key set emit
//!   a `[count]{cols}:` header plus one delimited row per element
//! - **Quote minimization**: strings are emitted bare unless ambiguous
//! - **List form**: every other array renders one `- value` item per line
//!
//! ## Usage
//!
//! ```rust
//! use toonkit::{encode, toon};
//!
//! let value = toon!({ "age": 30, "name": "Alice" });
//! assert_eq!(encode(&value).unwrap(), "age: 30\nname: Alice");
//! ```

use crate::{Error, Number, Result, ToonConfig, ToonMap, Value};

/// Encodes a value to TOON text using the default configuration.
///
/// # Examples
///
/// ```rust
/// use toonkit::{encode, toon};
///
/// let value = toon!({
///     "users": [
///         { "id": 1, "name": "Alice", "role": "admin" },
///         { "id": 2, "name": "Bob", "role": "user" }
///     ]
/// });
/// let text = encode(&value).unwrap();
/// assert_eq!(
///     text,
///     "users[2]{id,name,role}:\n  1,Alice,admin\n  2,Bob,user"
/// );
/// ```
///
/// # Errors
///
/// Returns [`Error::Validation`] when the value nests deeper than
/// `max_depth` or its estimated size exceeds `max_size_mb`, and
/// [`Error::Encoding`] for structural serialization failures.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode(value: &Value) -> Result<String> {
    encode_with_config(value, &ToonConfig::default())
}

/// Encodes a value to TOON text with an explicit configuration.
///
/// The same configuration must be used to decode the produced text; indent
/// width in particular is not self-describing.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode_with_config(value: &Value, config: &ToonConfig) -> Result<String> {
    let estimated_mb = estimate_size(value) as f64 / (1024.0 * 1024.0);
    if estimated_mb > config.max_size_mb {
        return Err(Error::validation(format!(
            "input size {:.2}MB exceeds limit {}MB",
            estimated_mb, config.max_size_mb
        )));
    }

    let encoder = ToonEncoder { config };
    encoder.encode_value(value, 0, "")
}

/// Encodes a value and exposes the result as a sequence of lines.
///
/// The sequence is finite and computed eagerly: it is a post-hoc split of the
/// full encoding, not incremental generation. Useful when feeding output
/// line-by-line into a prompt assembly pipeline.
///
/// # Examples
///
/// ```rust
/// use toonkit::{encode_streaming, toon};
///
/// let value = toon!({ "a": 1, "b": 2 });
/// let lines: Vec<String> = encode_streaming(&value).unwrap().collect();
/// assert_eq!(lines, vec!["a: 1", "b: 2"]);
/// ```
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode_streaming(value: &Value) -> Result<EncodedLines> {
    encode_streaming_with_config(value, &ToonConfig::default())
}

/// Streaming variant of [`encode_with_config`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode_streaming_with_config(value: &Value, config: &ToonConfig) -> Result<EncodedLines> {
    let text = encode_with_config(value, config)?;
    let lines: Vec<String> = text.split('\n').map(String::from).collect();
    Ok(EncodedLines {
        lines: lines.into_iter(),
    })
}

/// Iterator over the newline-delimited lines of one encoding. One-shot.
pub struct EncodedLines {
    lines: std::vec::IntoIter<String>,
}

impl Iterator for EncodedLines {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.lines.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.lines.size_hint()
    }
}

impl ExactSizeIterator for EncodedLines {}

/// Approximate in-memory footprint of a value tree, in bytes.
///
/// Counts representation overhead per node rather than exact serialized
/// length; it feeds the `max_size_mb` guard and is deliberately rough.
fn estimate_size(value: &Value) -> usize {
    match value {
        Value::Null | Value::Bool(_) => 8,
        Value::Number(_) => 16,
        Value::String(s) => 48 + s.len(),
        Value::Array(arr) => 56 + arr.iter().map(estimate_size).sum::<usize>(),
        Value::Object(obj) => {
            64 + obj
                .iter()
                .map(|(k, v)| 48 + k.len() + estimate_size(v))
                .sum::<usize>()
        }
    }
}

fn looks_like_number(s: &str) -> bool {
    !s.is_empty() && s.parse::<f64>().is_ok()
}

/// Canonical decimal text for a number.
///
/// Whole finite floats keep a trailing `.0` so they decode back as floats
/// rather than integers.
fn format_number(n: &Number) -> String {
    match n {
        Number::Integer(i) => i.to_string(),
        Number::Float(f) => {
            if f.is_finite() && f.fract() == 0.0 {
                format!("{:.1}", f)
            } else {
                f.to_string()
            }
        }
    }
}

struct ToonEncoder<'a> {
    config: &'a ToonConfig,
}

impl<'a> ToonEncoder<'a> {
    fn indent_unit(&self) -> String {
        " ".repeat(self.config.indent_size)
    }

    fn encode_value(&self, value: &Value, depth: usize, indent: &str) -> Result<String> {
        if depth > self.config.max_depth {
            return Err(Error::validation(format!(
                "maximum depth {} exceeded",
                self.config.max_depth
            )));
        }

        match value {
            Value::Null => Ok("null".to_string()),
            Value::Bool(b) => Ok(if *b { "true" } else { "false" }.to_string()),
            Value::Number(n) => Ok(format_number(n)),
            Value::String(s) => Ok(self.encode_string(s)),
            Value::Array(arr) => self.encode_array(arr, depth, indent),
            Value::Object(obj) => self.encode_object(obj, depth, indent),
        }
    }

    /// Encodes a standalone string, quoting when the bare form would be
    /// ambiguous: empty, contains `,`/`:`/newline/tab, any control character,
    /// whitespace-only or padded, a reserved literal, or numeric-looking.
    fn encode_string(&self, s: &str) -> String {
        let needs_quotes = s.is_empty()
            || s.contains(',')
            || s.contains(':')
            || s.contains('\n')
            || s.contains('\r')
            || s.contains('\t')
            || s.chars().any(|c| (c as u32) < 32)
            || s.chars().all(char::is_whitespace)
            || s.trim() != s
            || matches!(s, "true" | "false" | "null" | "[]" | "{}")
            || looks_like_number(s);

        if needs_quotes {
            let mut out = String::with_capacity(s.len() + 2);
            out.push('"');
            for ch in s.chars() {
                match ch {
                    '\\' => out.push_str("\\\\"),
                    '"' => out.push_str("\\\""),
                    '\n' => out.push_str("\\n"),
                    '\r' => out.push_str("\\r"),
                    '\t' => out.push_str("\\t"),
                    '\u{000C}' => out.push_str("\\f"),
                    '\u{0008}' => out.push_str("\\b"),
                    other => out.push(other),
                }
            }
            out.push('"');
            out
        } else {
            s.to_string()
        }
    }

    /// Encodes an object key. The quoting rule is narrower than for values:
    /// keys are not quoted merely for containing a comma or looking numeric.
    fn encode_key(&self, key: &str) -> String {
        let needs_quotes = key.is_empty()
            || key.trim() != key
            || key.chars().all(char::is_whitespace)
            || key.contains(':')
            || key.chars().any(|c| (c as u32) < 32);

        if needs_quotes {
            let mut out = String::with_capacity(key.len() + 2);
            out.push('"');
            for ch in key.chars() {
                match ch {
                    '\\' => out.push_str("\\\\"),
                    '"' => out.push_str("\\\""),
                    '\n' => out.push_str("\\n"),
                    '\r' => out.push_str("\\r"),
                    '\t' => out.push_str("\\t"),
                    other => out.push(other),
                }
            }
            out.push('"');
            out
        } else {
            key.to_string()
        }
    }

    fn encode_object(&self, obj: &ToonMap, depth: usize, indent: &str) -> Result<String> {
        if obj.is_empty() {
            return Ok("{}".to_string());
        }

        let mut entries: Vec<(&String, &Value)> = obj.iter().collect();
        if self.config.sort_keys {
            entries.sort_by(|a, b| a.0.cmp(b.0));
        }

        let next_indent = format!("{}{}", indent, self.indent_unit());
        let mut lines = Vec::with_capacity(entries.len());

        for (key, value) in entries {
            let encoded_key = self.encode_key(key);

            if let Value::Array(arr) = value {
                if let Some(columns) = self.tabular_columns(arr) {
                    lines.push(self.encode_tabular(Some(&encoded_key), arr, &columns, indent)?);
                    continue;
                }
            }

            let encoded_val = self.encode_value(value, depth + 1, &next_indent)?;

            // Non-empty nested containers always go on following lines, even
            // when their encoding happens to fit a single line.
            let is_nested = matches!(value, Value::Object(m) if !m.is_empty())
                || matches!(value, Value::Array(a) if !a.is_empty());
            if encoded_val.contains('\n') || is_nested {
                lines.push(format!("{}{}:\n{}", indent, encoded_key, encoded_val));
            } else {
                lines.push(format!("{}{}: {}", indent, encoded_key, encoded_val));
            }
        }

        Ok(lines.join("\n"))
    }

    fn encode_array(&self, arr: &[Value], depth: usize, indent: &str) -> Result<String> {
        if arr.is_empty() {
            return Ok("[]".to_string());
        }
        if let Some(columns) = self.tabular_columns(arr) {
            return self.encode_tabular(None, arr, &columns, indent);
        }
        self.encode_list(arr, depth, indent)
    }

    fn encode_list(&self, arr: &[Value], depth: usize, indent: &str) -> Result<String> {
        let item_indent = format!("{}{}", indent, self.indent_unit());
        let mut items = Vec::with_capacity(arr.len());

        for item in arr {
            let encoded = self.encode_value(item, depth + 1, &item_indent)?;
            let is_nested = matches!(item, Value::Object(m) if !m.is_empty())
                || matches!(item, Value::Array(a) if !a.is_empty());
            if is_nested || encoded.contains('\n') {
                items.push(format!("{}-\n{}", indent, encoded));
            } else {
                items.push(format!("{}- {}", indent, encoded));
            }
        }

        Ok(items.join("\n"))
    }

    /// Returns the column list (in key-order policy) when the array qualifies
    /// for table form: every element is an object, the first element's key set
    /// is non-empty, and all elements share exactly that key set.
    fn tabular_columns(&self, arr: &[Value]) -> Option<Vec<String>> {
        let first = match arr.first()? {
            Value::Object(obj) if !obj.is_empty() => obj,
            _ => return None,
        };

        for item in arr {
            let obj = match item {
                Value::Object(obj) => obj,
                _ => return None,
            };
            if obj.len() != first.len() || !first.keys().all(|k| obj.contains_key(k)) {
                return None;
            }
        }

        let mut columns: Vec<String> = first.keys().cloned().collect();
        if self.config.sort_keys {
            columns.sort();
        }
        Some(columns)
    }

    fn encode_tabular(
        &self,
        key: Option<&str>,
        arr: &[Value],
        columns: &[String],
        indent: &str,
    ) -> Result<String> {
        let delimiter = self.choose_delimiter(arr, columns);

        let mut header = String::new();
        header.push_str(indent);
        if let Some(key) = key {
            header.push_str(key);
        }
        header.push('[');
        header.push_str(&arr.len().to_string());
        header.push_str("]{");
        header.push_str(&columns.join(","));
        header.push('}');
        if delimiter != ',' {
            header.push(delimiter);
        }
        header.push(':');

        let next_indent = format!("{}{}", indent, self.indent_unit());
        let delim_str = delimiter.to_string();
        let mut lines = Vec::with_capacity(arr.len() + 1);
        lines.push(header);

        for item in arr {
            let obj = match item {
                Value::Object(obj) => obj,
                _ => return Err(Error::encoding("tabular row is not an object")),
            };
            let mut cells = Vec::with_capacity(columns.len());
            for col in columns {
                let cell = obj.get(col).ok_or_else(|| {
                    Error::encoding(format!("missing column `{}` in tabular row", col))
                })?;
                cells.push(self.encode_cell(cell, delimiter)?);
            }
            lines.push(format!("{}{}", next_indent, cells.join(&delim_str)));
        }

        Ok(lines.join("\n"))
    }

    /// Picks the delimiter for one table. Starts from the configured default;
    /// a comma-delimited table switches to pipe when any string cell contains
    /// a comma and `allow_custom_delimiter` permits it. Tab is honored when
    /// configured but never inferred.
    fn choose_delimiter(&self, arr: &[Value], columns: &[String]) -> char {
        let base = self.config.delimiter.as_char();
        if !self.config.allow_custom_delimiter || base != ',' {
            return base;
        }

        let has_comma = arr.iter().any(|item| match item {
            Value::Object(obj) => columns.iter().any(
                |col| matches!(obj.get(col), Some(Value::String(s)) if s.contains(',')),
            ),
            _ => false,
        });

        if has_comma {
            '|'
        } else {
            ','
        }
    }

    /// Encodes one table cell. Quoting is delimiter-aware: a cell is quoted
    /// when empty, containing the active delimiter, holding control
    /// characters (including the U+0080..U+009F range, emitted as `\u00XX`),
    /// a reserved literal, or numeric-looking text. Non-primitive cell values
    /// fall back to a compact embedded JSON literal.
    fn encode_cell(&self, value: &Value, delimiter: char) -> Result<String> {
        match value {
            Value::Null => Ok("null".to_string()),
            Value::Bool(b) => Ok(if *b { "true" } else { "false" }.to_string()),
            Value::Number(n) => Ok(format_number(n)),
            Value::String(s) => {
                let needs_quotes = s.is_empty()
                    || s.contains(delimiter)
                    || s.contains('\n')
                    || s.contains('\r')
                    || s.contains('\t')
                    || s.chars().any(|c| {
                        let n = c as u32;
                        n < 32 || (128..160).contains(&n)
                    })
                    || matches!(s.as_str(), "true" | "false" | "null" | "[]" | "{}")
                    || looks_like_number(s);

                if !needs_quotes {
                    return Ok(s.clone());
                }

                let mut out = String::with_capacity(s.len() + 2);
                out.push('"');
                for ch in s.chars() {
                    match ch {
                        '\\' => out.push_str("\\\\"),
                        '"' => out.push_str("\\\""),
                        '\n' => out.push_str("\\n"),
                        '\r' => out.push_str("\\r"),
                        '\t' => out.push_str("\\t"),
                        '\u{000C}' => out.push_str("\\f"),
                        '\u{0008}' => out.push_str("\\b"),
                        other if (128..160).contains(&(other as u32)) => {
                            out.push_str(&format!("\\u{:04x}", other as u32));
                        }
                        other => out.push(other),
                    }
                }
                out.push('"');
                Ok(out)
            }
            // Heterogeneous nested content inside otherwise-uniform rows:
            // embed as a compact JSON literal.
            Value::Array(_) | Value::Object(_) => {
                serde_json::to_string(value).map_err(|e| Error::encoding(e.to_string()))
            }
        }
    }
}
