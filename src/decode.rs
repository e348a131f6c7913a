//! TOON decoding.
//!
//! A recursive-descent parser over the lines of a TOON document. Each parsing
//! function takes a line index and returns the parsed value together with the
//! index of the first line it did not consume, so callers can resume exactly
//! where a nested block ended.
//!
//! Strictness is governed by [`ParserMode`]: strict mode rejects malformed
//! input with a line-numbered [`Error::Decoding`], permissive mode recovers
//! (skips unrecognized lines, pads or truncates short and long tabular rows).
//! Resource limits raise [`Error::Validation`] in both modes.
//!
//! ## Usage
//!
//! ```rust
//! use toonkit::{decode, toon};
//!
//! let value = decode("age: 30\nname: Alice").unwrap();
//! assert_eq!(value, toon!({ "age": 30, "name": "Alice" }));
//! ```

use crate::{Error, Number, ParserMode, Result, ToonConfig, ToonMap, Value};

/// Decodes TOON text using the default (strict) configuration.
///
/// # Examples
///
/// ```rust
/// use toonkit::{decode, toon};
///
/// let value = decode("users[2]{id,name}:\n  1,Alice\n  2,Bob").unwrap();
/// assert_eq!(
///     value,
///     toon!({ "users": [{ "id": 1, "name": "Alice" }, { "id": 2, "name": "Bob" }] })
/// );
/// ```
///
/// # Errors
///
/// Returns [`Error::Decoding`] for malformed syntax and [`Error::Validation`]
/// when the input exceeds `max_size_mb`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode(text: &str) -> Result<Value> {
    decode_with_config(text, &ToonConfig::default())
}

/// Decodes TOON text with an explicit configuration.
///
/// The configuration must match the one used at encoding time; in particular
/// `indent_size` decides how nesting levels are recognized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode_with_config(text: &str, config: &ToonConfig) -> Result<Value> {
    let size_mb = text.len() as f64 / (1024.0 * 1024.0);
    if size_mb > config.max_size_mb {
        return Err(Error::validation(format!(
            "input size {:.2}MB exceeds limit {}MB",
            size_mb, config.max_size_mb
        )));
    }

    let trimmed = text.trim();
    if trimmed == "{}" {
        return Ok(Value::Object(ToonMap::new()));
    }
    if trimmed == "[]" {
        return Ok(Value::Array(Vec::new()));
    }
    if trimmed.is_empty() {
        return Ok(Value::Null);
    }

    let lines: Vec<&str> = trimmed.split('\n').collect();
    let decoder = ToonDecoder { config };
    let (value, _) = decoder.parse_lines(&lines, 0, 0)?;
    Ok(value)
}

/// Decodes TOON supplied as a sequence of lines.
///
/// Line-shaped input is accepted for symmetry with
/// [`encode_streaming`](crate::encode_streaming); the lines are joined and
/// parsed as one document, not parsed incrementally.
///
/// # Examples
///
/// ```rust
/// use toonkit::{decode_streaming, toon};
///
/// let value = decode_streaming(["a: 1", "b: 2"]).unwrap();
/// assert_eq!(value, toon!({ "a": 1, "b": 2 }));
/// ```
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode_streaming<I>(lines: I) -> Result<Value>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    decode_streaming_with_config(lines, &ToonConfig::default())
}

/// Streaming variant of [`decode_with_config`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode_streaming_with_config<I>(lines: I, config: &ToonConfig) -> Result<Value>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let text = lines
        .into_iter()
        .map(|line| line.as_ref().to_string())
        .collect::<Vec<_>>()
        .join("\n");
    decode_with_config(&text, config)
}

/// Number of leading whitespace characters on a line.
fn leading_indent(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Strips one pair of surrounding double quotes, if present.
fn strip_quotes(s: &str) -> Option<&str> {
    if s.starts_with('"') && s.ends_with('"') {
        if s.len() >= 2 {
            Some(&s[1..s.len() - 1])
        } else {
            Some("")
        }
    } else {
        None
    }
}

/// Resolves backslash escapes inside a quoted string or key.
///
/// Recognizes `\\ \" \n \r \t \f \b` and `\uXXXX`; an unknown escape keeps
/// the escaped character, a malformed `\u` sequence keeps the `u`.
fn unescape(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '\\' && i + 1 < chars.len() {
            let next = chars[i + 1];
            match next {
                'n' => out.push('\n'),
                'r' => out.push('\r'),
                't' => out.push('\t'),
                'f' => out.push('\u{000C}'),
                'b' => out.push('\u{0008}'),
                '"' => out.push('"'),
                '\\' => out.push('\\'),
                'u' if i + 5 < chars.len() => {
                    let hex: String = chars[i + 2..i + 6].iter().collect();
                    match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                        Some(ch) => {
                            out.push(ch);
                            i += 4;
                        }
                        None => out.push(next),
                    }
                }
                other => out.push(other),
            }
            i += 2;
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }

    out
}

/// Decodes an object key, unescaping it when quoted.
fn decode_key(key: &str) -> String {
    match strip_quotes(key) {
        Some(inner) => unescape(inner),
        None => key.to_string(),
    }
}

/// Parses a primitive cell or inline value.
///
/// Resolution order: reserved literals, quoted string, number, bare string.
/// Text containing `.`, `e` or `E` parses as a float, plain digit runs as an
/// integer; anything that fails numeric parsing stays a string.
fn parse_scalar(raw: &str) -> Value {
    let s = raw.trim();

    if s.is_empty() || s == "null" {
        return Value::Null;
    }
    if s == "true" {
        return Value::Bool(true);
    }
    if s == "false" {
        return Value::Bool(false);
    }
    if s == "[]" {
        return Value::Array(Vec::new());
    }
    if s == "{}" {
        return Value::Object(ToonMap::new());
    }

    if let Some(inner) = strip_quotes(s) {
        return Value::String(unescape(inner));
    }

    if s.contains('.') || s.contains('e') || s.contains('E') {
        if let Ok(f) = s.parse::<f64>() {
            return Value::Number(Number::Float(f));
        }
    } else if let Ok(i) = s.parse::<i64>() {
        return Value::Number(Number::Integer(i));
    }

    Value::String(s.to_string())
}

/// Splits a tabular row into cells, respecting quoted sections.
///
/// Quotes and escapes are preserved in the output cells so [`parse_scalar`]
/// can resolve them. Tab-delimited rows use a plain split since tabs inside
/// cells are always escaped.
fn split_by_delimiter(line: &str, delimiter: char) -> Vec<String> {
    if delimiter == '\t' {
        return line.split('\t').map(String::from).collect();
    }

    let mut parts = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut escape = false;

    for ch in line.chars() {
        if escape {
            current.push(ch);
            escape = false;
        } else if ch == '\\' {
            current.push(ch);
            escape = true;
        } else if ch == '"' {
            current.push(ch);
            in_quotes = !in_quotes;
        } else if ch == delimiter && !in_quotes {
            parts.push(current.trim().to_string());
            current.clear();
        } else {
            current.push(ch);
        }
    }

    if !current.is_empty() || line.ends_with(delimiter) {
        parts.push(current.trim().to_string());
    }

    parts
}

/// A recognized `key[N]{cols}<delim>:` tabular header line.
struct TabularHeader<'s> {
    key: Option<&'s str>,
    count: usize,
    columns: Vec<String>,
    delimiter: char,
}

/// Recognizes a tabular header: optional word-character key, `[count]`,
/// `{columns}`, optional explicit delimiter, terminating colon. Returns
/// `None` for anything else so the line falls through to the other shapes.
fn parse_tabular_header(content: &str) -> Option<TabularHeader<'_>> {
    let body = content.strip_suffix(':')?;

    let open = body.find('[')?;
    let key = &body[..open];
    if !key.is_empty() && !key.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return None;
    }

    let rest = &body[open + 1..];
    let close = rest.find(']')?;
    let count_str = &rest[..close];
    if count_str.is_empty() || !count_str.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let count: usize = count_str.parse().ok()?;

    let cols_body = rest[close + 1..].strip_prefix('{')?;
    let brace = cols_body.find('}')?;
    let cols_str = &cols_body[..brace];
    if cols_str.is_empty() {
        return None;
    }

    let delimiter = match &cols_body[brace + 1..] {
        "" | "," => ',',
        "|" => '|',
        "\t" => '\t',
        _ => return None,
    };

    let columns = cols_str.split(',').map(|c| c.trim().to_string()).collect();
    Some(TabularHeader {
        key: if key.is_empty() { None } else { Some(key) },
        count,
        columns,
        delimiter,
    })
}

struct ToonDecoder<'a> {
    config: &'a ToonConfig,
}

impl<'a> ToonDecoder<'a> {
    /// Parses a block of lines at one indentation level, returning the value
    /// and the index of the first unconsumed line.
    ///
    /// The block is assumed to be an object until proven otherwise: a leading
    /// list item turns it into an array, and an empty block decodes to null.
    fn parse_lines(
        &self,
        lines: &[&str],
        start_idx: usize,
        base_indent: usize,
    ) -> Result<(Value, usize)> {
        if start_idx >= lines.len() {
            return Ok((Value::Null, start_idx));
        }

        let mut result = ToonMap::new();
        let mut idx = start_idx;

        while idx < lines.len() {
            let line = lines[idx];
            if line.trim().is_empty() {
                idx += 1;
                continue;
            }

            let indent = leading_indent(line);
            if indent < base_indent {
                // Dedent ends this block.
                break;
            }
            if indent > base_indent {
                if self.config.mode == ParserMode::Strict {
                    return Err(Error::decoding(idx + 1, "unexpected indentation"));
                }
                idx += 1;
                continue;
            }

            let stripped = line.trim();

            if let Some(header) = parse_tabular_header(stripped) {
                let (rows, next) = self.parse_tabular_rows(
                    lines,
                    idx + 1,
                    indent + self.config.indent_size,
                    &header,
                )?;
                match header.key {
                    // A keyless header makes the whole block the array.
                    None => return Ok((Value::Array(rows), next)),
                    Some(key) => {
                        result.insert(key.to_string(), Value::Array(rows));
                        idx = next;
                        continue;
                    }
                }
            }

            if stripped.contains(": ") || stripped.ends_with(':') {
                let (key, value_part) = match stripped.split_once(": ") {
                    Some((k, v)) => (decode_key(k.trim()), v.trim()),
                    None => (decode_key(stripped[..stripped.len() - 1].trim()), ""),
                };
                if value_part.is_empty() {
                    let (nested, next) =
                        self.parse_lines(lines, idx + 1, indent + self.config.indent_size)?;
                    result.insert(key, nested);
                    idx = next;
                } else {
                    result.insert(key, parse_scalar(value_part));
                    idx += 1;
                }
                continue;
            }

            if stripped.starts_with("- ") || stripped == "-" {
                // List items belong to the enclosing array parse.
                break;
            }

            if self.config.mode == ParserMode::Strict {
                return Err(Error::decoding(
                    idx + 1,
                    format!("invalid syntax: {}", stripped),
                ));
            }
            idx += 1;
        }

        if result.is_empty() {
            let first = lines[start_idx].trim();
            if first.starts_with("- ") || first == "-" {
                let (items, next) = self.parse_array(lines, start_idx, base_indent)?;
                return Ok((Value::Array(items), next));
            }
        }

        if result.is_empty() {
            Ok((Value::Null, idx))
        } else {
            Ok((Value::Object(result), idx))
        }
    }

    /// Parses up to `header.count` delimited rows one level deeper than the
    /// header. A dedent ends the table early; over-indented lines are skipped.
    /// Rows past the declared count are left unconsumed.
    fn parse_tabular_rows(
        &self,
        lines: &[&str],
        start_idx: usize,
        expected_indent: usize,
        header: &TabularHeader<'_>,
    ) -> Result<(Vec<Value>, usize)> {
        let mut rows = Vec::with_capacity(header.count);
        let mut idx = start_idx;

        while idx < lines.len() && rows.len() < header.count {
            let line = lines[idx];
            if line.trim().is_empty() {
                idx += 1;
                continue;
            }

            let indent = leading_indent(line);
            if indent < expected_indent {
                break;
            }

            if indent == expected_indent {
                let mut values = split_by_delimiter(line.trim(), header.delimiter);

                if values.len() != header.columns.len() {
                    if self.config.mode == ParserMode::Strict {
                        return Err(Error::decoding(
                            idx + 1,
                            format!(
                                "row has {} values, expected {}",
                                values.len(),
                                header.columns.len()
                            ),
                        ));
                    }
                    // Permissive: pad with empty cells or truncate.
                    values.resize(header.columns.len(), String::new());
                }

                let mut row = ToonMap::with_capacity(header.columns.len());
                for (col, val) in header.columns.iter().zip(&values) {
                    row.insert(col.clone(), parse_scalar(val));
                }
                rows.push(Value::Object(row));
            }

            idx += 1;
        }

        Ok((rows, idx))
    }

    /// Parses consecutive `- ` list items at one indentation level.
    fn parse_array(
        &self,
        lines: &[&str],
        start_idx: usize,
        base_indent: usize,
    ) -> Result<(Vec<Value>, usize)> {
        let mut result = Vec::new();
        let mut idx = start_idx;

        while idx < lines.len() {
            let line = lines[idx];
            if line.trim().is_empty() {
                idx += 1;
                continue;
            }

            let indent = leading_indent(line);
            if indent < base_indent {
                break;
            }

            let stripped = line.trim();

            if stripped == "-" {
                // Item value lives on the following, deeper lines.
                let (nested, next) =
                    self.parse_lines(lines, idx + 1, base_indent + self.config.indent_size)?;
                result.push(nested);
                idx = next;
                continue;
            }

            let rest = match stripped.strip_prefix("- ") {
                Some(rest) => rest.trim(),
                None => break,
            };

            if rest.is_empty() {
                let (nested, next) =
                    self.parse_lines(lines, idx + 1, base_indent + self.config.indent_size)?;
                result.push(nested);
                idx = next;
                continue;
            }

            if let Some(first_item) = rest.strip_prefix("- ") {
                // "- - value": a single-level nested array spelled inline,
                // with siblings as further "- - value" lines at this indent.
                let mut nested = vec![parse_scalar(first_item.trim())];
                idx += 1;
                while idx < lines.len() {
                    let next_line = lines[idx];
                    if next_line.trim().is_empty() {
                        idx += 1;
                        continue;
                    }
                    let sibling = match leading_indent(next_line) == indent {
                        true => next_line.trim().strip_prefix("- - "),
                        false => None,
                    };
                    match sibling {
                        Some(item) => {
                            nested.push(parse_scalar(item.trim()));
                            idx += 1;
                        }
                        None => break,
                    }
                }
                result.push(Value::Array(nested));
                continue;
            }

            result.push(parse_scalar(rest));
            idx += 1;
        }

        Ok((result, idx))
    }
}
