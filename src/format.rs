//! TOON Wire Format
//!
//! This module documents the TOON (Token-Oriented Object Notation) dialect
//! implemented by this library.
//!
//! # Overview
//!
//! TOON is a compact, indentation-sensitive text encoding of JSON-shaped data,
//! designed to spend fewer LLM tokens than JSON on the same payload. It drops
//! braces, brackets and redundant quotes, and collapses uniform arrays of
//! objects into a header plus delimited rows.
//!
//! ## Design Philosophy
//!
//! - **Token Efficiency**: No structural punctuation beyond what disambiguates
//! - **Determinism**: With `sort_keys` enabled, output is canonical for a value
//! - **Tabular Compression**: Uniform object arrays emit each key once
//! - **Recoverability**: A permissive mode tolerates sloppy model output
//!
//! # Core Syntax
//!
//! ## Objects
//!
//! One `key: value` pair per line; nesting is expressed with indentation
//! (`indent_size` spaces per level, default 2):
//!
//! ```text
//! name: Alice
//! address:
//!   city: Berlin
//!   zip: "10115"
//! ```
//!
//! **Rules**:
//! - A pair with an inline value uses `key: value` (colon, one space)
//! - A pair whose value is a non-empty object or array uses `key:` with the
//!   value on the following, deeper lines
//! - Keys are quoted when empty, padded with whitespace, containing a colon,
//!   or containing control characters; quoted keys use the string escapes
//! - With `sort_keys` (the default) fields are emitted alphabetically,
//!   otherwise in insertion order
//!
//! ## Primitives
//!
//! | Type | Syntax | Example |
//! |------|--------|---------|
//! | Null | `null` | `manager: null` |
//! | Boolean | `true` or `false` | `active: true` |
//! | Integer | Decimal digits, optional sign | `count: 42` |
//! | Float | Decimal point or exponent | `price: 19.99` |
//! | String | Unquoted or `"quoted"` | `name: Alice` |
//! | Empty array | `[]` | `tags: []` |
//! | Empty object | `{}` | `extra: {}` |
//!
//! Whole floats keep a trailing `.0` (`ratio: 3.0`) so the integer/float
//! distinction survives a round trip.
//!
//! ## Strings
//!
//! Strings are unquoted by default. A standalone string value is quoted when:
//!
//! - Empty or whitespace-only, or padded with leading/trailing whitespace
//! - Containing `,`, `:`, newline, carriage return, tab, or any control
//!   character
//! - Equal to a reserved literal: `true`, `false`, `null`, `[]`, `{}`
//! - Parseable as a number: `"42"`, `"-3.5"`, `"1e6"`
//!
//! **Escape sequences** (in quoted strings):
//! ```text
//! \"  - quote
//! \\  - backslash
//! \n  - newline
//! \r  - carriage return
//! \t  - tab
//! \f  - form feed
//! \b  - backspace
//! \uXXXX - Unicode codepoint (4 hex digits)
//! ```
//!
//! # Arrays
//!
//! ## List Form
//!
//! The general form: one `- ` item per line. Items whose value is a non-empty
//! container use a bare `-` with the value on the following, deeper lines:
//!
//! ```text
//! items:
//!   - 1
//!   - two
//!   -
//!     name: Alice
//!     role: admin
//! ```
//!
//! A single level of inline nesting is spelled `- - value`, with siblings as
//! further `- - value` lines at the same indent.
//!
//! ## Tabular Form
//!
//! Used automatically when every element of an array is an object and all
//! elements share one identical, non-empty key set:
//!
//! ```text
//! users[3]{id,name,role}:
//!   1,Alice,admin
//!   2,Bob,user
//!   3,Carol,user
//! ```
//!
//! **Syntax**: `key[N]{col1,col2,...}<delim?>:` followed by `N` rows, one
//! level deeper, cells joined by the table's delimiter.
//!
//! - `N` is the declared row count; the decoder reads exactly `N` rows
//! - Column order follows the key-order policy (`sort_keys`)
//! - At the document root the key is omitted: `[N]{cols}:`
//! - A non-comma delimiter appears between `}` and `:`
//! - Cells holding nested containers fall back to a compact embedded JSON
//!   literal (an escape hatch, not round-trip faithful)
//!
//! Cell quoting is delimiter-aware: a cell is quoted when empty, containing
//! the active delimiter, a tab/newline, any control character (the
//! `U+0080..U+009F` range is written as `\u00XX`), a reserved literal, or
//! numeric-looking text.
//!
//! # Delimiters
//!
//! | Delimiter | Character | Header Encoding | Selection |
//! |-----------|-----------|-----------------|-----------|
//! | Comma (default) | `,` | (none) | default |
//! | Pipe | `\|` | `{cols}\|:` | automatic or configured |
//! | Tab | `\t` | `{cols}<TAB>:` | configured only |
//!
//! When `allow_custom_delimiter` is enabled and any string cell of a
//! comma-delimited table contains a comma, the whole table switches to pipe.
//! Tab is accepted on decode but never chosen automatically.
//!
//! # Parser Modes
//!
//! | Condition | Strict | Permissive |
//! |-----------|--------|------------|
//! | Over-indented line | error | skipped |
//! | Unrecognized line shape | error | skipped |
//! | Tabular row with wrong cell count | error | padded / truncated |
//! | Resource limit exceeded | error | error |
//!
//! Strict errors carry the 1-based line number of the offending line in the
//! whitespace-trimmed input.
//!
//! # Resource Limits
//!
//! - `max_depth` (default 10): nesting ceiling, enforced while encoding
//! - `max_size_mb` (default 50): approximate size ceiling on the value tree
//!   when encoding and on the input text when decoding
//!
//! Limit violations are validation errors in both modes.
//!
//! # Edge Cases
//!
//! - The empty document decodes to null; `{}` and `[]` alone decode to the
//!   empty object and empty array
//! - An indented block with no recognizable content decodes to null
//! - A document must be decoded with the `indent_size` it was encoded with;
//!   the width is not recorded in the text
//!
//! # Format Comparison
//!
//! **JSON**:
//! ```json
//! [
//!   {"id":1,"name":"Alice","role":"admin"},
//!   {"id":2,"name":"Bob","role":"user"}
//! ]
//! ```
//!
//! **TOON**:
//! ```text
//! [2]{id,name,role}:
//!   1,Alice,admin
//!   2,Bob,user
//! ```
//!
//! # Limitations
//!
//! - Map keys must be strings
//! - Tabular headers only recognize word-character keys; objects with other
//!   key shapes still encode in key-value form
//! - Comments are not part of the format
//! - Non-finite floats (`NaN`, `inf`) are written as bare words and decode
//!   back as strings
//! - Integers are `i64`: a digit run outside that range (e.g.
//!   `99999999999999999999`) fails numeric parsing and decodes as a string

// This module contains only documentation; no implementation code
