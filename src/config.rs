//! Configuration for TOON encoding and decoding.
//!
//! A [`ToonConfig`] is built once, never mutated, and passed by reference into
//! `encode`/`decode` calls. The same configuration must be used on both sides
//! for a document to round-trip: the indent width is not self-describing in
//! the format.
//!
//! ## Examples
//!
//! ```rust
//! use toonkit::{ToonConfig, ParserMode, Delimiter};
//!
//! // Defaults: strict mode, canonical key ordering, comma delimiter.
//! let config = ToonConfig::default();
//! assert_eq!(config.mode, ParserMode::Strict);
//! assert!(config.sort_keys);
//!
//! // Best-effort parsing with insertion-ordered keys.
//! let config = ToonConfig::new()
//!     .with_mode(ParserMode::Permissive)
//!     .with_sort_keys(false);
//! ```

use serde::{Deserialize, Serialize};

/// Parser strictness mode.
///
/// Strict mode rejects malformed syntax (bad indentation, unrecognized line
/// shapes, tabular column-count mismatches). Permissive mode recovers:
/// over-indented and unrecognized lines are skipped, short tabular rows are
/// padded and long ones truncated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParserMode {
    #[default]
    Strict,
    Permissive,
}

/// Delimiter used between cells of a tabular array.
///
/// Comma is the default and most compact. When `allow_custom_delimiter` is
/// set and any string cell contains a comma, the encoder switches the whole
/// table to pipe. Tab is accepted on decode but never chosen automatically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    #[default]
    Comma,
    Pipe,
    Tab,
}

impl Delimiter {
    /// Returns the delimiter character.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toonkit::Delimiter;
    ///
    /// assert_eq!(Delimiter::Comma.as_char(), ',');
    /// assert_eq!(Delimiter::Pipe.as_char(), '|');
    /// assert_eq!(Delimiter::Tab.as_char(), '\t');
    /// ```
    #[must_use]
    pub const fn as_char(&self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Pipe => '|',
            Delimiter::Tab => '\t',
        }
    }

    /// Maps a delimiter character back to its variant.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            ',' => Some(Delimiter::Comma),
            '|' => Some(Delimiter::Pipe),
            '\t' => Some(Delimiter::Tab),
            _ => None,
        }
    }
}

/// Immutable configuration governing both encoding and decoding.
///
/// | field | meaning | default |
/// |---|---|---|
/// | `mode` | strict or permissive parsing | `Strict` |
/// | `max_depth` | nesting ceiling enforced by the encoder | `10` |
/// | `max_size_mb` | approximate input/output size ceiling | `50.0` |
/// | `indent_size` | spaces per nesting level, both directions | `2` |
/// | `sort_keys` | alphabetical key ordering when encoding | `true` |
/// | `delimiter` | default tabular delimiter | `Comma` |
/// | `allow_custom_delimiter` | permit switching to pipe when data contains commas | `true` |
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToonConfig {
    pub mode: ParserMode,
    pub max_depth: usize,
    pub max_size_mb: f64,
    pub indent_size: usize,
    pub sort_keys: bool,
    pub delimiter: Delimiter,
    pub allow_custom_delimiter: bool,
}

impl Default for ToonConfig {
    fn default() -> Self {
        ToonConfig {
            mode: ParserMode::Strict,
            max_depth: 10,
            max_size_mb: 50.0,
            indent_size: 2,
            sort_keys: true,
            delimiter: Delimiter::Comma,
            allow_custom_delimiter: true,
        }
    }
}

impl ToonConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a permissive-mode configuration with all other defaults.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toonkit::{ToonConfig, ParserMode};
    ///
    /// let config = ToonConfig::permissive();
    /// assert_eq!(config.mode, ParserMode::Permissive);
    /// ```
    #[must_use]
    pub fn permissive() -> Self {
        ToonConfig {
            mode: ParserMode::Permissive,
            ..Default::default()
        }
    }

    /// Sets the parser mode.
    #[must_use]
    pub fn with_mode(mut self, mode: ParserMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the maximum nesting depth enforced while encoding.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the approximate size ceiling, in megabytes, for both directions.
    #[must_use]
    pub fn with_max_size_mb(mut self, max_size_mb: f64) -> Self {
        self.max_size_mb = max_size_mb;
        self
    }

    /// Sets the number of spaces per indentation level.
    ///
    /// A document encoded with one indent width must be decoded with the same
    /// width or nesting levels will misalign.
    #[must_use]
    pub fn with_indent_size(mut self, indent_size: usize) -> Self {
        self.indent_size = indent_size;
        self
    }

    /// Enables or disables alphabetical key ordering when encoding.
    #[must_use]
    pub fn with_sort_keys(mut self, sort_keys: bool) -> Self {
        self.sort_keys = sort_keys;
        self
    }

    /// Sets the default tabular delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Permits or forbids the automatic comma-to-pipe switch for tables whose
    /// string cells contain commas.
    #[must_use]
    pub fn with_allow_custom_delimiter(mut self, allow: bool) -> Self {
        self.allow_custom_delimiter = allow;
        self
    }
}
