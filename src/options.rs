//! Configuration options for UP parsing.
//!
//! By default numeric type annotations dedent multiline text, and nesting
//! deeper than [`DEFAULT_MAX_DEPTH`] is rejected with a
//! [`Fault::NestingTooDeep`](crate::Fault::NestingTooDeep) instead of
//! exhausting the stack.
//!
//! ## Examples
//!
//! ```rust
//! use uplang::{Parser, ParseOptions};
//!
//! // Keep multiline text verbatim and refuse absurdly deep nesting
//! let options = ParseOptions::new()
//!     .with_dedent_multiline(false)
//!     .with_max_depth(64);
//! let parser = Parser::with_options(options);
//!
//! let doc = parser.parse_document("code!2 ```\n  x\n```").unwrap();
//! assert_eq!(doc.nodes()[0].value.as_str(), Some("  x"));
//! ```

/// Nesting limit used by [`ParseOptions::default`].
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Configuration options for [`Parser`](crate::Parser).
///
/// # Examples
///
/// ```rust
/// use uplang::options::DEFAULT_MAX_DEPTH;
/// use uplang::ParseOptions;
///
/// let options = ParseOptions::new();
/// assert!(options.dedent_multiline);
/// assert_eq!(options.max_depth, Some(DEFAULT_MAX_DEPTH));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// Apply the numeric-annotation dedent rule to multiline strings.
    pub dedent_multiline: bool,
    /// Maximum nesting depth of blocks and lists, `None` for unbounded.
    pub max_depth: Option<usize>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            dedent_multiline: true,
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }
}

impl ParseOptions {
    /// Creates default options (dedent enabled, depth limited to
    /// [`DEFAULT_MAX_DEPTH`]).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables dedenting of multiline strings whose key carries
    /// a numeric type annotation such as `code!4`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uplang::ParseOptions;
    ///
    /// let options = ParseOptions::new().with_dedent_multiline(false);
    /// assert!(!options.dedent_multiline);
    /// ```
    #[must_use]
    pub fn with_dedent_multiline(mut self, dedent: bool) -> Self {
        self.dedent_multiline = dedent;
        self
    }

    /// Sets the maximum nesting depth for blocks and lists.
    ///
    /// A block or list directly under a top-level key has depth 1, so a
    /// limit of 0 rejects any nesting at all.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uplang::ParseOptions;
    ///
    /// let options = ParseOptions::new().with_max_depth(8);
    /// assert_eq!(options.max_depth, Some(8));
    /// ```
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Removes the nesting limit.
    ///
    /// Sub-parsers recurse once per nesting level, so untrusted input can
    /// then overflow the thread's stack and abort the process.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uplang::ParseOptions;
    ///
    /// let options = ParseOptions::new().without_max_depth();
    /// assert_eq!(options.max_depth, None);
    /// ```
    #[must_use]
    pub fn without_max_depth(mut self) -> Self {
        self.max_depth = None;
        self
    }
}
