//! Error types for UP parsing.
//!
//! The parser is deliberately lenient: unterminated blocks, lists and
//! multiline fences are closed implicitly at end of input and never fail.
//! What remains are [`Fault`]s raised somewhere inside the per-line
//! pipeline. Faults travel up through the recursive sub-parsers untouched
//! and are wrapped exactly once, by the top-level document loop, into a
//! [`ParseError`].
//!
//! ## Line attribution
//!
//! The line reported by a [`ParseError`] is the 1-based line on which the
//! enclosing **top-level** node began, not necessarily the line inside a
//! nested block or list where the fault occurred. Faults that know their
//! exact origin carry it separately.
//!
//! ## Examples
//!
//! ```rust
//! use uplang::{parse_with_options, Fault, ParseOptions};
//!
//! let text = "server {\n  tls {\n    cert a.pem\n  }\n}";
//! let err = parse_with_options(text, ParseOptions::new().with_max_depth(1)).unwrap_err();
//!
//! assert!(err.to_string().starts_with("line 1: "));
//! assert_eq!(err.line(), 1);
//! assert!(matches!(err.fault(), Fault::NestingTooDeep { line: 2, .. }));
//! ```

use thiserror::Error;

/// An underlying failure raised inside the per-line pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Fault {
    /// A block or list was opened deeper than the configured nesting limit.
    #[error("nesting depth exceeds limit of {limit} (construct opened at line {line})")]
    NestingTooDeep {
        /// The configured limit.
        limit: usize,
        /// 1-based line of the key that opened the offending construct.
        line: usize,
    },
}

/// The sole error produced by [`parse`](crate::parse) and
/// [`Parser::parse_document`](crate::Parser::parse_document).
///
/// Displays as `line <N>: <cause>`.
///
/// # Examples
///
/// ```rust
/// use uplang::{Fault, ParseError};
///
/// let err = ParseError::new(3, Fault::NestingTooDeep { limit: 0, line: 3 });
/// assert_eq!(
///     err.to_string(),
///     "line 3: nesting depth exceeds limit of 0 (construct opened at line 3)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {fault}")]
pub struct ParseError {
    line: usize,
    #[source]
    fault: Fault,
}

impl ParseError {
    /// Wraps `fault` with the 1-based line of the top-level node being parsed.
    #[must_use]
    pub fn new(line: usize, fault: Fault) -> Self {
        ParseError { line, fault }
    }

    /// The 1-based line on which the enclosing top-level node began.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// The underlying fault.
    #[must_use]
    pub fn fault(&self) -> &Fault {
        &self.fault
    }

    /// Consumes the error, returning the underlying fault.
    #[must_use]
    pub fn into_fault(self) -> Fault {
        self.fault
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;
