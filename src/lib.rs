//! # uplang
//!
//! A parser for UP (Unified Properties), a line-oriented, human-friendly
//! data serialization format for hand-written configuration files.
//!
//! ## What is UP?
//!
//! UP reads like a list of `key value` lines. Nested blocks use `{`/`}`,
//! lists use `[`/`]` or a compact `[a, b, c]`, and multiline text sits
//! between triple-backtick fences. Keys may carry a type annotation after
//! `!`, which is kept as metadata and never applied.
//!
//! See the [`format`] module for the full format reference.
//!
//! ## Quick Start
//!
//! ```rust
//! use uplang::{parse, Value};
//!
//! let doc = parse(
//!     "name John Doe
//! age!int 30
//! server {
//!   host localhost
//!   port!int 8080
//! }",
//! )
//! .unwrap();
//!
//! assert_eq!(doc.len(), 3);
//!
//! let age = &doc.nodes()[1];
//! assert_eq!(age.key, "age");
//! assert_eq!(age.type_annotation.as_deref(), Some("int"));
//! assert_eq!(age.value, Value::Scalar("30".to_string()));
//!
//! let server = doc.get("server").and_then(|n| n.value.as_block()).unwrap();
//! assert_eq!(server.get("host").and_then(|v| v.as_str()), Some("localhost"));
//! ```
//!
//! ### Building Expected Values with the up! Macro
//!
//! ```rust
//! use uplang::{parse, up};
//!
//! let doc = parse("fruits [\n  apple\n  banana\n]").unwrap();
//! assert_eq!(doc.nodes()[0].value, up!(["apple", "banana"]));
//! ```
//!
//! ## Leniency
//!
//! Unterminated blocks, lists and multiline strings are closed implicitly
//! at end of input. The only error is nesting deeper than the limit in
//! [`ParseOptions`], which defaults to [`DEFAULT_MAX_DEPTH`] levels.
//!
//! ## Serde
//!
//! [`Document`], [`Node`], [`Value`] and [`Block`] implement
//! `serde::Serialize`, so a parsed document can be handed to any serde
//! format:
//!
//! ```rust
//! let doc = uplang::parse("colors [red, green]").unwrap();
//! let json = serde_json::to_string(&doc).unwrap();
//! assert_eq!(json, r#"[{"key":"colors","value":["red","green"]}]"#);
//! ```

pub mod document;
pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod options;
pub mod parser;
pub mod value;

pub use document::{Document, Node};
pub use error::{Fault, ParseError, Result};
pub use map::Block;
pub use options::{ParseOptions, DEFAULT_MAX_DEPTH};
pub use parser::Parser;
pub use value::Value;

/// Parses a UP document from a string with default options.
///
/// # Examples
///
/// ```rust
/// use uplang::parse;
///
/// let doc = parse("").unwrap();
/// assert!(doc.is_empty());
///
/// let doc = parse("name John Doe").unwrap();
/// assert_eq!(doc.nodes()[0].value.as_str(), Some("John Doe"));
/// ```
///
/// # Errors
///
/// Returns a [`ParseError`] prefixed with the line of the top-level node
/// being parsed when a fault occurs, such as nesting deeper than
/// [`DEFAULT_MAX_DEPTH`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse(input: &str) -> Result<Document> {
    Parser::new().parse_document(input)
}

/// Parses a UP document from a string with custom options.
///
/// # Examples
///
/// ```rust
/// use uplang::{parse_with_options, ParseOptions};
///
/// let options = ParseOptions::new().with_max_depth(0);
/// let err = parse_with_options("a ok\nb {\n}", options).unwrap_err();
/// assert_eq!(err.line(), 2);
/// ```
///
/// # Errors
///
/// Returns a [`ParseError`] if a configured limit is exceeded.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_with_options(input: &str, options: ParseOptions) -> Result<Document> {
    Parser::with_options(options).parse_document(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scalar_and_annotation() {
        let doc = parse("age!int 30").unwrap();
        assert_eq!(doc.nodes(), &[Node::new("age", Value::from("30"), Some("int"))]);
    }

    #[test]
    fn test_parse_block() {
        let doc = parse("server {\nhost localhost\nport!int 8080\n}").unwrap();
        assert_eq!(doc.len(), 1);
        assert_eq!(
            doc.nodes()[0].value,
            crate::up!({"host": "localhost", "port": "8080"})
        );
    }

    #[test]
    fn test_parse_with_options_dedent_disabled() {
        let text = "code!2 ```\n  a\n```";
        let doc = parse_with_options(text, ParseOptions::new().with_dedent_multiline(false))
            .unwrap();
        assert_eq!(doc.nodes()[0].value, Value::from("  a"));

        let doc = parse(text).unwrap();
        assert_eq!(doc.nodes()[0].value, Value::from("a"));
    }

    #[test]
    fn test_parser_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Parser>();
        assert_send_sync::<Document>();
        assert_send_sync::<ParseError>();
    }
}
