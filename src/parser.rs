//! UP parsing.
//!
//! This module provides the [`Parser`] that turns UP text into a
//! [`Document`], together with the small line-level helpers it is built
//! from.
//!
//! ## Overview
//!
//! - **Line-oriented**: input is split on `\n` once, and every sub-parser
//!   works on the resulting line slice.
//! - **Threaded cursor**: each sub-parser takes a start index and returns
//!   the value it built together with the index of the first line it did
//!   not consume. No cursor state lives on the parser itself.
//! - **Lenient**: blocks, lists and multiline fences that are never closed
//!   end quietly at the end of input with whatever they collected.
//! - **Bounded**: sub-parsers recurse once per nesting level, so depth is
//!   checked against [`ParseOptions::max_depth`] before each block or list.
//! - **Whitespace**: Unicode whitespace plus the information separators
//!   U+001C..=U+001F, for key splitting and trimming alike.
//!
//! ## Usage
//!
//! Most users should use [`parse`](crate::parse) from the crate root:
//!
//! ```rust
//! use uplang::{parse, Value};
//!
//! let doc = parse("colors [red, green, blue]").unwrap();
//! assert_eq!(
//!     doc.nodes()[0].value,
//!     Value::List(vec!["red".into(), "green".into(), "blue".into()])
//! );
//! ```

use crate::error::Fault;
use crate::{Block, Document, Node, ParseError, ParseOptions, Result, Value};
use log::{debug, trace};

const FENCE: &str = "```";

/// A parsed item together with the index of the next unconsumed line.
type Step<T> = std::result::Result<(T, usize), Fault>;

/// The UP parser.
///
/// Holds only its [`ParseOptions`]; every call to
/// [`parse_document`](Parser::parse_document) is independent, so one parser
/// can be shared freely across threads.
///
/// # Examples
///
/// ```rust
/// use uplang::Parser;
///
/// let parser = Parser::new();
/// let doc = parser.parse_document("server {\n  host localhost\n}").unwrap();
/// assert_eq!(doc.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Parser {
    options: ParseOptions,
}

impl Parser {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_options(options: ParseOptions) -> Self {
        Parser { options }
    }

    #[must_use]
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parses a UP document from a string.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the pipeline for some top-level node
    /// faults. The error names the line on which that top-level node
    /// started, even when the fault arose inside a nested block or list.
    pub fn parse_document(&self, input: &str) -> Result<Document> {
        let lines: Vec<&str> = input.split('\n').collect();
        debug!("parsing UP document of {} lines", lines.len());

        let mut nodes = Vec::new();
        let mut i = 0;

        while i < lines.len() {
            let trimmed = trim(lines[i]);

            // Stray closers are skipped at the top level only
            if is_skippable(trimmed) || trimmed == "}" || trimmed == "]" {
                i += 1;
                continue;
            }

            match self.parse_line(&lines, i, 0) {
                Ok((node, next)) => {
                    nodes.push(node);
                    i = next;
                }
                Err(fault) => {
                    debug!("fault in node starting at line {}: {}", i + 1, fault);
                    return Err(ParseError::new(i + 1, fault));
                }
            }
        }

        debug!("parsed {} top-level nodes", nodes.len());
        Ok(Document::from_nodes(nodes))
    }

    fn parse_line(&self, lines: &[&str], start: usize, depth: usize) -> Step<Node> {
        let (key_token, remainder) = split_key_value(lines[start]);
        let (key, type_annotation) = split_key_type(key_token);

        let (value, next) = self.parse_value(lines, start, remainder, type_annotation, depth)?;

        Ok((
            Node {
                key: key.to_string(),
                value,
                type_annotation: type_annotation.map(str::to_string),
            },
            next,
        ))
    }

    /// Picks the value form for `remainder`, the text after the key on line
    /// `start`. Sub-parsers for multi-line forms begin on the following line.
    fn parse_value(
        &self,
        lines: &[&str],
        start: usize,
        remainder: &str,
        type_annotation: Option<&str>,
        depth: usize,
    ) -> Step<Value> {
        if remainder.starts_with(FENCE) {
            trace!("line {}: multiline string", start + 1);
            let (text, next) = self.parse_multiline(lines, start + 1, type_annotation);
            return Ok((Value::Scalar(text), next));
        }

        if remainder == "{" {
            trace!("line {}: block", start + 1);
            let (block, next) = self.parse_block(lines, start + 1, depth + 1)?;
            return Ok((Value::Block(block), next));
        }

        if remainder == "[" {
            trace!("line {}: list", start + 1);
            let (items, next) = self.parse_list(lines, start + 1, depth + 1)?;
            return Ok((Value::List(items), next));
        }

        if is_inline_list(remainder) {
            return Ok((Value::List(parse_inline_list(remainder)), start + 1));
        }

        Ok((Value::Scalar(remainder.to_string()), start + 1))
    }

    fn parse_multiline(
        &self,
        lines: &[&str],
        start: usize,
        type_annotation: Option<&str>,
    ) -> (String, usize) {
        let mut content = Vec::new();
        let mut i = start;
        let mut closed = false;

        while i < lines.len() {
            let line = lines[i];
            i += 1;

            if trim(line) == FENCE {
                closed = true;
                break;
            }
            content.push(line);
        }

        if !closed {
            trace!("multiline string from line {} closed by end of input", start);
        }

        let text = content.join("\n");

        match type_annotation.and_then(dedent_amount) {
            Some(amount) if self.options.dedent_multiline => (dedent(&text, amount), i),
            _ => (text, i),
        }
    }

    fn parse_block(&self, lines: &[&str], start: usize, depth: usize) -> Step<Block> {
        self.check_depth(start, depth)?;

        let mut block = Block::new();
        let mut i = start;

        while i < lines.len() {
            let trimmed = trim(lines[i]);

            if trimmed == "}" {
                return Ok((block, i + 1));
            }

            if is_skippable(trimmed) {
                i += 1;
                continue;
            }

            let (node, next) = self.parse_line(lines, i, depth)?;
            block.insert(node.key, node.value);
            i = next;
        }

        trace!("block from line {} closed by end of input", start);
        Ok((block, i))
    }

    fn parse_list(&self, lines: &[&str], start: usize, depth: usize) -> Step<Vec<Value>> {
        self.check_depth(start, depth)?;

        let mut items = Vec::new();
        let mut i = start;

        while i < lines.len() {
            let trimmed = trim(lines[i]);

            if trimmed == "]" {
                return Ok((items, i + 1));
            }

            if is_skippable(trimmed) {
                i += 1;
                continue;
            }

            if is_inline_list(trimmed) {
                items.push(Value::List(parse_inline_list(trimmed)));
                i += 1;
            } else if trimmed == "{" {
                let (block, next) = self.parse_block(lines, i + 1, depth + 1)?;
                items.push(Value::Block(block));
                i = next;
            } else {
                items.push(Value::Scalar(trimmed.to_string()));
                i += 1;
            }
        }

        trace!("list from line {} closed by end of input", start);
        Ok((items, i))
    }

    /// `start` is the first body line, which is also the 1-based number of
    /// the line holding the opener.
    fn check_depth(&self, start: usize, depth: usize) -> std::result::Result<(), Fault> {
        match self.options.max_depth {
            Some(limit) if depth > limit => Err(Fault::NestingTooDeep { limit, line: start }),
            _ => Ok(()),
        }
    }
}

fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

fn trim(text: &str) -> &str {
    text.trim_matches(is_space)
}

fn is_skippable(trimmed: &str) -> bool {
    trimmed.is_empty() || trimmed.starts_with('#')
}

fn is_inline_list(text: &str) -> bool {
    text.len() >= 2 && text.starts_with('[') && text.ends_with(']')
}

/// Reads a numeric type annotation as a dedent amount.
///
/// Digit strings too large for `usize` saturate, which leaves every line
/// untouched, same as any amount longer than the lines themselves.
fn dedent_amount(annotation: &str) -> Option<usize> {
    if annotation.is_empty() || !annotation.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(annotation.parse().unwrap_or(usize::MAX))
}

/// Splits a raw line into its key token and the remaining value text.
///
/// Leading whitespace is skipped, the key runs up to the first whitespace,
/// and the remainder starts at the next non-whitespace character. Trailing
/// text, whitespace included, is kept verbatim.
///
/// # Examples
///
/// ```rust
/// use uplang::parser::split_key_value;
///
/// assert_eq!(split_key_value("  name   John Doe "), ("name", "John Doe "));
/// assert_eq!(split_key_value("flag"), ("flag", ""));
/// ```
pub fn split_key_value(line: &str) -> (&str, &str) {
    let line = line.trim_start_matches(is_space);
    match line.find(is_space) {
        Some(idx) => (&line[..idx], line[idx..].trim_start_matches(is_space)),
        None => (line, ""),
    }
}

/// Splits a key token on its first `!` into key and type annotation.
///
/// # Examples
///
/// ```rust
/// use uplang::parser::split_key_type;
///
/// assert_eq!(split_key_type("age!int"), ("age", Some("int")));
/// assert_eq!(split_key_type("a!b!c"), ("a", Some("b!c")));
/// assert_eq!(split_key_type("raw!"), ("raw", Some("")));
/// assert_eq!(split_key_type("name"), ("name", None));
/// ```
pub fn split_key_type(token: &str) -> (&str, Option<&str>) {
    match token.split_once('!') {
        Some((key, annotation)) => (key, Some(annotation)),
        None => (token, None),
    }
}

/// Parses an inline `[a, b, c]` token into a flat list of trimmed scalars.
///
/// Commas always split; there is no quoting and no nesting. Empty or
/// whitespace-only brackets give an empty list.
///
/// # Examples
///
/// ```rust
/// use uplang::parser::parse_inline_list;
/// use uplang::Value;
///
/// assert_eq!(
///     parse_inline_list("[ a ,b,, c ]"),
///     vec![Value::from("a"), Value::from("b"), Value::from(""), Value::from("c")]
/// );
/// assert!(parse_inline_list("[   ]").is_empty());
/// ```
pub fn parse_inline_list(token: &str) -> Vec<Value> {
    let token = trim(token);
    let content = token
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or("");

    if trim(content).is_empty() {
        return Vec::new();
    }

    content
        .split(',')
        .map(|item| Value::Scalar(trim(item).to_string()))
        .collect()
}

/// Removes the first `amount` characters from every line of `text`.
///
/// Lines shorter than `amount` are left as they are, and the removed
/// characters are not required to be whitespace.
///
/// # Examples
///
/// ```rust
/// use uplang::parser::dedent;
///
/// assert_eq!(dedent("  ab\nc", 2), "ab\nc");
/// assert_eq!(dedent("xxkeep\n  ", 2), "keep\n");
/// ```
#[must_use]
pub fn dedent(text: &str, amount: usize) -> String {
    text.split('\n')
        .map(|line| match line.char_indices().nth(amount) {
            Some((idx, _)) => &line[idx..],
            None if line.chars().count() == amount => "",
            None => line,
        })
        .collect::<Vec<_>>()
        .join("\n")
}
