//! UP Format Reference
//!
//! This module documents the UP (Unified Properties) format as read by this
//! library. It contains no code.
//!
//! # Overview
//!
//! UP is a line-oriented format for hand-written configuration and data
//! files. Each significant line starts with a key; what follows the key
//! decides the shape of its value.
//!
//! ````text
//! # A comment
//! name John Doe
//! age!int 30
//!
//! server {
//!   host localhost
//!   port!int 8080
//! }
//!
//! fruits [
//!   apple
//!   banana
//! ]
//!
//! colors [red, green, blue]
//!
//! script!2 ```
//!   echo hello
//!   exit 0
//! ```
//! ````
//!
//! # Lines
//!
//! - Input is split on `\n`. A `\r` before the newline is part of the line.
//! - Lines that are empty after trimming, or start with `#` after trimming,
//!   are ignored everywhere except inside multiline strings.
//! - Whitespace means Unicode whitespace plus the control characters
//!   U+001C to U+001F, both for trimming and for splitting keys.
//! - At the top level, lines consisting only of `}` or `]` are ignored.
//!
//! # Keys and Type Annotations
//!
//! The key token runs from the first non-whitespace character to the next
//! whitespace. If it contains `!`, the text after the first `!` is the type
//! annotation:
//!
//! | Key token | Key | Annotation |
//! |-----------|-----|------------|
//! | `age` | `age` | none |
//! | `age!int` | `age` | `int` |
//! | `when!date!utc` | `when` | `date!utc` |
//! | `raw!` | `raw` | empty string |
//!
//! Annotations are carried through untouched. The parser never converts a
//! value according to its annotation; `age!int 30` holds the text `30`.
//! The one exception is an annotation of ASCII digits on a multiline
//! string, which sets a dedent amount. Other Unicode digits do not count.
//!
//! # Values
//!
//! The text after the key (leading whitespace removed) is checked in this
//! order:
//!
//! | Value text | Form | Ends at |
//! |------------|------|---------|
//! | starts with ```` ``` ```` | multiline string | a line that trims to ```` ``` ```` |
//! | exactly `{` | block | a line that trims to `}` |
//! | exactly `[` | list | a line that trims to `]` |
//! | starts with `[` and ends with `]` | inline list | same line |
//! | anything else | scalar | same line |
//!
//! Scalars keep the value text verbatim, including trailing whitespace.
//! A key with no value text has the empty scalar as its value.
//!
//! ## Blocks
//!
//! Every line of a block is itself a key line, so blocks nest freely and
//! may contain lists and multiline strings. A key assigned twice in the same
//! block keeps the last value at the position of its first assignment.
//!
//! ## Lists
//!
//! Each line of a list body is one element:
//!
//! - a line shaped like `[a, b]` is an inline list element,
//! - a line that trims to `{` opens a block element,
//! - anything else is a scalar element, trimmed.
//!
//! List elements are not key lines: `name value` inside a list is the
//! single scalar `"name value"`.
//!
//! ## Inline Lists
//!
//! The text between the brackets is split on every `,` and each piece is
//! trimmed. There is no quoting, so a comma can never be part of an inline
//! element. `[]` and `[   ]` are empty lists; `[a,,b]` has an empty middle
//! element.
//!
//! ## Multiline Strings
//!
//! Lines after the opening fence are collected verbatim and joined with
//! `\n`. Anything after the opening ```` ``` ```` on the key line is
//! ignored. With a numeric annotation `N`, the first `N` characters of each
//! line are dropped; shorter lines are kept whole.
//!
//! # Leniency
//!
//! A block, list or multiline string still open at the end of input is
//! closed there with whatever it collected. This is not an error.
//!
//! Nesting is the exception. Blocks and lists opened more than
//! [`DEFAULT_MAX_DEPTH`](crate::DEFAULT_MAX_DEPTH) levels deep are rejected
//! unless [`ParseOptions`](crate::ParseOptions) sets another limit.
