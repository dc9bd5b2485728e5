//! Maple Parser
//!
//! Lossless parser for the Maple template language: HTML-flavored markup
//! with `{{ expression }}` interpolation and opaque `#macro` tags.
//!
//! The parser keeps enough positional and whitespace metadata (attribute
//! whitespace runs, residual tag whitespace, 1-based line numbers) for a
//! downstream formatter or compiler to reconstruct the original source
//! byte for byte. Comments are the only construct that is dropped.
//!
//! # Example
//!
//! ```
//! use maple_parser::{parse, Node};
//!
//! let nodes = parse("<div class=\"box\">{{count}}</div>").unwrap();
//! assert_eq!(nodes.len(), 1);
//!
//! match &nodes[0] {
//!     Node::Element(el) => {
//!         assert_eq!(el.tag, "div");
//!         assert_eq!(el.children, vec![Node::Interpolation("count".into())]);
//!     }
//!     other => panic!("expected element, got {other:?}"),
//! }
//! ```

pub mod ast;
pub mod cursor;
pub mod parser;

pub use ast::{
    is_void_element, Attribute, AttributeMeta, AttributeValue, Element, ElementMeta, Node,
    VOID_ELEMENTS,
};
pub use parser::Parser;

/// Parse error with position information.
///
/// The first structural violation halts parsing; no partial tree is
/// returned. `line` is 1-based and points at the construct the message
/// names (an unterminated element reports its opening tag's line).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Parse error at line {line}: {message}")]
pub struct ParseError {
    pub message: String,
    pub line: usize,
}

/// Parse Maple source into an ordered sequence of top-level nodes.
///
/// Convenience wrapper around [`Parser::parse`].
pub fn parse(source: &str) -> Result<Vec<Node>, ParseError> {
    Parser::parse(source)
}
