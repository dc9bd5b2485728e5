//! Parse tree for Maple documents.
//!
//! Nodes carry the whitespace and position metadata needed to reconstruct
//! the original source exactly. String content is stored raw: no escape
//! decoding, no trimming, no entity handling.

/// A node in the parsed document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A maximal run of literal text, newlines and indentation included.
    /// An adjacent comment, element, or interpolation always starts a new
    /// text run; fragments are never merged across those boundaries.
    Text(String),

    /// An element with attributes and children.
    Element(Element),

    /// Raw text between `{{` and the first following `}}`, untrimmed and
    /// unparsed.
    Interpolation(String),
}

/// An element node.
///
/// Macro elements (tag starting with `#`) reach here like any other
/// element, but their body was scanned verbatim and is at most one
/// `Text` child.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    pub attributes: Vec<Attribute>,
    pub children: Vec<Node>,
    pub meta: ElementMeta,
}

/// Positional and whitespace metadata for an element.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementMeta {
    /// 1-based line of the opening `<`.
    pub line: usize,

    /// Whitespace immediately before the tag's closing bracket that was
    /// not already claimed by the last attribute.
    pub space: Option<String>,

    /// Lint message set when a void element was written without a
    /// self-closing slash. Never a parse failure.
    pub warn: Option<String>,
}

/// An attribute on an element.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub value: AttributeValue,
    pub meta: AttributeMeta,
}

/// Attribute value classification.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// Bare name with no `=value`, implicitly true.
    Flag,

    /// Literal `true` or `false` keyword.
    Boolean(bool),

    /// All-digit value.
    Integer(i64),

    /// Raw inner text of a quoted value. No escape decoding.
    StringLiteral(String),

    /// Raw inner text of a `{{ ... }}` value.
    Expression(String),
}

/// Positional and whitespace metadata for an attribute.
///
/// `spaces` holds the inter-token whitespace runs in source order:
/// `[leading, trailing]` for a flag, `[leading, before `=`, after `=`]`
/// for a valued attribute. Across an attribute list every whitespace run
/// is claimed exactly once — a flag keeps its trailing run, a valued
/// attribute leaves it to the next attribute's leading slot (or to the
/// element's `space`).
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeMeta {
    /// 1-based line of the attribute name.
    pub line: usize,
    pub spaces: Vec<String>,
}

/// HTML5 void elements (self-closing, no children).
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Check if a tag name is an HTML5 void element.
pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}
