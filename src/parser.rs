//! Document parser for Maple.
//!
//! A single hand-written pass fuses tokenizing and tree building: the
//! content, element, and attribute sub-parsers all advance one shared
//! [`Cursor`]. Parsing is fail-fast — the first structural violation
//! returns a [`ParseError`] and no partial tree.
//!
//! Element nesting maps directly onto recursion depth. There is no
//! explicit depth bound; callers feeding adversarial input should cap
//! nesting themselves before parsing.

use crate::ast::{is_void_element, Attribute, AttributeMeta, AttributeValue, Element, ElementMeta, Node};
use crate::cursor::Cursor;
use crate::ParseError;

/// Maple document parser.
///
/// Converts source text into an ordered sequence of [`Node`]s, retaining
/// the whitespace and line metadata described on the tree types.
pub struct Parser {
    cursor: Cursor,
}

impl Parser {
    /// Parse source into the top-level node sequence.
    pub fn parse(source: &str) -> Result<Vec<Node>, ParseError> {
        let mut parser = Parser {
            cursor: Cursor::new(source),
        };

        let nodes = parser.parse_content()?;

        // Structured content stops at any `</`; at top level nothing can
        // claim it, so a leftover closing tag is a stray one.
        if !parser.cursor.is_at_end() {
            return Err(parser.error("expected opening HTML tag"));
        }

        Ok(nodes)
    }

    // =========================================================================
    // Content
    // =========================================================================

    /// Parse structured content until end of input or an unconsumed `</`.
    ///
    /// The caller (top-level driver or element parser) reads the closing
    /// tag itself, so mismatches can be attributed to the opening tag.
    fn parse_content(&mut self) -> Result<Vec<Node>, ParseError> {
        let mut nodes = Vec::new();
        let mut text = String::new();

        while !self.cursor.is_at_end() {
            if self.cursor.starts_with("<!--") {
                flush_text(&mut nodes, &mut text);
                self.skip_comment();
            } else if self.cursor.starts_with("</") {
                break;
            } else if self.cursor.peek() == '<' {
                if !is_name_start(self.cursor.peek_ahead(1)) {
                    return Err(self.error("expected opening HTML tag"));
                }
                flush_text(&mut nodes, &mut text);
                let element = self.parse_element()?;
                nodes.push(Node::Element(element));
            } else if self.cursor.starts_with("{{") {
                flush_text(&mut nodes, &mut text);
                let expression = self.read_interpolation()?;
                nodes.push(Node::Interpolation(expression));
            } else {
                // Literal character, including a lone `{`.
                text.push(self.cursor.peek());
                self.cursor.advance();
            }
        }

        flush_text(&mut nodes, &mut text);
        Ok(nodes)
    }

    /// Parse a macro body as raw text up to the literal `</tag>` closer.
    ///
    /// Nothing inside is interpreted — tag-like sequences, braces, and
    /// mismatched closers all pass through as text. The closer itself is
    /// left for the element parser to consume.
    fn parse_verbatim(&mut self, tag: &str, line: usize) -> Result<Vec<Node>, ParseError> {
        let closer = format!("</{tag}>");
        let mut nodes = Vec::new();
        let mut text = String::new();

        while !self.cursor.is_at_end() {
            if self.cursor.starts_with(&closer) {
                flush_text(&mut nodes, &mut text);
                return Ok(nodes);
            }
            text.push(self.cursor.peek());
            self.cursor.advance();
        }

        Err(ParseError {
            message: format!("expected closing tag for \"{tag}\""),
            line,
        })
    }

    /// Consume `<!--` through the first following `-->`, discarding it.
    ///
    /// An unterminated comment runs to end of input; the enclosing
    /// element then reports its missing closing tag.
    fn skip_comment(&mut self) {
        self.cursor.eat("<!--");
        while !self.cursor.is_at_end() && !self.cursor.eat("-->") {
            self.cursor.advance();
        }
    }

    /// Consume `{{ ... }}` and return the raw inner text, untrimmed.
    fn read_interpolation(&mut self) -> Result<String, ParseError> {
        let line = self.cursor.line();
        self.cursor.eat("{{");

        let mut expression = String::new();
        while !self.cursor.is_at_end() {
            if self.cursor.eat("}}") {
                return Ok(expression);
            }
            expression.push(self.cursor.peek());
            self.cursor.advance();
        }

        Err(ParseError {
            message: "expected closing for interpolation".into(),
            line,
        })
    }

    // =========================================================================
    // Elements
    // =========================================================================

    /// Parse one element starting at `<`.
    ///
    /// Handles self-closing tags, void elements written without a slash
    /// (parsed as childless, with a warn on the metadata), and macro
    /// elements whose body is scanned verbatim.
    fn parse_element(&mut self) -> Result<Element, ParseError> {
        let line = self.cursor.line();
        self.cursor.advance(); // consume `<`

        let tag = self.read_name();
        if tag.is_empty() || tag == "#" {
            return Err(ParseError {
                message: "expected opening HTML tag".into(),
                line,
            });
        }

        let (attributes, residual, self_closing) = self.parse_attribute_list(&tag, line)?;
        let space = if residual.is_empty() {
            None
        } else {
            Some(residual)
        };

        if self_closing {
            return Ok(Element {
                tag,
                attributes,
                children: Vec::new(),
                meta: ElementMeta {
                    line,
                    space,
                    warn: None,
                },
            });
        }

        if is_void_element(&tag) {
            let warn = format!(
                "void element \"{tag}\" not following XHTML standard. Please replace <{tag}> with <{tag}/>"
            );
            return Ok(Element {
                tag,
                attributes,
                children: Vec::new(),
                meta: ElementMeta {
                    line,
                    space,
                    warn: Some(warn),
                },
            });
        }

        let children = if tag.starts_with('#') {
            self.parse_verbatim(&tag, line)?
        } else {
            self.parse_content()?
        };

        self.expect_closing_tag(&tag, line)?;

        Ok(Element {
            tag,
            attributes,
            children,
            meta: ElementMeta {
                line,
                space,
                warn: None,
            },
        })
    }

    /// Consume and validate the `</tag>` closer for an element opened at
    /// `line`. All failures are attributed to the opening tag.
    fn expect_closing_tag(&mut self, tag: &str, line: usize) -> Result<(), ParseError> {
        if !self.cursor.eat("</") {
            // Content stopped at end of input without seeing a closer.
            return Err(unterminated(tag, line));
        }

        let actual = self.read_name();
        if actual.is_empty() || actual == "#" {
            return Err(unterminated(tag, line));
        }
        if actual != tag {
            return Err(ParseError {
                message: format!("closing tag \"{actual}\" did not match opening tag \"{tag}\""),
                line,
            });
        }
        if !self.cursor.eat(">") {
            return Err(unterminated(tag, line));
        }

        Ok(())
    }

    /// Read a tag name: an identifier run, optionally prefixed with a
    /// single `#` marking a macro element.
    fn read_name(&mut self) -> String {
        let mut name = String::new();
        if self.cursor.peek() == '#' {
            name.push('#');
            self.cursor.advance();
        }
        name.push_str(&self.cursor.consume_while(is_name_char));
        name
    }

    // =========================================================================
    // Attributes
    // =========================================================================

    /// Parse the attribute list of an opening tag through its `>` or `/>`.
    ///
    /// Returns the attributes, the residual whitespace before the closing
    /// bracket, and whether the tag was self-closing.
    fn parse_attribute_list(
        &mut self,
        tag: &str,
        line: usize,
    ) -> Result<(Vec<Attribute>, String, bool), ParseError> {
        let mut attributes = Vec::new();
        let mut leading = self.take_whitespace();

        loop {
            if self.cursor.eat("/>") {
                return Ok((attributes, leading, true));
            }
            if self.cursor.eat(">") {
                return Ok((attributes, leading, false));
            }
            if self.cursor.is_at_end() {
                return Err(unterminated(tag, line));
            }

            let attribute = self.parse_attribute(std::mem::take(&mut leading))?;
            attributes.push(attribute);

            // After a flag this run is empty (the flag claimed it); after
            // a valued attribute it becomes the next leading slot, or the
            // element's residual space if the bracket comes next.
            leading = self.take_whitespace();
        }
    }

    /// Parse one `name` or `name=value` attribute. `leading` is the
    /// whitespace run preceding the name, captured by the caller.
    fn parse_attribute(&mut self, leading: String) -> Result<Attribute, ParseError> {
        let line = self.cursor.line();

        let name = self.cursor.consume_while(is_name_char);
        if name.is_empty() {
            return Err(self.error("expected attribute name"));
        }

        let after_name = self.take_whitespace();

        if self.cursor.eat("=") {
            let before_value = self.take_whitespace();
            let value = self.parse_attribute_value(&name)?;
            return Ok(Attribute {
                name,
                value,
                meta: AttributeMeta {
                    line,
                    spaces: vec![leading, after_name, before_value],
                },
            });
        }

        // Flag attribute: the trailing run belongs to it.
        Ok(Attribute {
            name,
            value: AttributeValue::Flag,
            meta: AttributeMeta {
                line,
                spaces: vec![leading, after_name],
            },
        })
    }

    /// Classify and consume one attribute value, first match wins:
    /// quoted string, all-digit integer, `{{ ... }}` expression, or a
    /// `true`/`false` keyword.
    fn parse_attribute_value(&mut self, name: &str) -> Result<AttributeValue, ParseError> {
        let line = self.cursor.line();
        let quote = self.cursor.peek();

        if quote == '"' || quote == '\'' {
            self.cursor.advance();
            // Raw up to the matching quote, no escape processing.
            let text = self.cursor.consume_while(|c| c != quote);
            if self.cursor.is_at_end() {
                return Err(malformed_value(name, line));
            }
            self.cursor.advance(); // closing quote
            return Ok(AttributeValue::StringLiteral(text));
        }

        if quote.is_ascii_digit() {
            let digits = self.cursor.consume_while(|c| c.is_ascii_digit());
            let value = digits.parse().map_err(|_| malformed_value(name, line))?;
            return Ok(AttributeValue::Integer(value));
        }

        if self.cursor.starts_with("{{") {
            let expression = self.read_interpolation()?;
            return Ok(AttributeValue::Expression(expression));
        }

        match self.cursor.consume_while(is_name_char).as_str() {
            "true" => Ok(AttributeValue::Boolean(true)),
            "false" => Ok(AttributeValue::Boolean(false)),
            _ => Err(malformed_value(name, line)),
        }
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn take_whitespace(&mut self) -> String {
        self.cursor.consume_while(|c| c.is_whitespace())
    }

    fn error(&self, message: &str) -> ParseError {
        ParseError {
            message: message.into(),
            line: self.cursor.line(),
        }
    }
}

/// Flush the buffered text run as a `Text` node, if any.
fn flush_text(nodes: &mut Vec<Node>, text: &mut String) {
    if !text.is_empty() {
        nodes.push(Node::Text(std::mem::take(text)));
    }
}

fn unterminated(tag: &str, line: usize) -> ParseError {
    ParseError {
        message: format!("expected closing tag for \"{tag}\""),
        line,
    }
}

fn malformed_value(name: &str, line: usize) -> ParseError {
    ParseError {
        message: format!("expected value for attribute \"{name}\""),
        line,
    }
}

/// Characters allowed inside tag and attribute names.
fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '.' | '_' | '-')
}

/// Characters allowed to start a tag name after `<`. Digits cannot.
fn is_name_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '#'
}
