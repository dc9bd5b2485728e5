//! Input cursor shared by every parsing stage.

/// Character cursor over Maple source.
///
/// Owns the source as a `Vec<char>` for index-based navigation and tracks
/// the current 1-based line, incremented each time a consumed character is
/// a newline. All other parsing stages observe position only through these
/// primitives; none of them keep position state of their own.
#[derive(Debug)]
pub struct Cursor {
    chars: Vec<char>,
    pos: usize,
    line: usize,
}

impl Cursor {
    /// Create a cursor positioned at the start of `source`.
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
        }
    }

    /// Current character, or `'\0'` at end of input.
    pub fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.chars[self.pos]
        }
    }

    /// Character `n` places ahead of the current one, `'\0'` past the end.
    pub fn peek_ahead(&self, n: usize) -> char {
        if self.pos + n >= self.chars.len() {
            '\0'
        } else {
            self.chars[self.pos + n]
        }
    }

    /// Whether the upcoming characters match `literal` exactly.
    pub fn starts_with(&self, literal: &str) -> bool {
        literal
            .chars()
            .enumerate()
            .all(|(i, c)| self.peek_ahead(i) == c)
    }

    /// Consume the current character, tracking line increments.
    pub fn advance(&mut self) {
        if !self.is_at_end() {
            if self.chars[self.pos] == '\n' {
                self.line += 1;
            }
            self.pos += 1;
        }
    }

    /// Consume `literal` if the upcoming characters match it exactly.
    /// Consumes nothing and returns `false` otherwise.
    pub fn eat(&mut self, literal: &str) -> bool {
        if self.starts_with(literal) {
            for _ in literal.chars() {
                self.advance();
            }
            true
        } else {
            false
        }
    }

    /// Consume characters while `pred` holds, returning the consumed run.
    pub fn consume_while<F>(&mut self, pred: F) -> String
    where
        F: Fn(char) -> bool,
    {
        let mut run = String::new();
        while !self.is_at_end() && pred(self.peek()) {
            run.push(self.peek());
            self.advance();
        }
        run
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// Current 1-based line number.
    pub fn line(&self) -> usize {
        self.line
    }
}
