//! Delimiter-based locator tokenizer.

/// Delimiter that ended a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// `:`
    Colon,
    /// `;`
    Semicolon,
    /// `/`, or `//` consumed as one delimiter.
    Slash,
}

/// A segment of the locator between two delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Text of the segment, without the delimiter.
    pub text: &'a str,
    /// Byte offset of the first character of the segment.
    pub start: usize,
    /// Byte offset just past the delimiter (or the input length).
    pub end: usize,
    /// The delimiter that ended the segment, `None` at end of input.
    pub delimiter: Option<Delimiter>,
}

/// Extract the next token starting at byte offset `pos`.
///
/// Never fails: at end of input the token is empty and `end` equals the
/// input length. Delimiters are ASCII, so every returned offset is a valid
/// `char` boundary.
pub fn next_token(input: &str, pos: usize) -> Token<'_> {
    let bytes = input.as_bytes();
    let start = pos.min(bytes.len());
    let mut cursor = start;

    while cursor < bytes.len() {
        let delimiter = match bytes[cursor] {
            b':' => Delimiter::Colon,
            b';' => Delimiter::Semicolon,
            b'/' => Delimiter::Slash,
            _ => {
                cursor += 1;
                continue;
            }
        };

        let text = &input[start..cursor];
        let mut end = cursor + 1;
        if delimiter == Delimiter::Slash && bytes.get(end) == Some(&b'/') {
            end += 1;
        }

        return Token {
            text,
            start,
            end,
            delimiter: Some(delimiter),
        };
    }

    Token {
        text: &input[start..],
        start,
        end: bytes.len(),
        delimiter: None,
    }
}

/// Stateful cursor over a locator.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
    last: Option<Delimiter>,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer positioned at the start of `input`.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            last: None,
        }
    }

    /// Consume the next token.
    pub fn next_token(&mut self) -> Token<'a> {
        let token = next_token(self.input, self.pos);
        self.pos = token.end;
        self.last = token.delimiter;
        token
    }

    /// Whether unconsumed input remains.
    pub fn has_remaining(&self) -> bool {
        self.pos < self.input.len()
    }

    /// The delimiter that ended the most recently consumed token.
    pub fn last_delimiter(&self) -> Option<Delimiter> {
        self.last
    }

    /// Whether the last token ended with `delimiter` and more input follows.
    pub fn continues_with(&self, delimiter: Delimiter) -> bool {
        self.last == Some(delimiter) && self.has_remaining()
    }

    /// The unconsumed tail of the input.
    pub fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }
}
