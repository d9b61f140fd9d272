use {
    crate::{util::*, IniError, IniErrorKind, PositionedToken, StringQuote, Token},
    std::{borrow::Cow, iter::FusedIterator},
};

/// Splits the `.ini` source string into [`tokens`](enum.Token.html).
///
/// Pull-based: every call to [`next_token`](#method.next_token) consumes exactly one token.
/// Stops at the end of the source, or permanently after the first error.
#[derive(Clone, Debug)]
pub struct Tokenizer<'s> {
    /// Source `.ini` string.
    source: &'s str,
    /// Byte offset of the next unconsumed character.
    position: usize,
    /// Current line (1-based).
    line: u32,
    finished: bool,
}

impl<'s> Tokenizer<'s> {
    pub fn new(source: &'s str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            finished: false,
        }
    }

    /// Current line (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Byte offset of the next unconsumed character.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Rewinds the tokenizer to the start of the source string.
    pub fn restart(&mut self) {
        self.position = 0;
        self.line = 1;
        self.finished = false;
    }

    /// Consumes and returns the next token, or `None` at the end of the source string.
    ///
    /// The only error the tokenizer reports is an unterminated quoted string.
    pub fn next_token(&mut self) -> Result<Option<PositionedToken<'s>>, IniError> {
        if self.finished {
            return Ok(None);
        }

        let position = self.position;
        let line = self.line;

        let c = match self.peek() {
            Some(c) => c,
            None => {
                self.finished = true;
                return Ok(None);
            }
        };

        let token = match c {
            ';' | '#' => {
                self.advance(c);
                Token::Comment(c)
            }
            '[' => {
                self.advance(c);
                Token::SectionStart
            }
            ']' => {
                self.advance(c);
                Token::SectionEnd
            }
            '=' => {
                self.advance(c);
                Token::Separator
            }
            '"' | '\'' => match self.quoted(c) {
                Ok(token) => token,
                Err(err) => {
                    self.finished = true;
                    return Err(err);
                }
            },
            c if is_whitespace(c) => self.whitespace(),
            '\r' => {
                self.advance(c);

                // Eat a line feed if the previous char was a carriage return.
                if self.peek() == Some('\n') {
                    self.advance('\n');
                }

                self.line += 1;
                Token::NewLine
            }
            '\n' => {
                self.advance(c);
                self.line += 1;
                Token::NewLine
            }
            _ => self.text(),
        };

        Ok(Some(PositionedToken {
            token,
            position,
            line,
        }))
    }

    fn rest(&self) -> &'s str {
        let source = self.source;
        &source[self.position..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn advance(&mut self, c: char) {
        self.position += c.len_utf8();
    }

    /// Consumes a quoted string, starting at the opening quote `quote_char`.
    /// Backslash escapes the matching quote and itself; any other backslash is kept as is.
    fn quoted(&mut self, quote_char: char) -> Result<Token<'s>, IniError> {
        let unterminated = IniError::new(IniErrorKind::UnterminatedString, self.line);

        let quote = match StringQuote::from_char(quote_char) {
            Some(quote) => quote,
            None => unreachable!("only called on a quote"),
        };

        self.advance(quote_char);

        let source = self.source;
        let start = self.position;

        // Only allocated if the string contains an escape sequence.
        let mut owned: Option<String> = None;

        let mut chars = source[start..].char_indices().peekable();

        while let Some((offset, c)) = chars.next() {
            if c == quote_char {
                let end = start + offset;
                self.position = end + c.len_utf8();

                let value = match owned {
                    Some(owned) => Cow::Owned(owned),
                    None => Cow::Borrowed(&source[start..end]),
                };

                return Ok(Token::Quoted { value, quote });
            } else if is_new_line(c) {
                return Err(unterminated);
            } else if c == '\\' {
                match chars.peek() {
                    Some(&(_, escaped)) if escaped == quote_char || escaped == '\\' => {
                        chars.next();

                        owned
                            .get_or_insert_with(|| source[start..start + offset].to_owned())
                            .push(escaped);
                    }
                    _ => {
                        if let Some(owned) = owned.as_mut() {
                            owned.push(c);
                        }
                    }
                }
            } else if let Some(owned) = owned.as_mut() {
                owned.push(c);
            }
        }

        Err(unterminated)
    }

    fn whitespace(&mut self) -> Token<'s> {
        let run = self.run(is_whitespace);
        Token::Whitespace(run)
    }

    fn text(&mut self) -> Token<'s> {
        let run = self.run(|c| !is_text_terminator(c));
        classify(run)
    }

    /// Consumes the longest run of characters matching `f`.
    fn run<F: Fn(char) -> bool>(&mut self, f: F) -> &'s str {
        let rest = self.rest();

        let len = rest
            .char_indices()
            .find(|(_, c)| !f(*c))
            .map(|(idx, _)| idx)
            .unwrap_or_else(|| rest.len());

        self.position += len;

        &rest[..len]
    }
}

impl<'s> Iterator for Tokenizer<'s> {
    type Item = Result<PositionedToken<'s>, IniError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

impl<'s> FusedIterator for Tokenizer<'s> {}

/// Classifies an unquoted run of text, case-insensitively for booleans.
pub(crate) fn classify(text: &str) -> Token<'_> {
    if text.eq_ignore_ascii_case("true") || text.eq_ignore_ascii_case("yes") {
        Token::True(text)
    } else if text.eq_ignore_ascii_case("false") || text.eq_ignore_ascii_case("no") {
        Token::False(text)
    } else if is_integer(text) {
        Token::Integer(text)
    } else if is_decimal(text) {
        Token::Decimal(text)
    } else if is_identifier(text) {
        Token::Identifier(text)
    } else {
        Token::Text(text)
    }
}

fn is_integer(text: &str) -> bool {
    text.parse::<i64>().is_ok() || text.parse::<u64>().is_ok()
}

/// `f64` parsing also accepts `inf` / `nan` spellings - require at least one digit.
/// Literals which overflow to infinity are not decimals.
fn is_decimal(text: &str) -> bool {
    text.bytes().any(|b| b.is_ascii_digit())
        && text.parse::<f64>().map_or(false, f64::is_finite)
}
