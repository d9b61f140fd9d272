use std::{
    borrow::Cow,
    fmt::{Display, Formatter},
};

/// Quote character used by a quoted string.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StringQuote {
    /// `'`
    Single,
    /// `"`
    Double,
}

impl StringQuote {
    pub(crate) fn from_char(c: char) -> Option<Self> {
        match c {
            '\'' => Some(StringQuote::Single),
            '"' => Some(StringQuote::Double),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            StringQuote::Single => '\'',
            StringQuote::Double => '"',
        }
    }
}

/// A lexical unit of the `.ini` source.
///
/// Unquoted runs are classified speculatively (booleans / integers / decimals / identifiers);
/// the [`parser`](struct.IniParser.html) decides, according to its options, whether the classification is used.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Token<'s> {
    /// Comment delimiter (`';'` / `'#'`).
    Comment(char),
    /// `"\r"`, `"\n"` or `"\r\n"`.
    NewLine,
    /// `'['`
    SectionStart,
    /// `']'`
    SectionEnd,
    /// `'='`
    Separator,
    /// Quoted string with escape sequences resolved.
    /// Borrowed from the source if it contained no escape sequences.
    Quoted { value: Cow<'s, str>, quote: StringQuote },
    /// Signed / unsigned integer; the sign, if any, is part of the text.
    Integer(&'s str),
    /// Floating point number.
    Decimal(&'s str),
    /// `false` / `no`, case-insensitive.
    False(&'s str),
    /// `true` / `yes`, case-insensitive.
    True(&'s str),
    /// Run of non-newline whitespace.
    Whitespace(&'s str),
    /// Run of alphanumeric characters, `'_'` and `'-'`.
    Identifier(&'s str),
    /// Any other run of characters.
    Text(&'s str),
}

impl<'s> Token<'s> {
    /// Returns the unquoted text of the token for use as a sole value:
    /// the decoded contents of quoted strings, the literal text of everything else.
    pub(crate) fn value_text(&self) -> Cow<'s, str> {
        match self {
            Token::Quoted { value, .. } => value.clone(),
            Token::Integer(text)
            | Token::Decimal(text)
            | Token::False(text)
            | Token::True(text)
            | Token::Whitespace(text)
            | Token::Identifier(text)
            | Token::Text(text) => Cow::Borrowed(*text),
            structural => Cow::Owned(structural.to_string()),
        }
    }

    pub(crate) fn is_whitespace(&self) -> bool {
        matches!(self, Token::Whitespace(_))
    }
}

impl<'s> Display for Token<'s> {
    /// Writes the literal text of the token.
    /// Quoted strings are written in their quotes, without re-escaping.
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Token::Comment(c) => write!(f, "{}", c),
            Token::NewLine => writeln!(f),
            Token::SectionStart => write!(f, "["),
            Token::SectionEnd => write!(f, "]"),
            Token::Separator => write!(f, "="),
            Token::Quoted { value, quote } => {
                write!(f, "{}{}{}", quote.as_char(), value, quote.as_char())
            }
            Token::Integer(text)
            | Token::Decimal(text)
            | Token::False(text)
            | Token::True(text)
            | Token::Whitespace(text)
            | Token::Identifier(text)
            | Token::Text(text) => write!(f, "{}", text),
        }
    }
}

/// A [`token`](enum.Token.html) and its location in the source string.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PositionedToken<'s> {
    pub token: Token<'s>,
    /// Byte offset of the first character of the token.
    pub position: usize,
    /// Line of the first character of the token (1-based).
    pub line: u32,
}
