/// Logs a debug message if the `logging` feature is enabled.
macro_rules! ini_debug {
    ($($arg:tt)+) => {
        #[cfg(feature = "logging")]
        log::debug!($($arg)+);
    };
}

/// Logs a trace message if the `logging` feature is enabled.
macro_rules! ini_trace {
    ($($arg:tt)+) => {
        #[cfg(feature = "logging")]
        log::trace!($($arg)+);
    };
}

pub(crate) fn is_new_line(c: char) -> bool {
    c == '\n' || c == '\r'
}

/// Whitespace, except new lines.
pub(crate) fn is_whitespace(c: char) -> bool {
    c.is_whitespace() && !is_new_line(c)
}

pub(crate) fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}

/// Characters which end an unquoted run of text.
pub(crate) fn is_text_terminator(c: char) -> bool {
    c.is_whitespace() || c == '[' || c == ']' || c == '='
}

pub(crate) fn is_identifier(string: &str) -> bool {
    !string.is_empty() && string.chars().all(is_identifier_char)
}
