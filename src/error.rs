use {crate::IniPath, thiserror::Error};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum IniErrorKind {
    /// The source bytes could not be decoded to a string.
    #[error("Source bytes could not be decoded using the detected / provided encoding.")]
    Encoding,
    /// Unexpected new line or end of file encountered before the closing quote of a quoted string.
    #[error("Unexpected new line or end of file encountered when parsing a quoted string.")]
    UnterminatedString,
    /// Comment delimiter encountered in a section header.
    #[error("Comment delimiter encountered in a section header.")]
    CommentInSectionHeader,
    /// Comment delimiter encountered after a key, before a key-value separator.
    #[error("Comment delimiter encountered after a key, before a key-value separator.")]
    CommentInterruptedKey,
    /// Unexpected new line or end of file encountered before a section end delimiter.
    #[error("Unexpected new line or end of file encountered before a section end delimiter.")]
    IncompleteSectionHeader,
    /// Unexpected new line or end of file encountered before a key-value separator.
    #[error("Unexpected new line or end of file encountered before a key-value separator.")]
    IncompleteKey,
    /// Section start delimiter encountered, but sections are not allowed by options.
    #[error("Section start delimiter encountered, but sections are not allowed by options.")]
    SectionsNotAllowed,
    /// Unexpected section start / end delimiter encountered.
    #[error("Unexpected section start / end delimiter encountered.")]
    TooManyBrackets,
    /// Key-value separator encountered without a preceding key.
    #[error("Key-value separator encountered without a preceding key.")]
    NoKeyAvailable,
    /// A value encountered where a key or a key-value separator was expected.
    #[error("Unexpected value encountered - expected a key or a key-value separator.")]
    MissingSeparator,
    /// Invalid section name - expected an identifier.
    #[error("Invalid section name - expected an identifier.")]
    InvalidSectionName,
    /// Invalid key - expected an identifier.
    #[error("Invalid key - expected an identifier.")]
    InvalidKeyName,
}

/// An error returned by the `.ini` [`parser`](struct.IniParser.html) and the [`decoder`](fn.decode.html).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
#[error("INI parse error. Line: {line}. {error}")]
pub struct IniError {
    /// Line in the source string where the error occured (1-based).
    pub line: u32,
    /// Actual error.
    pub error: IniErrorKind,
}

impl IniError {
    pub(crate) fn new(error: IniErrorKind, line: u32) -> Self {
        Self { line, error }
    }
}

/// An error returned by [`IniMap`](struct.IniMap.html) typed getters.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum IniMapGetError {
    /// The key does not exist in the map.
    #[error("Key does not exist in the map.")]
    KeyDoesNotExist,
    /// Value is of incorrect type.
    /// Contains the actual value type.
    #[error("Value is of incorrect type ({0}).")]
    IncorrectValueType(crate::IniValueType),
}

/// An error returned by [`to_ini_string`](fn.to_ini_string.html).
#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum ToIniStringError {
    /// A key or a section name is not a valid `.ini` identifier.
    /// Contains the path to the offending element.
    #[error("Key or section name is not a valid identifier (at {0}).")]
    InvalidIdentifier(IniPath),
    /// The value cannot be represented in an `.ini` config.
    /// Contains the path to the offending element.
    #[error("Value type is not supported in INI configs (at {0}).")]
    TypeUnsupported(IniPath),
    /// General write error (out of memory?).
    #[error("General write error (out of memory?).")]
    WriteError,
}
