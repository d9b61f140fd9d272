mod fsm_state;

use {
    crate::{decode, IniEncoding, IniError, IniMap, IniOptions, IniValue, Tokenizer},
    fsm_state::*,
};

/// Event handler the [`parser`](struct.IniParser.html) passes the parsed sections and values to.
///
/// Implemented by [`IniMap`](struct.IniMap.html);
/// implement it to bind the parsed values directly to another representation.
pub trait IniConfig {
    /// Called at the end of a `[section]` header line.
    /// Following values, until the next section header, belong to this section.
    /// The `section` name is already case-normalized.
    fn start_section(&mut self, section: &str);

    /// Called once per key occurrence, when the key's value is complete.
    /// `section` is `None` for the root of the config.
    /// `section` and `key` are already case-normalized.
    fn add_value(&mut self, section: Option<&str>, key: &str, value: IniValue);
}

impl IniConfig for IniMap {
    fn start_section(&mut self, section: &str) {
        self.section_mut(section);
    }

    fn add_value(&mut self, section: Option<&str>, key: &str, value: IniValue) {
        match section {
            Some(section) => self.section_mut(section).insert(key, value),
            None => self.insert(key, value),
        };
    }
}

/// Parses the `.ini` config string, using the user-provided [`dialect options`](struct.IniOptions.html).
pub struct IniParser<'s> {
    /// Source `.ini` string tokenizer.
    tokenizer: Tokenizer<'s>,
    /// Parsing options as provided by the user.
    options: IniOptions,
}

impl<'s> IniParser<'s> {
    /// Creates a new [`parser`](struct.IniParser.html) from the `.ini` config `string`
    /// using default [`dialect options`](struct.IniOptions.html).
    ///
    /// A leading byte order mark (`U+FEFF`) is skipped.
    pub fn new(string: &'s str) -> Self {
        let string = string.strip_prefix('\u{feff}').unwrap_or(string);

        Self {
            tokenizer: Tokenizer::new(string),
            options: Default::default(),
        }
    }

    /// Sets the [`dialect options`](struct.IniOptions.html).
    ///
    /// Default: [`IniOptions::default()`](struct.IniOptions.html#impl-Default).
    pub fn options(mut self, options: IniOptions) -> Self {
        self.options = options;
        self
    }

    /// Consumes the parser and tries to parse the `.ini` config string into a new [`map`](struct.IniMap.html).
    pub fn parse(self) -> Result<IniMap, IniError> {
        let mut map = IniMap::new();
        self.parse_into(&mut map)?;
        Ok(map)
    }

    /// Consumes the parser and tries to parse the `.ini` config string, calling the methods on the passed `config` event handler.
    ///
    /// Stops at the first error; the `config` may have received some values by then.
    pub fn parse_into<C: IniConfig>(mut self, config: &mut C) -> Result<(), IniError> {
        ini_debug!("parsing .ini config with options {:?}", self.options);

        let mut fsm = IniParserFSM::new(self.options);

        // Read the tokens until EOF, process according to current state.
        while let Some(token) = self.tokenizer.next_token().map_err(Self::log_error)? {
            ini_trace!("line {}: {:?}", token.line, token.token);

            let line = token.line;

            fsm.process(token.token, config)
                .map_err(|err| Self::log_error(IniError::new(err, line)))?;
        }

        // The source need not end with a new line.
        fsm.finish(config)
            .map_err(|err| Self::log_error(IniError::new(err, self.tokenizer.line())))?;

        ini_debug!("parsed .ini config ({} lines)", self.tokenizer.line());

        Ok(())
    }

    fn log_error(err: IniError) -> IniError {
        ini_debug!("{}", err);
        err
    }
}

/// Parses the `.ini` config `string` using the [`dialect options`](struct.IniOptions.html).
pub fn parse(string: &str, options: IniOptions) -> Result<IniMap, IniError> {
    IniParser::new(string).options(options).parse()
}

impl IniMap {
    /// Tries to parse the `.ini` config string using default [`dialect options`](struct.IniOptions.html).
    pub fn from_ini(string: &str) -> Result<Self, IniError> {
        parse(string, IniOptions::default())
    }

    /// Tries to parse the `.ini` config string using the [`dialect options`](struct.IniOptions.html).
    pub fn from_ini_opts(string: &str, options: IniOptions) -> Result<Self, IniError> {
        parse(string, options)
    }

    /// Tries to decode the `.ini` config `bytes` and parse them using the [`dialect options`](struct.IniOptions.html).
    /// If `encoding` is `None`, it is detected from the byte order mark / the first bytes of the source.
    pub fn from_ini_bytes(
        bytes: &[u8],
        encoding: Option<IniEncoding>,
        options: IniOptions,
    ) -> Result<Self, IniError> {
        let string = decode(bytes, encoding)?;
        parse(&string, options)
    }
}
