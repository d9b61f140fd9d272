use {
    super::IniConfig,
    crate::{IniErrorKind, IniOptions, IniValue, Token},
    std::fmt::Write,
};

/// `.ini` parser FSM states.
///
/// States are kept on a stack: the bottom is always `Root`,
/// line-scoped states (headers, keys, values, comments) are pushed on top of it
/// and popped at the end of the line.
#[derive(Clone, PartialEq, Debug)]
pub(super) enum IniParserFSMState<'s> {
    /// We are in the root of the config or in a section (contains the normalized section name).
    /// Accept whitespace and new lines,
    /// keys (-> Key),
    /// section start delimiters (`'['`) (if supported) (-> SectionHeader),
    /// comment delimiters (-> Comment).
    Root(Option<String>),
    /// We encountered a section start delimiter.
    /// Accept whitespace (except new lines),
    /// section names (-> SectionName),
    /// section end delimiters (`']'`) (if section reset is supported) (-> AfterSectionHeader).
    SectionHeader,
    /// We parsed the section name.
    /// Accept whitespace (except new lines),
    /// section end delimiters (`']'`) (-> AfterSectionHeader).
    SectionName(&'s str),
    /// We parsed the section header, the section starts on the next line.
    /// `None` for a section reset.
    /// Accept whitespace,
    /// new lines (-> Root),
    /// comment delimiters (if trailing comments are supported) (-> Comment).
    AfterSectionHeader(Option<&'s str>),
    /// We parsed a key.
    /// Accept whitespace (except new lines),
    /// key-value separators (`'='`) (-> Value),
    /// new lines (if missing values are supported) (-> Root),
    /// comment delimiters (if trailing comments and missing values are supported) (-> Comment).
    Key(&'s str),
    /// We parsed a key-value separator and accumulate the value tokens.
    /// Accept new lines (-> Root),
    /// comment delimiters (if trailing comments are supported) (-> Comment),
    /// everything else becomes part of the value.
    Value { key: &'s str, tokens: Vec<Token<'s>> },
    /// We encountered a comment delimiter and skip the rest of the line.
    /// Accept new lines (-> Root),
    /// everything else becomes part of the (discarded) comment.
    Comment(Vec<Token<'s>>),
}

/// Stack of parser FSM states.
pub(super) struct IniParserFSM<'s> {
    stack: Vec<IniParserFSMState<'s>>,
    options: IniOptions,
}

impl<'s> IniParserFSM<'s> {
    pub(super) fn new(options: IniOptions) -> Self {
        Self {
            stack: vec![IniParserFSMState::Root(None)],
            options,
        }
    }

    /// Current state (top of the stack).
    pub(super) fn state(&self) -> &IniParserFSMState<'s> {
        match self.stack.last() {
            Some(state) => state,
            None => unreachable!("the root state is never popped"),
        }
    }

    /// Current section name, if any.
    fn section(&self) -> Option<&str> {
        match self.stack.first() {
            Some(IniParserFSMState::Root(section)) => section.as_deref(),
            _ => None,
        }
    }

    fn push(&mut self, state: IniParserFSMState<'s>) {
        self.stack.push(state);
    }

    /// Pops the current state, returning to the one below.
    fn pop(&mut self) {
        debug_assert!(self.stack.len() > 1);
        self.stack.pop();
    }

    fn replace(&mut self, state: IniParserFSMState<'s>) {
        debug_assert!(self.stack.len() > 1);

        if let Some(top) = self.stack.last_mut() {
            *top = state;
        }
    }

    /// Processes the next `token`, calling the methods on the `config` event handler.
    /// Returns an error if the token is not valid in the current state.
    pub(super) fn process<C: IniConfig>(
        &mut self,
        token: Token<'s>,
        config: &mut C,
    ) -> Result<(), IniErrorKind> {
        use {IniErrorKind::*, IniParserFSMState::*};

        let options = self.options;

        // Comment delimiters not allowed by options are normal characters.
        let token = match token {
            Token::Comment('#') if !options.is_comment('#') => Token::Text("#"),
            token => token,
        };

        match self.state() {
            Root(_) => match token {
                Token::Whitespace(_) | Token::NewLine => {}
                Token::Identifier(key) => self.push(Key(key)),
                Token::SectionStart => {
                    if !options.sections() {
                        return Err(SectionsNotAllowed);
                    }

                    self.push(SectionHeader);
                }
                Token::Comment(_) => self.push(Comment(Vec::new())),
                Token::Separator => return Err(NoKeyAvailable),
                Token::Integer(_) | Token::Decimal(_) | Token::True(_) | Token::False(_) => {
                    return Err(MissingSeparator)
                }
                Token::SectionEnd | Token::Quoted { .. } | Token::Text(_) => {
                    return Err(InvalidKeyName)
                }
            },
            SectionHeader => match token {
                Token::Whitespace(_) => {}
                Token::Identifier(section) => self.replace(SectionName(section)),
                Token::SectionEnd => {
                    if !options.section_reset() {
                        return Err(TooManyBrackets);
                    }

                    self.replace(AfterSectionHeader(None));
                }
                Token::SectionStart => return Err(TooManyBrackets),
                Token::Comment(_) => return Err(CommentInSectionHeader),
                Token::NewLine => return Err(IncompleteSectionHeader),
                _ => return Err(InvalidSectionName),
            },
            SectionName(section) => {
                let section = *section;

                match token {
                    Token::Whitespace(_) => {}
                    Token::SectionEnd => self.replace(AfterSectionHeader(Some(section))),
                    Token::SectionStart => return Err(TooManyBrackets),
                    Token::Comment(_) => return Err(CommentInSectionHeader),
                    Token::NewLine => return Err(IncompleteSectionHeader),
                    _ => return Err(InvalidSectionName),
                }
            }
            AfterSectionHeader(section) => {
                let section = *section;

                match token {
                    Token::Whitespace(_) => {}
                    Token::NewLine => {
                        self.start_section(section, config);
                        self.pop();
                    }
                    Token::Comment(_) => {
                        if !options.trailing_comments() {
                            return Err(CommentInSectionHeader);
                        }

                        self.start_section(section, config);
                        self.replace(Comment(Vec::new()));
                    }
                    Token::SectionStart | Token::SectionEnd => return Err(TooManyBrackets),
                    _ => return Err(InvalidSectionName),
                }
            }
            Key(key) => {
                let key = *key;

                match token {
                    Token::Whitespace(_) => {}
                    Token::Separator => self.replace(Value {
                        key,
                        tokens: Vec::new(),
                    }),
                    Token::NewLine => {
                        if !options.missing_values() {
                            return Err(IncompleteKey);
                        }

                        self.add_value(key, &[], config);
                        self.pop();
                    }
                    Token::Comment(_) => {
                        if !options.trailing_comments() {
                            return Err(CommentInterruptedKey);
                        }

                        if !options.missing_values() {
                            return Err(IncompleteKey);
                        }

                        self.add_value(key, &[], config);
                        self.replace(Comment(Vec::new()));
                    }
                    _ => return Err(MissingSeparator),
                }
            }
            Value { key, .. } => {
                let key = *key;

                match token {
                    Token::NewLine => {
                        let tokens = self.take_tokens();
                        self.add_value(key, &tokens, config);
                        self.pop();
                    }
                    Token::Comment(_) if options.trailing_comments() => {
                        let tokens = self.take_tokens();
                        self.add_value(key, &tokens, config);
                        self.replace(Comment(Vec::new()));
                    }
                    token => self.push_token(token),
                }
            }
            Comment(_) => match token {
                Token::NewLine => {
                    ini_trace!("skipped comment {:?}", self.take_tokens());
                    self.pop();
                }
                token => self.push_token(token),
            },
        }

        Ok(())
    }

    /// Flushes the state still open at the end of the source string,
    /// as if it was followed by a new line.
    pub(super) fn finish<C: IniConfig>(&mut self, config: &mut C) -> Result<(), IniErrorKind> {
        self.process(Token::NewLine, config)?;

        debug_assert_eq!(self.stack.len(), 1);

        Ok(())
    }

    /// Appends the `token` to the value / comment in the current state.
    fn push_token(&mut self, token: Token<'s>) {
        match self.stack.last_mut() {
            Some(IniParserFSMState::Value { tokens, .. })
            | Some(IniParserFSMState::Comment(tokens)) => tokens.push(token),
            _ => debug_assert!(false, "not accumulating tokens"),
        }
    }

    /// Takes the tokens accumulated by the value / comment in the current state.
    fn take_tokens(&mut self) -> Vec<Token<'s>> {
        match self.stack.last_mut() {
            Some(IniParserFSMState::Value { tokens, .. })
            | Some(IniParserFSMState::Comment(tokens)) => std::mem::take(tokens),
            _ => Vec::new(),
        }
    }

    /// Makes `section` (or the root, if `None`) current for the following keys.
    fn start_section<C: IniConfig>(&mut self, section: Option<&str>, config: &mut C) {
        let section = section.map(|section| self.options.normalize_key(section).into_owned());

        if let Some(section) = section.as_ref() {
            config.start_section(section);
        }

        ini_trace!("current section: {:?}", section);

        if let Some(root) = self.stack.first_mut() {
            *root = IniParserFSMState::Root(section);
        }
    }

    /// Coalesces the value `tokens` and adds the value at `key` to the `config`'s current section.
    fn add_value<C: IniConfig>(&self, key: &str, tokens: &[Token<'s>], config: &mut C) {
        let key = self.options.normalize_key(key);
        let value = coalesce_value(tokens, self.options);

        config.add_value(self.section(), &key, value);
    }
}

/// Reduces the value `tokens` to a single value.
///
/// Leading and trailing whitespace is trimmed.
/// A single remaining token is converted to a typed value, if allowed by `options`;
/// multiple tokens are always concatenated to a string.
pub(super) fn coalesce_value(tokens: &[Token<'_>], options: IniOptions) -> IniValue {
    let start = tokens.iter().position(|token| !token.is_whitespace());
    let end = tokens.iter().rposition(|token| !token.is_whitespace());

    let tokens = match (start, end) {
        (Some(start), Some(end)) => &tokens[start..=end],
        _ => &tokens[..0],
    };

    match tokens {
        [] => IniValue::String(String::new()),
        [token] => typed_value(token, options),
        tokens => {
            let mut value = String::new();

            for token in tokens {
                // Writing to a `String` never fails.
                let _ = write!(value, "{}", token);
            }

            IniValue::String(value)
        }
    }
}

/// Converts a single value `token` to a typed value, if allowed by `options`.
/// Quoted strings are always strings.
fn typed_value(token: &Token<'_>, options: IniOptions) -> IniValue {
    match token {
        Token::Integer(text) if options.numbers() => {
            let value = if text.starts_with('-') {
                text.parse::<i64>().ok().map(IniValue::I64)
            } else {
                text.parse::<u64>().ok().map(IniValue::U64)
            };

            if let Some(value) = value {
                return value;
            }
        }
        Token::Decimal(text) if options.numbers() => {
            if let Ok(value) = text.parse::<f64>() {
                return IniValue::F64(value);
            }
        }
        Token::True(_) if options.booleans() => return IniValue::Bool(true),
        Token::False(_) if options.booleans() => return IniValue::Bool(false),
        _ => {}
    }

    IniValue::String(token.value_text().into_owned())
}
