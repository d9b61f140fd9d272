#![allow(non_upper_case_globals)]

use {bitflags::bitflags, std::borrow::Cow};

bitflags! {
    /// Flags which specify the `.ini` dialect accepted by the [`parser`](struct.IniParser.html).
    ///
    /// Flags are independent of each other, with two exceptions:
    /// if both [`UppercaseKeys`](#associatedconstant.UppercaseKeys) and [`LowercaseKeys`](#associatedconstant.LowercaseKeys)
    /// are set, keys are lowercased;
    /// [`AllowSectionReset`](#associatedconstant.AllowSectionReset) has no effect unless
    /// [`DetectSections`](#associatedconstant.DetectSections) is set.
    pub struct IniOptions: u16 {
        /// Unquoted integer / decimal values are parsed as numbers.
        /// Otherwise they are kept as strings.
        const DetectNumericValues = 0b0_0000_0001;
        /// `[section]` headers are supported.
        /// Otherwise a section start delimiter (`'['`) at the start of a line is an error.
        const DetectSections = 0b0_0000_0010;
        /// `'#'` starts a comment, in addition to `';'`.
        const AllowHashComments = 0b0_0000_0100;
        /// Comments may follow a value or a section header on the same line.
        /// Otherwise a comment delimiter after a value is part of the value.
        const AllowTrailingComments = 0b0_0000_1000;
        /// Keys and section names are uppercased.
        const UppercaseKeys = 0b0_0001_0000;
        /// Keys and section names are lowercased.
        const LowercaseKeys = 0b0_0010_0000;
        /// Unquoted `true` / `yes` / `false` / `no` (case-insensitive) values are parsed as booleans.
        /// Otherwise they are kept as strings.
        const DetectBooleanValues = 0b0_0100_0000;
        /// Keys without a key-value separator (`'='`) are allowed and have an empty string value.
        const AllowMissingValues = 0b0_1000_0000;
        /// An empty section header (`[]`) returns to the root of the config.
        const AllowSectionReset = 0b1_0000_0000;
    }
}

impl Default for IniOptions {
    /// Sections, numbers and booleans are detected;
    /// only `';'` line comments; no missing values; no section reset; keys are kept as is.
    fn default() -> Self {
        IniOptions::DetectSections
            | IniOptions::DetectNumericValues
            | IniOptions::DetectBooleanValues
    }
}

impl IniOptions {
    pub(crate) fn sections(self) -> bool {
        self.contains(IniOptions::DetectSections)
    }

    pub(crate) fn section_reset(self) -> bool {
        self.sections() && self.contains(IniOptions::AllowSectionReset)
    }

    pub(crate) fn trailing_comments(self) -> bool {
        self.contains(IniOptions::AllowTrailingComments)
    }

    pub(crate) fn missing_values(self) -> bool {
        self.contains(IniOptions::AllowMissingValues)
    }

    pub(crate) fn numbers(self) -> bool {
        self.contains(IniOptions::DetectNumericValues)
    }

    pub(crate) fn booleans(self) -> bool {
        self.contains(IniOptions::DetectBooleanValues)
    }

    /// Whether the comment delimiter `c` starts a comment in this dialect.
    pub(crate) fn is_comment(self, c: char) -> bool {
        match c {
            ';' => true,
            '#' => self.contains(IniOptions::AllowHashComments),
            _ => false,
        }
    }

    /// Applies the key / section name case normalization rules.
    pub(crate) fn normalize_key(self, key: &str) -> Cow<'_, str> {
        if self.contains(IniOptions::LowercaseKeys) {
            Cow::Owned(key.to_lowercase())
        } else if self.contains(IniOptions::UppercaseKeys) {
            Cow::Owned(key.to_uppercase())
        } else {
            Cow::Borrowed(key)
        }
    }
}
