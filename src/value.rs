use {
    crate::IniMapGetError,
    indexmap::{map::Iter as IndexMapIter, IndexMap},
    std::{
        convert::TryFrom,
        fmt::{Display, Formatter},
        iter::Iterator,
    },
};

/// Represents an `.ini` config value,
/// contained in the root of the config or in a config section.
#[derive(Clone, PartialEq, Debug)]
pub enum IniValue {
    Bool(bool),
    U64(u64),
    I64(i64),
    F64(f64),
    String(String),
    /// Only ever contained in the root of the config.
    Section(IniMap),
}

/// Represents the type of the [`config value`].
///
/// [`config value`]: enum.IniValue.html
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IniValueType {
    Bool,
    U64,
    I64,
    F64,
    String,
    Section,
}

impl Display for IniValueType {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        use IniValueType::*;

        match self {
            Bool => write!(f, "Bool"),
            U64 => write!(f, "U64"),
            I64 => write!(f, "I64"),
            F64 => write!(f, "F64"),
            String => write!(f, "String"),
            Section => write!(f, "Section"),
        }
    }
}

impl IniValue {
    /// Returns the config value type.
    pub fn get_type(&self) -> IniValueType {
        match self {
            IniValue::Bool(_) => IniValueType::Bool,
            IniValue::U64(_) => IniValueType::U64,
            IniValue::I64(_) => IniValueType::I64,
            IniValue::F64(_) => IniValueType::F64,
            IniValue::String(_) => IniValueType::String,
            IniValue::Section(_) => IniValueType::Section,
        }
    }

    /// Extracts the [`bool`] value from the config value.
    /// Returns `None` if the value is not a [`bool`].
    ///
    /// [`bool`]: enum.IniValue.html#variant.Bool
    pub fn bool(&self) -> Option<bool> {
        match self {
            IniValue::Bool(val) => Some(*val),
            _ => None,
        }
    }

    /// Extracts the signed integer value from the config value.
    /// Returns `None` if the value is not an integer, or is an unsigned integer which does not fit.
    pub fn i64(&self) -> Option<i64> {
        match self {
            IniValue::I64(val) => Some(*val),
            IniValue::U64(val) => i64::try_from(*val).ok(),
            _ => None,
        }
    }

    /// Extracts the unsigned integer value from the config value.
    /// Returns `None` if the value is not an integer, or is a negative signed integer.
    pub fn u64(&self) -> Option<u64> {
        match self {
            IniValue::U64(val) => Some(*val),
            IniValue::I64(val) => u64::try_from(*val).ok(),
            _ => None,
        }
    }

    /// Extracts the [`f64`] value from the config value.
    /// Returns `None` if the value is not a number.
    ///
    /// [`f64`]: enum.IniValue.html#variant.F64
    pub fn f64(&self) -> Option<f64> {
        match self {
            IniValue::U64(val) => Some(*val as f64),
            IniValue::I64(val) => Some(*val as f64),
            IniValue::F64(val) => Some(*val),
            _ => None,
        }
    }

    /// Extracts the string value from the config value.
    /// Returns `None` if the value is not a string.
    pub fn string(&self) -> Option<&str> {
        match self {
            IniValue::String(val) => Some(val.as_str()),
            _ => None,
        }
    }

    /// Extracts the section from the config value.
    /// Returns `None` if the value is not a section.
    pub fn section(&self) -> Option<&IniMap> {
        match self {
            IniValue::Section(val) => Some(val),
            _ => None,
        }
    }
}

impl From<bool> for IniValue {
    fn from(val: bool) -> Self {
        IniValue::Bool(val)
    }
}

impl From<u64> for IniValue {
    fn from(val: u64) -> Self {
        IniValue::U64(val)
    }
}

impl From<i64> for IniValue {
    fn from(val: i64) -> Self {
        IniValue::I64(val)
    }
}

impl From<f64> for IniValue {
    fn from(val: f64) -> Self {
        IniValue::F64(val)
    }
}

impl From<String> for IniValue {
    fn from(val: String) -> Self {
        IniValue::String(val)
    }
}

impl<'a> From<&'a str> for IniValue {
    fn from(val: &'a str) -> Self {
        IniValue::String(val.into())
    }
}

impl From<IniMap> for IniValue {
    fn from(val: IniMap) -> Self {
        IniValue::Section(val)
    }
}

impl Display for IniValue {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            IniValue::Bool(value) => write!(f, "{}", if *value { "true" } else { "false" }),
            IniValue::U64(value) => write!(f, "{}", value),
            IniValue::I64(value) => write!(f, "{}", value),
            IniValue::F64(value) => write!(f, "{}", value),
            IniValue::String(value) => write!(f, "{}", value),
            IniValue::Section(value) => write!(f, "[{} keys]", value.len()),
        }
    }
}

/// Insertion-ordered map of [`values`](enum.IniValue.html) with string keys.
/// The result of parsing an `.ini` config.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct IniMap(IndexMap<String, IniValue>);

impl IniMap {
    /// Creates a new empty [`map`](struct.IniMap.html).
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Returns the number of entries in the map.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if the map contains a value with the string `key`.
    pub fn contains<K: AsRef<str>>(&self, key: K) -> bool {
        self.0.contains_key(key.as_ref())
    }

    /// Tries to get a reference to a value in the map with the string `key`.
    pub fn get<K: AsRef<str>>(&self, key: K) -> Result<&IniValue, IniMapGetError> {
        self.0
            .get(key.as_ref())
            .ok_or(IniMapGetError::KeyDoesNotExist)
    }

    /// Tries to get a `bool` value in the map with the string `key`.
    pub fn get_bool<K: AsRef<str>>(&self, key: K) -> Result<bool, IniMapGetError> {
        let value = self.get(key)?;
        value
            .bool()
            .ok_or_else(|| IniMapGetError::IncorrectValueType(value.get_type()))
    }

    /// Tries to get a signed integer value in the map with the string `key`.
    pub fn get_i64<K: AsRef<str>>(&self, key: K) -> Result<i64, IniMapGetError> {
        let value = self.get(key)?;
        value
            .i64()
            .ok_or_else(|| IniMapGetError::IncorrectValueType(value.get_type()))
    }

    /// Tries to get an unsigned integer value in the map with the string `key`.
    pub fn get_u64<K: AsRef<str>>(&self, key: K) -> Result<u64, IniMapGetError> {
        let value = self.get(key)?;
        value
            .u64()
            .ok_or_else(|| IniMapGetError::IncorrectValueType(value.get_type()))
    }

    /// Tries to get an `f64` value in the map with the string `key`.
    /// Integer values are converted.
    pub fn get_f64<K: AsRef<str>>(&self, key: K) -> Result<f64, IniMapGetError> {
        let value = self.get(key)?;
        value
            .f64()
            .ok_or_else(|| IniMapGetError::IncorrectValueType(value.get_type()))
    }

    /// Tries to get a string value in the map with the string `key`.
    pub fn get_string<K: AsRef<str>>(&self, key: K) -> Result<&str, IniMapGetError> {
        let value = self.get(key)?;
        value
            .string()
            .ok_or_else(|| IniMapGetError::IncorrectValueType(value.get_type()))
    }

    /// Tries to get a section in the map with the string `key`.
    pub fn get_section<K: AsRef<str>>(&self, key: K) -> Result<&IniMap, IniMapGetError> {
        let value = self.get(key)?;
        value
            .section()
            .ok_or_else(|| IniMapGetError::IncorrectValueType(value.get_type()))
    }

    /// Inserts the `value` at `key`, returning the previous value, if any.
    /// The key keeps its original position if it was already present.
    pub fn insert<K: Into<String>, V: Into<IniValue>>(
        &mut self,
        key: K,
        value: V,
    ) -> Option<IniValue> {
        self.0.insert(key.into(), value.into())
    }

    /// Removes the value at `key`, if any, preserving the order of the remaining entries.
    pub fn remove<K: AsRef<str>>(&mut self, key: K) -> Option<IniValue> {
        self.0.shift_remove(key.as_ref())
    }

    /// Returns an in-order iterator over the map's keys and values.
    pub fn iter(&self) -> IniMapIter<'_> {
        IniMapIter(self.0.iter())
    }

    /// Returns the section map at `section`, creating it if necessary.
    /// A non-section value at `section` is replaced.
    pub(crate) fn section_mut(&mut self, section: &str) -> &mut IniMap {
        let entry = self
            .0
            .entry(section.to_owned())
            .or_insert_with(|| IniValue::Section(IniMap::new()));

        if !matches!(entry, IniValue::Section(_)) {
            *entry = IniValue::Section(IniMap::new());
        }

        match entry {
            IniValue::Section(section) => section,
            _ => unreachable!("just replaced with a section"),
        }
    }
}

/// Iterator over the keys and values of an [`IniMap`](struct.IniMap.html).
pub struct IniMapIter<'m>(IndexMapIter<'m, String, IniValue>);

impl<'m> Iterator for IniMapIter<'m> {
    type Item = (&'m str, &'m IniValue);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(key, value)| (key.as_str(), value))
    }
}

impl<'m> IntoIterator for &'m IniMap {
    type Item = (&'m str, &'m IniValue);
    type IntoIter = IniMapIter<'m>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
