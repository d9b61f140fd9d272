use std::fmt::{Display, Formatter};

/// Describes the full path to an `.ini` config element: an optional section name and a key.
/// Empty path means the root of the config.
/// Used in [`writer`](fn.to_ini_string.html) [`errors`](enum.ToIniStringError.html).
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct IniPath(pub Vec<String>);

impl IniPath {
    pub(crate) fn new() -> Self {
        Self(Vec::new())
    }

    pub(crate) fn from_key<K: Into<String>>(key: K) -> Self {
        Self(vec![key.into()])
    }

    /// Returns a new path with the `key` appended.
    pub(crate) fn join<K: Into<String>>(&self, key: K) -> Self {
        let mut path = self.0.clone();
        path.push(key.into());
        Self(path)
    }
}

impl Display for IniPath {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        if self.0.is_empty() {
            "<root>".fmt(f)
        } else {
            for (key_index, key) in self.0.iter().enumerate() {
                if key_index > 0 {
                    '.'.fmt(f)?;
                }

                key.fmt(f)?;
            }

            Ok(())
        }
    }
}
