use {
    crate::{tokenizer::classify, IniMap, IniPath, IniValue, ToIniStringError, Token},
    std::fmt::Write,
};

/// Serializes the `.ini` config `map` to a string.
///
/// Root values are written first, then every section as a `[section]` header followed by its values.
/// Strings are always written in double quotes; the output parses back to an equal map
/// with numeric, boolean and section detection enabled.
pub fn to_ini_string(map: &IniMap) -> Result<String, ToIniStringError> {
    let mut string = String::new();
    write_ini(&mut string, map)?;
    Ok(string)
}

/// Serializes the `.ini` config `map` to the writer `w`.
/// See [`to_ini_string`](fn.to_ini_string.html).
pub fn write_ini<W: Write>(w: &mut W, map: &IniMap) -> Result<(), ToIniStringError> {
    use ToIniStringError::*;

    let root = IniPath::new();

    let mut has_values = false;

    for (key, value) in map.iter().filter(|(_, value)| value.section().is_none()) {
        write_ini_key_value(w, &root, key, value)?;
        has_values = true;
    }

    for (section, value) in map.iter() {
        let section_map = match value.section() {
            Some(section_map) => section_map,
            None => continue,
        };

        let path = IniPath::from_key(section);

        if !is_ini_identifier(section) {
            return Err(InvalidIdentifier(path));
        }

        if has_values {
            writeln!(w).map_err(|_| WriteError)?;
        }

        writeln!(w, "[{}]", section).map_err(|_| WriteError)?;

        for (key, value) in section_map.iter() {
            write_ini_key_value(w, &path, key, value)?;
        }

        has_values = true;
    }

    Ok(())
}

/// Writes a `key = value` line to the writer `w`.
/// `path` is the path to the containing section, for error reporting.
fn write_ini_key_value<W: Write>(
    w: &mut W,
    path: &IniPath,
    key: &str,
    value: &IniValue,
) -> Result<(), ToIniStringError> {
    use ToIniStringError::*;

    let path = path.join(key);

    if !is_ini_identifier(key) {
        return Err(InvalidIdentifier(path));
    }

    write!(w, "{} = ", key).map_err(|_| WriteError)?;

    match value {
        IniValue::Bool(value) => {
            write!(w, "{}", if *value { "true" } else { "false" }).map_err(|_| WriteError)?
        }
        IniValue::U64(value) => write!(w, "{}", value).map_err(|_| WriteError)?,
        IniValue::I64(value) => write!(w, "{}", value).map_err(|_| WriteError)?,
        IniValue::F64(value) => {
            if !value.is_finite() {
                return Err(TypeUnsupported(path));
            }

            // `Debug` always writes a decimal point or an exponent, so the value does not parse back as an integer.
            write!(w, "{:?}", value).map_err(|_| WriteError)?
        }
        IniValue::String(value) => {
            if value.chars().any(crate::util::is_new_line) {
                return Err(TypeUnsupported(path));
            }

            write_ini_string(w, value).map_err(|_| WriteError)?
        }
        // Sections nested within sections are not supported.
        IniValue::Section(_) => return Err(TypeUnsupported(path)),
    }

    writeln!(w).map_err(|_| WriteError)
}

/// Writes the `string` to the writer `w` in double quotes,
/// escaping double quotes (`'"'`) and backslashes (`'\\'`).
fn write_ini_string<W: Write>(w: &mut W, string: &str) -> std::fmt::Result {
    w.write_char('"')?;

    for c in string.chars() {
        match c {
            '"' => w.write_str("\\\"")?,
            '\\' => w.write_str("\\\\")?,
            c => w.write_char(c)?,
        }
    }

    w.write_char('"')
}

/// Keys and section names must tokenize as a single identifier,
/// i.e. not contain non-identifier characters and not look like a number or a boolean.
fn is_ini_identifier(string: &str) -> bool {
    matches!(classify(string), Token::Identifier(_))
}
