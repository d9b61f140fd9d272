use crate::{IniError, IniErrorKind};

/// Text encodings of `.ini` source bytes supported by the [`decoder`](fn.decode.html).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IniEncoding {
    Utf8,
    Utf16Le,
    Utf16Be,
    Utf32Le,
    Utf32Be,
}

impl IniEncoding {
    fn bom(self) -> &'static [u8] {
        match self {
            IniEncoding::Utf8 => &[0xEF, 0xBB, 0xBF],
            IniEncoding::Utf16Le => &[0xFF, 0xFE],
            IniEncoding::Utf16Be => &[0xFE, 0xFF],
            IniEncoding::Utf32Le => &[0xFF, 0xFE, 0x00, 0x00],
            IniEncoding::Utf32Be => &[0x00, 0x00, 0xFE, 0xFF],
        }
    }
}

/// Detects the encoding of the `.ini` source `bytes`.
/// Returns the encoding and the length in bytes of its byte order mark, if any.
///
/// Byte order marks are checked first (UTF-32 before UTF-16, as their little-endian BOMs share a prefix),
/// then the pattern of null bytes in the first four bytes, which ASCII text leaves in UTF-16 / UTF-32.
/// Defaults to UTF-8.
pub fn detect_encoding(bytes: &[u8]) -> (IniEncoding, usize) {
    use IniEncoding::*;

    for &encoding in &[Utf32Le, Utf32Be, Utf8, Utf16Le, Utf16Be] {
        let bom = encoding.bom();

        if bytes.starts_with(bom) {
            return (encoding, bom.len());
        }
    }

    let encoding = match bytes {
        [0, 0, 0, b, ..] if *b != 0 => Utf32Be,
        [b, 0, 0, 0, ..] if *b != 0 => Utf32Le,
        [0, b0, 0, b1, ..] if *b0 != 0 && *b1 != 0 => Utf16Be,
        [b0, 0, b1, 0, ..] if *b0 != 0 && *b1 != 0 => Utf16Le,
        [0, b] if *b != 0 => Utf16Be,
        [b, 0] if *b != 0 => Utf16Le,
        _ => Utf8,
    };

    (encoding, 0)
}

/// Decodes the `.ini` source `bytes` to a string.
///
/// If `encoding` is `None`, it is [`detected`](fn.detect_encoding.html).
/// A byte order mark matching the encoding is skipped.
/// Returns an [`Encoding`](enum.IniErrorKind.html#variant.Encoding) error at the line of the first undecodable character.
pub fn decode(bytes: &[u8], encoding: Option<IniEncoding>) -> Result<String, IniError> {
    let (encoding, bom_len) = match encoding {
        Some(encoding) => {
            let bom_len = if bytes.starts_with(encoding.bom()) {
                encoding.bom().len()
            } else {
                0
            };

            (encoding, bom_len)
        }
        None => detect_encoding(bytes),
    };

    ini_debug!("decoding .ini source as {:?}", encoding);

    let bytes = &bytes[bom_len..];

    match encoding {
        IniEncoding::Utf8 => decode_utf8(bytes),
        IniEncoding::Utf16Le => decode_utf16(bytes, u16::from_le_bytes),
        IniEncoding::Utf16Be => decode_utf16(bytes, u16::from_be_bytes),
        IniEncoding::Utf32Le => decode_utf32(bytes, u32::from_le_bytes),
        IniEncoding::Utf32Be => decode_utf32(bytes, u32::from_be_bytes),
    }
}

fn decode_utf8(bytes: &[u8]) -> Result<String, IniError> {
    match std::str::from_utf8(bytes) {
        Ok(string) => Ok(string.to_owned()),
        Err(err) => {
            let mut lines = LineCounter::default();

            for &b in &bytes[..err.valid_up_to()] {
                lines.push(b as char);
            }

            Err(lines.error())
        }
    }
}

fn decode_utf16(bytes: &[u8], from_bytes: fn([u8; 2]) -> u16) -> Result<String, IniError> {
    // A trailing odd byte decodes as an unpaired surrogate.
    let units = bytes.chunks(2).map(|chunk| match *chunk {
        [b0, b1] => from_bytes([b0, b1]),
        _ => 0xDC00,
    });

    let mut string = String::with_capacity(bytes.len() / 2);
    let mut lines = LineCounter::default();

    for c in std::char::decode_utf16(units) {
        let c = c.map_err(|_| lines.error())?;
        lines.push(c);
        string.push(c);
    }

    Ok(string)
}

fn decode_utf32(bytes: &[u8], from_bytes: fn([u8; 4]) -> u32) -> Result<String, IniError> {
    let mut string = String::with_capacity(bytes.len() / 4);
    let mut lines = LineCounter::default();

    for chunk in bytes.chunks(4) {
        let c = match *chunk {
            [b0, b1, b2, b3] => std::char::from_u32(from_bytes([b0, b1, b2, b3])),
            _ => None,
        };
        let c = c.ok_or_else(|| lines.error())?;
        lines.push(c);
        string.push(c);
    }

    Ok(string)
}

/// Counts the lines of the decoded text, the same way the [`tokenizer`](struct.Tokenizer.html) does:
/// `'\n'`, `'\r'` and `"\r\n"` each end a line.
#[derive(Default)]
struct LineCounter {
    /// Number of complete lines so far.
    lines: u32,
    /// The previous character was a carriage return.
    cr: bool,
}

impl LineCounter {
    fn push(&mut self, c: char) {
        match c {
            '\r' => self.lines += 1,
            // Already counted at the carriage return.
            '\n' if self.cr => {}
            '\n' => self.lines += 1,
            _ => {}
        }

        self.cr = c == '\r';
    }

    /// Error at the line the decoder has reached.
    fn error(&self) -> IniError {
        IniError::new(IniErrorKind::Encoding, self.lines + 1)
    }
}
