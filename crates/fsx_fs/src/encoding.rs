use std::str::FromStr;

use base64::Engine;
use strum_macros::{Display, EnumString};

use crate::error::{Error, Result};

/// Text encodings a byte buffer can be decoded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Encoding {
    #[strum(to_string = "utf8", serialize = "utf-8")]
    Utf8,
    #[strum(to_string = "utf16le", serialize = "utf-16le", serialize = "ucs2")]
    Utf16Le,
    #[strum(to_string = "latin1", serialize = "binary")]
    Latin1,
    #[strum(to_string = "ascii")]
    Ascii,
    #[strum(to_string = "hex")]
    Hex,
    #[strum(to_string = "base64")]
    Base64,
}

impl Encoding {
    /// Looks up an encoding by its conventional name, e.g. `"utf8"`.
    pub fn parse(name: &str) -> Result<Self> {
        Self::from_str(name).map_err(|_| Error::UnknownEncoding(name.to_string()))
    }

    /// Decodes `bytes` into text. Invalid sequences are replaced rather than
    /// rejected.
    pub fn decode(&self, bytes: &[u8]) -> String {
        match self {
            Encoding::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            Encoding::Utf16Le => {
                // A trailing odd byte is not part of any code unit
                let units = bytes
                    .chunks_exact(2)
                    .map(|pair| u16::from_le_bytes([pair[0], pair[1]]));
                char::decode_utf16(units)
                    .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
                    .collect()
            }
            Encoding::Latin1 => bytes.iter().map(|&b| char::from(b)).collect(),
            Encoding::Ascii => bytes.iter().map(|&b| char::from(b & 0x7f)).collect(),
            Encoding::Hex => bytes.iter().map(|b| format!("{b:02x}")).collect(),
            Encoding::Base64 => base64::engine::general_purpose::STANDARD.encode(bytes),
        }
    }
}
