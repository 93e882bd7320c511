use std::string::{FromUtf8Error, FromUtf16Error};
use thiserror::Error;

/// Specific error details regarding `UTF`.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum UtfError {
    /// Data starting with a UTF-16 byte order mark has an odd number of bytes.
    #[error("UTF-16 data needs to contain an even amount of bytes")]
    UnevenByteCount,
    /// Invalid UTF-8 data.
    #[error(transparent)]
    InvalidUtf8(FromUtf8Error),
    /// Invalid UTF-16 data.
    #[error(transparent)]
    InvalidUtf16(FromUtf16Error),
}

// Support for UTF-16 by converting it to UTF-8
pub(crate) fn into_utf8(data: Vec<u8>) -> Result<Vec<u8>, UtfError> {
    if is_utf16(&data) {
        from_utf16(&data).map(String::into_bytes)
    } else {
        Ok(data)
    }
}

pub(crate) fn into_utf8_str(data: Vec<u8>) -> Result<String, UtfError> {
    if is_utf16(&data) {
        from_utf16(&data)
    } else {
        String::from_utf8(data).map_err(UtfError::InvalidUtf8)
    }
}

/// Checks if a UTF-16 byte order mark (BOM) exists
fn is_utf16(data: &[u8]) -> bool {
    data.starts_with(b"\xFF\xFE") || data.starts_with(b"\xFE\xFF")
}

fn from_utf16(data: &[u8]) -> Result<String, UtfError> {
    // Determine byte order for little endian (le) and big endian (be)
    let endian = if data.starts_with(b"\xFF") {
        u16::from_le_bytes
    } else {
        u16::from_be_bytes
    };

    let utf16 = data[2..]
        .chunks(2)
        .map(|chunk| chunk.try_into().map(endian))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| UtfError::UnevenByteCount)?;

    String::from_utf16(utf16.as_ref()).map_err(UtfError::InvalidUtf16)
}
