//! Naming of unveiled secrets.
//!
//! A secret carries no filename or content type, the name is guessed from its
//! bytes after decryption and never influences the decryption itself.

/// file name for secrets that read as printable text
pub const TEXT_FILE_NAME: &str = "secret.txt";
/// file name for everything else
pub const BINARY_FILE_NAME: &str = "secret_extracted.bin";
/// file name of the carrier written by hide when only a folder is given
pub const DEFAULT_CARRIER_FILE_NAME: &str = "stego_image.png";

/// true for valid UTF-8 without control characters other than line breaks and tabs
pub fn is_printable_text(data: &[u8]) -> bool {
    std::str::from_utf8(data).is_ok_and(|text| {
        text.chars()
            .all(|c| !c.is_control() || matches!(c, '\n' | '\r' | '\t'))
    })
}

pub fn suggested_file_name(data: &[u8]) -> &'static str {
    if is_printable_text(data) {
        TEXT_FILE_NAME
    } else {
        BINARY_FILE_NAME
    }
}
