use thiserror::Error;

pub use pixelseal_cipher::CipherError;

#[derive(Error, Debug)]
pub enum PixelSealError {
    /// The envelope is too short to contain salt and nonce
    #[error("Format error: {len} bytes are too short for an envelope, at least {min} bytes required")]
    Format { len: usize, min: usize },

    /// Wrong password or corrupted data, on purpose there is no way to tell which one
    #[error("Decryption failed: incorrect password or corrupted data")]
    Authentication,

    /// The frame (length prefix + payload) does not fit into the carrier image
    #[error("Capacity Error: {required} bytes are required but the image can only carry {available} bytes")]
    Capacity { required: usize, available: usize },

    /// The length prefix read from the image is bigger than the image could ever carry
    #[error("Invalid data length detected: {declared} bytes, but the image can carry at most {capacity} bytes")]
    InvalidLength { declared: usize, capacity: usize },

    /// The image ran out of color channels before all expected bits were read
    #[error("Unexpected end of image data: {required_bits} bits required but only {available_bits} available")]
    TruncatedImage {
        required_bits: usize,
        available_bits: usize,
    },

    /// Represents an unsupported carrier media. For example, a WAV file
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    /// Represents an error when encrypting the data
    #[error("Encryption error")]
    EncryptionError(CipherError),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing secret, provide either a message or a file")]
    MissingSecret,

    #[error("API Error: Missing password")]
    MissingPassword,
}

impl From<CipherError> for PixelSealError {
    fn from(e: CipherError) -> Self {
        match e {
            CipherError::Format { len, min } => Self::Format { len, min },
            CipherError::Authentication => Self::Authentication,
            e @ CipherError::Encryption(_) => Self::EncryptionError(e),
        }
    }
}
