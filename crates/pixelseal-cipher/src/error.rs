pub use aes_gcm::Error as AesGcmError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CipherError {
    /// The envelope is shorter than the fixed salt and nonce header
    #[error("Envelope is too short: {len} bytes, at least {min} bytes required")]
    Format { len: usize, min: usize },

    /// Wrong password or tampered data, deliberately indistinguishable
    #[error("Authentication failed: incorrect password or corrupted data")]
    Authentication,

    #[error("Encryption error")]
    Encryption(AesGcmError),
}
