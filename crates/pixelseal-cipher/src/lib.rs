//! # Envelope Codec
//! Password based authenticated encryption of arbitrary secret bytes.
//!
//! An envelope is the plain concatenation of
//!
//! | Offset | Length   | Field                         |
//! |--------|----------|-------------------------------|
//! | 0      | 16       | salt                          |
//! | 16     | 12       | nonce                         |
//! | 28     | variable | AES-256-GCM ciphertext + tag  |
//!
//! The format carries no version tag, changing any of the constants below
//! breaks every envelope produced before.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;
use zeroize::Zeroizing;

pub mod error;

pub use crate::error::CipherError;

pub const SALT_LEN: usize = 16;
pub const NONCE_LEN: usize = 12;
pub const KEY_LEN: usize = 32;
pub const TAG_LEN: usize = 16;
pub const KDF_ITERATIONS: u32 = 600_000;

/// fixed part of an envelope in front of the ciphertext
pub const HEADER_LEN: usize = SALT_LEN + NONCE_LEN;
/// bytes an envelope adds on top of the plain secret
pub const ENVELOPE_OVERHEAD: usize = HEADER_LEN + TAG_LEN;

pub type Result<T> = std::result::Result<T, CipherError>;
pub type Key256 = Zeroizing<[u8; KEY_LEN]>;

/// encrypt data with password, it uses PBKDF2-HMAC-SHA256 for key derivation and AES-256-GCM for encryption
pub fn encrypt_data(data: &[u8], password: &str) -> Result<Vec<u8>> {
    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);
    let mut nonce = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut nonce);

    let key = derive_key(password.as_bytes(), &salt);
    let encryptor = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&key[..]));
    let cipher_data = encryptor
        .encrypt(Nonce::from_slice(&nonce), data)
        .map_err(CipherError::Encryption)?;

    let mut envelope = Vec::with_capacity(HEADER_LEN + cipher_data.len());
    envelope.extend_from_slice(&salt);
    envelope.extend_from_slice(&nonce);
    envelope.extend_from_slice(&cipher_data);

    Ok(envelope)
}

/// decrypt an envelope produced by [`encrypt_data`]
///
/// Any tag mismatch ends up as [`CipherError::Authentication`], regardless of
/// whether the password was wrong or the envelope was modified.
pub fn decrypt_data(envelope: &[u8], password: &str) -> Result<Vec<u8>> {
    if envelope.len() < HEADER_LEN {
        return Err(CipherError::Format {
            len: envelope.len(),
            min: HEADER_LEN,
        });
    }
    let (salt, rest) = envelope.split_at(SALT_LEN);
    let (nonce, cipher_data) = rest.split_at(NONCE_LEN);

    let key = derive_key(password.as_bytes(), salt);
    let decryptor = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&key[..]));

    decryptor
        .decrypt(Nonce::from_slice(nonce), cipher_data)
        .map_err(|_| CipherError::Authentication)
}

/// derives the 256 bit key, it is wiped from memory once dropped
pub fn derive_key(password: &[u8], salt: &[u8]) -> Key256 {
    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    pbkdf2::pbkdf2_hmac::<Sha256>(password, salt, KDF_ITERATIONS, &mut key[..]);

    key
}
