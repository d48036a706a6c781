//! # PixelSeal Core API
//!
//! Hides password encrypted secrets in the least significant bits of RGB images.
//!
//! Two independent codecs are composed through a plain byte blob:
//! - the envelope codec of [`pixelseal_cipher`] turns a secret and a password
//!   into `salt ‖ nonce ‖ ciphertext` and back
//! - the pixel bitstream codec ([`embed`] / [`extract`]) writes any blob as
//!   length prefixed [`frame`] into the channel LSBs of an image and back
//!
//! # Usage Examples
//!
//! ## Hide a secret in an image
//!
//! ```rust
//! let cover = image::DynamicImage::ImageRgb8(image::RgbImage::new(32, 32));
//!
//! let carrier = pixelseal_core::hide_secret(&cover, b"Hello, World!", "SuperSecret42")
//!     .expect("Failed to hide the secret");
//! let stego = image::DynamicImage::ImageRgb8(carrier);
//!
//! let secret = pixelseal_core::unveil_secret(&stego, "SuperSecret42")
//!     .expect("Failed to unveil the secret");
//! assert_eq!(secret, b"Hello, World!");
//! ```
//!
//! ## Work with files
//!
//! ```rust,no_run
//! pixelseal_core::api::hide::prepare()
//!     .with_message("Hello, World!")
//!     .with_password("SuperSecret42")
//!     .with_image("carrier-image.png")
//!     .with_output("image-with-a-secret.png")
//!     .execute()
//!     .expect("Failed to hide the message");
//! ```

#![warn(clippy::redundant_else)]

pub mod api;
pub mod commands;
pub mod error;
pub mod frame;
pub mod media;
pub mod result;
pub mod secret;

use image::{DynamicImage, RgbImage};

pub use crate::error::PixelSealError;
pub use crate::media::image::LsbCodec;
pub use crate::media::{CapacityReport, Media, Persist};
pub use crate::result::Result;

/// Embeds `payload` into the LSBs of the RGB normalized `cover`.
///
/// The cover stays untouched, the returned image differs from the normalized
/// cover only in the least significant bits of the first `ceil((len + 4) * 8 / 3)` pixels.
pub fn embed(cover: &DynamicImage, payload: &[u8]) -> Result<RgbImage> {
    let mut media = Media::from_image(cover);
    media.hide_data(payload)?;

    Ok(media.into_image())
}

/// Extracts the payload hidden by [`embed`]
pub fn extract(stego: &DynamicImage) -> Result<Vec<u8>> {
    Media::from_image(stego).unveil_data()
}

/// Encrypts `secret` with `password` and embeds the envelope into `cover`
pub fn hide_secret(cover: &DynamicImage, secret: &[u8], password: &str) -> Result<RgbImage> {
    let mut media = Media::from_image(cover);
    media.hide_secret(secret, password)?;

    Ok(media.into_image())
}

/// Extracts the envelope from `stego` and decrypts it with `password`
pub fn unveil_secret(stego: &DynamicImage, password: &str) -> Result<Vec<u8>> {
    Media::from_image(stego).unveil_secret(password)
}
