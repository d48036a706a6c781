use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

use image::{DynamicImage, ImageFormat, RgbImage};
use log::{debug, error};
use pixelseal_cipher::{decrypt_data, encrypt_data};

use crate::error::PixelSealError;
use crate::frame::LENGTH_PREFIX_LEN;
use crate::media::image::{capacity_of, normalize, LsbCodec};
use crate::result::Result;

use super::Persist;

/// file extensions a carrier image is accepted from
pub const SUPPORTED_IMAGE_EXTENSIONS: &[&str] = &["png", "bmp", "jpg", "jpeg"];

/// a carrier image for steganography, always held as RGB
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Media {
    image: RgbImage,
}

impl Media {
    pub fn from_image(img: &DynamicImage) -> Self {
        Self {
            image: normalize(img),
        }
    }

    pub fn from_rgb(image: RgbImage) -> Self {
        Self { image }
    }

    pub fn from_file(f: &Path) -> Result<Self> {
        let Some(ext) = f.extension().and_then(|ext| ext.to_str()) else {
            return Err(PixelSealError::UnsupportedMedia);
        };
        let ext = ext.to_lowercase();
        if !SUPPORTED_IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            return Err(PixelSealError::UnsupportedMedia);
        }

        let img = image::open(f).map_err(|e| {
            error!("Error opening image {f:?}: {e}");
            PixelSealError::InvalidImageMedia
        })?;
        debug!(
            "Loaded carrier {f:?} with {}x{} pixels and color type {:?}",
            img.width(),
            img.height(),
            img.color()
        );

        Ok(Self::from_image(&img))
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    pub fn capacity(&self) -> usize {
        capacity_of(&self.image)
    }

    pub fn capacity_report(&self) -> CapacityReport {
        CapacityReport::of(&self.image)
    }

    /// embeds `data` as length prefixed frame into the LSBs of this media
    pub fn hide_data(&mut self, data: &[u8]) -> Result<&mut Self> {
        debug!(
            "Hiding {} bytes in a carrier of {} bytes capacity",
            data.len(),
            self.capacity()
        );
        LsbCodec::hide(&mut self.image, data)?;

        Ok(self)
    }

    /// extracts the length prefixed frame from the LSBs of this media
    pub fn unveil_data(&self) -> Result<Vec<u8>> {
        LsbCodec::unveil(&self.image)
    }

    /// encrypts `secret` with `password` and hides the resulting envelope
    pub fn hide_secret(&mut self, secret: &[u8], password: &str) -> Result<&mut Self> {
        // fail before paying for the key derivation
        let required = LENGTH_PREFIX_LEN + pixelseal_cipher::ENVELOPE_OVERHEAD + secret.len();
        if required > self.capacity() {
            return Err(PixelSealError::Capacity {
                required,
                available: self.capacity(),
            });
        }
        let envelope = encrypt_data(secret, password)?;

        self.hide_data(&envelope)
    }

    /// extracts the envelope and decrypts it with `password`
    pub fn unveil_secret(&self, password: &str) -> Result<Vec<u8>> {
        let envelope = self.unveil_data()?;

        Ok(decrypt_data(&envelope, password)?)
    }

    /// the carrier is always written as PNG, a lossy format would destroy the hidden bits
    pub fn save_to_writer<W: Write + Seek>(&self, mut writer: W) -> Result<()> {
        self.image
            .write_to(&mut writer, ImageFormat::Png)
            .map_err(|e| {
                error!("Error saving image: {e}");
                PixelSealError::ImageEncodingError
            })
    }
}

impl Persist for Media {
    fn save_as(&mut self, file: &Path) -> Result<()> {
        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            PixelSealError::WriteError { source: e }
        })?;
        let mut writer = BufWriter::new(f);
        self.save_to_writer(&mut writer)?;
        writer
            .flush()
            .map_err(|source| PixelSealError::WriteError { source })?;
        debug!("Saved carrier to {file:?}");

        Ok(())
    }
}

/// What a carrier image can take
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityReport {
    pub width: u32,
    pub height: u32,
    /// bytes of the frame, including the length prefix
    pub capacity: usize,
    /// largest plain secret that still fits after encryption and framing
    pub max_secret_len: usize,
}

impl CapacityReport {
    pub fn of(image: &RgbImage) -> Self {
        let capacity = capacity_of(image);
        Self {
            width: image.width(),
            height: image.height(),
            capacity,
            max_secret_len: capacity
                .saturating_sub(LENGTH_PREFIX_LEN + pixelseal_cipher::ENVELOPE_OVERHEAD),
        }
    }
}

impl fmt::Display for CapacityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} pixels, capacity {} bytes, secrets up to {} bytes",
            self.width, self.height, self.capacity, self.max_secret_len
        )
    }
}
