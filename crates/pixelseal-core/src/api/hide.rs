use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use super::Password;
use crate::media::{Media, Persist};
use crate::secret::DEFAULT_CARRIER_FILE_NAME;
use crate::{PixelSealError, Result};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<String>,
    file: Option<PathBuf>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    password: Password,
}

impl HideApi {
    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().to_string());
        self
    }

    /// the raw content of this file becomes the secret, its name is not stored
    pub fn with_file<A: AsRef<Path>>(mut self, data_file: A) -> Self {
        self.file = Some(data_file.as_ref().to_path_buf());
        self
    }

    pub fn use_file(mut self, data_file: Option<PathBuf>) -> Self {
        self.file = data_file;
        self
    }

    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// Either a file or a folder, for a folder the carrier is named `stego_image.png`
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Set the password
    pub fn with_password(mut self, password: &str) -> Self {
        self.password = password.into();
        self
    }

    /// Set the password, `None` fails on execute
    pub fn use_password<P: Into<Password>>(mut self, password: P) -> Self {
        self.password = password.into();
        self
    }

    /// Executes the hiding and returns the path of the written carrier image
    pub fn execute(self) -> Result<PathBuf> {
        let secret = self.secret()?;
        let Some(password) = self.password.as_deref() else {
            return Err(PixelSealError::MissingPassword);
        };
        let Some(image) = self.image.as_ref() else {
            return Err(PixelSealError::CarrierNotSet);
        };
        let Some(output) = self.output.as_ref() else {
            return Err(PixelSealError::TargetNotSet);
        };

        let mut media = Media::from_file(image)?;
        media.hide_secret(&secret, password)?;

        let target = if output.is_dir() {
            output.join(DEFAULT_CARRIER_FILE_NAME)
        } else {
            output.clone()
        };
        if !has_png_extension(&target) {
            warn!("The carrier {target:?} is written as PNG regardless of its extension");
        }
        media.save_as(&target)?;

        Ok(target)
    }

    fn secret(&self) -> Result<Vec<u8>> {
        match (&self.file, &self.message) {
            (Some(file), message) => {
                if message.is_some() {
                    warn!("Both a file and a message were given, only the file is hidden");
                }
                debug!("Reading secret from {file:?}");
                fs::read(file).map_err(|source| PixelSealError::ReadError { source })
            }
            (None, Some(message)) => Ok(message.as_bytes().to_vec()),
            (None, None) => Err(PixelSealError::MissingSecret),
        }
    }
}

fn has_png_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
}
