use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::media::Media;
use crate::{PixelSealError, Result};

pub fn prepare() -> UnveilRawApi {
    UnveilRawApi::default()
}

/// Dumps the hidden envelope as it is, without decrypting it
#[derive(Default, Debug)]
pub struct UnveilRawApi {
    secret_media: Option<PathBuf>,
    destination_file: Option<PathBuf>,
}

impl UnveilRawApi {
    pub fn from_secret_file(mut self, secret_media: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_media.as_ref().to_path_buf());
        self
    }

    pub fn into_raw_file(mut self, destination_file: impl AsRef<Path>) -> Self {
        self.destination_file = Some(destination_file.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<()> {
        let Some(secret_media) = self.secret_media else {
            return Err(PixelSealError::CarrierNotSet);
        };
        let Some(destination_file) = self.destination_file else {
            return Err(PixelSealError::TargetNotSet);
        };

        let envelope = Media::from_file(&secret_media)?.unveil_data()?;
        let mut destination_file = File::create(destination_file)
            .map_err(|source| PixelSealError::WriteError { source })?;

        destination_file
            .write_all(&envelope)
            .map_err(|source| PixelSealError::WriteError { source })
    }
}
