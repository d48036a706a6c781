use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;

use super::Password;
use crate::media::Media;
use crate::secret::suggested_file_name;
use crate::{PixelSealError, Result};

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    output_folder: Option<PathBuf>,
    password: Password,
}

impl UnveilApi {
    /// This is the secret image that contains the data to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// This is the folder where the secret will be saved to
    pub fn into_output_folder(mut self, output_folder: impl AsRef<Path>) -> Self {
        self.output_folder = Some(output_folder.as_ref().to_path_buf());
        self
    }

    /// Set the password the secret was encrypted with
    pub fn using_password<P: Into<Password>>(mut self, password: P) -> Self {
        self.password = password.into();
        self
    }

    /// Execute the unveil process and returns the path of the written secret
    pub fn execute(self) -> Result<PathBuf> {
        let Some(secret_media) = self.secret_media else {
            return Err(PixelSealError::CarrierNotSet);
        };
        let Some(output_folder) = self.output_folder else {
            return Err(PixelSealError::TargetNotSet);
        };
        let Some(password) = self.password.as_deref() else {
            return Err(PixelSealError::MissingPassword);
        };

        let media = Media::from_file(&secret_media)?;
        let secret = media.unveil_secret(password)?;

        let target = output_folder.join(suggested_file_name(&secret));
        debug!("Writing {} bytes of secret to {target:?}", secret.len());
        let mut target_file =
            File::create(&target).map_err(|source| PixelSealError::WriteError { source })?;
        target_file
            .write_all(&secret)
            .map_err(|source| PixelSealError::WriteError { source })?;

        Ok(target)
    }
}
