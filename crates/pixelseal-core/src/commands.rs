//! Plain function entry points, used by the command line interface
use std::path::{Path, PathBuf};

use crate::media::{CapacityReport, Media};
use crate::Result;

pub fn hide(
    media: &Path,
    write_to_file: &Path,
    data_file: Option<PathBuf>,
    message: Option<String>,
    password: Option<String>,
) -> Result<PathBuf> {
    crate::api::hide::prepare()
        .with_image(media)
        .with_output(write_to_file)
        .use_password(password)
        .use_file(data_file)
        .use_message(message)
        .execute()
}

pub fn unveil(secret_media: &Path, destination: &Path, password: Option<String>) -> Result<PathBuf> {
    crate::api::unveil::prepare()
        .from_secret_file(secret_media)
        .into_output_folder(destination)
        .using_password(password)
        .execute()
}

/// unveil the hidden envelope, no decryption is happening.
/// Just a raw binary dump of the framed payload found by the LSB algorithm.
pub fn unveil_raw(secret_media: &Path, destination_file: &Path) -> Result<()> {
    crate::api::unveil_raw::prepare()
        .from_secret_file(secret_media)
        .into_raw_file(destination_file)
        .execute()
}

pub fn capacity(media: &Path) -> Result<CapacityReport> {
    Ok(Media::from_file(media)?.capacity_report())
}
