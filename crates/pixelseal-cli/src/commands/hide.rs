use std::path::PathBuf;

use clap::Args;
use log::info;

use crate::CliResult;

/// Encrypts a secret and hides it in an image
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Password used to encrypt the data, prompted for when missing
    #[arg(short, long, value_name = "password")]
    pub password: Option<String>,

    /// Carrier image such as PNG, BMP or JPEG, used readonly.
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub media: PathBuf,

    /// Final image will be stored as PNG file, or as stego_image.png inside a folder
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// File to hide in the image, takes precedence over a message
    #[arg(
        short = 'd',
        long = "data",
        value_name = "data file",
        required_unless_present = "message"
    )]
    pub data_file: Option<PathBuf>,

    /// A text message that will be hidden
    #[arg(
        short,
        long,
        value_name = "text message",
        required_unless_present = "data_file"
    )]
    pub message: Option<String>,
}

impl HideArgs {
    pub fn run(self) -> CliResult<()> {
        let password = self
            .password
            .or_else(|| crate::cli::ask_for_password(true));

        let target = pixelseal_core::commands::hide(
            &self.media,
            &self.write_to_file,
            self.data_file,
            self.message,
            password,
        )?;
        info!("Secret hidden in {target:?}");

        Ok(())
    }
}
