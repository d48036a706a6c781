use std::path::PathBuf;

use clap::Args;

/// Unveils the encrypted envelope from an image without decrypting it
#[derive(Args, Debug)]
pub struct UnveilRawArgs {
    /// Source image that contains secret data
    #[arg(short = 'i', long = "in", value_name = "image source file", required = true)]
    pub media: PathBuf,

    /// Raw data will be stored as binary file
    #[arg(short = 'o', long = "out", value_name = "output file", required = true)]
    pub output_file: PathBuf,
}

impl UnveilRawArgs {
    pub fn run(self) -> crate::CliResult<()> {
        pixelseal_core::commands::unveil_raw(&self.media, &self.output_file)
    }
}
