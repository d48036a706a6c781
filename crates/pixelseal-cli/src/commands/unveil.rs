use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Unveils and decrypts a secret from an image
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Password used to encrypt the data, prompted for when missing
    #[arg(short, long, value_name = "password")]
    pub password: Option<String>,

    /// Source image that contains secret data
    #[arg(short = 'i', long = "in", value_name = "image source file", required = true)]
    pub media: PathBuf,

    /// The secret will be stored in that folder, as secret.txt or secret_extracted.bin
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output folder",
        required = true
    )]
    pub output_folder: PathBuf,
}

impl UnveilArgs {
    pub fn run(self) -> CliResult<()> {
        let password = self
            .password
            .or_else(|| crate::cli::ask_for_password(false));

        let target = pixelseal_core::commands::unveil(&self.media, &self.output_folder, password)?;
        println!("{}", target.display());

        Ok(())
    }
}
