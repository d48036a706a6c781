use std::path::PathBuf;

use clap::Args;

/// Shows how many bytes an image can carry
#[derive(Args, Debug)]
pub struct CapacityArgs {
    /// Carrier image such as PNG, BMP or JPEG
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub media: PathBuf,
}

impl CapacityArgs {
    pub fn run(self) -> crate::CliResult<()> {
        let report = pixelseal_core::commands::capacity(&self.media)?;
        println!("{report}");

        Ok(())
    }
}
