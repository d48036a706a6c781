mod channels;
pub mod lsb_codec;

use image::{DynamicImage, RgbImage};

pub use channels::{ChannelPosition, ChannelSpace, Positions, CHANNELS};
pub use lsb_codec::{LsbCodec, LsbReader, LsbWriter};

/// Brings any decoded image into 3 channel RGB with 8 bits per channel.
/// Alpha channels are dropped, palettes and gray scales are expanded.
pub fn normalize(image: &DynamicImage) -> RgbImage {
    image.to_rgb8()
}

/// bytes an image can carry, the length prefix included
pub fn capacity_of(image: &RgbImage) -> usize {
    ChannelSpace::of(image).capacity()
}
