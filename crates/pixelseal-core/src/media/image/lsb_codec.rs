use std::io::{Read, Result as IoResult, Write};

use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};
use image::RgbImage;

use super::channels::{ChannelSpace, Positions};
use crate::frame::{FrameReader, FrameWriter};
use crate::result::Result;

/// replaces the least significant bit of a color channel, the 7 high bits stay untouched
#[inline(always)]
pub fn hide_bit(channel: u8, bit: bool) -> u8 {
    (channel & (u8::MAX - 1)) | u8::from(bit)
}

#[inline(always)]
pub fn unveil_bit(channel: u8) -> bool {
    channel & 1 == 1
}

/// Writes bytes MSB first into the channel LSBs of an image.
///
/// Only whole bytes are written, once the image has less than 8 channels left
/// `write` returns `Ok(0)`, which turns `write_all` into a `WriteZero` error.
pub struct LsbWriter<'i> {
    carrier: &'i mut RgbImage,
    positions: Positions,
}

impl<'i> LsbWriter<'i> {
    pub fn new(carrier: &'i mut RgbImage) -> Self {
        let positions = ChannelSpace::of(carrier).positions();
        Self { carrier, positions }
    }

    /// bits that can still be written
    pub fn available_bits(&self) -> usize {
        self.positions.len()
    }
}

impl Write for LsbWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> IoResult<usize> {
        let bytes = buf.len().min(self.available_bits() >> 3);
        let mut bits = BitReader::endian(&buf[..bytes], BigEndian);

        for position in self.positions.by_ref().take(bytes << 3) {
            let bit = bits.read_bit()?;
            let color = &mut self.carrier.get_pixel_mut(position.x, position.y).0[position.channel];
            *color = hide_bit(*color, bit);
        }

        Ok(bytes)
    }

    fn flush(&mut self) -> IoResult<()> {
        Ok(())
    }
}

/// Reads bytes MSB first from the channel LSBs of an image.
///
/// Once less than 8 channels are left `read` returns `Ok(0)`.
pub struct LsbReader<'i> {
    carrier: &'i RgbImage,
    positions: Positions,
}

impl<'i> LsbReader<'i> {
    pub fn new(carrier: &'i RgbImage) -> Self {
        Self {
            carrier,
            positions: ChannelSpace::of(carrier).positions(),
        }
    }

    /// bits that can still be read
    pub fn available_bits(&self) -> usize {
        self.positions.len()
    }
}

impl Read for LsbReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> IoResult<usize> {
        let bytes = buf.len().min(self.available_bits() >> 3);
        let mut bits = BitWriter::endian(&mut buf[..bytes], BigEndian);

        for position in self.positions.by_ref().take(bytes << 3) {
            let color = self.carrier.get_pixel(position.x, position.y).0[position.channel];
            bits.write_bit(unveil_bit(color))?;
        }

        Ok(bytes)
    }
}

/// Factory for the LSB image reader and writer
pub struct LsbCodec;

impl LsbCodec {
    /// builds a LSB Image Decoder that implements Read
    pub fn decoder(input: &RgbImage) -> LsbReader<'_> {
        LsbReader::new(input)
    }

    /// builds a LSB Image Encoder that implements Write
    pub fn encoder(carrier: &mut RgbImage) -> LsbWriter<'_> {
        LsbWriter::new(carrier)
    }

    /// Writes `payload` as length prefixed frame into `carrier`.
    ///
    /// The capacity is checked upfront, on error the carrier is left untouched.
    pub fn hide(carrier: &mut RgbImage, payload: &[u8]) -> Result<()> {
        let encoder = Self::encoder(carrier);
        let available_bits = encoder.available_bits();
        FrameWriter::new(encoder, available_bits).write_frame(payload)?;

        Ok(())
    }

    /// Reads the length prefixed frame from `carrier` and returns its payload
    pub fn unveil(carrier: &RgbImage) -> Result<Vec<u8>> {
        let decoder = Self::decoder(carrier);
        let available_bits = decoder.available_bits();

        FrameReader::new(decoder, available_bits).read_frame()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::prepare_linear_growing_colors;
    use crate::PixelSealError;

    #[test]
    fn should_hide_and_unveil_single_bits() {
        assert_eq!(hide_bit(0b1010_1010, true), 0b1010_1011);
        assert_eq!(hide_bit(0b1010_1011, false), 0b1010_1010);
        assert_eq!(hide_bit(u8::MAX, true), u8::MAX);
        assert_eq!(hide_bit(0, false), 0);

        assert!(unveil_bit(0b0000_0001));
        assert!(!unveil_bit(0b1111_1110));
    }

    #[test]
    fn should_write_msb_first_into_rgb_channels() {
        let mut img = RgbImage::new(3, 1);
        {
            let mut encoder = LsbCodec::encoder(&mut img);
            encoder.write_all(&[0b1000_0001]).unwrap();
        }

        assert_eq!(img.get_pixel(0, 0).0, [1, 0, 0]);
        assert_eq!(img.get_pixel(1, 0).0, [0, 0, 0]);
        assert_eq!(img.get_pixel(2, 0).0, [0, 1, 0]);
    }

    #[test]
    fn should_encode_and_decode() {
        let mut img = prepare_linear_growing_colors(8, 8);
        let secret_message = "Hello World!".as_bytes();

        LsbCodec::encoder(&mut img)
            .write_all(secret_message)
            .expect("Cannot write to codec");

        let mut buf = vec![0; secret_message.len()];
        LsbCodec::decoder(&img)
            .read_exact(&mut buf[..])
            .expect("Cannot read 12 bytes from codec");

        let msg = String::from_utf8(buf).expect("Cannot convert result to string");
        assert_eq!(msg, "Hello World!");
    }

    #[test]
    fn writer_should_refuse_once_the_image_is_full() {
        // 3 pixels, 9 channels, only room for one byte
        let mut img = RgbImage::new(3, 1);
        let mut encoder = LsbCodec::encoder(&mut img);

        assert_eq!(encoder.write(&[0xff, 0xff]).unwrap(), 1);
        assert_eq!(encoder.available_bits(), 1);
        assert_eq!(encoder.write(&[0xff]).unwrap(), 0);
        assert_eq!(
            encoder.write_all(&[0xff]).unwrap_err().kind(),
            std::io::ErrorKind::WriteZero
        );
    }

    #[test]
    fn reader_should_hit_eof_once_the_image_is_exhausted() {
        let img = RgbImage::new(3, 1);
        let mut decoder = LsbCodec::decoder(&img);
        let mut buf = [0u8; 2];

        assert_eq!(
            decoder.read_exact(&mut buf).unwrap_err().kind(),
            std::io::ErrorKind::UnexpectedEof
        );
    }

    #[test]
    fn should_hide_and_unveil_a_frame() {
        let mut img = prepare_linear_growing_colors(10, 10);
        LsbCodec::hide(&mut img, b"hi").unwrap();

        assert_eq!(LsbCodec::unveil(&img).unwrap(), b"hi");
    }

    #[test]
    fn hide_should_not_touch_the_carrier_when_it_is_too_small() {
        let original = prepare_linear_growing_colors(10, 10);
        let mut img = original.clone();

        match LsbCodec::hide(&mut img, &[0u8; 34]) {
            Err(PixelSealError::Capacity {
                required,
                available,
            }) => {
                assert_eq!(required, 38);
                assert_eq!(available, 37);
            }
            other => panic!("expected a capacity error, got {other:?}"),
        }
        assert_eq!(img, original);
    }
}
