use image::RgbImage;

/// color channels of a pixel that carry data, in order R, G, B
pub const CHANNELS: usize = 3;

/// A single color channel of a single pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelPosition {
    pub x: u32,
    pub y: u32,
    pub channel: usize,
}

/// The flat index space `[0, width * height * 3)` of an RGB image.
///
/// Index `i` addresses the channel `i % 3` of the `i / 3`-th pixel, pixels are
/// counted row by row, top to bottom and left to right. Writing and reading
/// of bits both walk this space, so they can never disagree on the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelSpace {
    width: u32,
    height: u32,
}

impl ChannelSpace {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn of(image: &RgbImage) -> Self {
        Self::new(image.width(), image.height())
    }

    /// number of channels, which is the number of bits the image can carry
    pub fn len(&self) -> usize {
        self.width as usize * self.height as usize * CHANNELS
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// number of whole bytes the image can carry
    pub fn capacity(&self) -> usize {
        self.len() / 8
    }

    /// maps a flat index onto its pixel coordinates and channel
    pub fn locate(&self, index: usize) -> Option<ChannelPosition> {
        if index >= self.len() {
            return None;
        }
        let pixel = index / CHANNELS;
        let width = self.width as usize;

        Some(ChannelPosition {
            x: (pixel % width) as u32,
            y: (pixel / width) as u32,
            channel: index % CHANNELS,
        })
    }

    /// all positions, starting at the very first channel
    pub fn positions(&self) -> Positions {
        Positions {
            space: *self,
            next: 0,
        }
    }
}

/// bounded iterator over a [`ChannelSpace`]
#[derive(Debug, Clone)]
pub struct Positions {
    space: ChannelSpace,
    next: usize,
}

impl Positions {
    /// flat index of the next position to be yielded
    pub fn index(&self) -> usize {
        self.next
    }
}

impl Iterator for Positions {
    type Item = ChannelPosition;

    fn next(&mut self) -> Option<Self::Item> {
        let position = self.space.locate(self.next)?;
        self.next += 1;

        Some(position)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.space.len().saturating_sub(self.next);
        (left, Some(left))
    }
}

impl ExactSizeIterator for Positions {}
