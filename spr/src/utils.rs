use image::{imageops, Rgba, RgbaImage};

use crate::{error::SprError, Palette, Spr, SprFrame};

pub const TRANSPARENT_INDEX: u8 = 0;

impl SprFrame {
    /// Index 0 becomes fully transparent, everything else is opaque.
    pub fn to_rgba8(&self, palette: &Palette) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            let color_index = self
                .pixels
                .get(x as usize + y as usize * self.width as usize)
                .copied()
                .unwrap_or(TRANSPARENT_INDEX);

            if color_index == TRANSPARENT_INDEX {
                return Rgba([0, 0, 0, 0]);
            }

            let [r, g, b] = palette.color(color_index);
            Rgba([r, g, b, 255])
        })
    }

    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }
}

impl Spr {
    pub fn frame(&self, frame_index: usize) -> Option<&SprFrame> {
        self.frames.get(frame_index)
    }

    pub fn to_rgba8(&self, frame_index: usize, palette: &Palette) -> Option<RgbaImage> {
        self.frame(frame_index).map(|frame| frame.to_rgba8(palette))
    }

    /// Lays every frame left to right, top aligned, with `padding` transparent columns in between.
    ///
    /// Fails when the strip would be wider than `u32::MAX`.
    pub fn to_strip(&self, palette: &Palette, padding: u32) -> Result<RgbaImage, SprError> {
        let gaps = (self.frames.len() as u64).saturating_sub(1);
        let frames_width: u64 = self.frames.iter().map(|frame| frame.width as u64).sum();
        let strip_width = (padding as u64)
            .checked_mul(gaps)
            .and_then(|padding_width| padding_width.checked_add(frames_width));

        let width = strip_width
            .and_then(|width| u32::try_from(width).ok())
            .ok_or(SprError::StripTooLarge {
                width: strip_width.unwrap_or(u64::MAX),
            })?;

        let height = self
            .frames
            .iter()
            .map(|frame| frame.height)
            .max()
            .unwrap_or(0);

        let mut strip = RgbaImage::new(width, height);
        let mut x = 0i64;

        self.frames.iter().for_each(|frame| {
            imageops::replace(&mut strip, &frame.to_rgba8(palette), x, 0);
            x += frame.width as i64 + padding as i64;
        });

        Ok(strip)
    }
}
