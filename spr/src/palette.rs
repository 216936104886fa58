use std::{ffi::OsStr, fs::OpenOptions, io::Read, path::Path};

use nom::{bytes::complete::take, combinator::map, multi::count, Parser};

use crate::{
    error::SprError, schema::IResult, Palette, PaletteColors, PaletteDepth, PALETTE_COUNT,
};

pub const PALETTE_BYTE_LENGTH: usize = PALETTE_COUNT * 3;

fn parse_palette(i: &[u8]) -> IResult<'_, Vec<[u8; 3]>> {
    count(
        map(take(3usize), |arr: &[u8]| [arr[0], arr[1], arr[2]]),
        PALETTE_COUNT,
    )
    .parse(i)
}

impl Palette {
    /// Reads 256 RGB triples. Anything after the first 768 bytes is ignored.
    pub fn open_from_bytes(bytes: &[u8], depth: PaletteDepth) -> Result<Palette, SprError> {
        let too_short = || SprError::PaletteTooShort {
            length: bytes.len(),
        };

        let (_, colors) = parse_palette(bytes).map_err(|_| too_short())?;
        let colors: PaletteColors = colors.try_into().map_err(|_| too_short())?;

        let colors = match depth {
            PaletteDepth::Rgb8 => colors,
            // 6 bits to 8 bits
            PaletteDepth::Vga6 => {
                colors.map(|color| color.map(|c| (c as u16 * 4).min(255) as u8))
            }
        };

        Ok(Palette(colors))
    }

    pub fn open_from_file(
        path: impl AsRef<OsStr> + AsRef<Path>,
        depth: PaletteDepth,
    ) -> Result<Palette, SprError> {
        let mut file = OpenOptions::new().read(true).open(path)?;
        let mut bytes = vec![];

        file.read_to_end(&mut bytes)?;

        Self::open_from_bytes(&bytes, depth)
    }

    /// Index `i` maps to grey level `i`.
    pub fn greyscale() -> Palette {
        Palette(std::array::from_fn(|i| [i as u8; 3]))
    }

    pub fn color(&self, index: u8) -> [u8; 3] {
        self.0[index as usize]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::greyscale()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn vga_palette_is_scaled() {
        let mut bytes = vec![0u8; PALETTE_BYTE_LENGTH];
        bytes[3..6].copy_from_slice(&[63, 32, 1]);
        bytes[765..768].copy_from_slice(&[10, 20, 30]);

        let palette = Palette::open_from_bytes(&bytes, PaletteDepth::Vga6).unwrap();

        assert_eq!(palette.color(0), [0, 0, 0]);
        assert_eq!(palette.color(1), [252, 128, 4]);
        assert_eq!(palette.color(255), [40, 80, 120]);
    }

    #[test]
    fn rgb8_palette_is_kept() {
        let bytes: Vec<u8> = (0..PALETTE_BYTE_LENGTH).map(|i| (i % 251) as u8).collect();
        let palette = Palette::open_from_bytes(&bytes, PaletteDepth::Rgb8).unwrap();

        assert_eq!(palette.color(0), [0, 1, 2]);
        assert_eq!(palette.color(2), [6, 7, 8]);
    }

    #[test]
    fn trailing_bytes_ignored() {
        let mut bytes = vec![1u8; PALETTE_BYTE_LENGTH];
        bytes.extend([9, 9, 9, 9]);

        let palette = Palette::open_from_bytes(&bytes, PaletteDepth::Rgb8).unwrap();
        assert_eq!(palette.color(255), [1, 1, 1]);
    }

    #[test]
    fn short_palette() {
        let bytes = vec![0u8; PALETTE_BYTE_LENGTH - 1];
        let err = Palette::open_from_bytes(&bytes, PaletteDepth::Vga6).unwrap_err();

        assert!(matches!(err, SprError::PaletteTooShort { length: 767 }));
    }

    #[test]
    fn greyscale_fallback() {
        let palette = Palette::default();

        assert_eq!(palette.color(0), [0, 0, 0]);
        assert_eq!(palette.color(128), [128, 128, 128]);
        assert_eq!(palette.color(255), [255, 255, 255]);
    }
}
