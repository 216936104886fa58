#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SprHeader {
    pub num_sprites: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SprFrameHeader {
    /// Absolute offset of the pixel data from the start of the file
    pub offset: u32,
    pub width: u32,
    pub height: u32,
}

/// Palette indices, row major. Index 0 is transparent.
pub type SprFrameImage = Vec<u8>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SprFrame {
    pub width: u32,
    pub height: u32,
    pub pixels: SprFrameImage,
}

pub type SprFrames = Vec<SprFrame>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spr {
    pub header: SprHeader,
    pub frames: SprFrames,
}

/// What to do with a frame whose pixel range runs past the end of the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutOfBoundsPolicy {
    /// Fail the whole decode
    #[default]
    Abort,
    /// Replace the frame with a 0x0 frame and keep going
    EmptyFrame,
}

pub const PALETTE_COUNT: usize = 256;

pub type PaletteColors = [[u8; 3]; PALETTE_COUNT];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette(pub PaletteColors);

/// How channel values are stored in a palette file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaletteDepth {
    /// 0 to 63 per channel, like `palette.dta`
    #[default]
    Vga6,
    /// 0 to 255 per channel
    Rgb8,
}
