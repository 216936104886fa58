use std::fmt;

use spr::Spr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameInfo {
    pub index: usize,
    pub width: u32,
    pub height: u32,
    pub pixel_count: usize,
}

impl fmt::Display for FrameInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>4}: {}x{} ({} pixels)",
            self.index, self.width, self.height, self.pixel_count
        )
    }
}

pub fn sprite_info(spr: &Spr) -> Vec<FrameInfo> {
    spr.frames
        .iter()
        .enumerate()
        .map(|(index, frame)| FrameInfo {
            index,
            width: frame.width,
            height: frame.height,
            pixel_count: frame.pixel_count(),
        })
        .collect()
}

#[cfg(test)]
mod test {
    use spr::{Spr, SprFrame, SprHeader};

    use super::*;

    #[test]
    fn info_per_frame() {
        let spr = Spr {
            header: SprHeader { num_sprites: 2 },
            frames: vec![
                SprFrame {
                    width: 2,
                    height: 3,
                    pixels: vec![0; 6],
                },
                SprFrame {
                    width: 0,
                    height: 4,
                    pixels: vec![],
                },
            ],
        };

        let info = sprite_info(&spr);

        assert_eq!(info.len(), 2);
        assert_eq!(
            info[0],
            FrameInfo {
                index: 0,
                width: 2,
                height: 3,
                pixel_count: 6
            }
        );
        assert_eq!(info[1].pixel_count, 0);
        assert_eq!(info[1].to_string(), "   1: 0x4 (0 pixels)");
    }
}
