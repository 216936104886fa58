//! Creatures 1 `.spr` sprite sheets.
//!
//! ```text
//! u16 num_sprites
//! num_sprites * { u32 offset, u16 width, u16 height }
//! pixel data at each absolute offset, width * height palette indices
//! ```
//!
//! Everything is little-endian.
pub mod error;
mod palette;
mod parser;
pub mod schema;
mod types;
mod utils;

pub use palette::PALETTE_BYTE_LENGTH;
pub use parser::{decode_sprite, decode_sprite_with};
pub use types::*;
pub use utils::TRANSPARENT_INDEX;
