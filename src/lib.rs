//! Decodes Creatures 1 `.spr` sprites and writes their frames out as images.
pub mod config;
pub mod modules;
