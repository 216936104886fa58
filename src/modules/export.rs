//! Writes decoded frames out as PNG.
use std::path::{Path, PathBuf};

use eyre::eyre;
use image::ImageFormat;
use rayon::prelude::*;
use spr::{Palette, Spr};

use crate::config::Config;

/// One `<stem>_<index>.png` per frame. Zero-area frames have nothing to write and are skipped.
///
/// Returns written paths in frame order.
pub fn export_frames(
    spr: &Spr,
    palette: &Palette,
    out_dir: &Path,
    stem: &str,
) -> eyre::Result<Vec<PathBuf>> {
    let written = spr
        .frames
        .par_iter()
        .enumerate()
        .map(|(index, frame)| -> eyre::Result<Option<PathBuf>> {
            if frame.width == 0 || frame.height == 0 {
                log::warn!("Frame {index} is empty. Skipping");
                return Ok(None);
            }

            let path = out_dir.join(format!("{stem}_{index}.png"));

            frame
                .to_rgba8(palette)
                .save_with_format(&path, ImageFormat::Png)
                .map_err(|op| eyre!("Cannot write {}: {op}", path.display()))?;

            Ok(Some(path))
        })
        .collect::<eyre::Result<Vec<_>>>()?;

    Ok(written.into_iter().flatten().collect())
}

/// Every frame side by side in `<stem>_strip.png`.
pub fn export_strip(
    spr: &Spr,
    palette: &Palette,
    padding: u32,
    out_dir: &Path,
    stem: &str,
) -> eyre::Result<PathBuf> {
    let strip = spr.to_strip(palette, padding)?;

    if strip.width() == 0 || strip.height() == 0 {
        return Err(eyre!("Sprite has no pixels to put in a strip"));
    }

    let path = out_dir.join(format!("{stem}_strip.png"));

    strip
        .save_with_format(&path, ImageFormat::Png)
        .map_err(|op| eyre!("Cannot write {}: {op}", path.display()))?;

    Ok(path)
}

#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub path: PathBuf,
    /// Defaults to the folder of the sprite
    pub out_dir: Option<PathBuf>,
    pub strip: bool,
    /// Overrides the configured palette
    pub palette: Option<PathBuf>,
}

/// Decodes the sprite then writes every frame, and the strip when asked.
pub fn export(options: &ExportOptions, config: &Config) -> eyre::Result<Vec<PathBuf>> {
    let palette = match &options.palette {
        Some(path) => Palette::open_from_file(path, config.palette_depth.into())?,
        None => config.load_palette()?,
    };

    let spr = Spr::open_from_file_with(&options.path, config.out_of_bounds_policy())?;

    log::info!(
        "Decoded {} frame(s) from {}",
        spr.frames.len(),
        options.path.display()
    );

    let stem = options
        .path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| eyre!("Cannot get file name of {}", options.path.display()))?;

    let out_dir = match &options.out_dir {
        Some(out_dir) => out_dir.clone(),
        None => options
            .path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default(),
    };

    std::fs::create_dir_all(&out_dir)?;

    let mut written = export_frames(&spr, &palette, &out_dir, stem)?;

    if options.strip {
        written.push(export_strip(
            &spr,
            &palette,
            config.strip_padding,
            &out_dir,
            stem,
        )?);
    }

    Ok(written)
}

#[cfg(test)]
mod test {
    use byte_writer::ByteWriter;

    use super::*;

    fn sample_spr() -> Vec<u8> {
        let mut writer = ByteWriter::new();
        writer.append_u16(3);
        writer.append_u32(26);
        writer.append_u16(2);
        writer.append_u16(2);
        writer.append_u32(0);
        writer.append_u16(0);
        writer.append_u16(0);
        writer.append_u32(30);
        writer.append_u16(1);
        writer.append_u16(1);
        writer.append_u8_slice(&[0, 1, 2, 3]);
        writer.append_u8(200);
        writer.data
    }

    #[test]
    fn export_all_frames() {
        let dir = tempfile::tempdir().unwrap();
        let spr = Spr::open_from_bytes(&sample_spr()).unwrap();

        let written = export_frames(&spr, &Palette::greyscale(), dir.path(), "norn").unwrap();

        assert_eq!(
            written,
            vec![dir.path().join("norn_0.png"), dir.path().join("norn_2.png")]
        );

        let first = image::open(&written[0]).unwrap().to_rgba8();
        assert_eq!(first.dimensions(), (2, 2));
        assert_eq!(first.get_pixel(0, 0).0, [0, 0, 0, 0]);
        assert_eq!(first.get_pixel(1, 1).0, [3, 3, 3, 255]);
    }

    #[test]
    fn export_from_file_with_strip() {
        let dir = tempfile::tempdir().unwrap();
        let spr_path = dir.path().join("egg.spr");
        std::fs::write(&spr_path, sample_spr()).unwrap();

        let options = ExportOptions {
            path: spr_path,
            out_dir: Some(dir.path().join("out")),
            strip: true,
            palette: None,
        };

        let written = export(&options, &Config::default()).unwrap();

        assert_eq!(written.len(), 3);
        assert!(written.iter().all(|path| path.exists()));

        let strip = image::open(dir.path().join("out").join("egg_strip.png"))
            .unwrap()
            .to_rgba8();
        // 2 + 0 + 1 wide with two gaps of 1
        assert_eq!(strip.dimensions(), (5, 2));
        assert_eq!(strip.get_pixel(4, 0).0, [200, 200, 200, 255]);
    }

    #[test]
    fn export_refuses_bad_sprite() {
        let dir = tempfile::tempdir().unwrap();
        let spr_path = dir.path().join("bad.spr");
        std::fs::write(&spr_path, [1u8]).unwrap();

        let options = ExportOptions {
            path: spr_path,
            out_dir: None,
            strip: false,
            palette: None,
        };

        assert!(export(&options, &Config::default()).is_err());
    }

    #[test]
    fn empty_strip_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let spr = Spr::open_from_bytes(&[0, 0]).unwrap();

        assert!(export_strip(&spr, &Palette::greyscale(), 1, dir.path(), "none").is_err());
    }

    #[test]
    fn oversized_strip_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let spr = Spr::open_from_bytes(&sample_spr()).unwrap();

        let res = export_strip(&spr, &Palette::greyscale(), u32::MAX, dir.path(), "wide");

        assert!(res.is_err());
        assert!(!dir.path().join("wide_strip.png").exists());
    }
}
