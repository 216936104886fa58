//! Parses config file

use std::{
    env,
    fs::OpenOptions,
    io::Read,
    path::{Path, PathBuf},
};

use eyre::eyre;
use serde::Deserialize;
use spr::{OutOfBoundsPolicy, Palette, PaletteDepth};

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaletteDepthSetting {
    #[default]
    Vga6,
    Rgb8,
}

impl From<PaletteDepthSetting> for PaletteDepth {
    fn from(value: PaletteDepthSetting) -> Self {
        match value {
            PaletteDepthSetting::Vga6 => PaletteDepth::Vga6,
            PaletteDepthSetting::Rgb8 => PaletteDepth::Rgb8,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutOfBoundsSetting {
    #[default]
    Abort,
    EmptyFrame,
}

impl From<OutOfBoundsSetting> for OutOfBoundsPolicy {
    fn from(value: OutOfBoundsSetting) -> Self {
        match value {
            OutOfBoundsSetting::Abort => OutOfBoundsPolicy::Abort,
            OutOfBoundsSetting::EmptyFrame => OutOfBoundsPolicy::EmptyFrame,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Palette file. Greyscale when missing.
    pub palette: Option<String>,
    pub palette_depth: PaletteDepthSetting,
    pub out_of_bounds: OutOfBoundsSetting,
    /// Transparent columns between frames in a strip
    pub strip_padding: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            palette: None,
            palette_depth: PaletteDepthSetting::default(),
            out_of_bounds: OutOfBoundsSetting::default(),
            strip_padding: 1,
        }
    }
}

impl Config {
    pub fn load_palette(&self) -> eyre::Result<Palette> {
        let Some(path) = &self.palette else {
            return Ok(Palette::greyscale());
        };

        Ok(Palette::open_from_file(path, self.palette_depth.into())?)
    }

    pub fn out_of_bounds_policy(&self) -> OutOfBoundsPolicy {
        self.out_of_bounds.into()
    }
}

pub static CONFIG_FILE_NAME: &str = "config.toml";

/// Parse `config.toml` in the same folder as the binary
pub fn parse_config() -> eyre::Result<Config> {
    let path = match env::current_exe() {
        Ok(path) => path
            .parent()
            .map(|parent| parent.join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME)),
        Err(_) => PathBuf::from(CONFIG_FILE_NAME),
    };

    parse_config_from_file(path.as_path())
}

/// A missing file gives the default config.
pub fn parse_config_from_file(path: &Path) -> eyre::Result<Config> {
    if !path.exists() {
        log::info!("No config at {}. Using defaults", path.display());
        return Ok(Config::default());
    }

    let mut file = OpenOptions::new().read(true).open(path.as_os_str())?;
    let mut buffer = String::new();

    file.read_to_string(&mut buffer)?;

    let root = path.parent().unwrap_or(Path::new("."));

    parse_config_from_str(&buffer, root)
}

/// Relative palette paths are resolved against `root`.
pub fn parse_config_from_str(s: &str, root: &Path) -> eyre::Result<Config> {
    let config: Config = toml::from_str(s)?;

    let Some(palette) = &config.palette else {
        return Ok(config);
    };

    let palette = PathBuf::from(palette);

    let palette = if palette.is_relative() {
        root.join(palette)
    } else {
        palette
    };

    if !palette.exists() {
        return Err(eyre!("Cannot find palette file {}", palette.display()));
    }

    let palette = palette.canonicalize()?.display().to_string();

    Ok(Config {
        palette: Some(palette),
        ..config
    })
}
