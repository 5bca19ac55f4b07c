use crate::constants::{colors, paths};
use crate::render::RenderOptions;
use anyhow::{Context, Result, bail};
use image::Rgb;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Where icons are written and how they are drawn
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GeneratorConfig {
    #[serde(default = "default_primary_dir")]
    pub primary_dir: PathBuf,
    #[serde(default = "default_fallback_dir")]
    pub fallback_dir: PathBuf,
    #[serde(default)]
    pub apply_corner_mask: bool,
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
    #[serde(default = "default_write_manifest")]
    pub write_manifest: bool,
}

fn default_primary_dir() -> PathBuf {
    PathBuf::from(paths::DEFAULT_PRIMARY_DIR)
}

fn default_fallback_dir() -> PathBuf {
    dirs::document_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(paths::FALLBACK_DIR_NAME)
}

fn default_accent_color() -> String {
    colors::DEFAULT_ACCENT_HEX.to_string()
}

fn default_write_manifest() -> bool {
    true
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            primary_dir: default_primary_dir(),
            fallback_dir: default_fallback_dir(),
            apply_corner_mask: false,
            accent_color: default_accent_color(),
            write_manifest: default_write_manifest(),
        }
    }
}

impl GeneratorConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: GeneratorConfig = serde_yaml::from_str(&contents)
            .context("Failed to parse config file")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.primary_dir.as_os_str().is_empty() {
            bail!("primary_dir cannot be empty");
        }
        if self.fallback_dir.as_os_str().is_empty() {
            bail!("fallback_dir cannot be empty");
        }
        // A fallback into the directory that just failed can never succeed
        if self.primary_dir == self.fallback_dir {
            bail!("fallback_dir must differ from primary_dir");
        }

        parse_hex_color(&self.accent_color)?;

        Ok(())
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .context("Failed to create config directory")?;
            }
        }

        let yaml = serde_yaml::to_string(self)
            .context("Failed to serialize config")?;

        fs::write(path, yaml)
            .context("Failed to write config file")?;

        Ok(())
    }

    pub fn render_options(&self) -> Result<RenderOptions> {
        Ok(RenderOptions {
            apply_corner_mask: self.apply_corner_mask,
            accent: parse_hex_color(&self.accent_color)?,
        })
    }
}

/// Parse `#RRGGBB` (leading `#` optional)
pub fn parse_hex_color(hex: &str) -> Result<Rgb<u8>> {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        bail!("accent_color must look like #RRGGBB, got {:?}", hex);
    }

    let channel = |i: usize| -> Result<u8> {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .with_context(|| format!("Invalid color channel in {:?}", hex))
    };

    Ok(Rgb([channel(0)?, channel(2)?, channel(4)?]))
}
