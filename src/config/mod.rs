use crate::card::CardEntry;
use crate::color::ColorNotation;
use crate::palette::PaletteConfig;
use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod defaults;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub palette: PaletteConfig,
    pub render: RenderConfig,
    pub input: InputConfig,
    pub cards: Vec<CardEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Tiles per footer row (420px card / 10px tiles).
    pub columns: usize,
    /// Terminal cells per tile.
    pub tile_width: u16,
    /// How HSV triples become display colors.
    pub notation: ColorNotation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub mouse: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            columns: 42,
            tile_width: 2,
            notation: ColorNotation::Hsv,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { mouse: true }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let proj =
        ProjectDirs::from("dev", "tilecard", "tilecard").context("ProjectDirs unavailable")?;
    Ok(proj.config_dir().join("config.toml"))
}

pub fn load(override_path: Option<&Path>) -> anyhow::Result<Config> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };

    if !path.exists() {
        let cfg = defaults::defaults();
        write_config(&cfg, &path).context("write default config")?;
        tracing::info!(path = %path.display(), "wrote default config");
        return Ok(cfg);
    }

    let raw = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg = parse(&raw).with_context(|| format!("parse {}", path.display()))?;
    tracing::info!(path = %path.display(), cards = cfg.cards.len(), "loaded config");
    Ok(cfg)
}

pub fn parse(raw: &str) -> anyhow::Result<Config> {
    let cfg = toml::from_str::<Config>(raw)?;
    Ok(cfg)
}

fn write_config(cfg: &Config, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create dir {}", parent.display()))?;
    }
    let raw = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(path, raw).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn test_partial_config_uses_defaults() {
        let cfg = parse(
            r#"
[palette]
tile_count = 84

[render]
notation = "hsl"
"#,
        )
        .unwrap();
        assert_eq!(cfg.palette.ramp_size, 6);
        assert_eq!(cfg.palette.tile_count, 84);
        assert_eq!(cfg.palette.seed, None);
        assert_eq!(cfg.render.columns, 42);
        assert_eq!(cfg.render.notation, ColorNotation::Hsl);
        assert!(cfg.input.mouse);
        assert!(cfg.cards.is_empty());
    }

    #[test]
    fn test_cards_table() {
        let cfg = parse(
            r#"
[[cards]]
id = "alpha"
name = "Alpha"
color = { r = 29, g = 161, b = 242 }

[[cards]]
id = "beta"
name = "Beta"
description = "no color"
"#,
        )
        .unwrap();
        assert_eq!(cfg.cards.len(), 2);
        assert_eq!(cfg.cards[0].color, Some(Rgb::new(29, 161, 242)));
        assert_eq!(cfg.cards[1].color, None);
        assert_eq!(cfg.cards[1].base_color(), Rgb::BLACK);
    }

    #[test]
    fn test_defaults_survive_toml() {
        let cfg = defaults::defaults();
        let raw = toml::to_string_pretty(&cfg).unwrap();
        let back = parse(&raw).unwrap();
        assert_eq!(back.cards, cfg.cards);
        assert_eq!(back.palette.tile_count, cfg.palette.tile_count);
    }

    #[test]
    fn test_load_writes_defaults() {
        let dir = std::env::temp_dir().join(format!("tilecard-test-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_file(&path);

        let cfg = load(Some(&path)).unwrap();
        assert!(path.exists());
        assert!(!cfg.cards.is_empty());

        let again = load(Some(&path)).unwrap();
        assert_eq!(again.cards, cfg.cards);
        let _ = fs::remove_dir_all(&dir);
    }
}
