//! Profile cards: catalog entries and the colors derived from them

use crate::color::{Hsv, Rgb};
use crate::palette::{self, PaletteConfig, PaletteError, TileSequence, ToneRamp};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A catalog record (`[[cards]]` in the config file).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Brand color of the identity. Missing colors fall back to black.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgb>,
}

impl CardEntry {
    pub fn base_color(&self) -> Rgb {
        self.color.unwrap_or(Rgb::BLACK)
    }
}

/// Look up a catalog entry by identifier.
pub fn find<'a>(cards: &'a [CardEntry], id: &str) -> Option<&'a CardEntry> {
    cards.iter().find(|c| c.id == id)
}

/// Everything a card needs to be painted. Rebuilt whenever the card identity
/// changes, never patched.
#[derive(Debug, Clone, Serialize)]
pub struct Card {
    pub id: String,
    pub name: String,
    pub description: String,
    pub base: Hsv,
    pub accent: Hsv,
    pub ramp: ToneRamp,
    pub tiles: TileSequence,
}

impl Card {
    pub fn build<R: Rng>(
        entry: &CardEntry,
        cfg: &PaletteConfig,
        rng: &mut R,
    ) -> Result<Self, PaletteError> {
        if entry.color.is_none() {
            tracing::warn!(id = %entry.id, "card has no color, using black");
        }
        let base = entry.base_color().to_hsv();
        let ramp = palette::build_ramp(base, cfg.ramp_size)?;
        let tiles = ramp.sample(cfg.tile_count, rng);
        tracing::debug!(id = %entry.id, h = base.h, s = base.s, v = base.v, "built card");

        Ok(Self {
            id: entry.id.clone(),
            name: entry.name.clone(),
            description: entry.description.clone(),
            base,
            accent: palette::derive_accent(base),
            ramp,
            tiles,
        })
    }
}
