//! Tone ramp and tile mosaic derivation
//!
//! A base color yields:
//! - an accent (the base color itself) for the liked heart
//! - a tone ramp running from bright/desaturated to dark/saturated
//! - a tile sequence sampled uniformly, with replacement, from the ramp

use crate::color::Hsv;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_RAMP_SIZE: usize = 6;
pub const DEFAULT_TILE_COUNT: usize = 168;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// An argument is outside the domain the derivation is defined on
    #[error("invalid {argument}: {message}")]
    InvalidArgument {
        argument: &'static str,
        message: String,
    },
}

/// Palette derivation settings (`[palette]` in the config file).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Number of tones in the ramp, at least 2.
    pub ramp_size: usize,
    /// Number of tiles in the footer mosaic.
    pub tile_count: usize,
    /// Fixed RNG seed; mosaics are random per card when unset.
    pub seed: Option<u64>,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            ramp_size: DEFAULT_RAMP_SIZE,
            tile_count: DEFAULT_TILE_COUNT,
            seed: None,
        }
    }
}

/// Ordered gradation derived from a single base color.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ToneRamp {
    tones: Vec<Hsv>,
}

impl ToneRamp {
    /// Entry `i` keeps the base hue, raises saturation from 0 toward `base.s`
    /// and lowers value from 100 toward `100 - base.v`.
    pub fn build(base: Hsv, ramp_size: usize) -> Result<Self, PaletteError> {
        if ramp_size < 2 {
            return Err(PaletteError::InvalidArgument {
                argument: "ramp_size",
                message: format!("a ramp needs at least 2 tones, got {ramp_size}"),
            });
        }

        let steps = (ramp_size - 1) as f64;
        let tones = (0..ramp_size)
            .map(|i| {
                let i = i as f64;
                Hsv::new(base.h, base.s / steps * i, 100.0 - base.v / steps * i)
            })
            .collect();

        Ok(Self { tones })
    }

    pub fn len(&self) -> usize {
        self.tones.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.tones.is_empty()
    }

    pub fn tones(&self) -> &[Hsv] {
        &self.tones
    }

    /// Draw `tile_count` tones independently and uniformly, with replacement.
    pub fn sample<R: Rng>(&self, tile_count: usize, rng: &mut R) -> TileSequence {
        let tiles = (0..tile_count)
            .map(|_| self.tones[rng.random_range(0..self.tones.len())])
            .collect();
        TileSequence { tiles }
    }
}

/// The footer mosaic, in left-to-right, top-to-bottom order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct TileSequence {
    tiles: Vec<Hsv>,
}

impl TileSequence {
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> &[Hsv] {
        &self.tiles
    }

    /// Split the mosaic into rows of `columns` tiles; the last row may be short.
    pub fn rows(&self, columns: usize) -> std::slice::Chunks<'_, Hsv> {
        self.tiles.chunks(columns.max(1))
    }
}

/// The color of the liked heart: the unmodified base color.
pub fn derive_accent(base: Hsv) -> Hsv {
    base
}

pub fn build_ramp(base: Hsv, ramp_size: usize) -> Result<ToneRamp, PaletteError> {
    ToneRamp::build(base, ramp_size)
}

#[allow(dead_code)]
pub fn build_tile_sequence<R: Rng>(
    base: Hsv,
    ramp_size: usize,
    tile_count: usize,
    rng: &mut R,
) -> Result<TileSequence, PaletteError> {
    let ramp = ToneRamp::build(base, ramp_size)?;
    let tiles = ramp.sample(tile_count, rng);
    tracing::debug!(hue = base.h, ramp_size, tile_count, "built tile sequence");
    Ok(tiles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample_bases() -> Vec<Hsv> {
        [
            Rgb::new(255, 0, 0),
            Rgb::new(0, 255, 0),
            Rgb::new(29, 161, 242),
            Rgb::new(230, 0, 35),
            Rgb::new(128, 128, 128),
            Rgb::new(0, 0, 0),
            Rgb::new(255, 255, 255),
        ]
        .into_iter()
        .map(Rgb::to_hsv)
        .collect()
    }

    #[test]
    fn test_ramp_endpoints() {
        let ramp = build_ramp(Hsv::new(0.0, 100.0, 100.0), 6).unwrap();
        assert_eq!(ramp.len(), 6);
        assert_eq!(ramp.tones()[0], Hsv::new(0.0, 0.0, 100.0));
        assert_eq!(ramp.tones()[5], Hsv::new(0.0, 100.0, 0.0));
    }

    #[test]
    fn test_ramp_rejects_single_tone() {
        let base = Hsv::new(0.0, 100.0, 100.0);
        for size in [0, 1] {
            match build_ramp(base, size) {
                Err(PaletteError::InvalidArgument { argument, .. }) => {
                    assert_eq!(argument, "ramp_size")
                }
                other => panic!("expected InvalidArgument, got {other:?}"),
            }
        }
        let mut rng = StdRng::seed_from_u64(1);
        assert!(build_tile_sequence(base, 1, 168, &mut rng).is_err());
    }

    #[test]
    fn test_ramp_is_monotonic_and_keeps_hue() {
        for base in sample_bases() {
            for size in [2, 3, 6, 11] {
                let ramp = build_ramp(base, size).unwrap();
                assert_eq!(ramp.len(), size);
                for pair in ramp.tones().windows(2) {
                    assert!(pair[0].s <= pair[1].s);
                    assert!(pair[0].v >= pair[1].v);
                }
                for tone in ramp.tones() {
                    assert_eq!(tone.h, base.h);
                    assert!((0.0..=100.0).contains(&tone.s));
                    assert!((0.0..=100.0).contains(&tone.v));
                }
            }
        }
    }

    #[test]
    fn test_tile_sequence_cardinality_and_hue() {
        let mut rng = StdRng::seed_from_u64(42);
        for base in sample_bases() {
            let tiles = build_tile_sequence(base, 6, 168, &mut rng).unwrap();
            assert_eq!(tiles.len(), 168);
            let ramp = build_ramp(base, 6).unwrap();
            for tile in tiles.tiles() {
                assert_eq!(tile.h, base.h);
                assert!(ramp.tones().contains(tile));
            }
        }

        let empty = build_tile_sequence(sample_bases()[0], 6, 0, &mut rng).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_seeded_sampling_is_reproducible() {
        let base = Hsv::new(200.0, 80.0, 90.0);
        let a = build_tile_sequence(base, 6, 168, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = build_tile_sequence(base, 6, 168, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_sampling_a_built_ramp_matches_one_shot_build() {
        let base = Rgb::new(29, 161, 242).to_hsv();
        let ramp = build_ramp(base, 6).unwrap();
        let sampled = ramp.sample(168, &mut StdRng::seed_from_u64(99));
        let one_shot = build_tile_sequence(base, 6, 168, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(sampled, one_shot);
    }

    #[test]
    fn test_sampling_covers_ramp_uniformly() {
        let ramp = build_ramp(Hsv::new(0.0, 100.0, 100.0), 6).unwrap();
        let mut rng = StdRng::seed_from_u64(2024);
        let draws = 10_000;
        let tiles = ramp.sample(draws, &mut rng);

        let mut counts = [0usize; 6];
        for tile in tiles.tiles() {
            let index = ramp.tones().iter().position(|t| t == tile).unwrap();
            counts[index] += 1;
        }

        let expected = draws as f64 / 6.0;
        for (index, &count) in counts.iter().enumerate() {
            let deviation = (count as f64 - expected).abs() / expected;
            assert!(deviation < 0.2, "index {index} drawn {count} times");
        }
    }

    #[test]
    fn test_rows_layout() {
        let mut rng = StdRng::seed_from_u64(3);
        let tiles = build_tile_sequence(Hsv::new(10.0, 50.0, 50.0), 6, 168, &mut rng).unwrap();
        let rows: Vec<_> = tiles.rows(42).collect();
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r.len() == 42));

        let rows: Vec<_> = tiles.rows(50).collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[3].len(), 18);
    }

    #[test]
    fn test_accent_is_base() {
        for base in sample_bases() {
            assert_eq!(derive_accent(base), base);
        }
    }
}
