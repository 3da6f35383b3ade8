//! Color types and RGB → HSV conversion
//!
//! `Hsv` is the canonical representation used everywhere downstream:
//! hue in degrees [0, 360), saturation and value in percent [0, 100].

use serde::{Deserialize, Serialize};

/// 8-bit RGB color as it appears in the card catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hsv(self) -> Hsv {
        rgb_to_hsv(self.r as f64, self.g as f64, self.b as f64)
    }

    /// Uppercase `#RRGGBB`.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Hue in degrees, saturation and value in percent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// Display color treating the triple as a true HSV color.
    pub fn to_rgb(self) -> Rgb {
        let (r, g, b) = hsv_to_rgb_unit(self.h / 360.0, self.s / 100.0, self.v / 100.0);
        unit_to_rgb(r, g, b)
    }

    /// Display color treating the triple as `hsl(h, s%, v%)`, which is how the
    /// web cards painted it.
    pub fn to_rgb_as_hsl(self) -> Rgb {
        let h = self.h / 360.0;
        let s = (self.s / 100.0).clamp(0.0, 1.0);
        let l = (self.v / 100.0).clamp(0.0, 1.0);
        let v = l + s * l.min(1.0 - l);
        let sv = if v == 0.0 { 0.0 } else { 2.0 * (1.0 - l / v) };
        let (r, g, b) = hsv_to_rgb_unit(h, sv, v);
        unit_to_rgb(r, g, b)
    }
}

/// How an `Hsv` triple is turned into something a terminal or browser can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorNotation {
    #[default]
    Hsv,
    Hsl,
}

impl ColorNotation {
    pub fn resolve(self, color: Hsv) -> Rgb {
        match self {
            ColorNotation::Hsv => color.to_rgb(),
            ColorNotation::Hsl => color.to_rgb_as_hsl(),
        }
    }

    /// CSS color string: `#RRGGBB` for HSV, the raw `hsl(...)` functional
    /// notation for HSL.
    pub fn css(self, color: Hsv) -> String {
        match self {
            ColorNotation::Hsv => color.to_rgb().to_hex(),
            ColorNotation::Hsl => format!("hsl({}, {}%, {}%)", color.h, color.s, color.v),
        }
    }
}

/// Convert RGB channels (nominally 0–255) to HSV.
///
/// Channels outside 0–255 are not rejected; the result is whatever the
/// arithmetic yields and may fall outside the documented HSV ranges.
pub fn rgb_to_hsv(r: f64, g: f64, b: f64) -> Hsv {
    let r = r / 255.0;
    let g = g / 255.0;
    let b = b / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let v = max * 100.0;
    let s = if max == 0.0 { 0.0 } else { delta / max * 100.0 };

    let mut h = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * (((g - b) / delta) % 6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    if h < 0.0 {
        h += 360.0;
    }

    Hsv { h, s, v }
}

/// HSV → RGB with every component in 0.0–1.0.
fn hsv_to_rgb_unit(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    let h6 = (h * 6.0).rem_euclid(6.0);
    let i = h6.floor() as u32;
    let f = h6 - h6.floor();
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match i % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

fn unit_to_rgb(r: f64, g: f64, b: f64) -> Rgb {
    let channel = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    Rgb::new(channel(r), channel(g), channel(b))
}
