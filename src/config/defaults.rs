use super::Config;
use crate::card::CardEntry;
use crate::color::Rgb;

fn card(id: &str, name: &str, description: &str, color: Rgb) -> CardEntry {
    CardEntry {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        color: Some(color),
    }
}

/// Config written on first run, with a small sample gallery.
pub fn defaults() -> Config {
    Config {
        cards: vec![
            card("crimson", "Crimson", "Warm and loud.", Rgb::new(220, 20, 60)),
            card("sky", "Sky", "Light blue all day.", Rgb::new(29, 161, 242)),
            card("moss", "Moss", "Quiet green.", Rgb::new(76, 120, 48)),
            card("amber", "Amber", "Late afternoon.", Rgb::new(255, 176, 0)),
            card("slate", "Slate", "No hue at all.", Rgb::new(112, 128, 144)),
        ],
        ..Config::default()
    }
}
