//! Monochrome chrome; the only colors on screen come from the cards

pub mod icons;
pub mod palette;

use icons::Icons;
use palette::Palette;
use ratatui::style::{Color, Style};
use ratatui::symbols::border;

#[derive(Debug, Clone, Default)]
pub struct Theme {
    pub palette: Palette,
    pub icons: Icons,
}

impl Theme {
    /// Rounded corners, like the web cards.
    pub fn border_set(&self) -> border::Set<'static> {
        border::ROUNDED
    }

    /// Filled heart in the accent color when liked, gray outline otherwise.
    pub fn heart(&self, liked: bool, accent: Color) -> (&'static str, Style) {
        if liked {
            (self.icons.heart, Style::default().fg(accent))
        } else {
            (self.icons.heart_outline, Style::default().fg(self.palette.fg_secondary))
        }
    }
}

pub fn get_theme() -> Theme {
    Theme::default()
}
