//! Nerd Font icons for TUI display
//! Requires a Nerd Font to be installed (https://www.nerdfonts.com)

/// Icon set using Nerd Font glyphs
#[derive(Debug, Clone)]
pub struct Icons {
    pub heart: &'static str,
    pub heart_outline: &'static str,
    pub gallery: &'static str,
    pub card: &'static str,
    pub help: &'static str,
    pub success: &'static str,
    pub error: &'static str,
    pub selected: &'static str,
    pub unselected: &'static str,
}

impl Icons {
    /// Nerd Font icon set
    pub const fn nerd() -> Self {
        Self {
            heart: "\u{f004}",         // nf-fa-heart
            heart_outline: "\u{f08a}", // nf-fa-heart_o
            gallery: "\u{f03e}",       // nf-fa-picture_o
            card: "\u{f2bb}",          // nf-fa-address_card
            help: "\u{f059}",          // nf-fa-question_circle
            success: "\u{f00c}",       // nf-fa-check
            error: "\u{f00d}",         // nf-fa-times
            selected: "\u{f054}",      // nf-fa-chevron_right
            unselected: " ",
        }
    }
}

impl Default for Icons {
    fn default() -> Self {
        Self::nerd()
    }
}
