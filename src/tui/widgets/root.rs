//! Root layout widget - orchestrates main layout structure

use crate::app::state::{AppState, ToastKind};
use crate::config::{Config, RenderConfig};
use crate::tui::theme::get_theme;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{card, gallery, help};

/// Main layout structure:
/// ┌──────────┬─────────────────────────────────────────┐
/// │ Gallery  │           Card / Help                   │
/// │          │                                         │
/// ├──────────┴─────────────────────────────────────────┤
/// │ status / toast                                     │
/// └────────────────────────────────────────────────────┘
pub fn render(frame: &mut Frame, cfg: &Config, state: &mut AppState) {
    let root = frame.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Gallery + card
            Constraint::Length(1), // Status line
        ])
        .split(root);

    let card_width = card_min_width(&cfg.render);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(card_width)])
        .split(rows[0]);

    gallery::render(frame, state, cols[0]);
    if state.show_help {
        state.heart_area = None;
        help::render(frame, cols[1]);
    } else {
        card::render(frame, &cfg.render, state, cols[1]);
    }
    render_status(frame, state, rows[1]);
}

fn render_status(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    let line = match &state.toast {
        Some(toast) if !toast.is_expired() => {
            let (prefix, color) = match toast.kind {
                ToastKind::Success => (icons.success, theme.palette.success),
                ToastKind::Error => (icons.error, theme.palette.error),
            };
            Line::from(vec![
                Span::styled(format!(" {} ", prefix), Style::default().fg(color)),
                Span::styled(toast.message.clone(), Style::default().fg(color)),
            ])
        }
        _ => Line::from(Span::styled(
            " j/k move · space like · ? help · q quit",
            Style::default().fg(theme.palette.fg_secondary),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Wide enough for a full footer row plus borders and padding.
fn card_min_width(render: &RenderConfig) -> u16 {
    u16::try_from(render.columns)
        .unwrap_or(u16::MAX)
        .saturating_mul(render.tile_width.max(1))
        .saturating_add(4)
}
