//! Card view: identity header, like heart and the tile mosaic footer
//!
//! ```text
//! ╭ Card ──────────────────────────────────────╮
//! │ Name @id                                    │
//! │                                             │
//! │ Description...                              │
//! │                                             │
//! │ ramp ▇▇▇▇▇▇  accent #RRGGBB               ♥ │
//! │ ▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇ │
//! │ ▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇ │
//! ╰─────────────────────────────────────────────╯
//! ```

use crate::app::state::AppState;
use crate::card::Card;
use crate::color::ColorNotation;
use crate::config::RenderConfig;
use crate::palette::TileSequence;
use crate::tui::theme::get_theme;
use crate::tui::theme::palette::to_color;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn render(frame: &mut Frame, render_cfg: &RenderConfig, state: &mut AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border))
        .title(format!(" {} Card ", icons.card))
        .title_style(Style::default().fg(theme.palette.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    state.heart_area = None;
    let Some(card) = &state.card else {
        let msg = if state.entries.is_empty() {
            "No cards in the catalog. Add [[cards]] to the config file."
        } else {
            "This card could not be painted."
        };
        frame.render_widget(
            Paragraph::new(Span::styled(msg, Style::default().fg(theme.palette.fg_secondary)))
                .wrap(Wrap { trim: true }),
            inner,
        );
        return;
    };

    let footer_rows = card.tiles.rows(render_cfg.columns).count() as u16;
    let padded = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(1), // Left padding
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Right padding
        ])
        .split(inner)[1];

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),           // Name + id
            Constraint::Length(1),           // Spacing
            Constraint::Min(1),              // Description
            Constraint::Length(1),           // Ramp, accent, heart
            Constraint::Length(footer_rows), // Mosaic
        ])
        .split(padded);

    let header = Line::from(vec![
        Span::styled(
            card.name.clone(),
            Style::default()
                .fg(theme.palette.fg_primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            format!("@{}", card.id),
            Style::default()
                .fg(theme.palette.fg_secondary)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), rows[0]);

    frame.render_widget(
        Paragraph::new(card.description.as_str())
            .style(Style::default().fg(theme.palette.fg_primary))
            .wrap(Wrap { trim: true }),
        rows[2],
    );

    let liked = state.is_liked(&card.id);
    frame.render_widget(Paragraph::new(legend_line(card, render_cfg.notation)), rows[3]);

    let (heart, heart_style) =
        theme.heart(liked, to_color(render_cfg.notation.resolve(card.accent)));
    let heart_area = Rect {
        x: rows[3].right().saturating_sub(2),
        width: 2u16.min(rows[3].width),
        ..rows[3]
    };
    frame.render_widget(Paragraph::new(Span::styled(heart, heart_style)), heart_area);

    frame.render_widget(
        Paragraph::new(mosaic_lines(&card.tiles, render_cfg)),
        rows[4],
    );
    state.heart_area = Some(heart_area);
}

fn legend_line(card: &Card, notation: ColorNotation) -> Line<'static> {
    let theme = get_theme();
    let mut spans = vec![Span::styled("ramp ", Style::default().fg(theme.palette.fg_secondary))];
    for tone in card.ramp.tones() {
        spans.push(Span::styled(
            " ",
            Style::default().bg(to_color(notation.resolve(*tone))),
        ));
    }
    spans.push(Span::styled(
        format!("  accent {}", notation.css(card.accent)),
        Style::default().fg(theme.palette.fg_secondary),
    ));
    Line::from(spans)
}

/// One line per mosaic row, each tile `tile_width` cells wide.
fn mosaic_lines(tiles: &TileSequence, render_cfg: &RenderConfig) -> Vec<Line<'static>> {
    let cell = " ".repeat(render_cfg.tile_width.max(1) as usize);
    tiles
        .rows(render_cfg.columns)
        .map(|row| {
            Line::from(
                row.iter()
                    .map(|tile| {
                        Span::styled(
                            cell.clone(),
                            Style::default().bg(to_color(render_cfg.notation.resolve(*tile))),
                        )
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect()
}
