//! Card list on the left of the screen

use crate::app::state::AppState;
use crate::tui::theme::get_theme;
use crate::tui::theme::palette::to_color;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

pub fn render(frame: &mut Frame, state: &mut AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border))
        .title(format!(" {} Gallery ", icons.gallery))
        .title_style(Style::default().fg(theme.palette.accent));

    let items: Vec<ListItem> = state
        .entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let is_selected = i == state.selected;

            let style = if is_selected {
                Style::default()
                    .fg(theme.palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.palette.fg_primary)
            };
            let prefix = if is_selected { icons.selected } else { icons.unselected };
            let heart = if state.is_liked(&entry.id) { icons.heart } else { " " };

            ListItem::new(Line::from(vec![
                Span::styled(prefix, Style::default().fg(theme.palette.fg_secondary)),
                Span::raw(" "),
                // Swatch of the identity color.
                Span::styled("  ", Style::default().bg(to_color(entry.base_color()))),
                Span::raw(" "),
                Span::styled(entry.name.clone(), style),
                Span::raw(" "),
                Span::styled(heart, Style::default().fg(theme.palette.fg_secondary)),
            ]))
        })
        .collect();

    let selected = (!state.entries.is_empty()).then_some(state.selected);
    state.list_state.select(selected);

    let list = List::new(items).block(block).highlight_symbol("");
    frame.render_stateful_widget(list, area, &mut state.list_state);
    state.list_area = Some(area);
}
