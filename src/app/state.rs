use crate::card::{Card, CardEntry};
use ratatui::layout::Rect;
use ratatui::widgets::ListState;
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub created_at: std::time::Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
            created_at: std::time::Instant::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
            created_at: std::time::Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > std::time::Duration::from_secs(3)
    }
}

#[derive(Debug, Default)]
pub struct AppState {
    pub entries: Vec<CardEntry>,
    pub selected: usize,
    /// The card being shown; `None` when the catalog is empty or the palette
    /// settings are invalid.
    pub card: Option<Card>,
    /// Identifiers of liked cards for this session.
    pub liked: HashSet<String>,
    pub show_help: bool,
    pub should_quit: bool,
    pub toast: Option<Toast>,

    /// Scroll position of the gallery list, kept across frames.
    pub list_state: ListState,

    // Hit areas recorded by the last draw, used for mouse input.
    pub list_area: Option<Rect>,
    pub heart_area: Option<Rect>,
}

impl AppState {
    pub fn new(entries: Vec<CardEntry>) -> Self {
        Self {
            entries,
            ..Self::default()
        }
    }

    pub fn selected_entry(&self) -> Option<&CardEntry> {
        self.entries.get(self.selected)
    }

    pub fn is_liked(&self, id: &str) -> bool {
        self.liked.contains(id)
    }

    /// Flip the liked state of the current card. Returns the new state.
    pub fn toggle_like(&mut self) -> Option<bool> {
        let id = self.card.as_ref()?.id.clone();
        if self.liked.remove(&id) {
            Some(false)
        } else {
            self.liked.insert(id);
            Some(true)
        }
    }

    pub fn select_next(&mut self) {
        if !self.entries.is_empty() {
            self.selected = (self.selected + 1).min(self.entries.len() - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}
