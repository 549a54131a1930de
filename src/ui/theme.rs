//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

use crate::core::diff::SegmentKind;

/// Central theme — change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    // ── diff ───────────────────────────────────────────────────
    pub fn added_style() -> Style {
        Style::default().fg(Color::Green).bg(Color::Rgb(16, 48, 24))
    }

    pub fn removed_style() -> Style {
        Style::default().fg(Color::Red).bg(Color::Rgb(56, 16, 20))
    }

    pub fn unchanged_style() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn segment_style(kind: SegmentKind) -> Style {
        match kind {
            SegmentKind::Added => Self::added_style(),
            SegmentKind::Removed => Self::removed_style(),
            SegmentKind::Unchanged => Self::unchanged_style(),
        }
    }

    pub fn line_number_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn placeholder_style() -> Style {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC)
    }

    // ── dashboard ──────────────────────────────────────────────
    pub fn greeting_style() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn stat_value_style() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn dim_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn selected_style() -> Style {
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn border_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn focused_border_style() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn title_style() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }
}
