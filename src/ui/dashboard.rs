//! Dashboard screen: greeting header, stats, tool list, and the focus card.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::app::state::DashboardState;
use crate::core::dashboard::{FOCUS_MESSAGE, STATS, TOOLS};
use crate::core::greeting::{clock_text, date_text, Greeting};
use crate::ui::layout::DashboardLayout;
use crate::ui::theme::Theme;

pub struct DashboardWidget<'a> {
    pub state: &'a DashboardState,
    pub user_name: Option<&'a str>,
    pub focus_hint: String,
}

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .title_style(Theme::title_style())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border_style())
}

impl<'a> Widget for DashboardWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = DashboardLayout::from_area(area);
        let now = &self.state.now;

        // ── header ─────────────────────────────────────────────
        let header = vec![
            Line::from(Span::styled(
                Greeting::at(now).headline(self.user_name),
                Theme::greeting_style(),
            )),
            Line::from(vec![
                Span::styled(clock_text(now), Theme::stat_value_style()),
                Span::raw("  "),
                Span::styled(date_text(now), Theme::dim_style()),
            ]),
        ];
        let mode = if self.state.focus_mode { "Focus" } else { "Overview" };
        Paragraph::new(header)
            .block(panel(mode))
            .alignment(Alignment::Center)
            .render(layout.header_area, buf);

        if self.state.focus_mode {
            // Focus mode hides stats and tools behind a single card.
            let card_area = Rect {
                x: layout.left_area.x,
                y: layout.left_area.y,
                width: layout.left_area.width + layout.right_area.width,
                height: layout.left_area.height,
            };
            let lines = vec![
                Line::raw(""),
                Line::from(Span::styled(FOCUS_MESSAGE, Theme::greeting_style())),
                Line::raw(""),
                Line::from(Span::styled(self.focus_hint, Theme::dim_style())),
            ];
            Paragraph::new(lines)
                .block(panel("Focus Session"))
                .alignment(Alignment::Center)
                .render(card_area, buf);
            return;
        }

        // ── stats ──────────────────────────────────────────────
        let stat_lines: Vec<Line> = STATS
            .iter()
            .map(|s| {
                Line::from(vec![
                    Span::raw(format!(" {:<14}", s.label)),
                    Span::styled(s.value, Theme::stat_value_style()),
                ])
            })
            .collect();
        Paragraph::new(stat_lines)
            .block(panel("Today"))
            .render(layout.left_area, buf);

        // ── tools ──────────────────────────────────────────────
        let tool_lines: Vec<Line> = TOOLS
            .iter()
            .enumerate()
            .flat_map(|(i, t)| {
                let selected = i == self.state.selected_tool;
                let (marker, style) = if selected {
                    (" ▸ ", Theme::selected_style())
                } else {
                    ("   ", Theme::unchanged_style())
                };
                let suffix = if t.screen.is_some() { "" } else { "  (soon)" };
                [
                    Line::from(vec![
                        Span::styled(format!("{marker}{}", t.name), style),
                        Span::styled(suffix, Theme::dim_style()),
                    ]),
                    Line::from(Span::styled(format!("     {}", t.description), Theme::dim_style())),
                ]
            })
            .collect();
        Paragraph::new(tool_lines)
            .block(panel("Tools"))
            .render(layout.right_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn render(state: &DashboardState) -> String {
        let area = Rect::new(0, 0, 80, 16);
        let mut buf = Buffer::empty(area);
        DashboardWidget {
            state,
            user_name: Some("Ada"),
            focus_hint: "F5: leave focus mode".into(),
        }
        .render(area, &mut buf);
        (0..area.height)
            .map(|y| (0..area.width).map(|x| buf[(x, y)].symbol().to_string()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn state_at(hour: u32) -> DashboardState {
        DashboardState::new(
            NaiveDate::from_ymd_opt(2026, 10, 18)
                .and_then(|d| d.and_hms_opt(hour, 7, 0))
                .expect("valid timestamp"),
        )
    }

    #[test]
    fn overview_shows_greeting_stats_and_tools() {
        let text = render(&state_at(19));
        assert!(text.contains("Good Evening, Ada"));
        assert!(text.contains("19:07"));
        assert!(text.contains("Tasks Done"));
        assert!(text.contains("▸ Diff Viewer"));
        assert!(!text.contains(FOCUS_MESSAGE));
    }

    #[test]
    fn focus_mode_hides_tools() {
        let mut state = state_at(9);
        state.focus_mode = true;
        let text = render(&state);
        assert!(text.contains("Good Morning, Ada"));
        assert!(text.contains(FOCUS_MESSAGE));
        assert!(!text.contains("Diff Viewer"));
        assert!(!text.contains("Tasks Done"));
    }
}
