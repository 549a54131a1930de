//! Clock and greeting text for the dashboard header.

use chrono::{NaiveDateTime, Timelike};

/// Part-of-day bucket derived from the wall-clock hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Greeting {
    Morning,
    Afternoon,
    Evening,
}

impl Greeting {
    /// `< 12` is morning, `< 18` afternoon, everything else evening.
    pub fn for_hour(hour: u32) -> Self {
        if hour < 12 {
            Greeting::Morning
        } else if hour < 18 {
            Greeting::Afternoon
        } else {
            Greeting::Evening
        }
    }

    pub fn at(now: &NaiveDateTime) -> Self {
        Self::for_hour(now.hour())
    }

    pub fn label(self) -> &'static str {
        match self {
            Greeting::Morning => "Good Morning",
            Greeting::Afternoon => "Good Afternoon",
            Greeting::Evening => "Good Evening",
        }
    }

    /// `"Good Morning"` or `"Good Morning, Ada"` when a name is configured.
    pub fn headline(self, name: Option<&str>) -> String {
        match name.map(str::trim).filter(|n| !n.is_empty()) {
            Some(n) => format!("{}, {n}", self.label()),
            None => self.label().to_string(),
        }
    }
}

/// `HH:MM`, 24-hour.
pub fn clock_text(now: &NaiveDateTime) -> String {
    now.format("%H:%M").to_string()
}

/// e.g. `Sunday, October 18 2026`.
pub fn date_text(now: &NaiveDateTime) -> String {
    now.format("%A, %B %-d %Y").to_string()
}
