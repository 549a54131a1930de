//! Static dashboard content and screen identity.
//!
//! Everything here is canned data; the dashboard computes nothing beyond
//! the greeting.

/// Top-level screens.  Navigation carries nothing but this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Screen {
    #[default]
    Dashboard,
    #[value(name = "diff")]
    DiffViewer,
}

impl Screen {
    pub fn toggle(self) -> Self {
        match self {
            Screen::Dashboard => Screen::DiffViewer,
            Screen::DiffViewer => Screen::Dashboard,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::DiffViewer => "Diff Viewer",
        }
    }
}

/// A single canned statistic card.
#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

/// An entry in the tool list.  Only tools with a `screen` can be opened.
#[derive(Debug, Clone, Copy)]
pub struct Tool {
    pub name: &'static str,
    pub description: &'static str,
    pub screen: Option<Screen>,
}

pub static STATS: &[Stat] = &[
    Stat { label: "Tasks Done", value: "12" },
    Stat { label: "Focus Hours", value: "4.5" },
    Stat { label: "Streak", value: "7 days" },
    Stat { label: "Notes", value: "23" },
];

pub static TOOLS: &[Tool] = &[
    Tool {
        name: "Diff Viewer",
        description: "Compare two texts line by line",
        screen: Some(Screen::DiffViewer),
    },
    Tool {
        name: "Pomodoro",
        description: "25 minute work intervals",
        screen: None,
    },
    Tool {
        name: "Quick Notes",
        description: "Scratchpad for fleeting thoughts",
        screen: None,
    },
    Tool {
        name: "JSON Formatter",
        description: "Pretty-print and validate JSON",
        screen: None,
    },
];

/// Text shown in the focus card while focus mode is on.
pub const FOCUS_MESSAGE: &str = "Deep work in progress. Distractions hidden.";
