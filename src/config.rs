//! User configuration — keybindings, view defaults, and persistence.
//!
//! Settings are stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/diffdash/config.toml` (default `~/.config/diffdash/config.toml`).

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use thiserror::Error;

use crate::core::render::ViewMode;

/// Default clock refresh cadence for the dashboard.
pub const DEFAULT_CLOCK_REFRESH_SECS: u64 = 60;

// ───────────────────────────────────────── errors ────────────

/// Problems reading or writing the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O failed for {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: unknown setting `{key}`")]
    UnknownKey { line: usize, key: String },

    #[error("line {line}: cannot parse key binding `{spec}`")]
    BadBinding { line: usize, spec: String },

    #[error("line {line}: invalid value `{value}` for `{key}`")]
    BadValue {
        line: usize,
        key: String,
        value: String,
    },
}

// ───────────────────────────────────────── actions ───────────

/// All configurable user actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    SwitchScreen,
    ToggleView,
    ClearAll,
    SwitchInput,
    ToggleFocus,
    MoveUp,
    MoveDown,
    ScrollUp,
    ScrollDown,
    ShowHelp,
    Quit,
}

impl Action {
    /// Ordered list of all actions (used for the help popup).
    pub const ALL: &[Action] = &[
        Action::SwitchScreen,
        Action::ToggleView,
        Action::ClearAll,
        Action::SwitchInput,
        Action::ToggleFocus,
        Action::MoveUp,
        Action::MoveDown,
        Action::ScrollUp,
        Action::ScrollDown,
        Action::ShowHelp,
        Action::Quit,
    ];

    /// Human-readable label for the UI.
    pub fn label(self) -> &'static str {
        match self {
            Action::SwitchScreen => "Switch Screen",
            Action::ToggleView => "Split / Unified",
            Action::ClearAll => "Clear Inputs",
            Action::SwitchInput => "Next Input",
            Action::ToggleFocus => "Focus Mode",
            Action::MoveUp => "Tool Up",
            Action::MoveDown => "Tool Down",
            Action::ScrollUp => "Scroll Diff Up",
            Action::ScrollDown => "Scroll Diff Down",
            Action::ShowHelp => "Help",
            Action::Quit => "Quit",
        }
    }

    /// Key used in the config file.
    fn config_key(self) -> &'static str {
        match self {
            Action::SwitchScreen => "switch_screen",
            Action::ToggleView => "toggle_view",
            Action::ClearAll => "clear_all",
            Action::SwitchInput => "switch_input",
            Action::ToggleFocus => "toggle_focus",
            Action::MoveUp => "move_up",
            Action::MoveDown => "move_down",
            Action::ScrollUp => "scroll_up",
            Action::ScrollDown => "scroll_down",
            Action::ShowHelp => "show_help",
            Action::Quit => "quit",
        }
    }

    fn from_config_key(s: &str) -> Option<Self> {
        Action::ALL.iter().copied().find(|a| a.config_key() == s)
    }
}

// ───────────────────────────────────────── key bind ──────────

/// A single key binding — key code + modifier combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBind {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Does this binding match a key event?  Only CTRL/ALT/SHIFT modifiers
    /// are compared (platform-specific modifiers like SUPER are ignored).
    pub fn matches(&self, event: KeyEvent) -> bool {
        let mask = KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SHIFT;
        self.code == event.code && (self.modifiers & mask) == (event.modifiers & mask)
    }

    fn modifier_prefix(&self) -> String {
        let mut s = String::new();
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            s.push_str("Ctrl+");
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            s.push_str("Alt+");
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            s.push_str("Shift+");
        }
        s
    }

    /// User-friendly display string (e.g. `"Ctrl+l"`, `"F2"`, `"↑"`).
    pub fn display(&self) -> String {
        let key = match self.code {
            KeyCode::Up => "↑".into(),
            KeyCode::Down => "↓".into(),
            KeyCode::Left => "←".into(),
            KeyCode::Right => "→".into(),
            KeyCode::Backspace => "Bksp".into(),
            KeyCode::Delete => "Del".into(),
            KeyCode::PageUp => "PgUp".into(),
            KeyCode::PageDown => "PgDn".into(),
            _ => self.key_name(),
        };
        format!("{}{key}", self.modifier_prefix())
    }

    /// Serialise to config-file format (e.g. `"Ctrl+l"`, `"PageUp"`).
    fn to_config_string(&self) -> String {
        format!("{}{}", self.modifier_prefix(), self.key_name())
    }

    fn key_name(&self) -> String {
        match self.code {
            KeyCode::Char(' ') => "Space".into(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Up => "Up".into(),
            KeyCode::Down => "Down".into(),
            KeyCode::Left => "Left".into(),
            KeyCode::Right => "Right".into(),
            KeyCode::Enter => "Enter".into(),
            KeyCode::Esc => "Esc".into(),
            KeyCode::Tab => "Tab".into(),
            KeyCode::BackTab => "BackTab".into(),
            KeyCode::Backspace => "Backspace".into(),
            KeyCode::Delete => "Delete".into(),
            KeyCode::Home => "Home".into(),
            KeyCode::End => "End".into(),
            KeyCode::PageUp => "PageUp".into(),
            KeyCode::PageDown => "PageDown".into(),
            KeyCode::F(n) => format!("F{n}"),
            other => format!("{other:?}"),
        }
    }

    /// Parse a key string like `"Ctrl+l"`, `"Alt+Up"`, `"F2"`, `"Tab"`.
    fn parse(s: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let parts: Vec<&str> = s.split('+').collect();
        let key_part = parts.last()?;

        for &part in &parts[..parts.len() - 1] {
            match part.to_lowercase().as_str() {
                "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }

        let code = match key_part.to_lowercase().as_str() {
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "backtab" => KeyCode::BackTab,
            "backspace" | "bksp" => KeyCode::Backspace,
            "delete" | "del" => KeyCode::Delete,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pageup" | "pgup" => KeyCode::PageUp,
            "pagedown" | "pgdn" => KeyCode::PageDown,
            "space" => KeyCode::Char(' '),
            k if k.starts_with('f') && k.len() > 1 => {
                let n: u8 = k[1..].parse().ok()?;
                KeyCode::F(n)
            }
            _ if key_part.chars().count() == 1 => KeyCode::Char(key_part.chars().next()?),
            _ => return None,
        };

        Some(KeyBind { code, modifiers })
    }
}

// ───────────────────────────────────────── config ────────────

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bindings: HashMap<Action, Vec<KeyBind>>,
    /// View mode the diff viewer opens in.
    pub default_view: ViewMode,
    /// Dashboard clock refresh period.
    pub clock_refresh_secs: u64,
    /// Optional name appended to the greeting.
    pub user_name: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bindings: Self::default_bindings(),
            default_view: ViewMode::default(),
            clock_refresh_secs: DEFAULT_CLOCK_REFRESH_SECS,
            user_name: None,
        }
    }
}

impl AppConfig {
    /// Built-in bindings.  Plain printable keys are left free for typing
    /// into the diff inputs.
    pub fn default_bindings() -> HashMap<Action, Vec<KeyBind>> {
        use Action::*;
        use KeyCode::*;
        let n = KeyModifiers::NONE;
        let ctrl = KeyModifiers::CONTROL;
        let mut m = HashMap::new();

        m.insert(SwitchScreen, vec![KeyBind::new(F(2), n), KeyBind::new(Char('o'), ctrl)]);
        m.insert(ToggleView, vec![KeyBind::new(F(3), n), KeyBind::new(Char('t'), ctrl)]);
        m.insert(ClearAll, vec![KeyBind::new(F(4), n), KeyBind::new(Char('l'), ctrl)]);
        m.insert(SwitchInput, vec![KeyBind::new(Tab, n)]);
        m.insert(ToggleFocus, vec![KeyBind::new(F(5), n), KeyBind::new(Char('f'), ctrl)]);
        m.insert(MoveUp, vec![KeyBind::new(Up, n), KeyBind::new(Char('k'), n)]);
        m.insert(MoveDown, vec![KeyBind::new(Down, n), KeyBind::new(Char('j'), n)]);
        m.insert(ScrollUp, vec![KeyBind::new(PageUp, n)]);
        m.insert(ScrollDown, vec![KeyBind::new(PageDown, n)]);
        m.insert(ShowHelp, vec![KeyBind::new(F(1), n)]);
        m.insert(Quit, vec![KeyBind::new(Char('q'), ctrl)]);

        m
    }

    /// Find the action that matches a key event.  When multiple bindings
    /// match, the one with the most modifiers wins.
    pub fn match_key(&self, event: KeyEvent) -> Option<Action> {
        let mut best: Option<Action> = None;
        let mut best_mod_count = 0;

        for (&action, binds) in &self.bindings {
            for bind in binds {
                if bind.matches(event) {
                    let mc = bind.modifiers.bits().count_ones();
                    if best.is_none() || mc > best_mod_count {
                        best = Some(action);
                        best_mod_count = mc;
                    }
                }
            }
        }
        best
    }

    /// Restore all bindings to the built-in defaults.
    pub fn reset_defaults(&mut self) {
        self.bindings = Self::default_bindings();
    }

    /// Format the binding list for a given action (e.g. `"F2/Ctrl+o"`).
    pub fn display_bindings(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(binds) if !binds.is_empty() => {
                binds.iter().map(|b| b.display()).collect::<Vec<_>>().join("/")
            }
            _ => "unbound".into(),
        }
    }

    /// Short display of the first binding only (for the status bar).
    fn short_binding(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(binds) if !binds.is_empty() => binds[0].display(),
            _ => "?".into(),
        }
    }

    /// Build the status-bar hint string from current bindings.
    pub fn status_bar_hint(&self) -> String {
        format!(
            "{}: help | {}: switch screen | {}: view | {}: clear | {}: quit",
            self.short_binding(Action::ShowHelp),
            self.short_binding(Action::SwitchScreen),
            self.short_binding(Action::ToggleView),
            self.short_binding(Action::ClearAll),
            self.short_binding(Action::Quit),
        )
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load config from the default location, falling back to defaults.
    pub fn load() -> Self {
        let path = config_path();
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("ignoring config: {e}");
                Self::default()
            }
        }
    }

    /// Load config from `path`.  Malformed lines are skipped with a warning;
    /// only I/O failures are fatal.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let (config, problems) = Self::parse_config(&contents);
        for problem in problems {
            tracing::warn!("{}: {problem}", path.display());
        }
        Ok(config)
    }

    /// Persist current config to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(path, self.serialise()).map_err(io_err)?;
        Ok(())
    }

    fn parse_config(s: &str) -> (Self, Vec<ConfigError>) {
        let mut config = Self::default();
        let mut problems = Vec::new();

        for (idx, line) in s.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim().trim_matches('"');

            let bad_value = || ConfigError::BadValue {
                line: line_no,
                key: key.to_string(),
                value: value.to_string(),
            };

            match key {
                "default_view" => {
                    match ViewMode::from_config_key(value) {
                        Some(mode) => config.default_view = mode,
                        None => problems.push(bad_value()),
                    }
                    continue;
                }
                "clock_refresh_secs" => {
                    match value.parse::<u64>() {
                        Ok(v) => config.clock_refresh_secs = v.clamp(1, 3600),
                        Err(_) => problems.push(bad_value()),
                    }
                    continue;
                }
                "user_name" => {
                    config.user_name = Some(value.to_string()).filter(|v| !v.is_empty());
                    continue;
                }
                _ => {}
            }

            let Some(action) = Action::from_config_key(key) else {
                problems.push(ConfigError::UnknownKey {
                    line: line_no,
                    key: key.to_string(),
                });
                continue;
            };

            let mut parsed = Vec::new();
            for part in value.split(',') {
                let part = part.trim().trim_matches('"');
                match KeyBind::parse(part) {
                    Some(bind) => parsed.push(bind),
                    None => problems.push(ConfigError::BadBinding {
                        line: line_no,
                        spec: part.to_string(),
                    }),
                }
            }
            if !parsed.is_empty() {
                config.bindings.insert(action, parsed);
            }
        }

        (config, problems)
    }

    fn serialise(&self) -> String {
        let mut lines = vec![
            "# diffdash configuration".to_string(),
            String::new(),
            "# Viewer settings".to_string(),
            format!("default_view = {}", self.default_view.config_key()),
            format!("clock_refresh_secs = {}", self.clock_refresh_secs),
        ];
        if let Some(name) = &self.user_name {
            lines.push(format!("user_name = {name}"));
        }
        lines.extend([
            String::new(),
            "# Key bindings".to_string(),
            "# Format: action = Key1, Key2, ...".to_string(),
            "# Modifiers: Ctrl+, Alt+, Shift+ (prefix)".to_string(),
            "# Special keys: Up, Down, Left, Right, Enter, Esc, Tab,".to_string(),
            "#   Backspace, Delete, Home, End, PageUp, PageDown, Space, F1-F12".to_string(),
            String::new(),
        ]);

        for &action in Action::ALL {
            if let Some(binds) = self.bindings.get(&action) {
                let keys: Vec<String> = binds.iter().map(|b| b.to_config_string()).collect();
                lines.push(format!("{} = {}", action.config_key(), keys.join(", ")));
            }
        }
        lines.push(String::new());
        lines.join("\n")
    }
}

/// Return the config file path (`$XDG_CONFIG_HOME/diffdash/config.toml`).
fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("diffdash").join("config.toml")
}
