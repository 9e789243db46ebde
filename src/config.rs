//! User configuration — keybindings, motion tuning and persistence.
//!
//! Settings are stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/scrollmotion/config.toml` (default
//! `~/.config/scrollmotion/config.toml`).

use std::collections::HashMap;
use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use thiserror::Error;

use crate::core::cluster::ClusterConfig;
use crate::core::sampler::NearMargins;
use crate::core::segment::{GuardWindow, MotionWindows};
use crate::core::smoother::SmoothingMode;

// ───────────────────────────────────────── actions ───────────

/// All configurable user actions on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    ScrollDown,
    ScrollUp,
    PageDown,
    PageUp,
    NextSection,
    PrevSection,
    Top,
    Bottom,
    ToggleSmoothing,
    OpenSettings,
    Quit,
}

impl Action {
    /// Ordered list of all actions (used for the controls menu).
    pub const ALL: &[Action] = &[
        Action::ScrollDown,
        Action::ScrollUp,
        Action::PageDown,
        Action::PageUp,
        Action::NextSection,
        Action::PrevSection,
        Action::Top,
        Action::Bottom,
        Action::ToggleSmoothing,
        Action::OpenSettings,
        Action::Quit,
    ];

    /// Human-readable label for the UI.
    pub fn label(self) -> &'static str {
        match self {
            Action::ScrollDown => "Scroll Down",
            Action::ScrollUp => "Scroll Up",
            Action::PageDown => "Page Down",
            Action::PageUp => "Page Up",
            Action::NextSection => "Next Section",
            Action::PrevSection => "Previous Section",
            Action::Top => "Top of Page",
            Action::Bottom => "Bottom of Page",
            Action::ToggleSmoothing => "Toggle Smoothing",
            Action::OpenSettings => "Open Settings",
            Action::Quit => "Quit",
        }
    }

    /// Key used in the config file.
    fn config_key(self) -> &'static str {
        match self {
            Action::ScrollDown => "scroll_down",
            Action::ScrollUp => "scroll_up",
            Action::PageDown => "page_down",
            Action::PageUp => "page_up",
            Action::NextSection => "next_section",
            Action::PrevSection => "prev_section",
            Action::Top => "top",
            Action::Bottom => "bottom",
            Action::ToggleSmoothing => "toggle_smoothing",
            Action::OpenSettings => "open_settings",
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

const MODIFIER_MASK: KeyModifiers = KeyModifiers::CONTROL
    .union(KeyModifiers::ALT)
    .union(KeyModifiers::SHIFT);

impl KeyBind {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Only CTRL/ALT/SHIFT are compared.
    pub fn matches(&self, event: KeyEvent) -> bool {
        self.code == event.code
            && (self.modifiers & MODIFIER_MASK) == (event.modifiers & MODIFIER_MASK)
    }

    /// Create a binding from a raw key event (used during rebinding).
    pub fn from_key_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers & MODIFIER_MASK,
        }
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

    /// User-friendly display string (e.g. `"Alt+↑"`, `"Ctrl+c"`, `"q"`).
    pub fn display(&self) -> String {
        let key = match self.code {
            KeyCode::Up => "↑".into(),
            KeyCode::Down => "↓".into(),
            KeyCode::Left => "←".into(),
            KeyCode::Right => "→".into(),
            KeyCode::PageUp => "PgUp".into(),
            KeyCode::PageDown => "PgDn".into(),
            KeyCode::Backspace => "Bksp".into(),
            KeyCode::Delete => "Del".into(),
            _ => key_name(self.code),
        };
        format!("{}{key}", self.modifier_prefix())
    }

    /// Serialise to config-file format (e.g. `"Alt+Up"`, `"Ctrl+c"`, `"q"`).
    fn to_config_string(&self) -> String {
        format!("{}{}", self.modifier_prefix(), key_name(self.code))
    }

    /// Parse a key string like `"Ctrl+c"`, `"Alt+Up"`, `"q"`, `"Enter"`.
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
            "backspace" | "bksp" => KeyCode::Backspace,
            "delete" | "del" => KeyCode::Delete,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pageup" | "pgup" => KeyCode::PageUp,
            "pagedown" | "pgdn" => KeyCode::PageDown,
            "space" => KeyCode::Char(' '),
            s if s.starts_with('f') && s.len() > 1 => {
                let n: u8 = s[1..].parse().ok()?;
                KeyCode::F(n)
            }
            // Single characters keep their case (`b` and `B` differ).
            _ if key_part.chars().count() == 1 => KeyCode::Char(key_part.chars().next()?),
            _ => return None,
        };

        Some(KeyBind { code, modifiers })
    }
}

fn key_name(code: KeyCode) -> String {
    match code {
        KeyCode::Char(' ') => "Space".into(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Up => "Up".into(),
        KeyCode::Down => "Down".into(),
        KeyCode::Left => "Left".into(),
        KeyCode::Right => "Right".into(),
        KeyCode::Enter => "Enter".into(),
        KeyCode::Esc => "Esc".into(),
        KeyCode::Tab => "Tab".into(),
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

// ───────────────────────────────────────── motion tuning ─────

/// Why a tuning group was rejected.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("`{key}` = {value} is outside {min}..={max}")]
    OutOfRange {
        key: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("`{first}` ({a}) must be below `{second}` ({b})")]
    Misordered {
        first: &'static str,
        a: f64,
        second: &'static str,
        b: f64,
    },
    #[error("`{key}`: cannot parse `{value}`")]
    Unparsable { key: String, value: String },
}

/// Scroll-animation tuning shared by all tracks.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionConfig {
    pub start_guard: f64,
    pub end_fade_start: f64,
    pub timeline_fade_len: f64,
    pub enter_end: f64,
    pub exit_start: f64,
    pub near_margin_below: f64,
    pub near_margin_above: f64,
    pub smoothing: SmoothingMode,
    pub smoothing_k: f64,
    pub epsilon: f64,
    pub spring_stiffness: f64,
    pub spring_damping: f64,
    pub spring_mass: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            start_guard: 0.1,
            end_fade_start: 0.98,
            timeline_fade_len: 0.08,
            enter_end: 0.15,
            exit_start: 0.92,
            near_margin_below: 1.2,
            near_margin_above: 0.2,
            smoothing: SmoothingMode::Exponential,
            smoothing_k: 0.12,
            epsilon: 0.001,
            spring_stiffness: 120.0,
            spring_damping: 24.0,
            spring_mass: 0.6,
        }
    }
}

fn check_range(key: &'static str, value: f64, min: f64, max: f64) -> Result<(), ConfigError> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { key, value, min, max })
    }
}

fn check_order(first: &'static str, a: f64, second: &'static str, b: f64) -> Result<(), ConfigError> {
    if a < b {
        Ok(())
    } else {
        Err(ConfigError::Misordered { first, a, second, b })
    }
}

impl MotionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("start_guard", self.start_guard, 0.0, 1.0)?;
        check_range("end_fade_start", self.end_fade_start, 0.0, 1.0)?;
        check_order("start_guard", self.start_guard, "end_fade_start", self.end_fade_start)?;
        check_range("timeline_fade_len", self.timeline_fade_len, 0.0, 1.0)?;
        check_range("enter_end", self.enter_end, 0.0, 1.0)?;
        check_range("exit_start", self.exit_start, 0.0, 1.0)?;
        check_order("enter_end", self.enter_end, "exit_start", self.exit_start)?;
        check_range("near_margin_below", self.near_margin_below, 0.0, 10.0)?;
        check_range("near_margin_above", self.near_margin_above, 0.0, 10.0)?;
        check_range("smoothing_k", self.smoothing_k, 0.01, 1.0)?;
        check_range("epsilon", self.epsilon, 1e-6, 0.1)?;
        check_range("spring_stiffness", self.spring_stiffness, 1.0, 10_000.0)?;
        check_range("spring_damping", self.spring_damping, 0.0, 1_000.0)?;
        check_range("spring_mass", self.spring_mass, 0.01, 100.0)?;
        Ok(())
    }

    pub fn guard(&self) -> GuardWindow {
        GuardWindow {
            start_guard: self.start_guard,
            end_fade_start: self.end_fade_start,
        }
    }

    pub fn windows(&self) -> MotionWindows {
        MotionWindows {
            enter_end: self.enter_end,
            exit_start: self.exit_start,
        }
    }

    pub fn margins(&self) -> NearMargins {
        NearMargins {
            below: self.near_margin_below,
            above: self.near_margin_above,
        }
    }
}

fn validate_cluster(c: &ClusterConfig) -> Result<(), ConfigError> {
    check_range("cluster_bucket_deg", c.bucket_deg, 0.01, 10.0)?;
    check_range("cluster_lift_step", c.lift_step, 0.0, 1.0)
}

// ───────────────────────────────────────── config ────────────

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bindings: HashMap<Action, Vec<KeyBind>>,
    pub motion: MotionConfig,
    pub cluster: ClusterConfig,
    /// Frame interval of the animation loop.
    pub frame_ms: u64,
    /// Poll the scroll offset every frame, not only on input.
    pub continuous_poll: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bindings: Self::default_bindings(),
            motion: MotionConfig::default(),
            cluster: ClusterConfig::default(),
            frame_ms: 16,
            continuous_poll: true,
        }
    }
}

impl AppConfig {
    /// Built-in keybindings.
    pub fn default_bindings() -> HashMap<Action, Vec<KeyBind>> {
        let n = KeyModifiers::NONE;
        let key = |code| KeyBind::new(code, n);
        let ch = |c| KeyBind::new(KeyCode::Char(c), n);
        let mut m = HashMap::new();

        m.insert(Action::ScrollDown, vec![key(KeyCode::Down), ch('j')]);
        m.insert(Action::ScrollUp, vec![key(KeyCode::Up), ch('k')]);
        m.insert(Action::PageDown, vec![key(KeyCode::PageDown), ch(' ')]);
        m.insert(Action::PageUp, vec![key(KeyCode::PageUp), ch('b')]);
        m.insert(Action::NextSection, vec![key(KeyCode::Right), ch('l')]);
        m.insert(Action::PrevSection, vec![key(KeyCode::Left), ch('h')]);
        m.insert(Action::Top, vec![key(KeyCode::Home), ch('g')]);
        m.insert(
            Action::Bottom,
            vec![key(KeyCode::End), KeyBind::new(KeyCode::Char('G'), KeyModifiers::SHIFT)],
        );
        m.insert(Action::ToggleSmoothing, vec![ch('s')]);
        m.insert(Action::OpenSettings, vec![ch('?')]);
        m.insert(Action::Quit, vec![ch('q')]);

        m
    }

    /// Find the action that matches a key event; the binding with the most
    /// modifiers wins.
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

    /// Add a binding for `action`, taking the key away from any other action.
    pub fn add_binding(&mut self, action: Action, bind: KeyBind) {
        for binds in self.bindings.values_mut() {
            binds.retain(|b| b != &bind);
        }
        self.bindings.entry(action).or_default().push(bind);
    }

    pub fn reset_defaults(&mut self) {
        self.bindings = Self::default_bindings();
    }

    /// Format the binding list for a given action (e.g. `"↓/j"`).
    pub fn display_bindings(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(binds) if !binds.is_empty() => {
                binds.iter().map(|b| b.display()).collect::<Vec<_>>().join("/")
            }
            _ => "unbound".into(),
        }
    }

    fn short_binding(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(binds) if !binds.is_empty() => binds[0].display(),
            _ => "?".into(),
        }
    }

    /// Build the status-bar hint string from current bindings.
    pub fn status_bar_hint(&self) -> String {
        format!(
            "{}: scroll | {}: next section | {}: smoothing | {}: settings",
            self.short_binding(Action::ScrollDown),
            self.short_binding(Action::NextSection),
            self.short_binding(Action::ToggleSmoothing),
            self.short_binding(Action::OpenSettings),
        )
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load config from disk, falling back to defaults.
    pub fn load() -> Self {
        let path = config_path();
        match std::fs::read_to_string(&path) {
            Ok(contents) => Self::parse(&contents),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "no config file, using defaults");
                Self::default()
            }
        }
    }

    /// Persist current config to disk.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, self.to_text())?;
        Ok(())
    }

    /// Parse config text.  Unknown keys are ignored; an invalid tuning
    /// group is logged and reset to its defaults.
    pub fn parse(s: &str) -> Self {
        let mut config = Self::default();

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim().trim_matches('"');

            match config.apply_setting(key, value) {
                Ok(true) => continue,
                Ok(false) => {}
                Err(e) => {
                    tracing::warn!(error = %e, "ignoring config entry");
                    continue;
                }
            }

            let Some(action) = Action::from_config_key(key) else {
                continue;
            };

            let parsed: Vec<KeyBind> = value
                .split(',')
                .filter_map(|part| KeyBind::parse(part.trim().trim_matches('"')))
                .collect();
            if !parsed.is_empty() {
                config.bindings.insert(action, parsed);
            }
        }

        if let Err(e) = config.motion.validate() {
            tracing::warn!(error = %e, "invalid motion settings, using defaults");
            config.motion = MotionConfig::default();
        }
        if let Err(e) = validate_cluster(&config.cluster) {
            tracing::warn!(error = %e, "invalid cluster settings, using defaults");
            config.cluster = ClusterConfig::default();
        }

        config
    }

    /// Apply one non-binding setting.  `Ok(false)` means the key is not a
    /// setting (it may be a binding).
    fn apply_setting(&mut self, key: &str, value: &str) -> Result<bool, ConfigError> {
        let number = || {
            value.parse::<f64>().map_err(|_| ConfigError::Unparsable {
                key: key.to_string(),
                value: value.to_string(),
            })
        };
        let m = &mut self.motion;
        match key {
            "start_guard" => m.start_guard = number()?,
            "end_fade_start" => m.end_fade_start = number()?,
            "timeline_fade_len" => m.timeline_fade_len = number()?,
            "enter_end" => m.enter_end = number()?,
            "exit_start" => m.exit_start = number()?,
            "near_margin_below" => m.near_margin_below = number()?,
            "near_margin_above" => m.near_margin_above = number()?,
            "smoothing_k" => m.smoothing_k = number()?,
            "epsilon" => m.epsilon = number()?,
            "spring_stiffness" => m.spring_stiffness = number()?,
            "spring_damping" => m.spring_damping = number()?,
            "spring_mass" => m.spring_mass = number()?,
            "smoothing" => {
                m.smoothing = SmoothingMode::from_config_value(value).ok_or_else(|| {
                    ConfigError::Unparsable {
                        key: key.to_string(),
                        value: value.to_string(),
                    }
                })?
            }
            "cluster_bucket_deg" => self.cluster.bucket_deg = number()?,
            "cluster_lift_step" => self.cluster.lift_step = number()?,
            "frame_ms" => {
                let ms = number()?;
                // Keep this bounded for a usable frame loop.
                self.frame_ms = (ms.round() as u64).clamp(8, 100);
            }
            "continuous_poll" => self.continuous_poll = value == "true",
            _ => return Ok(false),
        }
        Ok(true)
    }

    /// Effective configuration in the on-disk format.
    pub fn to_text(&self) -> String {
        let m = &self.motion;
        let mut lines = vec![
            "# scrollmotion configuration".to_string(),
            String::new(),
            "# Runtime".to_string(),
            format!("frame_ms = {}", self.frame_ms),
            format!("continuous_poll = {}", self.continuous_poll),
            String::new(),
            "# Motion".to_string(),
            format!("smoothing = {}", m.smoothing.config_value()),
            format!("smoothing_k = {}", m.smoothing_k),
            format!("epsilon = {}", m.epsilon),
            format!("spring_stiffness = {}", m.spring_stiffness),
            format!("spring_damping = {}", m.spring_damping),
            format!("spring_mass = {}", m.spring_mass),
            format!("start_guard = {}", m.start_guard),
            format!("end_fade_start = {}", m.end_fade_start),
            format!("timeline_fade_len = {}", m.timeline_fade_len),
            format!("enter_end = {}", m.enter_end),
            format!("exit_start = {}", m.exit_start),
            format!("near_margin_below = {}", m.near_margin_below),
            format!("near_margin_above = {}", m.near_margin_above),
            String::new(),
            "# Globe clusters".to_string(),
            format!("cluster_bucket_deg = {}", self.cluster.bucket_deg),
            format!("cluster_lift_step = {}", self.cluster.lift_step),
            String::new(),
            "# Key bindings".to_string(),
            "# Format: action = Key1, Key2, ...".to_string(),
            "# Modifiers: Ctrl+, Alt+, Shift+ (prefix)".to_string(),
            "# Special keys: Up, Down, Left, Right, Enter, Esc, Tab,".to_string(),
            "#   Backspace, Delete, Home, End, PageUp, PageDown, Space, F1-F12".to_string(),
            String::new(),
        ];

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

/// Return the config file path (`$XDG_CONFIG_HOME/scrollmotion/config.toml`).
fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("scrollmotion").join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn defaults_validate() {
        assert_eq!(MotionConfig::default().validate(), Ok(()));
        assert_eq!(validate_cluster(&ClusterConfig::default()), Ok(()));
    }

    #[test]
    fn parses_tuning_and_bindings() {
        let c = AppConfig::parse(
            "smoothing = spring\nsmoothing_k = 0.2\ncluster_lift_step = 0.05\n\
             frame_ms = 500\nscroll_down = x, Ctrl+d\n",
        );
        assert_eq!(c.motion.smoothing, SmoothingMode::Spring);
        assert_eq!(c.motion.smoothing_k, 0.2);
        assert_eq!(c.cluster.lift_step, 0.05);
        assert_eq!(c.frame_ms, 100);
        assert_eq!(c.match_key(press(KeyCode::Char('x'))), Some(Action::ScrollDown));
        assert_eq!(c.match_key(press(KeyCode::Char('j'))), None);
    }

    #[test]
    fn misordered_windows_fall_back_to_defaults() {
        let c = AppConfig::parse("enter_end = 0.95\nexit_start = 0.5\n");
        assert_eq!(c.motion, MotionConfig::default());
        let bad = MotionConfig {
            enter_end: 0.95,
            exit_start: 0.5,
            ..MotionConfig::default()
        };
        assert!(matches!(bad.validate(), Err(ConfigError::Misordered { .. })));
    }

    #[test]
    fn unparsable_values_are_skipped() {
        let c = AppConfig::parse("smoothing_k = fast\nsmoothing = wobbly\n");
        assert_eq!(c.motion, MotionConfig::default());
    }

    #[test]
    fn serialised_config_parses_back() {
        let mut c = AppConfig::default();
        c.motion.smoothing = SmoothingMode::Spring;
        c.cluster.bucket_deg = 1.5;
        c.continuous_poll = false;
        c.add_binding(Action::Quit, KeyBind::new(KeyCode::Char('x'), KeyModifiers::CONTROL));
        let back = AppConfig::parse(&c.to_text());
        assert_eq!(back.motion, c.motion);
        assert_eq!(back.cluster, c.cluster);
        assert!(!back.continuous_poll);
        assert_eq!(back.bindings, c.bindings);
    }

    #[test]
    fn page_motion_keys_are_bound_by_default() {
        let c = AppConfig::default();
        assert_eq!(c.match_key(press(KeyCode::PageDown)), Some(Action::PageDown));
        assert_eq!(c.match_key(press(KeyCode::PageUp)), Some(Action::PageUp));
        assert_eq!(c.match_key(press(KeyCode::Home)), Some(Action::Top));
        assert_eq!(c.match_key(press(KeyCode::End)), Some(Action::Bottom));
    }

    #[test]
    fn rebinding_steals_key_from_other_action() {
        let mut c = AppConfig::default();
        c.add_binding(Action::Quit, KeyBind::new(KeyCode::Char('j'), KeyModifiers::NONE));
        assert_eq!(c.match_key(press(KeyCode::Char('j'))), Some(Action::Quit));
        assert_eq!(c.display_bindings(Action::ScrollDown), "↓");
    }
}
