//! Settings menu model (data only).
//!
//! Keeping these definitions outside the input handler lets both the handler
//! and UI renderers consume the same source of truth without cross-importing.

use super::state::{ActiveView, AppState};

/// A single item in the settings menu.
pub enum SettingsItem {
    /// Opens a submenu.
    Submenu {
        label: &'static str,
        view: ActiveView,
    },
    /// Boolean toggle — reads/writes via accessors on `AppState`.
    Toggle {
        label: &'static str,
        get: fn(&AppState) -> bool,
        set: fn(&mut AppState, bool),
    },
    /// Cycles through a finite set of values.
    Cycle {
        label: &'static str,
        value: fn(&AppState) -> String,
        cycle: fn(&mut AppState),
    },
}

impl SettingsItem {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Submenu { label, .. }
            | Self::Toggle { label, .. }
            | Self::Cycle { label, .. } => label,
        }
    }

    /// Current value as shown in the popup.
    pub fn value(&self, state: &AppState) -> String {
        match self {
            Self::Submenu { .. } => "›".into(),
            Self::Toggle { get, .. } => String::from(if get(state) { "[x]" } else { "[ ]" }),
            Self::Cycle { value, .. } => value(state),
        }
    }
}

fn next_in<T: Copy + PartialEq>(options: &[T], current: T, fallback: usize) -> T {
    let idx = options.iter().position(|o| *o == current).unwrap_or(fallback);
    options[(idx + 1) % options.len()]
}

/// All items shown in the settings popup, in display order.
pub static SETTINGS_ITEMS: &[SettingsItem] = &[
    SettingsItem::Submenu {
        label: "Controls",
        view: ActiveView::ControlsSubmenu,
    },
    SettingsItem::Cycle {
        label: "Smoothing",
        value: |s| s.config.motion.smoothing.label().to_string(),
        cycle: |s| {
            let next = s.config.motion.smoothing.next();
            s.set_smoothing(next);
        },
    },
    SettingsItem::Toggle {
        label: "Continuous Scroll Poll",
        get: |s| s.config.continuous_poll,
        set: |s, v| {
            s.config.continuous_poll = v;
            s.persist_config();
        },
    },
    SettingsItem::Cycle {
        label: "Frame Interval",
        value: |s| format!("{}ms", s.frame_ms()),
        cycle: |s| {
            const INTERVALS: &[u64] = &[8, 16, 33, 50];
            let next = next_in(INTERVALS, s.frame_ms(), 1);
            s.set_frame_ms(next);
            s.status_message = Some(format!("Frame interval: {next}ms"));
        },
    },
    SettingsItem::Cycle {
        label: "Cluster Lift",
        value: |s| format!("{:.2}", s.config.cluster.lift_step),
        cycle: |s| {
            const LIFTS: &[f64] = &[0.05, 0.10, 0.15, 0.20];
            let next = next_in(LIFTS, s.config.cluster.lift_step, 1);
            s.config.cluster.lift_step = next;
            s.persist_config();
            s.replace_markers();
            s.status_message = Some(format!("Cluster lift: {next:.2}"));
        },
    },
];
