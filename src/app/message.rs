// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::geolocation::{WatchId, WatchItem};
use crate::ui::theming::ThemeMode;

/// Top-level messages consumed by `App::update`. One variant per external
/// event source, plus the timer expiries the controller schedules itself.
#[derive(Debug, Clone)]
pub enum Message {
    /// The theme toggle button was pressed.
    ThemeToggled,
    /// The system dark-mode preference poll observed this mode.
    SystemThemeChanged(ThemeMode),
    /// The tracking button was pressed (start or stop, depending on state).
    TrackingToggled,
    /// The post-press debounce elapsed; the tracking button may be used again.
    TrackingButtonReady,
    /// The watch stream produced a fix or a stream error. Carries the id of
    /// the watch it belongs to so stale sessions can be dropped.
    Watch(WatchId, WatchItem),
    /// The copy-coordinates button was pressed.
    CopyCoordinates,
    /// The transient "Copied!" feedback elapsed.
    CopyFeedbackExpired,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Start point for the simulated walk, `lat,lng`.
    pub start: Option<(f64, f64)>,
    /// Interval between simulated fixes in milliseconds.
    pub interval_ms: Option<u64>,
    /// Config directory override (for settings.toml). Used by tests.
    pub config_dir: Option<String>,
    /// Run without any position source, to exercise the unsupported path.
    pub no_provider: bool,
}
