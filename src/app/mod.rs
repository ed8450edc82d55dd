// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct owns everything the widget needs: the persisted theme,
//! the position-source handle, the tracking session (watch id plus history),
//! and the map pane state. This file keeps the policy decisions (window size,
//! persistence location, provider selection) close to the main loop so
//! user-facing behavior is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::geo::{LatLng, PositionSample};
use crate::geolocation::{
    GeolocationProvider, SimulatedProvider, UnavailableProvider, WatchId,
};
use crate::map::MapState;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 360;
pub const MIN_WINDOW_HEIGHT: u32 = 540;

/// What the output panel currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum Panel {
    /// Nothing has happened yet.
    Idle,
    /// Tracking was requested; no fix yet.
    Loading(String),
    /// The latest fix.
    Fix(PositionSample),
    /// Tracking was stopped by the user.
    Stopped,
    /// The last attempt failed with this message.
    Error(String),
}

/// Root Iced application state.
pub struct App {
    config: Config,
    /// Explicit settings.toml location, used by tests; `None` uses the
    /// platform config directory.
    config_path: Option<PathBuf>,
    /// Effective theme currently rendered.
    theme: ThemeMode,
    provider: Arc<dyn GeolocationProvider>,
    /// Current watch session; `None` means not tracking. At most one watch
    /// is ever active.
    watch: Option<WatchId>,
    next_watch_id: u64,
    /// Points received during the current session, in arrival order.
    history: Vec<LatLng>,
    map: MapState,
    map_visible: bool,
    panel: Panel,
    /// Whether the copy button is in its transient "Copied!" state.
    copied: bool,
    /// Post-press debounce on the tracking button.
    button_disabled: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme", &self.theme)
            .field("watch", &self.watch)
            .field("history_len", &self.history.len())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state: loads the persisted theme (falling back
    /// to the system preference), selects the position provider, and builds
    /// the map with its world-view default and empty path overlay.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_path = flags
            .config_dir
            .as_ref()
            .map(|dir| PathBuf::from(dir).join("settings.toml"));

        let config = match &config_path {
            Some(path) if path.exists() => config::load_from_path(path).unwrap_or_default(),
            Some(_) => Config::default(),
            None => config::load().unwrap_or_default(),
        };

        let theme = config.theme_mode.unwrap_or_else(ThemeMode::system);

        let provider: Arc<dyn GeolocationProvider> = if flags.no_provider {
            Arc::new(UnavailableProvider)
        } else {
            let mut provider = SimulatedProvider::default();
            if let Some((lat, lng)) = flags.start {
                provider = SimulatedProvider::new(
                    LatLng::new(lat, lng),
                    flags
                        .interval_ms
                        .unwrap_or(config::DEFAULT_SIMULATED_INTERVAL_MS),
                );
            } else if let Some(interval) = flags.interval_ms {
                provider = SimulatedProvider::new(
                    LatLng::new(config::DEFAULT_MAP_CENTER.0, config::DEFAULT_MAP_CENTER.1),
                    interval,
                );
            }
            Arc::new(provider)
        };

        let app = App {
            config,
            config_path,
            theme,
            provider,
            watch: None,
            next_watch_id: 0,
            history: Vec::new(),
            map: MapState::new(),
            map_visible: true,
            panel: Panel::Idle,
            copied: false,
            button_disabled: false,
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("IcedTrack")
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::watch_subscription(Arc::clone(&self.provider), self.watch),
            subscription::system_theme_subscription(self.config.theme_mode.is_none()),
        ])
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    /// Persists the current config, honoring the test override path.
    fn save_config(&self) {
        let result = match &self.config_path {
            Some(path) => config::save_to_path(&self.config, path),
            None => config::save(&self.config),
        };
        if let Err(err) = result {
            eprintln!("Failed to save settings: {}", err);
        }
    }
}
