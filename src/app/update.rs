// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Every external event lands here: button presses, watch-stream items, the
//! system theme poll, and the controller's own timer expiries. Handlers
//! mutate state and return follow-up tasks; nothing here blocks.

use super::{App, Message, Panel};
use crate::config;
use crate::error::GeolocationError;
use crate::geo::PositionSample;
use crate::geolocation::{WatchId, WatchItem};
use crate::ui::theming::ThemeMode;
use iced::Task;
use std::time::Duration;

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ThemeToggled => {
                self.handle_theme_toggled();
                Task::none()
            }
            Message::SystemThemeChanged(mode) => {
                self.handle_system_theme_changed(mode);
                Task::none()
            }
            Message::TrackingToggled => self.handle_tracking_toggled(),
            Message::TrackingButtonReady => {
                self.button_disabled = false;
                Task::none()
            }
            Message::Watch(id, item) => self.handle_watch_item(id, item),
            Message::CopyCoordinates => self.handle_copy(),
            Message::CopyFeedbackExpired => {
                self.copied = false;
                Task::none()
            }
        }
    }

    /// Flips the theme, records it as an explicit choice, and persists it.
    /// From this point on the system preference is ignored.
    fn handle_theme_toggled(&mut self) {
        self.theme = self.theme.toggled();
        self.config.theme_mode = Some(self.theme);
        self.save_config();
    }

    /// Adopts a system preference change, but only while the user has never
    /// chosen explicitly. The poll subscription is already gated on the same
    /// condition; the check here keeps late messages harmless.
    fn handle_system_theme_changed(&mut self, mode: ThemeMode) {
        if self.config.theme_mode.is_none() {
            self.theme = mode;
        }
    }

    fn handle_tracking_toggled(&mut self) -> Task<Message> {
        if self.watch.is_some() {
            self.stop_tracking()
        } else {
            self.start_tracking()
        }
    }

    /// Clears the previous session and subscribes to the position stream.
    /// The button is disabled for a fixed debounce window regardless of how
    /// the request turns out.
    fn start_tracking(&mut self) -> Task<Message> {
        self.panel = Panel::Loading(String::from("Starting real-time tracking..."));
        self.button_disabled = true;
        let debounce = Task::perform(
            async {
                tokio::time::sleep(Duration::from_millis(config::BUTTON_DEBOUNCE_MS)).await;
            },
            |()| Message::TrackingButtonReady,
        );

        self.history.clear();
        self.map.path.clear();
        self.copied = false;

        if !self.provider.available() {
            self.fail_tracking(GeolocationError::Unsupported.to_string());
            return debounce;
        }

        self.next_watch_id += 1;
        self.watch = Some(WatchId(self.next_watch_id));
        debounce
    }

    /// Drops the watch handle; the id-keyed subscription disappears with it,
    /// which cancels the stream.
    fn stop_tracking(&mut self) -> Task<Message> {
        self.watch = None;
        self.panel = Panel::Stopped;
        Task::none()
    }

    /// Routes one watch-stream item. Items from a watch that is no longer
    /// current are dropped without effect.
    fn handle_watch_item(&mut self, id: WatchId, item: WatchItem) -> Task<Message> {
        if self.watch != Some(id) {
            return Task::none();
        }
        match item {
            Ok(sample) => {
                self.handle_position(sample);
                Task::none()
            }
            Err(err) => {
                self.fail_tracking(err.to_string());
                Task::none()
            }
        }
    }

    /// Appends the fix to the session history, refreshes the panel, and
    /// updates the map: recenter at close zoom, create-or-move the marker,
    /// and redraw the whole breadcrumb path once there is more than one point.
    fn handle_position(&mut self, sample: PositionSample) {
        let point = sample.latlng();
        self.history.push(point);

        self.panel = Panel::Fix(sample);
        self.copied = false;

        self.map_visible = true;
        self.map.set_view(point, config::TRACKING_ZOOM);
        self.map.place_marker(point);
        self.map.redraw_path(&self.history);
    }

    /// Terminal failure for the current attempt: surface the message, bring
    /// the tracking button back, hide the map. No retry.
    fn fail_tracking(&mut self, message: String) {
        self.watch = None;
        self.panel = Panel::Error(message);
        self.button_disabled = false;
        self.map_visible = false;
    }

    /// Copies `"lat, lng"` to the clipboard and schedules the feedback reset.
    /// A reset from a superseded copy is not cancelled; it just rewrites the
    /// same flag.
    fn handle_copy(&mut self) -> Task<Message> {
        let Panel::Fix(sample) = &self.panel else {
            return Task::none();
        };
        self.copied = true;
        let write = iced::clipboard::write(sample.clipboard_text());
        let reset = Task::perform(
            async {
                tokio::time::sleep(Duration::from_millis(config::COPY_FEEDBACK_MS)).await;
            },
            |()| Message::CopyFeedbackExpired,
        );
        Task::batch([write, reset])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Flags;
    use crate::geo::LatLng;
    use tempfile::TempDir;

    fn test_app() -> (App, TempDir) {
        let temp_dir = tempfile::tempdir().expect("temp dir");
        let (app, _task) = App::new(Flags {
            config_dir: Some(temp_dir.path().to_string_lossy().into_owned()),
            ..Flags::default()
        });
        (app, temp_dir)
    }

    fn unavailable_app() -> (App, TempDir) {
        let temp_dir = tempfile::tempdir().expect("temp dir");
        let (app, _task) = App::new(Flags {
            no_provider: true,
            config_dir: Some(temp_dir.path().to_string_lossy().into_owned()),
            ..Flags::default()
        });
        (app, temp_dir)
    }

    fn fix(lat: f64, lng: f64) -> PositionSample {
        PositionSample {
            latitude: lat,
            longitude: lng,
            accuracy: 10.0,
            heading: None,
            speed: None,
            timestamp_ms: 0,
        }
    }

    fn start_tracking(app: &mut App) -> WatchId {
        let _ = app.update(Message::TrackingToggled);
        app.watch.expect("tracking should have started")
    }

    #[test]
    fn toggling_theme_twice_restores_theme_and_persists_it() {
        let (mut app, temp_dir) = test_app();
        let original = app.theme;

        let _ = app.update(Message::ThemeToggled);
        assert_eq!(app.theme, original.toggled());

        let _ = app.update(Message::ThemeToggled);
        assert_eq!(app.theme, original);

        let loaded = config::load_from_path(&temp_dir.path().join("settings.toml"))
            .expect("config should have been saved");
        assert_eq!(loaded.theme_mode, Some(original));
    }

    #[test]
    fn system_change_is_ignored_after_explicit_choice() {
        let (mut app, _temp_dir) = test_app();
        let _ = app.update(Message::ThemeToggled);
        let chosen = app.theme;

        let _ = app.update(Message::SystemThemeChanged(chosen.toggled()));
        assert_eq!(app.theme, chosen);
    }

    #[test]
    fn system_change_is_honored_without_explicit_choice() {
        let (mut app, _temp_dir) = test_app();
        let target = app.theme.toggled();

        let _ = app.update(Message::SystemThemeChanged(target));
        assert_eq!(app.theme, target);
    }

    #[test]
    fn starting_tracking_clears_history_and_path() {
        let (mut app, _temp_dir) = test_app();
        let id = start_tracking(&mut app);
        let _ = app.update(Message::Watch(id, Ok(fix(10.0, 10.0))));
        let _ = app.update(Message::Watch(id, Ok(fix(10.0, 11.0))));
        assert_eq!(app.history.len(), 2);
        assert!(!app.map.path.is_empty());

        let _ = app.update(Message::TrackingToggled); // stop
        let _ = app.update(Message::TrackingToggled); // start again
        assert!(app.history.is_empty());
        assert!(app.map.path.is_empty());
        assert!(matches!(app.panel, Panel::Loading(_)));
    }

    #[test]
    fn start_mints_a_fresh_watch_each_session() {
        let (mut app, _temp_dir) = test_app();
        let first = start_tracking(&mut app);
        let _ = app.update(Message::TrackingToggled);
        let second = start_tracking(&mut app);
        assert_ne!(first, second);
    }

    #[test]
    fn stopping_prevents_further_updates() {
        let (mut app, _temp_dir) = test_app();
        let id = start_tracking(&mut app);
        let _ = app.update(Message::Watch(id, Ok(fix(10.0, 10.0))));

        let _ = app.update(Message::TrackingToggled);
        assert!(app.watch.is_none());
        assert_eq!(app.panel, Panel::Stopped);

        let _ = app.update(Message::Watch(id, Ok(fix(20.0, 20.0))));
        assert_eq!(app.history.len(), 1);
        assert_eq!(app.panel, Panel::Stopped);
    }

    #[test]
    fn stale_watch_updates_are_dropped_after_restart() {
        let (mut app, _temp_dir) = test_app();
        let old = start_tracking(&mut app);
        let _ = app.update(Message::TrackingToggled);
        let current = start_tracking(&mut app);

        let _ = app.update(Message::Watch(old, Ok(fix(1.0, 1.0))));
        assert!(app.history.is_empty());

        let _ = app.update(Message::Watch(current, Ok(fix(2.0, 2.0))));
        assert_eq!(app.history.len(), 1);
    }

    #[test]
    fn three_fixes_leave_one_polyline_and_marker_at_last_point() {
        let (mut app, _temp_dir) = test_app();
        let id = start_tracking(&mut app);

        for lng in [10.0, 11.0, 12.0] {
            let _ = app.update(Message::Watch(id, Ok(fix(10.0, lng))));
        }

        assert_eq!(app.map.path.polylines().len(), 1);
        assert_eq!(
            app.map.path.polylines()[0],
            vec![
                LatLng::new(10.0, 10.0),
                LatLng::new(10.0, 11.0),
                LatLng::new(10.0, 12.0),
            ]
        );
        assert_eq!(app.map.marker, Some(LatLng::new(10.0, 12.0)));
        assert_eq!(app.map.center, LatLng::new(10.0, 12.0));
        assert_eq!(app.map.zoom, config::TRACKING_ZOOM);
    }

    #[test]
    fn first_fix_draws_marker_but_no_path() {
        let (mut app, _temp_dir) = test_app();
        let id = start_tracking(&mut app);
        let _ = app.update(Message::Watch(id, Ok(fix(10.0, 10.0))));

        assert_eq!(app.map.marker, Some(LatLng::new(10.0, 10.0)));
        assert!(app.map.path.is_empty());
    }

    #[test]
    fn unavailable_provider_fails_without_subscribing() {
        let (mut app, _temp_dir) = unavailable_app();
        let _ = app.update(Message::TrackingToggled);

        assert!(app.watch.is_none());
        assert!(!app.map_visible);
        assert!(!app.button_disabled);
        match &app.panel {
            Panel::Error(message) => assert!(message.contains("not supported")),
            other => panic!("expected error panel, got {:?}", other),
        }
    }

    #[test]
    fn stream_error_is_terminal_and_surfaces_message() {
        let (mut app, _temp_dir) = test_app();
        let id = start_tracking(&mut app);
        let _ = app.update(Message::Watch(id, Err(GeolocationError::PermissionDenied)));

        assert!(app.watch.is_none());
        assert!(!app.map_visible);
        assert!(!app.button_disabled);
        assert_eq!(
            app.panel,
            Panel::Error(GeolocationError::PermissionDenied.to_string())
        );
    }

    #[test]
    fn fix_after_error_makes_map_visible_again() {
        let (mut app, _temp_dir) = test_app();
        let id = start_tracking(&mut app);
        let _ = app.update(Message::Watch(id, Err(GeolocationError::PositionUnavailable)));
        assert!(!app.map_visible);

        let id = start_tracking(&mut app);
        let _ = app.update(Message::Watch(id, Ok(fix(10.0, 10.0))));
        assert!(app.map_visible);
    }

    #[test]
    fn tracking_button_debounce_lifecycle() {
        let (mut app, _temp_dir) = test_app();
        start_tracking(&mut app);
        assert!(app.button_disabled);

        let _ = app.update(Message::TrackingButtonReady);
        assert!(!app.button_disabled);
    }

    #[test]
    fn copy_sets_feedback_and_expiry_clears_it() {
        let (mut app, _temp_dir) = test_app();
        let id = start_tracking(&mut app);
        let _ = app.update(Message::Watch(id, Ok(fix(10.5, -0.25))));

        let _ = app.update(Message::CopyCoordinates);
        assert!(app.copied);

        let _ = app.update(Message::CopyFeedbackExpired);
        assert!(!app.copied);
    }

    #[test]
    fn copy_without_a_fix_is_a_no_op() {
        let (mut app, _temp_dir) = test_app();
        let _ = app.update(Message::CopyCoordinates);
        assert!(!app.copied);
    }

    #[test]
    fn new_fix_resets_copy_feedback() {
        let (mut app, _temp_dir) = test_app();
        let id = start_tracking(&mut app);
        let _ = app.update(Message::Watch(id, Ok(fix(10.0, 10.0))));
        let _ = app.update(Message::CopyCoordinates);
        assert!(app.copied);

        let _ = app.update(Message::Watch(id, Ok(fix(10.0, 11.0))));
        assert!(!app.copied);
    }
}
