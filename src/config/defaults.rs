// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Map**: Default view, tracking zoom, tile-layer bounds
//! - **Watch**: Position-stream subscription options
//! - **Timing**: Debounce and transient-feedback durations

// ==========================================================================
// Map Defaults
// ==========================================================================

/// Default map center before any fix arrives (mid-Atlantic world view).
pub const DEFAULT_MAP_CENTER: (f64, f64) = (20.0, 0.0);

/// Default zoom level for the world view.
pub const DEFAULT_MAP_ZOOM: u8 = 2;

/// Zoom level applied when recentering on a fresh fix.
pub const TRACKING_ZOOM: u8 = 17;

/// Maximum zoom the tile layer advertises.
pub const MAX_TILE_ZOOM: u8 = 19;

/// Tile URL template for the basemap descriptor.
pub const TILE_URL_TEMPLATE: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Attribution text shown on the map pane.
pub const TILE_ATTRIBUTION: &str = "© OpenStreetMap contributors";

// ==========================================================================
// Watch Defaults
// ==========================================================================

/// Request the most precise fix the source can produce.
pub const WATCH_HIGH_ACCURACY: bool = true;

/// Never accept a cached fix (milliseconds).
pub const WATCH_MAX_CACHE_AGE_MS: u64 = 0;

/// Give up on a fix after this long (milliseconds).
pub const WATCH_TIMEOUT_MS: u64 = 5000;

/// Interval between simulated fixes.
pub const DEFAULT_SIMULATED_INTERVAL_MS: u64 = 1000;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// How long the tracking button stays disabled after a press. A debounce
/// against rapid re-clicks, not tied to actual request completion.
pub const BUTTON_DEBOUNCE_MS: u64 = 1000;

/// How long the copy button shows "Copied!" before reverting.
pub const COPY_FEEDBACK_MS: u64 = 2000;

/// Cadence of the system dark-mode preference poll.
pub const SYSTEM_THEME_POLL_MS: u64 = 2000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Map validation
    assert!(DEFAULT_MAP_ZOOM < TRACKING_ZOOM);
    assert!(TRACKING_ZOOM <= MAX_TILE_ZOOM);
    assert!(DEFAULT_MAP_CENTER.0 >= -90.0 && DEFAULT_MAP_CENTER.0 <= 90.0);
    assert!(DEFAULT_MAP_CENTER.1 >= -180.0 && DEFAULT_MAP_CENTER.1 <= 180.0);

    // Watch validation
    assert!(WATCH_TIMEOUT_MS > 0);
    assert!(DEFAULT_SIMULATED_INTERVAL_MS > 0);

    // Timing validation
    assert!(BUTTON_DEBOUNCE_MS > 0);
    assert!(COPY_FEEDBACK_MS > 0);
    assert!(SYSTEM_THEME_POLL_MS > 0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_defaults_are_valid() {
        assert_eq!(DEFAULT_MAP_ZOOM, 2);
        assert_eq!(TRACKING_ZOOM, 17);
        assert!(TRACKING_ZOOM <= MAX_TILE_ZOOM);
    }

    #[test]
    fn watch_defaults_match_stream_options() {
        assert!(WATCH_HIGH_ACCURACY);
        assert_eq!(WATCH_MAX_CACHE_AGE_MS, 0);
        assert_eq!(WATCH_TIMEOUT_MS, 5000);
    }

    #[test]
    fn timing_defaults_are_valid() {
        assert_eq!(BUTTON_DEBOUNCE_MS, 1000);
        assert_eq!(COPY_FEEDBACK_MS, 2000);
    }

    #[test]
    fn tile_template_has_placeholders() {
        assert!(TILE_URL_TEMPLATE.contains("{z}"));
        assert!(TILE_URL_TEMPLATE.contains("{x}"));
        assert!(TILE_URL_TEMPLATE.contains("{y}"));
    }
}
