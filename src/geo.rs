// SPDX-License-Identifier: MPL-2.0
//! Geographic domain types: coordinates and position fixes.

use chrono::{Local, TimeZone};

/// A WGS84 coordinate pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<(f64, f64)> for LatLng {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

/// One fix from the position stream. Immutable once received.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionSample {
    pub latitude: f64,
    pub longitude: f64,
    /// Estimated accuracy radius in meters.
    pub accuracy: f64,
    /// Direction of travel in degrees clockwise from true north, if known.
    pub heading: Option<f64>,
    /// Ground speed in meters per second, if known.
    pub speed: Option<f64>,
    /// Unix timestamp of the fix in milliseconds.
    pub timestamp_ms: i64,
}

impl PositionSample {
    pub fn latlng(&self) -> LatLng {
        LatLng::new(self.latitude, self.longitude)
    }

    /// Heading as shown in the panel. A heading of exactly 0 is treated as
    /// absent, matching the falsy check this display logic was specified
    /// with; a genuine due-north heading is therefore not shown.
    pub fn heading_for_display(&self) -> Option<f64> {
        self.heading.filter(|h| *h != 0.0)
    }

    /// Speed as shown in the panel, same zero-is-absent rule as
    /// [`heading_for_display`](Self::heading_for_display).
    pub fn speed_for_display(&self) -> Option<f64> {
        self.speed.filter(|s| *s != 0.0)
    }

    /// Speed converted from m/s to km/h.
    pub fn speed_kmh(&self) -> Option<f64> {
        self.speed_for_display().map(|s| s * 3.6)
    }

    /// The exact string placed on the clipboard: raw values, comma-space.
    pub fn clipboard_text(&self) -> String {
        format!("{}, {}", self.latitude, self.longitude)
    }

    /// Local wall-clock time of the fix, e.g. `14:03:27`.
    pub fn local_time(&self) -> String {
        match Local.timestamp_millis_opt(self.timestamp_ms).single() {
            Some(t) => t.format("%H:%M:%S").to_string(),
            None => String::from("--:--:--"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PositionSample {
        PositionSample {
            latitude: 48.858844,
            longitude: 2.294351,
            accuracy: 12.4,
            heading: Some(90.0),
            speed: Some(1.5),
            timestamp_ms: 1_700_000_000_000,
        }
    }

    #[test]
    fn clipboard_text_is_raw_comma_space() {
        let s = PositionSample {
            latitude: 10.5,
            longitude: -0.25,
            ..sample()
        };
        assert_eq!(s.clipboard_text(), "10.5, -0.25");
    }

    #[test]
    fn heading_zero_is_treated_as_absent() {
        let s = PositionSample {
            heading: Some(0.0),
            ..sample()
        };
        assert_eq!(s.heading_for_display(), None);
    }

    #[test]
    fn heading_none_is_absent() {
        let s = PositionSample {
            heading: None,
            ..sample()
        };
        assert_eq!(s.heading_for_display(), None);
    }

    #[test]
    fn nonzero_heading_is_shown() {
        assert_eq!(sample().heading_for_display(), Some(90.0));
    }

    #[test]
    fn speed_zero_is_treated_as_absent() {
        let s = PositionSample {
            speed: Some(0.0),
            ..sample()
        };
        assert_eq!(s.speed_for_display(), None);
        assert_eq!(s.speed_kmh(), None);
    }

    #[test]
    fn speed_is_converted_to_kmh() {
        let kmh = sample().speed_kmh().expect("speed should be present");
        assert!((kmh - 5.4).abs() < 1e-9);
    }

    #[test]
    fn latlng_from_tuple() {
        let p: LatLng = (10.0, 11.0).into();
        assert_eq!(p, LatLng::new(10.0, 11.0));
    }

    #[test]
    fn local_time_handles_invalid_timestamp() {
        let s = PositionSample {
            timestamp_ms: i64::MAX,
            ..sample()
        };
        assert_eq!(s.local_time(), "--:--:--");
    }
}
