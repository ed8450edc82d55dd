// SPDX-License-Identifier: MPL-2.0
//! Deterministic simulated position source.
//!
//! Walks an outward spiral around a start point, one fix per interval. The
//! path is a pure function of the step index, so tests can assert exact
//! trajectories and the demo produces a recognizable breadcrumb trail.

use super::{GeolocationProvider, WatchOptions, WatchStream};
use crate::config::defaults;
use crate::geo::{LatLng, PositionSample};
use futures_util::StreamExt;
use std::time::Duration;

/// Degrees of spiral radius gained per step.
const RADIUS_STEP_DEG: f64 = 0.0002;

/// Angular advance per step, in radians.
const ANGLE_STEP_RAD: f64 = 0.35;

#[derive(Debug, Clone, Copy)]
pub struct SimulatedProvider {
    start: LatLng,
    interval_ms: u64,
}

impl SimulatedProvider {
    pub fn new(start: LatLng, interval_ms: u64) -> Self {
        Self { start, interval_ms }
    }

    /// Coordinate of the walk at `step` (step 0 is the start point).
    fn point_at(&self, step: u64) -> LatLng {
        let r = RADIUS_STEP_DEG * step as f64;
        let theta = ANGLE_STEP_RAD * step as f64;
        LatLng::new(
            self.start.lat + r * theta.cos(),
            self.start.lng + r * theta.sin(),
        )
    }

    /// Builds the fix for `step`, deriving heading and speed from the
    /// displacement since the previous step. Step 0 has neither.
    fn sample_at(&self, step: u64, timestamp_ms: i64) -> PositionSample {
        let here = self.point_at(step);
        let (heading, speed) = if step == 0 {
            (None, None)
        } else {
            let prev = self.point_at(step - 1);
            (
                Some(bearing_deg(prev, here)),
                Some(ground_speed_mps(prev, here, self.interval_ms)),
            )
        };

        PositionSample {
            latitude: here.lat,
            longitude: here.lng,
            // Accuracy wobbles deterministically between 8 and 16 meters.
            accuracy: 8.0 + 2.0 * ((step % 5) as f64),
            heading,
            speed,
            timestamp_ms,
        }
    }
}

impl Default for SimulatedProvider {
    fn default() -> Self {
        Self::new(
            LatLng::new(defaults::DEFAULT_MAP_CENTER.0, defaults::DEFAULT_MAP_CENTER.1),
            defaults::DEFAULT_SIMULATED_INTERVAL_MS,
        )
    }
}

impl GeolocationProvider for SimulatedProvider {
    fn available(&self) -> bool {
        true
    }

    fn watch(&self, _options: WatchOptions) -> WatchStream {
        let provider = *self;
        let interval = Duration::from_millis(provider.interval_ms.max(1));
        futures_util::stream::unfold(0u64, move |step| async move {
            tokio::time::sleep(interval).await;
            let now = chrono::Utc::now().timestamp_millis();
            Some((Ok(provider.sample_at(step, now)), step + 1))
        })
        .boxed()
    }
}

/// Initial bearing from `from` to `to`, degrees clockwise from north in [0, 360).
fn bearing_deg(from: LatLng, to: LatLng) -> f64 {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let dlng = (to.lng - from.lng).to_radians();
    let y = dlng.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlng.cos();
    (y.atan2(x).to_degrees() + 360.0) % 360.0
}

/// Equirectangular ground speed in m/s over one interval.
fn ground_speed_mps(from: LatLng, to: LatLng, interval_ms: u64) -> f64 {
    const EARTH_RADIUS_M: f64 = 6_371_000.0;
    let dlat = (to.lat - from.lat).to_radians();
    let dlng = (to.lng - from.lng).to_radians() * from.lat.to_radians().cos();
    let meters = (dlat * dlat + dlng * dlng).sqrt() * EARTH_RADIUS_M;
    meters / (interval_ms.max(1) as f64 / 1000.0)
}
