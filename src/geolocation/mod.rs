// SPDX-License-Identifier: MPL-2.0
//! The position-source seam.
//!
//! The app only ever talks to a [`GeolocationProvider`]: a capability that can
//! report whether it is available and, when asked, produce a continuous stream
//! of fixes. At most one watch is active at a time; each start is tagged with
//! a fresh [`WatchId`] so updates from a cancelled watch can be dropped.

use crate::config::defaults;
use crate::error::GeolocationError;
use crate::geo::PositionSample;
use futures_util::stream::BoxStream;

pub mod simulated;

pub use simulated::SimulatedProvider;

/// Options passed when subscribing to the position stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchOptions {
    pub high_accuracy: bool,
    /// Maximum acceptable age of a cached fix, in milliseconds.
    pub max_cache_age_ms: u64,
    /// How long to wait for a fix before failing, in milliseconds.
    pub timeout_ms: u64,
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self {
            high_accuracy: defaults::WATCH_HIGH_ACCURACY,
            max_cache_age_ms: defaults::WATCH_MAX_CACHE_AGE_MS,
            timeout_ms: defaults::WATCH_TIMEOUT_MS,
        }
    }
}

/// Identifies one watch session. A new id is minted on every tracking start,
/// so a position update can prove it belongs to the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WatchId(pub u64);

/// Items produced by a watch stream.
pub type WatchItem = std::result::Result<PositionSample, GeolocationError>;

/// The stream a provider hands back on subscribe. Cancellation is dropping it.
pub type WatchStream = BoxStream<'static, WatchItem>;

/// A source of position fixes.
pub trait GeolocationProvider: Send + Sync {
    /// Whether this environment can produce fixes at all. Checked before
    /// subscribing; when false, tracking fails immediately without a watch.
    fn available(&self) -> bool;

    /// Subscribes to a continuous stream of fixes. The stream must be lazy:
    /// no work happens until it is polled.
    fn watch(&self, options: WatchOptions) -> WatchStream;
}

/// Provider for environments without any position source.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableProvider;

impl GeolocationProvider for UnavailableProvider {
    fn available(&self) -> bool {
        false
    }

    fn watch(&self, _options: WatchOptions) -> WatchStream {
        // Subscribing anyway yields the capability error once.
        let failure: WatchItem = Err(GeolocationError::Unsupported);
        Box::pin(futures_util::stream::iter([failure]))
    }
}
