// SPDX-License-Identifier: MPL-2.0
//! Web Mercator projection between WGS84 coordinates and world pixels.
//!
//! World pixel space at zoom `z` is a square of `256 * 2^z` pixels with the
//! origin at the north-west corner, the convention shared by slippy-map tile
//! servers.

use crate::geo::LatLng;

/// Pixel edge length of one tile.
pub const TILE_SIZE: f64 = 256.0;

/// Latitude bound of the square Mercator world.
pub const MAX_LATITUDE: f64 = 85.051_128_78;

/// A position in world pixel space at some zoom level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldPixel {
    pub x: f64,
    pub y: f64,
}

/// Edge length of the world in pixels at `zoom`.
pub fn world_size(zoom: u8) -> f64 {
    TILE_SIZE * f64::from(1u32 << zoom)
}

/// Projects a coordinate into world pixel space at `zoom`. Latitudes beyond
/// the Mercator bound are clamped.
pub fn project(point: LatLng, zoom: u8) -> WorldPixel {
    let size = world_size(zoom);
    let lat = point.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE);
    let x = (point.lng + 180.0) / 360.0 * size;
    let sin = lat.to_radians().sin();
    let y = (0.5 - ((1.0 + sin) / (1.0 - sin)).ln() / (4.0 * std::f64::consts::PI)) * size;
    WorldPixel { x, y }
}

/// Inverse of [`project`].
pub fn unproject(pixel: WorldPixel, zoom: u8) -> LatLng {
    let size = world_size(zoom);
    let lng = pixel.x / size * 360.0 - 180.0;
    let n = std::f64::consts::PI * (1.0 - 2.0 * pixel.y / size);
    let lat = n.sinh().atan().to_degrees();
    LatLng::new(lat, lng)
}
