// SPDX-License-Identifier: MPL-2.0
//! Map pane state: view, tile-layer descriptor, marker, and path overlay.
//!
//! The pane does not download tiles; the [`TileLayer`] records the template
//! and attribution of the basemap being stood in for, and the widget renders
//! a schematic grid in its place. Marker and path follow the usual lazy
//! lifecycle: created on first fix, mutated in place afterwards.

use crate::config::defaults;
use crate::geo::LatLng;

pub mod mercator;
pub mod widget;

/// Descriptor of the raster basemap: URL template, attribution, zoom ceiling.
#[derive(Debug, Clone, PartialEq)]
pub struct TileLayer {
    pub url_template: String,
    pub attribution: String,
    pub max_zoom: u8,
}

impl TileLayer {
    /// Resolves the template for one tile address.
    pub fn tile_url(&self, zoom: u8, x: u32, y: u32) -> String {
        self.url_template
            .replace("{s}", "a")
            .replace("{z}", &zoom.to_string())
            .replace("{x}", &x.to_string())
            .replace("{y}", &y.to_string())
    }
}

impl Default for TileLayer {
    fn default() -> Self {
        Self {
            url_template: defaults::TILE_URL_TEMPLATE.to_string(),
            attribution: defaults::TILE_ATTRIBUTION.to_string(),
            max_zoom: defaults::MAX_TILE_ZOOM,
        }
    }
}

/// Feature-group analogue holding the path overlay: a set of polylines that
/// is cleared and redrawn wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathLayer {
    polylines: Vec<Vec<LatLng>>,
}

impl PathLayer {
    pub fn clear(&mut self) {
        self.polylines.clear();
    }

    pub fn add_polyline(&mut self, points: Vec<LatLng>) {
        self.polylines.push(points);
    }

    pub fn polylines(&self) -> &[Vec<LatLng>] {
        &self.polylines
    }

    pub fn is_empty(&self) -> bool {
        self.polylines.is_empty()
    }
}

/// Everything the map pane needs to draw itself.
#[derive(Debug, Clone, PartialEq)]
pub struct MapState {
    pub center: LatLng,
    pub zoom: u8,
    pub tile_layer: TileLayer,
    pub marker: Option<LatLng>,
    pub path: PathLayer,
}

impl MapState {
    /// World view with the default basemap and an empty path overlay.
    pub fn new() -> Self {
        Self {
            center: LatLng::new(defaults::DEFAULT_MAP_CENTER.0, defaults::DEFAULT_MAP_CENTER.1),
            zoom: defaults::DEFAULT_MAP_ZOOM,
            tile_layer: TileLayer::default(),
            marker: None,
            path: PathLayer::default(),
        }
    }

    pub fn set_view(&mut self, center: LatLng, zoom: u8) {
        self.center = center;
        self.zoom = zoom.min(self.tile_layer.max_zoom);
    }

    /// Creates the marker on the first call, moves it afterwards.
    pub fn place_marker(&mut self, point: LatLng) {
        self.marker = Some(point);
    }

    /// Full redraw of the path overlay: clear, then one polyline through all
    /// points. A history of fewer than two points only clears.
    pub fn redraw_path(&mut self, history: &[LatLng]) {
        if history.len() > 1 {
            self.path.clear();
            self.path.add_polyline(history.to_vec());
        }
    }
}

impl Default for MapState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_map_is_world_view_with_empty_overlays() {
        let map = MapState::new();
        assert_eq!(map.center, LatLng::new(20.0, 0.0));
        assert_eq!(map.zoom, 2);
        assert!(map.marker.is_none());
        assert!(map.path.is_empty());
    }

    #[test]
    fn set_view_clamps_to_tile_layer_max_zoom() {
        let mut map = MapState::new();
        map.set_view(LatLng::new(10.0, 12.0), 25);
        assert_eq!(map.zoom, defaults::MAX_TILE_ZOOM);
        assert_eq!(map.center, LatLng::new(10.0, 12.0));
    }

    #[test]
    fn marker_is_created_then_moved() {
        let mut map = MapState::new();
        map.place_marker(LatLng::new(1.0, 2.0));
        assert_eq!(map.marker, Some(LatLng::new(1.0, 2.0)));
        map.place_marker(LatLng::new(3.0, 4.0));
        assert_eq!(map.marker, Some(LatLng::new(3.0, 4.0)));
    }

    #[test]
    fn redraw_builds_exactly_one_polyline() {
        let mut map = MapState::new();
        let history = vec![
            LatLng::new(10.0, 10.0),
            LatLng::new(10.0, 11.0),
            LatLng::new(10.0, 12.0),
        ];
        map.redraw_path(&history);
        map.redraw_path(&history);
        assert_eq!(map.path.polylines().len(), 1);
        assert_eq!(map.path.polylines()[0], history);
    }

    #[test]
    fn single_point_history_draws_nothing() {
        let mut map = MapState::new();
        map.redraw_path(&[LatLng::new(10.0, 10.0)]);
        assert!(map.path.is_empty());
    }

    #[test]
    fn tile_url_substitutes_address() {
        let layer = TileLayer::default();
        assert_eq!(
            layer.tile_url(2, 1, 3),
            "https://a.tile.openstreetmap.org/2/1/3.png"
        );
    }
}
