// SPDX-License-Identifier: MPL-2.0
//! Canvas renderer for the map pane.
//!
//! Stands in for a raster tile engine: fills the viewport with the basemap
//! tint, draws the 256px tile grid the [`TileLayer`] addresses, then overlays
//! the breadcrumb polyline and the position marker. Dark mode re-derives the
//! tile tint instead of swapping tile sources, the same trick the widget this
//! replaces played with a CSS filter.

use super::mercator::{self, TILE_SIZE};
use super::MapState;
use crate::geo::LatLng;
use crate::ui::design_tokens::palette;
use iced::widget::canvas::{self, LineJoin, Stroke};
use iced::{mouse, Color, Point, Rectangle, Theme};

/// Path overlay styling (blue, width 4, 70% opacity, round joins).
const PATH_COLOR: Color = Color::from_rgb(0.231, 0.51, 0.965);
const PATH_OPACITY: f32 = 0.7;
const PATH_WIDTH: f32 = 4.0;

const MARKER_RADIUS: f32 = 8.0;

/// Basemap tints for the two themes.
const BASE_LIGHT: Color = Color::from_rgb(0.95, 0.94, 0.91);
const GRID_LIGHT: Color = Color::from_rgb(0.82, 0.8, 0.76);
const BASE_DARK: Color = Color::from_rgb(0.11, 0.13, 0.17);
const GRID_DARK: Color = Color::from_rgb(0.2, 0.23, 0.29);

/// Immediate renderer over borrowed [`MapState`].
#[derive(Debug)]
pub struct MapCanvas<'a> {
    map: &'a MapState,
    dark: bool,
}

impl<'a> MapCanvas<'a> {
    pub fn new(map: &'a MapState, dark: bool) -> Self {
        Self { map, dark }
    }

    /// Screen position of a coordinate, with the map center pinned to the
    /// middle of the viewport.
    fn to_screen(&self, point: LatLng, bounds: &Rectangle) -> Point {
        let center = mercator::project(self.map.center, self.map.zoom);
        let world = mercator::project(point, self.map.zoom);
        Point::new(
            (world.x - center.x) as f32 + bounds.width / 2.0,
            (world.y - center.y) as f32 + bounds.height / 2.0,
        )
    }
}

impl<Message> canvas::Program<Message> for MapCanvas<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let (base, grid) = if self.dark {
            (BASE_DARK, GRID_DARK)
        } else {
            (BASE_LIGHT, GRID_LIGHT)
        };

        let backdrop = canvas::Path::rectangle(Point::ORIGIN, bounds.size());
        frame.fill(&backdrop, base);

        // Tile grid, aligned to world pixel space so it scrolls with the view.
        let center = mercator::project(self.map.center, self.map.zoom);
        let left_world = center.x - f64::from(bounds.width) / 2.0;
        let top_world = center.y - f64::from(bounds.height) / 2.0;
        let grid_stroke = Stroke::default().with_color(grid).with_width(1.0);

        let mut wx = (left_world / TILE_SIZE).floor() * TILE_SIZE;
        while wx < left_world + f64::from(bounds.width) {
            let x = (wx - left_world) as f32;
            let line = canvas::Path::line(Point::new(x, 0.0), Point::new(x, bounds.height));
            frame.stroke(&line, grid_stroke);
            wx += TILE_SIZE;
        }
        let mut wy = (top_world / TILE_SIZE).floor() * TILE_SIZE;
        while wy < top_world + f64::from(bounds.height) {
            let y = (wy - top_world) as f32;
            let line = canvas::Path::line(Point::new(0.0, y), Point::new(bounds.width, y));
            frame.stroke(&line, grid_stroke);
            wy += TILE_SIZE;
        }

        // Breadcrumb path.
        for polyline in self.map.path.polylines() {
            if polyline.len() < 2 {
                continue;
            }
            let path = canvas::Path::new(|builder| {
                builder.move_to(self.to_screen(polyline[0], &bounds));
                for point in &polyline[1..] {
                    builder.line_to(self.to_screen(*point, &bounds));
                }
            });
            frame.stroke(
                &path,
                Stroke {
                    line_join: LineJoin::Round,
                    ..Stroke::default()
                        .with_color(Color {
                            a: PATH_OPACITY,
                            ..PATH_COLOR
                        })
                        .with_width(PATH_WIDTH)
                },
            );
        }

        // Position marker: filled dot with a contrasting ring.
        if let Some(marker) = self.map.marker {
            let at = self.to_screen(marker, &bounds);
            let dot = canvas::Path::circle(at, MARKER_RADIUS);
            frame.fill(&dot, palette::PRIMARY_600);
            frame.stroke(
                &dot,
                Stroke::default().with_color(palette::WHITE).with_width(2.0),
            );
        }

        vec![frame.into_geometry()]
    }
}

const _: () = {
    assert!(PATH_WIDTH > 0.0);
    assert!(MARKER_RADIUS > 0.0);
};
