// SPDX-License-Identifier: MPL-2.0
//! `iced_track` is a small live-location widget built with the Iced GUI framework.
//!
//! It watches a position source, shows each fix as text, and plots a marker
//! and breadcrumb path on a schematic map pane. A light/dark theme is
//! persisted across sessions and otherwise follows the system preference.

pub mod app;
pub mod config;
pub mod error;
pub mod geo;
pub mod geolocation;
pub mod map;
pub mod ui;
