// SPDX-License-Identifier: MPL-2.0
//! Reusable view components.

pub mod position_panel;
pub mod status_panel;
