// SPDX-License-Identifier: MPL-2.0
//! UI building blocks: design tokens, theming, and view components.

pub mod components;
pub mod design_tokens;
pub mod theming;
