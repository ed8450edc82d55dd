// SPDX-License-Identifier: MPL-2.0
//! Transient status panel: loading, confirmation, and error messages.

use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{text, Column, Text};
use iced::{Color, Element, Theme};

/// Coloring applied to the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn color(self) -> Color {
        match self {
            Severity::Info => palette::INFO_500,
            Severity::Success => palette::SUCCESS_500,
            Severity::Error => palette::ERROR_500,
        }
    }
}

/// Renders a status message, with an optional secondary hint line.
pub fn view<'a, Message: 'a>(
    severity: Severity,
    message: &str,
    hint: Option<&str>,
) -> Element<'a, Message> {
    let accent = severity.color();
    let mut column = Column::new().spacing(spacing::XXS).push(
        Text::new(message.to_string())
            .size(typography::BODY_LG)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent),
            }),
    );

    if let Some(hint) = hint {
        column = column.push(
            Text::new(hint.to_string())
                .size(typography::BODY)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().secondary.base.text),
                }),
        );
    }

    column.into()
}
