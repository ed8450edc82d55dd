// SPDX-License-Identifier: MPL-2.0
//! Text panel for the latest fix, plus the copy-coordinates button.

use crate::geo::PositionSample;
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{button, text, Column, Text};
use iced::{Element, Theme};

/// The textual lines of the panel, in render order. Heading and speed are
/// omitted when the sample reports them absent-or-zero.
pub fn coordinate_lines(sample: &PositionSample) -> Vec<String> {
    let mut lines = vec![
        format!("Latitude: {:.6}", sample.latitude),
        format!("Longitude: {:.6}", sample.longitude),
        format!("Accuracy: ±{} meters", sample.accuracy.round() as i64),
    ];
    if let Some(heading) = sample.heading_for_display() {
        lines.push(format!("Heading: {}°", heading.round() as i64));
    }
    if let Some(kmh) = sample.speed_kmh() {
        lines.push(format!("Speed: {:.1} km/h", kmh));
    }
    lines
}

/// Renders the panel. `copied` swaps the copy button into its transient
/// "Copied!" state.
pub fn view<'a, Message: Clone + 'a>(
    sample: &PositionSample,
    copied: bool,
    on_copy: Message,
) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::XS);

    for line in coordinate_lines(sample) {
        column = column.push(
            Text::new(line)
                .size(typography::BODY_LG)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::SUCCESS_500),
                }),
        );
    }

    column = column.push(
        Text::new(format!("Updated at: {}", sample.local_time()))
            .size(typography::CAPTION)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().secondary.base.text),
            }),
    );

    let copy_label = if copied { "Copied!" } else { "Copy Coordinates" };
    column = column.push(
        button(Text::new(copy_label).size(typography::BODY))
            .on_press(on_copy)
            .padding(spacing::XS),
    );

    column.into()
}
