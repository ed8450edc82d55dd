// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::{App, Message, Panel};
use crate::map::widget::MapCanvas;
use crate::ui::components::{position_panel, status_panel};
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{button, canvas, space, text, Column, Container, Row, Text};
use iced::{Element, Length, Theme};

pub fn view(app: &App) -> Element<'_, Message> {
    let header = Row::new()
        .align_y(iced::Alignment::Center)
        .push(Text::new("IcedTrack").size(typography::TITLE_MD))
        .push(space::horizontal())
        .push(
            button(Text::new(app.theme.toggle_glyph()).size(typography::BODY_LG))
                .on_press(Message::ThemeToggled)
                .padding(spacing::XS),
        );

    let panel: Element<'_, Message> = match &app.panel {
        Panel::Idle => status_panel::view(
            status_panel::Severity::Info,
            "Press the button to start tracking your location.",
            None,
        ),
        Panel::Loading(message) => status_panel::view(status_panel::Severity::Info, message, None),
        Panel::Fix(sample) => position_panel::view(sample, app.copied, Message::CopyCoordinates),
        Panel::Stopped => {
            status_panel::view(status_panel::Severity::Success, "Tracking stopped", None)
        }
        Panel::Error(message) => status_panel::view(
            status_panel::Severity::Error,
            message,
            Some("Please ensure you've granted location permissions and try again."),
        ),
    };

    let tracking_label = if app.watch.is_some() {
        "✋ Stop Tracking"
    } else {
        "📍 Get My Location"
    };
    let mut tracking_button = button(Text::new(tracking_label).size(typography::BODY))
        .padding([spacing::XS, spacing::MD]);
    if !app.button_disabled {
        tracking_button = tracking_button.on_press(Message::TrackingToggled);
    }

    let mut content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(header)
        .push(panel)
        .push(tracking_button);

    if app.map_visible {
        content = content
            .push(
                canvas::Canvas::new(MapCanvas::new(&app.map, app.theme.is_dark()))
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .push(
                Text::new(app.map.tile_layer.attribution.clone())
                    .size(typography::CAPTION)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.extended_palette().secondary.base.text),
                    }),
            );
    }

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
