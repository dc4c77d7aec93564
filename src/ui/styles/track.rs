// SPDX-License-Identifier: MPL-2.0
//! Seek track layers: rail, buffered range and progress fill.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn bar(color: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Rail behind the bars; dimmed until the media is loaded.
pub fn rail(enabled: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let alpha = if enabled {
            opacity::OVERLAY_MEDIUM
        } else {
            opacity::OVERLAY_SUBTLE
        };
        bar(Color {
            a: alpha,
            ..palette::GRAY_200
        })
    }
}

#[must_use]
pub fn buffered(_theme: &Theme) -> container::Style {
    bar(Color {
        a: opacity::OVERLAY_STRONG,
        ..palette::GRAY_200
    })
}

#[must_use]
pub fn progress(_theme: &Theme) -> container::Style {
    bar(palette::ACCENT_500)
}
