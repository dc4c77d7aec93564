// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::ui::controls;
use crate::ui::Surface;
use iced::widget::Container;
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub surface: &'a Surface,
    pub title: &'a str,
    pub presets: &'a [f64],
}

/// Renders the player filling the whole window.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let player = controls::view(ctx.surface, ctx.title, ctx.presets).map(Message::Ui);

    Container::new(player)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
