// SPDX-License-Identifier: MPL-2.0
//! Player skin widgets.
//!
//! Layers, bottom to top: the video area with its three touch zones, the
//! centered play overlay, the skip indicators, the title bar and the control
//! bar (hover tooltip, seek track, buttons, speed menu).

use super::design_tokens::{radius, sizing, spacing, typography};
use super::styles;
use super::surface::Surface;
use crate::controls::playback_speed::{format_rate, is_normal};
use crate::controls::{SkipDirection, TouchZone, VolumeIcon};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    button, column, container, mouse_area, responsive, row, slider, text, Column, Row, Space,
    Stack,
};
use iced::{Element, Length, Size};

const VOLUME_SLIDER_STEP: f64 = 0.01;

/// Messages emitted by the skin widgets.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    PlayClicked,
    SkipClicked(SkipDirection),
    Touch(TouchZone),
    MuteClicked,
    VolumeChanged(f64),
    SpeedButtonClicked,
    SpeedSelected(f64),
    FullscreenClicked,
    PictureInPictureClicked,
    TrackPressed,
    TrackReleased,
    /// Pointer position over the track, relative to its left edge.
    TrackMoved { x: f32, width: f32 },
    TrackEntered,
    TrackExited,
    ControlsEntered,
    ControlsExited,
}

#[must_use]
pub fn play_glyph(playing: bool) -> &'static str {
    if playing {
        "⏸"
    } else {
        "▶"
    }
}

#[must_use]
pub fn volume_glyph(icon: VolumeIcon) -> &'static str {
    match icon {
        VolumeIcon::Muted => "🔇",
        VolumeIcon::Low => "🔉",
        VolumeIcon::High => "🔊",
    }
}

#[must_use]
pub fn fullscreen_glyph(active: bool) -> &'static str {
    if active {
        "🗗"
    } else {
        "⛶"
    }
}

/// Text of a skip indicator, e.g. `-20s` or `+10s`.
#[must_use]
pub fn skip_label(direction: SkipDirection, seconds: f64) -> String {
    let sign = match direction {
        SkipDirection::Rewind => '-',
        SkipDirection::Forward => '+',
    };
    format!("{sign}{seconds:.0}s")
}

/// Label of a speed menu entry; the 1x preset reads `Normal`.
#[must_use]
pub fn preset_label(rate: f64) -> String {
    if is_normal(rate) {
        "Normal".to_string()
    } else {
        format_rate(rate)
    }
}

/// Renders the whole player.
pub fn view<'a>(surface: &'a Surface, title: &'a str, presets: &'a [f64]) -> Element<'a, Message> {
    let video = container(touch_zones())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::overlay::video_area);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(video);

    if surface.play_overlay_visible() {
        let play = button(text(play_glyph(false)).size(typography::TITLE_LG))
            .on_press(Message::PlayClicked)
            .padding(spacing::MD)
            .style(styles::button::play_overlay);
        layers = layers.push(
            container(play)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        );
    }

    layers = layers.push(skip_indicators(surface));

    if surface.title_bar_visible() {
        layers = layers.push(title_bar(title));
    }

    if surface.controls_visible {
        layers = layers.push(
            container(controls_region(surface, presets))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_y(Vertical::Bottom),
        );
    }

    layers.into()
}

fn touch_zones<'a>() -> Element<'a, Message> {
    let zone = |zone: TouchZone| {
        mouse_area(
            container(Space::new())
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .on_press(Message::Touch(zone))
    };

    row![
        zone(TouchZone::Left),
        zone(TouchZone::Center),
        zone(TouchZone::Right)
    ]
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn skip_indicator<'a>(direction: SkipDirection, seconds: Option<f64>) -> Element<'a, Message> {
    match seconds {
        Some(seconds) => container(text(skip_label(direction, seconds)).size(typography::TITLE_LG))
            .padding(spacing::SM)
            .style(styles::overlay::indicator(radius::MD))
            .into(),
        None => Space::new().into(),
    }
}

fn skip_indicators(surface: &Surface) -> Element<'_, Message> {
    container(
        row![
            skip_indicator(SkipDirection::Rewind, surface.rewind_indicator),
            Space::new().width(Length::Fill),
            skip_indicator(SkipDirection::Forward, surface.forward_indicator),
        ]
        .align_y(Vertical::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::LG)
    .align_y(Vertical::Center)
    .into()
}

fn title_bar(title: &str) -> Element<'_, Message> {
    container(
        container(text(title).size(typography::HEADING))
            .width(Length::Fill)
            .padding(spacing::SM)
            .style(styles::overlay::controls_bar),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_y(Vertical::Top)
    .into()
}

fn controls_region<'a>(surface: &'a Surface, presets: &'a [f64]) -> Element<'a, Message> {
    let mut region = Column::new().width(Length::Fill);

    if surface.speed_menu_open {
        region = region.push(
            container(speed_menu(surface, presets))
                .width(Length::Fill)
                .padding(spacing::XS)
                .align_x(Horizontal::Right),
        );
    }

    let bar = column![hover_tooltip(surface), seek_track(surface), button_row(surface)]
        .spacing(spacing::XXS)
        .padding(spacing::XS);

    region = region.push(
        container(bar)
            .width(Length::Fill)
            .style(styles::overlay::controls_bar),
    );

    mouse_area(region)
        .on_enter(Message::ControlsEntered)
        .on_exit(Message::ControlsExited)
        .into()
}

fn hover_tooltip(surface: &Surface) -> Element<'_, Message> {
    if !surface.hover.visible {
        return Space::new()
            .height(Length::Fixed(typography::CAPTION + spacing::XS))
            .into();
    }
    let lead = (surface.hover.offset - sizing::HOVER_TIME_WIDTH / 2.0).max(0.0);
    row![
        Space::new().width(Length::Fixed(lead)),
        container(text(surface.hover.text.as_str()).size(typography::CAPTION))
            .width(Length::Fixed(sizing::HOVER_TIME_WIDTH))
            .align_x(Horizontal::Center)
            .style(styles::overlay::indicator(radius::SM)),
    ]
    .height(Length::Fixed(typography::CAPTION + spacing::XS))
    .into()
}

fn seek_track(surface: &Surface) -> Element<'_, Message> {
    let enabled = surface.track_enabled;
    let progress = surface.progress_percent;
    let buffered = surface.buffer_percent;

    let track = responsive(move |size: Size| {
        let width = size.width;
        let span = move |percent: f64| (width * (percent / 100.0) as f32).clamp(0.0, width);
        let bar = |w: Length| container(Space::new()).width(w).height(Length::Fill);

        let layers = Stack::new()
            .width(Length::Fill)
            .height(Length::Fixed(sizing::TRACK_HEIGHT))
            .push(bar(Length::Fill).style(styles::track::rail(enabled)))
            .push(bar(Length::Fixed(span(buffered))).style(styles::track::buffered))
            .push(bar(Length::Fixed(span(progress))).style(styles::track::progress));

        let hit_area = container(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_y(Vertical::Center);

        mouse_area(hit_area)
            .on_press(Message::TrackPressed)
            .on_release(Message::TrackReleased)
            .on_move(move |point| Message::TrackMoved { x: point.x, width })
            .on_enter(Message::TrackEntered)
            .on_exit(Message::TrackExited)
            .into()
    });

    container(track)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::TRACK_HIT_HEIGHT))
        .into()
}

fn control_button<'a>(label: &'a str, message: Message) -> Element<'a, Message> {
    button(text(label).size(typography::BODY))
        .on_press(message)
        .padding(spacing::XS)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(styles::button::control)
        .into()
}

fn button_row(surface: &Surface) -> Element<'_, Message> {
    let volume = slider(0.0..=1.0, surface.volume, Message::VolumeChanged)
        .step(VOLUME_SLIDER_STEP)
        .width(Length::Fixed(sizing::VOLUME_SLIDER_WIDTH));

    let speed = button(text(surface.speed_label()).size(typography::BODY))
        .on_press(Message::SpeedButtonClicked)
        .padding(spacing::XS)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(styles::button::control);

    let controls: Row<'_, Message> = row![
        control_button(play_glyph(surface.playing), Message::PlayClicked),
        control_button("⏪", Message::SkipClicked(SkipDirection::Rewind)),
        control_button("⏩", Message::SkipClicked(SkipDirection::Forward)),
        control_button(volume_glyph(surface.volume_icon), Message::MuteClicked),
        volume,
        text(surface.time_display.as_str()).size(typography::BODY),
        Space::new().width(Length::Fill),
        speed,
        control_button("⧉", Message::PictureInPictureClicked),
        control_button(fullscreen_glyph(surface.fullscreen), Message::FullscreenClicked),
    ]
    .spacing(spacing::XS)
    .align_y(Vertical::Center);

    controls.into()
}

fn speed_menu<'a>(surface: &Surface, presets: &'a [f64]) -> Element<'a, Message> {
    let active = surface.active_speed;
    let entries = presets.iter().rev().map(|&rate| {
        button(text(preset_label(rate)).size(typography::BODY))
            .on_press(Message::SpeedSelected(rate))
            .width(Length::Fill)
            .padding(spacing::XXS)
            .style(styles::button::speed_preset(
                (rate - active).abs() < f64::EPSILON,
            ))
            .into()
    });

    container(Column::with_children(entries).spacing(spacing::XXS))
        .width(Length::Fixed(sizing::SPEED_MENU_WIDTH))
        .padding(spacing::XXS)
        .style(styles::overlay::speed_menu)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_labels_carry_direction() {
        assert_eq!(skip_label(SkipDirection::Rewind, 20.0), "-20s");
        assert_eq!(skip_label(SkipDirection::Forward, 10.0), "+10s");
    }

    #[test]
    fn glyphs_follow_state() {
        assert_ne!(play_glyph(true), play_glyph(false));
        assert_ne!(fullscreen_glyph(true), fullscreen_glyph(false));
        assert_eq!(volume_glyph(VolumeIcon::Muted), "🔇");
    }

    #[test]
    fn normal_preset_is_named() {
        assert_eq!(preset_label(1.0), "Normal");
        assert_eq!(preset_label(1.5), "1.5x");
        assert_eq!(preset_label(0.25), "0.25x");
    }

    #[test]
    fn view_builds_for_every_overlay_state() {
        let presets = [0.5, 1.0, 2.0];
        let mut surface = Surface::default();
        let _ = view(&surface, "clip", &presets);

        surface.speed_menu_open = true;
        surface.hover.visible = true;
        surface.rewind_indicator = Some(10.0);
        surface.playing = true;
        surface.track_enabled = true;
        let _ = view(&surface, "clip", &presets);

        surface.controls_visible = false;
        let _ = view(&surface, "clip", &presets);
    }
}
