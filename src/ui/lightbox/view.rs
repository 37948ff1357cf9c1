// SPDX-License-Identifier: MPL-2.0
//! Rendering of the lightbox overlay.

use super::surface::Surface;
use super::{Message, State, ViewLabel};
use crate::app::i18n::fluent::I18n;
use crate::media::{Entry, ImageStore};
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, opaque, Canvas, Container, Row, Space, Stack, Text};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub images: &'a ImageStore,
}

fn control<'a>(label: &'a str, message: Option<Message>) -> Element<'a, Message> {
    button(
        Text::new(label)
            .size(typography::TITLE_MD)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    )
    .width(Length::Fixed(sizing::LIGHTBOX_BUTTON))
    .height(Length::Fixed(sizing::LIGHTBOX_BUTTON))
    .on_press_maybe(message)
    .style(styles::button::overlay)
    .into()
}

fn indicator<'a>(content: String) -> Element<'a, Message> {
    Container::new(Text::new(content).size(typography::BODY_SM))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::overlay::indicator(radius::FULL))
        .into()
}

/// Builds the overlay when it is visible.
///
/// Returns `None` while the lightbox is closed so the caller can skip the
/// layer entirely. The overlay is opaque to the pointer: nothing below it
/// receives clicks or wheel events while it is shown.
pub fn overlay_view<'a>(ctx: ViewContext<'a>, state: &'a State) -> Option<Element<'a, Message>> {
    let overlay = state.overlay().filter(|overlay| overlay.is_visible())?;
    let location = overlay.image();
    let i18n = ctx.i18n;

    let surface: Element<'a, Message> = match ctx.images.get(location) {
        Some(Entry::Ready(data)) => Canvas::new(Surface {
            image: data,
            zoom: state.zoom(),
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into(),
        Some(Entry::Failed(_)) => centered(i18n.tr("lightbox-unavailable")),
        Some(Entry::Loading) | None => centered(i18n.tr("lightbox-loading")),
    };

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(
            Container::new(surface)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::XXL)
                .style(styles::overlay::lightbox),
        );

    let total = state.images().len();
    let current = (state.current_index() + 1).to_string();
    let total_text = total.to_string();
    let counter = if total > 0 {
        indicator(i18n.tr_with_args(
            "lightbox-position",
            &[("current", current.as_str()), ("total", total_text.as_str())],
        ))
    } else {
        Text::new("").into()
    };

    let top_bar = Row::new()
        .align_y(Vertical::Center)
        .push(counter)
        .push(Space::new().width(Length::Fill))
        .push(control("✕", Some(Message::Close)));
    stack = stack.push(
        Container::new(top_bar)
            .width(Length::Fill)
            .padding(spacing::MD)
            .align_y(Vertical::Top),
    );

    if total > 1 {
        let arrows = Row::new()
            .align_y(Vertical::Center)
            .push(control("◀", Some(Message::Previous)))
            .push(Space::new().width(Length::Fill))
            .push(control("▶", Some(Message::Next)));
        stack = stack.push(
            Container::new(arrows)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::MD)
                .align_y(Vertical::Center),
        );
    }

    let scale = state.zoom().scale;
    let caption = ViewLabel::from_location(location);
    let zoom_label = i18n.tr_with_args(
        "lightbox-zoom-level",
        &[("percent", scale.as_percent().to_string().as_str())],
    );
    let bottom_bar = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(indicator(i18n.tr(caption.i18n_key())))
        .push(Space::new().width(Length::Fill))
        .push(indicator(zoom_label))
        .push(control(
            "−",
            (!scale.is_min()).then_some(Message::ZoomOut),
        ))
        .push(control(
            "+",
            (!scale.is_max()).then_some(Message::ZoomIn),
        ))
        .push(
            button(Text::new(i18n.tr("lightbox-zoom-reset")).size(typography::BODY_SM))
                .padding([spacing::XS, spacing::SM])
                .on_press_maybe((!state.zoom().is_identity()).then_some(Message::ResetZoom))
                .style(styles::button::overlay),
        );
    stack = stack.push(
        Container::new(bottom_bar)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::MD)
            .align_y(Vertical::Bottom),
    );

    Some(opaque(stack))
}

fn centered<'a>(label: String) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::BODY_LG))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}
