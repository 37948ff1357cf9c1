// SPDX-License-Identifier: MPL-2.0
//! Navigation bar built from the loaded navbar fragment.
//!
//! The bar always carries the built-in controls (title, search, theme
//! toggle, open catalog). Fragment links are shown inline in wide windows;
//! below the mobile breakpoint they move into a drawer opened by the
//! hamburger button.

use crate::app::i18n::fluent::I18n;
use crate::catalog::NavLink;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::scroll::Anchor;
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, mouse_area, Column, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub title: String,
    pub links: &'a [NavLink],
    pub menu_open: bool,
    /// Window narrower than the mobile breakpoint.
    pub compact: bool,
    pub theme_mode: ThemeMode,
}

#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    Navigate(Anchor),
    OpenSearch,
    ToggleTheme,
    OpenCatalog,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(Anchor),
    OpenSearch,
    ToggleTheme,
    OpenCatalog,
}

/// Applies a navbar message to the drawer state and returns what the
/// application must do. Every action closes the drawer.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::CloseMenu => {
            *menu_open = false;
            Event::None
        }
        Message::Navigate(anchor) => {
            *menu_open = false;
            Event::Navigate(anchor)
        }
        Message::OpenSearch => {
            *menu_open = false;
            Event::OpenSearch
        }
        Message::ToggleTheme => {
            *menu_open = false;
            Event::ToggleTheme
        }
        Message::OpenCatalog => {
            *menu_open = false;
            Event::OpenCatalog
        }
    }
}

/// Glyph of the hamburger button for the drawer state.
#[must_use]
pub fn menu_glyph(menu_open: bool) -> &'static str {
    if menu_open {
        "✕"
    } else {
        "☰"
    }
}

fn link_button<'a>(link: &'a NavLink) -> Element<'a, Message> {
    let target = Anchor::parse(&link.anchor);
    if target.is_none() {
        tracing::trace!(anchor = %link.anchor, "navbar link has no known target");
    }
    button(Text::new(link.label.as_str()).size(typography::BODY))
        .padding([spacing::XXS, spacing::XS])
        .on_press_maybe(target.map(Message::Navigate))
        .style(styles::button::link)
        .into()
}

fn icon_button<'a>(glyph: &'a str, message: Message) -> Element<'a, Message> {
    button(
        Text::new(glyph)
            .size(typography::TITLE_SM)
            .align_x(Horizontal::Center),
    )
    .padding([spacing::XXS, spacing::XS])
    .on_press(message)
    .style(styles::button::ghost)
    .into()
}

/// Render the bar itself.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::SM)
        .padding([spacing::XS, spacing::MD])
        .align_y(Vertical::Center);

    if ctx.compact {
        row = row.push(icon_button(menu_glyph(ctx.menu_open), Message::ToggleMenu));
    }

    row = row.push(
        button(Text::new(ctx.title).size(typography::TITLE_MD))
            .padding(0.0)
            .on_press(Message::Navigate(Anchor::Top))
            .style(styles::button::link),
    );
    row = row.push(Space::new().width(Length::Fill));

    if !ctx.compact {
        row = ctx
            .links
            .iter()
            .fold(row, |row, link| row.push(link_button(link)));
    }

    row = row
        .push(icon_button("⌕", Message::OpenSearch))
        .push(icon_button(
            ctx.theme_mode.toggle_glyph(),
            Message::ToggleTheme,
        ))
        .push(
            button(Text::new(ctx.i18n.tr("navbar-open-catalog")).size(typography::BODY_SM))
                .padding([spacing::XXS, spacing::SM])
                .on_press(Message::OpenCatalog)
                .style(styles::button::primary),
        );

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .align_y(Vertical::Center)
        .style(styles::container::navbar)
        .into()
}

/// Render the mobile drawer over a dimming backdrop, when it is open.
pub fn drawer<'a>(ctx: ViewContext<'a>) -> Option<Element<'a, Message>> {
    if !(ctx.compact && ctx.menu_open) {
        return None;
    }

    let header = Row::new()
        .align_y(Vertical::Center)
        .push(Text::new(ctx.title).size(typography::TITLE_SM))
        .push(Space::new().width(Length::Fill))
        .push(icon_button("✕", Message::CloseMenu));

    let links = ctx
        .links
        .iter()
        .fold(Column::new().spacing(spacing::XS), |column, link| {
            column.push(link_button(link))
        });

    let panel = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(header)
            .push(links)
            .push(
                button(Text::new(ctx.i18n.tr("navbar-search")).size(typography::BODY))
                    .on_press(Message::OpenSearch)
                    .style(styles::button::link),
            ),
    )
    .width(Length::Fixed(sizing::DRAWER_WIDTH))
    .height(Length::Fill)
    .padding(spacing::MD)
    .style(styles::container::drawer);

    let backdrop = mouse_area(
        Container::new(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::backdrop),
    )
    .on_press(Message::CloseMenu);

    Some(
        Row::new()
            .push(panel)
            .push(backdrop)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
    )
}
