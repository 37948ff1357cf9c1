// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page sits below the navbar; the drawer, the search modal, the
//! lightbox and the toasts are stacked over both, in that order.

use super::Message;
use crate::app::i18n::fluent::I18n;
use crate::catalog::{Catalog, NavbarFragment};
use crate::media::ImageStore;
use crate::ui::lightbox::{self, State as LightboxState};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{Manager, Toast};
use crate::ui::page::{self, State as PageState, ViewContext as PageViewContext};
use crate::ui::search::State as SearchState;
use crate::ui::theming::ThemeMode;
use iced::widget::{Column, Container, Stack};
use iced::{Element, Length};
use std::collections::HashMap;
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: Option<&'a Catalog>,
    pub loading: bool,
    pub navbar: &'a NavbarFragment,
    pub images: &'a ImageStore,
    pub logos: &'a HashMap<String, String>,
    pub lightbox: &'a LightboxState,
    pub page: &'a PageState,
    pub search: &'a SearchState,
    pub menu_open: bool,
    pub compact: bool,
    pub theme_mode: ThemeMode,
    pub notifications: &'a Manager,
    pub year: i32,
}

/// Navbar title: the fragment's, else the product name, else the app name.
fn navbar_title(ctx: &ViewContext<'_>) -> String {
    ctx.navbar
        .title
        .clone()
        .or_else(|| ctx.catalog.map(|catalog| catalog.product.name.clone()))
        .unwrap_or_else(|| ctx.i18n.tr("window-title"))
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = navbar_title(&ctx);
    let navbar_ctx = |title| NavbarViewContext {
        i18n: ctx.i18n,
        title,
        links: &ctx.navbar.links,
        menu_open: ctx.menu_open,
        compact: ctx.compact,
        theme_mode: ctx.theme_mode,
    };

    let body: Element<'_, Message> = match ctx.catalog {
        Some(catalog) => page::view(
            PageViewContext {
                i18n: ctx.i18n,
                catalog,
                lightbox: ctx.lightbox,
                images: ctx.images,
                logos: ctx.logos,
                year: ctx.year,
                now: Instant::now(),
            },
            ctx.page,
        )
        .map(Message::Page),
        None => page::empty_view(ctx.i18n, ctx.loading, Message::OpenCatalogDialog),
    };

    let base = Column::new()
        .push(navbar::view(navbar_ctx(title.clone())).map(Message::Navbar))
        .push(
            Container::new(body)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base);

    if let Some(drawer) = navbar::drawer(navbar_ctx(title)) {
        layers = layers.push(drawer.map(Message::Navbar));
    }
    if let Some(modal) = ctx.search.view(ctx.i18n) {
        layers = layers.push(modal.map(Message::Search));
    }
    if let Some(overlay) = lightbox::overlay_view(
        lightbox::ViewContext {
            i18n: ctx.i18n,
            images: ctx.images,
        },
        ctx.lightbox,
    ) {
        layers = layers.push(overlay.map(Message::Lightbox));
    }
    if let Some(toasts) = Toast::view_overlay(ctx.notifications, ctx.i18n) {
        layers = layers.push(toasts.map(Message::Notification));
    }

    layers.into()
}
