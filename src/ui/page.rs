// SPDX-License-Identifier: MPL-2.0
//! The product page: hero gallery, tab panels, brand strip and footer.
//!
//! [`State`] holds the page-level interaction state (active tab, brand
//! strip expansion, scroll geometry and running animations). The gallery
//! and the lightbox live in [`crate::ui::lightbox`]; the page only emits
//! their messages.

use crate::app::config::{FEATURED_BRAND_LIMIT, REVEAL_OFFSET_PX};
use crate::app::i18n::fluent::I18n;
use crate::catalog::{Brand, Catalog, Download};
use crate::media::{Entry, ImageStore};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::lightbox;
use crate::ui::scroll::{Anchor, PageMetrics, Reveals, Section, SmoothScroll, HERO_HEIGHT};
use crate::ui::styles;
use crate::ui::tabs::{self, Tab};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::scrollable::Viewport;
use iced::widget::{button, image, Column, Container, Id, Row, Scrollable, Space, Text};
use iced::{ContentFit, Element, Length, Padding};
use std::collections::HashMap;
use std::time::Instant;

/// Widget id of the page scrollable.
pub const SCROLL_ID: &str = "catalog-page";

#[derive(Debug, Clone)]
pub enum Message {
    Lightbox(lightbox::Message),
    Tabs(tabs::Message),
    ToggleMoreBrands,
    CopyLink(Download),
    BackToTop,
    Scrolled(PageMetrics),
}

/// What the application must do after a page message.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Lightbox(lightbox::Message),
    CopyLink(Download),
}

#[derive(Debug, Clone, Default)]
pub struct State {
    tabs: tabs::State,
    more_brands: bool,
    metrics: PageMetrics,
    scroll: Option<SmoothScroll>,
    reveals: Reveals,
}

impl State {
    /// Back to the initial layout for a freshly loaded catalog.
    pub fn reset(&mut self, now: Instant) {
        *self = Self {
            metrics: self.metrics,
            ..Self::default()
        };
        self.reveals.start(Section::Panel(Tab::Product), now);
    }

    pub fn update(&mut self, message: Message, now: Instant) -> Event {
        match message {
            Message::Lightbox(message) => Event::Lightbox(message),
            Message::Tabs(tabs::Message::Selected(tab)) => {
                self.select_tab(tab, now);
                Event::None
            }
            Message::ToggleMoreBrands => {
                self.more_brands = !self.more_brands;
                if self.more_brands {
                    self.scroll_to(Anchor::Brands, now);
                }
                Event::None
            }
            Message::CopyLink(download) => Event::CopyLink(download),
            Message::BackToTop => {
                self.scroll_to(Anchor::Top, now);
                Event::None
            }
            Message::Scrolled(metrics) => {
                self.viewport_changed(metrics, now);
                Event::None
            }
        }
    }

    pub fn select_tab(&mut self, tab: Tab, now: Instant) {
        self.tabs.select(tab);
        self.reveals.start(Section::Panel(tab), now);
    }

    /// Starts an eased scroll to `anchor`, switching tabs first when the
    /// anchor names a panel.
    pub fn scroll_to(&mut self, anchor: Anchor, now: Instant) {
        if let Some(tab) = anchor.tab() {
            self.select_tab(tab, now);
        }
        let from = self
            .scroll
            .map_or(self.metrics.offset, |scroll| scroll.offset_at(now));
        let to = anchor.target(&self.metrics);
        tracing::trace!(?anchor, from, to, "page scroll");
        self.scroll = Some(SmoothScroll::new(from, to, now));
    }

    pub fn viewport_changed(&mut self, metrics: PageMetrics, now: Instant) {
        self.metrics = metrics;
        if metrics.brands_visible() {
            self.reveals.start(Section::Brands, now);
        }
    }

    /// Advances the running scroll animation and returns the offset to
    /// apply, if any.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        let scroll = self.scroll?;
        if scroll.is_finished(now) {
            self.scroll = None;
            return Some(scroll.target());
        }
        Some(scroll.offset_at(now))
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.scroll.is_some() || self.reveals.is_animating(now)
    }

    #[must_use]
    pub fn active_tab(&self) -> Tab {
        self.tabs.active()
    }

    #[must_use]
    pub fn shows_more_brands(&self) -> bool {
        self.more_brands
    }
}

/// Brands shown for the expansion state, and how many are hidden.
#[must_use]
pub fn visible_brands(brands: &[Brand], expanded: bool) -> (Vec<&Brand>, usize) {
    if expanded {
        return (brands.iter().collect(), 0);
    }
    let shown: Vec<&Brand> = brands
        .iter()
        .filter(|brand| brand.featured)
        .take(FEATURED_BRAND_LIMIT)
        .collect();
    let hidden = brands.len() - shown.len();
    (shown, hidden)
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a Catalog,
    pub lightbox: &'a lightbox::State,
    pub images: &'a ImageStore,
    /// Brand logo replacements found by the fallback prober.
    pub logos: &'a HashMap<String, String>,
    pub year: i32,
    pub now: Instant,
}

fn picture<'a>(
    i18n: &I18n,
    images: &'a ImageStore,
    location: &str,
    height: f32,
) -> Element<'a, Message> {
    match images.get(location) {
        Some(Entry::Ready(data)) => image(data.handle.clone())
            .height(Length::Fixed(height))
            .content_fit(ContentFit::Contain)
            .into(),
        Some(Entry::Failed(_)) => placeholder(i18n.tr("image-unavailable"), height),
        Some(Entry::Loading) | None => placeholder(i18n.tr("image-loading"), height),
    }
}

fn placeholder<'a>(label: String, height: f32) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::CAPTION))
        .height(Length::Fixed(height))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

fn heading<'a>(label: String) -> Element<'a, Message> {
    Text::new(label).size(typography::TITLE_MD).into()
}

/// Wraps `content` in the reveal fade and slide of `section`.
fn revealed<'a>(
    content: Element<'a, Message>,
    section: Section,
    state: &State,
    now: Instant,
) -> Element<'a, Message> {
    let (alpha, shift) = state.reveals.style_at(section, now);
    Container::new(content)
        .padding(Padding {
            top: shift,
            bottom: REVEAL_OFFSET_PX - shift,
            ..Padding::ZERO
        })
        .style(styles::container::faded(alpha))
        .into()
}

fn hero<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let product = &ctx.catalog.product;
    let gallery = ctx.lightbox;

    let mut title = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(product.name.as_str()).size(typography::TITLE_LG));
    if let Some(sku) = &product.sku {
        title = title.push(Text::new(sku.as_str()).size(typography::BODY_SM));
    }
    if let Some(summary) = &product.summary {
        title = title.push(Text::new(summary.as_str()).size(typography::BODY));
    }

    let main: Element<'a, Message> = match gallery.main_image() {
        Some(location) => {
            let picture: Element<'a, Message> = match ctx.images.get(location) {
                Some(Entry::Ready(data)) => image(data.handle.clone())
                    .height(Length::Fixed(sizing::MAIN_IMAGE_HEIGHT))
                    .width(Length::Fill)
                    .content_fit(ContentFit::Contain)
                    .opacity(gallery.main_opacity())
                    .into(),
                _ => picture(ctx.i18n, ctx.images, location, sizing::MAIN_IMAGE_HEIGHT),
            };
            button(picture)
                .width(Length::Fill)
                .padding(0.0)
                .on_press(Message::Lightbox(lightbox::Message::MainImagePressed))
                .style(styles::button::bare)
                .into()
        }
        None => placeholder(ctx.i18n.tr("gallery-empty"), sizing::MAIN_IMAGE_HEIGHT),
    };

    let caption = Text::new(ctx.i18n.tr(gallery.caption().i18n_key())).size(typography::BODY_SM);

    let thumbnails = product
        .thumbnails
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, url| {
            let selected = gallery.main_image() == Some(url.as_str());
            row.push(
                button(picture(ctx.i18n, ctx.images, url, sizing::THUMBNAIL))
                    .width(Length::Fixed(sizing::THUMBNAIL))
                    .padding(spacing::XXS)
                    .on_press(Message::Lightbox(lightbox::Message::ThumbnailSelected(
                        url.clone(),
                    )))
                    .style(styles::button::thumbnail(selected)),
            )
        });

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(title)
            .push(main)
            .push(caption)
            .push(thumbnails),
    )
    .width(Length::Fill)
    .height(Length::Fixed(HERO_HEIGHT))
    .clip(true)
    .into()
}

fn product_panel<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let product = &ctx.catalog.product;
    let mut column = Column::new().spacing(spacing::MD);
    if let Some(description) = &product.description {
        column = column.push(Text::new(description.as_str()).size(typography::BODY));
    }
    if !product.specs.is_empty() {
        let specs = product
            .specs
            .iter()
            .fold(Column::new().spacing(spacing::XS), |specs, spec| {
                specs.push(
                    Row::new()
                        .spacing(spacing::MD)
                        .push(
                            Text::new(spec.label.as_str())
                                .size(typography::BODY)
                                .width(Length::FillPortion(1)),
                        )
                        .push(
                            Text::new(spec.value.as_str())
                                .size(typography::BODY)
                                .width(Length::FillPortion(2)),
                        ),
                )
            });
        column = column
            .push(heading(ctx.i18n.tr("product-specs")))
            .push(specs);
    }
    column.into()
}

fn images_panel<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let gallery = ctx.lightbox.images();
    if gallery.is_empty() {
        return Text::new(ctx.i18n.tr("gallery-empty")).into();
    }
    gallery
        .iter()
        .fold(Row::new().spacing(spacing::SM), |row, url| {
            row.push(
                button(picture(ctx.i18n, ctx.images, url, sizing::BRAND_TILE_WIDTH))
                    .padding(spacing::XXS)
                    .on_press(Message::Lightbox(lightbox::Message::Open(url.to_string())))
                    .style(styles::button::thumbnail(false)),
            )
        })
        .wrap()
        .into()
}

fn downloads_panel<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let downloads = &ctx.catalog.downloads;
    if downloads.is_empty() {
        return Text::new(ctx.i18n.tr("downloads-empty")).into();
    }
    downloads
        .iter()
        .fold(Column::new().spacing(spacing::SM), |column, download| {
            let mut title = Row::new()
                .spacing(spacing::SM)
                .align_y(Vertical::Center)
                .push(Text::new(download.title.as_str()).size(typography::BODY_LG));
            if let Some(kind) = &download.kind {
                title = title.push(Text::new(kind.as_str()).size(typography::CAPTION));
            }
            let card = Row::new()
                .spacing(spacing::MD)
                .align_y(Vertical::Center)
                .push(
                    Column::new()
                        .spacing(spacing::XXS)
                        .width(Length::Fill)
                        .push(title)
                        .push(Text::new(download.url.as_str()).size(typography::BODY_SM)),
                )
                .push(
                    button(Text::new(ctx.i18n.tr("downloads-copy-link")).size(typography::BODY_SM))
                        .on_press(Message::CopyLink(download.clone()))
                        .style(styles::button::link),
                );
            column.push(
                Container::new(card)
                    .width(Length::Fill)
                    .padding(spacing::SM)
                    .style(styles::container::card),
            )
        })
        .into()
}

fn brand_tile<'a>(ctx: &ViewContext<'a>, brand: &'a Brand) -> Element<'a, Message> {
    let logo = brand
        .logo
        .as_ref()
        .map(|original| ctx.logos.get(original).unwrap_or(original));
    let content: Element<'a, Message> = match logo.and_then(|l| ctx.images.ready(l)) {
        Some(data) => image(data.handle.clone())
            .height(Length::Fixed(sizing::BRAND_LOGO_HEIGHT))
            .content_fit(ContentFit::Contain)
            .into(),
        None => Text::new(brand.name.as_str()).size(typography::BODY).into(),
    };
    Container::new(content)
        .width(Length::Fixed(sizing::BRAND_TILE_WIDTH))
        .height(Length::Fixed(sizing::BRAND_LOGO_HEIGHT + 2.0 * spacing::SM))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::card)
        .into()
}

fn brands<'a>(ctx: &ViewContext<'a>, state: &State) -> Option<Element<'a, Message>> {
    let all = &ctx.catalog.brands;
    if all.is_empty() {
        return None;
    }
    let (shown, hidden) = visible_brands(all, state.more_brands);
    let tiles = shown
        .into_iter()
        .fold(Row::new().spacing(spacing::SM), |row, brand| {
            row.push(brand_tile(ctx, brand))
        })
        .wrap();

    let mut column = Column::new()
        .spacing(spacing::MD)
        .push(heading(ctx.i18n.tr("brands-title")))
        .push(tiles);
    if hidden > 0 || state.more_brands {
        let label = if state.more_brands {
            ctx.i18n.tr("brands-show-less")
        } else {
            ctx.i18n.tr_with_args("brands-show-more", &[("count", &hidden.to_string())])
        };
        column = column.push(
            button(Text::new(label).size(typography::BODY))
                .on_press(Message::ToggleMoreBrands)
                .style(styles::button::primary),
        );
    }
    Some(revealed(column.into(), Section::Brands, state, ctx.now))
}

fn footer<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let year = ctx.year.to_string();
    Row::new()
        .align_y(Vertical::Center)
        .push(
            Text::new(ctx.i18n.tr_with_args(
                "footer-copyright",
                &[("year", year.as_str()), ("name", ctx.catalog.product.name.as_str())],
            ))
            .size(typography::CAPTION),
        )
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(ctx.i18n.tr("footer-back-to-top")).size(typography::CAPTION))
                .on_press(Message::BackToTop)
                .style(styles::button::link),
        )
        .into()
}

/// The scrollable product page.
pub fn view<'a>(ctx: ViewContext<'a>, state: &'a State) -> Element<'a, Message> {
    let active = state.active_tab();
    let panel = match active {
        Tab::Product => product_panel(&ctx),
        Tab::Images => images_panel(&ctx),
        Tab::Downloads => downloads_panel(&ctx),
    };

    let tabbed = Column::new()
        .spacing(spacing::MD)
        .push(state.tabs.view(ctx.i18n).map(Message::Tabs))
        .push(
            Container::new(revealed(panel, Section::Panel(active), state, ctx.now))
                .width(Length::Fill)
                .padding(spacing::LG)
                .style(styles::container::panel),
        );

    let mut content = Column::new()
        .spacing(spacing::XL)
        .padding(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(hero(&ctx))
        .push(tabbed);
    if let Some(brands) = brands(&ctx, state) {
        content = content.push(brands);
    }
    content = content.push(footer(&ctx));

    Scrollable::new(
        Container::new(content)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .id(Id::new(SCROLL_ID))
    .width(Length::Fill)
    .height(Length::Fill)
    .on_scroll(|viewport: Viewport| Message::Scrolled(PageMetrics::from_viewport(&viewport)))
    .into()
}

/// Placeholder shown until a catalog is loaded.
pub fn empty_view<'a, M: Clone + 'a>(i18n: &I18n, loading: bool, open: M) -> Element<'a, M> {
    let key = if loading {
        "catalog-loading"
    } else {
        "catalog-empty"
    };
    let mut column = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(Text::new(i18n.tr(key)).size(typography::TITLE_SM));
    if !loading {
        column = column.push(
            button(Text::new(i18n.tr("navbar-open-catalog")))
                .on_press(open)
                .style(styles::button::primary),
        );
    }
    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn brand(name: &str, featured: bool) -> Brand {
        Brand {
            name: name.into(),
            logo: None,
            featured,
        }
    }

    fn long_page() -> PageMetrics {
        PageMetrics {
            offset: 0.0,
            viewport_height: 600.0,
            content_height: 2400.0,
        }
    }

    #[test]
    fn collapsed_strip_shows_featured_brands_only() {
        let brands = vec![brand("Cisco", true), brand("HP", false), brand("Aruba", true)];
        let (shown, hidden) = visible_brands(&brands, false);
        assert_eq!(shown.iter().map(|b| b.name.as_str()).collect::<Vec<_>>(), ["Cisco", "Aruba"]);
        assert_eq!(hidden, 1);

        let (shown, hidden) = visible_brands(&brands, true);
        assert_eq!((shown.len(), hidden), (3, 0));
    }

    #[test]
    fn featured_brands_are_capped() {
        let brands: Vec<Brand> = (0..FEATURED_BRAND_LIMIT + 2)
            .map(|i| brand(&format!("b{i}"), true))
            .collect();
        let (shown, hidden) = visible_brands(&brands, false);
        assert_eq!(shown.len(), FEATURED_BRAND_LIMIT);
        assert_eq!(hidden, 2);
    }

    #[test]
    fn show_more_expands_and_scrolls_to_brands() {
        let now = Instant::now();
        let mut page = State::default();
        page.viewport_changed(long_page(), now);

        page.update(Message::ToggleMoreBrands, now);
        assert!(page.shows_more_brands());
        assert!(page.is_animating(now));

        let end = now + Duration::from_secs(1);
        assert_eq!(page.tick(end), Some(1800.0));
        assert_eq!(page.tick(end), None);

        page.update(Message::ToggleMoreBrands, end);
        assert!(!page.shows_more_brands());
        assert_eq!(page.tick(end), None);
    }

    #[test]
    fn panel_anchor_switches_tab_before_scrolling() {
        let now = Instant::now();
        let mut page = State::default();
        page.viewport_changed(long_page(), now);

        page.scroll_to(Anchor::Downloads, now);
        assert_eq!(page.active_tab(), Tab::Downloads);
        assert_eq!(page.tick(now + Duration::from_secs(1)), Some(HERO_HEIGHT));
    }

    #[test]
    fn back_to_top_scrolls_to_zero() {
        let now = Instant::now();
        let mut page = State::default();
        page.viewport_changed(
            PageMetrics {
                offset: 900.0,
                ..long_page()
            },
            now,
        );
        page.update(Message::BackToTop, now);
        let midway = page.tick(now + Duration::from_millis(100)).expect("scrolling");
        assert!(midway < 900.0 && midway > 0.0);
        assert_eq!(page.tick(now + Duration::from_secs(1)), Some(0.0));
    }

    #[test]
    fn reset_reveals_product_panel_and_collapses_brands() {
        let now = Instant::now();
        let mut page = State::default();
        page.update(Message::ToggleMoreBrands, now);
        page.select_tab(Tab::Images, now);

        page.reset(now);

        assert_eq!(page.active_tab(), Tab::Product);
        assert!(!page.shows_more_brands());
        assert!(page.reveals.is_animating(now));
    }
}
