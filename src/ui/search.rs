// SPDX-License-Identifier: MPL-2.0
//! Search modal over the catalog's specs, downloads and brands.

use crate::app::i18n::fluent::I18n;
use crate::catalog::Catalog;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::scroll::Anchor;
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    button, mouse_area, opaque, text_input, Column, Container, Id, Row, Scrollable, Space, Stack,
    Text,
};
use iced::{Element, Length};

/// Widget id of the query input, focused when the modal opens.
pub const INPUT_ID: &str = "search-input";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitKind {
    Product,
    Spec,
    Download,
    Brand,
}

impl HitKind {
    fn i18n_key(self) -> &'static str {
        match self {
            HitKind::Product => "search-kind-product",
            HitKind::Spec => "search-kind-spec",
            HitKind::Download => "search-kind-download",
            HitKind::Brand => "search-kind-brand",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    pub kind: HitKind,
    pub title: String,
    pub detail: Option<String>,
    /// Section owning the matched item.
    pub target: Anchor,
}

fn matches(field: &str, needle: &str) -> bool {
    field.to_lowercase().contains(needle)
}

/// Case-insensitive substring search. An empty query finds nothing.
#[must_use]
pub fn search(catalog: &Catalog, query: &str) -> Vec<Hit> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let product = &catalog.product;
    let mut hits = Vec::new();

    let product_text = [
        Some(product.name.as_str()),
        product.sku.as_deref(),
        product.summary.as_deref(),
        product.description.as_deref(),
    ];
    if product_text.into_iter().flatten().any(|f| matches(f, &needle)) {
        hits.push(Hit {
            kind: HitKind::Product,
            title: product.name.clone(),
            detail: product.sku.clone(),
            target: Anchor::Product,
        });
    }

    hits.extend(
        product
            .specs
            .iter()
            .filter(|spec| matches(&spec.label, &needle) || matches(&spec.value, &needle))
            .map(|spec| Hit {
                kind: HitKind::Spec,
                title: spec.label.clone(),
                detail: Some(spec.value.clone()),
                target: Anchor::Product,
            }),
    );

    hits.extend(
        catalog
            .downloads
            .iter()
            .filter(|download| {
                matches(&download.title, &needle)
                    || download.kind.as_deref().is_some_and(|k| matches(k, &needle))
            })
            .map(|download| Hit {
                kind: HitKind::Download,
                title: download.title.clone(),
                detail: download.kind.clone(),
                target: Anchor::Downloads,
            }),
    );

    hits.extend(
        catalog
            .brands
            .iter()
            .filter(|brand| matches(&brand.name, &needle))
            .map(|brand| Hit {
                kind: HitKind::Brand,
                title: brand.name.clone(),
                detail: None,
                target: Anchor::Brands,
            }),
    );

    hits
}

#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    /// Enter in the query input picks the first hit.
    Submitted,
    HitSelected(usize),
    Close,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Closed,
    /// A hit was chosen; the modal is already closed.
    Jump(Anchor),
}

#[derive(Debug, Clone, Default)]
pub struct State {
    open: bool,
    query: String,
    hits: Vec<Hit>,
}

impl State {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn hits(&self) -> &[Hit] {
        &self.hits
    }

    /// Opens with the previous query and its hits refreshed.
    pub fn open(&mut self, catalog: Option<&Catalog>) {
        self.open = true;
        self.refresh(catalog);
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    fn refresh(&mut self, catalog: Option<&Catalog>) {
        self.hits = catalog
            .map(|catalog| search(catalog, &self.query))
            .unwrap_or_default();
    }

    fn jump(&mut self, index: usize) -> Event {
        match self.hits.get(index) {
            Some(hit) => {
                let target = hit.target;
                self.close();
                Event::Jump(target)
            }
            None => Event::None,
        }
    }

    pub fn update(&mut self, message: Message, catalog: Option<&Catalog>) -> Event {
        match message {
            Message::QueryChanged(query) => {
                self.query = query;
                self.refresh(catalog);
                Event::None
            }
            Message::Submitted => self.jump(0),
            Message::HitSelected(index) => self.jump(index),
            Message::Close => {
                self.close();
                Event::Closed
            }
        }
    }

    /// Modal over a backdrop; `None` while closed.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Option<Element<'a, Message>> {
        if !self.open {
            return None;
        }

        let input = text_input(&i18n.tr("search-placeholder"), &self.query)
            .id(Id::new(INPUT_ID))
            .on_input(Message::QueryChanged)
            .on_submit(Message::Submitted)
            .size(typography::BODY_LG)
            .padding(spacing::SM);

        let header = Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(input)
            .push(
                button(Text::new("✕").size(typography::TITLE_SM))
                    .on_press(Message::Close)
                    .style(styles::button::ghost),
            );

        let results: Element<'a, Message> = if self.query.trim().is_empty() {
            Text::new(i18n.tr("search-hint")).size(typography::BODY_SM).into()
        } else if self.hits.is_empty() {
            Text::new(i18n.tr_with_args("search-no-results", &[("query", self.query.trim())]))
                .size(typography::BODY_SM)
                .into()
        } else {
            let list = self.hits.iter().enumerate().fold(
                Column::new().spacing(spacing::XXS),
                |column, (index, hit)| column.push(hit_row(i18n, index, hit)),
            );
            Scrollable::new(list).height(Length::Shrink).into()
        };

        let modal = Container::new(
            Column::new()
                .spacing(spacing::MD)
                .push(header)
                .push(results),
        )
        .width(Length::Fixed(sizing::SEARCH_MODAL_WIDTH))
        .max_height(480.0)
        .padding(spacing::LG)
        .style(styles::container::modal);

        let backdrop = mouse_area(
            Container::new(Space::new().width(Length::Fill).height(Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::overlay::backdrop),
        )
        .on_press(Message::Close);

        Some(
            Stack::new()
                .width(Length::Fill)
                .height(Length::Fill)
                .push(backdrop)
                .push(
                    Container::new(opaque(modal))
                        .width(Length::Fill)
                        .height(Length::Fill)
                        .padding(spacing::XXL)
                        .align_x(Horizontal::Center)
                        .align_y(Vertical::Top),
                )
                .into(),
        )
    }
}

fn hit_row<'a>(i18n: &I18n, index: usize, hit: &'a Hit) -> Element<'a, Message> {
    let mut line = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(i18n.tr(hit.kind.i18n_key())).size(typography::CAPTION))
        .push(Text::new(hit.title.as_str()).size(typography::BODY));
    if let Some(detail) = &hit.detail {
        line = line.push(Text::new(detail.as_str()).size(typography::BODY_SM));
    }

    button(line)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::SM])
        .on_press(Message::HitSelected(index))
        .style(styles::button::link)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::parse(
            r#"
            [product]
            name = "Catalyst 9200L"
            sku = "C9200L-24T-4G-E"

            [[product.specs]]
            label = "Uplinks"
            value = "4x 1G SFP"

            [[downloads]]
            title = "Datasheet"
            url = "docs/datasheet.pdf"
            kind = "PDF"

            [[brands]]
            name = "Cisco"
            "#,
        )
        .expect("valid catalog")
    }

    #[test]
    fn empty_query_finds_nothing() {
        assert!(search(&catalog(), "   ").is_empty());
    }

    #[test]
    fn matching_is_case_insensitive_across_sections() {
        let catalog = catalog();
        let hits = search(&catalog, "SFP");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].kind, HitKind::Spec);
        assert_eq!(hits[0].target, Anchor::Product);

        assert_eq!(search(&catalog, "pdf")[0].target, Anchor::Downloads);
        assert_eq!(search(&catalog, "cisco")[0].target, Anchor::Brands);
        assert_eq!(search(&catalog, "c9200l")[0].kind, HitKind::Product);
    }

    #[test]
    fn selecting_hit_closes_and_jumps() {
        let catalog = catalog();
        let mut state = State::default();
        state.open(Some(&catalog));
        assert!(state.is_open());

        state.update(Message::QueryChanged("data".into()), Some(&catalog));
        assert_eq!(state.hits().len(), 1);

        let event = state.update(Message::HitSelected(0), Some(&catalog));
        assert_eq!(event, Event::Jump(Anchor::Downloads));
        assert!(!state.is_open());
    }

    #[test]
    fn submit_without_hits_keeps_modal_open() {
        let mut state = State::default();
        state.open(None);
        state.update(Message::QueryChanged("anything".into()), None);
        assert_eq!(state.update(Message::Submitted, None), Event::None);
        assert!(state.is_open());
        assert_eq!(state.update(Message::Close, None), Event::Closed);
        assert!(!state.is_open());
    }
}
