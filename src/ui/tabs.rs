// SPDX-License-Identifier: MPL-2.0
//! Product / images / downloads tab strip.

use crate::app::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Row, Text};
use iced::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Product,
    Images,
    Downloads,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Product, Tab::Images, Tab::Downloads];

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Tab::Product => "tab-product",
            Tab::Images => "tab-images",
            Tab::Downloads => "tab-downloads",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Message {
    Selected(Tab),
}

/// Which panel is shown. Exactly one tab is active at a time.
#[derive(Debug, Clone, Default)]
pub struct State {
    active: Tab,
}

impl State {
    #[must_use]
    pub fn active(&self) -> Tab {
        self.active
    }

    /// Switches tabs. Returns `true` when the active tab changed.
    pub fn select(&mut self, tab: Tab) -> bool {
        let changed = self.active != tab;
        self.active = tab;
        changed
    }

    pub fn update(&mut self, message: Message) -> bool {
        match message {
            Message::Selected(tab) => self.select(tab),
        }
    }

    pub fn view<'a>(&self, i18n: &'a I18n) -> Element<'a, Message> {
        Tab::ALL
            .into_iter()
            .fold(Row::new().spacing(spacing::XS), |row, tab| {
                row.push(
                    button(Text::new(i18n.tr(tab.i18n_key())).size(typography::BODY_LG))
                        .padding([spacing::XS, spacing::MD])
                        .on_press(Message::Selected(tab))
                        .style(styles::button::tab(tab == self.active)),
                )
            })
            .into()
    }
}
