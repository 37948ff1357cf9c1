// SPDX-License-Identifier: MPL-2.0
//! Page anchors, eased anchor scrolling and the reveal animation.
//!
//! The page is one vertical scrollable. Its hero block has a fixed height,
//! so the tab panels always start at [`HERO_HEIGHT`]; the brand strip and
//! the footer sit at the end of the page.

use crate::app::config::{REVEAL_DURATION_MS, REVEAL_OFFSET_PX, SMOOTH_SCROLL_MS};
use crate::ui::tabs::Tab;
use iced::widget::scrollable::Viewport;
use std::time::{Duration, Instant};

/// Height of the hero block (title, main image, thumbnails).
pub const HERO_HEIGHT: f32 = 560.0;

/// How far before the end of the page the brand strip starts being
/// considered on screen.
const BRANDS_REVEAL_DEPTH: f32 = 220.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    Top,
    Product,
    Images,
    Downloads,
    Brands,
    Footer,
}

impl Anchor {
    /// Parses `#downloads`, `downloads` or `#Downloads`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let name = raw.trim().trim_start_matches('#');
        let anchor = match name.to_ascii_lowercase().as_str() {
            "top" => Anchor::Top,
            "product" | "information" => Anchor::Product,
            "images" => Anchor::Images,
            "downloads" => Anchor::Downloads,
            "brands" => Anchor::Brands,
            "footer" => Anchor::Footer,
            _ => return None,
        };
        Some(anchor)
    }

    /// The tab an anchor opens, if it points at a tab panel.
    #[must_use]
    pub fn tab(self) -> Option<Tab> {
        match self {
            Anchor::Product => Some(Tab::Product),
            Anchor::Images => Some(Tab::Images),
            Anchor::Downloads => Some(Tab::Downloads),
            Anchor::Top | Anchor::Brands | Anchor::Footer => None,
        }
    }

    /// Scroll offset that brings the anchor to the top of the viewport,
    /// clamped to the scrollable range.
    #[must_use]
    pub fn target(self, metrics: &PageMetrics) -> f32 {
        let target = match self {
            Anchor::Top => 0.0,
            Anchor::Product | Anchor::Images | Anchor::Downloads => HERO_HEIGHT,
            Anchor::Brands | Anchor::Footer => metrics.max_offset(),
        };
        target.clamp(0.0, metrics.max_offset())
    }
}

/// Last known geometry of the page scrollable.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PageMetrics {
    pub offset: f32,
    pub viewport_height: f32,
    pub content_height: f32,
}

impl PageMetrics {
    #[must_use]
    pub fn from_viewport(viewport: &Viewport) -> Self {
        Self {
            offset: viewport.absolute_offset().y,
            viewport_height: viewport.bounds().height,
            content_height: viewport.content_bounds().height,
        }
    }

    #[must_use]
    pub fn max_offset(&self) -> f32 {
        (self.content_height - self.viewport_height).max(0.0)
    }

    /// Whether the brand strip has entered the viewport.
    #[must_use]
    pub fn brands_visible(&self) -> bool {
        self.content_height > 0.0
            && self.offset + self.viewport_height >= self.content_height - BRANDS_REVEAL_DEPTH
    }
}

/// Ease-out cubic: fast start, gentle stop.
#[must_use]
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

fn progress(started: Instant, duration: Duration, now: Instant) -> f32 {
    let elapsed = now.saturating_duration_since(started).as_secs_f32();
    (elapsed / duration.as_secs_f32()).clamp(0.0, 1.0)
}

/// An in-flight anchor scroll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothScroll {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
}

impl SmoothScroll {
    #[must_use]
    pub fn new(from: f32, to: f32, now: Instant) -> Self {
        Self {
            from,
            to,
            started: now,
            duration: Duration::from_millis(SMOOTH_SCROLL_MS),
        }
    }

    #[must_use]
    pub fn offset_at(&self, now: Instant) -> f32 {
        let t = ease_out(progress(self.started, self.duration, now));
        self.from + (self.to - self.from) * t
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }
}

/// A section that fades and slides in the first time it is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Panel(Tab),
    Brands,
}

/// Start times of every reveal. A section is revealed only once.
#[derive(Debug, Clone, Default)]
pub struct Reveals {
    started: Vec<(Section, Instant)>,
}

impl Reveals {
    /// Starts revealing `section` unless it already was. Returns whether a
    /// new animation started.
    pub fn start(&mut self, section: Section, now: Instant) -> bool {
        if self.started.iter().any(|(s, _)| *s == section) {
            return false;
        }
        self.started.push((section, now));
        true
    }

    /// Opacity and downward shift of `section` at `now`. Sections that
    /// were never started are hidden.
    #[must_use]
    pub fn style_at(&self, section: Section, now: Instant) -> (f32, f32) {
        let Some((_, started)) = self.started.iter().find(|(s, _)| *s == section) else {
            return (0.0, REVEAL_OFFSET_PX);
        };
        let eased = ease_out(progress(
            *started,
            Duration::from_millis(REVEAL_DURATION_MS),
            now,
        ));
        (eased, REVEAL_OFFSET_PX * (1.0 - eased))
    }

    /// Whether any reveal still needs animation frames.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        let duration = Duration::from_millis(REVEAL_DURATION_MS);
        self.started
            .iter()
            .any(|(_, started)| now.saturating_duration_since(*started) < duration)
    }

    pub fn clear(&mut self) {
        self.started.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(content_height: f32) -> PageMetrics {
        PageMetrics {
            offset: 0.0,
            viewport_height: 600.0,
            content_height,
        }
    }

    #[test]
    fn parse_known_anchors() {
        assert_eq!(Anchor::parse("#top"), Some(Anchor::Top));
        assert_eq!(Anchor::parse("Downloads"), Some(Anchor::Downloads));
        assert_eq!(Anchor::parse(" #FOOTER "), Some(Anchor::Footer));
        assert_eq!(Anchor::parse("#pricing"), None);
    }

    #[test]
    fn panel_anchors_open_their_tab() {
        assert_eq!(Anchor::Images.tab(), Some(Tab::Images));
        assert_eq!(Anchor::Brands.tab(), None);
    }

    #[test]
    fn targets_are_clamped_to_scroll_range() {
        let long = metrics(2000.0);
        assert_eq!(Anchor::Top.target(&long), 0.0);
        assert_eq!(Anchor::Downloads.target(&long), HERO_HEIGHT);
        assert_eq!(Anchor::Footer.target(&long), 1400.0);

        let short = metrics(800.0);
        assert_eq!(Anchor::Product.target(&short), 200.0);
        assert_eq!(Anchor::Brands.target(&metrics(300.0)), 0.0);
    }

    #[test]
    fn smooth_scroll_eases_to_target() {
        let now = Instant::now();
        let scroll = SmoothScroll::new(0.0, 300.0, now);
        assert_eq!(scroll.offset_at(now), 0.0);

        let midway = scroll.offset_at(now + Duration::from_millis(SMOOTH_SCROLL_MS / 2));
        assert!(midway > 150.0 && midway < 300.0);

        let end = now + Duration::from_millis(SMOOTH_SCROLL_MS);
        assert_eq!(scroll.offset_at(end), 300.0);
        assert!(scroll.is_finished(end));
    }

    #[test]
    fn reveal_runs_once_per_section() {
        let now = Instant::now();
        let mut reveals = Reveals::default();
        assert_eq!(reveals.style_at(Section::Brands, now), (0.0, REVEAL_OFFSET_PX));

        assert!(reveals.start(Section::Panel(Tab::Product), now));
        assert!(!reveals.start(Section::Panel(Tab::Product), now));
        assert!(reveals.is_animating(now));

        let done = now + Duration::from_millis(REVEAL_DURATION_MS);
        assert_eq!(reveals.style_at(Section::Panel(Tab::Product), done), (1.0, 0.0));
        assert!(!reveals.is_animating(done));
    }

    #[test]
    fn brands_visible_near_page_end() {
        let mut page = metrics(2000.0);
        assert!(!page.brands_visible());
        page.offset = page.max_offset();
        assert!(page.brands_visible());
        assert!(!PageMetrics::default().brands_visible());
    }
}
