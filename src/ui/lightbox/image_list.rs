// SPDX-License-Identifier: MPL-2.0
//! Ordered, duplicate-free list of the product's image locations.

/// Image locations in gallery order.
///
/// Built from the thumbnail strip with the main image prepended when the
/// strip does not already contain it. Only ever replaced as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageList {
    urls: Vec<String>,
}

impl ImageList {
    /// Builds the list from the page's main image and thumbnails.
    ///
    /// Later duplicates are dropped; the first occurrence keeps its position.
    #[must_use]
    pub fn from_page(main_image: Option<&str>, thumbnails: &[String]) -> Self {
        let mut urls: Vec<String> = Vec::with_capacity(thumbnails.len() + 1);
        for url in thumbnails {
            if !url.is_empty() && !urls.contains(url) {
                urls.push(url.clone());
            }
        }
        if let Some(main) = main_image.filter(|main| !main.is_empty()) {
            if !urls.iter().any(|url| url == main) {
                urls.insert(0, main.to_string());
            }
        }
        Self { urls }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.urls.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.urls.iter().map(String::as_str)
    }

    #[must_use]
    pub fn position(&self, url: &str) -> Option<usize> {
        self.urls.iter().position(|candidate| candidate == url)
    }

    /// Index of `url`, or 0 when it is not part of the gallery.
    #[must_use]
    pub fn index_or_first(&self, url: &str) -> usize {
        self.position(url).unwrap_or(0)
    }

    /// Index after `index`, wrapping to the start. `None` when empty.
    #[must_use]
    pub fn next_index(&self, index: usize) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        Some((index + 1) % self.len())
    }

    /// Index before `index`, wrapping to the end. `None` when empty.
    #[must_use]
    pub fn previous_index(&self, index: usize) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        let len = self.len();
        Some((index % len + len - 1) % len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn main_image_prepended_when_missing() {
        let list = ImageList::from_page(Some("main.jpg"), &urls(&["a.jpg", "b.jpg"]));
        assert_eq!(list.iter().collect::<Vec<_>>(), ["main.jpg", "a.jpg", "b.jpg"]);
    }

    #[test]
    fn main_image_keeps_thumbnail_position() {
        let list = ImageList::from_page(Some("b.jpg"), &urls(&["a.jpg", "b.jpg"]));
        assert_eq!(list.iter().collect::<Vec<_>>(), ["a.jpg", "b.jpg"]);
    }

    #[test]
    fn duplicates_removed_first_wins() {
        let list = ImageList::from_page(None, &urls(&["a.jpg", "b.jpg", "a.jpg", ""]));
        assert_eq!(list.iter().collect::<Vec<_>>(), ["a.jpg", "b.jpg"]);
    }

    #[test]
    fn unknown_url_maps_to_first_index() {
        let list = ImageList::from_page(None, &urls(&["a.jpg", "b.jpg"]));
        assert_eq!(list.index_or_first("b.jpg"), 1);
        assert_eq!(list.index_or_first("zzz.jpg"), 0);
    }

    #[test]
    fn navigation_wraps_both_ways() {
        let list = ImageList::from_page(None, &urls(&["a", "b", "c"]));
        assert_eq!(list.next_index(2), Some(0));
        assert_eq!(list.previous_index(0), Some(2));
        assert_eq!(list.next_index(0), Some(1));
    }

    #[test]
    fn navigation_on_empty_list_is_none() {
        let list = ImageList::default();
        assert_eq!(list.next_index(0), None);
        assert_eq!(list.previous_index(0), None);
    }
}
