// SPDX-License-Identifier: MPL-2.0
//! Decoded images keyed by location, with their loading status.

use super::image::ImageData;
use crate::error::Error;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub enum Entry {
    Loading,
    Ready(ImageData),
    Failed(String),
}

/// Cache of every image requested by the page, the lightbox or the brand
/// strip. Each location is requested at most once.
#[derive(Debug, Default)]
pub struct ImageStore {
    entries: HashMap<String, Entry>,
}

impl ImageStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `location` as loading. Returns `false` when it was already
    /// requested, in which case no new load should start.
    pub fn request(&mut self, location: &str) -> bool {
        if self.entries.contains_key(location) {
            return false;
        }
        self.entries.insert(location.to_string(), Entry::Loading);
        true
    }

    /// Stores the outcome of a load.
    pub fn complete(&mut self, location: String, result: Result<ImageData, Error>) {
        let entry = match result {
            Ok(data) => Entry::Ready(data),
            Err(error) => {
                tracing::warn!(%location, %error, "image unavailable");
                Entry::Failed(error.to_string())
            }
        };
        self.entries.insert(location, entry);
    }

    #[must_use]
    pub fn get(&self, location: &str) -> Option<&Entry> {
        self.entries.get(location)
    }

    #[must_use]
    pub fn ready(&self, location: &str) -> Option<&ImageData> {
        match self.entries.get(location) {
            Some(Entry::Ready(data)) => Some(data),
            _ => None,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel() -> ImageData {
        ImageData::from_rgba(1, 1, vec![0, 0, 0, 255])
    }

    #[test]
    fn request_only_once() {
        let mut store = ImageStore::new();
        assert!(store.request("a.png"));
        assert!(!store.request("a.png"));
        assert!(matches!(store.get("a.png"), Some(Entry::Loading)));
    }

    #[test]
    fn completed_entries_are_ready_or_failed() {
        let mut store = ImageStore::new();
        store.request("a.png");
        store.complete("a.png".to_string(), Ok(pixel()));
        store.complete("b.png".to_string(), Err(Error::Image("bad".into())));

        assert!(store.ready("a.png").is_some());
        assert!(store.ready("b.png").is_none());
        assert!(matches!(store.get("b.png"), Some(Entry::Failed(_))));
        assert!(!store.request("b.png"));
    }

    #[test]
    fn clear_forgets_everything() {
        let mut store = ImageStore::new();
        store.request("a.png");
        store.clear();
        assert!(store.is_empty());
        assert!(store.request("a.png"));
    }
}
