// SPDX-License-Identifier: MPL-2.0
//! View labels derived from image file names.

/// Which side of the product an image shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewLabel {
    FrontEnlarged,
    Front,
    Back,
    #[default]
    Generic,
}

/// Stem suffixes, longest first so `_front_large` is not read as `_front`.
const SUFFIXES: [(&str, ViewLabel); 3] = [
    ("_front_large", ViewLabel::FrontEnlarged),
    ("_front", ViewLabel::Front),
    ("_back", ViewLabel::Back),
];

impl ViewLabel {
    /// Derives the label from the file stem of a path or URL.
    #[must_use]
    pub fn from_location(location: &str) -> Self {
        let stem = file_stem(location).to_ascii_lowercase();
        SUFFIXES
            .iter()
            .find(|(suffix, _)| stem.ends_with(suffix))
            .map(|(_, label)| *label)
            .unwrap_or_default()
    }

    /// Returns the i18n message key for this label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ViewLabel::FrontEnlarged => "caption-front-large",
            ViewLabel::Front => "caption-front",
            ViewLabel::Back => "caption-back",
            ViewLabel::Generic => "caption-generic",
        }
    }
}

/// File name without query, fragment or extension.
fn file_stem(location: &str) -> &str {
    let without_query = location
        .split(['?', '#'])
        .next()
        .unwrap_or(location);
    let name = without_query
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(without_query);
    match name.rfind('.') {
        Some(dot) if dot > 0 => &name[..dot],
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_suffixes_map_to_labels() {
        assert_eq!(
            ViewLabel::from_location("img/C9200L-24T-4G-E_front.jpg"),
            ViewLabel::Front
        );
        assert_eq!(
            ViewLabel::from_location("img/C9200L-24T-4G-E_front_large.jpg"),
            ViewLabel::FrontEnlarged
        );
        assert_eq!(
            ViewLabel::from_location("img/C9200L-24T-4G-E_back.jpg"),
            ViewLabel::Back
        );
    }

    #[test]
    fn unmapped_names_are_generic() {
        assert_eq!(ViewLabel::from_location("img/side.png"), ViewLabel::Generic);
        assert_eq!(ViewLabel::from_location(""), ViewLabel::Generic);
        assert_eq!(ViewLabel::from_location("backpack.png"), ViewLabel::Generic);
    }

    #[test]
    fn urls_with_query_strings_are_handled() {
        assert_eq!(
            ViewLabel::from_location("https://cdn.example.com/x_BACK.webp?v=3#zoom"),
            ViewLabel::Back
        );
    }

    #[test]
    fn file_stem_strips_directories_and_extension() {
        assert_eq!(file_stem("a/b/c.d.jpg"), "c.d");
        assert_eq!(file_stem("C:\\imgs\\x_front.png"), "x_front");
        assert_eq!(file_stem(".hidden"), ".hidden");
    }

    #[test]
    fn every_label_has_a_key() {
        assert_eq!(ViewLabel::Generic.i18n_key(), "caption-generic");
        assert_eq!(ViewLabel::FrontEnlarged.i18n_key(), "caption-front-large");
    }
}
