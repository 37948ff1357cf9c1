// SPDX-License-Identifier: MPL-2.0
//! Product catalog manifest: the data behind the product page.
//!
//! A manifest is a TOML document describing one product, its downloads and
//! the brand strip. Relative locations inside it are resolved against the
//! manifest's own location when it is loaded.
//!
//! ```toml
//! navbar = "navbar.toml"
//!
//! [product]
//! name = "Catalyst 9200L"
//! main_image = "img/C9200L-24T-4G-E_front.jpg"
//! thumbnails = ["img/C9200L-24T-4G-E_front.jpg", "img/C9200L-24T-4G-E_back.jpg"]
//!
//! [[product.specs]]
//! label = "Ports"
//! value = "24 x 1G"
//!
//! [[downloads]]
//! title = "Datasheet"
//! url = "docs/datasheet.pdf"
//!
//! [[brands]]
//! name = "Cisco"
//! logo = "icons/brands/cisco.svg"
//! ```

pub mod navbar;
pub mod source;

pub use navbar::{NavLink, NavbarFragment};
pub use source::{Fetcher, Source};

use crate::error::{Error, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Spec {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Product {
    pub name: String,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub main_image: Option<String>,
    #[serde(default)]
    pub thumbnails: Vec<String>,
    #[serde(default)]
    pub specs: Vec<Spec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Download {
    pub title: String,
    pub url: String,
    /// Free-form type shown next to the title ("PDF", "ZIP", ...).
    #[serde(default)]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Brand {
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
    /// Featured brands are always visible; the others sit behind "show more".
    #[serde(default = "default_featured")]
    pub featured: bool,
}

fn default_featured() -> bool {
    true
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Catalog {
    pub product: Product,
    #[serde(default)]
    pub downloads: Vec<Download>,
    #[serde(default)]
    pub brands: Vec<Brand>,
    /// Location of the navbar fragment.
    #[serde(default)]
    pub navbar: Option<String>,
}

impl Catalog {
    /// Parses a manifest without resolving its locations.
    pub fn parse(text: &str) -> Result<Self> {
        let catalog: Catalog = toml::from_str(text).map_err(|e| Error::Catalog(e.to_string()))?;
        if catalog.product.name.trim().is_empty() {
            return Err(Error::Catalog("product name is empty".to_string()));
        }
        Ok(catalog)
    }

    /// Reads and parses the manifest at `source`, resolving every image,
    /// logo, download and fragment location against it.
    pub async fn load(fetcher: &Fetcher, source: &Source) -> Result<Self> {
        let text = fetcher.read_text(source).await?;
        let mut catalog = Self::parse(&text)?;
        catalog.resolve_locations(source);
        tracing::info!(
            %source,
            product = %catalog.product.name,
            images = catalog.product.thumbnails.len(),
            brands = catalog.brands.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Rewrites relative locations as absolute ones. Unresolvable entries
    /// are left untouched and logged.
    pub fn resolve_locations(&mut self, base: &Source) {
        let resolve = |raw: &mut String| match base.resolve(raw) {
            Ok(resolved) => *raw = resolved.to_string(),
            Err(error) => tracing::warn!(location = %raw, %error, "unresolvable location"),
        };

        if let Some(main) = self.product.main_image.as_mut() {
            resolve(main);
        }
        for thumbnail in &mut self.product.thumbnails {
            resolve(thumbnail);
        }
        for download in &mut self.downloads {
            resolve(&mut download.url);
        }
        for brand in &mut self.brands {
            if let Some(logo) = brand.logo.as_mut() {
                resolve(logo);
            }
        }
        if let Some(navbar) = self.navbar.as_mut() {
            resolve(navbar);
        }
    }

    /// Every image the page may show, main image first.
    #[must_use]
    pub fn image_locations(&self) -> Vec<&str> {
        self.product
            .main_image
            .iter()
            .chain(self.product.thumbnails.iter())
            .map(String::as_str)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const MANIFEST: &str = r#"
        navbar = "navbar.toml"

        [product]
        name = "Catalyst 9200L"
        sku = "C9200L-24T-4G-E"
        main_image = "img/C9200L-24T-4G-E_front.jpg"
        thumbnails = ["img/C9200L-24T-4G-E_front.jpg", "img/C9200L-24T-4G-E_back.jpg"]

        [[product.specs]]
        label = "Ports"
        value = "24 x 1G"

        [[downloads]]
        title = "Datasheet"
        url = "docs/datasheet.pdf"
        kind = "PDF"

        [[brands]]
        name = "Cisco"
        logo = "icons/brands/cisco.svg"

        [[brands]]
        name = "Aruba"
        featured = false
    "#;

    #[test]
    fn parse_reads_all_sections() {
        let catalog = Catalog::parse(MANIFEST).expect("valid manifest");
        assert_eq!(catalog.product.name, "Catalyst 9200L");
        assert_eq!(catalog.product.thumbnails.len(), 2);
        assert_eq!(catalog.product.specs[0].value, "24 x 1G");
        assert_eq!(catalog.downloads[0].kind.as_deref(), Some("PDF"));
        assert!(catalog.brands[0].featured);
        assert!(!catalog.brands[1].featured);
        assert_eq!(catalog.navbar.as_deref(), Some("navbar.toml"));
    }

    #[test]
    fn parse_rejects_missing_product_name() {
        let result = Catalog::parse("[product]\nname = \"  \"\n");
        assert!(matches!(result, Err(Error::Catalog(_))));
    }

    #[test]
    fn parse_rejects_invalid_toml() {
        assert!(matches!(Catalog::parse("[product"), Err(Error::Catalog(_))));
    }

    #[test]
    fn locations_resolve_against_manifest() {
        let mut catalog = Catalog::parse(MANIFEST).expect("valid manifest");
        catalog.resolve_locations(&Source::Local(PathBuf::from("/shop/catalog.toml")));

        let expected = PathBuf::from("/shop/img/C9200L-24T-4G-E_back.jpg");
        assert_eq!(
            catalog.product.thumbnails[1],
            expected.display().to_string()
        );
        assert!(catalog.brands[0]
            .logo
            .as_deref()
            .is_some_and(|logo| logo.contains("icons/brands/")));
    }

    #[test]
    fn image_locations_lists_main_first() {
        let catalog = Catalog::parse(MANIFEST).expect("valid manifest");
        let images = catalog.image_locations();
        assert_eq!(images[0], "img/C9200L-24T-4G-E_front.jpg");
        assert_eq!(images.len(), 3);
    }
}
