// SPDX-License-Identifier: MPL-2.0
//! Navigation bar fragment, loaded separately from the manifest.

use super::{Fetcher, Source};
use crate::error::{Error, Result};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NavLink {
    pub label: String,
    /// Page section, e.g. `#downloads`.
    pub anchor: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NavbarFragment {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub links: Vec<NavLink>,
}

impl NavbarFragment {
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::Catalog(format!("navbar fragment: {e}")))
    }

    pub async fn load(fetcher: &Fetcher, source: &Source) -> Result<Self> {
        let text = fetcher.read_text(source).await?;
        let fragment = Self::parse(&text)?;
        tracing::debug!(%source, links = fragment.links.len(), "navbar fragment loaded");
        Ok(fragment)
    }
}
