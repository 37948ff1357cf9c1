// SPDX-License-Identifier: MPL-2.0
//! Resource locations (local files or HTTP URLs) and how to read them.

use crate::app::config::FETCH_TIMEOUT;
use crate::error::{Error, FetchError, Result};
use reqwest::Url;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Where a manifest, fragment, image or logo lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Local(PathBuf),
    Remote(Url),
}

impl Source {
    /// Interprets `raw` as an HTTP(S) URL when it has that scheme, as a
    /// `file://` URL, or as a filesystem path otherwise.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(FetchError::InvalidLocation(raw.to_string()).into());
        }
        if let Some(scheme_end) = trimmed.find("://") {
            let scheme = trimmed[..scheme_end].to_ascii_lowercase();
            let url = Url::parse(trimmed)
                .map_err(|_| Error::from(FetchError::InvalidLocation(raw.to_string())))?;
            return match scheme.as_str() {
                "http" | "https" => Ok(Source::Remote(url)),
                "file" => url
                    .to_file_path()
                    .map(Source::Local)
                    .map_err(|()| FetchError::InvalidLocation(raw.to_string()).into()),
                _ => Err(FetchError::InvalidLocation(raw.to_string()).into()),
            };
        }
        Ok(Source::Local(PathBuf::from(trimmed)))
    }

    /// Resolves `reference` relative to this source.
    ///
    /// Absolute URLs and absolute paths are taken as-is; anything else is
    /// joined to the directory containing this source.
    pub fn resolve(&self, reference: &str) -> Result<Source> {
        let reference = reference.trim();
        if reference.contains("://") {
            return Source::parse(reference);
        }
        match self {
            Source::Remote(base) => base
                .join(reference)
                .map(Source::Remote)
                .map_err(|_| FetchError::InvalidLocation(reference.to_string()).into()),
            Source::Local(path) => {
                let candidate = Path::new(reference);
                if candidate.is_absolute() {
                    return Ok(Source::Local(candidate.to_path_buf()));
                }
                let base = path.parent().unwrap_or_else(|| Path::new(""));
                Ok(Source::Local(base.join(candidate)))
            }
        }
    }

    /// Relative local paths become absolute against the current directory.
    /// Remote and absolute sources are returned unchanged.
    #[must_use]
    pub fn absolutized(self) -> Self {
        match self {
            Source::Local(path) if path.is_relative() => match std::path::absolute(&path) {
                Ok(absolute) => Source::Local(absolute),
                Err(error) => {
                    tracing::warn!(path = %path.display(), %error, "could not make path absolute");
                    Source::Local(path)
                }
            },
            other => other,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Local(path) => write!(f, "{}", path.display()),
            Source::Remote(url) => write!(f, "{}", url),
        }
    }
}

/// Reads sources. Cheap to clone; clones share the HTTP connection pool.
#[derive(Debug, Clone, Default)]
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the whole resource with the default download deadline.
    pub async fn read_bytes(&self, source: &Source) -> Result<Vec<u8>> {
        self.read_bytes_within(source, FETCH_TIMEOUT).await
    }

    /// Reads the whole resource, failing with a timeout after `deadline`.
    pub async fn read_bytes_within(&self, source: &Source, deadline: Duration) -> Result<Vec<u8>> {
        match source {
            Source::Local(path) => {
                match tokio::time::timeout(deadline, tokio::fs::read(path)).await {
                    Ok(read) => Ok(read?),
                    Err(_) => Err(FetchError::Timeout.into()),
                }
            }
            Source::Remote(url) => {
                let response = self
                    .client
                    .get(url.clone())
                    .timeout(deadline)
                    .send()
                    .await?;
                let status = response.status();
                if !status.is_success() {
                    return Err(FetchError::Status(status.as_u16()).into());
                }
                Ok(response.bytes().await?.to_vec())
            }
        }
    }

    /// Reads the resource as UTF-8 text.
    pub async fn read_text(&self, source: &Source) -> Result<String> {
        let bytes = self.read_bytes(source).await?;
        String::from_utf8(bytes).map_err(|e| Error::Catalog(format!("{source}: {e}")))
    }

    /// Whether a remote resource answers a GET with a success status.
    pub async fn probe_remote(&self, url: &Url, deadline: Duration) -> bool {
        let request = self.client.get(url.clone()).timeout(deadline).send();
        match request.await {
            Ok(response) => response.status().is_success(),
            Err(error) => {
                tracing::debug!(%url, %error, "probe failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parse_distinguishes_paths_and_urls() {
        assert!(matches!(
            Source::parse("https://example.com/catalog.toml"),
            Ok(Source::Remote(_))
        ));
        assert!(matches!(
            Source::parse("demos/catalog/catalog.toml"),
            Ok(Source::Local(_))
        ));
        assert!(Source::parse("ftp://example.com/x").is_err());
        assert!(Source::parse("   ").is_err());
    }

    #[test]
    fn resolve_joins_relative_to_remote_directory() {
        let base = Source::parse("https://example.com/shop/catalog.toml").unwrap();
        let resolved = base.resolve("img/a_front.jpg").unwrap();
        assert_eq!(resolved.to_string(), "https://example.com/shop/img/a_front.jpg");
    }

    #[test]
    fn resolve_keeps_absolute_urls() {
        let base = Source::parse("/srv/catalog.toml").unwrap();
        let resolved = base.resolve("https://cdn.example.com/x.png").unwrap();
        assert!(matches!(resolved, Source::Remote(_)));
    }

    #[test]
    fn resolve_joins_relative_to_local_directory() {
        let base = Source::Local(PathBuf::from("/srv/shop/catalog.toml"));
        let resolved = base.resolve("icons/brands/cisco.png").unwrap();
        assert_eq!(
            resolved,
            Source::Local(PathBuf::from("/srv/shop/icons/brands/cisco.png"))
        );
    }

    #[test]
    fn relative_local_path_is_absolutized() {
        let source = Source::parse("demos/catalog/catalog.toml").unwrap().absolutized();
        let Source::Local(path) = &source else {
            panic!("expected a local source, got {source:?}");
        };
        assert!(path.is_absolute());
        assert!(path.ends_with("demos/catalog/catalog.toml"));

        let remote = Source::parse("https://example.com/catalog.toml").unwrap();
        assert_eq!(remote.clone().absolutized(), remote);
        let absolute = Source::Local(PathBuf::from("/srv/catalog.toml"));
        assert_eq!(absolute.clone().absolutized(), absolute);
    }

    #[tokio::test]
    async fn read_text_from_local_file() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("fragment.toml");
        std::fs::write(&path, "title = \"Shop\"").expect("write");

        let text = Fetcher::new()
            .read_text(&Source::Local(path))
            .await
            .expect("read");
        assert_eq!(text, "title = \"Shop\"");
    }

    #[tokio::test]
    async fn read_missing_local_file_is_io_error() {
        let dir = tempdir().expect("temp dir");
        let result = Fetcher::new()
            .read_bytes(&Source::Local(dir.path().join("missing.toml")))
            .await;
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
