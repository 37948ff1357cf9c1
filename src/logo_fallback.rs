// SPDX-License-Identifier: MPL-2.0
//! Brand logo fallback probing.
//!
//! Brand logos under `icons/brands/` may exist in several formats. Each
//! alternative extension is probed in a fixed priority order and the first
//! one that loads replaces the logo. When none loads, the original stays.

use crate::app::config::{LOGO_CANDIDATE_EXTENSIONS, LOGO_PATH_MARKER, LOGO_PROBE_TIMEOUT};
use crate::catalog::{Fetcher, Source};
use crate::media;
use std::future::Future;
use std::time::Duration;

/// Whether `location` is a brand logo eligible for probing.
#[must_use]
pub fn is_brand_logo(location: &str) -> bool {
    location.contains(LOGO_PATH_MARKER)
}

/// Alternative locations for `original`, in probing order.
///
/// The extension of the last path segment is swapped for each candidate
/// extension; the candidate naming the same file as `original` is skipped.
#[must_use]
pub fn candidates(original: &str) -> Vec<String> {
    let stem = strip_extension(original);
    let current_name = file_name(original);
    LOGO_CANDIDATE_EXTENSIONS
        .iter()
        .map(|ext| format!("{stem}.{ext}"))
        .filter(|candidate| file_name(candidate) != current_name)
        .collect()
}

fn strip_extension(location: &str) -> &str {
    let name_start = location.rfind(['/', '\\']).map_or(0, |i| i + 1);
    match location[name_start..].rfind('.') {
        Some(dot) => &location[..name_start + dot],
        None => location,
    }
}

fn file_name(location: &str) -> &str {
    location
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(location)
}

/// Probes every candidate of `original` in order, each with `timeout`, and
/// returns the first one `probe` accepts.
pub async fn resolve_with<F, Fut>(original: &str, timeout: Duration, probe: F) -> Option<String>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = bool>,
{
    for candidate in candidates(original) {
        match tokio::time::timeout(timeout, probe(candidate.clone())).await {
            Ok(true) => return Some(candidate),
            Ok(false) => tracing::trace!(%candidate, "logo candidate rejected"),
            Err(_) => tracing::debug!(%candidate, "logo candidate timed out"),
        }
    }
    None
}

/// Checks that a candidate exists and is a usable image: local files must
/// decode, remote ones must answer a GET with success.
pub async fn probe(fetcher: Fetcher, location: String) -> bool {
    match Source::parse(&location) {
        Ok(Source::Remote(url)) => fetcher.probe_remote(&url, LOGO_PROBE_TIMEOUT).await,
        Ok(Source::Local(path)) => {
            if !tokio::fs::try_exists(&path).await.unwrap_or(false) {
                return false;
            }
            media::load(fetcher, location).await.is_ok()
        }
        Err(_) => false,
    }
}

/// Resolves the logo replacement for `original` with the real prober.
///
/// Returns `None` when the logo is not a brand logo or nothing else loads.
pub async fn resolve(fetcher: Fetcher, original: String) -> Option<String> {
    if !is_brand_logo(&original) {
        return None;
    }
    let found = resolve_with(&original, LOGO_PROBE_TIMEOUT, |candidate| {
        probe(fetcher.clone(), candidate)
    })
    .await;
    match &found {
        Some(replacement) => tracing::debug!(%original, %replacement, "logo fallback found"),
        None => tracing::debug!(%original, "logo fallback kept original"),
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tempfile::tempdir;

    #[test]
    fn candidates_follow_priority_and_skip_current() {
        assert_eq!(
            candidates("img/icons/brands/cisco.svg"),
            [
                "img/icons/brands/cisco.png",
                "img/icons/brands/cisco.jpg",
                "img/icons/brands/cisco.gif",
            ]
        );
        assert_eq!(candidates("icons/brands/hp.png").len(), 3);
    }

    #[test]
    fn candidates_for_extensionless_logo() {
        assert_eq!(
            candidates("https://cdn.example.com/icons/brands/aruba")[0],
            "https://cdn.example.com/icons/brands/aruba.png"
        );
    }

    #[test]
    fn dots_in_directories_are_not_extensions() {
        assert_eq!(strip_extension("v1.2/icons/brands/logo"), "v1.2/icons/brands/logo");
        assert_eq!(strip_extension("v1.2/icons/brands/logo.gif"), "v1.2/icons/brands/logo");
    }

    #[test]
    fn only_brand_logos_are_eligible() {
        assert!(is_brand_logo("/srv/shop/icons/brands/cisco.png"));
        assert!(!is_brand_logo("/srv/shop/img/product.png"));
    }

    #[tokio::test]
    async fn first_accepted_candidate_wins_in_order() {
        let probed = Arc::new(Mutex::new(Vec::new()));
        let log = probed.clone();
        let found = resolve_with("icons/brands/x.svg", Duration::from_secs(1), move |c| {
            let log = log.clone();
            async move {
                log.lock().unwrap().push(c.clone());
                c.ends_with(".jpg")
            }
        })
        .await;

        assert_eq!(found.as_deref(), Some("icons/brands/x.jpg"));
        assert_eq!(
            *probed.lock().unwrap(),
            ["icons/brands/x.png", "icons/brands/x.jpg"]
        );
    }

    #[tokio::test]
    async fn all_rejected_keeps_original() {
        let found = resolve_with("icons/brands/x.png", Duration::from_secs(1), |_| async {
            false
        })
        .await;
        assert!(found.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn slow_candidate_times_out_and_next_is_tried() {
        let found = resolve_with("icons/brands/x.svg", Duration::from_secs(3), |c| async move {
            if c.ends_with(".png") {
                tokio::time::sleep(Duration::from_secs(60)).await;
                return true;
            }
            true
        })
        .await;
        assert_eq!(found.as_deref(), Some("icons/brands/x.jpg"));
    }

    #[tokio::test]
    async fn real_probe_accepts_decodable_local_file_only() {
        let dir = tempdir().expect("temp dir");
        let brands = dir.path().join("icons").join("brands");
        std::fs::create_dir_all(&brands).expect("mkdir");
        std::fs::write(brands.join("acme.gif"), b"not really a gif").expect("write");
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="4"></svg>"#;
        std::fs::write(brands.join("acme.svg"), svg).expect("write");

        let original = brands.join("acme.png").display().to_string();
        let found = resolve(Fetcher::new(), original).await;

        assert_eq!(
            found,
            Some(brands.join("acme.svg").display().to_string())
        );
    }
}
