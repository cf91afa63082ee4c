// SPDX-License-Identifier: MPL-2.0
//! Asynchronous page loading.
//!
//! Each page is fetched (HTTP GET or file read), then decoded on the blocking
//! pool so the UI receives ready-to-draw RGBA pixels. A page that cannot be
//! fetched or decoded becomes [`LoadedPage::Broken`]; the viewer draws a
//! placeholder for it instead of failing.

use super::PageSource;
use crate::error::{Error, Result};
use iced::widget::image::Handle;
use std::time::Duration;

const USER_AGENT: &str = concat!("FlipMenu/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Outcome of loading one page.
#[derive(Debug, Clone)]
pub enum LoadedPage {
    Ready {
        handle: Handle,
        width: u32,
        height: u32,
    },
    Broken {
        reason: String,
    },
}

impl LoadedPage {
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadedPage::Ready { .. })
    }

    /// Width / height of a ready page.
    #[must_use]
    pub fn aspect_ratio(&self) -> Option<f32> {
        match self {
            LoadedPage::Ready { width, height, .. } if *height > 0 => {
                Some(*width as f32 / *height as f32)
            }
            _ => None,
        }
    }
}

/// Builds the HTTP client shared by all page fetches.
pub fn http_client() -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()?;
    Ok(client)
}

/// Loads and decodes one page. Never fails: errors are folded into
/// [`LoadedPage::Broken`] and logged.
pub async fn load_page(client: Option<reqwest::Client>, source: PageSource) -> LoadedPage {
    match try_load_page(client, &source).await {
        Ok(page) => {
            tracing::debug!(%source, "page loaded");
            page
        }
        Err(err) => {
            tracing::warn!(%source, %err, "page could not be loaded");
            LoadedPage::Broken {
                reason: err.to_string(),
            }
        }
    }
}

async fn try_load_page(client: Option<reqwest::Client>, source: &PageSource) -> Result<LoadedPage> {
    let bytes = match source {
        PageSource::Remote(url) => {
            let client = client.ok_or_else(|| Error::Http("HTTP client unavailable".to_string()))?;
            fetch_remote(&client, url).await?
        }
        PageSource::Local(path) => tokio::fs::read(path).await?,
    };

    tokio::task::spawn_blocking(move || decode(&bytes))
        .await
        .map_err(|e| Error::Decode(e.to_string()))?
}

async fn fetch_remote(client: &reqwest::Client, url: &str) -> Result<Vec<u8>> {
    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(Error::Http(format!("HTTP status: {}", response.status())));
    }

    let bytes = response.bytes().await?;
    Ok(bytes.to_vec())
}

fn decode(bytes: &[u8]) -> Result<LoadedPage> {
    let image = image_rs::load_from_memory(bytes)?;
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(LoadedPage::Ready {
        handle: Handle::from_rgba(width, height, rgba.into_raw()),
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{ImageBuffer, Rgba};
    use tempfile::tempdir;

    #[test]
    fn decode_reports_dimensions() {
        let mut png = Vec::new();
        let buffer: ImageBuffer<Rgba<u8>, Vec<u8>> = ImageBuffer::new(30, 43);
        buffer
            .write_to(&mut std::io::Cursor::new(&mut png), image_rs::ImageFormat::Png)
            .expect("failed to encode png");

        let page = decode(&png).expect("failed to decode");
        match page {
            LoadedPage::Ready { width, height, .. } => {
                assert_eq!((width, height), (30, 43));
            }
            LoadedPage::Broken { .. } => panic!("expected a ready page"),
        }
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(matches!(decode(b"not an image"), Err(Error::Decode(_))));
    }

    #[tokio::test]
    async fn local_page_loads_from_disk() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("page.png");
        let buffer: ImageBuffer<Rgba<u8>, Vec<u8>> = ImageBuffer::new(4, 6);
        buffer.save(&path).expect("failed to write png");

        let page = load_page(None, PageSource::Local(path)).await;
        assert!(page.is_ready());
        let ratio = page.aspect_ratio().expect("ready page has a ratio");
        assert!((ratio - 4.0 / 6.0).abs() < 1e-6);
    }

    #[tokio::test]
    async fn missing_local_page_is_broken() {
        let dir = tempdir().expect("failed to create temp dir");
        let page = load_page(None, PageSource::Local(dir.path().join("nope.jpg"))).await;
        assert!(matches!(page, LoadedPage::Broken { .. }));
        assert!(page.aspect_ratio().is_none());
    }

    #[tokio::test]
    async fn remote_page_without_client_is_broken() {
        let page = load_page(
            None,
            PageSource::Remote("https://example.invalid/page.jpg".to_string()),
        )
        .await;
        match page {
            LoadedPage::Broken { reason } => assert!(reason.contains("HTTP client unavailable")),
            LoadedPage::Ready { .. } => panic!("expected a broken page"),
        }
    }
}
