//! Shared fixtures: a canned-response fetcher and synthetic PNGs.

#![allow(dead_code)]

use std::collections::HashMap;
use std::io::Cursor;
use std::sync::Mutex;

use async_trait::async_trait;
use image::{ImageFormat, Rgb, RgbImage};
use reqwest::StatusCode;

use equipscout::http_client::{Fetch, FetchError, HeadResponse};

/// Serves canned pages, bytes and HEAD responses; anything else is a 404.
///
/// Pages are matched by substring so tests need not reproduce exact query
/// encoding. Every request is recorded as `"<METHOD> <url>"`.
#[derive(Default)]
pub struct FakeFetcher {
    pages: Vec<(String, String)>,
    bytes: HashMap<String, Vec<u8>>,
    heads: HashMap<String, HeadResponse>,
    requests: Mutex<Vec<String>>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `html` for any GET whose URL contains `pattern`.
    pub fn page(mut self, pattern: &str, html: impl Into<String>) -> Self {
        self.pages.push((pattern.to_string(), html.into()));
        self
    }

    pub fn bytes(mut self, url: &str, body: Vec<u8>) -> Self {
        self.bytes.insert(url.to_string(), body);
        self
    }

    pub fn head(mut self, url: &str, status: StatusCode, content_type: &str) -> Self {
        self.heads.insert(
            url.to_string(),
            HeadResponse::new(status, [("Content-Type", content_type)]),
        );
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn count(&self, method: &str) -> usize {
        let prefix = format!("{} ", method);
        self.requests()
            .iter()
            .filter(|r| r.starts_with(&prefix))
            .count()
    }

    fn record(&self, method: &str, url: &str) {
        self.requests
            .lock()
            .unwrap()
            .push(format!("{} {}", method, url));
    }
}

fn not_found(url: &str) -> FetchError {
    FetchError::Status {
        url: url.to_string(),
        status: StatusCode::NOT_FOUND,
    }
}

#[async_trait]
impl Fetch for FakeFetcher {
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        self.record("GET", url);
        self.pages
            .iter()
            .find(|(pattern, _)| url.contains(pattern.as_str()))
            .map(|(_, html)| html.clone())
            .ok_or_else(|| not_found(url))
    }

    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        self.record("GET", url);
        self.bytes.get(url).cloned().ok_or_else(|| not_found(url))
    }

    async fn head(&self, url: &str) -> Result<HeadResponse, FetchError> {
        self.record("HEAD", url);
        self.heads.get(url).cloned().ok_or_else(|| not_found(url))
    }
}

/// Encode an RGB image as PNG bytes.
pub fn png(img: &RgbImage) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png).unwrap();
    buf.into_inner()
}

/// A uniform grey image of the given size.
pub fn solid_png(width: u32, height: u32) -> Vec<u8> {
    png(&RgbImage::from_pixel(width, height, Rgb([128, 128, 128])))
}

/// A white square with a dark box centred horizontally.
pub fn centered_box_png() -> Vec<u8> {
    box_png(100, 300)
}

/// A white square with a dark box hugging the left edge.
pub fn left_box_png() -> Vec<u8> {
    box_png(20, 120)
}

fn box_png(x0: u32, x1: u32) -> Vec<u8> {
    let img = RgbImage::from_fn(400, 400, |x, y| {
        if (x0..x1).contains(&x) && (100..300).contains(&y) {
            Rgb([20, 20, 20])
        } else {
            Rgb([240, 240, 240])
        }
    });
    png(&img)
}

/// One Bing image tile.
pub fn image_tile(title: &str, murl: &str) -> String {
    format!(
        r#"<a class="iusc" m='{{"t":"{}","murl":"{}"}}' href="/images/search?view=detail"></a>"#,
        title, murl
    )
}

/// A Bing image results page made of `tiles`.
pub fn image_page(tiles: &[String]) -> String {
    format!("<html><body>{}</body></html>", tiles.concat())
}

/// A web results page with one `h2 > a` hit per `(title, href)`.
pub fn web_page(hits: &[(&str, &str)]) -> String {
    let body: String = hits
        .iter()
        .map(|(title, href)| format!(r#"<h2><a href="{}">{}</a></h2>"#, href, title))
        .collect();
    format!("<html><body>{}</body></html>", body)
}
