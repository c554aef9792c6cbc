//! HTTP response wrappers.

use std::collections::HashMap;

use reqwest::StatusCode;

/// HEAD response wrapper (no body, just headers).
///
/// Header names are stored lower-cased.
#[derive(Debug, Clone)]
pub struct HeadResponse {
    pub status: StatusCode,
    pub headers: HashMap<String, String>,
}

impl HeadResponse {
    /// Build a response from a status and header pairs.
    pub fn new<I, K, V>(status: StatusCode, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            status,
            headers: headers
                .into_iter()
                .map(|(k, v)| (Into::<String>::into(k).to_ascii_lowercase(), v.into()))
                .collect(),
        }
    }

    /// Get the Content-Type header.
    pub fn content_type(&self) -> Option<&str> {
        self.headers.get("content-type").map(|s| s.as_str())
    }

    /// A `200 OK` whose Content-Type mentions `application/pdf`.
    pub fn is_pdf(&self) -> bool {
        self.status == StatusCode::OK
            && self
                .content_type()
                .is_some_and(|ct| ct.contains("application/pdf"))
    }
}
