//! Cross-origin configuration for the frontend.

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};

/// CORS configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// The single origin allowed to call the API from a browser.
    #[serde(default = "default_allowed_origin")]
    pub allowed_origin: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: default_allowed_origin(),
        }
    }
}

impl CorsConfig {
    /// The allowed origin as a header value.
    ///
    /// Returns `None` if the origin is not a valid header value.
    #[must_use]
    pub fn origin_header(&self) -> Option<HeaderValue> {
        HeaderValue::from_str(&self.allowed_origin).ok()
    }
}

fn default_allowed_origin() -> String {
    "http://localhost:5173".to_string()
}
