//! REST client for the `/api/categories` resource.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! meaningful in the browser.
//!
//! DESIGN
//! ======
//! Pages talk to the backend through the [`CategoryService`] trait so the
//! list reconciliation in `state::categories` can run against an in-memory
//! double in tests. Each method is a direct proxy: no retries, no timeout
//! policy, no shape validation beyond the JSON decode.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as `Err(String)`; callers log them and keep whatever
//! state they already had.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Category, Word};

/// Default API prefix the server mounts the REST routes under.
pub const DEFAULT_API_BASE: &str = "/api";

/// Remote operations on categories (and the read-only word listing).
#[allow(async_fn_in_trait)]
pub trait CategoryService {
    /// `GET /categories` — every category.
    async fn list(&self) -> Result<Vec<Category>, String>;
    /// `GET /categories/{name}` — one category.
    async fn get(&self, name: &str) -> Result<Category, String>;
    /// `POST /categories` — create and return the stored category.
    async fn create(&self, category: &Category) -> Result<Category, String>;
    /// `DELETE /categories/{name}` — remove by name.
    async fn remove(&self, name: &str) -> Result<(), String>;
    /// `GET /categories/{name}/words` — stored words of one category.
    async fn list_words(&self, name: &str) -> Result<Vec<Word>, String>;
}

/// [`CategoryService`] backed by browser `fetch`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpCategoryService {
    base: String,
}

impl HttpCategoryService {
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self { base: base.trim_end_matches('/').to_owned() }
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }
}

impl Default for HttpCategoryService {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn categories_endpoint(base: &str) -> String {
    format!("{base}/categories")
}

/// `segment` must already be percent-encoded.
#[cfg(any(test, feature = "hydrate"))]
fn category_endpoint(base: &str, segment: &str) -> String {
    format!("{base}/categories/{segment}")
}

#[cfg(any(test, feature = "hydrate"))]
fn words_endpoint(base: &str, segment: &str) -> String {
    format!("{base}/categories/{segment}/words")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(operation: &str, status: u16) -> String {
    format!("{operation} failed: {status}")
}

/// Percent-encode `name` as a single path segment. Leaves the same
/// characters alone as `encodeURIComponent`: ASCII alphanumerics and
/// `-_.!~*'()`.
#[must_use]
pub fn encode_path_segment(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for byte in name.bytes() {
        if byte.is_ascii_alphanumeric() || b"-_.!~*'()".contains(&byte) {
            out.push(char::from(byte));
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

impl CategoryService for HttpCategoryService {
    async fn list(&self) -> Result<Vec<Category>, String> {
        #[cfg(feature = "hydrate")]
        {
            let url = categories_endpoint(&self.base);
            let resp = gloo_net::http::Request::get(&url)
                .send()
                .await
                .map_err(|e| e.to_string())?;
            if !resp.ok() {
                return Err(request_failed_message("list categories", resp.status()));
            }
            resp.json::<Vec<Category>>().await.map_err(|e| e.to_string())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err("not available on server".to_owned())
        }
    }

    async fn get(&self, name: &str) -> Result<Category, String> {
        #[cfg(feature = "hydrate")]
        {
            let url = category_endpoint(&self.base, &encode_path_segment(name));
            let resp = gloo_net::http::Request::get(&url)
                .send()
                .await
                .map_err(|e| e.to_string())?;
            if !resp.ok() {
                return Err(request_failed_message("get category", resp.status()));
            }
            resp.json::<Category>().await.map_err(|e| e.to_string())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = name;
            Err("not available on server".to_owned())
        }
    }

    async fn create(&self, category: &Category) -> Result<Category, String> {
        #[cfg(feature = "hydrate")]
        {
            let url = categories_endpoint(&self.base);
            let resp = gloo_net::http::Request::post(&url)
                .json(category)
                .map_err(|e| e.to_string())?
                .send()
                .await
                .map_err(|e| e.to_string())?;
            if !resp.ok() {
                return Err(request_failed_message("create category", resp.status()));
            }
            resp.json::<Category>().await.map_err(|e| e.to_string())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = category;
            Err("not available on server".to_owned())
        }
    }

    async fn remove(&self, name: &str) -> Result<(), String> {
        #[cfg(feature = "hydrate")]
        {
            let url = category_endpoint(&self.base, &encode_path_segment(name));
            let resp = gloo_net::http::Request::delete(&url)
                .send()
                .await
                .map_err(|e| e.to_string())?;
            if !resp.ok() {
                return Err(request_failed_message("delete category", resp.status()));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = name;
            Err("not available on server".to_owned())
        }
    }

    async fn list_words(&self, name: &str) -> Result<Vec<Word>, String> {
        #[cfg(feature = "hydrate")]
        {
            let url = words_endpoint(&self.base, &encode_path_segment(name));
            let resp = gloo_net::http::Request::get(&url)
                .send()
                .await
                .map_err(|e| e.to_string())?;
            if !resp.ok() {
                return Err(request_failed_message("list words", resp.status()));
            }
            resp.json::<Vec<Word>>().await.map_err(|e| e.to_string())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = name;
            Err("not available on server".to_owned())
        }
    }
}
