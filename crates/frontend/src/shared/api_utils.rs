//! API utilities for frontend-backend communication
//!
//! [`RestResource`] is the only place that talks HTTP. Every screen builds one
//! from the configured base URL and its resource path (`products`, `orders`, ...).

use contracts::shared::{ListQuery, ListResponse};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    /// HTTP 409, the target is referenced by another entity
    #[error("conflict: resource is referenced elsewhere")]
    Conflict,

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("invalid response: {0}")]
    Parse(String),

    #[error("invalid request: {0}")]
    Request(String),
}

impl ApiError {
    /// Classify an HTTP status. `None` for 2xx.
    pub fn from_status(status: u16) -> Option<ApiError> {
        match status {
            200..=299 => None,
            409 => Some(ApiError::Conflict),
            other => Some(ApiError::Status(other)),
        }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, ApiError::Conflict)
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Parse(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server. Used when no base URL is configured.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Typed client for one REST collection: `{base}/{resource}`
#[derive(Debug)]
pub struct RestResource<T> {
    base: String,
    resource: &'static str,
    _item: PhantomData<fn() -> T>,
}

impl<T> Clone for RestResource<T> {
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
            resource: self.resource,
            _item: PhantomData,
        }
    }
}

impl<T> RestResource<T> {
    pub fn new(base: impl Into<String>, resource: &'static str) -> Self {
        Self {
            base: base.into().trim_end_matches('/').to_string(),
            resource,
            _item: PhantomData,
        }
    }

    pub fn resource(&self) -> &'static str {
        self.resource
    }

    pub fn collection_url(&self) -> String {
        format!("{}/{}", self.base, self.resource)
    }

    pub fn item_url(&self, id: &str) -> String {
        format!("{}/{}", self.collection_url(), urlencoding::encode(id))
    }

    /// `{base}/{resource}?page={index + 1}&limit={size}`
    pub fn page_url(&self, query: &ListQuery) -> Result<String, ApiError> {
        let qs = serde_qs::to_string(query).map_err(|e| ApiError::Request(e.to_string()))?;
        Ok(format!("{}?{}", self.collection_url(), qs))
    }
}

impl<T: DeserializeOwned> RestResource<T> {
    /// One page of the collection
    pub async fn list(&self, query: ListQuery) -> Result<ListResponse<T>, ApiError> {
        let url = self.page_url(&query)?;
        let response = Request::get(&url).send().await?;
        read_json(response).await
    }

    /// Whole collection, unpaginated
    pub async fn all(&self) -> Result<Vec<T>, ApiError> {
        let response = Request::get(&self.collection_url()).send().await?;
        let body: ListResponse<T> = read_json(response).await?;
        Ok(body.data)
    }

    pub async fn get(&self, id: &str) -> Result<T, ApiError> {
        let response = Request::get(&self.item_url(id)).send().await?;
        read_json(response).await
    }
}

impl<T> RestResource<T> {
    pub async fn create<B: Serialize>(&self, body: &B) -> Result<(), ApiError> {
        let request = Request::post(&self.collection_url())
            .json(body)
            .map_err(|e| ApiError::Request(e.to_string()))?;
        expect_success(&request.send().await?)
    }

    pub async fn update<B: Serialize>(&self, id: &str, body: &B) -> Result<(), ApiError> {
        let request = Request::patch(&self.item_url(id))
            .json(body)
            .map_err(|e| ApiError::Request(e.to_string()))?;
        expect_success(&request.send().await?)
    }

    pub async fn create_multipart(&self, form: web_sys::FormData) -> Result<(), ApiError> {
        let request = Request::post(&self.collection_url())
            .body(form)
            .map_err(|e| ApiError::Request(e.to_string()))?;
        expect_success(&request.send().await?)
    }

    pub async fn update_multipart(&self, id: &str, form: web_sys::FormData) -> Result<(), ApiError> {
        let request = Request::patch(&self.item_url(id))
            .body(form)
            .map_err(|e| ApiError::Request(e.to_string()))?;
        expect_success(&request.send().await?)
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let response = Request::delete(&self.item_url(id)).send().await?;
        expect_success(&response)
    }
}

/// Build a `multipart/form-data` body from text fields and an optional file
pub fn build_form_data(
    fields: &[(&str, String)],
    file: Option<&web_sys::File>,
) -> Result<web_sys::FormData, ApiError> {
    let form = web_sys::FormData::new().map_err(|e| ApiError::Request(format!("{:?}", e)))?;
    for (name, value) in fields {
        form.append_with_str(name, value)
            .map_err(|e| ApiError::Request(format!("{:?}", e)))?;
    }
    if let Some(file) = file {
        form.append_with_blob_and_filename("file", file, &file.name())
            .map_err(|e| ApiError::Request(format!("{:?}", e)))?;
    }
    Ok(form)
}

fn expect_success(response: &Response) -> Result<(), ApiError> {
    match ApiError::from_status(response.status()) {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

async fn read_json<R: DeserializeOwned>(response: Response) -> Result<R, ApiError> {
    expect_success(&response)?;
    response
        .json::<R>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::Product;

    fn products() -> RestResource<Product> {
        RestResource::new("http://localhost:3000/", "products")
    }

    #[test]
    fn test_status_classification() {
        assert_eq!(ApiError::from_status(200), None);
        assert_eq!(ApiError::from_status(204), None);
        assert_eq!(ApiError::from_status(409), Some(ApiError::Conflict));
        assert_eq!(ApiError::from_status(404), Some(ApiError::Status(404)));
        assert_eq!(ApiError::from_status(500), Some(ApiError::Status(500)));
        assert!(ApiError::Conflict.is_conflict());
        assert!(!ApiError::Status(400).is_conflict());
    }

    #[test]
    fn test_collection_and_item_urls() {
        let r = products();
        assert_eq!(r.collection_url(), "http://localhost:3000/products");
        assert_eq!(r.item_url("abc123"), "http://localhost:3000/products/abc123");
        assert_eq!(r.item_url("a/b"), "http://localhost:3000/products/a%2Fb");
    }

    #[test]
    fn test_page_url_is_one_based() {
        let r = products();
        let url = r.page_url(&ListQuery::for_page(0, 10)).unwrap();
        assert_eq!(url, "http://localhost:3000/products?page=1&limit=10");

        let url = r.page_url(&ListQuery::for_page(2, 25)).unwrap();
        assert_eq!(url, "http://localhost:3000/products?page=3&limit=25");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ApiError::Status(500).to_string(), "unexpected status 500");
        assert_eq!(
            ApiError::Network("offline".into()).to_string(),
            "network error: offline"
        );
    }
}
