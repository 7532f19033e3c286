//! # Enquiry Client
//!
//! One async function per endpoint. Each returns the parsed response body or a
//! [`QueryError::Transport`] carrying the HTTP status (when there was one) and the
//! server's `message` (when the body had one).

use crate::config::QueryProConfig;
use crate::dashboard::EnquiryBackend;
use crate::error::{QueryError, Result};
use crate::model::{Enquiry, EnquiryFields};
use crate::wire::{
    DeleteResponse, ErrorResponse, ListResponse, SingleResponse, UpdateResponse, BASE_PATH,
    EDIT_PATH, INSERT_PATH, LIST_PATH, REMOVE_PATH, UPDATE_PATH,
};
use async_trait::async_trait;
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct EnquiryClient {
    http: reqwest::Client,
    base_url: String,
}

impl EnquiryClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| QueryError::transport(None, format!("cannot build http client: {e}")))?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &QueryProConfig) -> Result<Self> {
        Self::new(&config.api_url, config.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, BASE_PATH, path)
    }

    #[instrument(skip(self))]
    pub async fn fetch_enquiries(&self) -> Result<ListResponse> {
        send(self.http.get(self.url(LIST_PATH))).await
    }

    /// Returns the fields the service stored, as echoed back.
    #[instrument(skip(self, fields))]
    pub async fn create_enquiry(&self, fields: &EnquiryFields) -> Result<EnquiryFields> {
        send(self.http.post(self.url(INSERT_PATH)).json(fields)).await
    }

    #[instrument(skip(self, fields))]
    pub async fn update_enquiry(&self, id: Uuid, fields: &EnquiryFields) -> Result<UpdateResponse> {
        let url = self.url(&format!("{UPDATE_PATH}/{id}"));
        send(self.http.put(url).json(fields)).await
    }

    #[instrument(skip(self))]
    pub async fn delete_enquiry(&self, id: Uuid) -> Result<DeleteResponse> {
        send(self.http.delete(self.url(&format!("{REMOVE_PATH}/{id}")))).await
    }

    #[instrument(skip(self))]
    pub async fn fetch_enquiry_by_id(&self, id: Uuid) -> Result<SingleResponse> {
        send(self.http.get(self.url(&format!("{EDIT_PATH}/{id}")))).await
    }
}

async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T> {
    let resp = request.send().await.map_err(transport_error)?;
    decode(resp).await
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T> {
    let status = resp.status();
    if status.is_success() {
        return resp.json::<T>().await.map_err(transport_error);
    }

    let body = resp.text().await.unwrap_or_default();
    debug!(status = status.as_u16(), body = %body, "request rejected");
    let message = match serde_json::from_str::<ErrorResponse>(&body) {
        Ok(err) => err.message,
        Err(_) if body.trim().is_empty() => status.to_string(),
        Err(_) => body,
    };
    Err(QueryError::transport(Some(status.as_u16()), message))
}

fn transport_error(err: reqwest::Error) -> QueryError {
    QueryError::transport(err.status().map(|s| s.as_u16()), err.to_string())
}

#[async_trait]
impl EnquiryBackend for EnquiryClient {
    async fn list(&self) -> Result<Vec<Enquiry>> {
        Ok(self.fetch_enquiries().await?.enquiry)
    }

    async fn get(&self, id: Uuid) -> Result<Enquiry> {
        Ok(self.fetch_enquiry_by_id(id).await?.enquiry)
    }

    async fn create(&self, fields: &EnquiryFields) -> Result<()> {
        self.create_enquiry(fields).await.map(|_| ())
    }

    async fn update(&self, id: Uuid, fields: &EnquiryFields) -> Result<()> {
        self.update_enquiry(id, fields).await.map(|_| ())
    }

    async fn remove(&self, id: Uuid) -> Result<()> {
        self.delete_enquiry(id).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_dropped_from_base_url() {
        let client = EnquiryClient::new("http://localhost:9191//", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url(), "http://localhost:9191");
        assert_eq!(
            client.url(LIST_PATH),
            "http://localhost:9191/api/enquiry/enquirylist"
        );
    }

    #[tokio::test]
    async fn unreachable_server_is_a_transport_error() {
        // Nothing listens on the discard port.
        let client = EnquiryClient::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
        let err = client.fetch_enquiries().await.unwrap_err();
        assert!(matches!(err, QueryError::Transport { status: None, .. }));
    }
}
