use std::time::Instant;

use reqwest::Method;
use serde::Serialize;
use thiserror::Error;

use crate::auth::AuthMethod;

use super::response::HttpResponse;

/// Errors raised by the HTTP transport. Network failures are fatal to the
/// run; there are no retries.
#[derive(Debug, Error)]
pub enum HttpError {
    #[error("invalid URL `{0}`")]
    InvalidUrl(String),
    #[error("Basic auth username cannot be empty")]
    EmptyUsername,
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// HTTP client bound to a single booking API base URL. Replaces a global
/// mutable base URL with an explicit context passed to each operation.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: reqwest::Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, HttpError> {
        // A trailing slash makes relative joins append instead of replacing
        // the last path segment.
        let mut normalized = base_url.trim_end_matches('/').to_string();
        normalized.push('/');
        let base_url = reqwest::Url::parse(&normalized)
            .map_err(|e| HttpError::InvalidUrl(format!("{base_url}: {e}")))?;

        Ok(Self {
            client: reqwest::Client::new(),
            base_url,
        })
    }

    /// Unauthenticated GET.
    pub async fn get(&self, route: &str) -> Result<HttpResponse, HttpError> {
        self.send::<()>(Method::GET, route, None, &AuthMethod::None)
            .await
    }

    /// Unauthenticated POST with a JSON body.
    pub async fn post_json<B: Serialize>(
        &self,
        route: &str,
        body: &B,
    ) -> Result<HttpResponse, HttpError> {
        self.send(Method::POST, route, Some(body), &AuthMethod::None)
            .await
    }

    /// PUT with a JSON body and the given authentication.
    pub async fn put_json<B: Serialize>(
        &self,
        route: &str,
        body: &B,
        auth: &AuthMethod,
    ) -> Result<HttpResponse, HttpError> {
        self.send(Method::PUT, route, Some(body), auth).await
    }

    /// DELETE with the given authentication.
    pub async fn delete(&self, route: &str, auth: &AuthMethod) -> Result<HttpResponse, HttpError> {
        self.send::<()>(Method::DELETE, route, None, auth).await
    }

    async fn send<B: Serialize>(
        &self,
        method: Method,
        route: &str,
        body: Option<&B>,
        auth: &AuthMethod,
    ) -> Result<HttpResponse, HttpError> {
        let url = self
            .base_url
            .join(route)
            .map_err(|e| HttpError::InvalidUrl(format!("{route}: {e}")))?;

        let mut req_builder = self.client.request(method, url);
        req_builder = apply_auth(req_builder, auth)?;
        if let Some(body) = body {
            req_builder = req_builder.json(body);
        }

        let started = Instant::now();
        let response = req_builder.send().await?;
        let elapsed = started.elapsed().as_millis();

        let status = response.status();
        let bytes = response.bytes().await?;
        let body = String::from_utf8_lossy(&bytes).into_owned();

        Ok(HttpResponse {
            status,
            duration_ms: elapsed,
            body,
        })
    }
}

fn apply_auth(
    req_builder: reqwest::RequestBuilder,
    auth: &AuthMethod,
) -> Result<reqwest::RequestBuilder, HttpError> {
    match auth {
        AuthMethod::None => Ok(req_builder),
        AuthMethod::Basic { username, password } => {
            if username.trim().is_empty() {
                return Err(HttpError::EmptyUsername);
            }
            Ok(req_builder.basic_auth(username.trim(), Some(password.trim())))
        }
    }
}
