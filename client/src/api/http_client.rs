//! Reqwest-backed implementation of the API port.
//!
//! This adapter owns transport details only: URL building, the cookie jar,
//! CSRF headers, HTTP status mapping, and JSON decoding. Every request future
//! runs through [`to_result`], so a panic while decoding surfaces as
//! [`ApiError::Panicked`] rather than unwinding into the caller.

use std::sync::Arc;

use async_trait::async_trait;
use field_errors::FieldErrors;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::paths::{self, endpoint};
use super::{ApiError, ArticleSummary, Board, NewAraApi, Notification, Page, UserProfile};
use crate::config::ClientConfig;
use crate::cookie::{CSRF_COOKIE, CookieSource};
use crate::outcome::to_result;

/// Header the backend reads the CSRF token from.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// API client that talks to one backend over HTTP.
pub struct HttpApiClient {
    client: Client,
    base_url: Url,
    cookies: Arc<Jar>,
}

impl HttpApiClient {
    /// Build a client from resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(config: &ClientConfig) -> Result<Self, reqwest::Error> {
        let cookies = Arc::new(Jar::default());
        let client = Client::builder()
            .timeout(config.request_timeout())
            .cookie_provider(Arc::clone(&cookies))
            .build()?;
        Ok(Self {
            client,
            base_url: config.api_base_url().clone(),
            cookies,
        })
    }

    /// Store a `Set-Cookie`-style cookie for the backend, for example a
    /// session cookie obtained from the SSO callback.
    pub fn add_cookie(&self, cookie: &str) {
        self.cookies.add_cookie_str(cookie, &self.base_url);
    }

    /// The CSRF token currently held in the cookie jar.
    #[must_use]
    pub fn csrf_token(&self) -> Option<String> {
        self.cookie(CSRF_COOKIE)
    }

    /// URL that starts the SSO login flow and returns to `next` afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] when the URL cannot be built.
    pub fn login_url(&self, next: &str) -> Result<Url, ApiError> {
        let mut url = endpoint(&self.base_url, paths::SSO_LOGIN)?;
        url.query_pairs_mut().append_pair("next", next);
        Ok(url)
    }

    async fn get_json<T>(&self, path: &str, query: &[(&str, String)]) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let url = endpoint(&self.base_url, path)?;
        to_result(async move {
            debug!(%url, "dispatching backend GET");
            let request = self.client.get(url).query(query);
            let body = send(request).await?;
            decode_json(&body)
        })
        .await
    }

    async fn post(&self, path: &str) -> Result<(), ApiError> {
        let url = endpoint(&self.base_url, path)?;
        to_result(async move {
            debug!(%url, "dispatching backend POST");
            let mut request = self.client.post(url);
            if let Some(token) = self.csrf_token() {
                request = request.header(CSRF_HEADER, token);
            }
            send(request).await.map(drop)
        })
        .await
    }
}

impl CookieSource for HttpApiClient {
    fn cookie_string(&self) -> Option<String> {
        self.cookies
            .cookies(&self.base_url)
            .and_then(|header| header.to_str().ok().map(str::to_owned))
    }
}

#[async_trait]
impl NewAraApi for HttpApiClient {
    async fn me(&self) -> Result<UserProfile, ApiError> {
        self.get_json(paths::ME, &[]).await
    }

    async fn boards(&self) -> Result<Vec<Board>, ApiError> {
        self.get_json(paths::BOARDS, &[]).await
    }

    async fn board_articles(
        &self,
        board_id: u64,
        page: u32,
    ) -> Result<Page<ArticleSummary>, ApiError> {
        self.get_json(
            paths::ARTICLES,
            &[
                ("parent_board", board_id.to_string()),
                ("page", page.to_string()),
            ],
        )
        .await
    }

    async fn top_articles(&self, page: u32) -> Result<Page<ArticleSummary>, ApiError> {
        self.get_json(paths::TOP_ARTICLES, &[("page", page.to_string())])
            .await
    }

    async fn notifications(&self, page: u32) -> Result<Page<Notification>, ApiError> {
        self.get_json(paths::NOTIFICATIONS, &[("page", page.to_string())])
            .await
    }

    async fn read_notification(&self, notification_id: u64) -> Result<(), ApiError> {
        self.post(&paths::read_notification(notification_id)).await
    }

    async fn read_all_notifications(&self) -> Result<(), ApiError> {
        self.post(paths::READ_ALL_NOTIFICATIONS).await
    }

    async fn logout(&self, user_id: u64) -> Result<(), ApiError> {
        self.post(&paths::sso_logout(user_id)).await
    }
}

async fn send(request: RequestBuilder) -> Result<Vec<u8>, ApiError> {
    let response = request
        .header(ACCEPT, "application/json")
        .send()
        .await
        .map_err(map_transport_error)?;
    read_body(response).await
}

async fn read_body(response: Response) -> Result<Vec<u8>, ApiError> {
    let status = response.status();
    let body = response.bytes().await.map_err(map_transport_error)?;
    debug!(
        status = status.as_u16(),
        bytes = body.len(),
        "backend responded"
    );
    if status.is_success() {
        Ok(body.to_vec())
    } else {
        Err(map_status_error(status, body.as_ref()))
    }
}

fn decode_json<T>(body: &[u8]) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    serde_json::from_slice(body)
        .map_err(|error| ApiError::decode(format!("invalid JSON payload: {error}")))
}

fn map_transport_error(error: reqwest::Error) -> ApiError {
    if error.is_timeout() {
        ApiError::timeout(error.to_string())
    } else {
        ApiError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> ApiError {
    let validation = if status == StatusCode::BAD_REQUEST {
        validation_message(body)
    } else {
        None
    };
    if let Some(message) = validation {
        return ApiError::validation(message);
    }

    let body_preview = body_preview(body);
    let message = if body_preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), body_preview)
    };

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::unauthorized(message),
        StatusCode::NOT_FOUND => ApiError::not_found(message),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => ApiError::timeout(message),
        _ => ApiError::status(status.as_u16(), message),
    }
}

/// Flattened field errors from a 400 body, when it has that shape.
fn validation_message(body: &[u8]) -> Option<String> {
    let value = serde_json::from_slice(body).ok()?;
    let errors = FieldErrors::from_value(&value).ok()?;
    if errors.is_empty() {
        return None;
    }
    Some(errors.flatten())
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
