//! # API Client
//!
//! The request pipeline every API call goes through.
//!
//! ```text
//! get / post / request
//!        │
//!        ▼
//!  attach "Authorization: Bearer <token>" (if signed in)
//!        │
//!        ▼
//!    Transport ──► response has "Authorization"? ──► SessionStore::rotate_token
//!        │
//!        ├── 2xx ─────────► decode ResponseEnvelope<T> ──► Ok
//!        │
//!        └── failure ─────► classify ──► recovery (notify / sign out / 403 page)
//!                                   │
//!                                   ├── Propagate ──► Err(ApiError)
//!                                   └── Terminate ──► never completes
//! ```
//!
//! ## Terminated calls
//!
//! When a failure is fully handled here (no response, 401, 403) the future
//! returned by [`ApiClient::request`] stays pending forever. Code awaiting it
//! simply never resumes, which is the intended way of dropping any follow-up
//! work such as "show success" or "close the dialog". The pending future holds
//! no resources beyond its own allocation and is freed when the caller drops
//! it. Callers that need to observe termination use
//! [`ApiClient::try_request`].

use std::sync::Arc;
use std::time::Instant;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::ResponseEnvelope;

use super::classifier::{classify, Disposition, Recovery};
use super::transport::{query_pairs, HttpRequest, HttpResponse};
use crate::core::error::{ApiError, HttpFailure};
use crate::core::service::{Navigator, Notifier, Transport};
use crate::router::routes::{login_redirect, FORBIDDEN_PATH, LOGIN_PATH};
use crate::session::SessionStore;

/// Result of a call, including the terminated case.
#[derive(Debug)]
pub enum Outcome<T> {
    /// 2xx with a valid envelope.
    Completed(ResponseEnvelope<T>),
    /// Failure the caller is expected to handle.
    Failed(ApiError),
    /// Failure already handled by the pipeline.
    Terminated(ApiError),
}

impl<T> Outcome<T> {
    pub fn is_terminated(&self) -> bool {
        matches!(self, Outcome::Terminated(_))
    }
}

/// Authenticated API client.
///
/// Cheap to clone; clones share the transport and the session.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    session: SessionStore,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
}

impl ApiClient {
    pub fn new(
        transport: Arc<dyn Transport>,
        session: SessionStore,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            transport,
            session,
            navigator,
            notifier,
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// `GET path?query`. `query` must serialize to an object (or `()`).
    pub async fn get<T, Q>(&self, path: &str, query: &Q) -> Result<ResponseEnvelope<T>, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let value = serde_json::to_value(query).map_err(|e| ApiError::Encode(e.to_string()))?;
        let query = query_pairs(&value).map_err(ApiError::Encode)?;
        self.request(HttpRequest::get(path).with_query(query)).await
    }

    /// `POST path` with a JSON body. A body serializing to `null` (e.g. `&()`)
    /// is sent without payload.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<ResponseEnvelope<T>, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        let mut request = HttpRequest::post(path);
        if !body.is_null() {
            request = request.with_body(body);
            request
                .headers
                .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        self.request(request).await
    }

    /// Send a fully specified request.
    ///
    /// Never completes when the failure was terminal (see the module docs).
    pub async fn request<T>(&self, request: HttpRequest) -> Result<ResponseEnvelope<T>, ApiError>
    where
        T: DeserializeOwned,
    {
        match self.try_request(request).await {
            Outcome::Completed(envelope) => Ok(envelope),
            Outcome::Failed(error) => Err(error),
            Outcome::Terminated(error) => {
                tracing::debug!(error = %error, "Request terminated, continuation suppressed");
                futures::future::pending().await
            }
        }
    }

    /// Send a request and report every outcome, including termination.
    ///
    /// Recovery actions (notification, sign-out, redirect) have already run
    /// when this returns `Failed` or `Terminated`.
    #[tracing::instrument(
        name = "api_request",
        skip(self, request),
        fields(
            request_id = %uuid::Uuid::new_v4(),
            method = %request.method,
            path = %request.path,
        )
    )]
    pub async fn try_request<T>(&self, mut request: HttpRequest) -> Outcome<T>
    where
        T: DeserializeOwned,
    {
        self.authorize(&mut request.headers);
        let start = Instant::now();

        let failure = match self.transport.send(request).await {
            Ok(response) => {
                self.absorb_rotation(&response.headers);
                let duration_ms = start.elapsed().as_millis() as u64;

                if response.status.is_success() {
                    tracing::debug!(status = response.status.as_u16(), duration_ms, "Request finished");
                    return match decode(&response) {
                        Ok(envelope) => Outcome::Completed(envelope),
                        Err(error) => {
                            tracing::warn!(error = %error, "Response was not a valid envelope");
                            Outcome::Failed(error)
                        }
                    };
                }

                tracing::warn!(status = response.status.as_u16(), duration_ms, "Request failed");
                HttpFailure::from_status(response.status, &response.body)
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    duration_ms = start.elapsed().as_millis() as u64,
                    "No response received"
                );
                HttpFailure::unreachable(e.0)
            }
        };

        let verdict = classify(failure);
        self.recover(verdict.recovery);

        match verdict.disposition {
            Disposition::Terminate => Outcome::Terminated(verdict.error),
            Disposition::Propagate => Outcome::Failed(verdict.error),
        }
    }

    fn authorize(&self, headers: &mut HeaderMap) {
        let Some(token) = self.session.token() else {
            return;
        };
        match HeaderValue::from_str(&format!("Bearer {}", token)) {
            Ok(value) => {
                headers.insert(AUTHORIZATION, value);
            }
            Err(_) => tracing::warn!("Session token is not a valid header value, sending anonymously"),
        }
    }

    fn absorb_rotation(&self, headers: &HeaderMap) {
        let rotated = headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|token| !token.is_empty());

        if let Some(token) = rotated {
            self.session.rotate_token(token);
        }
    }

    fn recover(&self, recovery: Recovery) {
        match recovery {
            Recovery::Notify { message, duration } => self.notifier.error(&message, duration),
            Recovery::SignOut => {
                self.session.logout();
                let current = self.navigator.current_full_path();
                if is_login_route(&current) {
                    tracing::debug!("Already on the login page, not redirecting again");
                    return;
                }
                tracing::info!(redirect = %current, "Session rejected by server, redirecting to login");
                self.navigator.push(&login_redirect(&current));
            }
            Recovery::ShowForbidden => self.navigator.push(FORBIDDEN_PATH),
            Recovery::Nothing => {}
        }
    }
}

fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<ResponseEnvelope<T>, ApiError> {
    serde_json::from_slice(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn is_login_route(full_path: &str) -> bool {
    let path = full_path.split(['?', '#']).next().unwrap_or_default();
    path == LOGIN_PATH
}
