//! Test doubles for the capability traits.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::StatusCode;
use serde_json::Value;

use crate::core::service::{Navigator, Notifier, Page, Transport};
use crate::services::api::transport::{HttpRequest, HttpResponse, TransportError};

#[derive(Clone)]
enum Reply {
    Respond {
        status: StatusCode,
        body: Vec<u8>,
        token: Option<String>,
        delay: Option<Duration>,
    },
    Fail(String),
}

/// Transport answering from a per-path script and recording what was sent.
/// Unscripted paths answer 404.
#[derive(Default)]
pub struct MockTransport {
    replies: Mutex<HashMap<String, Reply>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn script(&self, path: &str, reply: Reply) {
        self.replies.lock().insert(path.to_string(), reply);
    }

    pub fn respond(&self, path: &str, status: StatusCode, body: Value) {
        self.respond_raw(path, status, body.to_string().as_bytes());
    }

    pub fn respond_raw(&self, path: &str, status: StatusCode, body: &[u8]) {
        self.script(
            path,
            Reply::Respond {
                status,
                body: body.to_vec(),
                token: None,
                delay: None,
            },
        );
    }

    pub fn respond_with_token(&self, path: &str, status: StatusCode, body: Value, token: &str) {
        self.script(
            path,
            Reply::Respond {
                status,
                body: body.to_string().into_bytes(),
                token: Some(token.to_string()),
                delay: None,
            },
        );
    }

    pub fn respond_after(&self, path: &str, status: StatusCode, body: Value, delay: Duration) {
        self.script(
            path,
            Reply::Respond {
                status,
                body: body.to_string().into_bytes(),
                token: None,
                delay: Some(delay),
            },
        );
    }

    pub fn fail(&self, path: &str, message: &str) {
        self.script(path, Reply::Fail(message.to_string()));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let reply = self.replies.lock().get(&request.path).cloned();
        self.requests.lock().push(request);

        match reply {
            Some(Reply::Respond {
                status,
                body,
                token,
                delay,
            }) => {
                if let Some(delay) = delay {
                    tokio::time::sleep(delay).await;
                }
                let mut headers = HeaderMap::new();
                if let Some(token) = token {
                    headers.insert(AUTHORIZATION, HeaderValue::from_str(&token).unwrap());
                }
                Ok(HttpResponse {
                    status,
                    headers,
                    body,
                })
            }
            Some(Reply::Fail(message)) => Err(TransportError(message)),
            None => Ok(HttpResponse {
                status: StatusCode::NOT_FOUND,
                headers: HeaderMap::new(),
                body: Vec::new(),
            }),
        }
    }
}

/// Navigator that records pushes without resolving routes.
pub struct RecordingNavigator {
    current: Mutex<String>,
    pushed: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn at(full_path: &str) -> Self {
        Self {
            current: Mutex::new(full_path.to_string()),
            pushed: Mutex::new(Vec::new()),
        }
    }

    pub fn set_current(&self, full_path: &str) {
        *self.current.lock() = full_path.to_string();
    }

    pub fn pushed(&self) -> Vec<String> {
        self.pushed.lock().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn push(&self, target: &str) {
        self.pushed.lock().push(target.to_string());
        *self.current.lock() = target.to_string();
    }

    fn current_full_path(&self) -> String {
        self.current.lock().clone()
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    errors: Mutex<Vec<(String, Duration)>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.errors.lock().iter().map(|(m, _)| m.clone()).collect()
    }

    pub fn durations(&self) -> Vec<Duration> {
        self.errors.lock().iter().map(|(_, d)| *d).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn error(&self, message: &str, duration: Duration) {
        self.errors.lock().push((message.to_string(), duration));
    }
}

/// Page events in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    Title(String),
    LoadingStarted,
    LoadingFinished,
    ScrollTo(String),
}

#[derive(Default)]
pub struct RecordingPage {
    events: Mutex<Vec<PageEvent>>,
}

impl RecordingPage {
    pub fn events(&self) -> Vec<PageEvent> {
        self.events.lock().clone()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }

    pub fn loading_events(&self) -> Vec<PageEvent> {
        self.events()
            .into_iter()
            .filter(|e| matches!(e, PageEvent::LoadingStarted | PageEvent::LoadingFinished))
            .collect()
    }
}

impl Page for RecordingPage {
    fn set_title(&self, title: &str) {
        self.events.lock().push(PageEvent::Title(title.to_string()));
    }

    fn start_loading(&self) {
        self.events.lock().push(PageEvent::LoadingStarted);
    }

    fn finish_loading(&self) {
        self.events.lock().push(PageEvent::LoadingFinished);
    }

    fn scroll_into_view_after_paint(&self, anchor: &str) {
        self.events.lock().push(PageEvent::ScrollTo(anchor.to_string()));
    }
}
