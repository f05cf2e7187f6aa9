//! # System Endpoints

use shared::{ResponseEnvelope, SystemState};

use super::client::{ApiClient, Outcome};
use super::transport::HttpRequest;
use crate::core::error::ApiError;

const CHECK_STATE_PATH: &str = "/system/check-state";

/// Whether the server still needs initialising (`fresh`).
pub async fn check_state(client: &ApiClient) -> Result<SystemState, ApiError> {
    let envelope: ResponseEnvelope<SystemState> = client.get(CHECK_STATE_PATH, &()).await?;
    state_of(envelope)
}

/// Like [`check_state`], but always settles.
///
/// A terminated call (server unreachable, 401, 403) comes back as `Err` after
/// its recovery has run, so startup code can continue offline.
pub async fn try_check_state(client: &ApiClient) -> Result<SystemState, ApiError> {
    match client.try_request(HttpRequest::get(CHECK_STATE_PATH)).await {
        Outcome::Completed(envelope) => state_of(envelope),
        Outcome::Failed(e) | Outcome::Terminated(e) => Err(e),
    }
}

fn state_of(envelope: ResponseEnvelope<SystemState>) -> Result<SystemState, ApiError> {
    envelope
        .data
        .ok_or_else(|| ApiError::Decode("check-state response carried no state".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{MemoryStorage, SessionStore};
    use crate::testing::{MockTransport, RecordingNavigator, RecordingNotifier};
    use reqwest::StatusCode;
    use serde_json::json;
    use std::sync::Arc;

    fn client(transport: Arc<MockTransport>, notifier: Arc<RecordingNotifier>) -> ApiClient {
        ApiClient::new(
            transport,
            SessionStore::hydrate(Arc::new(MemoryStorage::new())),
            Arc::new(RecordingNavigator::at("/")),
            notifier,
        )
    }

    #[tokio::test]
    async fn test_check_state() {
        let transport = Arc::new(MockTransport::new());
        transport.respond(CHECK_STATE_PATH, StatusCode::OK, json!({ "code": 0, "data": { "fresh": true } }));
        let client = client(transport, Arc::new(RecordingNotifier::default()));

        assert_eq!(check_state(&client).await.unwrap(), SystemState { fresh: true });
        assert_eq!(try_check_state(&client).await.unwrap(), SystemState { fresh: true });
    }

    #[tokio::test]
    async fn test_try_check_state_settles_when_unreachable() {
        let transport = Arc::new(MockTransport::new());
        transport.fail(CHECK_STATE_PATH, "connection refused");
        let notifier = Arc::new(RecordingNotifier::default());
        let client = client(transport, notifier.clone());

        let result = tokio::time::timeout(
            std::time::Duration::from_millis(200),
            try_check_state(&client),
        )
        .await
        .expect("settles");

        assert!(matches!(result, Err(ApiError::TransportUnreachable(_))));
        assert_eq!(notifier.messages(), vec!["connection refused".to_string()]);
    }

    #[tokio::test]
    async fn test_missing_state_is_decode_error() {
        let transport = Arc::new(MockTransport::new());
        transport.respond(CHECK_STATE_PATH, StatusCode::OK, json!({ "code": 0 }));
        let client = client(transport, Arc::new(RecordingNotifier::default()));

        assert!(matches!(try_check_state(&client).await, Err(ApiError::Decode(_))));
    }
}
