//! # Error Classifier
//!
//! Decides, for every failed exchange, what the pipeline does about it and
//! whether the caller ever sees the failure.
//!
//! | Failure                 | Recovery                                   | Disposition |
//! |-------------------------|--------------------------------------------|-------------|
//! | no response             | notify raw message                         | terminate   |
//! | 401                     | sign out, go to login with `redirect`      | terminate   |
//! | 403                     | go to the forbidden page                   | terminate   |
//! | 500                     | notify `info(code: n)` or raw message      | propagate   |
//! | anything else           | nothing                                    | propagate   |
//!
//! [`classify`] is pure; [`crate::services::api::ApiClient`] applies the
//! recovery through its `SessionStore`, `Navigator` and `Notifier`.

use std::time::Duration;

use reqwest::StatusCode;

use crate::core::error::{ApiError, HttpFailure};

/// How long failure notifications stay on screen.
pub const NOTICE_DURATION: Duration = Duration::from_secs(5);

/// What the caller observes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Fully handled by the pipeline; the caller's continuation never runs.
    Terminate,
    /// Returned to the caller as an error.
    Propagate,
}

/// Side effect the pipeline performs before settling the disposition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recovery {
    /// Show a transient error notification.
    Notify { message: String, duration: Duration },
    /// Clear the session and send the user to the login page, remembering
    /// where they were.
    SignOut,
    /// Send the user to the forbidden page.
    ShowForbidden,
    /// Leave it to the caller.
    Nothing,
}

/// Outcome of classifying one failure.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub error: ApiError,
    pub recovery: Recovery,
    pub disposition: Disposition,
}

/// Classify a failed exchange.
pub fn classify(failure: HttpFailure) -> Verdict {
    let Some(status) = failure.status else {
        return Verdict {
            recovery: Recovery::Notify {
                message: failure.message.clone(),
                duration: NOTICE_DURATION,
            },
            error: ApiError::TransportUnreachable(failure),
            disposition: Disposition::Terminate,
        };
    };

    match status {
        StatusCode::UNAUTHORIZED => Verdict {
            error: ApiError::Unauthenticated(failure),
            recovery: Recovery::SignOut,
            disposition: Disposition::Terminate,
        },
        StatusCode::FORBIDDEN => Verdict {
            error: ApiError::Forbidden(failure),
            recovery: Recovery::ShowForbidden,
            disposition: Disposition::Terminate,
        },
        StatusCode::INTERNAL_SERVER_ERROR => {
            let message = failure
                .body
                .as_ref()
                .and_then(|body| body.describe())
                .unwrap_or_else(|| failure.message.clone());
            Verdict {
                error: ApiError::ServerFault(failure),
                recovery: Recovery::Notify {
                    message,
                    duration: NOTICE_DURATION,
                },
                disposition: Disposition::Propagate,
            }
        }
        _ => Verdict {
            error: ApiError::OtherHttpFailure(failure),
            recovery: Recovery::Nothing,
            disposition: Disposition::Propagate,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure(status: StatusCode, body: &str) -> HttpFailure {
        HttpFailure::from_status(status, body.as_bytes())
    }

    #[test]
    fn test_no_response_notifies_and_terminates() {
        let verdict = classify(HttpFailure::unreachable("error sending request: connection refused"));

        assert_eq!(verdict.disposition, Disposition::Terminate);
        assert_eq!(
            verdict.recovery,
            Recovery::Notify {
                message: "error sending request: connection refused".to_string(),
                duration: NOTICE_DURATION,
            }
        );
        assert!(matches!(verdict.error, ApiError::TransportUnreachable(_)));
    }

    #[test]
    fn test_unauthorized_signs_out() {
        let verdict = classify(failure(StatusCode::UNAUTHORIZED, ""));

        assert_eq!(verdict.disposition, Disposition::Terminate);
        assert_eq!(verdict.recovery, Recovery::SignOut);
        assert!(matches!(verdict.error, ApiError::Unauthenticated(_)));
    }

    #[test]
    fn test_forbidden_shows_forbidden_page() {
        let verdict = classify(failure(StatusCode::FORBIDDEN, r#"{"code": 403}"#));

        assert_eq!(verdict.disposition, Disposition::Terminate);
        assert_eq!(verdict.recovery, Recovery::ShowForbidden);
        assert!(matches!(verdict.error, ApiError::Forbidden(_)));
    }

    #[test]
    fn test_server_fault_uses_envelope_message() {
        let verdict = classify(failure(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"code": 1001, "info": "task not found"}"#,
        ));

        assert_eq!(verdict.disposition, Disposition::Propagate);
        assert_eq!(
            verdict.recovery,
            Recovery::Notify {
                message: "task not found(code: 1001)".to_string(),
                duration: NOTICE_DURATION,
            }
        );
        assert_eq!(verdict.error.code(), Some(1001));
    }

    #[test]
    fn test_server_fault_without_info_uses_raw_message() {
        for body in [r#"{"code": 1001}"#, "", "Internal Server Error"] {
            let verdict = classify(failure(StatusCode::INTERNAL_SERVER_ERROR, body));
            assert_eq!(
                verdict.recovery,
                Recovery::Notify {
                    message: "Request failed with status code 500".to_string(),
                    duration: NOTICE_DURATION,
                },
                "body: {body:?}"
            );
        }
    }

    #[test]
    fn test_other_statuses_propagate_silently() {
        for status in [
            StatusCode::BAD_REQUEST,
            StatusCode::NOT_FOUND,
            StatusCode::BAD_GATEWAY,
            StatusCode::SERVICE_UNAVAILABLE,
        ] {
            let verdict = classify(failure(status, ""));
            assert_eq!(verdict.disposition, Disposition::Propagate);
            assert_eq!(verdict.recovery, Recovery::Nothing);
            assert_eq!(verdict.error.status(), Some(status));
            assert!(matches!(verdict.error, ApiError::OtherHttpFailure(_)));
        }
    }
}
