use serde::{Deserialize, Serialize};

/// Uniform result wrapper returned by every endpoint.
///
/// `code` is the application status reported by the server and is unrelated to
/// the HTTP status of the exchange. `info` carries a human-readable message and
/// `data` the typed payload; both may be absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResponseEnvelope<T> {
    pub code: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ResponseEnvelope<T> {
    /// Successful envelope (`code: 0`) carrying `data`.
    pub fn ok(data: T) -> Self {
        Self {
            code: 0,
            info: None,
            data: Some(data),
        }
    }

    /// Envelope describing a failure, without payload.
    pub fn failure(code: i32, info: impl Into<String>) -> Self {
        Self {
            code,
            info: Some(info.into()),
            data: None,
        }
    }

    /// Message in the `"<info>(code: <code>)"` form shown to users, if `info` is set.
    pub fn describe(&self) -> Option<String> {
        self.info
            .as_ref()
            .map(|info| format!("{}(code: {})", info, self.code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_without_optional_fields() {
        let envelope: ResponseEnvelope<String> = serde_json::from_str(r#"{"code": 0}"#).unwrap();
        assert_eq!(envelope.code, 0);
        assert_eq!(envelope.info, None);
        assert_eq!(envelope.data, None);
    }

    #[test]
    fn test_encode_omits_missing_fields() {
        let envelope: ResponseEnvelope<String> = ResponseEnvelope {
            code: 3,
            info: None,
            data: None,
        };
        assert_eq!(serde_json::to_value(&envelope).unwrap(), json!({ "code": 3 }));
    }

    #[test]
    fn test_missing_code_is_rejected() {
        let result = serde_json::from_str::<ResponseEnvelope<String>>(r#"{"info": "boom"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_describe() {
        let envelope: ResponseEnvelope<()> = ResponseEnvelope::failure(1001, "task not found");
        assert_eq!(envelope.describe().as_deref(), Some("task not found(code: 1001)"));

        let envelope = ResponseEnvelope::ok(1);
        assert_eq!(envelope.describe(), None);
    }
}
