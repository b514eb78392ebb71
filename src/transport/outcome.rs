use serde_json::Value;

use crate::domain::CallOutcome;

/// Whether `status` is a 2xx HTTP status.
pub(crate) fn is_http_success(status: u16) -> bool {
    (200..=299).contains(&status)
}

/// Body of a successful response: the parsed JSON, or `Value::Null` when the
/// body is not valid JSON.
pub(crate) fn success_data(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or(Value::Null)
}

/// Body of a failed response: the parsed JSON when possible, otherwise the
/// raw body preserved as a JSON string.
pub(crate) fn error_payload(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_owned()))
}

/// Normalize an HTTP response into the passthrough outcome shape shared by
/// the send operations, device disconnect, device info and device creation.
pub fn decode_call_outcome(status: u16, body: &str) -> CallOutcome {
    if is_http_success(status) {
        CallOutcome::Success {
            data: success_data(body),
            status,
        }
    } else {
        CallOutcome::Rejected {
            error: error_payload(body),
            status,
        }
    }
}
