use serde::Deserialize;
use serde_json::{Value, json};

use super::outcome::{error_payload, is_http_success, success_data};
use crate::domain::{ApiKey, UserInfo, UserInfoOutcome};

const USER_INFO_FALLBACK: &str = "failed to fetch user info";

pub fn encode_user_info(api_key: &ApiKey, request: &UserInfo) -> Value {
    json!({
        "api_key": api_key.as_str(),
        "username": request.username().as_str(),
    })
}

#[derive(Debug, Default, Deserialize)]
struct UserProbe {
    #[serde(default)]
    status: Option<Value>,
    #[serde(default)]
    info: Option<Value>,
    #[serde(default)]
    message: Option<String>,
}

/// Normalize a user-info response: upstream `info` becomes `user`, but only
/// when `status` is the boolean `true` (a truthy string does not count).
pub fn decode_user_info_outcome(status: u16, body: &str) -> UserInfoOutcome {
    if !is_http_success(status) {
        return UserInfoOutcome::Rejected {
            error: error_payload(body),
            status,
        };
    }

    let data = success_data(body);
    let probe: UserProbe = serde_json::from_value(data.clone()).unwrap_or_default();

    match (probe.status, probe.info) {
        (Some(Value::Bool(true)), Some(user)) => UserInfoOutcome::Found { user, data, status },
        _ => UserInfoOutcome::Failed {
            error: probe
                .message
                .unwrap_or_else(|| USER_INFO_FALLBACK.to_owned()),
            data,
            status,
        },
    }
}
