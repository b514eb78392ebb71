use serde::Deserialize;
use serde_json::{Value, json};

use super::outcome::{error_payload, is_http_success, success_data};
use crate::domain::{
    ApiKey, CheckNumber, CheckNumberOutcome, CreateDevice, DeviceInfo, DisconnectDevice,
    GenerateQr, QrOutcome,
};

/// Substring the gateway uses to report an already-paired device. Observed
/// phrasing; matched case-insensitively and deliberately not broadened.
const ALREADY_CONNECTED: &str = "already connected";

const PROCESSING_FALLBACK: &str = "processing";
const SCAN_PROMPT_FALLBACK: &str = "scan the qr code to connect";

pub fn encode_generate_qr(api_key: &ApiKey, request: &GenerateQr) -> Value {
    json!({
        "api_key": api_key.as_str(),
        "device": request.device().as_str(),
        "force": request.force(),
    })
}

pub fn encode_disconnect_device(api_key: &ApiKey, request: &DisconnectDevice) -> Value {
    json!({
        "api_key": api_key.as_str(),
        "sender": request.sender().as_str(),
    })
}

pub fn encode_device_info(api_key: &ApiKey, request: &DeviceInfo) -> Value {
    json!({
        "api_key": api_key.as_str(),
        "number": request.number().as_str(),
    })
}

pub fn encode_create_device(api_key: &ApiKey, request: &CreateDevice) -> Value {
    let mut payload = json!({
        "api_key": api_key.as_str(),
        "sender": request.sender().as_str(),
    });
    if let Some(webhook) = request.webhook_url() {
        payload["urlwebhook"] = Value::String(webhook.as_str().to_owned());
    }
    payload
}

pub fn encode_check_number(api_key: &ApiKey, request: &CheckNumber) -> Value {
    json!({
        "api_key": api_key.as_str(),
        "sender": request.sender().as_str(),
        "number": request.number().as_str(),
    })
}

#[derive(Debug, Default, Deserialize)]
struct QrProbe {
    #[serde(default)]
    status: Option<QrStatus>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    qrcode: Option<String>,
    #[serde(default)]
    errors: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
// The gateway overloads `status`: the string "processing" while the QR code
// is being prepared, a boolean otherwise.
enum QrStatus {
    Flag(bool),
    Text(String),
}

/// Classify a QR-generation response.
///
/// Predicates are evaluated in a fixed order because partial upstream bodies
/// can satisfy several of them: processing, then already-connected, then
/// qrcode-present, then error, then passthrough. First match wins.
pub fn decode_qr_outcome(status: u16, body: &str) -> QrOutcome {
    if !is_http_success(status) {
        return QrOutcome::Rejected {
            error: error_payload(body),
            status,
        };
    }

    let data = success_data(body);
    let probe: QrProbe = serde_json::from_value(data.clone()).unwrap_or_default();

    match probe.status {
        Some(QrStatus::Text(text)) if text == "processing" => QrOutcome::Processing {
            message: probe
                .message
                .unwrap_or_else(|| PROCESSING_FALLBACK.to_owned()),
            data,
            status,
        },
        Some(QrStatus::Flag(false)) => match (probe.msg, probe.qrcode) {
            (Some(msg), _) if msg.to_lowercase().contains(ALREADY_CONNECTED) => {
                QrOutcome::AlreadyConnected {
                    message: msg,
                    data,
                    status,
                }
            }
            (_, Some(qrcode)) => QrOutcome::QrCode {
                qrcode,
                message: probe
                    .message
                    .unwrap_or_else(|| SCAN_PROMPT_FALLBACK.to_owned()),
                data,
                status,
            },
            (Some(msg), None) => QrOutcome::Error {
                message: msg,
                errors: probe.errors.unwrap_or_else(|| json!([])),
                data,
                status,
            },
            (None, None) => QrOutcome::Unrecognized { data, status },
        },
        _ => QrOutcome::Unrecognized { data, status },
    }
}

/// Normalize a check-number response, lifting the `exists` flag out of the
/// body (`msg.exists`, falling back to a top-level `exists`).
pub fn decode_check_number_outcome(status: u16, body: &str) -> CheckNumberOutcome {
    if !is_http_success(status) {
        return CheckNumberOutcome::Rejected {
            error: error_payload(body),
            status,
        };
    }

    let data = success_data(body);
    let exists = data
        .get("msg")
        .and_then(|msg| msg.get("exists"))
        .and_then(Value::as_bool)
        .or_else(|| data.get("exists").and_then(Value::as_bool));

    CheckNumberOutcome::Success {
        exists,
        data,
        status,
    }
}
