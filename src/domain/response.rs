use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
/// Normalized outcome of operations with passthrough semantics (sends,
/// disconnect, device info, device creation).
///
/// Remote rejections are values, not errors: a non-2xx upstream status
/// normalizes to [`CallOutcome::Rejected`] so callers can branch without
/// error handling. Only transport-level failures are raised.
pub enum CallOutcome {
    /// HTTP success; `data` is the upstream JSON body (`Value::Null` when the
    /// body is not valid JSON).
    Success { data: Value, status: u16 },
    /// HTTP failure; `error` is the upstream JSON body, or the raw body as a
    /// JSON string when it does not parse.
    Rejected { error: Value, status: u16 },
}

impl CallOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Upstream HTTP status.
    pub fn status(&self) -> u16 {
        match self {
            Self::Success { status, .. } | Self::Rejected { status, .. } => *status,
        }
    }

    /// Upstream body on success.
    pub fn data(&self) -> Option<&Value> {
        match self {
            Self::Success { data, .. } => Some(data),
            Self::Rejected { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Normalized outcome of QR generation.
///
/// The upstream response shape is heterogeneous (`status` is sometimes the
/// string `"processing"`, sometimes the boolean `false`, and meaning hangs on
/// which keys are present), so it is classified into explicit variants. The
/// classifier is order-sensitive: processing, then already-connected, then
/// qrcode-present, then error, then passthrough; first match wins.
pub enum QrOutcome {
    /// The gateway is still preparing the QR code.
    Processing {
        message: String,
        data: Value,
        status: u16,
    },
    /// The device is already paired; nothing to scan.
    AlreadyConnected {
        message: String,
        data: Value,
        status: u16,
    },
    /// A QR code is ready to scan.
    QrCode {
        qrcode: String,
        message: String,
        data: Value,
        status: u16,
    },
    /// The gateway reported a logical failure.
    Error {
        message: String,
        errors: Value,
        data: Value,
        status: u16,
    },
    /// HTTP success with a body matching none of the known shapes; passed
    /// through untouched.
    Unrecognized { data: Value, status: u16 },
    /// HTTP failure.
    Rejected { error: Value, status: u16 },
}

impl QrOutcome {
    pub fn status(&self) -> u16 {
        match self {
            Self::Processing { status, .. }
            | Self::AlreadyConnected { status, .. }
            | Self::QrCode { status, .. }
            | Self::Error { status, .. }
            | Self::Unrecognized { status, .. }
            | Self::Rejected { status, .. } => *status,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Normalized outcome of a user-info lookup.
pub enum UserInfoOutcome {
    /// Upstream confirmed the account (`status == true` with an `info`
    /// payload, exposed here as `user`).
    Found {
        user: Value,
        data: Value,
        status: u16,
    },
    /// HTTP success but the body signaled a logical failure.
    Failed {
        error: String,
        data: Value,
        status: u16,
    },
    /// HTTP failure.
    Rejected { error: Value, status: u16 },
}

#[derive(Debug, Clone, PartialEq)]
/// Normalized outcome of a number-registration check.
pub enum CheckNumberOutcome {
    /// HTTP success; `exists` is lifted out of the body (`msg.exists`, or a
    /// top-level `exists`) when the gateway provided it.
    Success {
        exists: Option<bool>,
        data: Value,
        status: u16,
    },
    /// HTTP failure.
    Rejected { error: Value, status: u16 },
}

impl CheckNumberOutcome {
    /// Whether the checked number is registered, if upstream said.
    pub fn exists(&self) -> Option<bool> {
        match self {
            Self::Success { exists, .. } => *exists,
            Self::Rejected { .. } => None,
        }
    }
}
