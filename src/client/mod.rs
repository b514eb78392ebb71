//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::{
    ApiKey, CallOutcome, CheckNumber, CheckNumberOutcome, CreateDevice, DeviceInfo,
    DisconnectDevice, GenerateQr, PhoneNumber, QrOutcome, SendButtons, SendMedia, SendMessage,
    SendPoll, SendSticker, UserInfo, UserInfoOutcome, ValidationError,
};
use crate::transport;

const SEND_MESSAGE_PATH: &str = "/send-message";
const SEND_MEDIA_PATH: &str = "/send-media";
const SEND_POLL_PATH: &str = "/send-poll";
const SEND_STICKER_PATH: &str = "/send-sticker";
const SEND_BUTTON_PATH: &str = "/send-button";
const GENERATE_QR_PATH: &str = "/generate-qr";
const LOGOUT_DEVICE_PATH: &str = "/logout-device";
const INFO_USER_PATH: &str = "/info-user";
const INFO_DEVICE_PATH: &str = "/info-device";
const CREATE_DEVICE_PATH: &str = "/create-device";
const CHECK_NUMBER_PATH: &str = "/check-number";

/// Request timeout applied when the builder does not override it.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const MISSING_API_KEY: &str =
    "api key is not configured; set it on the client or pass it with the request";
const MISSING_SENDER: &str =
    "sender is not configured; set a default sender on the client or pass one with the request";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        payload: &'a Value,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        payload: &'a Value,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self.client.post(url).json(payload).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors raised by [`GatewayClient`].
///
/// Only preconditions and transport failures are raised; remote rejections
/// (non-2xx responses, logical failures in a 2xx body) come back as outcome
/// values so callers can branch without error handling. Callers rely on this
/// asymmetry.
pub enum GatewayError {
    /// Missing api key or unresolvable sender. Raised before any network I/O.
    #[error("configuration error: {0}")]
    Configuration(&'static str),

    /// A domain constructor rejected an invalid value. Raised before any
    /// network I/O.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Transport-level failure (DNS, timeout, connection reset), wrapping the
    /// underlying error.
    #[error("gateway call failed: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),
}

#[derive(Debug, Clone)]
/// Builder for [`GatewayClient`].
pub struct GatewayClientBuilder {
    base_url: String,
    api_key: Option<ApiKey>,
    default_sender: Option<PhoneNumber>,
    timeout: Duration,
    user_agent: Option<String>,
}

impl GatewayClientBuilder {
    /// Create a builder for a gateway instance at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            api_key: None,
            default_sender: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Set the account api key used by every operation unless a request
    /// carries its own.
    pub fn api_key(mut self, api_key: ApiKey) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Set the sender device used by send-class operations when the request
    /// does not name one.
    pub fn default_sender(mut self, sender: PhoneNumber) -> Self {
        self.default_sender = Some(sender);
        self
    }

    /// Set an HTTP timeout applied to the entire request (default 30s).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`GatewayClient`].
    pub fn build(self) -> Result<GatewayClient, GatewayError> {
        let mut builder = reqwest::Client::builder().timeout(self.timeout);
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| GatewayError::Transport(Box::new(err)))?;

        Ok(GatewayClient {
            base_url: self.base_url,
            api_key: self.api_key,
            default_sender: self.default_sender,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// Validating client for a WhatsApp gateway HTTP API.
///
/// Every operation follows the same contract: resolve required configuration
/// (api key always; sender only where the operation sends on behalf of a
/// device), build the payload from an already-validated request, issue
/// exactly one POST bounded by the configured timeout, and normalize the
/// response into a typed outcome.
///
/// The client is immutable after construction and cheap to clone, so it can
/// be shared across tasks without coordination. There are no retries and no
/// caching; each call is independent and at-most-once from this layer's
/// perspective.
///
/// ```rust,no_run
/// use wagate::{ApiKey, GatewayClient, PhoneNumber, SendMessage};
///
/// #[tokio::main]
/// async fn main() -> Result<(), wagate::GatewayError> {
///     let client = GatewayClient::builder("https://wa.example.com")
///         .api_key(ApiKey::new("...")?)
///         .default_sender(PhoneNumber::parse("sender", "989123456789")?)
///         .build()?;
///     let request = SendMessage::new("62888123456", "hello", None)?;
///     let _outcome = client.send_message(request).await?;
///     Ok(())
/// }
/// ```
pub struct GatewayClient {
    base_url: String,
    api_key: Option<ApiKey>,
    default_sender: Option<PhoneNumber>,
    http: Arc<dyn HttpTransport>,
}

impl GatewayClient {
    /// Start building a client for a gateway instance at `base_url`.
    pub fn builder(base_url: impl Into<String>) -> GatewayClientBuilder {
        GatewayClientBuilder::new(base_url)
    }

    /// Send a plain text message.
    pub async fn send_message(
        &self,
        request: SendMessage,
    ) -> Result<CallOutcome, GatewayError> {
        let api_key = self.require_api_key(None)?;
        let sender = self.resolve_sender(request.sender())?;
        let payload = transport::encode_send_message(api_key, sender, &request);
        self.post_outcome(SEND_MESSAGE_PATH, &payload).await
    }

    /// Send a media attachment (image, video, audio or document) by URL.
    pub async fn send_media(&self, request: SendMedia) -> Result<CallOutcome, GatewayError> {
        let api_key = self.require_api_key(None)?;
        let sender = self.resolve_sender(request.sender())?;
        let payload = transport::encode_send_media(api_key, sender, &request);
        self.post_outcome(SEND_MEDIA_PATH, &payload).await
    }

    /// Send a poll.
    pub async fn send_poll(&self, request: SendPoll) -> Result<CallOutcome, GatewayError> {
        let api_key = self.require_api_key(None)?;
        let sender = self.resolve_sender(request.sender())?;
        let payload = transport::encode_send_poll(api_key, sender, &request);
        self.post_outcome(SEND_POLL_PATH, &payload).await
    }

    /// Send a sticker by URL.
    pub async fn send_sticker(&self, request: SendSticker) -> Result<CallOutcome, GatewayError> {
        let api_key = self.require_api_key(None)?;
        let sender = self.resolve_sender(request.sender())?;
        let payload = transport::encode_send_sticker(api_key, sender, &request);
        self.post_outcome(SEND_STICKER_PATH, &payload).await
    }

    /// Send a message with interactive buttons and a mandatory image.
    pub async fn send_buttons(&self, request: SendButtons) -> Result<CallOutcome, GatewayError> {
        let api_key = self.require_api_key(None)?;
        let sender = self.resolve_sender(request.sender())?;
        let payload = transport::encode_send_buttons(api_key, sender, &request);
        self.post_outcome(SEND_BUTTON_PATH, &payload).await
    }

    /// Generate a pairing QR code for a device.
    ///
    /// Needs the api key but no sender. The response is classified into
    /// [`QrOutcome`] variants; see the type docs for the precedence rules.
    pub async fn generate_qr(&self, request: GenerateQr) -> Result<QrOutcome, GatewayError> {
        let api_key = self.require_api_key(None)?;
        let payload = transport::encode_generate_qr(api_key, &request);
        let response = self.post(GENERATE_QR_PATH, &payload).await?;
        Ok(transport::decode_qr_outcome(response.status, &response.body))
    }

    /// Log a device out of WhatsApp.
    pub async fn disconnect_device(
        &self,
        request: DisconnectDevice,
    ) -> Result<CallOutcome, GatewayError> {
        let api_key = self.require_api_key(None)?;
        let payload = transport::encode_disconnect_device(api_key, &request);
        self.post_outcome(LOGOUT_DEVICE_PATH, &payload).await
    }

    /// Look up a gateway account by username; upstream `info` is exposed as
    /// `user` on success.
    pub async fn user_info(&self, request: UserInfo) -> Result<UserInfoOutcome, GatewayError> {
        let api_key = self.require_api_key(request.api_key())?;
        let payload = transport::encode_user_info(api_key, &request);
        let response = self.post(INFO_USER_PATH, &payload).await?;
        Ok(transport::decode_user_info_outcome(
            response.status,
            &response.body,
        ))
    }

    /// Look up a connected device by number.
    pub async fn device_info(&self, request: DeviceInfo) -> Result<CallOutcome, GatewayError> {
        let api_key = self.require_api_key(request.api_key())?;
        let payload = transport::encode_device_info(api_key, &request);
        self.post_outcome(INFO_DEVICE_PATH, &payload).await
    }

    /// Register a new sending device, optionally with a webhook URL.
    pub async fn create_device(&self, request: CreateDevice) -> Result<CallOutcome, GatewayError> {
        let api_key = self.require_api_key(request.api_key())?;
        let payload = transport::encode_create_device(api_key, &request);
        self.post_outcome(CREATE_DEVICE_PATH, &payload).await
    }

    /// Check whether a number is registered on WhatsApp.
    pub async fn check_number(
        &self,
        request: CheckNumber,
    ) -> Result<CheckNumberOutcome, GatewayError> {
        let api_key = self.require_api_key(request.api_key())?;
        let payload = transport::encode_check_number(api_key, &request);
        let response = self.post(CHECK_NUMBER_PATH, &payload).await?;
        Ok(transport::decode_check_number_outcome(
            response.status,
            &response.body,
        ))
    }

    fn require_api_key<'a>(
        &'a self,
        override_key: Option<&'a ApiKey>,
    ) -> Result<&'a ApiKey, GatewayError> {
        override_key
            .or(self.api_key.as_ref())
            .ok_or(GatewayError::Configuration(MISSING_API_KEY))
    }

    fn resolve_sender<'a>(
        &'a self,
        explicit: Option<&'a PhoneNumber>,
    ) -> Result<&'a PhoneNumber, GatewayError> {
        explicit
            .or(self.default_sender.as_ref())
            .ok_or(GatewayError::Configuration(MISSING_SENDER))
    }

    async fn post(&self, path: &str, payload: &Value) -> Result<HttpResponse, GatewayError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "dispatching gateway request");
        let response = self
            .http
            .post_json(&url, payload)
            .await
            .map_err(GatewayError::Transport)?;
        if !(200..=299).contains(&response.status) {
            warn!(status = response.status, %url, "gateway rejected request");
        }
        Ok(response)
    }

    async fn post_outcome(
        &self,
        path: &str,
        payload: &Value,
    ) -> Result<CallOutcome, GatewayError> {
        let response = self.post(path, payload).await?;
        Ok(transport::decode_call_outcome(
            response.status,
            &response.body,
        ))
    }
}

fn normalize_base_url(base_url: String) -> String {
    base_url.trim_end_matches('/').to_owned()
}
