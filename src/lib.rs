//! Typed, validating Rust client for WhatsApp gateway HTTP APIs.
//!
//! The crate is split into a domain layer of strong types with validating
//! constructors, a transport layer for wire-format quirks (payload encoding
//! and the normalization of the gateway's heterogeneous response shapes),
//! and a small client layer orchestrating one HTTP call per operation.
//!
//! Two failure channels, by design: malformed input and missing
//! configuration are raised as [`GatewayError`] before any network I/O,
//! while remote rejections come back as typed outcome values
//! ([`CallOutcome::Rejected`] and friends) so callers can branch on them
//! without error handling.
//!
//! ```rust,no_run
//! use wagate::{ApiKey, GatewayClient, PhoneNumber, SendMessage};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), wagate::GatewayError> {
//!     let client = GatewayClient::builder("https://wa.example.com")
//!         .api_key(ApiKey::new("...")?)
//!         .default_sender(PhoneNumber::parse("sender", "989123456789")?)
//!         .build()?;
//!
//!     let request = SendMessage::new("62888123456", "hello", None)?;
//!     let outcome = client.send_message(request).await?;
//!     println!("delivered: {}", outcome.is_success());
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{DEFAULT_TIMEOUT, GatewayClient, GatewayClientBuilder, GatewayError};
pub use domain::{
    ApiKey, Button, ButtonKind, CallOutcome, CheckNumber, CheckNumberOutcome, CreateDevice,
    DeviceInfo, DisconnectDevice, GenerateQr, MAX_BUTTONS, MIN_POLL_OPTIONS, MIN_SENDER_DIGITS,
    MediaKind, MessageText, PhoneNumber, QrOutcome, SendButtons, SendMedia, SendMessage, SendPoll,
    SendSticker, UserInfo, UserInfoOutcome, Username, ValidationError,
};
