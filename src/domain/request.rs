use url::Url;

use crate::domain::validation::ValidationError;
use crate::domain::value::{
    ApiKey, Button, MediaKind, MessageText, PhoneNumber, Username, parse_absolute_url,
};

/// Maximum number of interactive buttons per message.
pub const MAX_BUTTONS: usize = 5;
/// Minimum number of poll options.
pub const MIN_POLL_OPTIONS: usize = 2;
/// Explicit lower bound on sender digits for device creation. The phone rule
/// already guarantees this; the guard is kept as a separate check because the
/// gateway documents it separately.
pub const MIN_SENDER_DIGITS: usize = 8;

fn parse_sender(sender: Option<&str>) -> Result<Option<PhoneNumber>, ValidationError> {
    sender.map(|s| PhoneNumber::parse("sender", s)).transpose()
}

fn parse_api_key(api_key: Option<&str>) -> Result<Option<ApiKey>, ValidationError> {
    api_key.map(ApiKey::new).transpose()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[derive(Debug, Clone)]
/// Plain text message (`/send-message`).
pub struct SendMessage {
    number: PhoneNumber,
    message: MessageText,
    sender: Option<PhoneNumber>,
}

impl SendMessage {
    pub fn new(
        number: &str,
        message: impl Into<String>,
        sender: Option<&str>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            number: PhoneNumber::parse("number", number)?,
            message: MessageText::new(message)?,
            sender: parse_sender(sender)?,
        })
    }

    pub fn number(&self) -> &PhoneNumber {
        &self.number
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }

    pub fn sender(&self) -> Option<&PhoneNumber> {
        self.sender.as_ref()
    }
}

#[derive(Debug, Clone)]
/// Media attachment by direct URL (`/send-media`).
pub struct SendMedia {
    number: PhoneNumber,
    kind: MediaKind,
    url: Url,
    caption: Option<String>,
    sender: Option<PhoneNumber>,
}

impl SendMedia {
    pub fn new(
        number: &str,
        kind: &str,
        url: &str,
        caption: Option<String>,
        sender: Option<&str>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            number: PhoneNumber::parse("number", number)?,
            kind: MediaKind::parse(kind)?,
            url: parse_absolute_url("url", url)?,
            caption: non_blank(caption),
            sender: parse_sender(sender)?,
        })
    }

    pub fn number(&self) -> &PhoneNumber {
        &self.number
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    pub fn sender(&self) -> Option<&PhoneNumber> {
        self.sender.as_ref()
    }
}

#[derive(Debug, Clone)]
/// Poll with at least two options (`/send-poll`).
///
/// Options are held in input order and transmitted as a dense 0-based array;
/// `countable` controls whether only a single choice may be selected.
pub struct SendPoll {
    number: PhoneNumber,
    name: String,
    options: Vec<String>,
    countable: bool,
    sender: Option<PhoneNumber>,
}

impl SendPoll {
    pub fn new(
        number: &str,
        name: impl Into<String>,
        options: Vec<String>,
        countable: bool,
        sender: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }
        if options.len() < MIN_POLL_OPTIONS {
            return Err(ValidationError::NotEnoughPollOptions {
                min: MIN_POLL_OPTIONS,
                actual: options.len(),
            });
        }
        if options.iter().any(|option| option.trim().is_empty()) {
            return Err(ValidationError::Empty { field: "option" });
        }
        Ok(Self {
            number: PhoneNumber::parse("number", number)?,
            name,
            options,
            countable,
            sender: parse_sender(sender)?,
        })
    }

    pub fn number(&self) -> &PhoneNumber {
        &self.number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn countable(&self) -> bool {
        self.countable
    }

    pub fn sender(&self) -> Option<&PhoneNumber> {
        self.sender.as_ref()
    }
}

#[derive(Debug, Clone)]
/// Sticker by direct URL (`/send-sticker`).
pub struct SendSticker {
    number: PhoneNumber,
    url: Url,
    sender: Option<PhoneNumber>,
}

impl SendSticker {
    pub fn new(number: &str, url: &str, sender: Option<&str>) -> Result<Self, ValidationError> {
        Ok(Self {
            number: PhoneNumber::parse("number", number)?,
            url: parse_absolute_url("url", url)?,
            sender: parse_sender(sender)?,
        })
    }

    pub fn number(&self) -> &PhoneNumber {
        &self.number
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn sender(&self) -> Option<&PhoneNumber> {
        self.sender.as_ref()
    }
}

#[derive(Debug, Clone)]
/// Message with interactive buttons (`/send-button`).
///
/// The image URL is mandatory: the gateway drops button messages without an
/// attached image, so there is no plain-text fallback here.
pub struct SendButtons {
    number: PhoneNumber,
    message: MessageText,
    buttons: Vec<Button>,
    image_url: Url,
    footer: Option<String>,
    sender: Option<PhoneNumber>,
}

impl SendButtons {
    pub fn new(
        number: &str,
        message: impl Into<String>,
        buttons: Vec<Button>,
        image_url: &str,
        footer: Option<String>,
        sender: Option<&str>,
    ) -> Result<Self, ValidationError> {
        if buttons.is_empty() {
            return Err(ValidationError::Empty { field: "button" });
        }
        if buttons.len() > MAX_BUTTONS {
            return Err(ValidationError::TooManyButtons {
                max: MAX_BUTTONS,
                actual: buttons.len(),
            });
        }
        Ok(Self {
            number: PhoneNumber::parse("number", number)?,
            message: MessageText::new(message)?,
            buttons,
            image_url: parse_absolute_url("url", image_url)?,
            footer: non_blank(footer),
            sender: parse_sender(sender)?,
        })
    }

    pub fn number(&self) -> &PhoneNumber {
        &self.number
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn image_url(&self) -> &Url {
        &self.image_url
    }

    pub fn footer(&self) -> Option<&str> {
        self.footer.as_deref()
    }

    pub fn sender(&self) -> Option<&PhoneNumber> {
        self.sender.as_ref()
    }
}

#[derive(Debug, Clone)]
/// Pairing QR code for a device (`/generate-qr`).
pub struct GenerateQr {
    device: PhoneNumber,
    force: bool,
}

impl GenerateQr {
    /// `force` asks the gateway to create the device when it does not exist.
    pub fn new(device: &str, force: bool) -> Result<Self, ValidationError> {
        Ok(Self {
            device: PhoneNumber::parse("device", device)?,
            force,
        })
    }

    pub fn device(&self) -> &PhoneNumber {
        &self.device
    }

    pub fn force(&self) -> bool {
        self.force
    }
}

#[derive(Debug, Clone)]
/// Log a device out of WhatsApp (`/logout-device`).
pub struct DisconnectDevice {
    sender: PhoneNumber,
}

impl DisconnectDevice {
    pub fn new(sender: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            sender: PhoneNumber::parse("sender", sender)?,
        })
    }

    pub fn sender(&self) -> &PhoneNumber {
        &self.sender
    }
}

#[derive(Debug, Clone)]
/// Account lookup by username (`/info-user`).
pub struct UserInfo {
    username: Username,
    api_key: Option<ApiKey>,
}

impl UserInfo {
    /// `api_key` overrides the client-level key for this call only.
    pub fn new(username: &str, api_key: Option<&str>) -> Result<Self, ValidationError> {
        Ok(Self {
            username: Username::new(username)?,
            api_key: parse_api_key(api_key)?,
        })
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn api_key(&self) -> Option<&ApiKey> {
        self.api_key.as_ref()
    }
}

#[derive(Debug, Clone)]
/// Connected-device lookup by number (`/info-device`).
pub struct DeviceInfo {
    number: PhoneNumber,
    api_key: Option<ApiKey>,
}

impl DeviceInfo {
    pub fn new(number: &str, api_key: Option<&str>) -> Result<Self, ValidationError> {
        Ok(Self {
            number: PhoneNumber::parse("number", number)?,
            api_key: parse_api_key(api_key)?,
        })
    }

    pub fn number(&self) -> &PhoneNumber {
        &self.number
    }

    pub fn api_key(&self) -> Option<&ApiKey> {
        self.api_key.as_ref()
    }
}

#[derive(Debug, Clone)]
/// Register a new sending device (`/create-device`).
pub struct CreateDevice {
    sender: PhoneNumber,
    webhook_url: Option<Url>,
    api_key: Option<ApiKey>,
}

impl CreateDevice {
    pub fn new(
        sender: &str,
        webhook_url: Option<&str>,
        api_key: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let sender = PhoneNumber::parse("sender", sender)?;
        if sender.digits() < MIN_SENDER_DIGITS {
            return Err(ValidationError::SenderTooShort {
                min: MIN_SENDER_DIGITS,
                actual: sender.digits(),
            });
        }
        let webhook_url = webhook_url
            .filter(|url| !url.trim().is_empty())
            .map(|url| parse_absolute_url("urlwebhook", url))
            .transpose()?;
        Ok(Self {
            sender,
            webhook_url,
            api_key: parse_api_key(api_key)?,
        })
    }

    pub fn sender(&self) -> &PhoneNumber {
        &self.sender
    }

    pub fn webhook_url(&self) -> Option<&Url> {
        self.webhook_url.as_ref()
    }

    pub fn api_key(&self) -> Option<&ApiKey> {
        self.api_key.as_ref()
    }
}

#[derive(Debug, Clone)]
/// Check whether a number is registered on WhatsApp (`/check-number`).
pub struct CheckNumber {
    sender: PhoneNumber,
    number: PhoneNumber,
    api_key: Option<ApiKey>,
}

impl CheckNumber {
    pub fn new(
        sender: &str,
        number: &str,
        api_key: Option<&str>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            sender: PhoneNumber::parse("sender", sender)?,
            number: PhoneNumber::parse("number", number)?,
            api_key: parse_api_key(api_key)?,
        })
    }

    pub fn sender(&self) -> &PhoneNumber {
        &self.sender
    }

    pub fn number(&self) -> &PhoneNumber {
        &self.number
    }

    pub fn api_key(&self) -> Option<&ApiKey> {
        self.api_key.as_ref()
    }
}
