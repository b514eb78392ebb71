use url::Url;

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Gateway `api_key` token.
///
/// Invariant: non-empty after trimming.
pub struct ApiKey(String);

impl ApiKey {
    /// Wire field name used by the gateway (`api_key`).
    pub const FIELD: &'static str = "api_key";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Phone number in the gateway's own format: digits only, country code
/// included, 8 to 15 digits, no `+` prefix.
///
/// Parsing strips whitespace, hyphens and parentheses before validating, so
/// formatted input like `"98 912-345(6789)"` is accepted and normalized.
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Minimum number of digits (country code included).
    pub const MIN_DIGITS: usize = 8;
    /// Maximum number of digits.
    pub const MAX_DIGITS: usize = 15;

    /// Parse and normalize a phone number.
    ///
    /// `field` is the wire field the number is destined for (`number`,
    /// `sender`, `device`, ...) and is carried in the error so callers can
    /// tell which input was malformed.
    pub fn parse(
        field: &'static str,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let stripped: String = input
            .chars()
            .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
            .collect();

        let digits_only = stripped.chars().all(|c| c.is_ascii_digit());
        if !digits_only || !(Self::MIN_DIGITS..=Self::MAX_DIGITS).contains(&stripped.len()) {
            return Err(ValidationError::InvalidPhoneNumber { field, input });
        }

        Ok(Self(stripped))
    }

    /// Normalized digits as sent to the gateway.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digits after normalization.
    pub fn digits(&self) -> usize {
        self.0.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Message body (`message`).
///
/// Invariant: non-empty after trimming. The original value (including
/// whitespace) is preserved.
pub struct MessageText(String);

impl MessageText {
    /// Wire field name used by the gateway (`message`).
    pub const FIELD: &'static str = "message";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Gateway account username (`username`).
///
/// Invariant: non-blank, and every character of the input is a letter, digit
/// or underscore. Inputs with symbols (including `@`) or padding are rejected
/// as provided, without trimming.
pub struct Username(String);

impl Username {
    /// Wire field name used by the gateway (`username`).
    pub const FIELD: &'static str = "username";

    /// Create a validated [`Username`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if !value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(ValidationError::InvalidUsername { input: value });
        }
        Ok(Self(value))
    }

    /// Borrow the validated username.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Media attachment kind (`media_type`).
pub enum MediaKind {
    Image,
    Video,
    Audio,
    Document,
}

impl MediaKind {
    /// Wire field name used by the gateway (`media_type`).
    pub const FIELD: &'static str = "media_type";

    /// Parse a media kind from text, case-insensitively.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        match input.to_ascii_lowercase().as_str() {
            "image" => Ok(Self::Image),
            "video" => Ok(Self::Video),
            "audio" => Ok(Self::Audio),
            "document" => Ok(Self::Document),
            _ => Err(ValidationError::UnsupportedMediaKind {
                input: input.to_owned(),
            }),
        }
    }

    /// Lowercase wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Document => "document",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One interactive button attached to a message.
///
/// Construct through [`Button::reply`], [`Button::call`], [`Button::url`] or
/// [`Button::copy`]; each constructor enforces the kind-specific required
/// field, so a held `Button` is always well-formed.
pub struct Button {
    display_text: String,
    kind: ButtonKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Kind-specific payload of a [`Button`].
pub enum ButtonKind {
    Reply,
    Call { phone_number: String },
    Url { url: Url },
    Copy { copy_code: String },
}

impl Button {
    /// A quick-reply button.
    pub fn reply(display_text: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            display_text: validated_display_text(display_text)?,
            kind: ButtonKind::Reply,
        })
    }

    /// A call button; `phone_number` is required by the gateway.
    pub fn call(
        display_text: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let phone_number = phone_number.into();
        if phone_number.trim().is_empty() {
            return Err(ValidationError::Empty {
                field: "phoneNumber",
            });
        }
        Ok(Self {
            display_text: validated_display_text(display_text)?,
            kind: ButtonKind::Call { phone_number },
        })
    }

    /// A link button; the target must be a valid absolute URL.
    pub fn url(
        display_text: impl Into<String>,
        url: &str,
    ) -> Result<Self, ValidationError> {
        let url = parse_absolute_url("url", url)?;
        Ok(Self {
            display_text: validated_display_text(display_text)?,
            kind: ButtonKind::Url { url },
        })
    }

    /// A copy-to-clipboard button; `copy_code` is required by the gateway.
    pub fn copy(
        display_text: impl Into<String>,
        copy_code: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let copy_code = copy_code.into();
        if copy_code.trim().is_empty() {
            return Err(ValidationError::Empty { field: "copyCode" });
        }
        Ok(Self {
            display_text: validated_display_text(display_text)?,
            kind: ButtonKind::Copy { copy_code },
        })
    }

    /// Text shown on the button.
    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    /// Kind-specific payload.
    pub fn kind(&self) -> &ButtonKind {
        &self.kind
    }
}

impl ButtonKind {
    /// Wire value of the button `type` field.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Reply => "reply",
            Self::Call { .. } => "call",
            Self::Url { .. } => "url",
            Self::Copy { .. } => "copy",
        }
    }
}

fn validated_display_text(value: impl Into<String>) -> Result<String, ValidationError> {
    let value = value.into();
    if value.trim().is_empty() {
        return Err(ValidationError::Empty {
            field: "displayText",
        });
    }
    Ok(value)
}

/// Parse `input` as an absolute URL, reporting `field` on failure.
pub(crate) fn parse_absolute_url(
    field: &'static str,
    input: &str,
) -> Result<Url, ValidationError> {
    if input.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Url::parse(input).map_err(|_| ValidationError::InvalidUrl {
        field,
        input: input.to_owned(),
    })
}
