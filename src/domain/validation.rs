use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidPhoneNumber { field: &'static str, input: String },
    InvalidUrl { field: &'static str, input: String },
    UnsupportedMediaKind { input: String },
    InvalidUsername { input: String },
    NotEnoughPollOptions { min: usize, actual: usize },
    TooManyButtons { max: usize, actual: usize },
    SenderTooShort { min: usize, actual: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidPhoneNumber { field, input } => {
                write!(
                    f,
                    "{field} must be 8-15 digits including the country code \
                     (e.g. 989123456789): {input}"
                )
            }
            Self::InvalidUrl { field, input } => {
                write!(f, "{field} is not a valid absolute URL: {input}")
            }
            Self::UnsupportedMediaKind { input } => {
                write!(
                    f,
                    "unsupported media kind: {input} (allowed: image, video, audio, document)"
                )
            }
            Self::InvalidUsername { input } => {
                write!(
                    f,
                    "username may only contain letters, digits and underscores: {input}"
                )
            }
            Self::NotEnoughPollOptions { min, actual } => {
                write!(f, "poll needs at least {min} options, got {actual}")
            }
            Self::TooManyButtons { max, actual } => {
                write!(f, "too many buttons: {actual} (max {max})")
            }
            Self::SenderTooShort { min, actual } => {
                write!(f, "sender must have at least {min} digits, got {actual}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty { field: "message" };
        assert_eq!(err.to_string(), "message must not be empty");

        let err = ValidationError::InvalidPhoneNumber {
            field: "number",
            input: "12ab".to_owned(),
        };
        assert!(err.to_string().starts_with("number must be 8-15 digits"));

        let err = ValidationError::InvalidUrl {
            field: "url",
            input: "not-a-url".to_owned(),
        };
        assert_eq!(err.to_string(), "url is not a valid absolute URL: not-a-url");

        let err = ValidationError::NotEnoughPollOptions { min: 2, actual: 1 };
        assert_eq!(err.to_string(), "poll needs at least 2 options, got 1");

        let err = ValidationError::TooManyButtons { max: 5, actual: 6 };
        assert_eq!(err.to_string(), "too many buttons: 6 (max 5)");

        let err = ValidationError::SenderTooShort { min: 8, actual: 6 };
        assert_eq!(err.to_string(), "sender must have at least 8 digits, got 6");
    }
}
