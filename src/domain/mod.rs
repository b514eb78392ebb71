//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{
    CheckNumber, CreateDevice, DeviceInfo, DisconnectDevice, GenerateQr, MAX_BUTTONS,
    MIN_POLL_OPTIONS, MIN_SENDER_DIGITS, SendButtons, SendMedia, SendMessage, SendPoll,
    SendSticker, UserInfo,
};
pub use response::{CallOutcome, CheckNumberOutcome, QrOutcome, UserInfoOutcome};
pub use validation::ValidationError;
pub use value::{ApiKey, Button, ButtonKind, MediaKind, MessageText, PhoneNumber, Username};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_message_validates_both_numbers() {
        let req = SendMessage::new("98 912-345(6789)", "hi", Some("62-888-123-456")).unwrap();
        assert_eq!(req.number().as_str(), "989123456789");
        assert_eq!(req.sender().unwrap().as_str(), "62888123456");

        assert!(SendMessage::new("12ab", "hi", None).is_err());
        assert!(SendMessage::new("989123456789", "hi", Some("bad")).is_err());
        assert!(SendMessage::new("989123456789", "   ", None).is_err());
    }

    #[test]
    fn send_media_checks_kind_and_url() {
        let req = SendMedia::new(
            "989123456789",
            "IMAGE",
            "https://cdn.example.com/a.png",
            Some(String::new()),
            None,
        )
        .unwrap();
        assert_eq!(req.kind(), MediaKind::Image);
        // Blank captions are dropped rather than sent empty.
        assert_eq!(req.caption(), None);

        assert!(matches!(
            SendMedia::new("989123456789", "gif", "https://x.example/a", None, None),
            Err(ValidationError::UnsupportedMediaKind { .. })
        ));
        assert!(matches!(
            SendMedia::new("989123456789", "image", "nope", None, None),
            Err(ValidationError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn send_poll_requires_two_non_blank_options() {
        let err = SendPoll::new("989123456789", "Lunch?", vec![], false, None).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::NotEnoughPollOptions { min: 2, actual: 0 }
        ));

        let err = SendPoll::new(
            "989123456789",
            "Lunch?",
            vec!["Pizza".to_owned()],
            false,
            None,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::NotEnoughPollOptions { min: 2, actual: 1 }
        ));

        let err = SendPoll::new(
            "989123456789",
            "Lunch?",
            vec!["Pizza".to_owned(), "  ".to_owned()],
            false,
            None,
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::Empty { field: "option" }));

        let err = SendPoll::new(
            "989123456789",
            "  ",
            vec!["A".to_owned(), "B".to_owned()],
            false,
            None,
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::Empty { field: "name" }));

        let req = SendPoll::new(
            "989123456789",
            "Lunch?",
            vec!["Pizza".to_owned(), "Salad".to_owned(), "Soup".to_owned()],
            true,
            None,
        )
        .unwrap();
        assert_eq!(req.options().len(), 3);
        assert!(req.countable());
    }

    #[test]
    fn send_buttons_enforces_count_and_image() {
        let button = Button::reply("Yes").unwrap();

        let err = SendButtons::new(
            "989123456789",
            "Pick one",
            vec![],
            "https://cdn.example.com/a.png",
            None,
            None,
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::Empty { field: "button" }));

        let err = SendButtons::new(
            "989123456789",
            "Pick one",
            vec![button.clone(); MAX_BUTTONS + 1],
            "https://cdn.example.com/a.png",
            None,
            None,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::TooManyButtons { max: 5, actual: 6 }
        ));

        let err = SendButtons::new(
            "989123456789",
            "Pick one",
            vec![button.clone()],
            "not-a-url",
            None,
            None,
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidUrl { field: "url", .. }));

        let req = SendButtons::new(
            "989123456789",
            "Pick one",
            vec![button; MAX_BUTTONS],
            "https://cdn.example.com/a.png",
            Some("footer".to_owned()),
            None,
        )
        .unwrap();
        assert_eq!(req.buttons().len(), MAX_BUTTONS);
        assert_eq!(req.footer(), Some("footer"));
    }

    #[test]
    fn create_device_keeps_explicit_digit_guard() {
        let req = CreateDevice::new("62888123", None, None).unwrap();
        assert_eq!(req.sender().digits(), MIN_SENDER_DIGITS);
        assert!(req.webhook_url().is_none());

        let req =
            CreateDevice::new("989123456789", Some("https://hooks.example.com/wa"), None).unwrap();
        assert_eq!(
            req.webhook_url().unwrap().as_str(),
            "https://hooks.example.com/wa"
        );

        assert!(matches!(
            CreateDevice::new("989123456789", Some("not a url"), None),
            Err(ValidationError::InvalidUrl {
                field: "urlwebhook",
                ..
            })
        ));
        // Blank webhook behaves like no webhook at all.
        assert!(CreateDevice::new("989123456789", Some("  "), None)
            .unwrap()
            .webhook_url()
            .is_none());
    }

    #[test]
    fn info_requests_validate_overrides() {
        assert!(UserInfo::new("valid_user", Some("  ")).is_err());
        let req = UserInfo::new("valid_user", Some("override")).unwrap();
        assert_eq!(req.api_key().unwrap().as_str(), "override");

        assert!(DeviceInfo::new("12", None).is_err());
        assert!(CheckNumber::new("989123456789", "12", None).is_err());
        assert!(GenerateQr::new("not a phone", true).is_err());
        assert!(DisconnectDevice::new("989123456789").is_ok());
    }
}
