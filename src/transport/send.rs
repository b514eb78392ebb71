use serde_json::{Value, json};

use crate::domain::{
    ApiKey, Button, ButtonKind, PhoneNumber, SendButtons, SendMedia, SendMessage, SendPoll,
    SendSticker,
};

pub fn encode_send_message(
    api_key: &ApiKey,
    sender: &PhoneNumber,
    request: &SendMessage,
) -> Value {
    json!({
        "api_key": api_key.as_str(),
        "sender": sender.as_str(),
        "number": request.number().as_str(),
        "message": request.message().as_str(),
    })
}

pub fn encode_send_media(api_key: &ApiKey, sender: &PhoneNumber, request: &SendMedia) -> Value {
    let mut payload = json!({
        "api_key": api_key.as_str(),
        "sender": sender.as_str(),
        "number": request.number().as_str(),
        "media_type": request.kind().as_str(),
        "url": request.url().as_str(),
    });
    if let Some(caption) = request.caption() {
        payload["caption"] = Value::String(caption.to_owned());
    }
    payload
}

pub fn encode_send_poll(api_key: &ApiKey, sender: &PhoneNumber, request: &SendPoll) -> Value {
    json!({
        "api_key": api_key.as_str(),
        "sender": sender.as_str(),
        "number": request.number().as_str(),
        "name": request.name(),
        "option": request.options(),
        // The gateway wants a string flag here, not a JSON bool.
        "countable": if request.countable() { "1" } else { "0" },
    })
}

pub fn encode_send_sticker(
    api_key: &ApiKey,
    sender: &PhoneNumber,
    request: &SendSticker,
) -> Value {
    json!({
        "api_key": api_key.as_str(),
        "sender": sender.as_str(),
        "number": request.number().as_str(),
        "url": request.url().as_str(),
    })
}

pub fn encode_send_buttons(
    api_key: &ApiKey,
    sender: &PhoneNumber,
    request: &SendButtons,
) -> Value {
    let buttons: Vec<Value> = request.buttons().iter().map(button_json).collect();
    let mut payload = json!({
        "api_key": api_key.as_str(),
        "sender": sender.as_str(),
        "number": request.number().as_str(),
        "message": request.message().as_str(),
        "button": buttons,
        // `url` carries the mandatory image, not a button target.
        "url": request.image_url().as_str(),
    });
    if let Some(footer) = request.footer() {
        payload["footer"] = Value::String(footer.to_owned());
    }
    payload
}

fn button_json(button: &Button) -> Value {
    let mut obj = json!({
        "type": button.kind().type_name(),
        "displayText": button.display_text(),
    });
    match button.kind() {
        ButtonKind::Reply => {}
        ButtonKind::Call { phone_number } => {
            obj["phoneNumber"] = Value::String(phone_number.clone());
        }
        ButtonKind::Url { url } => {
            obj["url"] = Value::String(url.as_str().to_owned());
        }
        ButtonKind::Copy { copy_code } => {
            obj["copyCode"] = Value::String(copy_code.clone());
        }
    }
    obj
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_key() -> ApiKey {
        ApiKey::new("test_key").unwrap()
    }

    fn sender() -> PhoneNumber {
        PhoneNumber::parse("sender", "989123456789").unwrap()
    }

    #[test]
    fn send_message_payload() {
        let request = SendMessage::new("62888123456", "hello", None).unwrap();
        let payload = encode_send_message(&api_key(), &sender(), &request);
        assert_eq!(
            payload,
            json!({
                "api_key": "test_key",
                "sender": "989123456789",
                "number": "62888123456",
                "message": "hello",
            })
        );
    }

    #[test]
    fn send_media_payload_omits_blank_caption() {
        let request = SendMedia::new(
            "62888123456",
            "Image",
            "https://cdn.example.com/a.png",
            None,
            None,
        )
        .unwrap();
        let payload = encode_send_media(&api_key(), &sender(), &request);
        assert_eq!(
            payload,
            json!({
                "api_key": "test_key",
                "sender": "989123456789",
                "number": "62888123456",
                "media_type": "image",
                "url": "https://cdn.example.com/a.png",
            })
        );

        let request = SendMedia::new(
            "62888123456",
            "video",
            "https://cdn.example.com/a.mp4",
            Some("watch this".to_owned()),
            None,
        )
        .unwrap();
        let payload = encode_send_media(&api_key(), &sender(), &request);
        assert_eq!(payload["caption"], "watch this");
        assert_eq!(payload["media_type"], "video");
    }

    #[test]
    fn send_poll_payload_uses_string_flag_and_dense_options() {
        let request = SendPoll::new(
            "62888123456",
            "Lunch?",
            vec!["Pizza".to_owned(), "Salad".to_owned()],
            true,
            None,
        )
        .unwrap();
        let payload = encode_send_poll(&api_key(), &sender(), &request);
        assert_eq!(
            payload,
            json!({
                "api_key": "test_key",
                "sender": "989123456789",
                "number": "62888123456",
                "name": "Lunch?",
                "option": ["Pizza", "Salad"],
                "countable": "1",
            })
        );

        let request = SendPoll::new(
            "62888123456",
            "Lunch?",
            vec!["Pizza".to_owned(), "Salad".to_owned()],
            false,
            None,
        )
        .unwrap();
        let payload = encode_send_poll(&api_key(), &sender(), &request);
        assert_eq!(payload["countable"], "0");
    }

    #[test]
    fn send_sticker_payload() {
        let request =
            SendSticker::new("62888123456", "https://cdn.example.com/s.webp", None).unwrap();
        let payload = encode_send_sticker(&api_key(), &sender(), &request);
        assert_eq!(
            payload,
            json!({
                "api_key": "test_key",
                "sender": "989123456789",
                "number": "62888123456",
                "url": "https://cdn.example.com/s.webp",
            })
        );
    }

    #[test]
    fn send_buttons_payload_expands_each_kind() {
        let buttons = vec![
            Button::reply("Yes").unwrap(),
            Button::call("Call us", "989123456789").unwrap(),
            Button::url("Visit", "https://example.com/shop").unwrap(),
            Button::copy("Copy", "CODE-42").unwrap(),
        ];
        let request = SendButtons::new(
            "62888123456",
            "Pick one",
            buttons,
            "https://cdn.example.com/banner.png",
            Some("powered by wagate".to_owned()),
            None,
        )
        .unwrap();
        let payload = encode_send_buttons(&api_key(), &sender(), &request);

        assert_eq!(payload["url"], "https://cdn.example.com/banner.png");
        assert_eq!(payload["footer"], "powered by wagate");
        assert_eq!(
            payload["button"],
            json!([
                {"type": "reply", "displayText": "Yes"},
                {"type": "call", "displayText": "Call us", "phoneNumber": "989123456789"},
                {"type": "url", "displayText": "Visit", "url": "https://example.com/shop"},
                {"type": "copy", "displayText": "Copy", "copyCode": "CODE-42"},
            ])
        );
    }

    #[test]
    fn send_buttons_payload_omits_blank_footer() {
        let request = SendButtons::new(
            "62888123456",
            "Pick one",
            vec![Button::reply("Yes").unwrap()],
            "https://cdn.example.com/banner.png",
            Some("   ".to_owned()),
            None,
        )
        .unwrap();
        let payload = encode_send_buttons(&api_key(), &sender(), &request);
        assert!(payload.get("footer").is_none());
    }
}
