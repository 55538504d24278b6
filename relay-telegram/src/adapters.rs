//! Adapters from Telegram (teloxide) types to relay_core types.

use relay_core::{Chat, Message, ToCoreMessage, ToCoreUser, User};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Wraps a teloxide Message for conversion to core [`Message`].
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        let text = self.0.text();
        Message {
            id: self.0.id.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(User::anonymous),
            chat: Chat {
                id: self.0.chat.id.0,
                chat_type: format!("{:?}", self.0.chat.kind),
            },
            content: text.unwrap_or("").to_string(),
            message_type: if text.is_some() { "text" } else { "other" }.to_string(),
            created_at: self.0.date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_message(json: &str) -> teloxide::types::Message {
        serde_json::from_str(json).expect("valid Telegram message JSON")
    }

    /// **Test: TelegramUserWrapper converts teloxide User to core User with correct id, username, names.**
    #[test]
    fn test_telegram_user_wrapper_to_core() {
        let user = teloxide::types::User {
            id: teloxide::types::UserId(123),
            is_bot: false,
            first_name: "Test".to_string(),
            last_name: Some("User".to_string()),
            username: Some("testuser".to_string()),
            language_code: Some("en".to_string()),
            is_premium: false,
            added_to_attachment_menu: false,
        };

        let core_user = TelegramUserWrapper(&user).to_core();

        assert_eq!(core_user.id, 123);
        assert_eq!(core_user.username, Some("testuser".to_string()));
        assert_eq!(core_user.first_name, Some("Test".to_string()));
        assert_eq!(core_user.last_name, Some("User".to_string()));
    }

    /// **Test: A text message keeps its text, chat id and sender.**
    #[test]
    fn test_text_message_to_core() {
        let msg = parse_message(
            r#"{
                "message_id": 42,
                "date": 1706529600,
                "chat": {"id": 456, "type": "private", "first_name": "Test"},
                "from": {"id": 123, "is_bot": false, "first_name": "Test", "username": "testuser"},
                "text": "https://example.com/files/my-file-01.pdf"
            }"#,
        );

        let core = TelegramMessageWrapper(&msg).to_core();

        assert_eq!(core.id, msg.id.to_string());
        assert_eq!(core.chat.id, 456);
        assert_eq!(core.user.id, 123);
        assert_eq!(core.content, "https://example.com/files/my-file-01.pdf");
        assert_eq!(core.message_type, "text");
        assert_eq!(core.created_at.timestamp(), 1706529600);
    }
}
