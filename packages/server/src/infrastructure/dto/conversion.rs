//! Conversion logic between DTOs and domain types.

use crate::domain::{MessageRecord, ServerEvent};
use crate::infrastructure::dto::websocket as dto;

// ========================================
// Domain → DTO
// ========================================

impl From<&MessageRecord> for dto::MessageRecordDto {
    fn from(record: &MessageRecord) -> Self {
        Self {
            time: record.time.value(),
            text: record.text.clone(),
            author: record.author.as_str().to_string(),
            color: record.color.as_str().to_string(),
        }
    }
}

impl From<&ServerEvent> for dto::ServerMessage {
    fn from(event: &ServerEvent) -> Self {
        match event {
            ServerEvent::History(records) => {
                Self::History(records.iter().map(dto::MessageRecordDto::from).collect())
            }
            ServerEvent::Color(color) => Self::Color(color.as_str().to_string()),
            ServerEvent::Message(record) => Self::Message(record.into()),
            ServerEvent::Notice(notice) => Self::Error(dto::ErrorDto {
                code: notice.code().to_string(),
                message: notice.description().to_string(),
            }),
        }
    }
}

/// Encode a server event into its JSON envelope.
pub fn encode_event(event: &ServerEvent) -> Result<String, serde_json::Error> {
    serde_json::to_string(&dto::ServerMessage::from(event))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ColorToken, DisplayName, ServerNotice, Timestamp};
    use serde_json::json;

    fn record() -> MessageRecord {
        MessageRecord::new(
            Timestamp::new(1000),
            "hi".to_string(),
            DisplayName::from_raw("Alice"),
            ColorToken::new("red").unwrap(),
        )
    }

    #[test]
    fn test_message_event_envelope() {
        // テスト項目: message イベントが type/data 形式の JSON になる
        // given (前提条件):
        let event = ServerEvent::Message(record());

        // when (操作):
        let encoded = encode_event(&event).unwrap();

        // then (期待する結果):
        let value: serde_json::Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "message",
                "data": {"time": 1000, "text": "hi", "author": "Alice", "color": "red"}
            })
        );
    }

    #[test]
    fn test_history_event_envelope_preserves_order() {
        // テスト項目: history イベントがレコードの配列として順序通りにエンコードされる
        // given (前提条件):
        let mut second = record();
        second.time = Timestamp::new(2000);
        let event = ServerEvent::History(vec![record(), second]);

        // when (操作):
        let encoded = encode_event(&event).unwrap();

        // then (期待する結果):
        let value: serde_json::Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(value["type"], "history");
        assert_eq!(value["data"][0]["time"], 1000);
        assert_eq!(value["data"][1]["time"], 2000);
    }

    #[test]
    fn test_color_event_envelope() {
        // テスト項目: color イベントの data は色の文字列
        // given (前提条件):
        let event = ServerEvent::Color(ColorToken::new("plum").unwrap());

        // when (操作):
        let encoded = encode_event(&event).unwrap();

        // then (期待する結果):
        assert_eq!(encoded, r#"{"type":"color","data":"plum"}"#);
    }

    #[test]
    fn test_notice_event_is_encoded_as_error() {
        // テスト項目: 通知イベントは error 型としてコードとメッセージを持つ
        // given (前提条件):
        let event = ServerEvent::Notice(ServerNotice::NoColorAvailable);

        // when (操作):
        let decoded: dto::ServerMessage =
            serde_json::from_str(&encode_event(&event).unwrap()).unwrap();

        // then (期待する結果):
        match decoded {
            dto::ServerMessage::Error(error) => {
                assert_eq!(error.code, "no_color_available");
                assert!(!error.message.is_empty());
            }
            other => panic!("unexpected envelope: {:?}", other),
        }
    }
}
