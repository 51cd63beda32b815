use super::{ClientEvent, ServerEvent};
use crate::client::Delivery;
use crate::hub::Message;
use serde_json::json;
use tungstenite::protocol::Message as WsMessage;

fn frame_json(frame: WsMessage) -> serde_json::Value {
    match frame {
        WsMessage::Text(text) => serde_json::from_str(text.as_str()).unwrap(),
        other => panic!("Expected a text frame, got {other:?}"),
    }
}

#[test]
fn test_decode_chat_message() {
    let text = json!({
        "event": "chat:message",
        "data": {"id": "x1", "userId": "u1", "username": "alice", "text": "hi", "timestamp": 1000}
    })
    .to_string();

    let event = ClientEvent::from_frame(&text).unwrap();
    assert_eq!(
        event,
        ClientEvent::Message(Message::new("x1", 1000, "u1", "alice", "hi"))
    );
}

#[test]
fn test_decode_keeps_malformed_payload() {
    let text = json!({"event": "chat:message", "data": {"text": 42}}).to_string();

    let ClientEvent::Message(message) = ClientEvent::from_frame(&text).unwrap();
    assert_eq!(message.as_value(), &json!({"text": 42}));
    assert_eq!(message.text(), None);
}

#[test]
fn test_decode_missing_data_as_null() {
    let ClientEvent::Message(message) =
        ClientEvent::from_frame(r#"{"event":"chat:message"}"#).unwrap();
    assert_eq!(message.as_value(), &serde_json::Value::Null);
}

#[test]
fn test_decode_rejects_missing_event() {
    assert!(ClientEvent::from_frame(r#"{"data": {"id": "x1"}}"#).is_err());
}

#[test]
fn test_decode_rejects_unknown_event() {
    let text = json!({"event": "chat:typing", "data": {}}).to_string();
    assert!(ClientEvent::from_frame(&text).is_err());
}

#[test]
fn test_decode_rejects_non_envelope() {
    assert!(ClientEvent::from_frame("hello there").is_err());
    assert!(ClientEvent::from_frame(r#"{"id": "x1"}"#).is_err());
}

#[test]
fn test_encode_buffer_event() {
    let event = ServerEvent::from(Delivery::Buffer(vec![Message::new(
        "m1", 5, "u1", "alice", "first",
    )]));

    assert_eq!(
        frame_json(event.to_frame().unwrap()),
        json!({
            "event": "chat:buffer",
            "data": [{"id": "m1", "timestamp": 5, "userId": "u1", "username": "alice", "text": "first"}]
        })
    );
}

#[test]
fn test_encode_empty_buffer_event() {
    let event = ServerEvent::from(Delivery::Buffer(Vec::new()));
    assert_eq!(
        frame_json(event.to_frame().unwrap()),
        json!({"event": "chat:buffer", "data": []})
    );
}

#[test]
fn test_encode_message_event() {
    let message = Message::from(json!({"anything": true}));
    let event = ServerEvent::from(Delivery::Message(message));
    assert_eq!(
        frame_json(event.to_frame().unwrap()),
        json!({"event": "chat:message", "data": {"anything": true}})
    );
}

#[test]
fn test_client_frame_decodes_on_server_side() {
    let message = Message::new("x1", 1000, "u1", "alice", "hi");
    let frame = ClientEvent::Message(message.clone()).to_frame().unwrap();
    let text = frame.to_text().unwrap();

    assert_eq!(
        ClientEvent::from_frame(text).unwrap(),
        ClientEvent::Message(message)
    );
}
