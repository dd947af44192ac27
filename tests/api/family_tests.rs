//! Family Tests
//!
//! Closed families seen through the catalog: disjointness, the extended
//! chat family and classification of dynamic values.

use pretty_assertions::assert_eq;
use serde_json::json;

use botgram::application::methods::{GetChat, GetUpdates, Telegram};
use botgram::application::projection::{Catalog, TelegramD};
use botgram::domain::entities::{get_chat_details, next_offset, ChatFromGetChat, Update};
use botgram::domain::schema::Family;

use crate::common::{private_chat, text_message, LocalFile, ScriptedTransport};

fn catalog() -> Catalog {
    Catalog::canonical().unwrap()
}

#[test]
fn test_every_family_is_disjoint() {
    for family in catalog().families {
        family
            .check_disjoint()
            .unwrap_or_else(|e| panic!("{} is not disjoint: {}", family.name, e));
    }
}

#[test]
fn test_get_chat_variants_are_base_plus_detail() {
    let catalog = catalog();
    let chat = catalog.family("Chat").unwrap();
    let detailed = catalog.family("ChatFromGetChat").unwrap();
    let details = get_chat_details().unwrap();

    assert_eq!(detailed.kinds(), chat.kinds());
    assert_eq!(detailed.variants.len(), chat.variants.len());
    assert_eq!(
        chat.extend("ChatFromGetChat", &details).unwrap().variants,
        detailed.variants
    );

    for base in &chat.variants {
        let variant = detailed.variant(base.kind).unwrap();
        let mut expected = base.fields.names();
        expected.extend(details[&base.kind].fields.names());
        expected.sort_unstable();
        assert_eq!(variant.fields.names(), expected, "variant {}", base.kind);
    }
}

#[test]
fn test_get_chat_detail_does_not_cross_kinds() {
    let detailed = catalog().family("ChatFromGetChat").cloned().unwrap();
    let private = detailed.variant("private").unwrap();
    let supergroup = detailed.variant("supergroup").unwrap();

    assert!(private.fields.contains("bio"));
    assert!(!private.fields.contains("slow_mode_delay"));
    assert!(supergroup.fields.contains("slow_mode_delay"));
    assert!(!supergroup.fields.contains("bio"));
}

#[test]
fn test_get_chat_returns_detailed_chat() {
    let mut chat = private_chat(42);
    if let Some(object) = chat.as_object_mut() {
        object.insert("bio".into(), json!("hello"));
        object.insert("pinned_message".into(), text_message(42, 3, "pinned"));
    }
    let transport = ScriptedTransport::new().ok("getChat", chat);
    let api: TelegramD<LocalFile, _> = TelegramD::new(transport);

    let chat: ChatFromGetChat = api.get_chat(GetChat::new(42)).unwrap();
    assert_eq!(chat.kind(), "private");
    assert_eq!(
        chat.pinned_message().and_then(|m| m.text()),
        Some("pinned")
    );
    assert_eq!(chat.into_chat().id(), 42);
}

#[test]
fn test_classify_prefers_animation_over_document() {
    let file = json!({"file_id": "a", "file_unique_id": "b"});
    let mut message = text_message(42, 7, "unused");
    if let Some(object) = message.as_object_mut() {
        object.remove("text");
        object.insert(
            "animation".into(),
            json!({"file_id": "a", "file_unique_id": "b", "width": 1, "height": 1, "duration": 2}),
        );
        object.insert("document".into(), file);
    }

    let catalog = catalog();
    let kind = catalog.family("Message").unwrap().classify(&message).unwrap().kind;
    assert_eq!(kind, "animation");
}

#[test]
fn test_classify_update_by_payload_key() {
    let catalog = catalog();
    let updates = catalog.family("Update").unwrap();

    let message = json!({"update_id": 10, "message": text_message(42, 7, "hi")});
    assert_eq!(updates.classify(&message).unwrap().kind, "message");

    let poll_answer = json!({
        "update_id": 11,
        "poll_answer": {
            "poll_id": "p",
            "user": {"id": 1, "is_bot": false, "first_name": "Ada"},
            "option_ids": [0]
        }
    });
    assert_eq!(updates.classify(&poll_answer).unwrap().kind, "poll_answer");

    let err = updates.classify(&json!({"update_id": 12})).unwrap_err();
    assert_eq!(err.kind(), "no_matching_variant");
}

#[test]
fn test_get_updates_yields_next_offset() {
    let transport = ScriptedTransport::new().ok(
        "getUpdates",
        json!([
            {"update_id": 10, "message": text_message(42, 7, "first")},
            {"update_id": 11, "edited_message": {
                "message_id": 7,
                "date": 1_600_000_000,
                "edit_date": 1_600_000_100,
                "chat": private_chat(42),
                "text": "first, edited"
            }}
        ]),
    );
    let api: TelegramD<LocalFile, _> = TelegramD::new(transport);

    let updates: Vec<Update> = api.get_updates(GetUpdates::default()).unwrap();
    let kinds: Vec<&str> = updates.iter().map(|u| u.kind()).collect();
    assert_eq!(kinds, vec!["message", "edited_message"]);
    assert_eq!(
        updates[1].message().and_then(|m| m.text()),
        Some("first, edited")
    );
    assert_eq!(next_offset(&updates), Some(12));
}
