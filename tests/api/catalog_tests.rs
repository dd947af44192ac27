//! Catalog Tests
//!
//! Descriptor views, attachment substitution and caller-side validation of
//! dynamic calls.

use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_case::test_case;

use botgram::application::projection::{Catalog, View};
use botgram::domain::schema::FieldType;
use botgram::shared::error::SchemaError;

fn catalog() -> Catalog {
    Catalog::canonical().unwrap()
}

fn local_file_or_string() -> FieldType {
    FieldType::Union(vec![
        FieldType::Named("local-file-handle".into()),
        FieldType::String,
    ])
}

#[test]
fn test_catalog_declarations_check() {
    catalog().check().unwrap();
    catalog().instantiate("local-file-handle").check().unwrap();
}

#[test]
fn test_every_view_covers_every_operation() {
    let catalog = catalog();
    for view in View::ALL {
        let signatures = catalog.view(*view);
        assert_eq!(signatures.len(), 76);
        let names: Vec<_> = signatures.iter().map(|s| s.name).collect();
        let wire: Vec<_> = catalog.operations.iter().map(|o| o.name).collect();
        assert_eq!(names, wire);
    }
}

#[test]
fn test_instantiation_reaches_every_attachment_field() {
    let catalog = catalog().instantiate("local-file-handle");
    let fields = catalog.attachment_fields();
    assert!(!fields.is_empty());

    for field in &fields {
        let rendered = field.ty.to_string();
        assert!(
            rendered.contains("\"local-file-handle\""),
            "{}.{} is {}",
            field.owner,
            field.field,
            rendered
        );
        assert!(!field.ty.mentions_attachment());
    }
}

#[test_case("sendPhoto", "photo" ; "send photo")]
#[test_case("sendDocument", "thumb" ; "document thumbnail")]
#[test_case("sendSticker", "sticker" ; "send sticker")]
#[test_case("setStickerSetThumb", "thumb" ; "sticker set thumbnail")]
#[test_case("createNewStickerSet", "png_sticker" ; "png sticker")]
fn test_attachment_or_reference_fields(operation: &str, field: &str) {
    let catalog = catalog().instantiate("local-file-handle");
    let params = catalog.options(operation).unwrap();
    assert_eq!(params.get(field).unwrap().ty, local_file_or_string());
    assert_eq!(
        params.get(field).unwrap().ty.to_string(),
        "\"local-file-handle\" | string"
    );
}

#[test_case("setWebhook", "certificate" ; "webhook certificate")]
#[test_case("setChatPhoto", "photo" ; "chat photo")]
#[test_case("uploadStickerFile", "png_sticker" ; "uploaded sticker")]
#[test_case("addStickerToSet", "tgs_sticker" ; "animated sticker")]
fn test_upload_only_fields(operation: &str, field: &str) {
    let catalog = catalog().instantiate("local-file-handle");
    let params = catalog.options(operation).unwrap();
    assert_eq!(
        params.get(field).unwrap().ty,
        FieldType::Named("local-file-handle".into())
    );
}

#[test]
fn test_media_entities_are_instantiated() {
    let catalog = catalog().instantiate("local-file-handle");
    let input_media = catalog.family("InputMedia").unwrap();
    for variant in &input_media.variants {
        assert_eq!(variant.fields.get("media").unwrap().ty, local_file_or_string());
    }
    let group = catalog.family("MediaGroupInput").unwrap();
    assert_eq!(group.kinds(), vec!["audio", "document", "photo", "video"]);
}

#[test]
fn test_media_group_items_are_instantiated() {
    let catalog = catalog().instantiate("local-file-handle");
    let media = catalog.options("sendMediaGroup").unwrap().get("media").unwrap();
    assert_eq!(media.ty, FieldType::array(FieldType::entity("MediaGroupInput")));
}

#[test_case("getMe" ; "get me")]
#[test_case("logOut" ; "log out")]
#[test_case("close" ; "close")]
#[test_case("getWebhookInfo" ; "webhook info")]
#[test_case("getMyCommands" ; "my commands")]
fn test_zero_parameter_options_are_empty(operation: &str) {
    let catalog = catalog();
    let params = catalog.options(operation).unwrap();
    assert_eq!(params.required().count(), 0);
    assert_eq!(params.optional().count(), 0);

    let signature = View::Options.project(catalog.operation(operation).unwrap());
    assert_eq!(serde_json::to_value(&signature).unwrap(), json!({"name": operation, "params": {}}));
}

#[test]
fn test_options_of_unknown_operation() {
    assert_eq!(
        catalog().options("sendTelepathy").unwrap_err(),
        SchemaError::UnknownOperation("sendTelepathy".into())
    );
}

#[test]
fn test_send_message_options() {
    let catalog = catalog();
    let params = catalog.options("sendMessage").unwrap();
    assert_eq!(params.required_names(), vec!["chat_id", "text"]);
    assert!(params.get("reply_markup").unwrap().optional);
    assert!(params.get("disable_notification").unwrap().optional);
}

#[test]
fn test_views_wrap_results() {
    let catalog = catalog();
    let op = catalog.operation("getChat").unwrap();
    let rendered: Vec<String> = [View::Direct, View::Response, View::Promise, View::PromiseResponse]
        .iter()
        .map(|v| v.project(op).result.unwrap().to_string())
        .collect();
    assert_eq!(
        rendered,
        vec![
            "ChatFromGetChat",
            "Envelope<ChatFromGetChat>",
            "Deferred<ChatFromGetChat>",
            "Deferred<Envelope<ChatFromGetChat>>",
        ]
    );
}

#[test_case("sendTelepathy", json!({}), "unknown_operation" ; "unknown operation")]
#[test_case("sendMessage", json!({"chat_id": 1}), "missing_parameter" ; "missing text")]
#[test_case("sendMessage", json!({"chat_id": 1, "text": "hi", "colour": "red"}), "unknown_parameter" ; "unknown parameter")]
#[test_case("sendMessage", json!({"chat_id": 1, "text": 5}), "type_mismatch" ; "text is a number")]
#[test_case("sendMessage", json!({"chat_id": true, "text": "hi"}), "type_mismatch" ; "chat id is a boolean")]
#[test_case("sendChatAction", json!({"chat_id": 1, "action": "dancing"}), "type_mismatch" ; "unknown action literal")]
#[test_case("sendMessage", json!("hi"), "type_mismatch" ; "arguments are not an object")]
#[test_case("sendMessage", json!({"chat_id": 1, "text": "hi", "reply_markup": {"colour": 1}}), "type_mismatch" ; "markup of no kind")]
#[test_case("sendMediaGroup", json!({"chat_id": 1, "media": [{"type": "sticker", "media": "a"}, {"type": "photo", "media": "b"}]}), "type_mismatch" ; "album item of unknown kind")]
#[test_case("sendMediaGroup", json!({"chat_id": 1, "media": [{"type": "photo", "media": "a"}, {}]}), "type_mismatch" ; "album item without tag")]
#[test_case("editMessageMedia", json!({"inline_message_id": "abc", "media": {"type": "video"}}), "type_mismatch" ; "media without file")]
fn test_validate_call_rejects(operation: &str, args: Value, kind: &str) {
    let err = catalog().validate_call(operation, &args).unwrap_err();
    assert_eq!(err.kind(), kind, "{}", err);
}

#[test_case("sendMessage", json!({"chat_id": "@channel", "text": "hi"}) ; "username chat id")]
#[test_case("sendMessage", json!({"chat_id": 1, "text": "hi", "parse_mode": null}) ; "null optional")]
#[test_case("sendChatAction", json!({"chat_id": 1, "action": "typing"}) ; "action literal")]
#[test_case("getMe", Value::Null ; "null arguments")]
#[test_case("sendPhoto", json!({"chat_id": 1, "photo": {"path": "/tmp/cat.jpg"}}) ; "attachment value")]
#[test_case("sendMessage", json!({"chat_id": 1, "text": "hi", "reply_markup": {"remove_keyboard": true}}) ; "markup of one kind")]
#[test_case("sendMediaGroup", json!({"chat_id": 1, "media": [{"type": "photo", "media": "a"}, {"type": "video", "media": "b"}]}) ; "album items")]
fn test_validate_call_accepts(operation: &str, args: Value) {
    assert!(catalog().validate_call(operation, &args).is_ok());
}

#[test]
fn test_family_mismatch_names_the_item() {
    let err = catalog()
        .validate_call(
            "sendMediaGroup",
            &json!({"chat_id": 1, "media": [{"type": "photo", "media": "a"}, {"type": "sticker"}]}),
        )
        .unwrap_err();
    match err {
        SchemaError::TypeMismatch { parameter, expected, .. } => {
            assert_eq!(parameter, "media[1]");
            assert!(expected.contains("MediaGroupInput"), "{}", expected);
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_missing_required_parameter_is_named() {
    let err = catalog()
        .validate_call("forwardMessage", &json!({"chat_id": 1, "message_id": 2}))
        .unwrap_err();
    assert_eq!(
        err,
        SchemaError::MissingParameter {
            operation: "forwardMessage".into(),
            parameter: "from_chat_id".into(),
        }
    );
}

#[test]
fn test_catalog_serializes() {
    let value = serde_json::to_value(catalog().instantiate("Blob")).unwrap();
    assert_eq!(value["repr"], json!("Blob"));
    assert_eq!(value["operations"].as_array().unwrap().len(), 76);
    assert_eq!(value["operations"][0]["name"], json!("getUpdates"));
}
