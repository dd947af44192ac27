//! Conditional Result Tests
//!
//! The success branch of an edit is decided by its target: a chat target
//! yields the edited message, an inline target yields `true`.

use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

use botgram::application::methods::{
    EditMessageReplyMarkup, EditMessageText, EditResult, GetGameHighScores, MessageTarget,
    ResultBranch, SetGameScore, Telegram,
};
use botgram::application::projection::{Catalog, TelegramD, TelegramPR, TelegramR};
use botgram::shared::error::SchemaError;

use crate::common::{edited_text_message, text_message, LocalFile, ScriptedTransport};

#[test]
fn test_chat_target_yields_edited_message() {
    let transport =
        ScriptedTransport::new().ok("editMessageText", edited_text_message(42, 7, "hi"));
    let api: TelegramD<LocalFile, _> = TelegramD::new(transport);

    let result = api
        .edit_message_text(EditMessageText::new(MessageTarget::chat(42, 7), "hi"))
        .unwrap();

    assert_eq!(result.branch(), ResultBranch::Message);
    let edited = result.into_message().unwrap();
    assert_eq!(edited.message.text, "hi");
    assert_eq!(edited.edit_date, 1_600_000_100);

    let calls = api.transport().calls();
    assert_eq!(
        calls[0].params,
        json!({"chat_id": 42, "message_id": 7, "text": "hi"})
    );
}

#[test]
fn test_inline_target_yields_true() {
    let transport = ScriptedTransport::new().ok("editMessageText", json!(true));
    let api: TelegramD<LocalFile, _> = TelegramD::new(transport);

    let result = api
        .edit_message_text(EditMessageText::new(MessageTarget::inline("abc"), "hi"))
        .unwrap();

    assert!(result.is_true());
    let calls = api.transport().calls();
    assert_eq!(
        calls[0].params,
        json!({"inline_message_id": "abc", "text": "hi"})
    );
}

#[test]
fn test_mismatched_branch_is_a_failure() {
    let transport =
        ScriptedTransport::new().ok("editMessageText", edited_text_message(42, 7, "hi"));
    let api: TelegramR<LocalFile, _> = TelegramR::new(transport);

    let response = api.edit_message_text(EditMessageText::new(MessageTarget::inline("abc"), "hi"));

    let error = response.into_result().unwrap_err();
    assert_eq!(error.error_code, 500);
    assert!(error.description.contains("editMessageText"));
    assert!(error.description.contains("`message`"));
}

#[tokio::test]
async fn test_mismatch_is_detected_by_async_views() {
    let transport = ScriptedTransport::new().ok("setGameScore", json!(true));
    let api: TelegramPR<LocalFile, _> = TelegramPR::new(transport);

    let response = api
        .set_game_score(SetGameScore::new(MessageTarget::chat(42, 7), 1, 100))
        .await;

    assert_eq!(response.into_result().unwrap_err().error_code, 500);
}

#[test]
fn test_unedited_message_is_not_an_edit_result() {
    let transport = ScriptedTransport::new().ok("editMessageReplyMarkup", text_message(42, 7, "hi"));
    let api: TelegramR<LocalFile, _> = TelegramR::new(transport);

    let response = api.edit_message_reply_markup(EditMessageReplyMarkup {
        target: MessageTarget::chat(42, 7),
        reply_markup: None,
    });

    assert_eq!(response.into_result().unwrap_err().error_code, 502);
}

#[test]
fn test_non_conditional_targeted_operation_accepts_its_result() {
    let transport = ScriptedTransport::new().ok(
        "getGameHighScores",
        json!([{"position": 1, "user": {"id": 1, "is_bot": false, "first_name": "Ada"}, "score": 42}]),
    );
    let api: TelegramD<LocalFile, _> = TelegramD::new(transport);

    let scores = api
        .get_game_high_scores(GetGameHighScores {
            target: MessageTarget::inline("abc"),
            user_id: 1,
        })
        .unwrap();
    assert_eq!(scores.len(), 1);
    assert_eq!(scores[0].score, 42);
}

#[test]
fn test_edit_result_shape_shares_failure_branch() {
    let catalog = Catalog::canonical().unwrap();
    let op = catalog.operation("editMessageCaption").unwrap();
    assert_eq!(op.result.to_string(), "Edited<CaptionableMessage> | true");
}

#[test_case(json!({"chat_id": 42, "message_id": 7, "text": "hi"}) ; "chat target")]
#[test_case(json!({"inline_message_id": "abc", "text": "hi"}) ; "inline target")]
fn test_exactly_one_target_is_accepted(args: serde_json::Value) {
    let catalog = Catalog::canonical().unwrap();
    assert!(catalog.validate_call("editMessageText", &args).is_ok());
}

#[test_case(json!({"text": "hi"}) ; "no target")]
#[test_case(json!({"chat_id": 42, "message_id": 7, "inline_message_id": "abc", "text": "hi"}) ; "both targets")]
#[test_case(json!({"chat_id": 42, "text": "hi"}) ; "partial chat target")]
fn test_ambiguous_target_is_rejected(args: serde_json::Value) {
    let catalog = Catalog::canonical().unwrap();
    let err = catalog.validate_call("editMessageText", &args).unwrap_err();
    assert!(matches!(err, SchemaError::AmbiguousTarget { .. }), "{:?}", err);
}

#[test]
fn test_edit_result_deserializes_both_branches() {
    let message: EditResult<botgram::domain::entities::TextMessage> =
        serde_json::from_value(edited_text_message(1, 2, "x")).unwrap();
    assert_eq!(message.branch(), ResultBranch::Message);

    let flag: EditResult<botgram::domain::entities::TextMessage> =
        serde_json::from_value(json!(true)).unwrap();
    assert_eq!(flag.branch(), ResultBranch::True);
}
