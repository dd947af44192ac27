//! Projection Tests
//!
//! Every view of an operation observes the same call; the direct view is
//! the envelope view unwrapped.

use pretty_assertions::assert_eq;
use serde_json::json;

use botgram::application::methods::{GetMe, SendMessage, SendPhoto, Telegram};
use botgram::application::projection::{
    ApiResponse, TelegramD, TelegramP, TelegramPR, TelegramR,
};
use botgram::domain::value_objects::InputFile;

use crate::common::{bot_user, text_message, LocalFile, ScriptedTransport};

#[test]
fn test_direct_is_unwrapped_envelope() {
    let transport = ScriptedTransport::new()
        .ok("sendMessage", text_message(42, 7, "hi"))
        .ok("sendMessage", text_message(42, 7, "hi"));
    let envelope: TelegramR<LocalFile, _> = TelegramR::new(transport);
    let direct: TelegramD<LocalFile, _> = envelope.view();

    let wrapped = envelope.send_message(SendMessage::new(42, "hi"));
    let unwrapped = direct.send_message(SendMessage::new(42, "hi")).unwrap();

    assert_eq!(wrapped.into_result().unwrap(), unwrapped);
    assert_eq!(unwrapped.text, "hi");
    assert_eq!(envelope.transport().call_count(), 2);
}

#[test]
fn test_direct_surfaces_failure_as_error() {
    let transport =
        ScriptedTransport::new().fail("sendMessage", 403, "Forbidden: bot was blocked by the user");
    let api: TelegramD<LocalFile, _> = TelegramD::new(transport);

    let error = api.send_message(SendMessage::new(42, "hi")).unwrap_err();
    assert_eq!(error.error_code, 403);
    assert_eq!(error.description, "Forbidden: bot was blocked by the user");
}

#[test]
fn test_envelope_carries_retry_hint() {
    let transport = ScriptedTransport::new().respond(
        "getMe",
        json!({
            "ok": false,
            "error_code": 429,
            "description": "Too Many Requests: retry after 5",
            "parameters": {"retry_after": 5}
        }),
    );
    let api: TelegramR<LocalFile, _> = TelegramR::new(transport);

    let response = api.get_me(GetMe::default());
    assert!(!response.is_ok());
    assert_eq!(response.retry_after().map(|d| d.as_secs()), Some(5));
}

#[tokio::test]
async fn test_async_views_agree() {
    let transport = ScriptedTransport::new()
        .ok("getMe", bot_user())
        .ok("getMe", bot_user());
    let deferred_envelope: TelegramPR<LocalFile, _> = TelegramPR::new(transport);
    let deferred: TelegramP<LocalFile, _> = deferred_envelope.view();

    let envelope = deferred_envelope.get_me(GetMe::default()).await;
    let value = deferred.get_me(GetMe::default()).await.unwrap();

    match envelope {
        ApiResponse::Ok(me) => assert_eq!(me, value),
        ApiResponse::Err(error) => panic!("unexpected failure: {}", error),
    }
    assert_eq!(value.username, "botgram_bot");
}

#[test]
fn test_deferred_view_settles_like_direct() {
    let transport = ScriptedTransport::new()
        .ok("sendMessage", text_message(42, 7, "hi"))
        .fail("sendMessage", 400, "Bad Request: chat not found");
    let deferred: TelegramP<LocalFile, _> = TelegramP::new(transport);
    let direct: TelegramD<LocalFile, _> = deferred.view();

    let sent = tokio_test::block_on(deferred.send_message(SendMessage::new(42, "hi"))).unwrap();
    assert_eq!(sent.text, "hi");

    let error = tokio_test::block_on(deferred.send_message(SendMessage::new(42, "hi"))).unwrap_err();
    assert_eq!(error.description, "Bad Request: chat not found");

    let unscripted = direct.send_message(SendMessage::new(42, "hi")).unwrap_err();
    assert_eq!(unscripted.error_code, 404);
    assert_eq!(deferred.transport().call_count(), 3);
}

#[tokio::test]
async fn test_outstanding_calls_complete_in_any_order() {
    let transport = ScriptedTransport::new()
        .ok("sendMessage", text_message(1, 10, "first"))
        .ok("getMe", bot_user());
    let api: TelegramPR<LocalFile, _> = TelegramPR::new(transport);

    let send = api.send_message(SendMessage::new(1, "first"));
    let me = api.get_me(GetMe::default());

    let me = me.await.into_result().unwrap();
    let sent = send.await.into_result().unwrap();
    assert_eq!(me.first_name, "Botgram");
    assert_eq!(sent.text, "first");
}

#[test]
fn test_upload_reaches_transport_as_attachment() {
    let transport = ScriptedTransport::new();
    let api: TelegramR<LocalFile, _> = TelegramR::new(transport);

    let params = SendPhoto::new(42, InputFile::upload(LocalFile("cat.jpg".into()))).caption("cat");
    let _ = api.send_photo(params);

    let calls = api.transport().calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].operation, "sendPhoto");
    assert_eq!(
        calls[0].params,
        json!({"chat_id": 42, "photo": "cat.jpg", "caption": "cat"})
    );
}
