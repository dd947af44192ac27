//! Validation Tests
//!
//! Parameters are checked before anything reaches the transport, and the
//! instrumented transport observes what does.

use pretty_assertions::assert_eq;

use botgram::application::methods::{
    CreateNewStickerSet, GetMe, SendMessage, SendPhoto, StickerFile, Telegram,
};
use botgram::application::projection::{TelegramD, TelegramP, TelegramR};
use botgram::domain::value_objects::InputFile;
use botgram::infrastructure::metrics::gather_metrics;
use botgram::infrastructure::Instrumented;

use crate::common::{bot_user, LocalFile, ScriptedTransport};

#[test]
fn test_invalid_params_never_reach_transport() {
    let api: TelegramR<LocalFile, _> = TelegramR::new(ScriptedTransport::new());

    let response = api.send_message(SendMessage::new(42, ""));
    let error = response.err().cloned().unwrap();

    assert_eq!(error.error_code, 400);
    assert!(error.description.starts_with("Bad Request:"));
    assert!(error.description.contains("text"));
    assert_eq!(api.transport().call_count(), 0);
}

#[tokio::test]
async fn test_async_view_rejects_before_sending() {
    let api: TelegramP<LocalFile, _> = TelegramP::new(ScriptedTransport::new());

    let error = api.send_message(SendMessage::new(42, "")).await.unwrap_err();
    assert_eq!(error.error_code, 400);
    assert_eq!(api.transport().call_count(), 0);
}

#[test]
fn test_nested_caption_is_validated() {
    let api: TelegramD<LocalFile, _> = TelegramD::new(ScriptedTransport::new());
    let photo = SendPhoto::new(42, InputFile::upload(LocalFile("cat.jpg".into())))
        .caption("x".repeat(1025));

    let error = api.send_photo(photo).unwrap_err();
    assert!(error.description.contains("caption.caption"));
    assert!(error.description.contains("at most 1024"));
    assert_eq!(api.transport().call_count(), 0);
}

#[test]
fn test_sticker_set_needs_exactly_one_file() {
    let api: TelegramD<LocalFile, _> = TelegramD::new(ScriptedTransport::new());
    let neither = StickerFile {
        png_sticker: None,
        tgs_sticker: None,
    };

    let error = api
        .create_new_sticker_set(CreateNewStickerSet::new(1, "cats_by_botgram_bot", "Cats", neither, "🐱"))
        .unwrap_err();
    assert!(error.description.contains("Exactly one of png_sticker and tgs_sticker"));
    assert_eq!(api.transport().call_count(), 0);
}

#[test]
fn test_valid_sticker_set_is_sent() {
    let transport = ScriptedTransport::new().ok("createNewStickerSet", serde_json::json!(true));
    let api: TelegramD<LocalFile, _> = TelegramD::new(transport);
    let file = StickerFile::tgs(LocalFile("cat.tgs".into()));

    api.create_new_sticker_set(CreateNewStickerSet::new(1, "cats_by_botgram_bot", "Cats", file, "🐱"))
        .unwrap();

    let calls = api.transport().calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].params["tgs_sticker"], "cat.tgs");
    assert!(calls[0].params.get("png_sticker").is_none());
}

#[test]
fn test_instrumented_transport_records_calls() {
    let transport = ScriptedTransport::new()
        .ok("getMe", bot_user())
        .fail("getMe", 401, "Unauthorized");
    let api: TelegramR<LocalFile, _> = TelegramR::new(Instrumented::new(transport));

    let me = api.get_me(GetMe::default()).into_result().unwrap();
    assert_eq!(me.username, "botgram_bot");

    let failed = api.get_me(GetMe::default());
    assert_eq!(failed.err().map(|e| e.error_code), Some(401));
    assert_eq!(api.transport().inner().call_count(), 2);

    let metrics = gather_metrics().unwrap();
    assert!(metrics.contains("botgram_api_calls_total"));
    assert!(metrics.contains(r#"method="getMe""#));
    assert!(metrics.contains(r#"outcome="error""#));
}
