//! Common Test Utilities
//!
//! Shared fixtures and a scripted transport that answers from canned
//! envelopes and records every call it receives.

use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::Serialize;
use serde_json::{json, Value};

use botgram::application::methods::{Attachment, Method};
use botgram::application::projection::{ApiError, ApiResponse, AsyncTransport, Transport};

/// Attachment representation used by the tests: a handle to a local file.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LocalFile(pub String);

/// A call as the transport saw it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub operation: &'static str,
    pub params: Value,
}

/// Transport answering each operation from a queue of scripted envelopes.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<HashMap<&'static str, VecDeque<Value>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw envelope for `operation`.
    pub fn respond(self, operation: &'static str, envelope: Value) -> Self {
        self.responses
            .lock()
            .entry(operation)
            .or_default()
            .push_back(envelope);
        self
    }

    /// Queue a successful result for `operation`.
    pub fn ok(self, operation: &'static str, result: Value) -> Self {
        self.respond(operation, json!({"ok": true, "result": result}))
    }

    /// Queue a failure for `operation`.
    pub fn fail(self, operation: &'static str, error_code: i32, description: &str) -> Self {
        self.respond(
            operation,
            json!({"ok": false, "error_code": error_code, "description": description}),
        )
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    fn dispatch<F: Attachment, M: Method<F>>(&self, method: M) -> ApiResponse<M::Output> {
        let operation = <M as Method<F>>::NAME;
        let params = serde_json::to_value(&method).expect("parameters serialize");
        self.calls.lock().push(RecordedCall { operation, params });

        let envelope = self
            .responses
            .lock()
            .get_mut(operation)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| {
                json!({"ok": false, "error_code": 404, "description": "Not Found: nothing scripted"})
            });
        serde_json::from_value(envelope)
            .unwrap_or_else(|e| ApiResponse::Err(ApiError::new(502, e.to_string())))
    }
}

impl<F: Attachment> Transport<F> for ScriptedTransport {
    fn call<M: Method<F>>(&self, method: M) -> ApiResponse<M::Output> {
        self.dispatch::<F, M>(method)
    }
}

#[async_trait]
impl<F: Attachment> AsyncTransport<F> for ScriptedTransport {
    async fn call_async<M: Method<F>>(&self, method: M) -> ApiResponse<M::Output> {
        tokio::task::yield_now().await;
        self.dispatch::<F, M>(method)
    }
}

/// A private chat.
pub fn private_chat(id: i64) -> Value {
    json!({"id": id, "type": "private", "first_name": "Ada"})
}

/// A text message in a private chat.
pub fn text_message(chat_id: i64, message_id: i64, text: &str) -> Value {
    json!({
        "message_id": message_id,
        "date": 1_600_000_000,
        "chat": private_chat(chat_id),
        "from": {"id": 1, "is_bot": false, "first_name": "Ada"},
        "text": text,
    })
}

/// The same message after an edit.
pub fn edited_text_message(chat_id: i64, message_id: i64, text: &str) -> Value {
    let mut message = text_message(chat_id, message_id, text);
    if let Some(object) = message.as_object_mut() {
        object.insert("edit_date".into(), json!(1_600_000_100));
    }
    message
}

/// The bot itself, as returned by `getMe`.
pub fn bot_user() -> Value {
    json!({
        "id": 123456,
        "is_bot": true,
        "first_name": "Botgram",
        "username": "botgram_bot",
        "can_join_groups": true,
        "can_read_all_group_messages": false,
        "supports_inline_queries": true,
    })
}
