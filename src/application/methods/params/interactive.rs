//! Parameters of the inline mode, payment and game operations.

use validator::{Validate, ValidationError};

use crate::application::methods::params::send::SendOptions;
use crate::application::methods::target::MessageTarget;
use crate::domain::entities::{InlineKeyboardMarkup, InlineQueryResult, LabeledPrice, ShippingOption};
use crate::schema_struct;

schema_struct! {
    #[derive(Validate)]
    pub struct AnswerInlineQuery [] {
        pub inline_query_id: String,
        #[validate(length(max = 50, message = "At most 50 results are allowed per query"))]
        pub results: Vec<InlineQueryResult>,
        /// Seconds the result may be cached server-side; defaults to 300.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub cache_time: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub is_personal: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub next_offset: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub switch_pm_text: Option<String>,
        #[validate(length(min = 1, max = 64, message = "Start parameter must be 1-64 characters"))]
        #[serde(skip_serializing_if = "Option::is_none")]
        pub switch_pm_parameter: Option<String>,
    }
}

impl AnswerInlineQuery {
    pub fn new(inline_query_id: impl Into<String>, results: Vec<InlineQueryResult>) -> Self {
        Self {
            inline_query_id: inline_query_id.into(),
            results,
            cache_time: None,
            is_personal: None,
            next_offset: None,
            switch_pm_text: None,
            switch_pm_parameter: None,
        }
    }
}

schema_struct! {
    #[derive(Validate)]
    pub struct SendInvoice [options: SendOptions] {
        pub chat_id: i64,
        #[validate(length(min = 1, max = 32, message = "Title must be 1-32 characters"))]
        pub title: String,
        #[validate(length(min = 1, max = 255, message = "Description must be 1-255 characters"))]
        pub description: String,
        /// Bot-defined payload, 1-128 bytes; not shown to the user.
        pub payload: String,
        pub provider_token: String,
        pub start_parameter: String,
        /// Three-letter ISO 4217 code.
        pub currency: String,
        #[validate(length(min = 1, message = "At least one price is required"))]
        pub prices: Vec<LabeledPrice>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub provider_data: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub photo_url: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub photo_size: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub photo_width: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub photo_height: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub need_name: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub need_phone_number: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub need_email: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub need_shipping_address: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub send_phone_number_to_provider: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub send_email_to_provider: Option<bool>,
        /// Final price depends on the shipping method.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub is_flexible: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub reply_markup: Option<InlineKeyboardMarkup>,
    }
}

schema_struct! {
    #[derive(Validate)]
    #[validate(schema(function = "shipping_answer_is_complete"))]
    pub struct AnswerShippingQuery [] {
        pub shipping_query_id: String,
        pub ok: bool,
        /// Required when `ok` is true.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub shipping_options: Option<Vec<ShippingOption>>,
        /// Required when `ok` is false.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub error_message: Option<String>,
    }
}

impl AnswerShippingQuery {
    pub fn accept(shipping_query_id: impl Into<String>, options: Vec<ShippingOption>) -> Self {
        Self {
            shipping_query_id: shipping_query_id.into(),
            ok: true,
            shipping_options: Some(options),
            error_message: None,
        }
    }

    pub fn reject(shipping_query_id: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self {
            shipping_query_id: shipping_query_id.into(),
            ok: false,
            shipping_options: None,
            error_message: Some(error_message.into()),
        }
    }
}

fn shipping_answer_is_complete(answer: &AnswerShippingQuery) -> Result<(), ValidationError> {
    let complete = if answer.ok {
        answer.shipping_options.is_some()
    } else {
        answer.error_message.is_some()
    };
    if complete {
        return Ok(());
    }
    let mut error = ValidationError::new("shipping_answer");
    error.message = Some(if answer.ok {
        "shipping_options is required when ok is true".into()
    } else {
        "error_message is required when ok is false".into()
    });
    Err(error)
}

schema_struct! {
    /// Must be answered within 10 seconds of the pre-checkout query.
    #[derive(Validate)]
    pub struct AnswerPreCheckoutQuery [] {
        pub pre_checkout_query_id: String,
        pub ok: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub error_message: Option<String>,
    }
}

schema_struct! {
    #[derive(Validate)]
    pub struct SetGameScore [target: MessageTarget] {
        pub user_id: i64,
        /// Non-negative.
        #[validate(range(min = 0, message = "Score must not be negative"))]
        pub score: i64,
        /// Allow the score to decrease.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub force: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub disable_edit_message: Option<bool>,
    }
}

impl SetGameScore {
    pub fn new(target: MessageTarget, user_id: i64, score: i64) -> Self {
        Self {
            target,
            user_id,
            score,
            force: None,
            disable_edit_message: None,
        }
    }
}

schema_struct! {
    /// Scores of the user and several neighbours in the high score table.
    #[derive(Validate)]
    pub struct GetGameHighScores [target: MessageTarget] {
        pub user_id: i64,
    }
}
