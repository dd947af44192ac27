//! Parameters of the update-delivery and bot-session operations.

use validator::Validate;

use crate::domain::value_objects::Upload;
use crate::schema_struct;

schema_struct! {
    /// Long polling for incoming updates.
    #[derive(Default, Validate)]
    pub struct GetUpdates [] {
        /// Identifier of the first update to be returned; earlier updates are
        /// confirmed and dropped.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub offset: Option<i64>,
        #[validate(range(min = 1, max = 100, message = "Limit must be 1-100"))]
        #[serde(skip_serializing_if = "Option::is_none")]
        pub limit: Option<i64>,
        /// Long polling timeout in seconds.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub timeout: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub allowed_updates: Option<Vec<String>>,
    }
}

impl GetUpdates {
    /// Poll from `offset` onwards, waiting up to `timeout` seconds.
    pub fn from_offset(offset: Option<i64>, timeout: i64) -> Self {
        Self {
            offset,
            timeout: Some(timeout),
            ..Default::default()
        }
    }
}

schema_struct! {
    #[derive(Validate)]
    pub struct SetWebhook<F> [] {
        pub url: String,
        /// Public key certificate, for self-signed setups.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub certificate: Option<Upload<F>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub ip_address: Option<String>,
        #[validate(range(min = 1, max = 100, message = "Max connections must be 1-100"))]
        #[serde(skip_serializing_if = "Option::is_none")]
        pub max_connections: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub allowed_updates: Option<Vec<String>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub drop_pending_updates: Option<bool>,
    }
}

impl<F> SetWebhook<F> {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            certificate: None,
            ip_address: None,
            max_connections: None,
            allowed_updates: None,
            drop_pending_updates: None,
        }
    }
}

schema_struct! {
    #[derive(Default, Validate)]
    pub struct DeleteWebhook [] {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub drop_pending_updates: Option<bool>,
    }
}

schema_struct! {
    #[derive(Default, Validate)]
    pub struct GetWebhookInfo [] {}
}

schema_struct! {
    #[derive(Default, Validate)]
    pub struct GetMe [] {}
}

schema_struct! {
    /// Log out from the cloud Bot API server.
    #[derive(Default, Validate)]
    pub struct LogOut [] {}
}

schema_struct! {
    /// Close the bot instance before moving it to another local server.
    #[derive(Default, Validate)]
    pub struct Close [] {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schema::{Describe, FieldType};
    use crate::shared::validation::validate;
    use serde_json::json;

    #[test]
    fn test_get_me_has_no_fields() {
        let fields = GetMe::fields().unwrap();
        assert!(fields.is_empty());
        assert_eq!(serde_json::to_value(GetMe::default()).unwrap(), json!({}));
    }

    #[test]
    fn test_get_updates_limit_bounds() {
        let mut params = GetUpdates::from_offset(Some(10), 30);
        assert!(validate(&params).is_ok());
        params.limit = Some(0);
        assert!(validate(&params).is_err());
        params.limit = Some(101);
        assert!(validate(&params).is_err());
    }

    #[test]
    fn test_webhook_certificate_is_upload_only() {
        let fields = SetWebhook::<String>::fields().unwrap();
        let certificate = fields.get("certificate").unwrap();
        assert_eq!(certificate.ty, FieldType::Upload);
        assert!(certificate.optional);
    }
}
