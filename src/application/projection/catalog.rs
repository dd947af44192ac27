//! Descriptor-level projections.
//!
//! The [`Catalog`] holds the descriptors of every operation, family and
//! standalone entity. Views over it are derived from the operation
//! descriptors by one rule per [`View`], and the attachment representation
//! is substituted by [`Catalog::instantiate`] for all of them at once.

use std::str::FromStr;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::application::methods::{
    describe_operations, Attachment, Method, Unbound, CHAT_TARGET, INLINE_TARGET,
};
use crate::domain::entities::*;
use crate::domain::schema::{Describe, EntitySpec, FamilySpec, Family, FieldSet, FieldSpec, FieldType, Shape};
use crate::literal_enum;
use crate::shared::error::SchemaError;

/// Descriptor of one operation of the table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationSpec {
    /// Wire name.
    pub name: &'static str,
    /// Name of the method on [`Telegram`](crate::application::methods::Telegram).
    pub method: &'static str,
    pub params: FieldSet,
    pub result: FieldType,
    /// The success branch depends on the message target.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub conditional: bool,
}

impl OperationSpec {
    pub fn of<F: Attachment, M: Method<F>>(method: &'static str) -> Result<Self, SchemaError> {
        Ok(Self {
            name: <M as Method<F>>::NAME,
            method,
            params: <M as Describe>::fields()?,
            result: <M::Output as Shape>::shape(),
            conditional: <M as Method<F>>::CONDITIONAL,
        })
    }

    /// Whether the operation addresses a message by chat or inline handle.
    pub fn targeted(&self) -> bool {
        self.params.contains(INLINE_TARGET)
    }

    pub fn attachment_fields(&self) -> Vec<&FieldSpec> {
        self.params.iter().filter(|f| f.ty.is_attachment()).collect()
    }

    pub fn instantiate(&self, repr: &str) -> Self {
        Self {
            params: self.params.instantiate(repr),
            result: self.result.instantiate(repr),
            ..self.clone()
        }
    }
}

literal_enum! {
    /// The derived views of the operation table.
    pub enum View {
        "direct" => Direct,
        "response" => Response,
        "promise" => Promise,
        "promise_response" => PromiseResponse,
        "options" => Options,
    }
}

impl View {
    /// Signature of `operation` under this view.
    pub fn project(&self, operation: &OperationSpec) -> ViewSignature {
        let result = match self {
            Self::Direct => Some(operation.result.clone()),
            Self::Response => Some(FieldType::Envelope(Box::new(operation.result.clone()))),
            Self::Promise => Some(FieldType::Deferred(Box::new(operation.result.clone()))),
            Self::PromiseResponse => Some(FieldType::Deferred(Box::new(FieldType::Envelope(
                Box::new(operation.result.clone()),
            )))),
            Self::Options => None,
        };
        ViewSignature {
            name: operation.name,
            params: operation.params.clone(),
            result,
        }
    }
}

impl FromStr for View {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|view| view.as_str() == s)
            .ok_or_else(|| SchemaError::Validation(format!("unknown view `{}`", s)))
    }
}

/// One operation as seen through a view. The options view has no result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewSignature {
    pub name: &'static str,
    pub params: FieldSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<FieldType>,
}

/// A field that accepts an attachment, with the descriptor it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttachmentField {
    pub owner: String,
    pub field: &'static str,
    #[serde(rename = "type")]
    pub ty: FieldType,
}

/// Descriptors of the whole contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    /// Attachment representation, once substituted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repr: Option<String>,
    pub operations: Vec<OperationSpec>,
    pub families: Vec<FamilySpec>,
    pub entities: Vec<EntitySpec>,
}

impl Catalog {
    /// The catalog with `F` left abstract.
    pub fn canonical() -> Result<Self, SchemaError> {
        let families = vec![
            Chat::spec()?,
            ChatFromGetChat::spec()?,
            Message::spec()?,
            CaptionableMessage::spec()?,
            MediaMessage::spec()?,
            MediaGroupMessage::spec()?,
            ReplyMarkup::spec()?,
            InlineQueryResult::spec()?,
            InputMedia::<Unbound>::spec()?,
            MediaGroupInput::<Unbound>::spec()?,
            Update::spec()?,
        ];
        let entities = vec![
            EntitySpec::of::<User>()?,
            EntitySpec::of::<UserFromGetMe>()?,
            EntitySpec::of::<MessageEntity>()?,
            EntitySpec::of::<MessageId>()?,
            EntitySpec::of::<PhotoSize>()?,
            EntitySpec::of::<Animation>()?,
            EntitySpec::of::<Audio>()?,
            EntitySpec::of::<Document>()?,
            EntitySpec::of::<Video>()?,
            EntitySpec::of::<VideoNote>()?,
            EntitySpec::of::<Voice>()?,
            EntitySpec::of::<Contact>()?,
            EntitySpec::of::<Dice>()?,
            EntitySpec::of::<Location>()?,
            EntitySpec::of::<Venue>()?,
            EntitySpec::of::<MaskPosition>()?,
            EntitySpec::of::<Sticker>()?,
            EntitySpec::of::<StickerSet>()?,
            EntitySpec::of::<PollOption>()?,
            EntitySpec::of::<PollAnswer>()?,
            EntitySpec::of::<Poll>()?,
            EntitySpec::of::<WebhookInfo>()?,
            EntitySpec::of::<ChatPhoto>()?,
            EntitySpec::of::<ChatInviteLink>()?,
            EntitySpec::of::<ChatMember>()?,
            EntitySpec::of::<ChatMemberUpdated>()?,
            EntitySpec::of::<ChatPermissions>()?,
            EntitySpec::of::<ChatLocation>()?,
            EntitySpec::of::<BotCommand>()?,
            EntitySpec::of::<File>()?,
            EntitySpec::of::<UserProfilePhotos>()?,
            EntitySpec::of::<InlineKeyboardButton>()?,
            EntitySpec::of::<InlineKeyboardMarkup>()?,
            EntitySpec::of::<KeyboardButton>()?,
            EntitySpec::of::<CallbackQuery>()?,
            EntitySpec::of::<InlineQuery>()?,
            EntitySpec::of::<ChosenInlineResult>()?,
            EntitySpec::of::<InputTextMessageContent>()?,
            EntitySpec::of::<LabeledPrice>()?,
            EntitySpec::of::<Invoice>()?,
            EntitySpec::of::<ShippingAddress>()?,
            EntitySpec::of::<OrderInfo>()?,
            EntitySpec::of::<ShippingOption>()?,
            EntitySpec::of::<SuccessfulPayment>()?,
            EntitySpec::of::<ShippingQuery>()?,
            EntitySpec::of::<PreCheckoutQuery>()?,
            EntitySpec::of::<Game>()?,
            EntitySpec::of::<GameHighScore>()?,
        ];

        Ok(Self {
            repr: None,
            operations: describe_operations::<Unbound>()?,
            families,
            entities,
        })
    }

    /// Substitute the attachment representation `repr` everywhere.
    pub fn instantiate(&self, repr: &str) -> Self {
        Self {
            repr: Some(repr.to_string()),
            operations: self.operations.iter().map(|o| o.instantiate(repr)).collect(),
            families: self.families.iter().map(|f| f.instantiate(repr)).collect(),
            entities: self.entities.iter().map(|e| e.instantiate(repr)).collect(),
        }
    }

    pub fn operation(&self, name: &str) -> Option<&OperationSpec> {
        self.operations.iter().find(|o| o.name == name)
    }

    pub fn family(&self, name: &str) -> Option<&FamilySpec> {
        self.families.iter().find(|f| f.name == name)
    }

    pub fn entity(&self, name: &str) -> Option<&EntitySpec> {
        self.entities.iter().find(|e| e.name == name)
    }

    /// Every operation under `view`, in table order.
    pub fn view(&self, view: View) -> Vec<ViewSignature> {
        self.operations.iter().map(|o| view.project(o)).collect()
    }

    /// Parameter set of one operation. Operations without parameters yield
    /// an empty set.
    pub fn options(&self, name: &str) -> Result<&FieldSet, SchemaError> {
        self.operation(name)
            .map(|o| &o.params)
            .ok_or_else(|| SchemaError::UnknownOperation(name.to_string()))
    }

    /// Every attachment position across operations, families and entities.
    pub fn attachment_fields(&self) -> Vec<AttachmentField> {
        let mut fields = Vec::new();
        for operation in &self.operations {
            fields.extend(operation.attachment_fields().into_iter().map(|f| AttachmentField {
                owner: operation.name.to_string(),
                field: f.name,
                ty: f.ty.clone(),
            }));
        }
        for family in &self.families {
            for variant in &family.variants {
                fields.extend(
                    variant
                        .fields
                        .iter()
                        .filter(|f| f.ty.is_attachment())
                        .map(|f| AttachmentField {
                            owner: format!("{}::{}", family.name, variant.variant),
                            field: f.name,
                            ty: f.ty.clone(),
                        }),
                );
            }
        }
        for entity in &self.entities {
            fields.extend(entity.attachment_fields().into_iter().map(|f| AttachmentField {
                owner: entity.name.to_string(),
                field: f.name,
                ty: f.ty.clone(),
            }));
        }
        fields
    }

    /// Check the declarations: every family is disjoint, no result shape
    /// carries an attachment, and the declared extended chat family is
    /// exactly the base family recomposed with its details.
    pub fn check(&self) -> Result<(), SchemaError> {
        for family in &self.families {
            family.check_disjoint()?;
        }
        if let Some(operation) = self
            .operations
            .iter()
            .find(|o| self.carries_attachment(&o.result))
        {
            return Err(SchemaError::AttachmentInResult {
                operation: operation.name.to_string(),
            });
        }

        let derived = Chat::spec()?.extend(ChatFromGetChat::NAME, &get_chat_details()?)?;
        let declared = self
            .family(ChatFromGetChat::NAME)
            .ok_or_else(|| SchemaError::UnknownVariant {
                family: "Catalog".into(),
                kind: ChatFromGetChat::NAME.into(),
            })?;
        for kind in derived.kinds() {
            let matches = match declared.resolved(kind) {
                Ok(fields) => fields == derived.resolved(kind)?,
                Err(_) => false,
            };
            if !matches {
                return Err(SchemaError::MissingDetail {
                    family: declared.name.clone(),
                    kind: kind.to_string(),
                });
            }
        }
        if declared.variants.len() != derived.variants.len() {
            let extra = declared
                .kinds()
                .into_iter()
                .find(|k| derived.variant(k).is_none())
                .unwrap_or_default();
            return Err(SchemaError::UnknownVariant {
                family: Chat::NAME.into(),
                kind: extra.to_string(),
            });
        }
        tracing::debug!(
            operations = self.operations.len(),
            families = self.families.len(),
            entities = self.entities.len(),
            "Catalog declarations checked"
        );
        Ok(())
    }

    /// Check a dynamic argument object against the contract of `name`.
    ///
    /// `null` stands for an empty object. Checks run in order: unknown
    /// operation, unknown parameter, message target, missing required
    /// parameter, parameter type. A family-typed parameter must be an
    /// instance of exactly one variant of its family.
    pub fn validate_call(&self, name: &str, args: &Value) -> Result<&OperationSpec, SchemaError> {
        let operation = self
            .operation(name)
            .ok_or_else(|| SchemaError::UnknownOperation(name.to_string()))?;

        let empty = Map::new();
        let object = match args {
            Value::Null => &empty,
            Value::Object(object) => object,
            _ => {
                return Err(SchemaError::TypeMismatch {
                    operation: name.to_string(),
                    parameter: "arguments".into(),
                    expected: "object".into(),
                })
            }
        };
        let present = |key: &str| object.get(key).map(|v| !v.is_null()).unwrap_or(false);

        if let Some(unknown) = object.keys().find(|k| !operation.params.contains(k.as_str())) {
            return Err(SchemaError::UnknownParameter {
                operation: name.to_string(),
                parameter: unknown.clone(),
            });
        }

        if operation.targeted() {
            let chat = CHAT_TARGET.iter().filter(|k| present(**k)).count();
            let inline = present(INLINE_TARGET);
            let reason = match (chat, inline) {
                (2, false) | (0, true) => None,
                (0, false) => Some("no target given"),
                (_, true) => Some("both a chat target and an inline target given"),
                _ => Some("chat_id and message_id must be given together"),
            };
            if let Some(reason) = reason {
                return Err(SchemaError::AmbiguousTarget {
                    operation: name.to_string(),
                    reason: reason.into(),
                });
            }
        }

        if let Some(missing) = operation.params.required().find(|f| !present(f.name)) {
            return Err(SchemaError::MissingParameter {
                operation: name.to_string(),
                parameter: missing.name.to_string(),
            });
        }

        for (key, value) in object {
            let Some(spec) = operation.params.get(key) else {
                continue;
            };
            if value.is_null() && spec.optional {
                continue;
            }
            if !spec.ty.accepts(value) {
                return Err(SchemaError::TypeMismatch {
                    operation: name.to_string(),
                    parameter: key.clone(),
                    expected: spec.ty.to_string(),
                });
            }
            self.conforms(&spec.ty, value, key).map_err(|(parameter, error)| {
                SchemaError::TypeMismatch {
                    operation: name.to_string(),
                    parameter,
                    expected: format!("a valid variant ({})", error),
                }
            })?;
        }

        Ok(operation)
    }

    /// Whether `ty` is or refers to a shape with an attachment position.
    fn carries_attachment(&self, ty: &FieldType) -> bool {
        match ty {
            FieldType::Entity(name) => {
                self.family(name).map_or(false, FamilySpec::mentions_attachment)
                    || self
                        .entity(name)
                        .map_or(false, |e| !e.attachment_fields().is_empty())
            }
            FieldType::Array(inner) | FieldType::Envelope(inner) | FieldType::Deferred(inner) => {
                self.carries_attachment(inner)
            }
            FieldType::Union(members) => members.iter().any(|m| self.carries_attachment(m)),
            other => other.is_attachment() || other.mentions_attachment(),
        }
    }

    /// Classify family-typed values, array items included, against their
    /// family. On failure returns the path of the offending value.
    fn conforms(&self, ty: &FieldType, value: &Value, path: &str) -> Result<(), (String, SchemaError)> {
        match ty {
            FieldType::Entity(name) => match self.family(name) {
                Some(family) => family
                    .classify(value)
                    .map(|_| ())
                    .map_err(|e| (path.to_string(), e)),
                None => Ok(()),
            },
            FieldType::Array(inner) => match value.as_array() {
                Some(items) => items
                    .iter()
                    .enumerate()
                    .try_for_each(|(i, item)| self.conforms(inner, item, &format!("{}[{}]", path, i))),
                None => Ok(()),
            },
            FieldType::Union(members) => {
                let mut last_error = None;
                for member in members.iter().filter(|m| m.accepts(value)) {
                    match self.conforms(member, value, path) {
                        Ok(()) => return Ok(()),
                        Err(e) => last_error = Some(e),
                    }
                }
                last_error.map_or(Ok(()), Err)
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn catalog() -> Catalog {
        Catalog::canonical().unwrap()
    }

    #[test]
    fn test_canonical_catalog_checks() {
        catalog().check().unwrap();
    }

    #[test]
    fn test_result_must_not_carry_attachment() {
        let mut upload = catalog();
        if let Some(op) = upload.operations.iter_mut().find(|o| o.name == "getFile") {
            op.result = FieldType::array(FieldType::Upload);
        }
        assert_eq!(
            upload.check().unwrap_err(),
            SchemaError::AttachmentInResult {
                operation: "getFile".into()
            }
        );

        let mut media = catalog();
        if let Some(op) = media.operations.iter_mut().find(|o| o.name == "stopPoll") {
            op.result = FieldType::entity("InputMedia");
        }
        assert_eq!(media.check().unwrap_err().kind(), "attachment_in_result");
    }

    #[test]
    fn test_view_round_trips_through_str() {
        for view in View::ALL {
            assert_eq!(view.as_str().parse::<View>().unwrap(), *view);
        }
        assert!("callback".parse::<View>().is_err());
    }

    #[test]
    fn test_response_view_wraps_true() {
        let catalog = catalog();
        let op = catalog.operation("deleteMessage").unwrap();
        let signature = View::Response.project(op);
        assert_eq!(signature.result.unwrap().to_string(), "Envelope<true>");
    }

    #[test]
    fn test_promise_response_view_keeps_one_failure_branch() {
        let catalog = catalog();
        let op = catalog.operation("editMessageText").unwrap();
        let signature = View::PromiseResponse.project(op);
        assert_eq!(
            signature.result.unwrap().to_string(),
            "Deferred<Envelope<Edited<TextMessage> | true>>"
        );
    }

    #[test]
    fn test_options_view_drops_result() {
        let catalog = catalog();
        let signature = View::Options.project(catalog.operation("getMe").unwrap());
        assert!(signature.result.is_none());
        assert!(signature.params.is_empty());
    }

    #[test]
    fn test_targeted_operations() {
        let catalog = catalog();
        let targeted: Vec<_> = catalog
            .operations
            .iter()
            .filter(|o| o.targeted())
            .map(|o| o.name)
            .collect();
        assert!(targeted.contains(&"getGameHighScores"));
        assert!(!targeted.contains(&"deleteMessage"));
        assert_eq!(targeted.len(), 8);
    }

    #[test]
    fn test_validate_call_accepts_null_for_empty_object() {
        let catalog = catalog();
        assert!(catalog.validate_call("getMe", &Value::Null).is_ok());
        assert!(catalog.validate_call("getMe", &json!({})).is_ok());
        assert!(matches!(
            catalog.validate_call("getMe", &json!([])),
            Err(SchemaError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_instantiation_marks_catalog() {
        let catalog = catalog().instantiate("Blob");
        assert_eq!(catalog.repr.as_deref(), Some("Blob"));
        assert!(catalog.families.iter().all(|f| !f.mentions_attachment()));
    }
}
