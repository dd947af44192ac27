//! Semantic field types and field sets.
//!
//! Every schema type knows its own [`FieldType`] through the [`Shape`] trait,
//! so field descriptors are computed from the Rust types themselves.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::shared::error::SchemaError;

/// Semantic type of a field, parameter or operation result.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "of", rename_all = "snake_case")]
pub enum FieldType {
    Integer,
    Float,
    String,
    Boolean,
    /// The literal `true`, used as a success-without-data result.
    True,
    /// A fixed string literal, e.g. a discriminant value.
    Literal(String),
    /// A named entity or family.
    Entity(String),
    Array(Box<FieldType>),
    Union(Vec<FieldType>),
    /// An attachment position accepting `F | string`, not yet instantiated.
    Attachment,
    /// An attachment position accepting only a fresh upload (`F`).
    Upload,
    /// A concrete attachment representation substituted for `F`.
    Named(String),
    /// Success/failure envelope around a result.
    Envelope(Box<FieldType>),
    /// A value that becomes available later.
    Deferred(Box<FieldType>),
}

impl FieldType {
    pub fn entity(name: impl Into<String>) -> Self {
        Self::Entity(name.into())
    }

    pub fn array(inner: FieldType) -> Self {
        Self::Array(Box::new(inner))
    }

    /// Build a union, flattening nested unions.
    pub fn union(members: impl IntoIterator<Item = FieldType>) -> Self {
        let mut flat = Vec::new();
        for member in members {
            match member {
                Self::Union(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }
        Self::Union(flat)
    }

    /// Members of a union, or the type itself.
    pub fn members(&self) -> Vec<&FieldType> {
        match self {
            Self::Union(members) => members.iter().collect(),
            other => vec![other],
        }
    }

    /// Whether `F` still occurs anywhere in this type.
    pub fn mentions_attachment(&self) -> bool {
        match self {
            Self::Attachment | Self::Upload => true,
            Self::Array(inner) | Self::Envelope(inner) | Self::Deferred(inner) => {
                inner.mentions_attachment()
            }
            Self::Union(members) => members.iter().any(FieldType::mentions_attachment),
            _ => false,
        }
    }

    /// Whether this type is an attachment position (before or after
    /// instantiation of `F`).
    pub fn is_attachment(&self) -> bool {
        match self {
            Self::Attachment | Self::Upload | Self::Named(_) => true,
            Self::Union(members) => members.iter().any(|m| matches!(m, Self::Named(_))),
            Self::Array(inner) => inner.is_attachment(),
            _ => false,
        }
    }

    /// Substitute the attachment representation `repr` for `F`.
    pub fn instantiate(&self, repr: &str) -> FieldType {
        match self {
            Self::Attachment => Self::Union(vec![Self::Named(repr.to_string()), Self::String]),
            Self::Upload => Self::Named(repr.to_string()),
            Self::Array(inner) => Self::Array(Box::new(inner.instantiate(repr))),
            Self::Envelope(inner) => Self::Envelope(Box::new(inner.instantiate(repr))),
            Self::Deferred(inner) => Self::Deferred(Box::new(inner.instantiate(repr))),
            Self::Union(members) => Self::union(members.iter().map(|m| m.instantiate(repr))),
            other => other.clone(),
        }
    }

    /// Shallow structural check of a dynamic value against this type.
    ///
    /// Entities only require an object; attachment representations accept any
    /// non-null value since their wire form belongs to the transport.
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            Self::Integer => value.is_i64() || value.is_u64(),
            Self::Float => value.is_number(),
            Self::String => value.is_string(),
            Self::Boolean => value.is_boolean(),
            Self::True => value == &Value::Bool(true),
            Self::Literal(literal) => value.as_str() == Some(literal.as_str()),
            Self::Entity(_) => value.is_object(),
            Self::Array(inner) => value
                .as_array()
                .map(|items| items.iter().all(|item| inner.accepts(item)))
                .unwrap_or(false),
            Self::Union(members) => members.iter().any(|m| m.accepts(value)),
            Self::Attachment => !value.is_null(),
            Self::Upload | Self::Named(_) => !value.is_null(),
            Self::Envelope(_) | Self::Deferred(_) => false,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => write!(f, "integer"),
            Self::Float => write!(f, "float"),
            Self::String => write!(f, "string"),
            Self::Boolean => write!(f, "boolean"),
            Self::True => write!(f, "true"),
            Self::Literal(literal) => write!(f, "\"{}\"", literal),
            Self::Entity(name) => write!(f, "{}", name),
            Self::Array(inner) => match inner.as_ref() {
                Self::Union(_) => write!(f, "({})[]", inner),
                _ => write!(f, "{}[]", inner),
            },
            Self::Union(members) => {
                let rendered: Vec<String> = members.iter().map(ToString::to_string).collect();
                write!(f, "{}", rendered.join(" | "))
            }
            Self::Attachment => write!(f, "F | string"),
            Self::Upload => write!(f, "F"),
            Self::Named(repr) => write!(f, "\"{}\"", repr),
            Self::Envelope(inner) => write!(f, "Envelope<{}>", inner),
            Self::Deferred(inner) => write!(f, "Deferred<{}>", inner),
        }
    }
}

/// Types that describe themselves as a [`FieldType`].
pub trait Shape {
    fn shape() -> FieldType;

    /// Whether a field of this type may be omitted.
    fn optional() -> bool {
        false
    }
}

macro_rules! primitive_shape {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Shape for $ty {
                fn shape() -> FieldType {
                    FieldType::$variant
                }
            }
        )*
    };
}

primitive_shape! {
    i32 => Integer,
    i64 => Integer,
    u32 => Integer,
    u64 => Integer,
    f64 => Float,
    String => String,
    bool => Boolean,
}

impl<T: Shape> Shape for Option<T> {
    fn shape() -> FieldType {
        T::shape()
    }

    fn optional() -> bool {
        true
    }
}

impl<T: Shape> Shape for Vec<T> {
    fn shape() -> FieldType {
        FieldType::array(T::shape())
    }
}

impl<T: Shape> Shape for Box<T> {
    fn shape() -> FieldType {
        T::shape()
    }

    fn optional() -> bool {
        T::optional()
    }
}

/// A named field with its semantic type and optionality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub ty: FieldType,
    pub optional: bool,
}

impl FieldSpec {
    /// Describe a field of Rust type `T`. Raw identifiers lose their `r#`.
    pub fn of<T: Shape + ?Sized>(name: &'static str) -> Self {
        Self {
            name: name.trim_start_matches("r#"),
            ty: T::shape(),
            optional: T::optional(),
        }
    }

    pub fn required(name: &'static str, ty: FieldType) -> Self {
        Self {
            name,
            ty,
            optional: false,
        }
    }

    pub fn optional(name: &'static str, ty: FieldType) -> Self {
        Self {
            name,
            ty,
            optional: true,
        }
    }

    pub fn instantiate(&self, repr: &str) -> Self {
        Self {
            name: self.name,
            ty: self.ty.instantiate(repr),
            optional: self.optional,
        }
    }
}

/// Ordered set of fields keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldSet {
    fields: BTreeMap<&'static str, FieldSpec>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field; a second field with the same name is a declaration error.
    pub fn insert(&mut self, spec: FieldSpec, owner: &str) -> Result<(), SchemaError> {
        if self.fields.contains_key(spec.name) {
            return Err(SchemaError::DuplicateField {
                owner: owner.to_string(),
                field: spec.name.to_string(),
            });
        }
        self.fields.insert(spec.name, spec);
        Ok(())
    }

    /// Compose another field set into this one.
    pub fn merge(&mut self, other: FieldSet, owner: &str) -> Result<(), SchemaError> {
        for (_, spec) in other.fields {
            self.insert(spec, owner)?;
        }
        Ok(())
    }

    /// Union of two sets, failing on overlap.
    pub fn union(mut self, other: FieldSet, owner: &str) -> Result<FieldSet, SchemaError> {
        self.merge(other, owner)?;
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.values()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.fields.keys().copied().collect()
    }

    pub fn required(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.values().filter(|f| !f.optional)
    }

    pub fn optional(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.values().filter(|f| f.optional)
    }

    pub fn required_names(&self) -> Vec<&'static str> {
        self.required().map(|f| f.name).collect()
    }

    pub fn is_subset_of(&self, other: &FieldSet) -> bool {
        self.fields.keys().all(|name| other.contains(name))
    }

    pub fn instantiate(&self, repr: &str) -> FieldSet {
        Self {
            fields: self
                .fields
                .iter()
                .map(|(name, spec)| (*name, spec.instantiate(repr)))
                .collect(),
        }
    }
}

impl FromIterator<FieldSpec> for FieldSet {
    /// Collect specs, keeping the last of any duplicate names.
    fn from_iter<I: IntoIterator<Item = FieldSpec>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|spec| (spec.name, spec)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_option_marks_field_optional() {
        let spec = FieldSpec::of::<Option<String>>("username");
        assert_eq!(spec.ty, FieldType::String);
        assert!(spec.optional);
    }

    #[test]
    fn test_raw_identifier_is_stripped() {
        let spec = FieldSpec::of::<String>("r#type");
        assert_eq!(spec.name, "type");
    }

    #[test]
    fn test_union_flattens_nested_unions() {
        let ty = FieldType::union([
            FieldType::Integer,
            FieldType::union([FieldType::String, FieldType::True]),
        ]);
        assert_eq!(ty.members().len(), 3);
        assert_eq!(ty.to_string(), "integer | string | true");
    }

    #[test]
    fn test_instantiate_substitutes_every_attachment() {
        let ty = FieldType::array(FieldType::union([FieldType::Attachment, FieldType::Integer]));
        assert!(ty.mentions_attachment());

        let resolved = ty.instantiate("local-file-handle");
        assert!(!resolved.mentions_attachment());
        assert!(resolved.is_attachment());
        assert_eq!(
            resolved.to_string(),
            "(\"local-file-handle\" | string | integer)[]"
        );
    }

    #[test]
    fn test_upload_instantiates_without_string() {
        let resolved = FieldType::Upload.instantiate("Bytes");
        assert_eq!(resolved, FieldType::Named("Bytes".into()));
    }

    #[test]
    fn test_duplicate_insert_is_rejected() {
        let mut set = FieldSet::new();
        set.insert(FieldSpec::of::<i64>("id"), "Chat").unwrap();
        let err = set.insert(FieldSpec::of::<i64>("id"), "Chat").unwrap_err();
        assert_eq!(
            err,
            SchemaError::DuplicateField {
                owner: "Chat".into(),
                field: "id".into()
            }
        );
    }

    #[test]
    fn test_accepts_checks_structure() {
        assert!(FieldType::Integer.accepts(&json!(42)));
        assert!(!FieldType::Integer.accepts(&json!("42")));
        assert!(FieldType::True.accepts(&json!(true)));
        assert!(!FieldType::True.accepts(&json!(false)));
        assert!(FieldType::union([FieldType::Integer, FieldType::String]).accepts(&json!("@chan")));
        assert!(FieldType::array(FieldType::String).accepts(&json!(["a", "b"])));
        assert!(!FieldType::array(FieldType::String).accepts(&json!(["a", 1])));
    }

    #[test]
    fn test_required_and_optional_partition() {
        let set: FieldSet = [
            FieldSpec::of::<i64>("id"),
            FieldSpec::of::<Option<String>>("title"),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.required_names(), vec!["id"]);
        assert_eq!(set.optional().count(), 1);
    }
}
