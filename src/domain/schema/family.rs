//! Closed families of mutually exclusive entity variants.
//!
//! A family is a Rust enum over variant structs. Two discriminant styles
//! exist: tagged families carry a string tag field (`"type": "private"`),
//! keyed families are told apart by which payload key is present
//! (`"text"`, `"photo"`, `"callback_query"`, ...).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::describe::Describe;
use super::shape::{FieldSet, FieldSpec, FieldType, Shape};
use crate::shared::error::SchemaError;

/// How the variants of a family are told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "style", content = "field", rename_all = "snake_case")]
pub enum Discriminant {
    /// A string field whose value is the variant's kind.
    Tag(&'static str),
    /// The variant's kind is the name of its one required payload key.
    Key,
}

/// One variant of a family with its resolved field set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantSpec {
    pub kind: &'static str,
    pub variant: &'static str,
    pub entity: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fragments: Vec<&'static str>,
    pub fields: FieldSet,
    /// Keys of other variants that this variant's wire form repeats.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub repeats: Vec<&'static str>,
}

impl VariantSpec {
    pub fn of<V: Describe>(kind: &'static str, variant: &'static str) -> Result<Self, SchemaError> {
        Ok(Self {
            kind,
            variant,
            entity: V::NAME,
            fragments: V::fragments(),
            fields: V::fields()?,
            repeats: Vec::new(),
        })
    }

    /// Declare the keys of other variants that always accompany this one.
    pub fn repeating(mut self, kinds: &[&'static str]) -> Self {
        self.repeats = kinds.to_vec();
        self
    }

    /// Field set of the variant with its discriminant fixed to one literal.
    pub fn resolved(&self, discriminant: Discriminant) -> Result<FieldSet, SchemaError> {
        let mut fields = self.fields.clone();
        if let Discriminant::Tag(field) = discriminant {
            fields.insert(
                FieldSpec::required(field, FieldType::Literal(self.kind.to_string())),
                self.entity,
            )?;
        }
        Ok(fields)
    }

    pub fn instantiate(&self, repr: &str) -> Self {
        Self {
            fields: self.fields.instantiate(repr),
            ..self.clone()
        }
    }

    /// Check an object against the variant's fields. Unknown keys are allowed.
    fn check(&self, family: &str, object: &Map<String, Value>) -> Result<(), SchemaError> {
        for field in self.fields.iter() {
            match object.get(field.name) {
                None | Some(Value::Null) if field.optional => {}
                None | Some(Value::Null) => {
                    return Err(SchemaError::NoMatchingVariant {
                        family: family.to_string(),
                        reason: format!("`{}` requires field `{}`", self.kind, field.name),
                    })
                }
                Some(value) if !field.ty.accepts(value) => {
                    return Err(SchemaError::NoMatchingVariant {
                        family: family.to_string(),
                        reason: format!(
                            "`{}` expects `{}` to be {}",
                            self.kind, field.name, field.ty
                        ),
                    })
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}

/// Detail fields recomposed onto one base variant by [`FamilySpec::extend`].
#[derive(Debug, Clone, PartialEq)]
pub struct Detail {
    pub name: &'static str,
    pub fields: FieldSet,
}

impl Detail {
    pub fn of<D: Describe>() -> Result<Self, SchemaError> {
        Ok(Self {
            name: D::NAME,
            fields: D::fields()?,
        })
    }
}

/// Descriptor of a closed family.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FamilySpec {
    pub name: String,
    pub discriminant: Discriminant,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,
    pub variants: Vec<VariantSpec>,
}

impl FamilySpec {
    pub fn new(name: impl Into<String>, discriminant: Discriminant) -> Self {
        Self {
            name: name.into(),
            discriminant,
            extends: None,
            variants: Vec::new(),
        }
    }

    /// Append a variant; kinds must be unique within the family.
    pub fn push(&mut self, variant: VariantSpec) -> Result<(), SchemaError> {
        if self.variant(variant.kind).is_some() {
            return Err(SchemaError::DuplicateVariant {
                family: self.name.clone(),
                kind: variant.kind.to_string(),
            });
        }
        self.variants.push(variant);
        Ok(())
    }

    pub fn variant(&self, kind: &str) -> Option<&VariantSpec> {
        self.variants.iter().find(|v| v.kind == kind)
    }

    pub fn kinds(&self) -> Vec<&'static str> {
        self.variants.iter().map(|v| v.kind).collect()
    }

    /// Resolved field set of one variant.
    pub fn resolved(&self, kind: &str) -> Result<FieldSet, SchemaError> {
        self.variant(kind)
            .ok_or_else(|| SchemaError::UnknownVariant {
                family: self.name.clone(),
                kind: kind.to_string(),
            })?
            .resolved(self.discriminant)
    }

    /// Check that no value can be an instance of two variants.
    ///
    /// Tagged families must not let a fragment declare the tag field. The tag
    /// alone separates their variants, so one variant's fields may be a strict
    /// subset of another's (a group chat and a supergroup). Keyed families
    /// must require each payload key on its own variant and must not let any
    /// other variant declare it; a value carrying two payload keys is left to
    /// [`classify`](Self::classify), which rejects it.
    pub fn check_disjoint(&self) -> Result<(), SchemaError> {
        for variant in &self.variants {
            match self.discriminant {
                Discriminant::Tag(field) => {
                    if variant.fields.contains(field) {
                        return Err(SchemaError::DiscriminantInFragment {
                            family: self.name.clone(),
                            kind: variant.kind.to_string(),
                            field: field.to_string(),
                        });
                    }
                }
                Discriminant::Key => {
                    if let Some(unknown) =
                        variant.repeats.iter().find(|k| self.variant(k).is_none())
                    {
                        return Err(SchemaError::UnknownVariant {
                            family: self.name.clone(),
                            kind: unknown.to_string(),
                        });
                    }
                    let required = variant
                        .fields
                        .get(variant.kind)
                        .map(|f| !f.optional)
                        .unwrap_or(false);
                    if !required {
                        return Err(SchemaError::MissingDiscriminant {
                            family: self.name.clone(),
                            kind: variant.kind.to_string(),
                        });
                    }
                    if let Some(other) = self
                        .variants
                        .iter()
                        .find(|o| o.kind != variant.kind && o.fields.contains(variant.kind))
                    {
                        return Err(SchemaError::OverlappingVariants {
                            family: self.name.clone(),
                            kind: variant.kind.to_string(),
                            other: other.kind.to_string(),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// Derive an extended family by recomposing every variant with its detail.
    ///
    /// Each base variant yields exactly one extended variant; a base variant
    /// without a detail is an error, as is a detail field clashing with a
    /// base field.
    pub fn extend(
        &self,
        name: impl Into<String>,
        details: &BTreeMap<&'static str, Detail>,
    ) -> Result<FamilySpec, SchemaError> {
        let mut extended = FamilySpec::new(name, self.discriminant);
        extended.extends = Some(self.name.clone());

        for base in &self.variants {
            let detail = details.get(base.kind).ok_or_else(|| SchemaError::MissingDetail {
                family: extended.name.clone(),
                kind: base.kind.to_string(),
            })?;
            let fields = base.fields.clone().union(detail.fields.clone(), detail.name)?;
            extended.push(VariantSpec {
                kind: base.kind,
                variant: base.variant,
                entity: detail.name,
                fragments: vec![base.entity, detail.name],
                fields,
                repeats: base.repeats.clone(),
            })?;
        }
        Ok(extended)
    }

    /// Decide which variant a dynamic value is an instance of.
    ///
    /// A keyed value must be a full instance of exactly one variant. A
    /// variant whose key is only repeated by another matching variant does
    /// not count.
    pub fn classify(&self, value: &Value) -> Result<&VariantSpec, SchemaError> {
        let object = value.as_object().ok_or_else(|| SchemaError::NoMatchingVariant {
            family: self.name.clone(),
            reason: "expected an object".into(),
        })?;

        match self.discriminant {
            Discriminant::Tag(field) => {
                let kind = object.get(field).and_then(Value::as_str).ok_or_else(|| {
                    SchemaError::NoMatchingVariant {
                        family: self.name.clone(),
                        reason: format!("missing `{}` tag", field),
                    }
                })?;
                let variant = self.variant(kind).ok_or_else(|| SchemaError::UnknownVariant {
                    family: self.name.clone(),
                    kind: kind.to_string(),
                })?;
                variant.check(&self.name, object)?;
                Ok(variant)
            }
            Discriminant::Key => {
                let mut matched = Vec::new();
                let mut last_error = None;
                for variant in self.variants.iter().filter(|v| object.contains_key(v.kind)) {
                    match variant.check(&self.name, object) {
                        Ok(()) => matched.push(variant),
                        Err(e) => last_error = Some(e),
                    }
                }

                let repeated: Vec<&str> = matched
                    .iter()
                    .flat_map(|v| v.repeats.iter().copied())
                    .collect();
                matched.retain(|v| !repeated.contains(&v.kind));

                match matched.as_slice() {
                    [variant] => Ok(*variant),
                    [] => Err(last_error.unwrap_or_else(|| SchemaError::NoMatchingVariant {
                        family: self.name.clone(),
                        reason: format!("none of the keys {:?} is present", self.kinds()),
                    })),
                    several => Err(SchemaError::AmbiguousVariant {
                        family: self.name.clone(),
                        kinds: several.iter().map(|v| v.kind.to_string()).collect(),
                    }),
                }
            }
        }
    }

    pub fn instantiate(&self, repr: &str) -> Self {
        Self {
            variants: self.variants.iter().map(|v| v.instantiate(repr)).collect(),
            ..self.clone()
        }
    }

    pub fn mentions_attachment(&self) -> bool {
        self.variants
            .iter()
            .any(|v| v.fields.iter().any(|f| f.ty.mentions_attachment()))
    }
}

/// A Rust enum representing a closed family.
pub trait Family {
    const NAME: &'static str;

    fn spec() -> Result<FamilySpec, SchemaError>;

    /// Discriminant value of this instance.
    fn kind(&self) -> &'static str;
}

/// A base variant recomposed with a detail fragment, without redeclaring
/// either side's fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detailed<B, D> {
    #[serde(flatten)]
    pub base: B,
    #[serde(flatten)]
    pub detail: D,
}

impl<B, D> Detailed<B, D> {
    pub fn new(base: B, detail: D) -> Self {
        Self { base, detail }
    }
}

impl<B: Describe, D: Describe> Describe for Detailed<B, D> {
    const NAME: &'static str = D::NAME;

    fn fields() -> Result<FieldSet, SchemaError> {
        B::fields()?.union(D::fields()?, D::NAME)
    }

    fn fragments() -> Vec<&'static str> {
        vec![B::NAME, D::NAME]
    }
}

impl<B, D: Describe> Shape for Detailed<B, D> {
    fn shape() -> FieldType {
        FieldType::entity(D::NAME)
    }
}

/// Declare a family discriminated by a string tag field.
///
/// ```ignore
/// tagged_family! {
///     pub enum Chat: tag "type" {
///         "private" => Private(PrivateChat),
///         "group" => Group(GroupChat),
///     }
/// }
/// ```
#[macro_export]
macro_rules! tagged_family {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident $(<$generic:ident>)? : tag $tag:tt {
            $( $(#[$vmeta:meta])* $kind:tt => $variant:ident ( $vty:ty ) ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(tag = $tag)]
        $vis enum $name $(<$generic>)? {
            $(
                $(#[$vmeta])*
                #[serde(rename = $kind)]
                $variant($vty),
            )*
        }

        impl $(<$generic>)? $crate::domain::schema::Family for $name $(<$generic>)? {
            const NAME: &'static str = stringify!($name);

            fn spec() -> ::std::result::Result<
                $crate::domain::schema::FamilySpec,
                $crate::shared::error::SchemaError,
            > {
                let mut family = $crate::domain::schema::FamilySpec::new(
                    stringify!($name),
                    $crate::domain::schema::Discriminant::Tag($tag),
                );
                $(
                    family.push($crate::domain::schema::VariantSpec::of::<$vty>(
                        $kind,
                        stringify!($variant),
                    )?)?;
                )*
                Ok(family)
            }

            fn kind(&self) -> &'static str {
                match self {
                    $( Self::$variant(_) => $kind, )*
                }
            }
        }

        impl $(<$generic>)? $crate::domain::schema::Shape for $name $(<$generic>)? {
            fn shape() -> $crate::domain::schema::FieldType {
                $crate::domain::schema::FieldType::entity(stringify!($name))
            }
        }
    };
}

/// Declare a family discriminated by which payload key is present.
///
/// A variant whose wire form always repeats another variant's key declares
/// it with `repeats [...]`; otherwise a value carrying two payload keys is
/// rejected on deserialization.
///
/// ```ignore
/// keyed_family! {
///     pub enum Message {
///         "animation" => Animation(AnimationMessage) repeats ["document"],
///         "document" => Document(DocumentMessage),
///     }
/// }
/// ```
#[macro_export]
macro_rules! keyed_family {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident $(<$generic:ident>)? {
            $(
                $(#[$vmeta:meta])*
                $kind:tt => $variant:ident ( $vty:ty ) $(repeats [ $($repeat:tt),* ])?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize)]
        #[serde(untagged)]
        $vis enum $name $(<$generic>)? {
            $(
                $(#[$vmeta])*
                $variant($vty),
            )*
        }

        impl<'de $(, $generic: ::serde::de::DeserializeOwned)?> ::serde::Deserialize<'de>
            for $name $(<$generic>)?
        {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                use ::serde::de::Error as _;

                static SPEC: ::once_cell::sync::OnceCell<
                    ::std::result::Result<
                        $crate::domain::schema::FamilySpec,
                        $crate::shared::error::SchemaError,
                    >,
                > = ::once_cell::sync::OnceCell::new();

                let value = ::serde_json::Value::deserialize(deserializer)?;
                let spec = SPEC
                    .get_or_init(<Self as $crate::domain::schema::Family>::spec)
                    .as_ref()
                    .map_err(D::Error::custom)?;
                let kind = spec.classify(&value).map_err(D::Error::custom)?.kind;
                $(
                    if kind == $kind {
                        return ::serde_json::from_value(value)
                            .map(Self::$variant)
                            .map_err(D::Error::custom);
                    }
                )*
                Err(D::Error::custom(format!(
                    "unknown {} variant `{}`",
                    stringify!($name),
                    kind
                )))
            }
        }

        impl $(<$generic>)? $crate::domain::schema::Family for $name $(<$generic>)? {
            const NAME: &'static str = stringify!($name);

            fn spec() -> ::std::result::Result<
                $crate::domain::schema::FamilySpec,
                $crate::shared::error::SchemaError,
            > {
                let mut family = $crate::domain::schema::FamilySpec::new(
                    stringify!($name),
                    $crate::domain::schema::Discriminant::Key,
                );
                $(
                    family.push(
                        $crate::domain::schema::VariantSpec::of::<$vty>($kind, stringify!($variant))?
                            $( .repeating(&[$($repeat),*]) )?,
                    )?;
                )*
                Ok(family)
            }

            fn kind(&self) -> &'static str {
                match self {
                    $( Self::$variant(_) => $kind, )*
                }
            }
        }

        impl $(<$generic>)? $crate::domain::schema::Shape for $name $(<$generic>)? {
            fn shape() -> $crate::domain::schema::FieldType {
                $crate::domain::schema::FieldType::entity(stringify!($name))
            }
        }
    };
}
