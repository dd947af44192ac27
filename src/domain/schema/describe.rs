//! Self-describing schema structs.
//!
//! [`schema_struct!`](crate::schema_struct) declares a fragment or entity
//! once and derives both the Rust struct and its [`Describe`] impl, so the
//! field descriptor cannot drift from the type.

use serde::Serialize;

use super::shape::{FieldSet, FieldSpec};
use crate::shared::error::SchemaError;

/// A struct that can report its resolved field set.
pub trait Describe {
    /// Entity or fragment name.
    const NAME: &'static str;

    /// All fields, including those of composed fragments.
    fn fields() -> Result<FieldSet, SchemaError>;

    /// Names of the fragments this struct composes, in declaration order.
    fn fragments() -> Vec<&'static str> {
        Vec::new()
    }
}

/// Descriptor of a standalone entity or fragment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntitySpec {
    pub name: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fragments: Vec<&'static str>,
    pub fields: FieldSet,
}

impl EntitySpec {
    pub fn of<T: Describe>() -> Result<Self, SchemaError> {
        Ok(Self {
            name: T::NAME,
            fragments: T::fragments(),
            fields: T::fields()?,
        })
    }

    pub fn instantiate(&self, repr: &str) -> Self {
        Self {
            name: self.name,
            fragments: self.fragments.clone(),
            fields: self.fields.instantiate(repr),
        }
    }

    /// Fields that accept an attachment.
    pub fn attachment_fields(&self) -> Vec<&FieldSpec> {
        self.fields.iter().filter(|f| f.ty.is_attachment()).collect()
    }
}

/// Declare a schema struct.
///
/// Composed fragments go in brackets before the body and become
/// `#[serde(flatten)]` members; their fields are merged into the descriptor
/// and a field declared twice is a [`SchemaError::DuplicateField`].
/// Attributes written before a component (`#[validate(nested)]`) are kept.
///
/// ```ignore
/// schema_struct! {
///     /// Group chat
///     pub struct GroupChat [base: ChatBase, title: TitleChat] {}
/// }
/// ```
#[macro_export]
macro_rules! schema_struct {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident $(<$generic:ident>)? [ $( $(#[$cmeta:meta])* $component:ident : $cty:ty ),* $(,)? ] {
            $(
                $(#[$fmeta:meta])*
                $fvis:vis $field:ident : $fty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        $vis struct $name $(<$generic>)? {
            $(
                $(#[$cmeta])*
                #[serde(flatten)]
                pub $component: $cty,
            )*
            $(
                $(#[$fmeta])*
                $fvis $field: $fty,
            )*
        }

        impl $(<$generic>)? $crate::domain::schema::Describe for $name $(<$generic>)? {
            const NAME: &'static str = stringify!($name);

            fn fields() -> ::std::result::Result<
                $crate::domain::schema::FieldSet,
                $crate::shared::error::SchemaError,
            > {
                #[allow(unused_mut)]
                let mut fields = $crate::domain::schema::FieldSet::new();
                $(
                    fields.merge(
                        <$cty as $crate::domain::schema::Describe>::fields()?,
                        <Self as $crate::domain::schema::Describe>::NAME,
                    )?;
                )*
                $(
                    fields.insert(
                        $crate::domain::schema::FieldSpec::of::<$fty>(stringify!($field)),
                        <Self as $crate::domain::schema::Describe>::NAME,
                    )?;
                )*
                Ok(fields)
            }

            fn fragments() -> ::std::vec::Vec<&'static str> {
                vec![$(<$cty as $crate::domain::schema::Describe>::NAME),*]
            }
        }

        impl $(<$generic>)? $crate::domain::schema::Shape for $name $(<$generic>)? {
            fn shape() -> $crate::domain::schema::FieldType {
                $crate::domain::schema::FieldType::entity(stringify!($name))
            }
        }
    };
}

/// Declare a closed set of string literals.
///
/// The enum serializes as its literal and describes itself as a union of
/// [`FieldType::Literal`](crate::domain::schema::FieldType::Literal)s.
#[macro_export]
macro_rules! literal_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $literal:tt => $variant:ident ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $literal)]
                $variant,
            )*
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $literal, )*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::domain::schema::Shape for $name {
            fn shape() -> $crate::domain::schema::FieldType {
                $crate::domain::schema::FieldType::union([
                    $( $crate::domain::schema::FieldType::Literal($literal.to_string()) ),*
                ])
            }
        }
    };
}
