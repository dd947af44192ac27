//! # Entity Variant Model
//!
//! Descriptor layer shared by every entity, family and operation:
//!
//! - **shape**: semantic field types, field specs and field sets
//! - **describe**: self-describing structs composed of capability fragments
//! - **family**: closed families, extended families and their checks

pub mod describe;
pub mod family;
pub mod shape;

pub use describe::{Describe, EntitySpec};
pub use family::{Detail, Detailed, Discriminant, Family, FamilySpec, VariantSpec};
pub use shape::{FieldSet, FieldSpec, FieldType, Shape};
