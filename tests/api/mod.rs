//! Tests of the public API surface.

mod catalog_tests;
mod conditional_tests;
mod family_tests;
mod validation_tests;
mod view_tests;
