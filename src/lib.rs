//! # Botgram Library
//!
//! Typed contract of a messaging-bot HTTP API (Bot API 5.1):
//! - Entities modelled as closed families of capability-composed variants
//! - One canonical operation table
//! - Callable views derived from the table: direct, envelope, async and
//!   async-envelope
//! - Descriptor views for introspection and caller-side validation
//!
//! The crate performs no I/O. A transport supplied by the consumer moves
//! requests over the wire.
//!
//! ## Architecture
//!
//! - **Domain Layer**: Entities, value objects and the schema descriptors
//! - **Application Layer**: Operation table and projection engine
//! - **Infrastructure Layer**: Metrics and the instrumented transport
//!
//! ## Module Structure
//!
//! ```text
//! botgram/
//! +-- config/         Configuration management
//! +-- domain/         Entities, value objects, schema descriptors
//! +-- application/    Operation table, projections, catalog
//! +-- infrastructure/ Metrics and transport instrumentation
//! +-- shared/         Common utilities (errors, validation, time)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use botgram::application::methods::{SendMessage, Telegram};
//! use botgram::application::projection::TelegramR;
//!
//! let api: TelegramR<Blob, _> = TelegramR::new(my_transport);
//! let sent = api.send_message(SendMessage::new(42, "hi"));
//! ```

// Configuration module
pub mod config;

// Domain layer - Entity model
pub mod domain;

// Application layer - Operations and projections
pub mod application;

// Infrastructure layer - Observability
pub mod infrastructure;

// Shared utilities
pub mod shared;

// Telemetry and observability
pub mod telemetry;
