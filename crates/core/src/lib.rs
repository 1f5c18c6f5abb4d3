//! Core types and shared helpers for the Mailbridge email relay.
//!
//! This crate holds everything the provider integrations and the HTTP server
//! have in common: the [`EmailPayload`] wire model, required-field
//! validation, the default/fallback service selection policy, and the
//! HTML-to-plain-text reduction applied to message bodies before dispatch.

pub mod payload;
pub mod service;
pub mod text;

pub use payload::{EmailPayload, REQUIRED_FIELDS, missing_fields};
pub use service::{ServiceKind, ServicePair};
pub use text::html_to_plain_text;
