//! HTTP server for the Mailbridge email relay.
//!
//! Exposes a single write endpoint, `POST /v1/send`, that validates an
//! email-send request, picks a default/fallback provider pair, and relays
//! the message -- trying the fallback provider once when the default fails.

pub mod api;
pub mod config;
pub mod error;
pub mod telemetry;
