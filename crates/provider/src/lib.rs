//! Provider trait and shared error taxonomy for Mailbridge email
//! integrations.
//!
//! Each transactional-email integration implements [`EmailProvider`]: one
//! asynchronous `send` operation plus an identifying name. The server holds
//! providers behind [`DynEmailProvider`] trait objects so the default and
//! fallback slots can be filled with either integration.

pub mod error;
pub mod provider;
pub mod receipt;

pub use error::ProviderError;
pub use provider::{DynEmailProvider, EmailProvider};
pub use receipt::SendReceipt;
