use async_trait::async_trait;
use mailbridge_core::EmailPayload;

use crate::error::ProviderError;
use crate::receipt::SendReceipt;

/// Strongly-typed provider trait with native `async fn`.
///
/// A provider performs exactly one outbound HTTP call per `send` and never
/// retries internally; a failed attempt is a single failure. This trait is
/// **not** object-safe because it uses native `async fn` methods. If you
/// need dynamic dispatch, use [`DynEmailProvider`] instead -- every
/// `EmailProvider` automatically implements `DynEmailProvider` via a blanket
/// implementation.
pub trait EmailProvider: Send + Sync {
    /// Returns the unique name of this provider.
    fn name(&self) -> &str;

    /// Send the given payload through the provider.
    fn send(
        &self,
        payload: &EmailPayload,
    ) -> impl std::future::Future<Output = Result<SendReceipt, ProviderError>> + Send;

    /// Verify the provider is usable (e.g. credentials are configured).
    fn health_check(&self) -> impl std::future::Future<Output = Result<(), ProviderError>> + Send;
}

/// Object-safe provider trait for use behind `Arc<dyn DynEmailProvider>`.
///
/// You generally should not implement this trait directly -- implement
/// [`EmailProvider`] and rely on the blanket implementation.
#[async_trait]
pub trait DynEmailProvider: Send + Sync {
    /// Returns the unique name of this provider.
    fn name(&self) -> &str;

    /// Send the given payload through the provider.
    async fn send(&self, payload: &EmailPayload) -> Result<SendReceipt, ProviderError>;

    /// Verify the provider is usable.
    async fn health_check(&self) -> Result<(), ProviderError>;
}

/// Blanket implementation: any type that implements [`EmailProvider`] also
/// implements [`DynEmailProvider`], bridging the static and dynamic dispatch
/// worlds.
#[async_trait]
impl<T: EmailProvider + Sync> DynEmailProvider for T {
    fn name(&self) -> &str {
        EmailProvider::name(self)
    }

    async fn send(&self, payload: &EmailPayload) -> Result<SendReceipt, ProviderError> {
        EmailProvider::send(self, payload).await
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        EmailProvider::health_check(self).await
    }
}
