use async_trait::async_trait;

use super::error::SourceError;

/// Asynchronous bridge to the external settings authority.
///
/// The authority is the source of truth whenever it answers; implementations
/// wrap whatever transport the host application provides (the webview host
/// bridge in the shipped client). The store works with no bridge configured
/// and falls back to the local cache alone.
///
/// No timeout is applied here: a bridge call that never resolves suspends the
/// calling task until the caller's own timeout fires.
#[async_trait]
pub trait AuthorityBridge: Send + Sync {
    /// Read the value stored under `name`.
    ///
    /// `Ok(None)` means the authority knows the key is unset, which is
    /// distinct from a transport error.
    async fn get_value(&self, name: &str) -> Result<Option<String>, SourceError>;

    /// Persist `value` under `name`.
    async fn set_value(&self, name: &str, value: &str) -> Result<(), SourceError>;
}
