//! Errors raised by the key provider and its views.

use thiserror::Error;

/// Errors surfaced by [`super::KeyProvider`] and its [`super::View`]
/// implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyProviderError {
    /// The view cancelled prompting. Terminal until an explicit reset.
    #[error("key prompting was cancelled")]
    KeyPromptingCancelled,

    /// The view rejected the key for `resource` without asking for caching.
    #[error("unknown key for {0}")]
    UnknownKey(String),

    /// Like [`KeyProviderError::UnknownKey`], but the provider should cache
    /// the cancellation in the `CANCELLED` state so subsequent read-key
    /// requests short-circuit instead of re-prompting.
    #[error("unknown key for {0} (cached)")]
    CacheableUnknownKey(String),

    /// A call was made on a [`super::WriteController`] or
    /// [`super::ReadController`] after it was closed.
    #[error("controller used after close")]
    IllegalState,
}

impl KeyProviderError {
    /// True iff this error should cause the provider to cache a
    /// cancellation (transition to `CANCELLED`) rather than merely fail
    /// this one call.
    pub fn is_cacheable(&self) -> bool {
        matches!(self, KeyProviderError::CacheableUnknownKey(_))
    }
}
