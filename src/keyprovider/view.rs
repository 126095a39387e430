//! Pluggable prompt UI consumed by [`super::KeyProvider`].

use async_trait::async_trait;

use super::controller::{ReadController, WriteController};
use super::error::KeyProviderError;

/// A prompting UI (console, dialog, web) for obtaining encryption keys.
///
/// Implementations are handed a short-lived controller scoped to exactly
/// one call; see [`WriteController`] and [`ReadController`] for what each
/// prompt may do with it.
#[async_trait]
pub trait View<K>: Send + Sync {
    /// Prompts for a new or changed key. The controller exposes the
    /// current key (if any) and accepts `set_key`; it does not accept
    /// `set_change_requested` (see [`WriteController`]).
    async fn prompt_write_key(
        &self,
        controller: &mut WriteController<'_, K>,
    ) -> Result<(), KeyProviderError>;

    /// Prompts for the key to read an already-encrypted resource.
    /// `invalid` is true when a previous attempt with the current key
    /// failed validation, so the view should indicate that to the user.
    async fn prompt_read_key(
        &self,
        controller: &mut ReadController<'_, K>,
        invalid: bool,
    ) -> Result<(), KeyProviderError>;
}
