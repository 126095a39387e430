//! Interactive key-provider state machine.
//!
//! Coordinates a [`View`] (pluggable prompt UI) and a short-lived
//! [`WriteController`]/[`ReadController`] (the capability handed to the
//! view for the duration of one prompt) to obtain and cache encryption
//! keys, distinguishing write-key retrieval from read-key retrieval (with
//! validity feedback), honoring a "change requested" flag, and caching
//! cancellation so repeated opens of an already-declined resource don't
//! re-prompt endlessly.

mod controller;
mod error;
mod view;

pub use controller::{ReadController, WriteController};
pub use error::KeyProviderError;
pub use view::View;

/// The provider's current relationship to a key for its resource.
#[derive(Debug, Clone)]
enum State<K> {
    /// No key has been established yet (or it was just cleared).
    Reset,
    /// A key is held and believed valid.
    Set(K),
    /// Prompting was cancelled; cached so reads short-circuit until reset.
    Cancelled,
}

/// Owns the key-retrieval state machine for one encrypted resource.
///
/// Not `Clone`: the state machine's identity is tied to the one
/// [`View`] conversation using it. `state` and `resource` are meant to be
/// observed volatilely across threads, but only one thread prompts at a
/// time, enforced by the caller.
pub struct KeyProvider<K> {
    state: State<K>,
    resource: String,
    ask_always_for_write_key: bool,
    change_requested: bool,
}

impl<K: Clone> KeyProvider<K> {
    /// Creates a provider in the `RESET` state for `resource`.
    ///
    /// If `ask_always_for_write_key` is set, `retrieve_write_key` re-prompts
    /// every time even when a key is already `SET` (some callers want the
    /// user to confirm or retype the key on every write regardless of
    /// caching).
    pub fn new(resource: impl Into<String>, ask_always_for_write_key: bool) -> Self {
        Self {
            state: State::Reset,
            resource: resource.into(),
            ask_always_for_write_key,
            change_requested: false,
        }
    }

    /// Clears the cached cancellation, if any, returning to `RESET`. A
    /// no-op from `RESET` or `SET`.
    pub fn reset_cancelled_key(&mut self) {
        if matches!(self.state, State::Cancelled) {
            tracing::debug!(resource = %self.resource, "clearing cached cancellation");
            self.change_requested = false;
            self.state = State::Reset;
        }
    }

    /// Unconditionally clears any key and cancellation, returning to
    /// `RESET` regardless of current state.
    pub fn reset_unconditionally(&mut self) {
        tracing::debug!(resource = %self.resource, "resetting key provider");
        self.change_requested = false;
        self.state = State::Reset;
    }

    /// Retrieves (prompting if necessary) the key to use for writing.
    ///
    /// - From `CANCELLED`, always re-prompts from scratch (a caller asking
    ///   to write implies intent, not passive cancellation caching — that
    ///   only applies to reads, see `retrieve_read_key`).
    /// - From `SET` with a pending change request (set via
    ///   [`ReadController::set_change_requested`]), clears the flag and
    ///   re-prompts; if the new prompt is itself cancelled, the old key is
    ///   restored rather than lost.
    /// - From `SET` otherwise, returns the current key, re-prompting first
    ///   only if `ask_always_for_write_key` was set at construction.
    pub async fn retrieve_write_key<V: View<K>>(
        &mut self,
        view: &V,
    ) -> Result<K, KeyProviderError> {
        match self.phase() {
            Phase::Cancelled | Phase::Reset => self.prompt_write_from_reset(view).await,
            Phase::SetChangeRequested(previous) => {
                self.change_requested = false;
                match self.prompt_write_from_reset(view).await {
                    Ok(new_key) => Ok(new_key),
                    Err(err) => {
                        self.state = State::Set(previous);
                        Err(err)
                    }
                }
            }
            Phase::Set(previous) => {
                if self.ask_always_for_write_key {
                    self.prompt_write_update(view).await?;
                    Ok(self.get_key().cloned().unwrap_or(previous))
                } else {
                    Ok(previous)
                }
            }
        }
    }

    /// Retrieves (prompting if necessary) the key to use for reading.
    ///
    /// `invalid` signals that a previous attempt with the current key
    /// failed; passing it with the provider in `SET` forces a re-prompt.
    /// From `CANCELLED`, raises [`KeyProviderError::KeyPromptingCancelled`]
    /// immediately without re-prompting — the cached-cancellation
    /// behavior `resetCancelledKey`/`resetUnconditionally` exist to clear.
    pub async fn retrieve_read_key<V: View<K>>(
        &mut self,
        view: &V,
        invalid: bool,
    ) -> Result<K, KeyProviderError> {
        if matches!(self.state, State::Cancelled) {
            return Err(KeyProviderError::KeyPromptingCancelled);
        }
        if let State::Set(ref key) = self.state {
            if !invalid {
                return Ok(key.clone());
            }
            self.state = State::Reset;
        }

        loop {
            let result = {
                let mut controller = ReadController::new(self);
                let result = view.prompt_read_key(&mut controller, invalid).await;
                controller.close();
                result
            };
            if let Err(err) = result {
                if err.is_cacheable() {
                    tracing::debug!(resource = %self.resource, "caching read-key cancellation");
                    self.state = State::Cancelled;
                } else {
                    return Err(err);
                }
            }
            match &self.state {
                State::Set(key) => return Ok(key.clone()),
                State::Cancelled => return Err(KeyProviderError::KeyPromptingCancelled),
                State::Reset => continue,
            }
        }
    }

    async fn prompt_write_from_reset<V: View<K>>(
        &mut self,
        view: &V,
    ) -> Result<K, KeyProviderError> {
        let result = {
            let mut controller = WriteController::new(self);
            let result = view.prompt_write_key(&mut controller).await;
            controller.close();
            result
        };
        if let Err(err) = result {
            if err.is_cacheable() {
                self.state = State::Cancelled;
            } else {
                return Err(err);
            }
        }
        if matches!(self.state, State::Reset) {
            self.state = State::Cancelled;
        }
        tracing::debug!(resource = %self.resource, "write-key prompt settled");
        match &self.state {
            State::Set(key) => Ok(key.clone()),
            State::Cancelled => Err(KeyProviderError::KeyPromptingCancelled),
            State::Reset => unreachable!("just forced out of RESET above"),
        }
    }

    async fn prompt_write_update<V: View<K>>(&mut self, view: &V) -> Result<(), KeyProviderError> {
        let mut controller = WriteController::new(self);
        let result = view.prompt_write_key(&mut controller).await;
        controller.close();
        result
    }

    fn phase(&self) -> Phase<K> {
        match &self.state {
            State::Cancelled => Phase::Cancelled,
            State::Reset => Phase::Reset,
            State::Set(key) if self.change_requested => Phase::SetChangeRequested(key.clone()),
            State::Set(key) => Phase::Set(key.clone()),
        }
    }
}

/// Owned snapshot of the dispatch-relevant state, used so
/// `retrieve_write_key` never holds a borrow of `self.state` across an
/// `.await`.
enum Phase<K> {
    Reset,
    Cancelled,
    Set(K),
    SetChangeRequested(K),
}
