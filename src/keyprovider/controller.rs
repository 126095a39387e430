//! Capability handles given to a [`super::View`] for the duration of one
//! prompt call.

use super::error::KeyProviderError;
use super::{KeyProvider, State};

/// Handed to [`super::View::prompt_write_key`]. Scoped to the lifetime of
/// that single call: every method fails with
/// [`KeyProviderError::IllegalState`] once [`WriteController::close`] has
/// run.
///
/// Unlike [`ReadController`], a write controller exposes the current key
/// (the view may want to display it while changing it) but never
/// `set_change_requested` — the write path already got here because a
/// change was wanted, so that hint has nothing left to say.
pub struct WriteController<'a, K> {
    provider: &'a mut KeyProvider<K>,
    closed: bool,
}

impl<'a, K: Clone> WriteController<'a, K> {
    pub(super) fn new(provider: &'a mut KeyProvider<K>) -> Self {
        Self { provider, closed: false }
    }

    fn ensure_open(&self) -> Result<(), KeyProviderError> {
        if self.closed {
            Err(KeyProviderError::IllegalState)
        } else {
            Ok(())
        }
    }

    /// The resource this prompt is for.
    pub fn resource(&self) -> Result<&str, KeyProviderError> {
        self.ensure_open()?;
        Ok(&self.provider.resource)
    }

    /// The key currently held by the provider, if any.
    pub fn key(&self) -> Result<Option<&K>, KeyProviderError> {
        self.ensure_open()?;
        Ok(self.provider.get_key())
    }

    /// Sets (or, passing `None`, cancels) the key. Transitions the
    /// provider to `SET` or `CANCELLED` accordingly.
    pub fn set_key(&mut self, key: Option<K>) -> Result<(), KeyProviderError> {
        self.ensure_open()?;
        self.provider.set_key(key);
        Ok(())
    }

    /// Ends this prompt. Every further call on this controller fails.
    pub(super) fn close(&mut self) {
        self.closed = true;
    }
}

impl<K> Drop for WriteController<'_, K> {
    fn drop(&mut self) {
        self.closed = true;
    }
}

/// Handed to [`super::View::prompt_read_key`]. Rejects
/// [`WriteController::key`]'s equivalent — the read path never reveals a
/// previously set key to the view — but does expose
/// [`ReadController::set_change_requested`], the hook a "change password"
/// action in a read prompt uses to ask a later `retrieve_write_key` to
/// re-prompt even though a key is already set.
pub struct ReadController<'a, K> {
    provider: &'a mut KeyProvider<K>,
    closed: bool,
}

impl<'a, K: Clone> ReadController<'a, K> {
    pub(super) fn new(provider: &'a mut KeyProvider<K>) -> Self {
        Self { provider, closed: false }
    }

    fn ensure_open(&self) -> Result<(), KeyProviderError> {
        if self.closed {
            Err(KeyProviderError::IllegalState)
        } else {
            Ok(())
        }
    }

    pub fn resource(&self) -> Result<&str, KeyProviderError> {
        self.ensure_open()?;
        Ok(&self.provider.resource)
    }

    pub fn set_key(&mut self, key: Option<K>) -> Result<(), KeyProviderError> {
        self.ensure_open()?;
        self.provider.set_key(key);
        Ok(())
    }

    /// Flags that the user asked to change the key while reading. Consumed
    /// by the next `retrieve_write_key` call, which clears it and forces a
    /// re-prompt even from `SET`.
    pub fn set_change_requested(&mut self, requested: bool) -> Result<(), KeyProviderError> {
        self.ensure_open()?;
        self.provider.change_requested = requested;
        Ok(())
    }

    pub(super) fn close(&mut self) {
        self.closed = true;
    }
}

impl<K> Drop for ReadController<'_, K> {
    fn drop(&mut self) {
        self.closed = true;
    }
}

impl<K: Clone> KeyProvider<K> {
    /// The key currently held, if the provider is in the `SET` state.
    pub fn get_key(&self) -> Option<&K> {
        match &self.state {
            State::Set(key) => Some(key),
            State::Reset | State::Cancelled => None,
        }
    }

    /// Sets (`Some`) or cancels (`None`) the key directly, bypassing any
    /// prompt. Transitions to `SET` or `CANCELLED` accordingly.
    pub fn set_key(&mut self, key: Option<K>) {
        self.state = match key {
            Some(key) => State::Set(key),
            None => State::Cancelled,
        };
    }
}
