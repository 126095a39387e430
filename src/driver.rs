//! External collaborator interfaces the filesystem is built against but
//! never implements itself: the codec-side driver, the flat entry
//! container it streams from, and the touch-notification hook.

use crate::entry::{ArchiveEntry, EntryType};

/// Errors a driver can raise when asked to mint a new entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DriverError {
    /// The requested name cannot be represented by this driver's codec
    /// (e.g. contains characters outside the archive's charset).
    #[error("name {0:?} cannot be encoded by this archive driver")]
    InvalidName(String),
}

/// Capability for minting archive entries of a concrete driver's type `E`.
///
/// Concrete codecs (ZIP, TAR, ...) implement this; the filesystem only ever
/// calls through it, never constructs entries itself.
pub trait ArchiveDriver<E: ArchiveEntry> {
    /// Creates a new entry named `name` of the given type, optionally
    /// seeded from `template`. May fail if `name` cannot be encoded.
    fn new_entry(
        &self,
        name: &str,
        entry_type: EntryType,
        template: Option<&E>,
    ) -> Result<E, DriverError>;

    /// Pure check of whether `name` could ever be encoded by this driver,
    /// without allocating an entry.
    fn assert_encodable(&self, name: &str) -> Result<(), DriverError>;
}

/// A flat, driver-defined-order collection of archive entries, as read off
/// the wire by a concrete codec.
pub trait EntryContainer<E: ArchiveEntry> {
    /// Number of entries in the container.
    fn size(&self) -> usize;

    /// Looks up an entry by its canonical name, if present.
    fn entry(&self, name: &str) -> Option<&E>;

    /// Iterates all entries. Order is driver-defined; the filesystem does
    /// not rely on it (construction stages all entries before doing any
    /// integrity fix-up).
    fn iter(&self) -> Box<dyn Iterator<Item = &E> + '_>;
}

/// Hook invoked at most once per clean-to-dirty transition, immediately
/// before the first mutation of a touch epoch. May veto by returning an
/// error, in which case the filesystem remains unmodified.
pub trait TouchListener: Send + Sync {
    fn pre_touch(&self) -> Result<(), std::io::Error>;
}
