//! In-memory, modifiable filesystem overlay for archive containers
//! (ZIP/TAR-like): a hierarchical tree view over a flat list of archive
//! entries, with transactional creation (`mknod`), deletion (`unlink`),
//! attribute mutation, and a read-only variant.
//!
//! A second, unrelated state machine lives in [`keyprovider`]: interactive
//! coordination between a pluggable prompt view and the key retrieval
//! needed to open encrypted archives. It shares this crate only because
//! archives that are encrypted need both.
//!
//! Concrete archive codecs, stream-level readers/writers, mount
//! orchestration, and prompting UIs are external collaborators, consumed
//! only through the traits in [`driver`], [`reader`], and
//! [`keyprovider::View`].

pub mod driver;
pub mod entry;
pub mod fs;
pub mod keyprovider;
pub mod path;
pub mod reader;
pub mod table;

pub use driver::{ArchiveDriver, DriverError, EntryContainer, TouchListener};
pub use entry::{AccessKind, ArchiveEntry, CovariantEntry, EntryType, SizeKind, UNKNOWN};
pub use fs::{ArchiveFileSystem, ArchiveFsError, MknodOptions, Operation, ReadOnlyArchiveFileSystem};
pub use keyprovider::{KeyProvider, KeyProviderError, ReadController, View, WriteController};
pub use reader::ReadOnlyFile;
pub use table::EntryTable;
