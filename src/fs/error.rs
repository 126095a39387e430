//! Errors surfaced by [`super::ArchiveFileSystem`] mutators.

use std::io;

/// Errors raised by [`super::ArchiveFileSystem`] operations. Every variant
/// that applies to a specific entry carries its canonical path.
#[derive(Debug, thiserror::Error)]
pub enum ArchiveFsError {
    /// Lookup miss in a mutator.
    #[error("no such entry: {0}")]
    NotFound(String),

    /// `mknod` with `EXCLUSIVE` hit an existing entry.
    #[error("entry already exists: {0}")]
    AlreadyExists(String),

    /// `mknod` would replace a non-FILE entry.
    #[error("entry is not replaceable: {0}")]
    NotReplaceable(String),

    /// `mknod` requested a type that differs from the extant entry's.
    #[error("requested type does not match existing entry: {0}")]
    TypeMismatch(String),

    /// `mknod` requested a type other than FILE or DIRECTORY.
    #[error("unsupported entry type for mknod: {0}")]
    UnsupportedType(String),

    /// A path component that should be a directory is not one.
    #[error("not a directory: {0}")]
    NotADirectory(String),

    /// Parent is missing and `CREATE_PARENTS` was not requested.
    #[error("missing parent directory for: {0}")]
    MissingParent(String),

    /// `unlink` on a non-empty directory, carrying its member count.
    #[error("directory not empty ({1} members): {0}")]
    DirectoryNotEmpty(String, usize),

    /// The driver rejected the name's encoding.
    #[error("driver rejected entry name: {0}")]
    InvalidName(String),

    /// A mutator was attempted on a read-only filesystem.
    #[error("filesystem is read-only, refusing to modify: {0}")]
    ReadOnlyFileSystem(String),

    /// An argument was structurally invalid (e.g. a negative time).
    #[error("invalid argument for: {0}")]
    InvalidArgument(String),

    /// A non-null touch listener was already registered.
    #[error("a touch listener is already set")]
    ListenerAlreadySet,

    /// The touch listener vetoed the pending mutation.
    #[error("touch listener rejected the pending mutation: {0}")]
    Io(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, ArchiveFsError>;
