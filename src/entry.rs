//! Archive entry model: the per-node data an [`ArchiveDriver`](crate::driver::ArchiveDriver)
//! hands the filesystem, and the covariant wrapper the filesystem stores it under.

use std::fmt;

/// Sentinel value for an unset time or size.
pub const UNKNOWN: i64 = -1;

/// Type of an archive entry (RFC-free; archives only distinguish these three).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EntryType {
    File,
    Directory,
    Special,
}

impl EntryType {
    /// All entry types, in the order [`CovariantEntry`] indexes its variant slots.
    pub const ALL: [EntryType; 3] = [EntryType::File, EntryType::Directory, EntryType::Special];

    fn slot(self) -> usize {
        match self {
            EntryType::File => 0,
            EntryType::Directory => 1,
            EntryType::Special => 2,
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntryType::File => "FILE",
            EntryType::Directory => "DIRECTORY",
            EntryType::Special => "SPECIAL",
        };
        f.write_str(name)
    }
}

/// Kind of timestamp an [`ArchiveEntry`] may carry.
///
/// Drivers may need more kinds than this; [`AccessKind::ALL`] is the set the
/// filesystem itself iterates over (e.g. to touch every time on removal).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AccessKind {
    Read,
    Write,
    Create,
}

impl AccessKind {
    pub const ALL: [AccessKind; 3] = [AccessKind::Read, AccessKind::Write, AccessKind::Create];
}

/// Kind of size an [`ArchiveEntry`] may carry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SizeKind {
    Data,
    Storage,
}

impl SizeKind {
    pub const ALL: [SizeKind; 2] = [SizeKind::Data, SizeKind::Storage];
}

/// A single record from an archive container: a file, directory or special
/// node with a canonical name, per-[`AccessKind`] times and per-[`SizeKind`]
/// sizes.
///
/// Implementations are owned by the driver's container; the filesystem only
/// ever holds them through [`CovariantEntry`].
pub trait ArchiveEntry: fmt::Debug + Send + Sync {
    /// Canonical archive path of this entry (no leading separator).
    fn name(&self) -> &str;

    /// The type this entry was constructed as.
    fn entry_type(&self) -> EntryType;

    /// Time for the given access kind, or [`UNKNOWN`] if never recorded.
    fn time(&self, access: AccessKind) -> i64;

    /// Sets the time for the given access kind. Returns `false` if this
    /// driver's entry representation cannot express the change (the
    /// filesystem ANDs this into a combined success flag, never treats it
    /// as fatal on its own).
    fn set_time(&mut self, access: AccessKind, value: i64) -> bool;

    /// Size for the given size kind, or [`UNKNOWN`] if not tracked.
    fn size(&self, kind: SizeKind) -> i64;

    /// Sets the size for the given size kind; same success semantics as
    /// [`ArchiveEntry::set_time`].
    fn set_size(&mut self, kind: SizeKind, value: i64) -> bool;
}

/// Wraps the (at most three) archive entries that may coexist at one
/// canonical path — a ZIP archive can contain both a `foo` file record and a
/// `foo/` directory record — plus, for directories, the set of child base
/// names.
///
/// Member order is insertion order: this is what makes `readdir`-style
/// iteration over a directory reproducible.
#[derive(Debug, Clone)]
pub struct CovariantEntry<E: ArchiveEntry> {
    path: String,
    variants: [Option<E>; 3],
    members: indexmap::IndexSet<String>,
}

impl<E: ArchiveEntry + Clone> CovariantEntry<E> {
    /// Creates an empty covariant entry at `path` with no variants and no
    /// members.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into(), variants: [None, None, None], members: indexmap::IndexSet::new() }
    }

    /// The canonical path this wrapper lives at.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Stores `entry` under its own [`ArchiveEntry::entry_type`], replacing
    /// any prior entry of that type.
    pub fn put(&mut self, entry: E) {
        let slot = entry.entry_type().slot();
        self.variants[slot] = Some(entry);
    }

    /// The entry stored for `kind`, if any.
    pub fn get(&self, kind: EntryType) -> Option<&E> {
        self.variants[kind.slot()].as_ref()
    }

    /// Mutable access to the entry stored for `kind`, if any.
    pub fn get_mut(&mut self, kind: EntryType) -> Option<&mut E> {
        self.variants[kind.slot()].as_mut()
    }

    /// Any entry present at this path, preferring FILE — matches the
    /// source's last-segment touching logic, which only ever cares about
    /// the type just created.
    pub fn any(&self) -> Option<&E> {
        self.get(EntryType::File)
            .or_else(|| self.get(EntryType::Directory))
            .or_else(|| self.get(EntryType::Special))
    }

    /// Mutable variant of [`CovariantEntry::any`].
    pub fn any_mut(&mut self) -> Option<&mut E> {
        if self.variants[EntryType::File.slot()].is_some() {
            return self.get_mut(EntryType::File);
        }
        if self.variants[EntryType::Directory.slot()].is_some() {
            return self.get_mut(EntryType::Directory);
        }
        self.get_mut(EntryType::Special)
    }

    /// True iff a variant of the given type is present.
    pub fn is_type(&self, kind: EntryType) -> bool {
        self.variants[kind.slot()].is_some()
    }

    /// Adds `member` to the directory membership set. Returns `true` if it
    /// was not already present.
    pub fn add_member(&mut self, member: impl Into<String>) -> bool {
        self.members.insert(member.into())
    }

    /// Removes `member` from the directory membership set. Returns `true`
    /// if it was present.
    pub fn remove_member(&mut self, member: &str) -> bool {
        self.members.shift_remove(member)
    }

    /// Directory membership, in insertion order.
    pub fn members(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(String::as_str)
    }

    /// Number of members (directory child count).
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Structural clone of this wrapper and its contained entries.
    ///
    /// The source models this as `clone(driver)`, routing through the
    /// driver so it can special-case entries it cannot trivially copy; our
    /// entries are required to be `Clone` so a plain structural clone
    /// suffices (see DESIGN.md).
    pub fn clone_entry(&self) -> Self {
        self.clone()
    }
}
