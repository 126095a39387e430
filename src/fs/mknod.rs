//! Transactional entry creation: `mknod` stages a chain of segment links,
//! `Operation::commit` atomically applies it.

use bitflags::bitflags;

use super::{ArchiveFileSystem, ArchiveFsError, Result};
use crate::driver::ArchiveDriver;
use crate::entry::{AccessKind, ArchiveEntry, CovariantEntry, EntryType, UNKNOWN};
use crate::path;

bitflags! {
    /// Options accepted by [`ArchiveFileSystem::mknod`].
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub struct MknodOptions: u32 {
        /// Synthesize any missing ancestor directories instead of failing
        /// with [`ArchiveFsError::MissingParent`].
        const CREATE_PARENTS = 1 << 0;
        /// Fail with [`ArchiveFsError::AlreadyExists`] if an entry is
        /// already present at the target name.
        const EXCLUSIVE = 1 << 1;
    }
}

enum SegmentKind<E> {
    /// The existing directory the chain attaches to; never (re)inserted.
    Anchor,
    /// A brand-new entry to insert on commit.
    New(E),
}

struct Segment<E> {
    path: String,
    /// Base name under which this segment registers in its parent's
    /// member set. `None` only for the anchor.
    base: Option<String>,
    kind: SegmentKind<E>,
}

/// A staged `mknod`, not yet visible in the filesystem until
/// [`Operation::commit`] is called.
///
/// Known limitation, carried forward deliberately: the table state
/// validated when this `Operation` was built is assumed unchanged at
/// commit time. Callers that serialize mutations (the expected usage) are
/// safe; interleaving another mutation between `mknod` and `commit` can
/// violate filesystem invariants. This crate does not re-validate in
/// `commit`.
pub struct Operation<'a, D: ArchiveDriver<E>, E: ArchiveEntry + Clone> {
    fs: &'a mut ArchiveFileSystem<D, E>,
    segments: Vec<Segment<E>>,
}

impl<D: ArchiveDriver<E>, E: ArchiveEntry + Clone> ArchiveFileSystem<D, E> {
    /// Stages creation of a FILE or DIRECTORY entry at `name`.
    ///
    /// Validates eagerly (before any entry is minted): rejects
    /// non-FILE/DIRECTORY types, replacing a non-FILE entry, a type
    /// mismatch against an existing FILE, or `EXCLUSIVE` against any
    /// existing entry. If `template` is a [`CovariantEntry`], only its
    /// variant matching the requested type is used as a template.
    pub fn mknod(
        &mut self,
        name: &str,
        entry_type: EntryType,
        options: MknodOptions,
        template: Option<&CovariantEntry<E>>,
    ) -> Result<Operation<'_, D, E>> {
        let segments = self.build_segments(name, entry_type, options, template)?;
        Ok(Operation { fs: self, segments })
    }

    fn build_segments(
        &self,
        name: &str,
        entry_type: EntryType,
        options: MknodOptions,
        template: Option<&CovariantEntry<E>>,
    ) -> Result<Vec<Segment<E>>> {
        if entry_type != EntryType::File && entry_type != EntryType::Directory {
            return Err(ArchiveFsError::UnsupportedType(name.to_owned()));
        }

        if let Some(existing) = self.table().get(name) {
            if !existing.is_type(EntryType::File) {
                return Err(ArchiveFsError::NotReplaceable(name.to_owned()));
            }
            if entry_type != EntryType::File {
                return Err(ArchiveFsError::TypeMismatch(name.to_owned()));
            }
            if options.contains(MknodOptions::EXCLUSIVE) {
                return Err(ArchiveFsError::AlreadyExists(name.to_owned()));
            }
        }

        let (parent_path, base) = path::split(name);
        let mut chain = if self.table().contains(parent_path) {
            if !self.table().is_directory(parent_path) {
                return Err(ArchiveFsError::NotADirectory(name.to_owned()));
            }
            vec![Segment { path: parent_path.to_owned(), base: None, kind: SegmentKind::Anchor }]
        } else if options.contains(MknodOptions::CREATE_PARENTS) {
            self.build_parent_chain(parent_path)?
        } else {
            return Err(ArchiveFsError::MissingParent(name.to_owned()));
        };

        let template_entry = template.and_then(|t| t.get(entry_type));
        let new_entry = self.new_checked_entry(name, entry_type, template_entry)?;
        chain.push(Segment {
            path: name.to_owned(),
            base: Some(base.to_owned()),
            kind: SegmentKind::New(new_entry),
        });
        Ok(chain)
    }

    /// Recursively builds the DIRECTORY chain needed to reach `path`,
    /// bottoming out at the first already-existing ancestor (at worst,
    /// the root, which always exists per invariant I1).
    fn build_parent_chain(&self, path: &str) -> Result<Vec<Segment<E>>> {
        if self.table().contains(path) {
            if !self.table().is_directory(path) {
                return Err(ArchiveFsError::NotADirectory(path.to_owned()));
            }
            return Ok(vec![Segment {
                path: path.to_owned(),
                base: None,
                kind: SegmentKind::Anchor,
            }]);
        }

        let (parent, base) = crate::path::split(path);
        let mut chain = self.build_parent_chain(parent)?;
        let entry = Self::mint(self.driver(), path, EntryType::Directory, None);
        chain.push(Segment {
            path: path.to_owned(),
            base: Some(base.to_owned()),
            kind: SegmentKind::New(entry),
        });
        Ok(chain)
    }
}

impl<D: ArchiveDriver<E>, E: ArchiveEntry + Clone> Operation<'_, D, E> {
    /// Commits the staged chain: touches the filesystem, inserts every new
    /// segment under its canonical path, links it into its parent's
    /// member set, and touches WRITE times along the chain as appropriate.
    pub fn commit(self) -> Result<()> {
        self.fs.touch()?;

        let mut segments = self.segments.into_iter();
        let anchor = segments.next().expect("a staged operation always has an anchor segment");
        let mut parent_path = anchor.path;
        let mut now: Option<i64> = None;
        let mut last_path = parent_path.clone();

        for segment in segments {
            let base = segment.base.expect("non-anchor segments always carry a base name");
            let SegmentKind::New(entry) = segment.kind else {
                unreachable!("only the anchor segment is SegmentKind::Anchor");
            };

            self.fs.table_mut().add(segment.path.clone(), entry);
            let grew = self.fs.table_mut().entry_or_insert(&parent_path).add_member(base);

            if grew {
                if let Some(parent_entry) =
                    self.fs.table_mut().get_mut(&parent_path).and_then(|c| c.any_mut())
                {
                    if parent_entry.time(AccessKind::Write) != UNKNOWN {
                        let now = *now.get_or_insert_with(ArchiveFileSystem::<D, E>::now);
                        parent_entry.set_time(AccessKind::Write, now);
                    }
                }
            }

            last_path = segment.path.clone();
            parent_path = segment.path;
        }

        if let Some(last_entry) = self.fs.table_mut().get_mut(&last_path).and_then(|c| c.any_mut())
        {
            if last_entry.time(AccessKind::Write) == UNKNOWN {
                let now = *now.get_or_insert_with(ArchiveFileSystem::<D, E>::now);
                last_entry.set_time(AccessKind::Write, now);
            }
        }

        tracing::debug!(path = %last_path, "mknod committed");
        Ok(())
    }
}
