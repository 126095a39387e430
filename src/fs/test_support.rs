//! Shared fixtures for `fs` submodule tests: an in-memory driver and
//! container, standing in for a real ZIP/TAR codec.

use crate::driver::{ArchiveDriver, DriverError, EntryContainer};
use crate::entry::{AccessKind, ArchiveEntry, EntryType, SizeKind, UNKNOWN};

#[derive(Debug, Clone)]
pub(crate) struct TestEntry {
    name: String,
    ty: EntryType,
    times: [i64; 3],
    sizes: [i64; 2],
}

impl TestEntry {
    pub(crate) fn new(name: &str, ty: EntryType, write_time: i64) -> Self {
        let mut times = [UNKNOWN; 3];
        times[AccessKind::Write as usize] = write_time;
        Self { name: name.to_owned(), ty, times, sizes: [UNKNOWN; 2] }
    }
}

impl ArchiveEntry for TestEntry {
    fn name(&self) -> &str {
        &self.name
    }
    fn entry_type(&self) -> EntryType {
        self.ty
    }
    fn time(&self, access: AccessKind) -> i64 {
        self.times[access as usize]
    }
    fn set_time(&mut self, access: AccessKind, value: i64) -> bool {
        self.times[access as usize] = value;
        true
    }
    fn size(&self, kind: SizeKind) -> i64 {
        self.sizes[kind as usize]
    }
    fn set_size(&mut self, kind: SizeKind, value: i64) -> bool {
        self.sizes[kind as usize] = value;
        true
    }
}

#[derive(Debug, Default, Clone)]
pub(crate) struct InMemoryDriver;

impl ArchiveDriver<TestEntry> for InMemoryDriver {
    fn new_entry(
        &self,
        name: &str,
        entry_type: EntryType,
        template: Option<&TestEntry>,
    ) -> Result<TestEntry, DriverError> {
        if name.contains('\0') {
            return Err(DriverError::InvalidName(name.to_owned()));
        }
        let write_time = template.map(|t| t.time(AccessKind::Write)).unwrap_or_else(super::ArchiveFileSystem::<InMemoryDriver, TestEntry>::now);
        Ok(TestEntry::new(name, entry_type, write_time))
    }

    fn assert_encodable(&self, name: &str) -> Result<(), DriverError> {
        if name.contains('\0') {
            Err(DriverError::InvalidName(name.to_owned()))
        } else {
            Ok(())
        }
    }
}

/// A flat, fixed list of file entries named `t=100` by convention, used to
/// exercise fix-up.
pub(crate) struct TestContainer {
    entries: Vec<TestEntry>,
}

impl TestContainer {
    pub(crate) fn new<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            entries: names.into_iter().map(|n| TestEntry::new(n, EntryType::File, 100)).collect(),
        }
    }
}

impl EntryContainer<TestEntry> for TestContainer {
    fn size(&self) -> usize {
        self.entries.len()
    }

    fn entry(&self, name: &str) -> Option<&TestEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &TestEntry> + '_> {
        Box::new(self.entries.iter())
    }
}
