use archive_vfs::{ArchiveFileSystem, ArchiveFsError, EntryType, MknodOptions, ReadOnlyArchiveFileSystem};

use super::common::{MemoryContainer, MemoryDriver};

#[test]
fn read_only_wrapper_rejects_every_mutator() {
    let container = MemoryContainer::new(["a.txt"], 10);
    let inner = ArchiveFileSystem::from_container(MemoryDriver, &container, None);
    let mut ro = ReadOnlyArchiveFileSystem::new(inner);

    assert!(ro.is_read_only());
    assert!(!ro.is_writable("a.txt"));

    assert!(matches!(
        ro.mknod("b.txt", EntryType::File, MknodOptions::empty(), None).unwrap_err(),
        ArchiveFsError::ReadOnlyFileSystem(_)
    ));
    assert!(matches!(ro.unlink("a.txt").unwrap_err(), ArchiveFsError::ReadOnlyFileSystem(_)));
}

#[test]
fn read_only_wrapper_still_permits_reads() {
    let container = MemoryContainer::new(["a.txt"], 10);
    let inner = ArchiveFileSystem::from_container(MemoryDriver, &container, None);
    let ro = ReadOnlyArchiveFileSystem::new(inner);

    assert_eq!(ro.size(), 2);
    assert!(ro.entry("a.txt").is_some());
}
