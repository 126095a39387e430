use archive_vfs::{AccessKind, ArchiveFileSystem, ArchiveFsError, EntryType, MknodOptions, UNKNOWN};

use super::common::{MemoryContainer, MemoryDriver};

#[test]
fn mknod_under_ghost_parent_does_not_touch_it() {
    let container = MemoryContainer::new(["a/b/c.txt"], 100);
    let mut fs = ArchiveFileSystem::from_container(MemoryDriver, &container, None);

    fs.mknod("a/b/d.txt", EntryType::File, MknodOptions::empty(), None)
        .expect("stage")
        .commit()
        .expect("commit");

    let ab = fs.entry("a/b").unwrap();
    assert_eq!(ab.get(EntryType::Directory).unwrap().time(AccessKind::Write), UNKNOWN);
    assert_eq!(ab.members().collect::<Vec<_>>(), vec!["c.txt", "d.txt"]);
}

#[test]
fn mknod_with_create_parents_builds_fresh_non_ghost_chain() {
    let mut fs = ArchiveFileSystem::new(MemoryDriver);

    fs.mknod("x/y/z", EntryType::File, MknodOptions::CREATE_PARENTS, None)
        .expect("stage")
        .commit()
        .expect("commit");

    for path in ["x", "x/y"] {
        let dir = fs.entry(path).unwrap();
        assert!(dir.is_type(EntryType::Directory));
        assert_ne!(dir.get(EntryType::Directory).unwrap().time(AccessKind::Write), UNKNOWN);
    }
    assert!(fs.entry("x/y/z").unwrap().is_type(EntryType::File));
}

#[test]
fn mknod_missing_parent_without_create_parents_fails() {
    let mut fs = ArchiveFileSystem::new(MemoryDriver);
    let err = fs.mknod("a/b", EntryType::File, MknodOptions::empty(), None).unwrap_err();
    assert!(matches!(err, ArchiveFsError::MissingParent(_)));
}

#[test]
fn mknod_exclusive_on_existing_entry_fails() {
    let container = MemoryContainer::new(["a.txt"], 1);
    let mut fs = ArchiveFileSystem::from_container(MemoryDriver, &container, None);
    let err = fs.mknod("a.txt", EntryType::File, MknodOptions::EXCLUSIVE, None).unwrap_err();
    assert!(matches!(err, ArchiveFsError::AlreadyExists(_)));
}

#[test]
fn repeated_mknod_without_exclusive_is_idempotent() {
    let mut fs = ArchiveFileSystem::new(MemoryDriver);
    for _ in 0..2 {
        fs.mknod("a.txt", EntryType::File, MknodOptions::empty(), None)
            .unwrap()
            .commit()
            .unwrap();
    }
    let root = fs.entry("").unwrap();
    assert_eq!(root.members().filter(|m| *m == "a.txt").count(), 1);
    assert_eq!(fs.size(), 2);
}
