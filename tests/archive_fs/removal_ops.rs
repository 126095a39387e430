use archive_vfs::{AccessKind, ArchiveFileSystem, ArchiveFsError};

use super::common::{MemoryContainer, MemoryDriver};

#[test]
fn unlink_removes_entry_and_unlinks_parent_member() {
    let container = MemoryContainer::new(["a/b.txt"], 100);
    let mut fs = ArchiveFileSystem::from_container(MemoryDriver, &container, None);

    fs.unlink("a/b.txt").expect("unlink");

    assert!(fs.entry("a/b.txt").is_none());
    assert!(fs.entry("a").unwrap().members().next().is_none());
}

#[test]
fn unlink_non_empty_directory_reports_member_count() {
    let container = MemoryContainer::new(["dir/one.txt", "dir/two.txt"], 10);
    let mut fs = ArchiveFileSystem::from_container(MemoryDriver, &container, None);

    let err = fs.unlink("dir").unwrap_err();
    assert!(matches!(err, ArchiveFsError::DirectoryNotEmpty(_, 2)));
    assert!(fs.entry("dir").is_some());
}

#[test]
fn unlink_root_is_a_silent_no_op() {
    let mut fs = ArchiveFileSystem::new(MemoryDriver);
    fs.unlink("").expect("no-op");
    assert_eq!(fs.size(), 1);
}

#[test]
fn set_time_rejects_negative_values() {
    let container = MemoryContainer::new(["a.txt"], 10);
    let mut fs = ArchiveFileSystem::from_container(MemoryDriver, &container, None);
    let err = fs.set_time("a.txt", &[AccessKind::Write], -7).unwrap_err();
    assert!(matches!(err, ArchiveFsError::InvalidArgument(_)));
}

#[test]
fn set_time_over_two_kinds_conjoins_and_applies_both() {
    let container = MemoryContainer::new(["a.txt"], 10);
    let mut fs = ArchiveFileSystem::from_container(MemoryDriver, &container, None);
    let applied = fs
        .set_time("a.txt", &[AccessKind::Read, AccessKind::Create], 5)
        .expect("set");
    assert!(applied);

    let entry = fs.entry("a.txt").unwrap();
    let file = entry.get(archive_vfs::EntryType::File).unwrap();
    assert_eq!(file.time(AccessKind::Read), 5);
    assert_eq!(file.time(AccessKind::Create), 5);
}

#[test]
fn set_times_applies_every_requested_kind() {
    let container = MemoryContainer::new(["a.txt"], 10);
    let mut fs = ArchiveFileSystem::from_container(MemoryDriver, &container, None);
    let applied = fs
        .set_times("a.txt", &[(AccessKind::Read, 1), (AccessKind::Create, 2)])
        .expect("set");
    assert!(applied);

    let entry = fs.entry("a.txt").unwrap();
    let file = entry.get(archive_vfs::EntryType::File).unwrap();
    assert_eq!(file.time(AccessKind::Read), 1);
    assert_eq!(file.time(AccessKind::Create), 2);
    assert_eq!(file.time(AccessKind::Write), 10); // untouched
}

#[test]
fn set_times_skipping_a_negative_pair_yields_false_but_still_applies_the_rest() {
    let container = MemoryContainer::new(["a.txt"], 10);
    let mut fs = ArchiveFileSystem::from_container(MemoryDriver, &container, None);
    fs.set_time("a.txt", &[AccessKind::Read], 99).expect("seed");

    let applied = fs
        .set_times("a.txt", &[(AccessKind::Read, -1), (AccessKind::Write, 5)])
        .expect("set");
    assert!(!applied);

    let entry = fs.entry("a.txt").unwrap();
    let file = entry.get(archive_vfs::EntryType::File).unwrap();
    assert_eq!(file.time(AccessKind::Read), 99, "negative pair must not overwrite");
    assert_eq!(file.time(AccessKind::Write), 5);
}
