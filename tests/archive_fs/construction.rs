use archive_vfs::{AccessKind, ArchiveFileSystem, EntryType, UNKNOWN};

use super::common::{MemoryContainer, MemoryDriver};

#[test]
fn empty_filesystem_is_just_root() {
    let fs = ArchiveFileSystem::new(MemoryDriver);
    assert_eq!(fs.size(), 1);

    let root = fs.entry("").expect("root entry");
    assert!(root.is_type(EntryType::Directory));
    assert_ne!(root.get(EntryType::Directory).unwrap().time(AccessKind::Write), UNKNOWN);
}

#[test]
fn populated_filesystem_reconstructs_tree_with_ghost_ancestors() {
    let container = MemoryContainer::new(["a/b/c.txt"], 100);
    let fs = ArchiveFileSystem::from_container(MemoryDriver, &container, None);

    assert_eq!(fs.size(), 4);

    let a = fs.entry("a").expect("ghost a");
    assert!(a.is_type(EntryType::Directory));
    assert_eq!(a.get(EntryType::Directory).unwrap().time(AccessKind::Write), UNKNOWN);
    assert_eq!(a.members().collect::<Vec<_>>(), vec!["b"]);

    let ab = fs.entry("a/b").expect("ghost a/b");
    assert_eq!(ab.get(EntryType::Directory).unwrap().time(AccessKind::Write), UNKNOWN);
    assert_eq!(ab.members().collect::<Vec<_>>(), vec!["c.txt"]);

    let file = fs.entry("a/b/c.txt").expect("file entry");
    assert_eq!(file.get(EntryType::File).unwrap().time(AccessKind::Write), 100);
}

#[test]
fn windows_style_separators_are_normalized() {
    let container = MemoryContainer::new(["dir\\nested\\file.txt"], 50);
    let fs = ArchiveFileSystem::from_container(MemoryDriver, &container, None);

    assert!(fs.entry("dir/nested/file.txt").is_some());
    assert!(fs.entry("dir\\nested\\file.txt").is_none());
}

#[test]
fn duplicate_entry_names_collapse_into_one_table_row() {
    let names = ["a.txt", "a.txt"];
    let container = MemoryContainer::new(names, 10);
    let fs = ArchiveFileSystem::from_container(MemoryDriver, &container, None);

    assert_eq!(fs.size(), 2); // root + a.txt, not 3
    let root = fs.entry("").unwrap();
    assert_eq!(root.members().filter(|m| *m == "a.txt").count(), 1);
}
