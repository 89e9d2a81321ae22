//! Tests for the inode index and subtree walk.

use super::*;
use crate::error::LslocksError;
use crate::test_support::{create_test_tree, file_id, touch};
use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};

fn build(root: &Path) -> (InodeIndex, WalkStats, CollectingSink) {
    let mut sink = CollectingSink::default();
    let (index, stats) = InodeIndex::build(root, &IndexOptions::default(), &mut sink).unwrap();
    (index, stats, sink)
}

fn paths_for(index: &InodeIndex, path: &Path) -> BTreeSet<PathBuf> {
    let (_, inode) = file_id(path);
    index
        .lookup(inode)
        .map(|(p, _)| p.to_path_buf())
        .collect()
}

#[test]
fn test_empty_directory_indexes_only_root() {
    let tree = create_test_tree();
    let (index, stats, sink) = build(tree.path());

    assert_eq!(index.len(), 1);
    assert_eq!(index.path_count(), 1);
    assert_eq!(
        paths_for(&index, tree.path()),
        BTreeSet::from([tree.path().to_path_buf()])
    );
    assert_eq!(stats.directories, 1);
    assert_eq!(stats.entries, 1);
    assert!(sink.skipped.is_empty());
}

#[test]
fn test_indexes_nested_files_and_directories() {
    let tree = create_test_tree();
    let root = tree.path();
    let a = touch(root, "a.txt");
    let sub = root.join("sub");
    std::fs::create_dir(&sub).unwrap();
    let b = touch(&sub, "b.txt");
    let deep = sub.join("deeper");
    std::fs::create_dir(&deep).unwrap();

    let (index, stats, sink) = build(root);

    assert_eq!(index.path_count(), 5);
    for path in [root.to_path_buf(), a, sub, b, deep] {
        assert!(
            paths_for(&index, &path).contains(&path),
            "missing {}",
            path.display()
        );
    }
    assert_eq!(stats.directories, 3);
    assert_eq!(stats.skipped, 0);
    assert!(sink.skipped.is_empty());
}

#[test]
fn test_hard_links_share_one_inode() {
    let tree = create_test_tree();
    let original = touch(tree.path(), "original");
    let link = tree.path().join("link");
    std::fs::hard_link(&original, &link).unwrap();

    let (index, _, _) = build(tree.path());

    assert_eq!(index.len(), 2); // root + the shared inode
    assert_eq!(paths_for(&index, &original), BTreeSet::from([original, link]));
}

#[test]
fn test_dangling_symlink_is_skipped_with_warning() {
    let tree = create_test_tree();
    let kept = touch(tree.path(), "kept");
    let dangling = tree.path().join("dangling");
    std::os::unix::fs::symlink(tree.path().join("gone"), &dangling).unwrap();

    let (index, stats, sink) = build(tree.path());

    assert_eq!(index.path_count(), 2);
    assert!(paths_for(&index, &kept).contains(&kept));
    assert_eq!(stats.skipped, 1);
    assert_eq!(sink.skipped, vec![(dangling, io::ErrorKind::NotFound)]);
}

#[test]
fn test_symlinks_indexed_by_target_by_default() {
    let tree = create_test_tree();
    let target = touch(tree.path(), "target");
    let alias = tree.path().join("alias");
    std::os::unix::fs::symlink(&target, &alias).unwrap();

    let (index, _, _) = build(tree.path());

    assert_eq!(paths_for(&index, &target), BTreeSet::from([alias, target]));
}

#[test]
fn test_symlinks_indexed_as_links_when_not_following() {
    let tree = create_test_tree();
    let target = touch(tree.path(), "target");
    let dangling = tree.path().join("dangling");
    std::os::unix::fs::symlink(tree.path().join("gone"), &dangling).unwrap();
    std::os::unix::fs::symlink(&target, tree.path().join("alias")).unwrap();

    let mut sink = CollectingSink::default();
    let options = IndexOptions {
        follow_symlinks: false,
    };
    let (index, stats) = InodeIndex::build(tree.path(), &options, &mut sink).unwrap();

    // root, target, and both links each get their own inode
    assert_eq!(index.len(), 4);
    assert_eq!(paths_for(&index, &target), BTreeSet::from([target]));
    assert_eq!(stats.skipped, 0);
    assert!(sink.skipped.is_empty());
}

#[test]
fn test_symlinked_directory_is_not_descended() {
    let outside = create_test_tree();
    let hidden = touch(outside.path(), "hidden");
    let tree = create_test_tree();
    let link = tree.path().join("elsewhere");
    std::os::unix::fs::symlink(outside.path(), &link).unwrap();

    let (index, stats, _) = build(tree.path());

    let (_, hidden_inode) = file_id(&hidden);
    assert!(!index.contains(hidden_inode));
    // The link itself resolves to the outside directory and is indexed.
    assert_eq!(paths_for(&index, outside.path()), BTreeSet::from([link]));
    assert_eq!(stats.directories, 1);
}

#[test]
fn test_root_path_is_normalized() {
    let tree = create_test_tree();
    let file = touch(tree.path(), "f");
    let messy = PathBuf::from(format!("{}/./", tree.path().display()));

    let (index, _, _) = build(&messy);

    assert_eq!(
        paths_for(&index, tree.path()),
        BTreeSet::from([tree.path().to_path_buf()])
    );
    assert_eq!(paths_for(&index, &file), BTreeSet::from([file]));
}

#[test]
fn test_missing_root_warns_and_yields_empty_index() {
    let tree = create_test_tree();
    let missing = tree.path().join("missing");

    let (index, stats, sink) = build(&missing);

    assert!(index.is_empty());
    assert_eq!(stats.entries, 0);
    // one warning for the listing, one for the root stat
    assert_eq!(sink.skipped.len(), 2);
    assert!(sink.skipped.iter().all(|(p, kind)| p == &missing && *kind == io::ErrorKind::NotFound));
}

#[test]
fn test_file_root_indexes_just_the_file() {
    let tree = create_test_tree();
    let file = touch(tree.path(), "plain");

    let (index, _, sink) = build(&file);

    assert_eq!(index.path_count(), 1);
    assert_eq!(paths_for(&index, &file), BTreeSet::from([file]));
    assert_eq!(sink.skipped.len(), 1);
}

#[test]
fn test_empty_root_is_invalid() {
    let mut sink = CollectingSink::default();
    let err = InodeIndex::build(Path::new(""), &IndexOptions::default(), &mut sink).unwrap_err();
    assert!(matches!(err, LslocksError::InvalidRoot { .. }));
}

#[test]
fn test_records_device_of_each_path() {
    let tree = create_test_tree();
    let file = touch(tree.path(), "f");
    let (device, inode) = file_id(&file);

    let (index, _, _) = build(tree.path());

    let found: Vec<_> = index.lookup(inode).collect();
    assert_eq!(found, vec![(file.as_path(), device)]);
}

#[test]
fn test_lookup_of_unknown_inode_is_empty() {
    let index = InodeIndex::new();
    assert_eq!(index.lookup(42).count(), 0);
    assert!(!index.contains(42));
}
