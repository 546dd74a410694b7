//! Building trees in memory and materializing them.

use super::support::{create_dir_example, create_work_dir, sorted_listing};
use fsobj::{Directory, Node, NodeBuilder, TextFile, TreeError};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_children_registered_with_father() {
    let temp = TempDir::new().unwrap();
    let work = create_work_dir(temp.path());
    let root = Directory::open(&work).unwrap();
    assert!(root.dir_list().is_empty());
    assert!(root.file_list().is_empty());

    let d0 = Directory::child("tmpDir", &root).unwrap();
    assert_eq!(root.dir_list(), vec!["tmpDir"]);
    let d1 = Directory::child("tmpDir", &d0).unwrap();
    assert_eq!(d0.dir_list(), vec!["tmpDir"]);
    assert!(d1.dir_list().is_empty());

    assert!(sorted_listing(&work).is_empty());
    d0.write().unwrap();
    assert_eq!(sorted_listing(&work), vec!["tmpDir"]);
    assert_eq!(sorted_listing(&work.join("tmpDir")), vec!["tmpDir"]);
}

#[test]
fn test_duplicate_name_under_same_father_is_rejected() {
    let temp = TempDir::new().unwrap();
    let root = Directory::open(create_work_dir(temp.path())).unwrap();
    Directory::child("tmpDir", &root).unwrap();
    let err = Directory::child("tmpDir", &root).unwrap_err();
    assert!(matches!(err, TreeError::DuplicateChild { .. }));

    TextFile::child("tmp.txt", &root).unwrap();
    let err = TextFile::child("tmp.txt", &root).unwrap_err();
    assert!(matches!(err, TreeError::DuplicateChild { .. }));
    assert_eq!(root.file_list(), vec!["tmp.txt"]);
}

#[test]
fn test_same_name_under_different_fathers() {
    let temp = TempDir::new().unwrap();
    let root = Directory::open(create_work_dir(temp.path())).unwrap();
    let a = Directory::child("a", &root).unwrap();
    let b = Directory::child("b", &root).unwrap();
    TextFile::child("same.txt", &a).unwrap();
    TextFile::child("same.txt", &b).unwrap();
    assert_eq!(a.file_list(), vec!["same.txt"]);
    assert_eq!(b.file_list(), vec!["same.txt"]);
}

#[test]
fn test_file_as_father_is_rejected() {
    let temp = TempDir::new().unwrap();
    let dir = Directory::open(create_dir_example(temp.path())).unwrap();
    let file = dir.get_file("file0.txt").unwrap();
    let err = Directory::child("tmpDir", &file).unwrap_err();
    assert!(matches!(err, TreeError::NotADirectory { .. }));
    let err = NodeBuilder::new()
        .name("x.txt")
        .father(Node::from(&file))
        .build_text_file()
        .unwrap_err();
    assert!(matches!(err, TreeError::NotADirectory { .. }));
}

#[test]
fn test_invalid_child_names() {
    let temp = TempDir::new().unwrap();
    let root = Directory::open(create_work_dir(temp.path())).unwrap();
    for bad in ["a/b", ".", ".."] {
        let err = TextFile::child(bad, &root).unwrap_err();
        assert!(matches!(err, TreeError::InvalidName { .. }), "{:?}", bad);
    }
    let err = TextFile::child("", &root).unwrap_err();
    assert!(matches!(err, TreeError::InvalidConstruction(_)));
}

#[test]
fn test_child_over_existing_path_is_loaded() {
    let temp = TempDir::new().unwrap();
    let work = create_work_dir(temp.path());
    let root = Directory::open(&work).unwrap();
    assert!(root.file_list().is_empty());

    fs::write(work.join("late.txt"), "already here\n").unwrap();
    let late = TextFile::child("late.txt", &root).unwrap();
    assert_eq!(late.get_str(), "already here\n");
    assert_eq!(root.file_list(), vec!["late.txt"]);
}

#[test]
fn test_file_write_needs_parent_on_disk() {
    let temp = TempDir::new().unwrap();
    let root = Directory::open(create_work_dir(temp.path())).unwrap();
    let d0 = Directory::child("tmp", &root).unwrap();
    let d1 = Directory::child("tmp2", &d0).unwrap();
    let source = TextFile::open(create_dir_example(temp.path()).join("file0.txt")).unwrap();
    let copy = source.copy("tmp.txt", &d1).unwrap();
    let err = copy.write().unwrap_err();
    assert!(err.is_io());
    assert!(err.to_string().contains("tmp.txt"));
}

#[test]
fn test_round_trip_write_then_read() {
    let temp = TempDir::new().unwrap();
    let work = create_work_dir(temp.path());
    let root = Directory::open(&work).unwrap();
    let docs = Directory::child("docs", &root).unwrap();
    let notes = TextFile::child("notes.txt", &docs).unwrap();
    notes.set_lines(["first", "", "third"]);
    let empty = TextFile::child("empty.txt", &root).unwrap();
    Directory::child("nothing", &docs).unwrap();
    root.write().unwrap();

    let reread = Directory::open(&work).unwrap();
    assert_eq!(reread.dir_list(), root.dir_list());
    assert_eq!(reread.file_list(), root.file_list());
    assert_eq!(reread.get_file("empty.txt").unwrap().get_str(), empty.get_str());
    let reread_docs = reread.get_dir("docs").unwrap();
    assert_eq!(reread_docs.dir_list(), vec!["nothing"]);
    assert_eq!(
        reread_docs.get_file("notes.txt").unwrap().get_str(),
        "first\n\nthird\n"
    );
}
