//! Reading the sample `dirExample` tree from disk.

use super::support::{create_dir_example, FILE0_CONTENT, FILE_SUB_CONTENT};
use fsobj::{Directory, TextFile, TreeError};
use tempfile::TempDir;

fn assert_matches_example(dir: &Directory) {
    assert_eq!(dir.dir_list(), vec!["subdirExample"]);
    assert_eq!(dir.file_list(), vec!["file0.txt"]);
    assert_eq!(dir.get_file("file0.txt").unwrap().get_str(), FILE0_CONTENT);

    let sub = dir.get_dir("subdirExample").unwrap();
    assert!(sub.dir_list().is_empty());
    assert_eq!(sub.file_list(), vec!["fileSub.txt"]);
    assert_eq!(sub.get_file("fileSub.txt").unwrap().get_str(), FILE_SUB_CONTENT);
}

#[test]
fn test_construct_from_path() {
    let temp = TempDir::new().unwrap();
    let path = create_dir_example(temp.path());
    let dir = Directory::open(&path).unwrap();
    assert_eq!(dir.name(), "dirExample");
    assert_eq!(dir.path().unwrap(), path);
    assert_matches_example(&dir);
}

#[test]
fn test_construct_from_path_with_trailing_separator() {
    let temp = TempDir::new().unwrap();
    let path = create_dir_example(temp.path());
    let dir = Directory::open(format!("{}/", path.display())).unwrap();
    assert_eq!(dir.name(), "dirExample");
    assert_eq!(dir.path().unwrap(), path);
    assert_matches_example(&dir);
}

#[test]
fn test_construct_from_path_with_separator_runs() {
    let temp = TempDir::new().unwrap();
    create_dir_example(temp.path());
    let raw = format!("{}//dirExample////", temp.path().display());
    let dir = Directory::open(&raw).unwrap();
    assert_eq!(dir.name(), "dirExample");
    assert_eq!(dir.path().unwrap(), temp.path().join("dirExample"));
    assert_matches_example(&dir);
}

#[test]
fn test_text_file_root_from_path() {
    let temp = TempDir::new().unwrap();
    let path = create_dir_example(temp.path()).join("file0.txt");
    let file = TextFile::open(&path).unwrap();
    assert!(file.is_root());
    assert_eq!(file.name(), "file0.txt");
    assert_eq!(file.path().unwrap(), path);
    assert_eq!(file.line_count(), 5);
    assert_eq!(file.get_str(), FILE0_CONTENT);
}

#[test]
fn test_lookup_children() {
    let temp = TempDir::new().unwrap();
    let dir = Directory::open(create_dir_example(temp.path())).unwrap();

    let file = dir.get_file("file0.txt").unwrap();
    assert_eq!(file.name(), "file0.txt");
    assert!(file.father().unwrap().same_node(&dir));

    let sub = dir.get_dir("subdirExample").unwrap();
    assert_eq!(sub.father().unwrap().name(), "dirExample");

    match dir.get_file("invalid") {
        Err(TreeError::NotFound { name, .. }) => assert_eq!(name, "invalid"),
        other => panic!("expected NotFound, got {:?}", other),
    }
    assert!(dir.get_dir("file0.txt").unwrap_err().is_not_found());
}

#[test]
fn test_children_are_tagged_by_kind() {
    let temp = TempDir::new().unwrap();
    let dir = Directory::open(create_dir_example(temp.path())).unwrap();
    let children = dir.children();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].name(), "file0.txt");
    assert!(children[0].as_text_file().is_some());
    assert_eq!(children[1].name(), "subdirExample");
    assert!(children[1].as_directory().is_some());
}
