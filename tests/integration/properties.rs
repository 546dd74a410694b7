//! Property checks over generated names and line sets.

use fsobj::{Directory, TextFile};
use proptest::prelude::*;
use tempfile::TempDir;

fn segment() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_][A-Za-z0-9_.-]{0,11}".prop_filter("relative component", |s| s != "." && s != "..")
}

fn line() -> impl Strategy<Value = String> {
    "[^\r\n]{0,24}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn child_path_is_father_path_plus_name(names in prop::collection::vec(segment(), 1..5)) {
        let temp = TempDir::new().unwrap();
        let root = Directory::open(temp.path()).unwrap();
        prop_assert_eq!(root.path().unwrap(), temp.path().to_path_buf());

        let mut father = root.clone();
        for name in &names {
            let child = Directory::child(name.as_str(), &father).unwrap();
            prop_assert_eq!(child.path().unwrap(), father.path().unwrap().join(name));
            father = child;
        }
    }

    #[test]
    fn str_sub_with_itself_is_identity(
        lines in prop::collection::vec(line(), 0..8),
        find in "[a-z ]{1,3}",
    ) {
        let temp = TempDir::new().unwrap();
        let file = TextFile::open(temp.path().join("f.txt")).unwrap();
        file.set_lines(lines);
        let before = file.get_str();
        file.str_sub(&find, &find);
        prop_assert_eq!(file.get_str(), before);
    }

    #[test]
    fn written_lines_read_back_identically(lines in prop::collection::vec(line(), 0..8)) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("round.txt");
        let file = TextFile::open(&path).unwrap();
        file.set_lines(lines.clone());
        file.write().unwrap();

        let reread = TextFile::open(&path).unwrap();
        prop_assert_eq!(reread.lines(), lines);
        prop_assert_eq!(reread.get_str(), file.get_str());
    }

    #[test]
    fn copy_edits_stay_local(
        lines in prop::collection::vec(line(), 1..6),
        find in "[a-z]{1,2}",
    ) {
        let temp = TempDir::new().unwrap();
        let root = Directory::open(temp.path()).unwrap();
        let source = TextFile::child("source.txt", &root).unwrap();
        source.set_lines(lines);
        let before = source.get_str();

        let copy = source.copy("copy.txt", &root).unwrap();
        copy.str_sub(&find, "#");
        prop_assert_eq!(source.get_str(), before);
    }
}
