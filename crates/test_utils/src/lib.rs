//! Helpers for tests that compare the output of a function against expected text stored next to
//! the input on disk.

use std::{
    fs,
    path::{Path, PathBuf},
};

/// The extension of Tallow source files used as test input.
pub const SOURCE_EXTENSION: &str = "tl";

/// Asserts that two strings are equal, printing a line diff when they are not.
#[macro_export]
macro_rules! assert_eq_text {
    ($left:expr, $right:expr) => {
        $crate::assert_eq_text!($left, $right,)
    };
    ($left:expr, $right:expr, $($tt:tt)*) => {{
        let left = $left;
        let right = $right;
        if left != right {
            if left.trim() == right.trim() {
                eprintln!("Left:\n{:?}\n\nRight:\n{:?}\n\nWhitespace difference\n", left, right);
            } else {
                let changeset = $crate::__difference::Changeset::new(right, left, "\n");
                eprintln!("Left:\n{}\n\nRight:\n{}\n\nDiff:\n{}\n", left, right, changeset);
            }
            eprintln!($($tt)*);
            panic!("text differs");
        }
    }};
}

#[doc(hidden)]
pub use difference as __difference;

/// Runs `f` on every `.tl` file in the given subdirectories of `test_data_dir` and compares the
/// result with the `.txt` file of the same name. A missing `.txt` file is created from the actual
/// output, after which the test fails so the new expectation can be reviewed.
pub fn dir_tests<F>(test_data_dir: &Path, paths: &[&str], f: F)
where
    F: Fn(&str, &Path) -> String,
{
    for (path, input_code) in collect_tests(test_data_dir, paths) {
        let actual = f(&input_code, &path);
        let path = path.with_extension("txt");
        if !path.exists() {
            println!("\nfile: {}", path.display());
            println!("No .txt file with expected result, creating...\n");
            println!("{input_code}\n{actual}");
            fs::write(&path, &actual).unwrap();
            panic!("No expected result");
        }
        let expected = read_text(&path);
        assert_equal_text(&expected, &actual, &path);
    }
}

/// Collects the path and contents of every `.tl` file in the given subdirectories, sorted by
/// path.
pub fn collect_tests(test_data_dir: &Path, paths: &[&str]) -> Vec<(PathBuf, String)> {
    paths
        .iter()
        .flat_map(|path| test_from_dir(&test_data_dir.join(path)))
        .map(|path| {
            let text = read_text(&path);
            (path, text)
        })
        .collect()
}

/// Returns the root directory of the workspace.
pub fn project_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .expect("test_utils lives two levels below the workspace root")
        .to_owned()
}

fn read_text(path: &Path) -> String {
    fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("File at {} should be readable: {err}", path.display()))
        .replace("\r\n", "\n")
}

fn test_from_dir(dir: &Path) -> Vec<PathBuf> {
    let mut acc: Vec<PathBuf> = fs::read_dir(dir)
        .unwrap_or_else(|err| panic!("cannot read test directory {}: {err}", dir.display()))
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().unwrap_or_default() == SOURCE_EXTENSION)
        .collect();
    acc.sort();
    acc
}

fn assert_equal_text(expected: &str, actual: &str, path: &Path) {
    if expected == actual {
        return;
    }
    let dir = project_dir();
    let pretty_path = path.strip_prefix(&dir).unwrap_or(path);
    assert_eq_text!(expected, actual, "file: {}", pretty_path.display());
}
