//! Integration tests for the search path model

use std::env;
use std::path::PathBuf;

use toolpath::core::search_path::SearchPath;

#[test]
fn test_prepend_is_searched_before_existing_entries() {
    let mut path = SearchPath::new(vec![
        PathBuf::from("/usr/local/bin"),
        PathBuf::from("/usr/bin"),
    ]);

    path.prepend(PathBuf::from("/pkgs/toolchain-riscv32-esp/bin"));

    assert_eq!(
        path.entries(),
        &[
            PathBuf::from("/pkgs/toolchain-riscv32-esp/bin"),
            PathBuf::from("/usr/local/bin"),
            PathBuf::from("/usr/bin"),
        ]
    );
}

#[test]
fn test_prepend_keeps_duplicates() {
    let mut path = SearchPath::default();
    path.prepend(PathBuf::from("/pkgs/tc/bin"));
    path.prepend(PathBuf::from("/pkgs/tc/bin"));

    assert_eq!(path.len(), 2, "prepend must not de-duplicate");
}

#[test]
fn test_env_value_parses_and_renders_with_platform_separator() {
    let value = env::join_paths([PathBuf::from("/usr/bin"), PathBuf::from("/bin")]).unwrap();

    let mut path = SearchPath::from_env_value(&value);
    path.prepend(PathBuf::from("/pkgs/tc/bin"));

    let rendered = path.to_env_value().unwrap();
    let expected = env::join_paths([
        PathBuf::from("/pkgs/tc/bin"),
        PathBuf::from("/usr/bin"),
        PathBuf::from("/bin"),
    ])
    .unwrap();
    assert_eq!(rendered, expected);
}

#[test]
fn test_from_current_env_matches_process_path() {
    let path = SearchPath::from_current_env();

    match env::var_os("PATH") {
        Some(value) => {
            let expected: Vec<PathBuf> = env::split_paths(&value).collect();
            assert_eq!(path.entries(), expected.as_slice());
        }
        None => assert!(path.is_empty()),
    }
}
