use super::*;
use tempfile::tempdir;

#[test]
fn test_read_write_file() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("test.txt");

    let provider = LocalFileProvider::new();

    provider.write_file(&file_path, "Hello, World!").unwrap();
    assert!(file_path.is_file());

    let content = provider.read_file(&file_path).unwrap();
    assert_eq!(content, "Hello, World!");
}

#[test]
fn test_write_creates_parent_dirs() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("a").join("b").join("c.txt");

    let provider = LocalFileProvider::new();
    provider.write_file(&file_path, "deep").unwrap();

    assert_eq!(provider.read_file(&file_path).unwrap(), "deep");
}

#[test]
fn test_read_missing_file() {
    let dir = tempdir().unwrap();
    let provider = LocalFileProvider::new();

    let result = provider.read_file(&dir.path().join("missing.txt"));
    assert!(matches!(result, Err(FileError::NotFound(_))));
}

#[test]
fn test_directory_is_not_a_file() {
    let dir = tempdir().unwrap();
    let provider = LocalFileProvider::new();

    assert!(matches!(
        provider.read_file(dir.path()),
        Err(FileError::NotAFile(_))
    ));
    assert!(matches!(
        provider.write_file(dir.path(), "x"),
        Err(FileError::NotAFile(_))
    ));
}
