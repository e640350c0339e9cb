/*!
 * Unit tests for file utilities
 */

use adscribe::file_utils::FileManager;

use crate::common;

#[test]
fn test_findFiles_shouldReturnOnlyMatchingExtension() {
    let temp_dir = common::create_temp_dir().unwrap();
    let dir = temp_dir.path().to_path_buf();
    common::create_test_file(&dir, "episode01.pdf", "x").unwrap();
    common::create_test_file(&dir, "episode02.PDF", "x").unwrap();
    common::create_test_file(&dir, "notes.txt", "x").unwrap();

    let mut found = FileManager::find_files(&dir, "pdf").unwrap();
    found.sort();

    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|p| FileManager::is_pdf_file(p)));
}

#[test]
fn test_findFiles_shouldRecurseIntoSubdirectories() {
    let temp_dir = common::create_temp_dir().unwrap();
    let sub = temp_dir.path().join("season2");
    FileManager::ensure_dir(&sub).unwrap();
    common::create_test_file(&sub.to_path_buf(), "episode03.pdf", "x").unwrap();

    let found = FileManager::find_files(temp_dir.path(), ".pdf").unwrap();

    assert_eq!(found.len(), 1);
}

#[test]
fn test_writeToFile_shouldCreateParentDirectories() {
    let temp_dir = common::create_temp_dir().unwrap();
    let nested = temp_dir.path().join("a/b/out.srt");

    FileManager::write_to_file(&nested, "내용").unwrap();

    assert!(FileManager::file_exists(&nested));
    assert_eq!(FileManager::read_to_string(&nested).unwrap(), "내용");
}

#[test]
fn test_ensureDir_shouldBeIdempotent() {
    let temp_dir = common::create_temp_dir().unwrap();
    let dir = temp_dir.path().join("out");

    FileManager::ensure_dir(&dir).unwrap();
    FileManager::ensure_dir(&dir).unwrap();

    assert!(FileManager::dir_exists(&dir));
}
