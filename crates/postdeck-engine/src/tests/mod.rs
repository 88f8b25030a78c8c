use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary posts directory
pub fn create_test_posts_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a test file with content, creating parent folders as needed
pub fn create_test_file(posts_dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = posts_dir.path().join(filename);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&file_path, content).unwrap();
    file_path
}

/// Source of a minimal post file
pub fn post_source(title: &str, date: &str, body: &str) -> String {
    format!("+++\ntitle = \"{title}\"\ndate = {date}\n+++\n{body}\n")
}
