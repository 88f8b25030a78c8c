use crate::models::{Post, PostError, PostIndex};
use relative_path::{RelativePath, RelativePathBuf};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Extension of post files.
pub const POST_EXTENSION: &str = "md";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid posts directory: {0}")]
    InvalidPostsDir(String),
    #[error("Invalid post {path}: {source}")]
    InvalidPost {
        path: RelativePathBuf,
        source: PostError,
    },
}

/// Read a post file and return its content
pub fn read_file(relative_path: &RelativePath, posts_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(posts_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Scan for post files under the posts directory, sorted by path
pub fn scan_post_files(posts_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !posts_root.exists() {
        return Err(IoError::InvalidPostsDir(
            "posts directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(posts_root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == POST_EXTENSION
        {
            files.push(path);
        }
    }

    Ok(())
}

/// Load a single post. The slug defaults to the file stem.
pub fn load_post(relative_path: &RelativePath, posts_root: &Path) -> Result<Post, IoError> {
    let source = read_file(relative_path, posts_root)?;
    let default_slug = relative_path.file_stem().unwrap_or_default();
    Post::parse(&source, default_slug).map_err(|source| IoError::InvalidPost {
        path: relative_path.to_relative_path_buf(),
        source,
    })
}

/// Load every post under `posts_root`, newest first.
///
/// Files that fail to parse are logged and skipped so one broken post does
/// not take the blog down. A second post claiming an already-used slug is
/// skipped the same way.
pub fn load_posts(posts_root: &Path) -> Result<PostIndex, IoError> {
    let files = scan_post_files(posts_root)?;
    let mut posts = Vec::with_capacity(files.len());
    let mut seen = HashSet::new();

    for file in files {
        let Some(relative_path) = relative_to(&file, posts_root) else {
            log::warn!("Skipping {}: outside posts directory", file.display());
            continue;
        };

        match load_post(&relative_path, posts_root) {
            Ok(post) if !seen.insert(post.slug.clone()) => {
                log::warn!(
                    "Skipping {relative_path}: slug `{}` is already used",
                    post.slug
                );
            }
            Ok(post) => {
                log::debug!("Loaded post `{}` from {relative_path}", post.slug);
                posts.push(post);
            }
            Err(e) => log::warn!("Skipping {e}"),
        }
    }

    Ok(PostIndex::new(posts))
}

fn relative_to(path: &Path, root: &Path) -> Option<RelativePathBuf> {
    let stripped = path.strip_prefix(root).ok()?;
    RelativePathBuf::from_path(stripped).ok()
}

pub fn validate_posts_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidPostsDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}
