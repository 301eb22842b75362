// ============================================================
// Layer 4 — Story Loader
// ============================================================
// Reads raw story files from a directory.
//
// Each file is plain UTF-8 text, one paragraph or highlight per
// line, with blank lines between them:
//
//   (CNN) -- Article text ...
//
//   @highlight
//
//   Highlight text
//
// Listing and reading are separate steps so the caller can
// shuffle the ids first and hold only one story in memory at a
// time. Unlike a best-effort loader, a file that cannot be read
// is an error: the batch job stops and reports it.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (Reading a File)

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::domain::document::RawDocument;
use crate::domain::traits::DocumentSource;

/// Loads story files from a directory.
/// Implements the DocumentSource trait from Layer 3.
pub struct StoryLoader {
    dir: PathBuf,
}

impl StoryLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl DocumentSource for StoryLoader {
    fn list_ids(&self) -> Result<Vec<String>> {
        let mut ids = Vec::new();

        for entry in fs::read_dir(&self.dir)
            .with_context(|| format!("Cannot read stories directory '{}'", self.dir.display()))?
        {
            let entry = entry?;

            // Subdirectories and dotfiles are never stories.
            // Path::is_file follows symlinks, so linked stories are kept.
            let path = entry.path();
            if !path.is_file() {
                tracing::debug!("Skipping non-file entry '{}'", path.display());
                continue;
            }
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                tracing::warn!("Skipping non UTF-8 filename {:?}", entry.file_name());
                continue;
            };
            if name.starts_with('.') {
                continue;
            }

            ids.push(name);
        }

        tracing::debug!("Listed {} story files in '{}'", ids.len(), self.dir.display());
        Ok(ids)
    }

    fn read(&self, id: &str) -> Result<RawDocument> {
        let path = self.dir.join(id);
        let text = fs::read_to_string(&path)
            .with_context(|| format!("Cannot read story '{}'", path.display()))?;

        Ok(RawDocument::new(id, split_story_lines(&text)))
    }
}

/// Split file contents into lines, dropping line endings and blank lines.
/// Each kept line is trimmed so the sentinel compares exactly.
pub fn split_story_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_split_story_lines_drops_blanks() {
        let text = "First.\r\n\r\n   \n@highlight\n\nGist.  \n";
        assert_eq!(split_story_lines(text), vec!["First.", "@highlight", "Gist."]);
    }

    #[test]
    fn test_lists_only_visible_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.story"), "x").unwrap();
        fs::write(dir.path().join("b.story"), "y").unwrap();
        fs::write(dir.path().join(".hidden"), "z").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();

        let loader  = StoryLoader::new(dir.path());
        let mut ids = loader.list_ids().unwrap();
        ids.sort();
        assert_eq!(ids, vec!["a.story", "b.story"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_stories_are_listed_and_read() {
        let dir    = tempdir().unwrap();
        let target = tempdir().unwrap();
        fs::write(target.path().join("real.story"), "Body.\n\n@highlight\n\nGist.\n").unwrap();
        std::os::unix::fs::symlink(target.path().join("real.story"), dir.path().join("link.story"))
            .unwrap();
        std::os::unix::fs::symlink(target.path(), dir.path().join("linked_dir")).unwrap();

        let loader = StoryLoader::new(dir.path());
        assert_eq!(loader.list_ids().unwrap(), vec!["link.story"]);
        assert_eq!(loader.read("link.story").unwrap().lines, vec!["Body.", "@highlight", "Gist."]);
    }

    #[test]
    fn test_read_returns_clean_lines() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("s.story"), "Body line.\n\n@highlight\n\nGist.\n").unwrap();

        let doc = StoryLoader::new(dir.path()).read("s.story").unwrap();
        assert_eq!(doc.id, "s.story");
        assert_eq!(doc.lines, vec!["Body line.", "@highlight", "Gist."]);
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir    = tempdir().unwrap();
        let loader = StoryLoader::new(dir.path().join("absent"));
        assert!(loader.list_ids().is_err());
    }

    #[test]
    fn test_unreadable_story_is_an_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("bad.story"), [0xffu8, 0xfe, 0x00]).unwrap();
        let err = StoryLoader::new(dir.path()).read("bad.story").unwrap_err();
        assert!(err.to_string().contains("bad.story"));
    }
}
