use crate::error::{FidelityError, Result};
use crate::types::report::DocumentSummary;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const PAGE_EXTENSION: &str = "txt";

#[derive(Debug, Clone)]
pub struct Document {
    pub path: PathBuf,
    pub pages: usize,
    pub text: String,
}

impl Document {
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn summary(&self) -> DocumentSummary {
        DocumentSummary {
            path: self.path.display().to_string(),
            pages: self.pages,
            characters: self.text.chars().count(),
            sha256: sha256_hex(self.text.as_bytes()),
        }
    }
}

/// A directory is read as one `.txt` file per page, in file-name order.
pub fn load_document(path: &Path) -> Result<Document> {
    if !path.exists() {
        return Err(FidelityError::PathNotFound(path.display().to_string()));
    }

    let pages = if path.is_dir() {
        page_files(path)
            .iter()
            .map(std::fs::read_to_string)
            .collect::<std::io::Result<Vec<_>>>()?
    } else {
        vec![std::fs::read_to_string(path)?]
    };

    let text = pages.join("\n").to_lowercase();
    tracing::info!(
        path = %path.display(),
        pages = pages.len(),
        characters = text.len(),
        "document loaded"
    );

    Ok(Document {
        path: path.to_path_buf(),
        pages: pages.len(),
        text,
    })
}

fn page_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.eq_ignore_ascii_case(PAGE_EXTENSION))
                .unwrap_or(false)
        })
        .collect()
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    format!("{digest:x}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_single_file_lowercases_text() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("epd.txt");
        fs::write(&path, "Third Party Verified EPD").expect("document should write");

        let document = load_document(&path).expect("document should load");
        assert_eq!(document.pages, 1);
        assert_eq!(document.text, "third party verified epd");
        assert!(!document.is_empty());
    }

    #[test]
    fn load_directory_joins_pages_in_name_order() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::write(dir.path().join("page-02.txt"), "Second").expect("page should write");
        fs::write(dir.path().join("page-01.txt"), "First").expect("page should write");
        fs::write(dir.path().join("cover.png"), [0u8, 1, 2]).expect("image should write");

        let document = load_document(dir.path()).expect("document should load");
        assert_eq!(document.pages, 2);
        assert_eq!(document.text, "first\nsecond");
    }

    #[test]
    fn missing_path_is_an_error() {
        let dir = TempDir::new().expect("temp dir should be created");
        let err = load_document(&dir.path().join("absent.txt")).expect_err("load should fail");
        assert!(matches!(err, FidelityError::PathNotFound(_)));
    }

    #[test]
    fn empty_directory_yields_empty_document() {
        let dir = TempDir::new().expect("temp dir should be created");
        let document = load_document(dir.path()).expect("document should load");
        assert_eq!(document.pages, 0);
        assert!(document.is_empty());
    }

    #[test]
    fn summary_carries_stable_digest() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("epd.txt");
        fs::write(&path, "abc").expect("document should write");

        let summary = load_document(&path).expect("document should load").summary();
        assert_eq!(summary.characters, 3);
        assert_eq!(
            summary.sha256,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
