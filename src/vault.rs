// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::env::current_dir;
use std::path::Path;
use std::path::PathBuf;

use jpstudy_core::error::ErrorReport;
use jpstudy_core::error::Fallible;
use jpstudy_core::error::fail;
use jpstudy_core::frontmatter::document_tags;
use jpstudy_core::types::aliases::Tag;
use walkdir::DirEntry;
use walkdir::WalkDir;

/// A markdown note in the vault.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    /// File name without the extension.
    pub name: String,
    pub path: PathBuf,
    pub tags: Vec<Tag>,
}

impl Document {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Where study documents come from.
#[allow(async_fn_in_trait)]
pub trait DocumentStore {
    async fn list_documents(&self) -> Fallible<Vec<Document>>;

    async fn read_contents(&self, document: &Document) -> Fallible<String>;
}

/// A vault on the local filesystem.
pub struct FsVault {
    root: PathBuf,
}

impl FsVault {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

/// Directories like `.obsidian` and `.trash` hold no notes.
fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}

fn is_markdown(path: &Path) -> bool {
    path.is_file() && path.extension().is_some_and(|ext| ext == "md")
}

impl DocumentStore for FsVault {
    async fn list_documents(&self) -> Fallible<Vec<Document>> {
        let mut documents = Vec::new();
        let walker = WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !is_hidden(entry));
        for entry in walker {
            let entry = entry.map_err(|e| ErrorReport::new(format!("Failed to walk vault: {e}")))?;
            let path = entry.path();
            if !is_markdown(path) {
                continue;
            }
            let name = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or_default()
                .to_string();
            let text = match tokio::fs::read_to_string(path).await {
                Ok(text) => text,
                Err(e) => {
                    log::warn!("Skipping unreadable note {}: {e}", path.display());
                    continue;
                }
            };
            let tags = match document_tags(&text) {
                Ok(tags) => tags,
                Err(e) => {
                    log::debug!("Ignoring frontmatter of {}: {e}", path.display());
                    Vec::new()
                }
            };
            documents.push(Document {
                name,
                path: path.to_path_buf(),
                tags,
            });
        }
        Ok(documents)
    }

    async fn read_contents(&self, document: &Document) -> Fallible<String> {
        Ok(tokio::fs::read_to_string(&document.path).await?)
    }
}

/// The documents that are part of the study material: tagged with the study
/// tag, and not the template.
pub async fn study_documents(
    store: &impl DocumentStore,
    tag: &str,
    template: &str,
) -> Fallible<Vec<Document>> {
    let documents = store.list_documents().await?;
    let total = documents.len();
    let selected: Vec<Document> = documents
        .into_iter()
        .filter(|doc| doc.name != template && doc.has_tag(tag))
        .collect();
    log::debug!(
        "{} of {total} documents are tagged '{tag}'",
        selected.len()
    );
    Ok(selected)
}

/// The vault root: the given directory, or the current one.
pub fn resolve_directory(directory: Option<String>) -> Fallible<PathBuf> {
    let directory = match directory {
        Some(directory) => PathBuf::from(directory),
        None => current_dir()?,
    };
    if !directory.exists() {
        return fail("directory does not exist.");
    }
    Ok(directory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helper::create_tmp_vault;

    #[tokio::test]
    async fn test_list_documents() -> Fallible<()> {
        let vault = create_tmp_vault(&[
            ("b.md", "---\ntags: [JPStudy]\n---\n"),
            ("a.md", "no frontmatter"),
            ("notes.txt", "---\ntags: [JPStudy]\n---\n"),
            ("sub/c.md", "---\ntags:\n  - other\n---\n"),
        ])?;
        let store = FsVault::new(vault.path().to_path_buf());
        let documents = store.list_documents().await?;
        let names: Vec<&str> = documents.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert!(documents[0].tags.is_empty());
        assert_eq!(documents[1].tags, vec!["JPStudy"]);
        assert_eq!(documents[2].tags, vec!["other"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_hidden_directories_are_skipped() -> Fallible<()> {
        let vault = create_tmp_vault(&[
            (".trash/old.md", "---\ntags: [JPStudy]\n---\n"),
            ("day.md", "---\ntags: [JPStudy]\n---\n"),
        ])?;
        let store = FsVault::new(vault.path().to_path_buf());
        let documents = store.list_documents().await?;
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].name, "day");
        Ok(())
    }

    #[tokio::test]
    async fn test_broken_frontmatter_means_no_tags() -> Fallible<()> {
        let vault = create_tmp_vault(&[("day.md", "---\ntags: [JPStudy\n")])?;
        let store = FsVault::new(vault.path().to_path_buf());
        let documents = store.list_documents().await?;
        assert!(documents[0].tags.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_unreadable_note_is_skipped() -> Fallible<()> {
        let vault = create_tmp_vault(&[("day.md", "---\ntags: [JPStudy]\n---\n")])?;
        std::fs::write(vault.path().join("attachments.md"), [0xff, 0xfe, 0x00, 0x41])?;
        let store = FsVault::new(vault.path().to_path_buf());
        let documents = study_documents(&store, "JPStudy", "Japanese study template").await?;
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].name, "day");
        Ok(())
    }

    #[tokio::test]
    async fn test_study_documents() -> Fallible<()> {
        let vault = create_tmp_vault(&[
            ("Japanese study template.md", "---\ntags: [JPStudy]\n---\n"),
            ("2024-01-05.md", "---\ntags: [JPStudy]\n---\n"),
            ("groceries.md", "---\ntags: [shopping]\n---\n"),
        ])?;
        let store = FsVault::new(vault.path().to_path_buf());
        let documents = study_documents(&store, "JPStudy", "Japanese study template").await?;
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].name, "2024-01-05");
        let contents = store.read_contents(&documents[0]).await?;
        assert_eq!(contents, "---\ntags: [JPStudy]\n---\n");
        Ok(())
    }

    #[test]
    fn test_resolve_missing_directory() {
        let err = resolve_directory(Some("./derpherp".to_string()))
            .err()
            .unwrap();
        assert_eq!(err.to_string(), "error: directory does not exist.");
    }
}
