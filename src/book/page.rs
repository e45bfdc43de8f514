//! Pages and the page manifest.
//!
//! Pages arrive already paired: each entry names the picture on its front
//! and on its back. The manifest is TOML:
//!
//! ```toml
//! [[pages]]
//! front = "cover.jpg"
//! back = "first.png"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::FolioError;

/// Pictures printed on one leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContent {
    /// Picture on the side facing the reader before the turn.
    pub front: String,
    /// Picture on the reverse side.
    pub back: String,
}

impl PageContent {
    /// Pair a front and a back picture.
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
        }
    }
}

/// One leaf of the book. Immutable once the sequence is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    index: usize,
    content: PageContent,
    is_cover_front: bool,
    is_cover_back: bool,
}

impl Page {
    /// Position in the book, `0..P`.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Pictures on this leaf.
    pub fn content(&self) -> &PageContent {
        &self.content
    }

    /// First leaf of the book.
    pub fn is_cover_front(&self) -> bool {
        self.is_cover_front
    }

    /// Last leaf of the book.
    pub fn is_cover_back(&self) -> bool {
        self.is_cover_back
    }

    /// Target page a click on this leaf requests: an opened leaf turns back
    /// to itself, an unopened one turns forward past itself.
    pub fn click_target(&self, opened: bool) -> usize {
        if opened {
            self.index
        } else {
            self.index + 1
        }
    }
}

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    pages: Vec<PageContent>,
}

/// Fixed, ordered sequence of `P` pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSequence {
    pages: Vec<Page>,
}

impl PageSequence {
    /// Build the sequence from paired contents. A book needs at least one
    /// page.
    pub fn new(contents: Vec<PageContent>) -> Result<Self, FolioError> {
        if contents.is_empty() {
            return Err(FolioError::EmptyBook);
        }
        let last = contents.len() - 1;
        let pages = contents
            .into_iter()
            .enumerate()
            .map(|(index, content)| Page {
                index,
                content,
                is_cover_front: index == 0,
                is_cover_back: index == last,
            })
            .collect();
        Ok(Self { pages })
    }

    /// Parse a TOML page manifest.
    pub fn from_toml(content: &str) -> Result<Self, FolioError> {
        let manifest: Manifest = toml::from_str(content)
            .map_err(|e| FolioError::PageManifest(e.to_string()))?;
        Self::new(manifest.pages)
    }

    /// Parse a JSON array of `{ "front": .., "back": .. }` entries.
    pub fn from_json(content: &str) -> Result<Self, FolioError> {
        let contents: Vec<PageContent> = serde_json::from_str(content)
            .map_err(|e| FolioError::PageManifest(e.to_string()))?;
        Self::new(contents)
    }

    /// Load a TOML page manifest from disk.
    pub fn load(path: &Path) -> Result<Self, FolioError> {
        let content = std::fs::read_to_string(path).map_err(FolioError::Io)?;
        let pages = Self::from_toml(&content)?;
        log::info!("Loaded {} pages from {}", pages.len(), path.display());
        Ok(pages)
    }

    /// Number of pages, `P`.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Always false; construction rejects empty books.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Page at `index`.
    pub fn get(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    /// Page at `index`, or [`FolioError::PageOutOfRange`].
    pub fn page(&self, index: usize) -> Result<&Page, FolioError> {
        self.pages.get(index).ok_or(FolioError::PageOutOfRange {
            index,
            count: self.pages.len(),
        })
    }

    /// Pages in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Page> {
        self.pages.iter()
    }
}

impl<'a> IntoIterator for &'a PageSequence {
    type Item = &'a Page;
    type IntoIter = std::slice::Iter<'a, Page>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}
