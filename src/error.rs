//! Crate-level error types.

use std::fmt;

/// Errors produced by the folio crate.
#[derive(Debug)]
pub enum FolioError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Options parsed but hold values the animation cannot run with.
    InvalidOptions(String),
    /// Failed to read or parse a page manifest.
    PageManifest(String),
    /// A book needs at least one page.
    EmptyBook,
    /// A page index outside the book.
    PageOutOfRange {
        /// Requested page index.
        index: usize,
        /// Number of pages in the book.
        count: usize,
    },
}

impl fmt::Display for FolioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidOptions(msg) => write!(f, "invalid options: {msg}"),
            Self::PageManifest(msg) => {
                write!(f, "page manifest error: {msg}")
            }
            Self::EmptyBook => write!(f, "book has no pages"),
            Self::PageOutOfRange { index, count } => {
                write!(f, "page {index} out of range (book has {count} pages)")
            }
        }
    }
}

impl std::error::Error for FolioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FolioError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        let e = FolioError::PageOutOfRange { index: 9, count: 4 };
        assert_eq!(e.to_string(), "page 9 out of range (book has 4 pages)");
        assert_eq!(FolioError::EmptyBook.to_string(), "book has no pages");
    }

    #[test]
    fn io_error_is_source() {
        use std::error::Error;
        let e = FolioError::from(std::io::Error::other("disk"));
        assert!(e.source().is_some());
        assert!(FolioError::EmptyBook.source().is_none());
    }
}
