//! crates/shelf_aware_core/src/catalog.rs
//!
//! Search and filtering for the bookshelf view.

use std::str::FromStr;

use crate::domain::{Book, ReadingProgress, ReadingStatus};

/// Genre dropdown value. `all` disables the filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GenreFilter {
    #[default]
    All,
    Only(String),
}

impl GenreFilter {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            None | Some("") | Some("all") => Self::All,
            Some(genre) => Self::Only(genre.to_string()),
        }
    }

    fn matches(&self, book: &Book) -> bool {
        match self {
            Self::All => true,
            Self::Only(genre) => book.has_genre(genre),
        }
    }
}

/// Status dropdown value. A book with no progress record only passes `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ReadingStatus),
}

impl StatusFilter {
    /// Unrecognised values filter everything out, as a dropdown value that no
    /// book carries would.
    pub fn parse(value: Option<&str>) -> Option<Self> {
        match value {
            None | Some("") | Some("all") => Some(Self::All),
            Some(other) => ReadingStatus::from_str(other).ok().map(Self::Only),
        }
    }

    fn matches(&self, progress: Option<&ReadingProgress>) -> bool {
        match self {
            Self::All => true,
            Self::Only(status) => progress.is_some_and(|p| p.status == *status),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
    pub query: String,
    pub genre: GenreFilter,
    /// `None` means a status value nothing can match.
    pub status: Option<StatusFilter>,
}

impl CatalogFilter {
    fn matches(&self, entry: &ShelfEntry) -> bool {
        let needle = self.query.to_lowercase();
        let matches_search = entry.book.title.to_lowercase().contains(&needle)
            || entry.book.author.to_lowercase().contains(&needle);
        let matches_status = self
            .status
            .is_some_and(|s| s.matches(entry.progress.as_ref()));

        matches_search && self.genre.matches(&entry.book) && matches_status
    }
}

/// A catalog book joined with its progress record, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct ShelfEntry {
    pub book: Book,
    pub progress: Option<ReadingProgress>,
}

impl ShelfEntry {
    pub fn status(&self) -> Option<ReadingStatus> {
        self.progress.as_ref().map(|p| p.status)
    }
}

/// The bookshelf page: filtered books split into the four status tabs.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView {
    pub all: Vec<ShelfEntry>,
    pub reading: Vec<ShelfEntry>,
    pub completed: Vec<ShelfEntry>,
    pub want_to_read: Vec<ShelfEntry>,
    /// Every genre in the unfiltered catalog, first appearance first.
    pub genres: Vec<String>,
}

pub fn join_progress(books: &[Book], progress: &[ReadingProgress]) -> Vec<ShelfEntry> {
    books
        .iter()
        .map(|book| ShelfEntry {
            book: book.clone(),
            progress: progress.iter().find(|p| p.book_id == book.id).cloned(),
        })
        .collect()
}

pub fn all_genres(books: &[Book]) -> Vec<String> {
    let mut genres: Vec<String> = Vec::new();
    for genre in books.iter().flat_map(|b| b.genres.iter()) {
        if !genres.contains(genre) {
            genres.push(genre.clone());
        }
    }
    genres
}

pub fn build_catalog_view(
    books: &[Book],
    progress: &[ReadingProgress],
    filter: &CatalogFilter,
) -> CatalogView {
    let all: Vec<ShelfEntry> = join_progress(books, progress)
        .into_iter()
        .filter(|entry| filter.matches(entry))
        .collect();

    let with_status = |status: ReadingStatus| -> Vec<ShelfEntry> {
        all.iter()
            .filter(|e| e.status() == Some(status))
            .cloned()
            .collect()
    };

    CatalogView {
        reading: with_status(ReadingStatus::Reading),
        completed: with_status(ReadingStatus::Completed),
        want_to_read: with_status(ReadingStatus::WantToRead),
        genres: all_genres(books),
        all,
    }
}
