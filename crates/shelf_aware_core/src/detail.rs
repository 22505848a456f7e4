//! crates/shelf_aware_core/src/detail.rs
//!
//! The single-book page: lookup, progress slider, and existing reviews.

use crate::domain::{Book, Notification, ReadingProgress, Review};

pub const NOT_FOUND_MESSAGE: &str = "Book not found";

#[derive(Debug, Clone, PartialEq)]
pub struct BookDetail {
    pub book: Book,
    pub progress: Option<ReadingProgress>,
    /// Current slider position: the session's draft, else the stored record.
    pub slider: u8,
    pub reviews: Vec<Review>,
}

/// Returns `None` when no book carries `book_id`.
pub fn build_book_detail(
    books: &[Book],
    progress: &[ReadingProgress],
    reviews: &[Review],
    book_id: &str,
    draft: Option<u8>,
) -> Option<BookDetail> {
    let book = books.iter().find(|b| b.id == book_id)?.clone();
    let progress = progress.iter().find(|p| p.book_id == book_id).cloned();
    let slider = draft
        .or_else(|| progress.as_ref().map(|p| p.progress))
        .unwrap_or(0);

    Some(BookDetail {
        book,
        progress,
        slider,
        reviews: reviews
            .iter()
            .filter(|r| r.book_id == book_id)
            .cloned()
            .collect(),
    })
}

/// The slider spans 0..=100 in steps of 1.
pub fn clamp_progress(value: i64) -> u8 {
    value.clamp(0, 100) as u8
}

pub fn progress_notification(progress: u8) -> Notification {
    Notification::success(format!("Progress updated to {progress}%"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::Library;

    fn detail(book_id: &str, draft: Option<u8>) -> Option<BookDetail> {
        let library = Library::seeded();
        build_book_detail(
            &library.books,
            &library.progress,
            &library.reviews,
            book_id,
            draft,
        )
    }

    #[test]
    fn missing_book_renders_nothing() {
        assert!(detail("999", None).is_none());
    }

    #[test]
    fn slider_starts_from_the_stored_record() {
        let detail = detail("1", None).unwrap();
        assert_eq!(detail.book.title, "The Midnight Library");
        assert_eq!(detail.slider, 65);
        assert_eq!(detail.reviews.len(), 1);
        assert_eq!(detail.reviews[0].id, "r2");
    }

    #[test]
    fn slider_prefers_the_session_draft() {
        assert_eq!(detail("1", Some(80)).unwrap().slider, 80);
    }

    #[test]
    fn untracked_book_starts_at_zero() {
        let detail = detail("4", None).unwrap();
        assert!(detail.progress.is_none());
        assert_eq!(detail.slider, 0);
        assert!(detail.reviews.is_empty());
    }

    #[test]
    fn progress_is_clamped_to_the_slider_range() {
        assert_eq!(clamp_progress(-5), 0);
        assert_eq!(clamp_progress(42), 42);
        assert_eq!(clamp_progress(250), 100);
        assert_eq!(progress_notification(42).message, "Progress updated to 42%");
    }
}
