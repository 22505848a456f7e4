//! crates/shelf_aware_core/src/admin.rs
//!
//! Catalog curation and review moderation for administrators.

use std::sync::OnceLock;

use regex::Regex;

use crate::domain::{Book, Notification, Review};
use crate::fixtures::DEFAULT_COVER_URL;
use crate::profile::ReviewWithTitle;

pub const DEFAULT_CONDITION: &str = "New";
const SUMMARY_PREVIEW_CHARS: usize = 150;
const APPROVED_PREVIEW_LIMIT: usize = 5;

/// Raw values from the "Add New Book" dialog. Every field arrives as text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewBookForm {
    pub title: String,
    pub author: String,
    /// Comma-separated, e.g. `Biography/Memoir, History`.
    pub genre: String,
    pub abstract_text: String,
    pub price: String,
    pub condition: Option<String>,
}

fn leading_number() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\s*[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?")
            .expect("price pattern is a valid regex")
    })
}

/// Reads the longest numeric prefix of `raw`; anything unparseable is 0.
pub fn parse_price(raw: &str) -> f64 {
    leading_number()
        .find(raw)
        .and_then(|m| m.as_str().trim().parse::<f64>().ok())
        .filter(|p| p.is_finite())
        .unwrap_or(0.0)
}

pub fn parse_genres(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect()
}

impl NewBookForm {
    /// Builds the catalog entry. New books start unrated with no reviews.
    pub fn into_book(self, id: String) -> Book {
        Book {
            id,
            genres: parse_genres(&self.genre),
            price: Some(parse_price(&self.price)),
            condition: Some(
                self.condition
                    .filter(|c| !c.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_CONDITION.to_string()),
            ),
            title: self.title,
            author: self.author,
            cover: DEFAULT_COVER_URL.to_string(),
            abstract_text: self.abstract_text,
            average_rating: 0.0,
            total_reviews: 0,
        }
    }
}

/// The "LLM" abstract: stitched together from the book's own numbers and the
/// tags of its first review.
pub fn compose_summary(book: &Book, reviews: &[Review]) -> String {
    let described_as = reviews
        .iter()
        .find(|r| r.book_id == book.id)
        .map(|r| r.emotions.join(", ").to_lowercase())
        .filter(|tags| !tags.is_empty())
        .unwrap_or_else(|| "engaging".to_string());
    let preview: String = book.abstract_text.chars().take(SUMMARY_PREVIEW_CHARS).collect();

    format!(
        "AI-Generated Summary: This highly acclaimed book has received {} stars from {} readers. Reviewers describe it as {}. {}...",
        book.average_rating, book.total_reviews, described_as, preview
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModerationQueue {
    pub pending: Vec<ReviewWithTitle>,
    pub pending_count: usize,
    /// At most the first five approved reviews.
    pub approved: Vec<ReviewWithTitle>,
    pub approved_count: usize,
}

pub fn moderation_queue(reviews: &[Review], books: &[Book]) -> ModerationQueue {
    let with_title = |review: &Review| ReviewWithTitle {
        book_title: books
            .iter()
            .find(|b| b.id == review.book_id)
            .map(|b| b.title.clone()),
        review: review.clone(),
    };

    let pending: Vec<ReviewWithTitle> = reviews
        .iter()
        .filter(|r| !r.moderated)
        .map(with_title)
        .collect();
    let approved_count = reviews.iter().filter(|r| r.moderated).count();

    ModerationQueue {
        pending_count: pending.len(),
        pending,
        approved: reviews
            .iter()
            .filter(|r| r.moderated)
            .take(APPROVED_PREVIEW_LIMIT)
            .map(with_title)
            .collect(),
        approved_count,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationDecision {
    Approve,
    Reject,
}

/// Moderation decisions are acknowledged only; no review changes state.
pub fn moderation_notification(decision: ModerationDecision) -> Notification {
    match decision {
        ModerationDecision::Approve => Notification::success("Review approved"),
        ModerationDecision::Reject => Notification::success("Review rejected"),
    }
}

pub fn book_added_notification() -> Notification {
    Notification::success("Book added successfully!")
}

pub fn book_deleted_notification() -> Notification {
    Notification::success("Book deleted successfully!")
}

pub fn summary_notification() -> Notification {
    Notification::success("Book abstract updated with LLM summary!")
}
