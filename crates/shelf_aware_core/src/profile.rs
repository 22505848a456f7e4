//! crates/shelf_aware_core/src/profile.rs
//!
//! Reading statistics shown on the profile page.

use crate::domain::{Book, MoodEntry, ReadingProgress, ReadingStatus, Review, User};

#[derive(Debug, Clone, PartialEq)]
pub struct GenreCount {
    pub genre: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoodPoint {
    /// Short date label such as `Feb 18`.
    pub label: String,
    pub mood: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewWithTitle {
    pub review: Review,
    /// `None` when the review points at a book the catalog does not have.
    pub book_title: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileStats {
    pub user: User,
    pub initials: String,
    pub total_books: usize,
    pub completed: usize,
    pub currently_reading: usize,
    pub genre_counts: Vec<GenreCount>,
    pub mood_chart: Vec<MoodPoint>,
    pub mood_history: Vec<MoodEntry>,
    pub average_rating_given: f64,
    pub rounded_stars: u8,
    pub reviews: Vec<ReviewWithTitle>,
}

pub fn initials(name: &str) -> String {
    name.split(' ')
        .filter_map(|part| part.chars().next())
        .collect()
}

pub fn average_rating(reviews: &[Review]) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }
    let sum: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
    f64::from(sum) / reviews.len() as f64
}

/// Counts genres of tracked books, in order of first appearance.
pub fn genre_distribution(books: &[Book], progress: &[ReadingProgress]) -> Vec<GenreCount> {
    let mut counts: Vec<GenreCount> = Vec::new();
    let tracked = books
        .iter()
        .filter(|b| progress.iter().any(|p| p.book_id == b.id));

    for genre in tracked.flat_map(|b| b.genres.iter()) {
        match counts.iter_mut().find(|c| &c.genre == genre) {
            Some(entry) => entry.count += 1,
            None => counts.push(GenreCount {
                genre: genre.clone(),
                count: 1,
            }),
        }
    }
    counts
}

pub fn build_profile(
    user: User,
    books: &[Book],
    progress: &[ReadingProgress],
    reviews: &[Review],
    mood_history: &[MoodEntry],
) -> ProfileStats {
    let count_status =
        |status: ReadingStatus| progress.iter().filter(|p| p.status == status).count();
    let average_rating_given = average_rating(reviews);

    ProfileStats {
        initials: initials(&user.name),
        user,
        total_books: progress.len(),
        completed: count_status(ReadingStatus::Completed),
        currently_reading: count_status(ReadingStatus::Reading),
        genre_counts: genre_distribution(books, progress),
        mood_chart: mood_history
            .iter()
            .map(|entry| MoodPoint {
                label: entry.date.format("%b %-d").to_string(),
                mood: entry.mood.clone(),
            })
            .collect(),
        mood_history: mood_history.to_vec(),
        average_rating_given,
        rounded_stars: average_rating_given.round() as u8,
        reviews: reviews
            .iter()
            .map(|review| ReviewWithTitle {
                book_title: books
                    .iter()
                    .find(|b| b.id == review.book_id)
                    .map(|b| b.title.clone()),
                review: review.clone(),
            })
            .collect(),
    }
}
