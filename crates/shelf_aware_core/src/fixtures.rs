//! crates/shelf_aware_core/src/fixtures.rs
//!
//! The fixed in-memory dataset every view reads from.

use chrono::NaiveDate;

use crate::domain::{Book, MoodEntry, ReadingProgress, ReadingStatus, Review, Role, User};

pub const DEFAULT_COVER_URL: &str =
    "https://images.unsplash.com/photo-1543002588-bfa74002ed7e?w=400";

/// Vocabulary offered by every emotion picker.
pub const EMOTION_TAGS: [&str; 16] = [
    "Happy",
    "Sad",
    "Inspired",
    "Motivated",
    "Anxious",
    "Calm",
    "Excited",
    "Melancholic",
    "Hopeful",
    "Nostalgic",
    "Thoughtful",
    "Adventurous",
    "Romantic",
    "Thrilled",
    "Peaceful",
    "Curious",
];

/// Genres suggested by the admin "add book" form.
pub const GENRE_VOCABULARY: [&str; 15] = [
    "Biography/Memoir",
    "Military History",
    "Science/Technology",
    "Business/Economics",
    "History",
    "Nonfiction",
    "Religion/Spirituality",
    "Philosophy/Social Theory",
    "Romance",
    "Fantasy",
    "Psychology/Self-Help",
    "Science Fiction",
    "Mystery/Thriller",
    "Graphic Novel",
    "Poetry",
];

pub const BOOK_CONDITIONS: [&str; 4] = ["New", "Like New", "Good", "Fair"];

/// Everything the application knows, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Library {
    pub user: User,
    pub admin: User,
    pub books: Vec<Book>,
    pub progress: Vec<ReadingProgress>,
    pub reviews: Vec<Review>,
    pub mood_history: Vec<MoodEntry>,
}

impl Library {
    pub fn seeded() -> Self {
        Self {
            user: User {
                id: "1".to_string(),
                name: "Sarah Johnson".to_string(),
                email: "sarah@example.com".to_string(),
                reputation: 4.5,
                role: Role::User,
            },
            admin: User {
                id: "admin1".to_string(),
                name: "Admin User".to_string(),
                email: "admin@shelfaware.com".to_string(),
                reputation: 5.0,
                role: Role::Admin,
            },
            books: seed_books(),
            progress: seed_progress(),
            reviews: seed_reviews(),
            mood_history: seed_mood_history(),
        }
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // Literal fixture dates are always valid.
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn book(
    id: &str,
    title: &str,
    author: &str,
    cover: &str,
    genres: &[&str],
    abstract_text: &str,
    average_rating: f64,
    total_reviews: u32,
    price: f64,
    condition: &str,
) -> Book {
    Book {
        id: id.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        cover: cover.to_string(),
        genres: tags(genres),
        abstract_text: abstract_text.to_string(),
        average_rating,
        total_reviews,
        price: Some(price),
        condition: Some(condition.to_string()),
    }
}

fn seed_books() -> Vec<Book> {
    vec![
        book(
            "1",
            "The Midnight Library",
            "Matt Haig",
            "https://images.unsplash.com/photo-1543002588-bfa74002ed7e?w=400",
            &["Fantasy", "Fiction"],
            "A dazzling novel about all the choices that go into a life well lived, from the internationally bestselling author of Reasons to Stay Alive and How To Stop Time.",
            4.2,
            1245,
            15.99,
            "New",
        ),
        book(
            "2",
            "Atomic Habits",
            "James Clear",
            "https://images.unsplash.com/photo-1589829085413-56de8ae18c73?w=400",
            &["Psychology/Self-Help", "Business/Economics", "Nonfiction"],
            "An Easy & Proven Way to Build Good Habits & Break Bad Ones. A supremely practical and useful book.",
            4.8,
            3421,
            18.99,
            "New",
        ),
        book(
            "3",
            "Where the Crawdads Sing",
            "Delia Owens",
            "https://images.unsplash.com/photo-1512820790803-83ca734da794?w=400",
            &["Mystery/Thriller", "Romance"],
            "A story of the forgotten corners of the world, and a girl determined to belong to no one.",
            4.5,
            2156,
            16.50,
            "Good",
        ),
        book(
            "4",
            "Educated",
            "Tara Westover",
            "https://images.unsplash.com/photo-1524995997946-a1c2e315a42f?w=400",
            &["Biography/Memoir", "Nonfiction"],
            "A memoir about a young girl who, kept out of school, leaves her survivalist family and goes on to earn a PhD from Cambridge University.",
            4.7,
            1876,
            17.99,
            "New",
        ),
        book(
            "5",
            "The Silent Patient",
            "Alex Michaelides",
            "https://images.unsplash.com/photo-1544947950-fa07a98d237f?w=400",
            &["Mystery/Thriller", "Psychology/Self-Help"],
            "A woman shoots her husband and then never speaks another word. A psychotherapist becomes obsessed with uncovering her motive.",
            4.1,
            987,
            14.99,
            "Good",
        ),
        book(
            "6",
            "Becoming",
            "Michelle Obama",
            "https://images.unsplash.com/photo-1491841573634-28140fc7ced7?w=400",
            &["Biography/Memoir", "History", "Nonfiction"],
            "An intimate, powerful, and inspiring memoir by the former First Lady of the United States.",
            4.9,
            4532,
            19.99,
            "New",
        ),
    ]
}

fn seed_progress() -> Vec<ReadingProgress> {
    vec![
        ReadingProgress {
            book_id: "1".to_string(),
            progress: 65,
            start_date: date(2026, 1, 15),
            last_read: date(2026, 2, 17),
            status: ReadingStatus::Reading,
        },
        ReadingProgress {
            book_id: "2".to_string(),
            progress: 100,
            start_date: date(2025, 12, 1),
            last_read: date(2026, 1, 10),
            status: ReadingStatus::Completed,
        },
        ReadingProgress {
            book_id: "3".to_string(),
            progress: 30,
            start_date: date(2026, 2, 1),
            last_read: date(2026, 2, 15),
            status: ReadingStatus::Reading,
        },
        ReadingProgress {
            book_id: "5".to_string(),
            progress: 0,
            start_date: date(2026, 2, 18),
            last_read: date(2026, 2, 18),
            status: ReadingStatus::WantToRead,
        },
    ]
}

fn seed_reviews() -> Vec<Review> {
    vec![
        Review {
            id: "r1".to_string(),
            user_id: "1".to_string(),
            book_id: "2".to_string(),
            rating: 5,
            emotions: tags(&["Inspired", "Motivated", "Hopeful"]),
            content: "This book completely changed my perspective on building habits. The 1% improvement philosophy is so powerful and achievable!".to_string(),
            date: date(2026, 1, 12),
            helpful: 24,
            moderated: true,
        },
        Review {
            id: "r2".to_string(),
            user_id: "1".to_string(),
            book_id: "1".to_string(),
            rating: 4,
            emotions: tags(&["Thoughtful", "Emotional", "Contemplative"]),
            content: "A beautiful exploration of life choices and regret. Made me think deeply about my own decisions.".to_string(),
            date: date(2026, 2, 10),
            helpful: 12,
            moderated: true,
        },
    ]
}

fn seed_mood_history() -> Vec<MoodEntry> {
    vec![
        MoodEntry {
            date: date(2026, 2, 18),
            mood: "Curious".to_string(),
            emotions: tags(&["Adventurous", "Excited"]),
        },
        MoodEntry {
            date: date(2026, 2, 15),
            mood: "Reflective".to_string(),
            emotions: tags(&["Thoughtful", "Calm"]),
        },
        MoodEntry {
            date: date(2026, 2, 10),
            mood: "Anxious".to_string(),
            emotions: tags(&["Stressed", "Overwhelmed"]),
        },
        MoodEntry {
            date: date(2026, 2, 5),
            mood: "Happy".to_string(),
            emotions: tags(&["Joyful", "Content"]),
        },
        MoodEntry {
            date: date(2026, 2, 1),
            mood: "Motivated".to_string(),
            emotions: tags(&["Inspired", "Determined"]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_library_matches_the_demo_dataset() {
        let library = Library::seeded();
        assert_eq!(library.books.len(), 6);
        assert_eq!(library.progress.len(), 4);
        assert_eq!(library.reviews.len(), 2);
        assert_eq!(library.mood_history.len(), 5);
        assert_eq!(library.user.role, Role::User);
        assert_eq!(library.admin.role, Role::Admin);
        assert!(library.reviews.iter().all(|r| r.moderated));
    }

    #[test]
    fn fixture_dates_are_real_dates() {
        let library = Library::seeded();
        assert_eq!(library.progress[0].last_read, date(2026, 2, 17));
        assert_ne!(library.progress[0].last_read, NaiveDate::default());
    }
}
