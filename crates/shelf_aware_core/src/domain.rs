//! crates/shelf_aware_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! These structs are independent of any storage or serialization format.

use chrono::{DateTime, NaiveDate, Utc};
use std::fmt;
use std::str::FromStr;

/// A book in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub cover: String,
    /// Ordered; the first genre is the "headline" genre shown on cards.
    pub genres: Vec<String>,
    pub abstract_text: String,
    pub average_rating: f64,
    pub total_reviews: u32,
    pub price: Option<f64>,
    pub condition: Option<String>,
}

impl Book {
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }
}

/// A reader's review. `book_id` is not checked against the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: String,
    pub user_id: String,
    pub book_id: String,
    pub rating: u8,
    pub emotions: Vec<String>,
    pub content: String,
    pub date: NaiveDate,
    pub helpful: u32,
    pub moderated: bool,
}

/// Where a book sits on the reader's shelf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReadingStatus {
    Reading,
    Completed,
    WantToRead,
}

impl ReadingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reading => "reading",
            Self::Completed => "completed",
            Self::WantToRead => "want-to-read",
        }
    }
}

impl fmt::Display for ReadingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown reading status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for ReadingStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reading" => Ok(Self::Reading),
            "completed" => Ok(Self::Completed),
            "want-to-read" => Ok(Self::WantToRead),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// Progress marker for one book. One record per book is assumed, not enforced.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingProgress {
    pub book_id: String,
    /// Percentage complete, 0..=100.
    pub progress: u8,
    pub start_date: NaiveDate,
    pub last_read: NaiveDate,
    pub status: ReadingStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoodEntry {
    pub date: NaiveDate,
    pub mood: String,
    pub emotions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub reputation: f64,
    pub role: Role,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

/// One turn of the recommendation conversation.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

// Represents a browser login session (auth cookie)
#[derive(Debug, Clone, PartialEq)]
pub struct AuthSession {
    pub id: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl AuthSession {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// A short message surfaced to the reader after an action, success or failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn reading_status_round_trips_through_its_slug() {
        for status in [
            ReadingStatus::Reading,
            ReadingStatus::Completed,
            ReadingStatus::WantToRead,
        ] {
            assert_eq!(status.as_str().parse::<ReadingStatus>(), Ok(status));
        }
        assert!("finished".parse::<ReadingStatus>().is_err());
    }

    #[test]
    fn session_expires_at_its_deadline() {
        let now = Utc::now();
        let session = AuthSession {
            id: "s".to_string(),
            role: Role::User,
            created_at: now,
            expires_at: now + Duration::days(1),
        };
        assert!(!session.is_expired(now));
        assert!(session.is_expired(now + Duration::days(1)));
    }
}
