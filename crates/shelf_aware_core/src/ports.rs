//! crates/shelf_aware_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! These traits form the boundary of the hexagonal architecture, keeping the
//! core independent of where the catalog lives and how replies are produced.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{
    AuthSession, Book, ChatMessage, MoodEntry, ReadingProgress, Review, Role, User,
};

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
    #[error("Unauthorized")]
    Unauthorized,
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// Read-only access to the catalog and the reader's history.
#[async_trait]
pub trait LibraryRepository: Send + Sync {
    async fn list_books(&self) -> PortResult<Vec<Book>>;

    async fn get_book(&self, book_id: &str) -> PortResult<Book>;

    async fn list_progress(&self) -> PortResult<Vec<ReadingProgress>>;

    async fn list_reviews(&self) -> PortResult<Vec<Review>>;

    async fn list_mood_history(&self) -> PortResult<Vec<MoodEntry>>;

    /// The fixed account that signs in on the given login tab.
    async fn account(&self, role: Role) -> PortResult<User>;
}

/// Login sessions plus the per-session workspace (chat transcript, the admin's
/// local catalog copy, progress slider drafts).
#[async_trait]
pub trait SessionStore: Send + Sync {
    // --- Auth Methods ---
    async fn create_auth_session(
        &self,
        role: Role,
        expires_at: DateTime<Utc>,
    ) -> PortResult<AuthSession>;

    /// Fails with `Unauthorized` for unknown or expired sessions.
    async fn validate_auth_session(&self, session_id: &str) -> PortResult<AuthSession>;

    async fn delete_auth_session(&self, session_id: &str) -> PortResult<()>;

    // --- Chat Transcript ---
    async fn chat_transcript(&self, session_id: &str) -> PortResult<Vec<ChatMessage>>;

    async fn append_chat_message(&self, session_id: &str, message: ChatMessage)
        -> PortResult<()>;

    // --- Admin Workspace ---
    async fn admin_books(&self, session_id: &str) -> PortResult<Vec<Book>>;

    async fn insert_admin_book(&self, session_id: &str, book: Book) -> PortResult<()>;

    /// Returns whether a book was removed.
    async fn remove_admin_book(&self, session_id: &str, book_id: &str) -> PortResult<bool>;

    async fn update_admin_book_abstract(
        &self,
        session_id: &str,
        book_id: &str,
        abstract_text: &str,
    ) -> PortResult<()>;

    // --- Progress Drafts ---
    async fn progress_draft(&self, session_id: &str, book_id: &str) -> PortResult<Option<u8>>;

    async fn save_progress_draft(
        &self,
        session_id: &str,
        book_id: &str,
        progress: u8,
    ) -> PortResult<()>;
}

#[async_trait]
pub trait RecommendationService: Send + Sync {
    /// Produces the assistant's reply to one user turn.
    async fn reply(&self, message: &str, emotions: &[String]) -> PortResult<String>;
}

#[async_trait]
pub trait SummaryService: Send + Sync {
    /// Generates a replacement abstract for a book from its reviews.
    async fn summarize(&self, book: &Book, reviews: &[Review]) -> PortResult<String>;
}
