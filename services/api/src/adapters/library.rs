//! services/api/src/adapters/library.rs
//!
//! The catalog adapter, a concrete implementation of the `LibraryRepository`
//! port backed by the fixed in-memory dataset.

use async_trait::async_trait;
use shelf_aware_core::domain::{Book, MoodEntry, ReadingProgress, Review, Role, User};
use shelf_aware_core::fixtures::Library;
use shelf_aware_core::ports::{LibraryRepository, PortError, PortResult};

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// Serves the seeded library. Nothing here is ever mutated.
#[derive(Clone)]
pub struct FixtureLibrary {
    library: Library,
}

impl FixtureLibrary {
    pub fn new(library: Library) -> Self {
        Self { library }
    }
}

//=========================================================================================
// `LibraryRepository` Trait Implementation
//=========================================================================================

#[async_trait]
impl LibraryRepository for FixtureLibrary {
    async fn list_books(&self) -> PortResult<Vec<Book>> {
        Ok(self.library.books.clone())
    }

    async fn get_book(&self, book_id: &str) -> PortResult<Book> {
        self.library
            .books
            .iter()
            .find(|b| b.id == book_id)
            .cloned()
            .ok_or_else(|| PortError::NotFound(format!("Book {} not found", book_id)))
    }

    async fn list_progress(&self) -> PortResult<Vec<ReadingProgress>> {
        Ok(self.library.progress.clone())
    }

    async fn list_reviews(&self) -> PortResult<Vec<Review>> {
        Ok(self.library.reviews.clone())
    }

    async fn list_mood_history(&self) -> PortResult<Vec<MoodEntry>> {
        Ok(self.library.mood_history.clone())
    }

    async fn account(&self, role: Role) -> PortResult<User> {
        Ok(match role {
            Role::User => self.library.user.clone(),
            Role::Admin => self.library.admin.clone(),
        })
    }
}
