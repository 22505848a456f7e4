//! services/api/src/adapters/memory.rs
//!
//! The session adapter, a concrete implementation of the `SessionStore` port.
//! Sessions and their workspaces live in a map guarded by a `tokio` RwLock and
//! are gone when the process exits.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shelf_aware_core::chat::greeting_message;
use shelf_aware_core::domain::{AuthSession, Book, ChatMessage, Role};
use shelf_aware_core::ports::{PortError, PortResult, SessionStore};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

//=========================================================================================
// Per-Session Records
//=========================================================================================

/// Everything one login owns.
struct SessionRecord {
    auth: AuthSession,
    transcript: Vec<ChatMessage>,
    /// The admin panel's local copy of the catalog.
    admin_books: Vec<Book>,
    progress_drafts: HashMap<String, u8>,
}

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, SessionRecord>>,
    /// Copied into every new session's admin workspace.
    seed_catalog: Vec<Book>,
}

impl InMemorySessionStore {
    pub fn new(seed_catalog: Vec<Book>) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            seed_catalog,
        }
    }

    fn unknown(session_id: &str) -> PortError {
        PortError::NotFound(format!("Session {} not found", session_id))
    }

    /// Runs `f` against a live session's record.
    async fn with_session<T>(
        &self,
        session_id: &str,
        f: impl FnOnce(&mut SessionRecord) -> T,
    ) -> PortResult<T> {
        let mut sessions = self.sessions.write().await;
        let record = sessions
            .get_mut(session_id)
            .ok_or_else(|| Self::unknown(session_id))?;
        Ok(f(record))
    }
}

//=========================================================================================
// `SessionStore` Trait Implementation
//=========================================================================================

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create_auth_session(
        &self,
        role: Role,
        expires_at: DateTime<Utc>,
    ) -> PortResult<AuthSession> {
        let now = Utc::now();
        let auth = AuthSession {
            id: Uuid::new_v4().to_string(),
            role,
            created_at: now,
            expires_at,
        };
        let record = SessionRecord {
            auth: auth.clone(),
            transcript: vec![greeting_message()],
            admin_books: self.seed_catalog.clone(),
            progress_drafts: HashMap::new(),
        };

        let mut sessions = self.sessions.write().await;
        // Sessions whose cookie never comes back are swept on the next login.
        sessions.retain(|_, r| !r.auth.is_expired(now));
        sessions.insert(auth.id.clone(), record);
        Ok(auth)
    }

    async fn validate_auth_session(&self, session_id: &str) -> PortResult<AuthSession> {
        let mut sessions = self.sessions.write().await;
        let expired = match sessions.get(session_id) {
            None => return Err(PortError::Unauthorized),
            Some(record) => record.auth.is_expired(Utc::now()),
        };
        if expired {
            sessions.remove(session_id);
            return Err(PortError::Unauthorized);
        }
        sessions
            .get(session_id)
            .map(|record| record.auth.clone())
            .ok_or(PortError::Unauthorized)
    }

    async fn delete_auth_session(&self, session_id: &str) -> PortResult<()> {
        self.sessions
            .write()
            .await
            .remove(session_id)
            .map(|_| ())
            .ok_or_else(|| Self::unknown(session_id))
    }

    async fn chat_transcript(&self, session_id: &str) -> PortResult<Vec<ChatMessage>> {
        self.with_session(session_id, |record| record.transcript.clone())
            .await
    }

    async fn append_chat_message(
        &self,
        session_id: &str,
        message: ChatMessage,
    ) -> PortResult<()> {
        self.with_session(session_id, |record| record.transcript.push(message))
            .await
    }

    async fn admin_books(&self, session_id: &str) -> PortResult<Vec<Book>> {
        self.with_session(session_id, |record| record.admin_books.clone())
            .await
    }

    async fn insert_admin_book(&self, session_id: &str, book: Book) -> PortResult<()> {
        self.with_session(session_id, |record| record.admin_books.push(book))
            .await
    }

    async fn remove_admin_book(&self, session_id: &str, book_id: &str) -> PortResult<bool> {
        self.with_session(session_id, |record| {
            let before = record.admin_books.len();
            record.admin_books.retain(|b| b.id != book_id);
            record.admin_books.len() != before
        })
        .await
    }

    async fn update_admin_book_abstract(
        &self,
        session_id: &str,
        book_id: &str,
        abstract_text: &str,
    ) -> PortResult<()> {
        self.with_session(session_id, |record| {
            record
                .admin_books
                .iter_mut()
                .find(|b| b.id == book_id)
                .map(|book| book.abstract_text = abstract_text.to_string())
                .ok_or_else(|| PortError::NotFound(format!("Book {} not found", book_id)))
        })
        .await?
    }

    async fn progress_draft(&self, session_id: &str, book_id: &str) -> PortResult<Option<u8>> {
        self.with_session(session_id, |record| {
            record.progress_drafts.get(book_id).copied()
        })
        .await
    }

    async fn save_progress_draft(
        &self,
        session_id: &str,
        book_id: &str,
        progress: u8,
    ) -> PortResult<()> {
        self.with_session(session_id, |record| {
            record.progress_drafts.insert(book_id.to_string(), progress);
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use shelf_aware_core::chat::GREETING;
    use shelf_aware_core::domain::ChatRole;
    use shelf_aware_core::fixtures::Library;

    fn store() -> InMemorySessionStore {
        InMemorySessionStore::new(Library::seeded().books)
    }

    async fn login(store: &InMemorySessionStore, role: Role) -> AuthSession {
        store
            .create_auth_session(role, Utc::now() + Duration::days(1))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn new_session_starts_with_greeting_and_full_catalog() {
        let store = store();
        let session = login(&store, Role::Admin).await;

        let transcript = store.chat_transcript(&session.id).await.unwrap();
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript[0].role, ChatRole::Assistant);
        assert_eq!(transcript[0].content, GREETING);
        assert_eq!(store.admin_books(&session.id).await.unwrap().len(), 6);
    }

    #[tokio::test]
    async fn expired_sessions_are_rejected_and_dropped() {
        let store = store();
        let session = store
            .create_auth_session(Role::User, Utc::now() - Duration::seconds(1))
            .await
            .unwrap();

        assert!(matches!(
            store.validate_auth_session(&session.id).await,
            Err(PortError::Unauthorized)
        ));
        assert!(store.chat_transcript(&session.id).await.is_err());
    }

    #[tokio::test]
    async fn login_sweeps_abandoned_expired_sessions() {
        let store = store();
        for _ in 0..100 {
            store
                .create_auth_session(Role::User, Utc::now() - Duration::seconds(1))
                .await
                .unwrap();
        }
        let live = login(&store, Role::User).await;

        assert_eq!(store.sessions.read().await.len(), 1);
        assert!(store.validate_auth_session(&live.id).await.is_ok());
    }

    #[tokio::test]
    async fn workspaces_are_isolated_per_session() {
        let store = store();
        let first = login(&store, Role::Admin).await;
        let second = login(&store, Role::Admin).await;

        assert!(store.remove_admin_book(&first.id, "1").await.unwrap());
        assert!(!store.remove_admin_book(&first.id, "1").await.unwrap());
        assert_eq!(store.admin_books(&first.id).await.unwrap().len(), 5);
        assert_eq!(store.admin_books(&second.id).await.unwrap().len(), 6);
    }

    #[tokio::test]
    async fn abstract_update_targets_one_book() {
        let store = store();
        let session = login(&store, Role::Admin).await;

        store
            .update_admin_book_abstract(&session.id, "2", "Rewritten")
            .await
            .unwrap();
        let books = store.admin_books(&session.id).await.unwrap();
        assert_eq!(books[1].abstract_text, "Rewritten");
        assert_ne!(books[0].abstract_text, "Rewritten");

        assert!(matches!(
            store
                .update_admin_book_abstract(&session.id, "nope", "x")
                .await,
            Err(PortError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn progress_drafts_round_trip() {
        let store = store();
        let session = login(&store, Role::User).await;

        assert_eq!(store.progress_draft(&session.id, "1").await.unwrap(), None);
        store.save_progress_draft(&session.id, "1", 90).await.unwrap();
        assert_eq!(
            store.progress_draft(&session.id, "1").await.unwrap(),
            Some(90)
        );
    }

    #[tokio::test]
    async fn logout_removes_the_session() {
        let store = store();
        let session = login(&store, Role::User).await;

        store.delete_auth_session(&session.id).await.unwrap();
        assert!(store.validate_auth_session(&session.id).await.is_err());
        assert!(store.delete_auth_session(&session.id).await.is_err());
    }
}
