//! services/api/src/web/state.rs
//!
//! Defines the application's shared state.

use crate::adapters::{FixtureLibrary, InMemorySessionStore, ScriptedAssistant, ScriptedSummarizer};
use crate::config::Config;
use shelf_aware_core::fixtures::Library;
use shelf_aware_core::ports::{
    LibraryRepository, RecommendationService, SessionStore, SummaryService,
};
use std::sync::Arc;

//=========================================================================================
// AppState (Shared Across All Requests)
//=========================================================================================

/// The shared application state, created once at startup and passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub library: Arc<dyn LibraryRepository>,
    pub sessions: Arc<dyn SessionStore>,
    pub assistant: Arc<dyn RecommendationService>,
    pub summarizer: Arc<dyn SummaryService>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Wires the in-memory adapters around one seeded library.
    pub fn in_memory(config: Arc<Config>, library: Library) -> Self {
        let books = library.books.clone();
        Self {
            sessions: Arc::new(InMemorySessionStore::new(books.clone())),
            assistant: Arc::new(ScriptedAssistant::new(books, config.chat_reply_delay)),
            summarizer: Arc::new(ScriptedSummarizer::new(config.summary_delay)),
            library: Arc::new(FixtureLibrary::new(library)),
            config,
        }
    }
}
