//! services/api/src/adapters/scripted_chat.rs
//!
//! This module contains the adapter for the recommendation assistant.
//! It implements the `RecommendationService` port with canned replies picked by
//! emotion tag, after a fixed "typing" delay.

use async_trait::async_trait;
use shelf_aware_core::chat::generate_response;
use shelf_aware_core::domain::Book;
use shelf_aware_core::ports::{PortResult, RecommendationService};
use std::time::Duration;
use tracing::debug;

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

#[derive(Clone)]
pub struct ScriptedAssistant {
    /// The books the assistant may suggest, in suggestion order.
    books: Vec<Book>,
    delay: Duration,
}

impl ScriptedAssistant {
    pub fn new(books: Vec<Book>, delay: Duration) -> Self {
        Self { books, delay }
    }
}

//=========================================================================================
// `RecommendationService` Trait Implementation
//=========================================================================================

#[async_trait]
impl RecommendationService for ScriptedAssistant {
    async fn reply(&self, message: &str, emotions: &[String]) -> PortResult<String> {
        debug!(?emotions, delay_ms = self.delay.as_millis() as u64, "Composing scripted reply");
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(generate_response(message, emotions, &self.books))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_aware_core::fixtures::Library;

    #[tokio::test(start_paused = true)]
    async fn reply_waits_for_the_typing_delay() {
        let assistant = ScriptedAssistant::new(Library::seeded().books, Duration::from_millis(1500));
        let started = tokio::time::Instant::now();

        let reply = assistant
            .reply("", &["Curious".to_string()])
            .await
            .unwrap();

        assert!(started.elapsed() >= Duration::from_millis(1500));
        assert!(reply.starts_with("Perfect!"));
    }
}
