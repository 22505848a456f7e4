//! services/api/src/adapters/scripted_summary.rs
//!
//! This module contains the adapter behind the admin panel's "LLM" button.
//! It implements the `SummaryService` port by stitching together fields the
//! book already has, after a simulated processing delay.

use async_trait::async_trait;
use shelf_aware_core::admin::compose_summary;
use shelf_aware_core::domain::{Book, Review};
use shelf_aware_core::ports::{PortResult, SummaryService};
use std::time::Duration;

#[derive(Clone)]
pub struct ScriptedSummarizer {
    delay: Duration,
}

impl ScriptedSummarizer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl SummaryService for ScriptedSummarizer {
    async fn summarize(&self, book: &Book, reviews: &[Review]) -> PortResult<String> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(compose_summary(book, reviews))
    }
}
