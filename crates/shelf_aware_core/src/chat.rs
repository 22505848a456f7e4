//! crates/shelf_aware_core/src/chat.rs
//!
//! The scripted recommendation assistant. Replies are picked by matching the
//! selected emotion tags against a few fixed genre sets.

use crate::domain::{Book, ChatMessage, ChatRole};

pub const GREETING: &str = "Hi! I'm your emotion-aware book assistant. How are you feeling today? I can help you find the perfect book based on your emotions and preferences.";

/// Used when the reader sends a message without picking any emotion.
pub const NEUTRAL_EMOTION: &str = "neutral";

const MAX_SUGGESTIONS: usize = 3;
const ABSTRACT_PREVIEW_CHARS: usize = 100;

pub fn greeting_message() -> ChatMessage {
    ChatMessage::new(ChatRole::Assistant, GREETING)
}

/// What the reader's bubble shows, or `None` when there is nothing to send.
pub fn user_message_content(message: &str, emotions: &[String]) -> Option<String> {
    if message.trim().is_empty() && emotions.is_empty() {
        return None;
    }
    if message.is_empty() {
        Some(format!("Feeling: {}", emotions.join(", ")))
    } else {
        Some(message.to_string())
    }
}

pub fn effective_emotions(emotions: &[String]) -> Vec<String> {
    if emotions.is_empty() {
        vec![NEUTRAL_EMOTION.to_string()]
    } else {
        emotions.to_vec()
    }
}

struct Mood {
    triggers: [&'static str; 2],
    genres: [&'static str; 2],
}

const COMFORT: Mood = Mood {
    triggers: ["sad", "melancholic"],
    genres: ["Fantasy", "Biography/Memoir"],
};

const MOTIVATION: Mood = Mood {
    triggers: ["motivated", "inspired"],
    genres: ["Psychology/Self-Help", "Biography/Memoir"],
};

const CURIOSITY: Mood = Mood {
    triggers: ["curious", "adventurous"],
    genres: ["Mystery/Thriller", "Science Fiction"],
};

impl Mood {
    fn triggered_by(&self, lowered: &[String]) -> bool {
        self.triggers.iter().any(|t| lowered.iter().any(|e| e == t))
    }

    fn pick<'a>(&self, books: &'a [Book]) -> Vec<&'a Book> {
        books
            .iter()
            .filter(|b| self.genres.iter().any(|g| b.has_genre(g)))
            .take(MAX_SUGGESTIONS)
            .collect()
    }
}

fn preview_line(book: &Book) -> String {
    let preview: String = book.abstract_text.chars().take(ABSTRACT_PREVIEW_CHARS).collect();
    format!("• \"{}\" by {} - {}...", book.title, book.author, preview)
}

fn preview_list(books: &[&Book]) -> String {
    books
        .iter()
        .map(|b| preview_line(b))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Builds the assistant's reply. The first matching mood wins; the message
/// text itself does not influence the answer.
pub fn generate_response(_message: &str, emotions: &[String], books: &[Book]) -> String {
    let lowered: Vec<String> = emotions.iter().map(|e| e.to_lowercase()).collect();

    if COMFORT.triggered_by(&lowered) {
        return format!(
            "I understand you're feeling {}. Here are some books that might help:\n\n{}",
            emotions.join(", "),
            preview_list(&COMFORT.pick(books))
        );
    }

    if MOTIVATION.triggered_by(&lowered) {
        return format!(
            "Great energy! Here are some motivational reads:\n\n{}",
            preview_list(&MOTIVATION.pick(books))
        );
    }

    if CURIOSITY.triggered_by(&lowered) {
        return format!(
            "Perfect! Here are some thrilling reads for your curious mind:\n\n{}",
            preview_list(&CURIOSITY.pick(books))
        );
    }

    let suggestions = books
        .iter()
        .take(MAX_SUGGESTIONS)
        .map(|b| {
            format!(
                "• \"{}\" by {} - A {} book rated {} stars.",
                b.title,
                b.author,
                b.genres.first().map(String::as_str).unwrap_or_default(),
                b.average_rating
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "Based on your emotions ({}), I'd recommend exploring these books:\n\n{}\n\nWould you like to know more about any of these?",
        emotions.join(", "),
        suggestions
    )
}
