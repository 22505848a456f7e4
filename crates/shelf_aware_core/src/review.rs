//! crates/shelf_aware_core/src/review.rs
//!
//! Validation for the "write a review" form.

use crate::domain::Notification;

pub const MAX_RATING: u8 = 5;

/// The form as submitted. A rating of 0 means no star was picked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewDraft {
    pub rating: u8,
    pub emotions: Vec<String>,
    pub content: String,
}

/// A draft that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptedReview {
    pub book_id: String,
    pub rating: u8,
    pub emotions: Vec<String>,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReviewRejection {
    #[error("Please select a rating")]
    MissingRating,
    #[error("Please select at least one emotion")]
    MissingEmotion,
    #[error("Rating must be between 1 and 5")]
    RatingOutOfRange(u8),
}

impl ReviewRejection {
    pub fn notification(&self) -> Notification {
        Notification::error(self.to_string())
    }
}

/// Checks the rating first, then the emotions.
pub fn validate_review(
    book_id: &str,
    draft: ReviewDraft,
) -> Result<AcceptedReview, ReviewRejection> {
    if draft.rating == 0 {
        return Err(ReviewRejection::MissingRating);
    }
    if draft.rating > MAX_RATING {
        return Err(ReviewRejection::RatingOutOfRange(draft.rating));
    }

    let emotions = dedup_tags(draft.emotions);
    if emotions.is_empty() {
        return Err(ReviewRejection::MissingEmotion);
    }

    Ok(AcceptedReview {
        book_id: book_id.to_string(),
        rating: draft.rating,
        emotions,
        content: draft.content,
    })
}

/// Toggle pickers cannot select a tag twice; collapse repeats, keep order.
pub fn dedup_tags(tags: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        if !seen.contains(&tag) {
            seen.push(tag);
        }
    }
    seen
}

pub fn submitted_notification() -> Notification {
    Notification::success("Review submitted successfully!")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(rating: u8, emotions: &[&str]) -> ReviewDraft {
        ReviewDraft {
            rating,
            emotions: emotions.iter().map(|e| e.to_string()).collect(),
            content: "Loved it".to_string(),
        }
    }

    #[test]
    fn zero_rating_is_rejected_even_with_emotions() {
        assert_eq!(
            validate_review("1", draft(0, &["Happy"])),
            Err(ReviewRejection::MissingRating)
        );
        assert_eq!(
            validate_review("1", draft(0, &[])),
            Err(ReviewRejection::MissingRating)
        );
    }

    #[test]
    fn rating_without_emotions_is_rejected() {
        let rejection = validate_review("1", draft(4, &[])).unwrap_err();
        assert_eq!(rejection, ReviewRejection::MissingEmotion);
        assert_eq!(
            rejection.notification().message,
            "Please select at least one emotion"
        );
    }

    #[test]
    fn ratings_above_five_are_rejected() {
        assert_eq!(
            validate_review("1", draft(6, &["Calm"])),
            Err(ReviewRejection::RatingOutOfRange(6))
        );
    }

    #[test]
    fn accepted_review_collapses_repeated_tags() {
        let accepted = validate_review("3", draft(5, &["Calm", "Hopeful", "Calm"])).unwrap();
        assert_eq!(accepted.book_id, "3");
        assert_eq!(accepted.emotions, vec!["Calm", "Hopeful"]);
    }
}
