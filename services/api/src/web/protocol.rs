//! services/api/src/web/protocol.rs
//!
//! Defines the JSON payloads exchanged between the browser client and the API
//! server. Every view response carries a `shell` block describing the header.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shelf_aware_core::admin::{ModerationQueue, NewBookForm};
use shelf_aware_core::catalog::{CatalogView, ShelfEntry};
use shelf_aware_core::detail::BookDetail;
use shelf_aware_core::domain::{
    Book, ChatMessage, ChatRole, MoodEntry, Notification, NotificationLevel, ReadingProgress,
    Review, Role, User,
};
use shelf_aware_core::navigation::{nav_items, NavItem};
use shelf_aware_core::profile::{GenreCount, MoodPoint, ProfileStats, ReviewWithTitle};
use shelf_aware_core::review::{AcceptedReview, ReviewDraft};
use utoipa::{IntoParams, ToSchema};

//=========================================================================================
// Shared Building Blocks
//=========================================================================================

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationLevelDto {
    Success,
    Error,
}

/// A toast-style message reporting the outcome of an action.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct NotificationDto {
    pub level: NotificationLevelDto,
    pub message: String,
}

impl From<Notification> for NotificationDto {
    fn from(n: Notification) -> Self {
        Self {
            level: match n.level {
                NotificationLevel::Success => NotificationLevelDto::Success,
                NotificationLevel::Error => NotificationLevelDto::Error,
            },
            message: n.message,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct NavItemDto {
    pub path: String,
    pub label: String,
    pub active: bool,
}

impl From<NavItem> for NavItemDto {
    fn from(item: NavItem) -> Self {
        Self {
            path: item.path.to_string(),
            label: item.label.to_string(),
            active: item.active,
        }
    }
}

/// The header wrapped around every signed-in view.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ShellDto {
    pub role: String,
    pub nav: Vec<NavItemDto>,
    pub logout_path: String,
}

impl ShellDto {
    pub fn new(role: Role, current_path: &str) -> Self {
        Self {
            role: role.as_str().to_string(),
            nav: nav_items(role, current_path)
                .into_iter()
                .map(NavItemDto::from)
                .collect(),
            logout_path: "/logout".to_string(),
        }
    }
}

//=========================================================================================
// Entity Payloads
//=========================================================================================

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct BookDto {
    pub id: String,
    pub title: String,
    pub author: String,
    pub cover: String,
    pub genres: Vec<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub average_rating: f64,
    pub total_reviews: u32,
    pub price: Option<f64>,
    pub condition: Option<String>,
}

impl From<Book> for BookDto {
    fn from(b: Book) -> Self {
        Self {
            id: b.id,
            title: b.title,
            author: b.author,
            cover: b.cover,
            genres: b.genres,
            abstract_text: b.abstract_text,
            average_rating: b.average_rating,
            total_reviews: b.total_reviews,
            price: b.price,
            condition: b.condition,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ProgressDto {
    pub book_id: String,
    pub progress: u8,
    pub start_date: NaiveDate,
    pub last_read: NaiveDate,
    /// `reading`, `completed` or `want-to-read`.
    pub status: String,
}

impl From<ReadingProgress> for ProgressDto {
    fn from(p: ReadingProgress) -> Self {
        Self {
            book_id: p.book_id,
            progress: p.progress,
            start_date: p.start_date,
            last_read: p.last_read,
            status: p.status.as_str().to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ReviewDto {
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

impl From<Review> for ReviewDto {
    fn from(r: Review) -> Self {
        Self {
            id: r.id,
            user_id: r.user_id,
            book_id: r.book_id,
            rating: r.rating,
            emotions: r.emotions,
            content: r.content,
            date: r.date,
            helpful: r.helpful,
            moderated: r.moderated,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ReviewWithTitleDto {
    pub review: ReviewDto,
    /// Absent when the review points at a book that does not exist.
    pub book_title: Option<String>,
}

impl From<ReviewWithTitle> for ReviewWithTitleDto {
    fn from(r: ReviewWithTitle) -> Self {
        Self {
            review: r.review.into(),
            book_title: r.book_title,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct UserDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub reputation: f64,
    pub role: String,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            reputation: u.reputation,
            role: u.role.as_str().to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct MoodEntryDto {
    pub date: NaiveDate,
    pub mood: String,
    pub emotions: Vec<String>,
}

impl From<MoodEntry> for MoodEntryDto {
    fn from(m: MoodEntry) -> Self {
        Self {
            date: m.date,
            mood: m.mood,
            emotions: m.emotions,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ChatMessageDto {
    pub id: String,
    /// `user` or `assistant`.
    pub role: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl From<ChatMessage> for ChatMessageDto {
    fn from(m: ChatMessage) -> Self {
        Self {
            id: m.id,
            role: match m.role {
                ChatRole::User => "user",
                ChatRole::Assistant => "assistant",
            }
            .to_string(),
            content: m.content,
            timestamp: m.timestamp,
        }
    }
}

//=========================================================================================
// Login
//=========================================================================================

/// Which tab of the login card was submitted.
#[derive(Deserialize, Serialize, ToSchema, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LoginTab {
    #[default]
    User,
    Admin,
}

impl From<LoginTab> for Role {
    fn from(tab: LoginTab) -> Self {
        match tab {
            LoginTab::User => Role::User,
            LoginTab::Admin => Role::Admin,
        }
    }
}

/// Credentials are accepted as typed and never checked.
#[derive(Deserialize, ToSchema, Debug, Default)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub tab: LoginTab,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct LoginTabDto {
    pub tab: LoginTab,
    pub title: String,
    pub description: String,
    pub email_placeholder: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct LoginViewDto {
    pub tabs: Vec<LoginTabDto>,
    pub submit_path: String,
}

//=========================================================================================
// Bookshelf
//=========================================================================================

#[derive(Deserialize, IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct CatalogQuery {
    /// Case-insensitive title or author search.
    pub q: Option<String>,
    /// A genre name, or `all`.
    pub genre: Option<String>,
    /// `all`, `reading`, `completed` or `want-to-read`.
    pub status: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ShelfEntryDto {
    pub book: BookDto,
    pub progress: Option<ProgressDto>,
}

impl From<ShelfEntry> for ShelfEntryDto {
    fn from(e: ShelfEntry) -> Self {
        Self {
            book: e.book.into(),
            progress: e.progress.map(ProgressDto::from),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct CatalogTabDto {
    pub count: usize,
    pub books: Vec<ShelfEntryDto>,
}

impl From<Vec<ShelfEntry>> for CatalogTabDto {
    fn from(entries: Vec<ShelfEntry>) -> Self {
        Self {
            count: entries.len(),
            books: entries.into_iter().map(ShelfEntryDto::from).collect(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct CatalogViewDto {
    pub shell: ShellDto,
    pub all: CatalogTabDto,
    pub reading: CatalogTabDto,
    pub completed: CatalogTabDto,
    pub want_to_read: CatalogTabDto,
    pub genres: Vec<String>,
}

impl CatalogViewDto {
    pub fn new(shell: ShellDto, view: CatalogView) -> Self {
        Self {
            shell,
            all: view.all.into(),
            reading: view.reading.into(),
            completed: view.completed.into(),
            want_to_read: view.want_to_read.into(),
            genres: view.genres,
        }
    }
}

//=========================================================================================
// Book Detail
//=========================================================================================

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct BookDetailDto {
    pub shell: ShellDto,
    pub book: BookDto,
    pub progress: Option<ProgressDto>,
    pub slider: u8,
    pub reviews: Vec<ReviewDto>,
    pub emotion_tags: Vec<String>,
}

impl BookDetailDto {
    pub fn new(shell: ShellDto, detail: BookDetail, emotion_tags: Vec<String>) -> Self {
        Self {
            shell,
            book: detail.book.into(),
            progress: detail.progress.map(ProgressDto::from),
            slider: detail.slider,
            reviews: detail.reviews.into_iter().map(ReviewDto::from).collect(),
            emotion_tags,
        }
    }
}

#[derive(Deserialize, ToSchema, Debug)]
pub struct ProgressRequest {
    /// Slider position; clamped to 0..=100.
    pub progress: i64,
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct ProgressResponse {
    pub notification: NotificationDto,
    pub progress: u8,
}

#[derive(Deserialize, ToSchema, Debug, Default)]
pub struct ReviewRequest {
    /// 0 means no star was picked.
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub emotions: Vec<String>,
    #[serde(default)]
    pub content: String,
}

impl From<ReviewRequest> for ReviewDraft {
    fn from(r: ReviewRequest) -> Self {
        Self {
            rating: r.rating,
            emotions: r.emotions,
            content: r.content,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct AcceptedReviewDto {
    pub book_id: String,
    pub rating: u8,
    pub emotions: Vec<String>,
    pub content: String,
}

impl From<AcceptedReview> for AcceptedReviewDto {
    fn from(r: AcceptedReview) -> Self {
        Self {
            book_id: r.book_id,
            rating: r.rating,
            emotions: r.emotions,
            content: r.content,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct ReviewSubmittedResponse {
    pub notification: NotificationDto,
    pub review: AcceptedReviewDto,
}

//=========================================================================================
// Profile
//=========================================================================================

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct GenreCountDto {
    pub genre: String,
    pub count: usize,
}

impl From<GenreCount> for GenreCountDto {
    fn from(g: GenreCount) -> Self {
        Self {
            genre: g.genre,
            count: g.count,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct MoodPointDto {
    pub label: String,
    pub mood: String,
}

impl From<MoodPoint> for MoodPointDto {
    fn from(p: MoodPoint) -> Self {
        Self {
            label: p.label,
            mood: p.mood,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ProfileDto {
    pub shell: ShellDto,
    pub user: UserDto,
    pub initials: String,
    pub total_books: usize,
    pub completed: usize,
    pub currently_reading: usize,
    pub genre_counts: Vec<GenreCountDto>,
    pub mood_chart: Vec<MoodPointDto>,
    pub mood_history: Vec<MoodEntryDto>,
    pub average_rating_given: f64,
    pub rounded_stars: u8,
    pub reviews: Vec<ReviewWithTitleDto>,
}

impl ProfileDto {
    pub fn new(shell: ShellDto, stats: ProfileStats) -> Self {
        Self {
            shell,
            user: stats.user.into(),
            initials: stats.initials,
            total_books: stats.total_books,
            completed: stats.completed,
            currently_reading: stats.currently_reading,
            genre_counts: stats.genre_counts.into_iter().map(Into::into).collect(),
            mood_chart: stats.mood_chart.into_iter().map(Into::into).collect(),
            mood_history: stats.mood_history.into_iter().map(Into::into).collect(),
            average_rating_given: stats.average_rating_given,
            rounded_stars: stats.rounded_stars,
            reviews: stats.reviews.into_iter().map(Into::into).collect(),
        }
    }
}

//=========================================================================================
// Chatbot
//=========================================================================================

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ChatViewDto {
    pub shell: ShellDto,
    pub messages: Vec<ChatMessageDto>,
    pub emotion_tags: Vec<String>,
}

#[derive(Deserialize, ToSchema, Debug, Default)]
pub struct SendMessageRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub emotions: Vec<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct SendMessageResponse {
    pub sent: ChatMessageDto,
    pub reply: ChatMessageDto,
}

//=========================================================================================
// Admin Panel
//=========================================================================================

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ModerationDto {
    pub pending: Vec<ReviewWithTitleDto>,
    pub pending_count: usize,
    pub approved: Vec<ReviewWithTitleDto>,
    pub approved_count: usize,
}

impl From<ModerationQueue> for ModerationDto {
    fn from(q: ModerationQueue) -> Self {
        Self {
            pending: q.pending.into_iter().map(Into::into).collect(),
            pending_count: q.pending_count,
            approved: q.approved.into_iter().map(Into::into).collect(),
            approved_count: q.approved_count,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct AdminViewDto {
    pub shell: ShellDto,
    pub book_count: usize,
    pub books: Vec<BookDto>,
    pub genre_vocabulary: Vec<String>,
    pub conditions: Vec<String>,
    pub moderation: ModerationDto,
}

/// The price box is a free text field; numbers are accepted too.
#[derive(Deserialize, ToSchema, Debug, Clone)]
#[serde(untagged)]
pub enum PriceInput {
    Number(f64),
    Text(String),
}

impl Default for PriceInput {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl PriceInput {
    fn into_text(self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(t) => t,
        }
    }
}

#[derive(Deserialize, ToSchema, Debug, Default)]
pub struct NewBookRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    /// Comma-separated genre list.
    #[serde(default)]
    pub genre: String,
    #[serde(default, rename = "abstract")]
    pub abstract_text: String,
    #[serde(default)]
    pub price: PriceInput,
    pub condition: Option<String>,
}

impl From<NewBookRequest> for NewBookForm {
    fn from(r: NewBookRequest) -> Self {
        Self {
            title: r.title,
            author: r.author,
            genre: r.genre,
            abstract_text: r.abstract_text,
            price: r.price.into_text(),
            condition: r.condition,
        }
    }
}

/// A notification paired with the book the action produced or changed.
#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct BookActionResponse {
    pub notification: NotificationDto,
    pub book: BookDto,
}
