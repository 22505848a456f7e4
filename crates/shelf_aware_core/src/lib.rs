pub mod admin;
pub mod catalog;
pub mod chat;
pub mod detail;
pub mod domain;
pub mod fixtures;
pub mod navigation;
pub mod ports;
pub mod profile;
pub mod review;

pub use domain::{
    AuthSession, Book, ChatMessage, ChatRole, MoodEntry, Notification, NotificationLevel,
    ReadingProgress, ReadingStatus, Review, Role, User,
};
pub use fixtures::Library;
pub use ports::{
    LibraryRepository, PortError, PortResult, RecommendationService, SessionStore,
    SummaryService,
};
