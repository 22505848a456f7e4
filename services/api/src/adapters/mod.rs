pub mod library;
pub mod memory;
pub mod scripted_chat;
pub mod scripted_summary;

pub use library::FixtureLibrary;
pub use memory::InMemorySessionStore;
pub use scripted_chat::ScriptedAssistant;
pub use scripted_summary::ScriptedSummarizer;
