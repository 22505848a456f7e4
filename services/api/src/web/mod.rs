pub mod admin;
pub mod auth;
pub mod chat;
pub mod middleware;
pub mod protocol;
pub mod rest;
pub mod router;
pub mod state;

pub use router::app_router;
