//! crates/shelf_aware_core/src/navigation.rs
//!
//! Route table, access guards, and the navigation header.
//!
//! Guard logic lives here rather than in the web layer so every path decision
//! (login gate, admin-only pages, unknown paths) is one pure function.

use crate::domain::Role;

pub const LOGIN_PATH: &str = "/login";
pub const BOOKSHELF_PATH: &str = "/bookshelf";
pub const ADMIN_PATH: &str = "/admin";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Root,
    Login,
    Logout,
    Bookshelf,
    Book(String),
    Profile,
    Chatbot,
    Admin,
    NotFound,
}

/// Outcome of checking a route against the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Allow,
    Redirect(&'static str),
}

impl Route {
    /// Parses a URL path; sub-resources map to the view that owns them.
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        let mut segments = trimmed.split('/').skip(1);

        match (segments.next(), segments.next()) {
            (None, _) | (Some(""), None) => Self::Root,
            (Some("login"), None) => Self::Login,
            (Some("logout"), None) => Self::Logout,
            (Some("bookshelf"), None) => Self::Bookshelf,
            (Some("book"), Some(id)) if !id.is_empty() => Self::Book(id.to_string()),
            (Some("profile"), None) => Self::Profile,
            (Some("chatbot"), _) => Self::Chatbot,
            (Some("admin"), _) => Self::Admin,
            _ => Self::NotFound,
        }
    }

    /// **Guard logic.** `role` is `None` for an anonymous visitor.
    pub fn access(&self, role: Option<Role>) -> Access {
        match (self, role) {
            (Self::Login, None) => Access::Allow,
            (_, None) => Access::Redirect(LOGIN_PATH),
            (Self::Root | Self::Login | Self::NotFound, Some(_)) => {
                Access::Redirect(BOOKSHELF_PATH)
            }
            (Self::Admin, Some(role)) if !role.is_admin() => Access::Redirect(BOOKSHELF_PATH),
            _ => Access::Allow,
        }
    }
}

/// Where a fresh login lands.
pub fn landing_path(role: Role) -> &'static str {
    match role {
        Role::Admin => ADMIN_PATH,
        Role::User => BOOKSHELF_PATH,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Header links for `role`, with the one matching `current_path` marked.
pub fn nav_items(role: Role, current_path: &str) -> Vec<NavItem> {
    let links: &[(&'static str, &'static str)] = match role {
        Role::Admin => &[(ADMIN_PATH, "Admin Panel"), (BOOKSHELF_PATH, "Bookshelf")],
        Role::User => &[
            (BOOKSHELF_PATH, "Bookshelf"),
            ("/chatbot", "Chatbot"),
            ("/profile", "Profile"),
        ],
    };

    links
        .iter()
        .map(|&(path, label)| NavItem {
            path,
            label,
            active: path == current_path,
        })
        .collect()
}
