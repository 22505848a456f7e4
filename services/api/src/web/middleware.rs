//! services/api/src/web/middleware.rs
//!
//! The session gate: every request is matched against the route guards before
//! it reaches a handler.

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use shelf_aware_core::navigation::{Access, Route};
use std::sync::Arc;
use tracing::debug;

use crate::web::state::AppState;

pub const SESSION_COOKIE: &str = "session";

/// Pulls the session id out of the `Cookie` header, if present.
pub fn session_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())?
        .split(';')
        .find_map(|c| c.trim().strip_prefix(SESSION_COOKIE)?.strip_prefix('='))
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}

/// Middleware that resolves the caller's session and applies the route guards.
///
/// A live session is inserted into the request extensions as an `AuthSession`.
/// Anonymous callers are redirected to `/login`; signed-in callers hitting
/// `/`, `/login`, an unknown path, or `/admin` without the admin role are
/// redirected to `/bookshelf`.
pub async fn gate(State(state): State<Arc<AppState>>, mut req: Request, next: Next) -> Response {
    // 1. Resolve the session, treating unknown or expired ids as anonymous
    let session = match session_cookie(req.headers()) {
        Some(id) => state.sessions.validate_auth_session(&id).await.ok(),
        None => None,
    };

    // 2. Apply the route guard
    let path = req.uri().path().to_string();
    let role = session.as_ref().map(|s| s.role);
    if let Access::Redirect(target) = Route::from_path(&path).access(role) {
        debug!(%path, ?role, %target, "Route guard redirect");
        return Redirect::to(target).into_response();
    }

    // 3. Hand the session to the handler and continue
    if let Some(session) = session {
        req.extensions_mut().insert(session);
    }
    next.run(req).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn session_id_is_read_from_the_cookie_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; session=abc-123; other=1"),
        );
        assert_eq!(session_cookie(&headers).as_deref(), Some("abc-123"));
    }

    #[test]
    fn missing_or_empty_cookie_means_anonymous() {
        let mut headers = HeaderMap::new();
        assert_eq!(session_cookie(&headers), None);
        headers.insert(header::COOKIE, HeaderValue::from_static("session="));
        assert_eq!(session_cookie(&headers), None);
    }
}
