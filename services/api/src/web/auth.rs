//! services/api/src/web/auth.rs
//!
//! Login and logout endpoints. Any credentials are accepted; the submitted tab
//! alone decides whether the session is a reader's or an administrator's.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Redirect},
    Extension, Json,
};
use chrono::{Duration, Utc};
use shelf_aware_core::domain::{AuthSession, Role};
use shelf_aware_core::navigation::{landing_path, LOGIN_PATH};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::web::middleware::SESSION_COOKIE;
use crate::web::protocol::{LoginRequest, LoginTab, LoginTabDto, LoginViewDto};
use crate::web::state::AppState;

//=========================================================================================
// Handlers
//=========================================================================================

/// GET /login - The sign-in card
#[utoipa::path(
    get,
    path = "/login",
    responses(
        (status = 200, description = "Login view", body = LoginViewDto),
        (status = 303, description = "Already signed in, redirected to /bookshelf")
    )
)]
pub async fn login_view_handler() -> Json<LoginViewDto> {
    Json(LoginViewDto {
        tabs: vec![
            LoginTabDto {
                tab: LoginTab::User,
                title: "Reader".to_string(),
                description: "Sign in to discover books that match your emotions".to_string(),
                email_placeholder: "sarah@example.com".to_string(),
            },
            LoginTabDto {
                tab: LoginTab::Admin,
                title: "Admin".to_string(),
                description: "Manage book data and moderate reviews".to_string(),
                email_placeholder: "admin@shelfaware.com".to_string(),
            },
        ],
        submit_path: LOGIN_PATH.to_string(),
    })
}

/// POST /login - Start a session for the submitted tab
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 303, description = "Signed in; redirected to /admin or /bookshelf"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn login_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let role = Role::from(req.tab);
    let ttl = Duration::days(state.config.session_ttl_days);

    // 1. Create the session; credentials are not checked
    let session = state
        .sessions
        .create_auth_session(role, Utc::now() + ttl)
        .await
        .map_err(|e| {
            error!(role = role.as_str(), "Could not open session: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Could not sign in".to_string())
        })?;
    match state.library.account(role).await {
        Ok(account) => info!(
            role = role.as_str(),
            email = %req.email,
            account = %account.name,
            "User signed in"
        ),
        Err(e) => warn!("No fixture account for {}: {}", role.as_str(), e),
    }

    // 2. Create session cookie
    let cookie = format!(
        "{}={}; HttpOnly; Secure; SameSite=Lax; Path=/; Max-Age={}",
        SESSION_COOKIE,
        session.id,
        ttl.num_seconds()
    );

    // 3. Send the user to their landing page
    Ok((
        [(header::SET_COOKIE, cookie)],
        Redirect::to(landing_path(role)),
    ))
}

/// POST /logout - End the session
#[utoipa::path(
    post,
    path = "/logout",
    responses(
        (status = 303, description = "Signed out; redirected to /login"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn logout_handler(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<AuthSession>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    state
        .sessions
        .delete_auth_session(&session.id)
        .await
        .map_err(|e| {
            error!(session_id = %session.id, "Could not close session: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Could not sign out".to_string())
        })?;
    info!(role = session.role.as_str(), "User signed out");

    let cookie = format!(
        "{}=; HttpOnly; Secure; SameSite=Lax; Path=/; Max-Age=0",
        SESSION_COOKIE
    );
    Ok(([(header::SET_COOKIE, cookie)], Redirect::to(LOGIN_PATH)))
}
