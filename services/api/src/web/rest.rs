//! services/api/src/web/rest.rs
//!
//! Contains the Axum handlers for the reader-facing views (bookshelf, book
//! detail, profile) and the master definition for the OpenAPI specification.

use crate::web::protocol::*;
use crate::web::state::AppState;
use crate::web::{admin, auth, chat};
use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
    response::Json,
    Extension,
};
use shelf_aware_core::catalog::{build_catalog_view, CatalogFilter, GenreFilter, StatusFilter};
use shelf_aware_core::detail::{
    build_book_detail, clamp_progress, progress_notification, NOT_FOUND_MESSAGE,
};
use shelf_aware_core::domain::{AuthSession, Notification, Role};
use shelf_aware_core::fixtures::EMOTION_TAGS;
use shelf_aware_core::ports::PortError;
use shelf_aware_core::profile::build_profile;
use shelf_aware_core::review::{submitted_notification, validate_review};
use std::sync::Arc;
use tracing::{error, info, warn};
use utoipa::OpenApi;

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::login_view_handler,
        auth::login_handler,
        auth::logout_handler,
        bookshelf_handler,
        book_detail_handler,
        update_progress_handler,
        submit_review_handler,
        profile_handler,
        chat::chat_view_handler,
        chat::send_message_handler,
        admin::admin_view_handler,
        admin::add_book_handler,
        admin::delete_book_handler,
        admin::summarize_book_handler,
        admin::approve_review_handler,
        admin::reject_review_handler,
    ),
    components(
        schemas(
            NotificationDto,
            ShellDto,
            CatalogViewDto,
            BookDetailDto,
            ProfileDto,
            ChatViewDto,
            AdminViewDto,
        )
    ),
    tags(
        (name = "Shelf Aware API", description = "Views and actions for the emotion-aware bookshelf.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// Shared Error Helpers
//=========================================================================================

/// Failure payload shared by every view handler.
pub type HandlerError = (StatusCode, Json<NotificationDto>);

pub(crate) fn reject(status: StatusCode, notification: Notification) -> HandlerError {
    (status, Json(notification.into()))
}

pub(crate) fn book_not_found() -> HandlerError {
    reject(StatusCode::NOT_FOUND, Notification::error(NOT_FOUND_MESSAGE))
}

/// Logs an unexpected port failure and hides the details from the client.
pub(crate) fn port_failure(context: &str, e: PortError) -> HandlerError {
    match e {
        PortError::NotFound(what) => {
            reject(StatusCode::NOT_FOUND, Notification::error(what))
        }
        PortError::Unauthorized => reject(
            StatusCode::UNAUTHORIZED,
            Notification::error("Your session has ended"),
        ),
        PortError::Unexpected(msg) => {
            error!("{}: {}", context, msg);
            reject(
                StatusCode::INTERNAL_SERVER_ERROR,
                Notification::error(format!("{} failed", context)),
            )
        }
    }
}

pub(crate) fn emotion_tags() -> Vec<String> {
    EMOTION_TAGS.iter().map(|t| t.to_string()).collect()
}

//=========================================================================================
// REST API Handlers
//=========================================================================================

/// The bookshelf: the catalog filtered by search, genre, and reading status.
#[utoipa::path(
    get,
    path = "/bookshelf",
    params(CatalogQuery),
    responses(
        (status = 200, description = "Filtered catalog split into status tabs", body = CatalogViewDto),
        (status = 303, description = "Not signed in, redirected to /login")
    )
)]
pub async fn bookshelf_handler(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<AuthSession>,
    uri: Uri,
    Query(query): Query<CatalogQuery>,
) -> Result<Json<CatalogViewDto>, HandlerError> {
    let books = state
        .library
        .list_books()
        .await
        .map_err(|e| port_failure("Loading books", e))?;
    let progress = state
        .library
        .list_progress()
        .await
        .map_err(|e| port_failure("Loading progress", e))?;

    let filter = CatalogFilter {
        query: query.q.unwrap_or_default(),
        genre: GenreFilter::parse(query.genre.as_deref()),
        status: StatusFilter::parse(query.status.as_deref()),
    };
    let view = build_catalog_view(&books, &progress, &filter);

    Ok(Json(CatalogViewDto::new(
        ShellDto::new(session.role, uri.path()),
        view,
    )))
}

/// A single book with its progress slider and reviews.
#[utoipa::path(
    get,
    path = "/book/{book_id}",
    params(("book_id" = String, Path, description = "Catalog id of the book.")),
    responses(
        (status = 200, description = "Book detail", body = BookDetailDto),
        (status = 404, description = "Book not found", body = NotificationDto)
    )
)]
pub async fn book_detail_handler(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<AuthSession>,
    uri: Uri,
    Path(book_id): Path<String>,
) -> Result<Json<BookDetailDto>, HandlerError> {
    let library = &state.library;
    let books = library
        .list_books()
        .await
        .map_err(|e| port_failure("Loading books", e))?;
    let progress = library
        .list_progress()
        .await
        .map_err(|e| port_failure("Loading progress", e))?;
    let reviews = library
        .list_reviews()
        .await
        .map_err(|e| port_failure("Loading reviews", e))?;
    let draft = state
        .sessions
        .progress_draft(&session.id, &book_id)
        .await
        .map_err(|e| port_failure("Loading progress draft", e))?;

    let detail = build_book_detail(&books, &progress, &reviews, &book_id, draft)
        .ok_or_else(book_not_found)?;

    Ok(Json(BookDetailDto::new(
        ShellDto::new(session.role, uri.path()),
        detail,
        emotion_tags(),
    )))
}

/// Moves the progress slider. The value lives in the session only.
#[utoipa::path(
    put,
    path = "/book/{book_id}/progress",
    params(("book_id" = String, Path, description = "Catalog id of the book.")),
    request_body = ProgressRequest,
    responses(
        (status = 200, description = "Progress recorded for this session", body = ProgressResponse),
        (status = 404, description = "Book not found", body = NotificationDto)
    )
)]
pub async fn update_progress_handler(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<AuthSession>,
    Path(book_id): Path<String>,
    Json(req): Json<ProgressRequest>,
) -> Result<Json<ProgressResponse>, HandlerError> {
    state
        .library
        .get_book(&book_id)
        .await
        .map_err(|_| book_not_found())?;

    let progress = clamp_progress(req.progress);
    state
        .sessions
        .save_progress_draft(&session.id, &book_id, progress)
        .await
        .map_err(|e| port_failure("Saving progress", e))?;

    Ok(Json(ProgressResponse {
        notification: progress_notification(progress).into(),
        progress,
    }))
}

/// Validates a review. Accepted reviews are acknowledged but not stored.
#[utoipa::path(
    post,
    path = "/book/{book_id}/reviews",
    params(("book_id" = String, Path, description = "Catalog id of the book.")),
    request_body = ReviewRequest,
    responses(
        (status = 200, description = "Review accepted", body = ReviewSubmittedResponse),
        (status = 404, description = "Book not found", body = NotificationDto),
        (status = 422, description = "Missing rating or emotion", body = NotificationDto)
    )
)]
pub async fn submit_review_handler(
    State(state): State<Arc<AppState>>,
    Path(book_id): Path<String>,
    Json(req): Json<ReviewRequest>,
) -> Result<Json<ReviewSubmittedResponse>, HandlerError> {
    state
        .library
        .get_book(&book_id)
        .await
        .map_err(|_| book_not_found())?;

    let accepted = validate_review(&book_id, req.into()).map_err(|rejection| {
        warn!(%book_id, %rejection, "Review rejected");
        reject(StatusCode::UNPROCESSABLE_ENTITY, rejection.notification())
    })?;
    info!(%book_id, rating = accepted.rating, "Review submitted");

    Ok(Json(ReviewSubmittedResponse {
        notification: submitted_notification().into(),
        review: accepted.into(),
    }))
}

/// Reading statistics, mood history, and the reader's reviews.
///
/// Always the reader's account, whichever role is signed in.
#[utoipa::path(
    get,
    path = "/profile",
    responses(
        (status = 200, description = "Profile statistics", body = ProfileDto)
    )
)]
pub async fn profile_handler(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<AuthSession>,
    uri: Uri,
) -> Result<Json<ProfileDto>, HandlerError> {
    let library = &state.library;
    let result = async {
        let user = library.account(Role::User).await?;
        let books = library.list_books().await?;
        let progress = library.list_progress().await?;
        let reviews = library.list_reviews().await?;
        let moods = library.list_mood_history().await?;
        Ok::<_, PortError>(build_profile(user, &books, &progress, &reviews, &moods))
    }
    .await;

    let stats = result.map_err(|e| port_failure("Loading profile", e))?;
    Ok(Json(ProfileDto::new(
        ShellDto::new(session.role, uri.path()),
        stats,
    )))
}
