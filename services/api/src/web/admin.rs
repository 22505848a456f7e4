//! services/api/src/web/admin.rs
//!
//! Handlers for the admin panel. Catalog edits apply to the session's own copy
//! of the book list; moderation buttons only acknowledge the click.

use axum::{
    extract::{Path, State},
    http::{StatusCode, Uri},
    response::Json,
    Extension,
};
use shelf_aware_core::admin::{
    book_added_notification, book_deleted_notification, moderation_notification,
    moderation_queue, summary_notification, ModerationDecision, NewBookForm,
};
use shelf_aware_core::domain::AuthSession;
use shelf_aware_core::fixtures::{BOOK_CONDITIONS, GENRE_VOCABULARY};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::web::protocol::{
    AdminViewDto, BookActionResponse, BookDto, NewBookRequest, NotificationDto, ShellDto,
};
use crate::web::rest::{book_not_found, port_failure, HandlerError};
use crate::web::state::AppState;

/// The admin workspace: the local book list and the moderation queue.
#[utoipa::path(
    get,
    path = "/admin",
    responses(
        (status = 200, description = "Admin workspace", body = AdminViewDto),
        (status = 303, description = "Not an administrator, redirected to /bookshelf")
    )
)]
pub async fn admin_view_handler(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<AuthSession>,
    uri: Uri,
) -> Result<Json<AdminViewDto>, HandlerError> {
    let books = state
        .sessions
        .admin_books(&session.id)
        .await
        .map_err(|e| port_failure("Loading admin catalog", e))?;
    let reviews = state
        .library
        .list_reviews()
        .await
        .map_err(|e| port_failure("Loading reviews", e))?;

    let moderation = moderation_queue(&reviews, &books);
    Ok(Json(AdminViewDto {
        shell: ShellDto::new(session.role, uri.path()),
        book_count: books.len(),
        books: books.into_iter().map(BookDto::from).collect(),
        genre_vocabulary: GENRE_VOCABULARY.iter().map(|g| g.to_string()).collect(),
        conditions: BOOK_CONDITIONS.iter().map(|c| c.to_string()).collect(),
        moderation: moderation.into(),
    }))
}

/// Appends one book to the admin's catalog copy.
#[utoipa::path(
    post,
    path = "/admin/books",
    request_body = NewBookRequest,
    responses(
        (status = 201, description = "Book added", body = BookActionResponse)
    )
)]
pub async fn add_book_handler(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<AuthSession>,
    Json(req): Json<NewBookRequest>,
) -> Result<(StatusCode, Json<BookActionResponse>), HandlerError> {
    let form: NewBookForm = req.into();
    let book = form.into_book(Uuid::new_v4().to_string());

    state
        .sessions
        .insert_admin_book(&session.id, book.clone())
        .await
        .map_err(|e| port_failure("Adding book", e))?;
    info!(book_id = %book.id, title = %book.title, "Book added");

    Ok((
        StatusCode::CREATED,
        Json(BookActionResponse {
            notification: book_added_notification().into(),
            book: book.into(),
        }),
    ))
}

/// Removes a book from the admin's catalog copy. Unknown ids are a no-op.
#[utoipa::path(
    delete,
    path = "/admin/books/{book_id}",
    params(("book_id" = String, Path, description = "Id of the book to remove.")),
    responses(
        (status = 200, description = "Book deleted", body = NotificationDto)
    )
)]
pub async fn delete_book_handler(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<AuthSession>,
    Path(book_id): Path<String>,
) -> Result<Json<NotificationDto>, HandlerError> {
    let removed = state
        .sessions
        .remove_admin_book(&session.id, &book_id)
        .await
        .map_err(|e| port_failure("Deleting book", e))?;
    info!(%book_id, removed, "Book delete requested");

    Ok(Json(book_deleted_notification().into()))
}

/// Replaces a book's abstract with a generated summary.
#[utoipa::path(
    post,
    path = "/admin/books/{book_id}/summary",
    params(("book_id" = String, Path, description = "Id of the book to summarise.")),
    responses(
        (status = 200, description = "Abstract replaced", body = BookActionResponse),
        (status = 404, description = "Book not found", body = NotificationDto)
    )
)]
pub async fn summarize_book_handler(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<AuthSession>,
    Path(book_id): Path<String>,
) -> Result<Json<BookActionResponse>, HandlerError> {
    let mut book = state
        .sessions
        .admin_books(&session.id)
        .await
        .map_err(|e| port_failure("Loading admin catalog", e))?
        .into_iter()
        .find(|b| b.id == book_id)
        .ok_or_else(book_not_found)?;
    let reviews = state
        .library
        .list_reviews()
        .await
        .map_err(|e| port_failure("Loading reviews", e))?;

    let summary = state
        .summarizer
        .summarize(&book, &reviews)
        .await
        .map_err(|e| port_failure("Generating summary", e))?;
    state
        .sessions
        .update_admin_book_abstract(&session.id, &book_id, &summary)
        .await
        .map_err(|e| port_failure("Saving summary", e))?;
    info!(%book_id, "Abstract replaced with generated summary");

    book.abstract_text = summary;
    Ok(Json(BookActionResponse {
        notification: summary_notification().into(),
        book: book.into(),
    }))
}

/// Acknowledges an approval. The review is not changed.
#[utoipa::path(
    post,
    path = "/admin/reviews/{review_id}/approve",
    params(("review_id" = String, Path, description = "Id of the review.")),
    responses(
        (status = 200, description = "Acknowledged", body = NotificationDto)
    )
)]
pub async fn approve_review_handler(Path(review_id): Path<String>) -> Json<NotificationDto> {
    info!(%review_id, "Review approval clicked");
    Json(moderation_notification(ModerationDecision::Approve).into())
}

/// Acknowledges a rejection. The review is not changed.
#[utoipa::path(
    post,
    path = "/admin/reviews/{review_id}/reject",
    params(("review_id" = String, Path, description = "Id of the review.")),
    responses(
        (status = 200, description = "Acknowledged", body = NotificationDto)
    )
)]
pub async fn reject_review_handler(Path(review_id): Path<String>) -> Json<NotificationDto> {
    info!(%review_id, "Review rejection clicked");
    Json(moderation_notification(ModerationDecision::Reject).into())
}
