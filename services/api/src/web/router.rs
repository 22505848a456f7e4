//! services/api/src/web/router.rs
//!
//! Assembles the full route table behind the session gate.

use axum::{
    middleware as axum_middleware,
    response::Redirect,
    routing::{delete, get, post, put},
    Router,
};
use shelf_aware_core::navigation::BOOKSHELF_PATH;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::web::{
    admin::{
        add_book_handler, admin_view_handler, approve_review_handler, delete_book_handler,
        reject_review_handler, summarize_book_handler,
    },
    auth::{login_handler, login_view_handler, logout_handler},
    chat::{chat_view_handler, send_message_handler},
    middleware::gate,
    rest::{
        book_detail_handler, bookshelf_handler, profile_handler, submit_review_handler,
        update_progress_handler, ApiDoc,
    },
    state::AppState,
};

/// Unknown paths and wrong methods on known paths land on the bookshelf.
async fn back_to_bookshelf() -> Redirect {
    Redirect::to(BOOKSHELF_PATH)
}

/// Builds the application router. CORS is left to the binary.
pub fn app_router(app_state: Arc<AppState>) -> Router {
    let auth_routes = Router::new()
        .route("/login", get(login_view_handler).post(login_handler))
        .route("/logout", post(logout_handler));

    let reader_routes = Router::new()
        .route("/bookshelf", get(bookshelf_handler))
        .route("/book/{book_id}", get(book_detail_handler))
        .route("/book/{book_id}/progress", put(update_progress_handler))
        .route("/book/{book_id}/reviews", post(submit_review_handler))
        .route("/profile", get(profile_handler))
        .route("/chatbot", get(chat_view_handler))
        .route("/chatbot/messages", post(send_message_handler));

    let admin_routes = Router::new()
        .route("/admin", get(admin_view_handler))
        .route("/admin/books", post(add_book_handler))
        .route("/admin/books/{book_id}", delete(delete_book_handler))
        .route("/admin/books/{book_id}/summary", post(summarize_book_handler))
        .route("/admin/reviews/{review_id}/approve", post(approve_review_handler))
        .route("/admin/reviews/{review_id}/reject", post(reject_review_handler));

    // Every view, including the fallback, sits behind the gate.
    let gated = Router::new()
        .merge(auth_routes)
        .merge(reader_routes)
        .merge(admin_routes)
        .fallback(back_to_bookshelf)
        .method_not_allowed_fallback(back_to_bookshelf)
        .layer(axum_middleware::from_fn_with_state(app_state.clone(), gate))
        .with_state(app_state);

    Router::new()
        .merge(gated)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
}
