//! End-to-end checks of the router: session gate, redirects, and view payloads.

use api_lib::{config::Config, web::app_router, web::state::AppState};
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use shelf_aware_core::fixtures::Library;
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> Router {
    let state = AppState::in_memory(Arc::new(Config::instant()), Library::seeded());
    app_router(Arc::new(state))
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    cookie: Option<&str>,
    body: Option<Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

/// Signs in on the given tab and returns the `session=<id>` cookie pair.
async fn sign_in(app: &Router, tab: &str) -> String {
    let response = send(
        app,
        "POST",
        "/login",
        None,
        Some(json!({ "email": "sarah@example.com", "password": "x", "tab": tab })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap();
    set_cookie.split(';').next().unwrap().to_string()
}

#[tokio::test]
async fn login_lands_on_the_page_for_the_chosen_tab() {
    let app = app();

    let response = send(&app, "POST", "/login", None, Some(json!({ "tab": "admin" }))).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin");
    let cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(cookie.starts_with("session="));
    assert!(cookie.contains("HttpOnly"));

    let response = send(&app, "POST", "/login", None, Some(json!({}))).await;
    assert_eq!(location(&response), "/bookshelf");
}

#[tokio::test]
async fn anonymous_visitors_are_redirected_to_login() {
    let app = app();
    for path in ["/", "/bookshelf", "/book/1", "/profile", "/chatbot", "/admin", "/nowhere"] {
        let response = send(&app, "GET", path, None, None).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{path}");
        assert_eq!(location(&response), "/login", "{path}");
    }

    let response = send(&app, "GET", "/login", None, None).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_or_stale_cookie_counts_as_anonymous() {
    let app = app();
    let response = send(&app, "GET", "/bookshelf", Some("session=forged"), None).await;
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn signed_in_users_skip_login_and_unknown_paths() {
    let app = app();
    let cookie = sign_in(&app, "user").await;

    for path in ["/", "/login", "/nowhere", "/book"] {
        let response = send(&app, "GET", path, Some(&cookie), None).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{path}");
        assert_eq!(location(&response), "/bookshelf", "{path}");
    }
}

#[tokio::test]
async fn wrong_method_on_a_known_path_lands_on_the_bookshelf() {
    let app = app();
    let admin = sign_in(&app, "admin").await;
    let reader = sign_in(&app, "user").await;

    let response = send(&app, "GET", "/admin/books", Some(&admin), None).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/bookshelf");

    let response = send(&app, "GET", "/book/1/progress", Some(&reader), None).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/bookshelf");

    let response = send(&app, "GET", "/book/1/progress", None, None).await;
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn admin_panel_is_closed_to_readers() {
    let app = app();
    let reader = sign_in(&app, "user").await;
    let admin = sign_in(&app, "admin").await;

    let response = send(&app, "GET", "/admin", Some(&reader), None).await;
    assert_eq!(location(&response), "/bookshelf");
    let response = send(&app, "POST", "/admin/books", Some(&reader), Some(json!({}))).await;
    assert_eq!(location(&response), "/bookshelf");

    let response = send(&app, "GET", "/admin", Some(&admin), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let view = json_body(response).await;
    assert_eq!(view["book_count"], 6);
    assert_eq!(view["shell"]["role"], "admin");
    assert_eq!(view["shell"]["nav"][0]["label"], "Admin Panel");
}

#[tokio::test]
async fn bookshelf_splits_the_catalog_by_status() {
    let app = app();
    let cookie = sign_in(&app, "user").await;

    let response = send(&app, "GET", "/bookshelf", Some(&cookie), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let view = json_body(response).await;
    assert_eq!(view["all"]["count"], 6);
    assert_eq!(view["reading"]["count"], 2);
    assert_eq!(view["completed"]["count"], 1);
    assert_eq!(view["want_to_read"]["count"], 1);
    assert_eq!(view["genres"].as_array().unwrap().len(), 9);

    let response = send(&app, "GET", "/bookshelf?q=HABITS", Some(&cookie), None).await;
    let view = json_body(response).await;
    assert_eq!(view["all"]["count"], 1);
    assert_eq!(view["all"]["books"][0]["book"]["title"], "Atomic Habits");
}

#[tokio::test]
async fn unknown_genre_filters_everything_out() {
    let app = app();
    let cookie = sign_in(&app, "user").await;

    let response = send(&app, "GET", "/bookshelf?genre=Poetry", Some(&cookie), None).await;
    let view = json_body(response).await;
    assert_eq!(view["all"]["count"], 0);
    assert_eq!(view["reading"]["count"], 0);
}

#[tokio::test]
async fn missing_book_is_a_not_found_view() {
    let app = app();
    let cookie = sign_in(&app, "user").await;

    let response = send(&app, "GET", "/book/99", Some(&cookie), None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert_eq!(body["message"], "Book not found");
}

#[tokio::test]
async fn progress_slider_is_clamped_and_remembered_per_session() {
    let app = app();
    let cookie = sign_in(&app, "user").await;

    let response = send(
        &app,
        "PUT",
        "/book/1/progress",
        Some(&cookie),
        Some(json!({ "progress": 150 })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["progress"], 100);
    assert_eq!(body["notification"]["message"], "Progress updated to 100%");

    let detail = json_body(send(&app, "GET", "/book/1", Some(&cookie), None).await).await;
    assert_eq!(detail["slider"], 100);
    assert_eq!(detail["progress"]["progress"], 65);

    let other = sign_in(&app, "user").await;
    let detail = json_body(send(&app, "GET", "/book/1", Some(&other), None).await).await;
    assert_eq!(detail["slider"], 65);
}

#[tokio::test]
async fn incomplete_reviews_are_rejected() {
    let app = app();
    let cookie = sign_in(&app, "user").await;

    let response = send(
        &app,
        "POST",
        "/book/1/reviews",
        Some(&cookie),
        Some(json!({ "rating": 0, "emotions": ["Hopeful"] })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json_body(response).await["message"], "Please select a rating");

    let response = send(
        &app,
        "POST",
        "/book/1/reviews",
        Some(&cookie),
        Some(json!({ "rating": 4, "emotions": [] })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        json_body(response).await["message"],
        "Please select at least one emotion"
    );

    let response = send(
        &app,
        "POST",
        "/book/1/reviews",
        Some(&cookie),
        Some(json!({ "rating": 4, "emotions": ["Hopeful"], "content": "" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["notification"]["message"], "Review submitted successfully!");
    assert_eq!(body["review"]["book_id"], "1");
}

#[tokio::test]
async fn profile_reports_the_reader_statistics() {
    let app = app();
    let cookie = sign_in(&app, "user").await;

    let response = send(&app, "GET", "/profile", Some(&cookie), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let profile = json_body(response).await;
    assert_eq!(profile["initials"], "SJ");
    assert_eq!(profile["total_books"], 4);
    assert_eq!(profile["completed"], 1);
    assert_eq!(profile["currently_reading"], 2);
    assert_eq!(profile["mood_chart"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn chat_appends_a_turn_and_a_reply() {
    let app = app();
    let cookie = sign_in(&app, "user").await;

    let view = json_body(send(&app, "GET", "/chatbot", Some(&cookie), None).await).await;
    assert_eq!(view["messages"].as_array().unwrap().len(), 1);
    assert_eq!(view["messages"][0]["role"], "assistant");

    let response = send(
        &app,
        "POST",
        "/chatbot/messages",
        Some(&cookie),
        Some(json!({ "message": "", "emotions": ["Sad"] })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["sent"]["content"], "Feeling: Sad");
    assert!(body["reply"]["content"]
        .as_str()
        .unwrap()
        .starts_with("I understand you're feeling Sad."));

    let view = json_body(send(&app, "GET", "/chatbot", Some(&cookie), None).await).await;
    assert_eq!(view["messages"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn blank_chat_message_is_ignored() {
    let app = app();
    let cookie = sign_in(&app, "user").await;

    let response = send(
        &app,
        "POST",
        "/chatbot/messages",
        Some(&cookie),
        Some(json!({ "message": "   ", "emotions": [] })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let view = json_body(send(&app, "GET", "/chatbot", Some(&cookie), None).await).await;
    assert_eq!(view["messages"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn added_book_with_unparseable_price_costs_nothing() {
    let app = app();
    let admin = sign_in(&app, "admin").await;

    let response = send(
        &app,
        "POST",
        "/admin/books",
        Some(&admin),
        Some(json!({
            "title": "Dune",
            "author": "Frank Herbert",
            "genre": "Science Fiction, ",
            "abstract": "Spice.",
            "price": "free"
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response).await;
    assert_eq!(body["notification"]["message"], "Book added successfully!");
    assert_eq!(body["book"]["price"], 0.0);
    assert_eq!(body["book"]["condition"], "New");
    assert_eq!(body["book"]["genres"], json!(["Science Fiction"]));

    let view = json_body(send(&app, "GET", "/admin", Some(&admin), None).await).await;
    assert_eq!(view["book_count"], 7);

    let other = sign_in(&app, "admin").await;
    let view = json_body(send(&app, "GET", "/admin", Some(&other), None).await).await;
    assert_eq!(view["book_count"], 6);
}

#[tokio::test]
async fn deleting_and_summarising_admin_books() {
    let app = app();
    let admin = sign_in(&app, "admin").await;

    let response = send(&app, "POST", "/admin/books/2/summary", Some(&admin), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let summary = body["book"]["abstract"].as_str().unwrap();
    assert!(summary.starts_with("AI-Generated Summary: This highly acclaimed book has received 4.8 stars"));

    let response = send(&app, "DELETE", "/admin/books/2", Some(&admin), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await["message"],
        "Book deleted successfully!"
    );
    let view = json_body(send(&app, "GET", "/admin", Some(&admin), None).await).await;
    assert_eq!(view["book_count"], 5);

    let response = send(&app, "POST", "/admin/books/2/summary", Some(&admin), None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn moderation_actions_only_acknowledge() {
    let app = app();
    let admin = sign_in(&app, "admin").await;

    let response = send(&app, "POST", "/admin/reviews/r1/approve", Some(&admin), None).await;
    assert_eq!(json_body(response).await["message"], "Review approved");
    let response = send(&app, "POST", "/admin/reviews/r1/reject", Some(&admin), None).await;
    assert_eq!(json_body(response).await["message"], "Review rejected");
}

#[tokio::test]
async fn logout_ends_the_session() {
    let app = app();
    let cookie = sign_in(&app, "user").await;

    let response = send(&app, "POST", "/logout", Some(&cookie), None).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
    let cleared = response.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(cleared.contains("Max-Age=0"));

    let response = send(&app, "GET", "/bookshelf", Some(&cookie), None).await;
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn openapi_document_is_public() {
    let app = app();
    let response = send(&app, "GET", "/api-docs/openapi.json", None, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let doc = json_body(response).await;
    assert!(doc["paths"]["/bookshelf"].is_object());
}
