//! services/api/src/web/chat.rs
//!
//! Handlers for the recommendation chat. The transcript belongs to the session
//! and grows by one user turn and one assistant turn per send.

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Json, Response},
    Extension,
};
use shelf_aware_core::chat::{effective_emotions, user_message_content};
use shelf_aware_core::domain::{AuthSession, ChatMessage, ChatRole};
use shelf_aware_core::review::dedup_tags;
use std::sync::Arc;
use tracing::info;

use crate::web::protocol::{
    ChatMessageDto, ChatViewDto, SendMessageRequest, SendMessageResponse, ShellDto,
};
use crate::web::rest::{emotion_tags, port_failure, HandlerError};
use crate::web::state::AppState;

/// The conversation so far and the emotion picker.
#[utoipa::path(
    get,
    path = "/chatbot",
    responses(
        (status = 200, description = "Chat transcript", body = ChatViewDto)
    )
)]
pub async fn chat_view_handler(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<AuthSession>,
    uri: Uri,
) -> Result<Json<ChatViewDto>, HandlerError> {
    let messages = state
        .sessions
        .chat_transcript(&session.id)
        .await
        .map_err(|e| port_failure("Loading transcript", e))?;

    Ok(Json(ChatViewDto {
        shell: ShellDto::new(session.role, uri.path()),
        messages: messages.into_iter().map(ChatMessageDto::from).collect(),
        emotion_tags: emotion_tags(),
    }))
}

/// Sends one turn and waits for the assistant's reply.
///
/// A blank message with no emotion selected is ignored.
#[utoipa::path(
    post,
    path = "/chatbot/messages",
    request_body = SendMessageRequest,
    responses(
        (status = 200, description = "The sent turn and the assistant's reply", body = SendMessageResponse),
        (status = 204, description = "Nothing to send")
    )
)]
pub async fn send_message_handler(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<AuthSession>,
    Json(req): Json<SendMessageRequest>,
) -> Result<Response, HandlerError> {
    let emotions = dedup_tags(req.emotions);
    let Some(content) = user_message_content(&req.message, &emotions) else {
        return Ok(StatusCode::NO_CONTENT.into_response());
    };

    // 1. Record the reader's turn
    let sent = ChatMessage::new(ChatRole::User, content);
    state
        .sessions
        .append_chat_message(&session.id, sent.clone())
        .await
        .map_err(|e| port_failure("Saving message", e))?;

    // 2. Wait for the assistant
    let reply_text = state
        .assistant
        .reply(&req.message, &effective_emotions(&emotions))
        .await
        .map_err(|e| port_failure("Generating reply", e))?;
    info!(?emotions, "Assistant replied");

    // 3. Record the reply
    let reply = ChatMessage::new(ChatRole::Assistant, reply_text);
    state
        .sessions
        .append_chat_message(&session.id, reply.clone())
        .await
        .map_err(|e| port_failure("Saving reply", e))?;

    Ok(Json(SendMessageResponse {
        sent: sent.into(),
        reply: reply.into(),
    })
    .into_response())
}
