use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use folio_core_message_contracts::{
    MessageDeleteError, MessageFeatureService, MessageMarkReadError, MessageSubmitRequest,
};
use folio_models::message::{
    ContactEmailAddress, ContactEmailAddressError, ContactMessageAuthorName,
    ContactMessageAuthorNameError, ContactMessageContent, ContactMessageContentError, MessageId,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{error, internal_server_error};
use crate::models::message::ApiContactMessage;

pub fn router(service: Arc<impl MessageFeatureService>) -> Router<()> {
    Router::new()
        .route("/api/send-message", routing::post(submit))
        .route("/api/messages", routing::get(list))
        .route("/api/messages/:id/read", routing::put(mark_read))
        .route("/api/messages/:id", routing::delete(delete))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
struct SubmitMessageRequest {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    message: String,
}

#[derive(Serialize)]
struct SubmitMessageResponse {
    success: bool,
    message: &'static str,
    data: ApiContactMessage,
}

async fn submit(
    service: State<Arc<impl MessageFeatureService>>,
    Json(request): Json<SubmitMessageRequest>,
) -> Response {
    let name = match ContactMessageAuthorName::try_new(request.name) {
        Ok(name) => name,
        Err(ContactMessageAuthorNameError::NotEmptyViolated) => {
            return error(StatusCode::BAD_REQUEST, "Name is required")
        }
        Err(ContactMessageAuthorNameError::LenCharMaxViolated) => {
            return error(StatusCode::BAD_REQUEST, "Name is too long")
        }
    };

    let email = match ContactEmailAddress::try_new(request.email) {
        Ok(email) => email,
        Err(ContactEmailAddressError::NotEmptyViolated) => {
            return error(StatusCode::BAD_REQUEST, "Email is required")
        }
        Err(
            ContactEmailAddressError::LenCharMaxViolated
            | ContactEmailAddressError::PredicateViolated,
        ) => return error(StatusCode::BAD_REQUEST, "Please provide a valid email address"),
    };

    let message = match ContactMessageContent::try_new(request.message) {
        Ok(message) => message,
        Err(ContactMessageContentError::NotEmptyViolated) => {
            return error(StatusCode::BAD_REQUEST, "Message is required")
        }
        Err(ContactMessageContentError::LenCharMaxViolated) => {
            return error(StatusCode::BAD_REQUEST, "Message is too long")
        }
    };

    match service
        .submit(MessageSubmitRequest {
            name,
            email,
            message,
        })
        .await
    {
        Ok(created) => Json(SubmitMessageResponse {
            success: true,
            message: "Message sent successfully!",
            data: created.into(),
        })
        .into_response(),
        Err(err) => internal_server_error(err),
    }
}

#[derive(Serialize)]
struct ListMessagesResponse {
    success: bool,
    messages: Vec<ApiContactMessage>,
    count: usize,
}

async fn list(service: State<Arc<impl MessageFeatureService>>) -> Response {
    match service.list().await {
        Ok(messages) => {
            let messages = messages
                .into_iter()
                .map(Into::into)
                .collect::<Vec<ApiContactMessage>>();
            let count = messages.len();
            Json(ListMessagesResponse {
                success: true,
                messages,
                count,
            })
            .into_response()
        }
        Err(err) => internal_server_error(err),
    }
}

#[derive(Serialize)]
struct MessageActionResponse {
    success: bool,
    message: &'static str,
    data: ApiContactMessage,
}

async fn mark_read(
    service: State<Arc<impl MessageFeatureService>>,
    Path(message_id): Path<String>,
) -> Response {
    // Ids that do not even parse are treated like any other unknown id.
    let Ok(message_id) = message_id.parse::<Uuid>().map(MessageId::from) else {
        return error(StatusCode::NOT_FOUND, "Message not found");
    };

    match service.mark_read(message_id).await {
        Ok(updated) => Json(MessageActionResponse {
            success: true,
            message: "Message marked as read",
            data: updated.into(),
        })
        .into_response(),
        Err(MessageMarkReadError::NotFound) => error(StatusCode::NOT_FOUND, "Message not found"),
        Err(MessageMarkReadError::Other(err)) => internal_server_error(err),
    }
}

async fn delete(
    service: State<Arc<impl MessageFeatureService>>,
    Path(message_id): Path<String>,
) -> Response {
    let Ok(message_id) = message_id.parse::<Uuid>().map(MessageId::from) else {
        return error(StatusCode::NOT_FOUND, "Message not found");
    };

    match service.delete(message_id).await {
        Ok(deleted) => Json(MessageActionResponse {
            success: true,
            message: "Message deleted successfully",
            data: deleted.into(),
        })
        .into_response(),
        Err(MessageDeleteError::NotFound) => error(StatusCode::NOT_FOUND, "Message not found"),
        Err(MessageDeleteError::Other(err)) => internal_server_error(err),
    }
}
