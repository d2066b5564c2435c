//! Member HTTP Routes
//!
//! The five CRUD endpoints for member records. Write operations validate
//! the body first; every operation then runs exactly one store call, so a
//! request never holds more than one database connection.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;

use crate::db::{DeleteOutcome, MemberStore};
use crate::schema::{MemberDraft, MemberRecord};

use super::errors::{ApiError, ApiResult};

// ==================
// Shared State
// ==================

/// Member state shared across handlers
#[derive(Clone)]
pub struct MemberState {
    pub store: Arc<dyn MemberStore>,
}

impl MemberState {
    pub fn new(store: Arc<dyn MemberStore>) -> Self {
        Self { store }
    }
}

// ==================
// Response Types
// ==================

/// Plain confirmation message
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

// ==================
// Member Routes
// ==================

/// Create member routes
pub fn member_routes(state: MemberState) -> Router {
    Router::new()
        .route("/members", get(list_members_handler))
        .route("/members", post(add_member_handler))
        .route("/members/{id}", get(get_member_handler))
        .route("/members/{id}", put(update_member_handler))
        .route("/members/{id}", delete(remove_member_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

/// List all members
async fn list_members_handler(
    State(state): State<MemberState>,
) -> ApiResult<Json<Vec<MemberRecord>>> {
    let members = state.store.list_members().await?;
    Ok(Json(members))
}

/// Get a single member by id
async fn get_member_handler(
    State(state): State<MemberState>,
    Path(id): Path<u64>,
) -> ApiResult<Json<MemberRecord>> {
    let member = state
        .store
        .find_member(id)
        .await?
        .ok_or(ApiError::MemberNotFound)?;
    Ok(Json(member))
}

/// Add a new member
async fn add_member_handler(
    State(state): State<MemberState>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let draft = MemberDraft::from_json(&body).map_err(ApiError::Validation)?;
    state.store.insert_member(&draft).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("New member added successfully")),
    ))
}

/// Update name and age for a member
///
/// No existence check: an id with no row updates nothing but still reports
/// success, and the 201 status is reused for updates.
async fn update_member_handler(
    State(state): State<MemberState>,
    Path(id): Path<u64>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let draft = MemberDraft::from_json(&body).map_err(ApiError::Validation)?;
    state.store.update_member(id, &draft).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Member Updated successfully")),
    ))
}

/// Remove a member unless a workout session still references it
async fn remove_member_handler(
    State(state): State<MemberState>,
    Path(id): Path<u64>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    match state.store.remove_member(id).await? {
        DeleteOutcome::Removed => Ok((
            StatusCode::OK,
            Json(MessageResponse::new("Member removed successfully")),
        )),
        DeleteOutcome::NotFound => Err(ApiError::MemberNotFound),
        DeleteOutcome::SessionExists => Err(ApiError::SessionExists),
    }
}
