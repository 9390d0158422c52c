//! HTTP handlers and error mapping
//!
//! Each handler is a thin shim: decode the request, call the matching
//! service operation, encode the result. All business rules live in
//! [`crate::core`]; the only logic here is the mapping from [`CoreError`]
//! kinds to HTTP status codes.

use super::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use crate::types::{
    Account, AccountId, AccountStatus, CoreError, RegisterRequest, TransferReceipt,
    TransferRequest,
};

/// Login payload: any contact channel plus the plaintext PIN
#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    pub identifier: String,
    pub pin: String,
}

/// Status-update payload for `PUT /users/:id`
#[derive(Debug, Deserialize)]
pub struct StatusPayload {
    pub status: AccountStatus,
}

/// A `CoreError` carried to the HTTP boundary
///
/// Converts into a JSON `{"message": ...}` body with the status code the
/// error kind maps to.
pub struct ApiError(CoreError);

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        ApiError(error)
    }
}

/// Map an error kind to its HTTP status code
///
/// Validation and business-rule rejections are 400, credential failures
/// 401, lookup misses 404, registration clashes 409, and store faults 500.
pub fn status_for(error: &CoreError) -> StatusCode {
    match error {
        CoreError::Validation { .. }
        | CoreError::InvalidTransfer { .. }
        | CoreError::InsufficientBalance { .. } => StatusCode::BAD_REQUEST,
        CoreError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        CoreError::SenderNotFound { .. }
        | CoreError::ReceiverNotFound { .. }
        | CoreError::NotFound => StatusCode::NOT_FOUND,
        CoreError::Conflict { .. } => StatusCode::CONFLICT,
        CoreError::TransferFailed { .. }
        | CoreError::StoreUnavailable { .. }
        | CoreError::HashingFailed => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        // Deterministic rejections are the caller's problem; operational
        // faults are ours, so those are the ones worth logging.
        if !self.0.is_deterministic() {
            warn!(error = %self.0, "request failed with operational fault");
        }
        (status, Json(json!({ "message": self.0.to_string() }))).into_response()
    }
}

/// `GET /` - liveness banner
pub async fn root() -> &'static str {
    "Taka core is running"
}

/// `POST /users` - register a new account
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<Account>), ApiError> {
    let account = state.auth.register(request).await?;
    Ok((StatusCode::CREATED, Json(account)))
}

/// `POST /login` - authenticate and return the account record
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let account = state.auth.login(&payload.identifier, &payload.pin).await?;
    Ok(Json(json!({ "user": account })))
}

/// `POST /transfer` - move balance between two accounts
pub async fn transfer(
    State(state): State<AppState>,
    Json(request): Json<TransferRequest>,
) -> Result<Json<TransferReceipt>, ApiError> {
    let receipt = state
        .transfers
        .transfer(&request.sender, &request.receiver, request.amount, &request.pin)
        .await?;
    Ok(Json(receipt))
}

/// `GET /users` - list all accounts
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<Account>>, ApiError> {
    Ok(Json(state.admin.list().await?))
}

/// `PUT /users/:id` - update account status
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<AccountId>,
    Json(payload): Json<StatusPayload>,
) -> Result<Json<Account>, ApiError> {
    let account = state.admin.update_status(&id, payload.status).await?;
    Ok(Json(account))
}

/// `DELETE /users/:id` - remove an account
///
/// Responds 200 with `{"deleted": false}` for an unknown id; deletion is
/// a no-op there, not an error.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<AccountId>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let deleted = state.admin.delete(&id).await?;
    Ok(Json(json!({ "deleted": deleted })))
}
