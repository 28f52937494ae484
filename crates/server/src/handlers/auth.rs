//! # Auth Handlers
//!
//! Login verification and the login-history audit trail. Login never
//! leaks the failure reason to the client; both verdicts come back as
//! HTTP 200 and the details land in the audit table instead.

use axum::Json;
use chrono::Utc;
use entity::login_history::{Column as HistoryColumn, Entity as LoginHistoryEntity};
use error::{AppError, Result};
use logging::log_auth_event;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use tracing::warn;
use validator::Validate;

use crate::{
    dto::auth::{LoginHistoryEntry, LoginHistoryResponse, LoginRequest, LoginResponse},
    middleware::Actor,
    AppState,
};

/// Outcome message for an accepted credential pair.
const LOGIN_OK_MESSAGE: &str = "Login successful";

/// Outcome message for a rejected credential pair.
const LOGIN_FAILED_MESSAGE: &str = "Invalid credentials";

/// Verify a credential pair and record the attempt
///
/// Every attempt is written to the audit trail with the caller's IP,
/// whether it succeeded or not. The verdict travels in the body; the
/// status code stays 200 for both outcomes.
pub async fn login_handler(
    state: &AppState,
    client_ip: String,
    req: LoginRequest,
) -> Result<Json<LoginResponse>> {
    req.validate().map_err(|e| AppError::Validation {
        message: e.to_string(),
    })?;

    let accepted = state.verifier.verify(&req.mobile, &req.password).await?;

    let attempt = entity::login_history::ActiveModel {
        id:        Set(cuid2::create_id()),
        mobile:    Set(req.mobile.clone()),
        success:   Set(accepted),
        ip:        Set(client_ip),
        timestamp: Set(Utc::now()),
    };
    attempt
        .insert(&state.db)
        .await
        .map_err(|e| AppError::database(format!("Failed to record login attempt: {}", e)))?;

    log_auth_event!("login", req.mobile, accepted);

    let message = if accepted {
        LOGIN_OK_MESSAGE
    }
    else {
        LOGIN_FAILED_MESSAGE
    };

    Ok(Json(LoginResponse {
        success: accepted,
        message: message.to_string(),
    }))
}

/// List recorded login attempts, newest first
///
/// Restricted to managers; the trail covers failed attempts too, so it
/// is not for general eyes.
pub async fn list_login_history_handler(
    state: &AppState,
    actor: Actor,
) -> Result<Json<LoginHistoryResponse>> {
    if !auth::can_view_login_history(&actor.role) {
        warn!(actor = %actor.id, "Login history access denied");
        return Err(AppError::forbidden(
            "You do not have permission to view login history",
        ));
    }

    let attempts = LoginHistoryEntity::find()
        .order_by_desc(HistoryColumn::Timestamp)
        .order_by_asc(HistoryColumn::Id)
        .all(&state.db)
        .await
        .map_err(|e| AppError::database(format!("Failed to fetch login history: {}", e)))?;

    let history = attempts.iter().map(history_model_to_entry).collect();

    Ok(Json(LoginHistoryResponse {
        success: true,
        history,
    }))
}

/// Convert a login-history entity model to a response DTO
fn history_model_to_entry(attempt: &entity::login_history::Model) -> LoginHistoryEntry {
    LoginHistoryEntry {
        id:        attempt.id.clone(),
        mobile:    attempt.mobile.clone(),
        success:   attempt.success,
        ip:        attempt.ip.clone(),
        timestamp: attempt.timestamp.to_rfc3339(),
    }
}
