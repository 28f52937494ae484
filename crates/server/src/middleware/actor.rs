//! # Actor Resolution Middleware
//!
//! Resolves the `X-Employee-Id` header into an employee row and stores it
//! in request extensions. Every access decision downstream keys off that
//! row, so requests without a resolvable actor never reach a handler.

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use entity::employees::Entity as EmployeesEntity;
use error::AppError;
use sea_orm::EntityTrait;
use serde_json::json;

use crate::AppState;

/// Header naming the acting employee.
pub const ACTOR_HEADER: &str = "X-Employee-Id";

/// The acting employee attached to each authenticated request.
pub type Actor = entity::employees::Model;

/// Load the acting employee and attach it to the request.
///
/// Rejects with a JSON 401 when the header is missing or names no known
/// employee. Database faults keep their 500 envelope.
pub async fn actor_middleware(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
    let Some(header) = request.headers().get(ACTOR_HEADER) else {
        return unauthorized("Missing X-Employee-Id header");
    };
    let Ok(employee_id) = header.to_str() else {
        return unauthorized("Malformed X-Employee-Id header");
    };

    let employee = match EmployeesEntity::find_by_id(employee_id).one(&state.db).await {
        Ok(found) => found,
        Err(err) => return AppError::from(err).into_response(),
    };

    let Some(actor) = employee else {
        return unauthorized("Unknown employee");
    };

    request.extensions_mut().insert(actor);
    next.run(request).await
}

/// JSON 401 envelope for rejected requests.
fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "success": false,
            "code": "UNAUTHORIZED",
            "message": message,
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_response_status() {
        let response = unauthorized("Missing X-Employee-Id header");
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_actor_header_name() {
        // The header name is part of the wire contract with every client
        assert_eq!(ACTOR_HEADER, "X-Employee-Id");
    }
}
