//! # API Router Configuration
//!
//! Configures API routes for the Keystone application.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Extension, Path, Query, State as AxumState},
    middleware,
    routing::{delete, get, post, put},
    Json,
    Router,
};
use error::Result;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{middleware::Actor, AppState};

/// Creates the API router with all routes
///
/// # Arguments
///
/// * `state` - Application state containing DB connection and verifier
///
/// # Returns
///
/// Configured Axum router with all routes
pub fn create_router(state: AppState) -> Router {
    // Protected routes that require an acting employee
    let protected_routes = Router::new()
        .route("/api/v1/auth/login-history", get(login_history_handler))
        .route("/api/v1/employees", get(list_employees_handler))
        .route("/api/v1/employees", post(create_employee_handler))
        .route("/api/v1/employees/{id}", put(update_employee_handler))
        .route("/api/v1/employees/{id}", delete(delete_employee_handler))
        .route("/api/v1/tasks", get(list_tasks_handler))
        .route("/api/v1/tasks", post(create_task_handler))
        .route("/api/v1/tasks/{id}", put(update_task_handler))
        .route("/api/v1/tasks/{id}", delete(delete_task_handler))
        .route("/api/v1/tasks/{id}/updates", post(add_task_update_handler))
        .route("/api/v1/leads", get(list_leads_handler))
        .route("/api/v1/leads", post(create_lead_handler))
        .route("/api/v1/leads/{id}", put(update_lead_handler))
        .route("/api/v1/leads/{id}", delete(delete_lead_handler))
        .route("/api/v1/leads/{id}/convert", post(convert_lead_handler))
        .route("/api/v1/customers", get(list_customers_handler))
        .route("/api/v1/customers", post(create_customer_handler))
        .route("/api/v1/customers/{id}", put(update_customer_handler))
        .route("/api/v1/customers/{id}", delete(delete_customer_handler))
        .route("/api/v1/notifications", get(list_notifications_handler))
        .route(
            "/api/v1/notifications/{id}/read",
            put(mark_notification_read_handler),
        )
        .route(
            "/api/v1/notifications/deadline-scan",
            post(run_deadline_scan_handler),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            crate::middleware::actor_middleware,
        ));

    // Public routes that don't require an acting employee
    let public_routes = Router::new().route("/api/v1/auth/login", post(login_handler));

    public_routes.merge(protected_routes).with_state(state)
}

/// Wrapper handler for login endpoint that uses State extractor
async fn login_handler(
    AxumState(state): AxumState<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Json(req): Json<crate::dto::auth::LoginRequest>,
) -> Result<Json<crate::dto::auth::LoginResponse>> {
    crate::handlers::auth::login_handler(&state, addr.ip().to_string(), req).await
}

/// Wrapper handler for the login-history audit trail
async fn login_history_handler(
    AxumState(state): AxumState<AppState>,
    Extension(actor): Extension<Actor>,
) -> Result<Json<crate::dto::auth::LoginHistoryResponse>> {
    crate::handlers::auth::list_login_history_handler(&state, actor).await
}

/// Wrapper handler for listing employees
async fn list_employees_handler(
    AxumState(state): AxumState<AppState>,
    Extension(actor): Extension<Actor>,
) -> Result<Json<crate::dto::employees::EmployeeListResponse>> {
    crate::handlers::employees::list_employees_handler(&state, actor).await
}

/// Wrapper handler for creating an employee
async fn create_employee_handler(
    AxumState(state): AxumState<AppState>,
    Extension(actor): Extension<Actor>,
    Json(req): Json<crate::dto::employees::CreateEmployeeRequest>,
) -> Result<Json<crate::dto::employees::EmployeeResponse>> {
    crate::handlers::employees::create_employee_handler(&state, actor, req).await
}

/// Wrapper handler for updating an employee
async fn update_employee_handler(
    AxumState(state): AxumState<AppState>,
    Extension(actor): Extension<Actor>,
    Path(employee_id): Path<String>,
    Json(req): Json<crate::dto::employees::UpdateEmployeeRequest>,
) -> Result<Json<crate::dto::employees::EmployeeResponse>> {
    crate::handlers::employees::update_employee_handler(&state, actor, &employee_id, req).await
}

/// Wrapper handler for deleting an employee
async fn delete_employee_handler(
    AxumState(state): AxumState<AppState>,
    Extension(actor): Extension<Actor>,
    Path(employee_id): Path<String>,
) -> Result<Json<error::SuccessResponse>> {
    crate::handlers::employees::delete_employee_handler(&state, actor, &employee_id).await
}

/// Wrapper handler for listing tasks visible to the actor
async fn list_tasks_handler(
    AxumState(state): AxumState<AppState>,
    Extension(actor): Extension<Actor>,
    Query(query): Query<crate::dto::tasks::TaskListQuery>,
) -> Result<Json<crate::dto::tasks::TaskListResponse>> {
    crate::handlers::tasks::list_tasks_handler(&state, actor, query).await
}

/// Wrapper handler for creating a task
async fn create_task_handler(
    AxumState(state): AxumState<AppState>,
    Extension(actor): Extension<Actor>,
    Json(req): Json<crate::dto::tasks::CreateTaskRequest>,
) -> Result<Json<crate::dto::tasks::TaskResponse>> {
    crate::handlers::tasks::create_task_handler(&state, actor, req).await
}

/// Wrapper handler for updating a task
async fn update_task_handler(
    AxumState(state): AxumState<AppState>,
    Extension(actor): Extension<Actor>,
    Path(task_id): Path<String>,
    Json(req): Json<crate::dto::tasks::UpdateTaskRequest>,
) -> Result<Json<crate::dto::tasks::TaskResponse>> {
    crate::handlers::tasks::update_task_handler(&state, actor, &task_id, req).await
}

/// Wrapper handler for deleting a task
async fn delete_task_handler(
    AxumState(state): AxumState<AppState>,
    Extension(actor): Extension<Actor>,
    Path(task_id): Path<String>,
) -> Result<Json<error::SuccessResponse>> {
    crate::handlers::tasks::delete_task_handler(&state, actor, &task_id).await
}

/// Wrapper handler for appending a task update
async fn add_task_update_handler(
    AxumState(state): AxumState<AppState>,
    Extension(actor): Extension<Actor>,
    Path(task_id): Path<String>,
    Json(req): Json<crate::dto::tasks::AddTaskUpdateRequest>,
) -> Result<Json<crate::dto::tasks::TaskResponse>> {
    crate::handlers::tasks::add_task_update_handler(&state, actor, &task_id, req).await
}

/// Wrapper handler for listing leads
async fn list_leads_handler(
    AxumState(state): AxumState<AppState>,
    Extension(actor): Extension<Actor>,
) -> Result<Json<crate::dto::leads::LeadListResponse>> {
    crate::handlers::leads::list_leads_handler(&state, actor).await
}

/// Wrapper handler for creating a lead
async fn create_lead_handler(
    AxumState(state): AxumState<AppState>,
    Extension(actor): Extension<Actor>,
    Json(req): Json<crate::dto::leads::CreateLeadRequest>,
) -> Result<Json<crate::dto::leads::LeadResponse>> {
    crate::handlers::leads::create_lead_handler(&state, actor, req).await
}

/// Wrapper handler for updating a lead
async fn update_lead_handler(
    AxumState(state): AxumState<AppState>,
    Extension(actor): Extension<Actor>,
    Path(lead_id): Path<String>,
    Json(req): Json<crate::dto::leads::UpdateLeadRequest>,
) -> Result<Json<crate::dto::leads::LeadResponse>> {
    crate::handlers::leads::update_lead_handler(&state, actor, &lead_id, req).await
}

/// Wrapper handler for deleting a lead
async fn delete_lead_handler(
    AxumState(state): AxumState<AppState>,
    Extension(actor): Extension<Actor>,
    Path(lead_id): Path<String>,
) -> Result<Json<error::SuccessResponse>> {
    crate::handlers::leads::delete_lead_handler(&state, actor, &lead_id).await
}

/// Wrapper handler for converting a lead into a customer
async fn convert_lead_handler(
    AxumState(state): AxumState<AppState>,
    Extension(actor): Extension<Actor>,
    Path(lead_id): Path<String>,
) -> Result<Json<crate::dto::customers::CustomerResponse>> {
    crate::handlers::leads::convert_lead_handler(&state, actor, &lead_id).await
}

/// Wrapper handler for listing customers
async fn list_customers_handler(
    AxumState(state): AxumState<AppState>,
    Extension(actor): Extension<Actor>,
) -> Result<Json<crate::dto::customers::CustomerListResponse>> {
    crate::handlers::customers::list_customers_handler(&state, actor).await
}

/// Wrapper handler for creating a customer
async fn create_customer_handler(
    AxumState(state): AxumState<AppState>,
    Extension(actor): Extension<Actor>,
    Json(req): Json<crate::dto::customers::CreateCustomerRequest>,
) -> Result<Json<crate::dto::customers::CustomerResponse>> {
    crate::handlers::customers::create_customer_handler(&state, actor, req).await
}

/// Wrapper handler for updating a customer
async fn update_customer_handler(
    AxumState(state): AxumState<AppState>,
    Extension(actor): Extension<Actor>,
    Path(customer_id): Path<String>,
    Json(req): Json<crate::dto::customers::UpdateCustomerRequest>,
) -> Result<Json<crate::dto::customers::CustomerResponse>> {
    crate::handlers::customers::update_customer_handler(&state, actor, &customer_id, req).await
}

/// Wrapper handler for deleting a customer
async fn delete_customer_handler(
    AxumState(state): AxumState<AppState>,
    Extension(actor): Extension<Actor>,
    Path(customer_id): Path<String>,
) -> Result<Json<error::SuccessResponse>> {
    crate::handlers::customers::delete_customer_handler(&state, actor, &customer_id).await
}

/// Wrapper handler for listing notifications visible to the actor
async fn list_notifications_handler(
    AxumState(state): AxumState<AppState>,
    Extension(actor): Extension<Actor>,
    Query(query): Query<crate::dto::notifications::NotificationListQuery>,
) -> Result<Json<crate::dto::notifications::NotificationListResponse>> {
    crate::handlers::notifications::list_notifications_handler(&state, actor, query).await
}

/// Wrapper handler for marking a notification read
async fn mark_notification_read_handler(
    AxumState(state): AxumState<AppState>,
    Extension(actor): Extension<Actor>,
    Path(notification_id): Path<String>,
) -> Result<Json<crate::dto::notifications::NotificationResponse>> {
    crate::handlers::notifications::mark_notification_read_handler(&state, actor, &notification_id)
        .await
}

/// Wrapper handler for running the deadline scan
async fn run_deadline_scan_handler(
    AxumState(state): AxumState<AppState>,
    Extension(actor): Extension<Actor>,
) -> Result<Json<crate::dto::notifications::NotificationListResponse>> {
    crate::handlers::notifications::run_deadline_scan_handler(&state, actor).await
}

/// Creates the health check router
pub fn create_health_router() -> Router { Router::new().route("/health", axum::routing::get(|| async { "OK" })) }

/// Creates the main application router
///
/// # Arguments
///
/// * `state` - Application state containing DB connection and verifier
///
/// # Returns
///
/// Main router with health checks, API routes, tracing and CORS
pub fn create_app_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(create_health_router())
        .merge(create_router(state))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
