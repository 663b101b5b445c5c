//! Handlers for the `/workers` resource: register/login/logout plus CRUD.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use crm_core::error::CoreError;
use crm_core::pagination::{clamp_page, clamp_per_page, page_count};
use crm_core::types::DbId;
use crm_core::validate::RequiredFields;
use crm_db::models::worker::{
    ListWorkersParams, NewWorker, UpdateWorker, WorkerResponse,
};
use crm_db::repositories::WorkerRepo;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthWorker;
use crate::response::{CreatedResponse, MessageResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /workers/register`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub position: Option<String>,
}

/// Request body for `POST /workers/login`.
///
/// Fields are `Option` so a missing credential yields 401, not a
/// deserialization error.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Response body for a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
}

/// Request body for `POST /workers` (no credentials; such workers
/// cannot log in until a password is set out of band).
#[derive(Debug, Deserialize)]
pub struct CreateWorkerRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub position: Option<String>,
}

/// Response body for `GET /workers`.
#[derive(Debug, Serialize)]
pub struct WorkerListResponse {
    pub workers: Vec<WorkerResponse>,
    pub total: i64,
    pub pages: i64,
    pub current_page: i64,
}

// ---------------------------------------------------------------------------
// Auth handlers (public except logout)
// ---------------------------------------------------------------------------

/// POST /workers/register
///
/// Create a worker account with a hashed password. Public.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<impl IntoResponse> {
    RequiredFields::new()
        .text("username", input.username.as_deref())
        .text("password", input.password.as_deref())
        .check()?;

    let username = input.username.as_deref().unwrap_or_default();

    if WorkerRepo::find_by_username(&state.pool, username)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "Username already exists".into(),
        )));
    }

    let password_hash = hash_password(input.password.as_deref().unwrap_or_default())
        .map_err(|e| AppError::Internal(format!("Password hashing error: {e}")))?;

    let worker = WorkerRepo::create(
        &state.pool,
        &NewWorker {
            username: username.to_string(),
            email: None,
            position: input.position.clone(),
            password_hash: Some(password_hash),
        },
    )
    .await?;

    tracing::info!(worker_id = worker.id, "Worker registered");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id: worker.id,
            message: "Worker registered successfully",
        }),
    ))
}

/// POST /workers/login
///
/// Verify credentials and issue a bearer token. The same 401 is
/// returned for an unknown username and a wrong password.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let invalid = || AppError::Core(CoreError::Unauthorized("Invalid credentials".into()));

    let (username, password) = match (input.username.as_deref(), input.password.as_deref()) {
        (Some(u), Some(p)) => (u, p),
        _ => return Err(invalid()),
    };

    let worker = WorkerRepo::find_by_username(&state.pool, username)
        .await?
        .ok_or_else(invalid)?;

    let hash = worker.password_hash.as_deref().ok_or_else(invalid)?;

    let password_valid = verify_password(password, hash)
        .map_err(|e| AppError::Internal(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(invalid());
    }

    let access_token =
        generate_access_token(worker.id, worker.position.as_deref(), &state.config.jwt)
            .map_err(|e| AppError::Internal(format!("Token generation error: {e}")))?;

    tracing::info!(worker_id = worker.id, "Worker logged in");

    Ok(Json(LoginResponse { access_token }))
}

/// POST /workers/logout
///
/// Server-side no-op: tokens are bearer credentials the client simply
/// discards. Requires a valid token so idle clients get a 401 hint.
pub async fn logout(worker: AuthWorker) -> AppResult<impl IntoResponse> {
    tracing::info!(worker_id = worker.worker_id, "Worker logged out");

    Ok(Json(MessageResponse { message: "Logged out" }))
}

// ---------------------------------------------------------------------------
// CRUD handlers
// ---------------------------------------------------------------------------

/// GET /workers
///
/// List workers with an optional position filter and pagination.
pub async fn list_workers(
    _auth: AuthWorker,
    State(state): State<AppState>,
    Query(params): Query<ListWorkersParams>,
) -> AppResult<impl IntoResponse> {
    let (workers, total) = WorkerRepo::list(&state.pool, &params).await?;

    Ok(Json(WorkerListResponse {
        workers: workers.into_iter().map(WorkerResponse::from).collect(),
        total,
        pages: page_count(total, clamp_per_page(params.per_page)),
        current_page: clamp_page(params.page),
    }))
}

/// GET /workers/{id}
pub async fn get_worker(
    _auth: AuthWorker,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let worker = WorkerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Worker",
            id,
        }))?;

    Ok(Json(WorkerResponse::from(worker)))
}

/// POST /workers
///
/// Create a worker without credentials. Requires username, email, position.
pub async fn create_worker(
    _auth: AuthWorker,
    State(state): State<AppState>,
    Json(input): Json<CreateWorkerRequest>,
) -> AppResult<impl IntoResponse> {
    RequiredFields::new()
        .text("username", input.username.as_deref())
        .text("email", input.email.as_deref())
        .text("position", input.position.as_deref())
        .check()?;

    let username = input.username.as_deref().unwrap_or_default();
    let email = input.email.as_deref().unwrap_or_default();

    if WorkerRepo::find_by_username(&state.pool, username)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "Username already exists".into(),
        )));
    }

    if WorkerRepo::find_by_email(&state.pool, email).await?.is_some() {
        return Err(AppError::Core(CoreError::Conflict(
            "Worker with this email already exists".into(),
        )));
    }

    let worker = WorkerRepo::create(
        &state.pool,
        &NewWorker {
            username: username.to_string(),
            email: Some(email.to_string()),
            position: input.position.clone(),
            password_hash: None,
        },
    )
    .await?;

    tracing::info!(worker_id = worker.id, "Worker created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id: worker.id,
            message: "Worker created successfully",
        }),
    ))
}

/// PUT /workers/{id}
///
/// Partial update. A changed email is re-checked for uniqueness against
/// other workers before the write; the unique constraint backstops races.
pub async fn update_worker(
    _auth: AuthWorker,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateWorker>,
) -> AppResult<impl IntoResponse> {
    if let Some(email) = input.email.as_deref() {
        if WorkerRepo::find_by_email_excluding(&state.pool, email, id)
            .await?
            .is_some()
        {
            return Err(AppError::Core(CoreError::Conflict(
                "Worker with this email already exists".into(),
            )));
        }
    }

    WorkerRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Worker",
            id,
        }))?;

    Ok(Json(MessageResponse {
        message: "Worker updated successfully",
    }))
}

/// DELETE /workers/{id}
pub async fn delete_worker(
    _auth: AuthWorker,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = WorkerRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Worker",
            id,
        }));
    }

    tracing::info!(worker_id = id, "Worker deleted");

    Ok(Json(MessageResponse {
        message: "Worker deleted successfully",
    }))
}
