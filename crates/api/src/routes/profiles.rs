//! User-profile routes.
//!
//! `PATCH /profile` is the entry point for the salary trigger: when the
//! salary changes to a positive value, an income transaction is recorded
//! alongside the profile write and surfaced in the response.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info};
use uuid::Uuid;

use crate::{AppState, error_response, middleware::AuthUser};
use fintrack_db::UserRepository;
use fintrack_db::entities::user_profiles;
use fintrack_db::repositories::profile::{ProfileRepository, SalaryUpdate};
use fintrack_shared::AppError;

/// Creates the profile routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/profile", get(get_profile))
        .route("/profile", post(create_profile))
        .route("/profile", patch(update_profile))
}

/// Request body for creating or updating a profile.
#[derive(Debug, Deserialize)]
pub struct ProfileRequest {
    /// Monthly salary.
    pub salary: Decimal,
}

/// Response for a profile.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    /// Profile ID.
    pub id: Uuid,
    /// Monthly salary.
    pub salary: Decimal,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<user_profiles::Model> for ProfileResponse {
    fn from(model: user_profiles::Model) -> Self {
        Self {
            id: model.id,
            salary: model.salary,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

fn salary_update_body(update: SalaryUpdate) -> serde_json::Value {
    let transaction = update.transaction.map(|t| {
        json!({
            "id": t.id,
            "amount": t.amount,
            "description": t.description,
        })
    });

    json!({
        "profile": ProfileResponse::from(update.profile),
        "salary_transaction": transaction,
    })
}

/// Looks up the requester's username, needed for the salary description.
async fn requester_username(
    state: &AppState,
    user_id: Uuid,
) -> Result<String, axum::response::Response> {
    let user_repo = UserRepository::new((*state.db).clone());
    match user_repo.find_by_id(user_id).await {
        Ok(Some(user)) => Ok(user.username),
        Ok(None) => Err(error_response(AppError::NotFound(
            "User not found.".to_string(),
        ))),
        Err(e) => {
            error!(error = %e, "Failed to load user");
            Err(error_response(AppError::Database(e.to_string())))
        }
    }
}

/// GET /profile - Fetch the requester's profile.
async fn get_profile(State(state): State<AppState>, auth: AuthUser) -> impl IntoResponse {
    let profile_repo = ProfileRepository::new((*state.db).clone());

    match profile_repo.get_for_user(auth.user_id()).await {
        Ok(profile) => (StatusCode::OK, Json(ProfileResponse::from(profile))).into_response(),
        Err(e) => error_response(AppError::from(e)),
    }
}

/// POST /profile - Create a profile; conflicts when one already exists.
async fn create_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<ProfileRequest>,
) -> impl IntoResponse {
    let profile_repo = ProfileRepository::new((*state.db).clone());

    let username = match requester_username(&state, auth.user_id()).await {
        Ok(u) => u,
        Err(response) => return response,
    };

    match profile_repo
        .create_for_user(auth.user_id(), &username, payload.salary)
        .await
    {
        Ok(update) => {
            info!(user_id = %auth.user_id(), "Profile created");
            (StatusCode::CREATED, Json(salary_update_body(update))).into_response()
        }
        Err(e) => error_response(AppError::from(e)),
    }
}

/// PATCH /profile - Set the salary and fire the salary trigger.
async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<ProfileRequest>,
) -> impl IntoResponse {
    let profile_repo = ProfileRepository::new((*state.db).clone());

    let username = match requester_username(&state, auth.user_id()).await {
        Ok(u) => u,
        Err(response) => return response,
    };

    match profile_repo
        .set_salary(auth.user_id(), &username, payload.salary)
        .await
    {
        Ok(update) => {
            info!(
                user_id = %auth.user_id(),
                fired = update.transaction.is_some(),
                "Salary updated"
            );
            (StatusCode::OK, Json(salary_update_body(update))).into_response()
        }
        Err(e) => error_response(AppError::from(e)),
    }
}
