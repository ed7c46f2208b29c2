//! Wallet routes.
//!
//! A wallet's lifecycle is tied to its user: it is created at
//! registration and its balance moves only through the ledger. The write
//! verbs therefore reject explicitly instead of disappearing from the
//! router, so clients get a reason rather than a bare 405.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, patch, post},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

use crate::{AppState, error_response, middleware::AuthUser};
use fintrack_db::WalletRepository;
use fintrack_shared::AppError;

/// Creates the wallet routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/wallets", get(list_wallets))
        .route("/wallets", post(create_wallet))
        .route("/wallets/{wallet_id}", get(get_wallet))
        .route("/wallets/{wallet_id}", patch(update_wallet))
        .route("/wallets/{wallet_id}", delete(delete_wallet))
}

/// Response for a wallet.
#[derive(Debug, Serialize)]
pub struct WalletResponse {
    /// Wallet ID.
    pub id: Uuid,
    /// Current balance.
    pub balance: Decimal,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<fintrack_db::entities::wallets::Model> for WalletResponse {
    fn from(model: fintrack_db::entities::wallets::Model) -> Self {
        Self {
            id: model.id,
            balance: model.balance,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

/// GET /wallets - List the user's wallets.
async fn list_wallets(State(state): State<AppState>, auth: AuthUser) -> impl IntoResponse {
    let wallet_repo = WalletRepository::new((*state.db).clone());

    match wallet_repo.list_for_user(auth.user_id()).await {
        Ok(wallets) => {
            let data: Vec<WalletResponse> = wallets.into_iter().map(WalletResponse::from).collect();
            (StatusCode::OK, Json(json!({ "data": data }))).into_response()
        }
        Err(e) => error_response(AppError::from(e)),
    }
}

/// POST /wallets - Rejected; the wallet is created with the user.
async fn create_wallet(auth: AuthUser) -> impl IntoResponse {
    tracing::info!(user_id = %auth.user_id(), "Rejected explicit wallet creation");
    (
        StatusCode::CONFLICT,
        Json(json!({
            "error": "wallet_exists",
            "message": "A wallet is created automatically at registration; it cannot be created explicitly"
        })),
    )
}

/// GET /wallets/{wallet_id} - Retrieve the user's wallet by ID.
async fn get_wallet(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(wallet_id): Path<Uuid>,
) -> impl IntoResponse {
    let wallet_repo = WalletRepository::new((*state.db).clone());

    match wallet_repo
        .find_by_id_for_user(auth.user_id(), wallet_id)
        .await
    {
        Ok(wallet) => (StatusCode::OK, Json(WalletResponse::from(wallet))).into_response(),
        Err(e) => error_response(AppError::from(e)),
    }
}

/// PATCH /wallets/{wallet_id} - Rejected; balance is ledger-managed.
async fn update_wallet(Path(wallet_id): Path<Uuid>) -> impl IntoResponse {
    tracing::info!(wallet_id = %wallet_id, "Rejected direct wallet update");
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "error": "wallet_immutable",
            "message": "The wallet balance is managed through transactions and cannot be edited directly"
        })),
    )
}

/// DELETE /wallets/{wallet_id} - Rejected; the wallet lives as long as the user.
async fn delete_wallet(Path(wallet_id): Path<Uuid>) -> impl IntoResponse {
    tracing::info!(wallet_id = %wallet_id, "Rejected wallet deletion");
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "error": "wallet_undeletable",
            "message": "A wallet cannot be deleted independently of its user"
        })),
    )
}
