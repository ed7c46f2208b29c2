//! Transaction routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, patch, post},
};
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{error, info};
use uuid::Uuid;

use crate::{AppState, error_response, middleware::AuthUser};
use fintrack_core::ledger::{NewTransaction, TransactionCategory, TransactionType};
use fintrack_db::entities::transactions;
use fintrack_db::repositories::transaction::{
    TransactionListFilter, TransactionRepository, UpdateTransactionInput,
};
use fintrack_shared::AppError;
use fintrack_shared::types::{PageRequest, PageResponse};

/// Creates the transaction routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/transactions", get(list_transactions))
        .route("/transactions", post(create_transaction))
        .route("/transactions/{transaction_id}", get(get_transaction))
        .route("/transactions/{transaction_id}", patch(update_transaction))
        .route("/transactions/{transaction_id}", delete(delete_transaction))
}

/// Query parameters for listing transactions.
#[derive(Debug, Deserialize)]
pub struct ListTransactionsQuery {
    /// Filter to a calendar month (1-12); requires `year`.
    pub month: Option<u32>,
    /// Filter to a calendar year.
    pub year: Option<i32>,
    /// Page number (1-indexed).
    pub page: Option<u32>,
    /// Page size (default: 10, max: 100).
    pub page_size: Option<u32>,
}

/// Request body for creating a transaction.
#[derive(Debug, Deserialize)]
pub struct CreateTransactionRequest {
    /// Positive monetary amount.
    pub amount: Decimal,
    /// Transaction type: "income" or "expense".
    #[serde(rename = "type")]
    pub transaction_type: String,
    /// Category: "food", "transport", "entertainment", "other".
    pub category: Option<String>,
    /// Optional description.
    pub description: Option<String>,
}

/// Request body for updating a transaction.
///
/// Amount and type are immutable; only descriptive fields can change.
#[derive(Debug, Deserialize)]
pub struct UpdateTransactionRequest {
    /// Description.
    pub description: Option<String>,
    /// Category.
    pub category: Option<String>,
}

/// Response for a transaction.
#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    /// Transaction ID.
    pub id: Uuid,
    /// Monetary amount.
    pub amount: Decimal,
    /// Transaction type.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Category.
    pub category: TransactionCategory,
    /// Description.
    pub description: Option<String>,
    /// Transaction date.
    pub date: DateTime<Utc>,
}

impl From<transactions::Model> for TransactionResponse {
    fn from(model: transactions::Model) -> Self {
        Self {
            id: model.id,
            amount: model.amount,
            transaction_type: model.transaction_type.into(),
            category: model.category.into(),
            description: model.description,
            date: model.date.with_timezone(&Utc),
        }
    }
}

/// Converts month/year query parameters into an inclusive date range.
fn month_year_range(
    month: Option<u32>,
    year: Option<i32>,
) -> Result<TransactionListFilter, AppError> {
    match (month, year) {
        (None, None) => Ok(TransactionListFilter::default()),
        (Some(_), None) => Err(AppError::Validation(
            "Year is required when month is provided.".to_string(),
        )),
        (None, Some(y)) => {
            let start = NaiveDate::from_ymd_opt(y, 1, 1)
                .ok_or_else(|| AppError::Validation("Invalid year.".to_string()))?;
            let end = NaiveDate::from_ymd_opt(y + 1, 1, 1)
                .ok_or_else(|| AppError::Validation("Invalid year.".to_string()))?;
            Ok(range_filter(start, end))
        }
        (Some(m), Some(y)) => {
            let start = NaiveDate::from_ymd_opt(y, m, 1)
                .ok_or_else(|| AppError::Validation("Invalid month or year.".to_string()))?;
            let (next_y, next_m) = if m == 12 { (y + 1, 1) } else { (y, m + 1) };
            let end = NaiveDate::from_ymd_opt(next_y, next_m, 1)
                .ok_or_else(|| AppError::Validation("Invalid month or year.".to_string()))?;
            Ok(range_filter(start, end))
        }
    }
}

fn range_filter(start: NaiveDate, end_exclusive: NaiveDate) -> TransactionListFilter {
    let from = Utc.from_utc_datetime(&start.and_hms_opt(0, 0, 0).unwrap_or_default());
    let to = Utc.from_utc_datetime(&end_exclusive.and_hms_opt(0, 0, 0).unwrap_or_default())
        - Duration::microseconds(1);
    TransactionListFilter {
        date_from: Some(from),
        date_to: Some(to),
    }
}

/// GET /transactions - List the user's transactions, newest first.
async fn list_transactions(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ListTransactionsQuery>,
) -> impl IntoResponse {
    let tx_repo = TransactionRepository::new((*state.db).clone());

    let filter = match month_year_range(query.month, query.year) {
        Ok(f) => f,
        Err(e) => return error_response(e),
    };

    let page = PageRequest {
        page: query.page.unwrap_or(1),
        page_size: query.page_size.unwrap_or(10),
    }
    .clamped();

    match tx_repo.list_for_user(auth.user_id(), &filter, page).await {
        Ok((items, total)) => {
            let data: Vec<TransactionResponse> =
                items.into_iter().map(TransactionResponse::from).collect();
            let response = PageResponse::new(data, page.page, page.page_size, total);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response(AppError::from(e)),
    }
}

/// POST /transactions - Record a transaction against the requester's wallet.
async fn create_transaction(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<CreateTransactionRequest>,
) -> impl IntoResponse {
    let tx_repo = TransactionRepository::new((*state.db).clone());

    let transaction_type = match TransactionType::from_str(&payload.transaction_type) {
        Ok(t) => t,
        Err(e) => return error_response(AppError::Validation(e)),
    };

    let category = match payload.category.as_deref() {
        Some(raw) => match TransactionCategory::from_str(raw) {
            Ok(c) => c,
            Err(e) => return error_response(AppError::Validation(e)),
        },
        None => TransactionCategory::default(),
    };

    let input = NewTransaction {
        amount: payload.amount,
        transaction_type,
        category,
        description: payload.description,
    };

    match tx_repo.create(auth.user_id(), input).await {
        Ok(transaction) => {
            info!(
                user_id = %auth.user_id(),
                transaction_id = %transaction.id,
                "Transaction recorded"
            );
            (
                StatusCode::CREATED,
                Json(TransactionResponse::from(transaction)),
            )
                .into_response()
        }
        Err(e) => {
            if matches!(
                e,
                fintrack_db::repositories::transaction::TransactionError::Database(_)
            ) {
                error!(error = %e, "Failed to create transaction");
            }
            error_response(AppError::from(e))
        }
    }
}

/// GET /transactions/{transaction_id} - Retrieve a single transaction.
async fn get_transaction(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(transaction_id): Path<Uuid>,
) -> impl IntoResponse {
    let tx_repo = TransactionRepository::new((*state.db).clone());

    match tx_repo.get_for_user(auth.user_id(), transaction_id).await {
        Ok(transaction) => {
            (StatusCode::OK, Json(TransactionResponse::from(transaction))).into_response()
        }
        Err(e) => error_response(AppError::from(e)),
    }
}

/// PATCH /transactions/{transaction_id} - Update descriptive fields.
async fn update_transaction(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(transaction_id): Path<Uuid>,
    Json(payload): Json<UpdateTransactionRequest>,
) -> impl IntoResponse {
    let tx_repo = TransactionRepository::new((*state.db).clone());

    let category = match payload.category.as_deref() {
        Some(raw) => match TransactionCategory::from_str(raw) {
            Ok(c) => Some(c),
            Err(e) => return error_response(AppError::Validation(e)),
        },
        None => None,
    };

    let input = UpdateTransactionInput {
        description: payload.description,
        category,
    };

    match tx_repo
        .update_for_user(auth.user_id(), transaction_id, input)
        .await
    {
        Ok(transaction) => {
            (StatusCode::OK, Json(TransactionResponse::from(transaction))).into_response()
        }
        Err(e) => error_response(AppError::from(e)),
    }
}

/// DELETE /transactions/{transaction_id} - Delete and reverse the balance effect.
async fn delete_transaction(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(transaction_id): Path<Uuid>,
) -> impl IntoResponse {
    let tx_repo = TransactionRepository::new((*state.db).clone());

    match tx_repo
        .delete_for_user(auth.user_id(), transaction_id)
        .await
    {
        Ok(()) => {
            info!(
                user_id = %auth.user_id(),
                transaction_id = %transaction_id,
                "Transaction deleted"
            );
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => error_response(AppError::from(e)),
    }
}
