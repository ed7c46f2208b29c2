//! Report routes.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::error;

use crate::{AppState, error_response, middleware::AuthUser};
use fintrack_core::report::{ReportFilter, build_report};
use fintrack_db::UserRepository;
use fintrack_db::repositories::report::ReportRepository;
use fintrack_shared::AppError;
use fintrack_shared::auth::UserInfo;
use fintrack_shared::types::PageRequest;

/// Creates the report routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new().route("/reports", get(get_report))
}

/// Query parameters for the report endpoint.
#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    /// Day of month (requires `month` and `year`).
    pub day: Option<u32>,
    /// Month number (requires `year`).
    pub month: Option<u32>,
    /// Calendar year.
    pub year: Option<i32>,
    /// Inclusive range start (YYYY-MM-DD).
    pub start_date: Option<NaiveDate>,
    /// Inclusive range end (YYYY-MM-DD).
    pub end_date: Option<NaiveDate>,
    /// Page number (1-indexed).
    pub page: Option<u32>,
    /// Page size for `transaction_details` (default: 10, max: 100).
    pub page_size: Option<u32>,
}

/// GET /reports - Aggregate the requester's ledger into a report.
async fn get_report(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ReportQuery>,
) -> impl IntoResponse {
    let report_repo = ReportRepository::new((*state.db).clone());
    let user_repo = UserRepository::new((*state.db).clone());

    let user = match user_repo.find_by_id(auth.user_id()).await {
        Ok(Some(u)) => u,
        Ok(None) => return error_response(AppError::NotFound("User not found.".to_string())),
        Err(e) => {
            error!(error = %e, "Failed to load user for report");
            return error_response(AppError::Database(e.to_string()));
        }
    };

    let (wallet, ledger) = match report_repo.wallet_ledger(auth.user_id()).await {
        Ok(pair) => pair,
        Err(e) => return error_response(AppError::from(e)),
    };

    let filter = ReportFilter {
        day: query.day,
        month: query.month,
        year: query.year,
        start_date: query.start_date,
        end_date: query.end_date,
    };

    let page = PageRequest {
        page: query.page.unwrap_or(1),
        page_size: query.page_size.unwrap_or(10),
    };

    let user_info = UserInfo {
        id: user.id,
        username: user.username,
        email: user.email,
        full_name: user.full_name,
    };

    match build_report(&ledger, &filter, wallet.balance, user_info, page) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => error_response(AppError::from(e)),
    }
}
