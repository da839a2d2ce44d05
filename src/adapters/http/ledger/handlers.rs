//! HTTP handlers for ledger endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};

use crate::application::handlers::ledger::{
    AddTransactionCommand, GetMonthlySummaryQuery, ImportRow, ImportTransactionsCommand,
    ListTransactionsQuery, RemoveTransactionCommand, UpdateTransactionCommand,
};
use crate::domain::foundation::TransactionId;
use crate::ports::TransactionFilter;

use super::super::auth::AuthenticatedUser;
use super::super::error::ApiError;
use super::super::AppState;
use super::dto::{
    ImportRequest, SummaryParams, SummaryResponse, TransactionListParams,
    TransactionListResponse, TransactionRequest, TransactionResponse,
};

/// GET /api/transactions - List the caller's transactions.
pub async fn list_transactions(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Query(params): Query<TransactionListParams>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.list_transactions_handler();
    let transactions = handler
        .handle(ListTransactionsQuery {
            user_id: user.user_id,
            filter: TransactionFilter {
                month: params.month,
                year: params.year,
            },
        })
        .await?;

    Ok(Json(TransactionListResponse {
        transactions: transactions
            .into_iter()
            .map(TransactionResponse::from)
            .collect(),
    }))
}

/// POST /api/transactions - Record one transaction.
pub async fn add_transaction(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<TransactionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.add_transaction_handler();
    let category = request.resolved_category();
    let transaction = handler
        .handle(AddTransactionCommand {
            user_id: user.user_id,
            date: request.date,
            description: request.description,
            amount: request.amount,
            kind: request.kind,
            category,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(TransactionResponse::from(transaction)),
    ))
}

/// PUT /api/transactions/:id - Edit a transaction.
pub async fn update_transaction(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<TransactionId>,
    Json(request): Json<TransactionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.update_transaction_handler();
    let category = request.resolved_category();
    let transaction = handler
        .handle(UpdateTransactionCommand {
            user_id: user.user_id,
            transaction_id: id,
            date: request.date,
            description: request.description,
            amount: request.amount,
            kind: request.kind,
            category,
        })
        .await?;

    Ok(Json(TransactionResponse::from(transaction)))
}

/// DELETE /api/transactions/:id - Remove a transaction.
pub async fn remove_transaction(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<TransactionId>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.remove_transaction_handler();
    handler
        .handle(RemoveTransactionCommand {
            user_id: user.user_id,
            transaction_id: id,
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/transactions/import - Bulk insert pre-parsed rows (Pro only).
pub async fn import_transactions(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<ImportRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.import_transactions_handler();
    let rows = request
        .rows
        .into_iter()
        .map(|row| {
            let category = row.resolved_category();
            ImportRow {
                date: row.date,
                description: row.description,
                amount: row.amount,
                kind: row.kind,
                category,
            }
        })
        .collect();

    let imported = handler
        .handle(ImportTransactionsCommand {
            user_id: user.user_id,
            rows,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(TransactionListResponse {
            transactions: imported.into_iter().map(TransactionResponse::from).collect(),
        }),
    ))
}

/// GET /api/transactions/summary?year= - Monthly totals for one year.
pub async fn get_monthly_summary(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Query(params): Query<SummaryParams>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.monthly_summary_handler();
    let months = handler
        .handle(GetMonthlySummaryQuery {
            user_id: user.user_id,
            year: params.year,
        })
        .await?;

    Ok(Json(SummaryResponse {
        year: params.year,
        months,
    }))
}
