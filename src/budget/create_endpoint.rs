use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    budget::{BudgetPayload, BudgetUpsert, upsert_budget},
    json::{MessageBody, parse_json_body},
};

/// The state needed to set a budget.
#[derive(Debug, Clone)]
pub struct CreateBudgetState {
    /// The database connection for managing budgets.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CreateBudgetState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler for setting the budget of a category for a month.
///
/// Responds with 201 and the new budget, or with 200 and a message if an
/// existing budget for the category and month was updated.
pub async fn create_budget_endpoint(
    State(state): State<CreateBudgetState>,
    body: Result<Json<BudgetPayload>, JsonRejection>,
) -> Result<Response, Error> {
    let new_budget = parse_json_body(body)?.validate()?;

    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let response = match upsert_budget(new_budget, &connection)? {
        BudgetUpsert::Created(budget) => {
            tracing::info!("Created budget {} for {} {}", budget.id, budget.category, budget.month);
            (StatusCode::CREATED, Json(budget)).into_response()
        }
        BudgetUpsert::Updated(budget) => {
            tracing::info!("Updated budget {} for {} {}", budget.id, budget.category, budget.month);
            MessageBody::new("Budget updated successfully").into_response()
        }
    };

    Ok(response)
}
