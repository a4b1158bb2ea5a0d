use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    analytics::{Analytics, compute_analytics},
    budget::get_all_budgets,
    transaction::get_all_transactions,
};

/// The state needed to compute analytics.
#[derive(Debug, Clone)]
pub struct AnalyticsState {
    /// The database connection for reading transactions and budgets.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for AnalyticsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler that returns the spending analytics for all transactions and budgets.
pub async fn get_analytics_endpoint(
    State(state): State<AnalyticsState>,
) -> Result<Json<Analytics>, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let transactions = get_all_transactions(&connection)?;
    let budgets = get_all_budgets(&connection)?;

    Ok(Json(compute_analytics(&transactions, &budgets)))
}
