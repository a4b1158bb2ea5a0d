use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State, rejection::JsonRejection},
    http::StatusCode,
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    json::parse_json_body,
    transaction::{Transaction, TransactionPayload, create_transaction},
};

/// The state needed to create a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler for creating a new transaction, responds with the created record.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    body: Result<Json<TransactionPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Transaction>), Error> {
    let new_transaction = parse_json_body(body)?.validate()?;

    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let transaction = create_transaction(new_transaction, &connection)?;
    tracing::info!("Created transaction {}", transaction.id);

    Ok((StatusCode::CREATED, Json(transaction)))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{Json, extract::State, http::StatusCode};
    use rusqlite::Connection;
    use serde_json::json;

    use crate::{
        Error, initialize_db,
        transaction::{
            count_transactions,
            create_endpoint::{CreateTransactionState, create_transaction_endpoint},
            get_transaction,
        },
    };

    fn get_test_state() -> CreateTransactionState {
        let connection = Connection::open_in_memory().unwrap();
        initialize_db(&connection).unwrap();

        CreateTransactionState {
            db_connection: Arc::new(Mutex::new(connection)),
        }
    }

    #[tokio::test]
    async fn creates_transaction() {
        let state = get_test_state();
        let payload = serde_json::from_value(json!({
            "amount": "12.50",
            "description": "Lunch",
            "date": "2024-01-05",
            "category": "food",
        }))
        .unwrap();

        let (status, Json(transaction)) =
            create_transaction_endpoint(State(state.clone()), Ok(Json(payload)))
                .await
                .expect("could not create transaction");

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(transaction.amount, 12.5);
        let connection = state.db_connection.lock().unwrap();
        assert_eq!(get_transaction(&transaction.id, &connection), Ok(transaction));
    }

    #[tokio::test]
    async fn missing_fields_persist_nothing() {
        let state = get_test_state();
        let payload = serde_json::from_value(json!({
            "amount": 5,
            "description": "Lunch",
            "date": "2024-01-05",
        }))
        .unwrap();

        let result = create_transaction_endpoint(State(state.clone()), Ok(Json(payload))).await;

        assert_eq!(result.err(), Some(Error::MissingFields));
        let connection = state.db_connection.lock().unwrap();
        assert_eq!(count_transactions(&connection), Ok(0));
    }
}
