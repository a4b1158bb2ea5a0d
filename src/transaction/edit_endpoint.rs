use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Path, State, rejection::JsonRejection},
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    json::{MessageBody, parse_json_body},
    transaction::{TransactionId, TransactionPayload, update_transaction},
};

/// The state needed to edit a transaction.
#[derive(Debug, Clone)]
pub struct EditTransactionState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for EditTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler for overwriting a transaction's fields.
pub async fn edit_transaction_endpoint(
    State(state): State<EditTransactionState>,
    Path(transaction_id): Path<TransactionId>,
    body: Result<Json<TransactionPayload>, JsonRejection>,
) -> Result<Json<MessageBody>, Error> {
    let changes = parse_json_body(body)?.validate()?;

    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    update_transaction(&transaction_id, &changes, &connection)
        .inspect_err(|error| tracing::info!("Could not update transaction {transaction_id}: {error}"))?;

    Ok(MessageBody::new("Transaction updated successfully"))
}
