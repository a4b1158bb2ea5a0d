use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Path, State},
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    json::MessageBody,
    transaction::{TransactionId, delete_transaction},
};

/// The state needed to delete a transaction.
#[derive(Debug, Clone)]
pub struct DeleteTransactionState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for DeleteTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler for deleting a transaction.
pub async fn delete_transaction_endpoint(
    State(state): State<DeleteTransactionState>,
    Path(transaction_id): Path<TransactionId>,
) -> Result<Json<MessageBody>, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    delete_transaction(&transaction_id, &connection)?;
    tracing::info!("Deleted transaction {transaction_id}");

    Ok(MessageBody::new("Transaction deleted successfully"))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::extract::{Path, State};
    use rusqlite::Connection;

    use crate::{
        Error, initialize_db,
        transaction::{
            create_transaction,
            delete_endpoint::{DeleteTransactionState, delete_transaction_endpoint},
            get_transaction, new_transaction,
        },
    };

    #[tokio::test]
    async fn deleting_twice_fails_the_second_time() {
        let connection = Connection::open_in_memory().unwrap();
        initialize_db(&connection).unwrap();
        let transaction =
            create_transaction(new_transaction(1.23, "2025-10-26", "food", "Test"), &connection)
                .unwrap();
        let state = DeleteTransactionState {
            db_connection: Arc::new(Mutex::new(connection)),
        };

        let first = delete_transaction_endpoint(
            State(state.clone()),
            Path(transaction.id.clone()),
        )
        .await;
        let second = delete_transaction_endpoint(
            State(state.clone()),
            Path(transaction.id.clone()),
        )
        .await;

        assert_eq!(
            first.map(|body| body.message.clone()),
            Ok("Transaction deleted successfully".to_owned())
        );
        assert_eq!(second.err(), Some(Error::DeleteMissingTransaction));
        assert_eq!(
            get_transaction(&transaction.id, &state.db_connection.lock().unwrap()),
            Err(Error::NotFound)
        );
    }
}
