//! Transaction management for the finance tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the database functions for storing and managing transactions
//! - Validation of the JSON and form payloads used to create and update transactions
//! - The JSON API handlers for transactions

mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod list_endpoint;
mod payload;

pub use core::{
    NewTransaction, Transaction, TransactionId, create_transaction, create_transaction_table,
    delete_transaction, get_all_transactions, get_transaction, update_transaction,
};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_endpoint::edit_transaction_endpoint;
pub use list_endpoint::list_transactions_endpoint;
pub use payload::{TransactionForm, TransactionPayload};

#[cfg(test)]
pub(crate) use core::{count_transactions, new_transaction};
