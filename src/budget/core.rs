//! Defines the budget model and its database queries.

use rusqlite::{Connection, Row, Transaction as SqlTransaction, TransactionBehavior, params};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::Error;

/// A monthly spending ceiling for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    /// The ID of the budget, a UUID v4 string.
    pub id: String,
    /// The ID of the category the budget applies to.
    pub category: String,
    /// The most that should be spent on the category in `month`.
    pub amount: f64,
    /// The month the budget applies to, e.g. "2024-01".
    pub month: String,
    /// When the budget was first set.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// When the budget amount was last changed, if ever.
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<OffsetDateTime>,
}

/// The validated fields used to set a budget.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBudget {
    pub category: String,
    pub amount: f64,
    pub month: String,
}

/// What [upsert_budget] did.
#[derive(Debug, Clone, PartialEq)]
pub enum BudgetUpsert {
    /// No budget existed for the category and month, so one was inserted.
    Created(Budget),
    /// The existing budget for the category and month had its amount replaced.
    Updated(Budget),
}

/// Set the budget for a category and month.
///
/// If a budget already exists for the category and month its amount is
/// replaced and its update time set, otherwise a new budget is inserted. The
/// lookup and the write happen inside one exclusive SQL transaction so there is
/// never more than one budget per category and month.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn upsert_budget(new_budget: NewBudget, connection: &Connection) -> Result<BudgetUpsert, Error> {
    let transaction = SqlTransaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    let existing_id = transaction
        .prepare("SELECT id FROM budget WHERE category = ?1 AND month = ?2 ORDER BY rowid LIMIT 1")?
        .query_one((&new_budget.category, &new_budget.month), |row| {
            row.get::<_, String>(0)
        });

    let result = match existing_id {
        Ok(id) => {
            let budget = transaction
                .prepare(
                    "UPDATE budget SET amount = ?1, updated_at = ?2 WHERE id = ?3
                     RETURNING id, category, amount, month, created_at, updated_at",
                )?
                .query_row(
                    params![new_budget.amount, OffsetDateTime::now_utc(), id],
                    map_budget_row,
                )?;

            BudgetUpsert::Updated(budget)
        }
        Err(rusqlite::Error::QueryReturnedNoRows) => {
            let budget = transaction
                .prepare(
                    "INSERT INTO budget (id, category, amount, month, created_at)
                     VALUES (?1, ?2, ?3, ?4, ?5)
                     RETURNING id, category, amount, month, created_at, updated_at",
                )?
                .query_row(
                    params![
                        Uuid::new_v4().to_string(),
                        new_budget.category,
                        new_budget.amount,
                        new_budget.month,
                        OffsetDateTime::now_utc(),
                    ],
                    map_budget_row,
                )?;

            BudgetUpsert::Created(budget)
        }
        Err(error) => return Err(error.into()),
    };

    transaction.commit()?;

    Ok(result)
}

/// Retrieve every budget in the order they were first set.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn get_all_budgets(connection: &Connection) -> Result<Vec<Budget>, Error> {
    connection
        .prepare(
            "SELECT id, category, amount, month, created_at, updated_at FROM budget ORDER BY rowid",
        )?
        .query_map([], map_budget_row)?
        .map(|maybe_budget| maybe_budget.map_err(Error::from))
        .collect()
}

/// Create the budget table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_budget_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS budget (
                id TEXT PRIMARY KEY NOT NULL,
                category TEXT NOT NULL,
                amount REAL NOT NULL,
                month TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT
                )",
        (),
    )?;

    // Not UNIQUE, uniqueness per category and month is kept by `upsert_budget`.
    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_budget_category_month ON budget(category, month);",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Budget.
pub fn map_budget_row(row: &Row) -> Result<Budget, rusqlite::Error> {
    Ok(Budget {
        id: row.get(0)?,
        category: row.get(1)?,
        amount: row.get(2)?,
        month: row.get(3)?,
        created_at: row.get(4)?,
        updated_at: row.get(5)?,
    })
}

#[cfg(test)]
pub(crate) fn new_budget(category: &str, amount: f64, month: &str) -> NewBudget {
    NewBudget {
        category: category.to_owned(),
        amount,
        month: month.to_owned(),
    }
}
