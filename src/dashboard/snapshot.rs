//! Loads everything the dashboard displays in one go.

use rusqlite::Connection;

use crate::{
    Error,
    analytics::{Analytics, compute_analytics},
    budget::{Budget, get_all_budgets},
    category::{CATEGORIES, Category},
    transaction::{Transaction, get_all_transactions},
};

/// The transactions, categories, budgets and analytics shown on the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Snapshot {
    pub transactions: Vec<Transaction>,
    pub categories: &'static [Category],
    pub budgets: Vec<Budget>,
    pub analytics: Analytics,
}

/// Read the transactions and budgets and compute the analytics from them.
///
/// # Errors
/// Returns an [Error::SqlError] if the transactions or budgets could not be read.
pub(super) fn load_snapshot(connection: &Connection) -> Result<Snapshot, Error> {
    let transactions = get_all_transactions(connection)
        .inspect_err(|error| tracing::error!("could not get transactions: {error}"))?;
    let budgets = get_all_budgets(connection)
        .inspect_err(|error| tracing::error!("could not get budgets: {error}"))?;
    let analytics = compute_analytics(&transactions, &budgets);

    Ok(Snapshot {
        transactions,
        categories: &CATEGORIES,
        budgets,
        analytics,
    })
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;

    use crate::{
        budget::{new_budget, upsert_budget},
        db::initialize,
        transaction::{create_transaction, new_transaction},
    };

    use super::load_snapshot;

    #[test]
    fn loads_all_resources() {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();
        create_transaction(new_transaction(30.0, "2024-01-05", "food", "Lunch"), &connection)
            .unwrap();
        upsert_budget(new_budget("food", 100.0, "2024-01"), &connection).unwrap();

        let snapshot = load_snapshot(&connection).expect("could not load snapshot");

        assert_eq!(snapshot.transactions.len(), 1);
        assert_eq!(snapshot.budgets.len(), 1);
        assert_eq!(snapshot.categories.len(), 9);
        assert_eq!(snapshot.analytics.total_spent, 30.0);
        assert_eq!(snapshot.analytics.budget_comparison[0].percent_used, Some(30));
    }
}
