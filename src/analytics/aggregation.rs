//! Aggregates transactions and budgets into spending totals.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{budget::Budget, transaction::Transaction};

/// Spending totals derived from every transaction and budget.
///
/// The maps are ordered by key so that the serialized JSON is the same for the
/// same data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    /// Month ("YYYY-MM") to total amount spent in that month.
    pub monthly_spending: BTreeMap<String, f64>,
    /// Category ID to total amount spent in that category across all time.
    pub category_spending: BTreeMap<String, f64>,
    /// Each budget alongside how much of it has been spent.
    pub budget_comparison: Vec<BudgetComparison>,
    /// The number of transactions.
    pub total_transactions: usize,
    /// The sum of every transaction amount.
    pub total_spent: f64,
}

/// A budget with its spending progress.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetComparison {
    #[serde(flatten)]
    pub budget: Budget,
    /// The amount spent in the budget's category across all months, not just
    /// the budget's month.
    pub spent: f64,
    /// The budget amount minus [BudgetComparison::spent], negative when over budget.
    pub remaining: f64,
    /// `spent / amount * 100` rounded half up to a whole number.
    ///
    /// `None` when the budget amount is zero, serialized as `null`.
    pub percent_used: Option<i64>,
}

impl BudgetComparison {
    /// Whether more than the budget amount has been spent.
    pub fn is_over_budget(&self) -> bool {
        self.percent_used.is_some_and(|percent| percent > 100)
    }
}

/// Compute the spending totals for `transactions` and `budgets`.
pub fn compute_analytics(transactions: &[Transaction], budgets: &[Budget]) -> Analytics {
    let mut monthly_spending = BTreeMap::new();
    let mut category_spending = BTreeMap::new();

    for transaction in transactions {
        *monthly_spending
            .entry(transaction.month().to_owned())
            .or_insert(0.0) += transaction.amount;
        *category_spending
            .entry(transaction.category.clone())
            .or_insert(0.0) += transaction.amount;
    }

    let budget_comparison = budgets
        .iter()
        .map(|budget| {
            let spent = category_spending
                .get(&budget.category)
                .copied()
                .unwrap_or(0.0);

            BudgetComparison {
                budget: budget.clone(),
                spent,
                remaining: budget.amount - spent,
                percent_used: round_half_up(spent / budget.amount * 100.0),
            }
        })
        .collect();

    Analytics {
        monthly_spending,
        category_spending,
        budget_comparison,
        total_transactions: transactions.len(),
        total_spent: transactions
            .iter()
            .map(|transaction| transaction.amount)
            .sum(),
    }
}

/// Round to the nearest whole number with halves rounded up, e.g. 2.5 -> 3 and
/// -2.5 -> -2. Returns `None` for NaN and infinities.
fn round_half_up(number: f64) -> Option<i64> {
    if number.is_finite() {
        Some((number + 0.5).floor() as i64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use time::OffsetDateTime;

    use crate::{budget::Budget, transaction::Transaction};

    use super::{compute_analytics, round_half_up};

    fn transaction(amount: f64, date: &str, category: &str) -> Transaction {
        Transaction {
            id: format!("{category}-{date}-{amount}"),
            amount,
            description: "test".to_owned(),
            date: date.to_owned(),
            category: category.to_owned(),
            created_at: OffsetDateTime::UNIX_EPOCH,
            updated_at: None,
        }
    }

    fn budget(category: &str, amount: f64, month: &str) -> Budget {
        Budget {
            id: format!("{category}-{month}"),
            category: category.to_owned(),
            amount,
            month: month.to_owned(),
            created_at: OffsetDateTime::UNIX_EPOCH,
            updated_at: None,
        }
    }

    #[test]
    fn sums_by_month_and_category() {
        let transactions = [
            transaction(10.0, "2024-01-05", "food"),
            transaction(20.0, "2024-01-15", "food"),
            transaction(5.0, "2024-02-01", "transport"),
        ];

        let analytics = compute_analytics(&transactions, &[]);

        assert_eq!(
            analytics.monthly_spending.into_iter().collect::<Vec<_>>(),
            vec![("2024-01".to_owned(), 30.0), ("2024-02".to_owned(), 5.0)]
        );
        assert_eq!(
            analytics.category_spending.into_iter().collect::<Vec<_>>(),
            vec![("food".to_owned(), 30.0), ("transport".to_owned(), 5.0)]
        );
        assert_eq!(analytics.total_spent, 35.0);
        assert_eq!(analytics.total_transactions, 3);
    }

    #[test]
    fn compares_budget_with_all_time_category_spending() {
        let transactions = [
            transaction(10.0, "2024-01-05", "food"),
            transaction(20.0, "2024-03-15", "food"),
        ];
        let budgets = [budget("food", 100.0, "2024-01")];

        let analytics = compute_analytics(&transactions, &budgets);

        let comparison = &analytics.budget_comparison[0];
        assert_eq!(comparison.spent, 30.0);
        assert_eq!(comparison.remaining, 70.0);
        assert_eq!(comparison.percent_used, Some(30));
        assert!(!comparison.is_over_budget());
    }

    #[test]
    fn budget_without_spending_is_unused() {
        let budgets = [budget("education", 50.0, "2024-01")];

        let analytics = compute_analytics(&[], &budgets);

        let comparison = &analytics.budget_comparison[0];
        assert_eq!(comparison.spent, 0.0);
        assert_eq!(comparison.remaining, 50.0);
        assert_eq!(comparison.percent_used, Some(0));
    }

    #[test]
    fn over_budget_has_negative_remaining() {
        let transactions = [transaction(150.0, "2024-01-05", "shopping")];
        let budgets = [budget("shopping", 100.0, "2024-01")];

        let analytics = compute_analytics(&transactions, &budgets);

        let comparison = &analytics.budget_comparison[0];
        assert_eq!(comparison.remaining, -50.0);
        assert_eq!(comparison.percent_used, Some(150));
        assert!(comparison.is_over_budget());
    }

    #[test]
    fn zero_budget_amount_has_no_percentage() {
        let transactions = [transaction(10.0, "2024-01-05", "food")];
        let budgets = [budget("food", 0.0, "2024-01"), budget("other", 0.0, "2024-01")];

        let analytics = compute_analytics(&transactions, &budgets);

        assert_eq!(analytics.budget_comparison[0].percent_used, None);
        assert_eq!(analytics.budget_comparison[1].percent_used, None);
    }

    #[test]
    fn empty_input_gives_zero_totals() {
        let analytics = compute_analytics(&[], &[]);

        assert!(analytics.monthly_spending.is_empty());
        assert!(analytics.category_spending.is_empty());
        assert!(analytics.budget_comparison.is_empty());
        assert_eq!(analytics.total_transactions, 0);
        assert_eq!(analytics.total_spent, 0.0);
    }

    #[test]
    fn serializes_budget_fields_inline_with_camel_case_keys() {
        let transactions = [transaction(30.0, "2024-01-05", "food")];
        let budgets = [budget("food", 100.0, "2024-01")];

        let value = serde_json::to_value(compute_analytics(&transactions, &budgets)).unwrap();

        assert_eq!(
            value["budgetComparison"][0],
            json!({
                "id": "food-2024-01",
                "category": "food",
                "amount": 100.0,
                "month": "2024-01",
                "createdAt": "1970-01-01T00:00:00Z",
                "spent": 30.0,
                "remaining": 70.0,
                "percentUsed": 30,
            })
        );
        assert_eq!(value["totalTransactions"], json!(1));
        assert_eq!(value["monthlySpending"], json!({"2024-01": 30.0}));
    }

    #[test]
    fn rounds_halves_up() {
        assert_eq!(round_half_up(2.5), Some(3));
        assert_eq!(round_half_up(2.4), Some(2));
        assert_eq!(round_half_up(-2.5), Some(-2));
        assert_eq!(round_half_up(f64::NAN), None);
        assert_eq!(round_half_up(f64::INFINITY), None);
    }
}
