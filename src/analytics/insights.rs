//! Simple observations about spending shown on the dashboard.

use crate::analytics::Analytics;

/// A category's total spending.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
}

/// A suggestion shown alongside the insights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    /// At least one budget has been exceeded.
    BudgetAlert,
    /// There is spending in at least one category.
    DiversifySpending,
    /// Always shown.
    SetMoreBudgets,
}

impl Recommendation {
    pub fn title(self) -> &'static str {
        match self {
            Recommendation::BudgetAlert => "Budget Alert",
            Recommendation::DiversifySpending => "Diversify Spending",
            Recommendation::SetMoreBudgets => "Set More Budgets",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Recommendation::BudgetAlert => {
                "You've exceeded some budgets. Consider reviewing your spending in these categories."
            }
            Recommendation::DiversifySpending => {
                "Track more categories to get better insights into your spending patterns."
            }
            Recommendation::SetMoreBudgets => {
                "Create budgets for all your spending categories to better control your finances."
            }
        }
    }
}

/// Observations derived from [Analytics].
#[derive(Debug, Clone, PartialEq)]
pub struct Insights {
    /// The category with the highest total, `None` if nothing has been spent.
    pub top_category: Option<CategoryTotal>,
    /// The mean transaction amount, zero when there are no transactions.
    pub average_transaction: f64,
    /// How many budgets have more than 100% used.
    pub budgets_exceeded: usize,
    pub recommendations: Vec<Recommendation>,
}

impl Insights {
    pub fn from_analytics(analytics: &Analytics) -> Self {
        // `max_by` keeps the last of equal elements, so ties go to the later category.
        let top_category = analytics
            .category_spending
            .iter()
            .max_by(|(_, left), (_, right)| left.total_cmp(right))
            .map(|(category, amount)| CategoryTotal {
                category: category.clone(),
                amount: *amount,
            });

        let average_transaction = if analytics.total_transactions > 0 {
            analytics.total_spent / analytics.total_transactions as f64
        } else {
            0.0
        };

        let budgets_exceeded = analytics
            .budget_comparison
            .iter()
            .filter(|comparison| comparison.is_over_budget())
            .count();

        let mut recommendations = Vec::new();

        if budgets_exceeded > 0 {
            recommendations.push(Recommendation::BudgetAlert);
        }

        if !analytics.category_spending.is_empty() {
            recommendations.push(Recommendation::DiversifySpending);
        }

        recommendations.push(Recommendation::SetMoreBudgets);

        Self {
            top_category,
            average_transaction,
            budgets_exceeded,
            recommendations,
        }
    }
}
