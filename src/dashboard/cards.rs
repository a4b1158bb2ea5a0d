//! The summary cards at the top of the dashboard.

use maud::{Markup, html};

use crate::{dashboard::snapshot::Snapshot, html::format_currency};

/// Renders the Total Spent, Transactions, Active Budgets and Categories cards.
pub(super) fn summary_cards_view(snapshot: &Snapshot) -> Markup {
    let analytics = &snapshot.analytics;
    let cards = [
        ("Total Spent", format_currency(analytics.total_spent), "text-green-600"),
        (
            "Transactions",
            analytics.total_transactions.to_string(),
            "text-blue-600",
        ),
        (
            "Active Budgets",
            snapshot.budgets.len().to_string(),
            "text-purple-600",
        ),
        (
            "Categories",
            analytics.category_spending.len().to_string(),
            "text-red-600",
        ),
    ];

    html! {
        section
            id="summary-cards"
            class="grid grid-cols-1 md:grid-cols-4 gap-6 mb-8 w-full"
        {
            @for (title, value, accent) in cards {
                div
                    class="bg-white dark:bg-gray-800 border border-gray-200
                        dark:border-gray-700 rounded-lg p-6 shadow-md"
                    data-card=(title)
                {
                    p class={ "text-sm font-medium " (accent) } { (title) }
                    p class="text-2xl font-bold" { (value) }
                }
            }
        }
    }
}
