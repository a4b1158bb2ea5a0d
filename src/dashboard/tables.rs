//! The transaction list and budget overview.

use maud::{Markup, html};

use crate::{
    analytics::BudgetComparison,
    category::{category_color, category_name},
    dashboard::{DASHBOARD_CONTENT_ID, forms::TRANSACTION_FORM_ID},
    endpoints::{self, format_endpoint},
    html::{BUTTON_DELETE_STYLE, CARD_STYLE, CARD_TITLE_STYLE, LINK_STYLE, color_swatch, format_currency},
    transaction::Transaction,
};

/// Lists the transactions, most recent first, with buttons to edit or delete each one.
pub(super) fn transaction_list_view(transactions: &[Transaction]) -> Markup {
    let form_target = format!("#{TRANSACTION_FORM_ID}");
    let dashboard_target = format!("#{DASHBOARD_CONTENT_ID}");

    html! {
        div id="transaction-list" class=(CARD_STYLE)
        {
            h3 class=(CARD_TITLE_STYLE) { "Recent Transactions" }

            @if transactions.is_empty() {
                p class="text-gray-500 text-center py-8"
                {
                    "No transactions yet. Add your first transaction!"
                }
            } @else {
                ul class="divide-y divide-gray-200 dark:divide-gray-700 max-h-96 overflow-y-auto"
                {
                    @for transaction in transactions {
                        li
                            class="flex items-center justify-between gap-3 py-3"
                            data-transaction-id=(transaction.id)
                        {
                            div class="flex items-center gap-3 min-w-0"
                            {
                                (color_swatch(category_color(&transaction.category)))

                                div class="min-w-0"
                                {
                                    p class="font-medium truncate" { (transaction.description) }
                                    p class="text-sm text-gray-500 dark:text-gray-400"
                                    {
                                        (category_name(&transaction.category))
                                        " • "
                                        (transaction.date)
                                    }
                                }
                            }

                            div class="flex items-center gap-3 shrink-0"
                            {
                                span class="font-semibold text-red-600 dark:text-red-400"
                                {
                                    (format_currency(-transaction.amount))
                                }

                                button
                                    type="button"
                                    hx-get=(format_endpoint(endpoints::DASHBOARD_EDIT_TRANSACTION_FORM, &transaction.id))
                                    hx-target=(form_target)
                                    hx-swap="outerHTML"
                                    class={ "bg-transparent border-none cursor-pointer " (LINK_STYLE) }
                                {
                                    "Edit"
                                }

                                button
                                    type="button"
                                    hx-delete=(format_endpoint(endpoints::DASHBOARD_TRANSACTION, &transaction.id))
                                    hx-confirm={ "Are you sure you want to delete '" (transaction.description) "'?" }
                                    hx-target=(dashboard_target)
                                    hx-swap="outerHTML"
                                    class=(BUTTON_DELETE_STYLE)
                                {
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Shows each budget with how much of it has been spent.
pub(super) fn budget_overview_view(comparisons: &[BudgetComparison]) -> Markup {
    html! {
        div id="budget-overview" class=(CARD_STYLE)
        {
            h3 class=(CARD_TITLE_STYLE) { "Budget Overview" }

            @if comparisons.is_empty() {
                p class="text-gray-500 text-center py-8"
                {
                    "No budgets set yet. Create your first budget!"
                }
            } @else {
                ul class="space-y-4"
                {
                    @for comparison in comparisons {
                        (budget_row(comparison))
                    }
                }
            }
        }
    }
}

fn budget_row(comparison: &BudgetComparison) -> Markup {
    let budget = &comparison.budget;
    let (badge_text, badge_style) = match comparison.percent_used {
        Some(percent) if percent > 100 => (
            format!("{percent}% used"),
            "bg-red-100 text-red-800 dark:bg-red-900 dark:text-red-300",
        ),
        Some(percent) if percent > 80 => (
            format!("{percent}% used"),
            "bg-yellow-100 text-yellow-800 dark:bg-yellow-900 dark:text-yellow-300",
        ),
        Some(percent) => (
            format!("{percent}% used"),
            "bg-gray-100 text-gray-800 dark:bg-gray-700 dark:text-gray-300",
        ),
        None => (
            "-".to_owned(),
            "bg-gray-100 text-gray-800 dark:bg-gray-700 dark:text-gray-300",
        ),
    };
    let bar_width = comparison.percent_used.unwrap_or(0).clamp(0, 100);
    let bar_color = if comparison.is_over_budget() {
        "bg-red-600"
    } else {
        "bg-blue-600"
    };

    html! {
        li data-budget-id=(budget.id)
        {
            div class="flex items-center justify-between mb-1"
            {
                div class="flex items-center gap-2"
                {
                    (color_swatch(category_color(&budget.category)))
                    span class="font-medium" { (category_name(&budget.category)) }
                    span class="text-sm text-gray-500 dark:text-gray-400" { (budget.month) }
                }

                span class={ "text-xs font-semibold px-2.5 py-0.5 rounded-full " (badge_style) }
                {
                    (badge_text)
                }
            }

            p class="text-sm text-gray-600 dark:text-gray-400 mb-1"
            {
                (format_currency(comparison.spent)) " of " (format_currency(budget.amount))
            }

            div class="w-full h-2 bg-gray-200 rounded-full dark:bg-gray-700"
            {
                div
                    class={ "h-2 rounded-full " (bar_color) }
                    style={ "width: " (bar_width) "%;" }
                {}
            }

            @if comparison.is_over_budget() {
                p class="text-sm text-red-600 dark:text-red-400 mt-1"
                {
                    "Over budget by " (format_currency(-comparison.remaining))
                }
            }
        }
    }
}
