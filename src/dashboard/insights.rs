use maud::{Markup, html};

use crate::{
    analytics::Insights,
    category::category_name,
    html::{CARD_STYLE, CARD_TITLE_STYLE, format_currency},
};

/// Renders the spending insights and recommendations.
pub(super) fn insights_view(insights: &Insights) -> Markup {
    let top_category = match &insights.top_category {
        Some(top) => html! {
            p class="text-lg font-semibold" { (category_name(&top.category)) }
            p class="text-sm text-gray-600 dark:text-gray-400"
            {
                (format_currency(top.amount)) " spent"
            }
        },
        None => html! {
            p class="text-gray-500" { "No spending yet" }
        },
    };

    html! {
        div id="insights" class="grid grid-cols-1 lg:grid-cols-2 gap-6"
        {
            div class=(CARD_STYLE)
            {
                h3 class=(CARD_TITLE_STYLE) { "Spending Insights" }

                div class="space-y-4"
                {
                    div data-insight="top-category"
                    {
                        h4 class="text-sm font-medium text-gray-500 dark:text-gray-400"
                        {
                            "Top Spending Category"
                        }
                        (top_category)
                    }

                    div data-insight="average-transaction"
                    {
                        h4 class="text-sm font-medium text-gray-500 dark:text-gray-400"
                        {
                            "Average Transaction"
                        }
                        p class="text-lg font-semibold"
                        {
                            (format_currency(insights.average_transaction))
                        }
                    }

                    div data-insight="budgets-exceeded"
                    {
                        h4 class="text-sm font-medium text-gray-500 dark:text-gray-400"
                        {
                            "Budgets Exceeded"
                        }
                        p class="text-lg font-semibold" { (insights.budgets_exceeded) }
                    }
                }
            }

            div class=(CARD_STYLE)
            {
                h3 class=(CARD_TITLE_STYLE) { "Recommendations" }

                ul class="space-y-3"
                {
                    @for recommendation in &insights.recommendations {
                        li class="p-3 rounded-lg bg-blue-50 dark:bg-gray-700"
                        {
                            p class="font-medium" { (recommendation.title()) }
                            p class="text-sm text-gray-600 dark:text-gray-300"
                            {
                                (recommendation.message())
                            }
                        }
                    }
                }
            }
        }
    }
}
