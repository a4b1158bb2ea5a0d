//! The transaction and budget forms.

use maud::{Markup, html};
use time::Date;

use crate::{
    category::Category,
    dashboard::DASHBOARD_CONTENT_ID,
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, CARD_STYLE, CARD_TITLE_STYLE,
        FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, loading_spinner,
    },
    transaction::Transaction,
};

/// The ID of the transaction form, swapped out when editing starts or is cancelled.
pub const TRANSACTION_FORM_ID: &str = "transaction-form";
/// The ID of the budget form.
pub const BUDGET_FORM_ID: &str = "budget-form";

/// The month of `date` formatted as "YYYY-MM".
pub fn month_string(date: Date) -> String {
    format!("{:04}-{:02}", date.year(), u8::from(date.month()))
}

/// Renders the transaction form.
///
/// With `editing` set the form is filled in from the transaction and submits
/// an update, otherwise it is empty apart from `today` and adds a transaction.
pub fn transaction_form(
    editing: Option<&Transaction>,
    categories: &[Category],
    today: Date,
) -> Markup {
    let (title, submit_text) = match editing {
        Some(_) => ("Edit Transaction", "Update Transaction"),
        None => ("Add Transaction", "Add Transaction"),
    };
    let amount = editing
        .map(|transaction| transaction.amount.to_string())
        .unwrap_or_default();
    let description = editing.map_or("", |transaction| transaction.description.as_str());
    let date = editing.map_or_else(|| today.to_string(), |transaction| transaction.date.clone());
    let selected_category = editing.map_or("", |transaction| transaction.category.as_str());
    let create_endpoint = editing
        .is_none()
        .then_some(endpoints::DASHBOARD_TRANSACTIONS);
    let update_endpoint = editing
        .map(|transaction| format_endpoint(endpoints::DASHBOARD_TRANSACTION, &transaction.id));
    let dashboard_target = format!("#{DASHBOARD_CONTENT_ID}");

    html! {
        div id=(TRANSACTION_FORM_ID) class=(CARD_STYLE)
        {
            h3 class=(CARD_TITLE_STYLE) { (title) }

            form
                hx-post=[create_endpoint]
                hx-put=[update_endpoint]
                hx-target=(dashboard_target)
                hx-swap="outerHTML"
                hx-disabled-elt="find button[type='submit']"
                class="space-y-4"
            {
                div
                {
                    label for="amount" class=(FORM_LABEL_STYLE) { "Amount ($)" }
                    input
                        id="amount"
                        name="amount"
                        type="number"
                        step="0.01"
                        placeholder="0.00"
                        value=(amount)
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="description" class=(FORM_LABEL_STYLE) { "Description" }
                    input
                        id="description"
                        name="description"
                        type="text"
                        placeholder="What did you spend on?"
                        value=(description)
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="date" class=(FORM_LABEL_STYLE) { "Date" }
                    input
                        id="date"
                        name="date"
                        type="date"
                        value=(date)
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="category" class=(FORM_LABEL_STYLE) { "Category" }
                    (category_select("category", categories, selected_category))
                }

                div class="flex gap-2"
                {
                    button type="submit" class=(BUTTON_PRIMARY_STYLE)
                    {
                        (loading_spinner())
                        (submit_text)
                    }

                    @if editing.is_some() {
                        button
                            type="button"
                            hx-get=(endpoints::DASHBOARD_TRANSACTION_FORM)
                            hx-target={ "#" (TRANSACTION_FORM_ID) }
                            hx-swap="outerHTML"
                            class=(BUTTON_SECONDARY_STYLE)
                        {
                            "Cancel"
                        }
                    }
                }
            }
        }
    }
}

/// Renders the budget form, defaulting the month to `default_month`.
pub fn budget_form(categories: &[Category], default_month: &str) -> Markup {
    let dashboard_target = format!("#{DASHBOARD_CONTENT_ID}");

    html! {
        div id=(BUDGET_FORM_ID) class=(CARD_STYLE)
        {
            h3 class=(CARD_TITLE_STYLE) { "Set Budget" }

            form
                hx-post=(endpoints::DASHBOARD_BUDGETS)
                hx-target=(dashboard_target)
                hx-swap="outerHTML"
                hx-disabled-elt="find button[type='submit']"
                class="space-y-4"
            {
                div
                {
                    label for="budget-category" class=(FORM_LABEL_STYLE) { "Category" }
                    (category_select("budget-category", categories, ""))
                }

                div
                {
                    label for="budget-amount" class=(FORM_LABEL_STYLE) { "Monthly Budget ($)" }
                    input
                        id="budget-amount"
                        name="amount"
                        type="number"
                        step="0.01"
                        placeholder="0.00"
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="budget-month" class=(FORM_LABEL_STYLE) { "Month" }
                    input
                        id="budget-month"
                        name="month"
                        type="month"
                        value=(default_month)
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                button type="submit" class=(BUTTON_PRIMARY_STYLE)
                {
                    (loading_spinner())
                    "Set Budget"
                }
            }
        }
    }
}

fn category_select(id: &str, categories: &[Category], selected: &str) -> Markup {
    html! {
        select id=(id) name="category" required class=(FORM_TEXT_INPUT_STYLE)
        {
            option value="" selected[selected.is_empty()] { "Select a category" }

            // Transactions created through the API may use a category outside the list.
            @if !selected.is_empty() && !categories.iter().any(|category| category.id == selected) {
                option value=(selected) selected { (selected) }
            }

            @for category in categories {
                option value=(category.id) selected[category.id == selected]
                {
                    (category.name)
                }
            }
        }
    }
}
