//! Dashboard HTTP handlers and view rendering.
//!
//! This module contains:
//! - Route handlers for displaying the dashboard and the forms on it
//! - Route handlers for the dashboard forms that add, update and delete transactions and set budgets
//! - HTML view functions for rendering the dashboard UI
//!
//! Every handler that changes data responds with the re-rendered dashboard
//! content and an out-of-band alert, so the page always reflects the latest
//! transactions, budgets and analytics.

use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use axum_htmx::HxRequest;
use maud::{Markup, html};
use rusqlite::Connection;
use time::Date;

use crate::{
    AppState, Error,
    alert::{ALERT_CONTAINER_ID, Alert},
    analytics::Insights,
    budget::{BudgetForm, BudgetPayload, BudgetUpsert, upsert_budget},
    category::CATEGORIES,
    dashboard::{
        DASHBOARD_CONTENT_ID,
        cards::summary_cards_view,
        charts::{build_dashboard_charts, charts_view},
        forms::{budget_form, month_string, transaction_form},
        insights::insights_view,
        snapshot::{Snapshot, load_snapshot},
        tables::{budget_overview_view, transaction_list_view},
    },
    endpoints,
    html::{BUTTON_SECONDARY_STYLE, HeadElement, PAGE_CONTAINER_STYLE, base},
    timezone::get_local_date,
    transaction::{
        TransactionForm, TransactionPayload, create_transaction, delete_transaction,
        get_transaction, update_transaction,
    },
};

/// Where the charting library is loaded from.
const ECHARTS_URL: &str = "https://cdn.jsdelivr.net/npm/echarts@6.0.0/dist/echarts.min.js";

/// The tabs on the dashboard as (tab ID, label) pairs, the first is shown by default.
const TABS: [(&str, &str); 4] = [
    ("transactions", "Transactions"),
    ("analytics", "Analytics"),
    ("budgets", "Budgets"),
    ("insights", "Insights"),
];

/// The state needed for displaying the dashboard and handling its forms.
///
/// Contains the database connection and timezone information required
/// by dashboard handlers.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The database connection for managing transactions and budgets.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

impl DashboardState {
    fn lock_connection(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.db_connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)
    }
}

/// Display the dashboard with transactions, budgets, analytics and insights.
///
/// Requests made by htmx, e.g. from the refresh button, only get the
/// dashboard content rather than the whole page.
pub async fn get_dashboard_page(
    State(state): State<DashboardState>,
    HxRequest(is_htmx_request): HxRequest,
) -> Response {
    let rendered = state.lock_connection().and_then(|connection| {
        let snapshot = load_snapshot(&connection)?;
        let today = get_local_date(&state.local_timezone)?;

        Ok((snapshot, today))
    });

    match (rendered, is_htmx_request) {
        (Ok((snapshot, today)), true) => dashboard_content(&snapshot, today).into_response(),
        (Ok((snapshot, today)), false) => dashboard_view(&snapshot, today).into_response(),
        (Err(error), true) => error.into_alert_response(),
        (Err(error), false) => error.into_page_response(),
    }
}

/// Get an empty transaction form, used to cancel editing a transaction.
pub async fn get_transaction_form(State(state): State<DashboardState>) -> Response {
    match get_local_date(&state.local_timezone) {
        Ok(today) => transaction_form(None, &CATEGORIES, today).into_response(),
        Err(error) => error.into_alert_response(),
    }
}

/// Get the transaction form filled in with the transaction `transaction_id`.
pub async fn get_edit_transaction_form(
    State(state): State<DashboardState>,
    Path(transaction_id): Path<String>,
) -> Response {
    let rendered = state.lock_connection().and_then(|connection| {
        let transaction = get_transaction(&transaction_id, &connection)?;
        let today = get_local_date(&state.local_timezone)?;

        Ok(transaction_form(
            Some(&transaction),
            &CATEGORIES,
            today,
        ))
    });

    match rendered {
        Ok(form) => form.into_response(),
        Err(error) => error.into_alert_response(),
    }
}

/// Add a transaction from the dashboard form.
pub async fn add_transaction_from_form(
    State(state): State<DashboardState>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let new_transaction = match TransactionPayload::from(form).validate() {
        Ok(new_transaction) => new_transaction,
        Err(error) => return error.into_alert_response(),
    };

    let connection = match state.lock_connection() {
        Ok(connection) => connection,
        Err(error) => return error.into_alert_response(),
    };

    match create_transaction(new_transaction, &connection) {
        Ok(transaction) => tracing::info!("Created transaction {}", transaction.id),
        Err(error) => return error.into_alert_response(),
    }

    dashboard_content_with_alert(
        &connection,
        &state.local_timezone,
        "Transaction added successfully",
    )
}

/// Replace the transaction `transaction_id` with the dashboard form's values.
pub async fn update_transaction_from_form(
    State(state): State<DashboardState>,
    Path(transaction_id): Path<String>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let new_transaction = match TransactionPayload::from(form).validate() {
        Ok(new_transaction) => new_transaction,
        Err(error) => return error.into_alert_response(),
    };

    let connection = match state.lock_connection() {
        Ok(connection) => connection,
        Err(error) => return error.into_alert_response(),
    };

    if let Err(error) = update_transaction(&transaction_id, &new_transaction, &connection) {
        return error.into_alert_response();
    }
    tracing::info!("Updated transaction {transaction_id}");

    dashboard_content_with_alert(
        &connection,
        &state.local_timezone,
        "Transaction updated successfully",
    )
}

/// Delete the transaction `transaction_id` from the dashboard.
pub async fn delete_transaction_from_dashboard(
    State(state): State<DashboardState>,
    Path(transaction_id): Path<String>,
) -> Response {
    let connection = match state.lock_connection() {
        Ok(connection) => connection,
        Err(error) => return error.into_alert_response(),
    };

    if let Err(error) = delete_transaction(&transaction_id, &connection) {
        return error.into_alert_response();
    }
    tracing::info!("Deleted transaction {transaction_id}");

    dashboard_content_with_alert(
        &connection,
        &state.local_timezone,
        "Transaction deleted successfully",
    )
}

/// Set the budget for a category and month from the dashboard form.
pub async fn set_budget_from_form(
    State(state): State<DashboardState>,
    Form(form): Form<BudgetForm>,
) -> Response {
    let new_budget = match BudgetPayload::from(form).validate() {
        Ok(new_budget) => new_budget,
        Err(error) => return error.into_alert_response(),
    };

    let connection = match state.lock_connection() {
        Ok(connection) => connection,
        Err(error) => return error.into_alert_response(),
    };

    match upsert_budget(new_budget, &connection) {
        Ok(BudgetUpsert::Created(budget)) => tracing::info!("Created budget {}", budget.id),
        Ok(BudgetUpsert::Updated(budget)) => tracing::info!("Updated budget {}", budget.id),
        Err(error) => return error.into_alert_response(),
    }

    dashboard_content_with_alert(&connection, &state.local_timezone, "Budget set successfully")
}

/// Re-render the dashboard content with a success alert swapped in out-of-band.
fn dashboard_content_with_alert(
    connection: &Connection,
    local_timezone: &str,
    message: &str,
) -> Response {
    let snapshot = match load_snapshot(connection) {
        Ok(snapshot) => snapshot,
        Err(error) => return error.into_alert_response(),
    };
    let today = match get_local_date(local_timezone) {
        Ok(today) => today,
        Err(error) => return error.into_alert_response(),
    };

    let alert = Alert::SuccessSimple {
        message: message.to_owned(),
    };

    html! {
        (dashboard_content(&snapshot, today))
        (alert.into_oob_html())
    }
    .into_response()
}

/// Renders the full dashboard page.
fn dashboard_view(snapshot: &Snapshot, today: Date) -> Markup {
    let dashboard_target = format!("#{DASHBOARD_CONTENT_ID}");

    let content = html!(
        div class=(PAGE_CONTAINER_STYLE)
        {
            header class="flex flex-col md:flex-row md:items-center md:justify-between gap-4 mb-8"
            {
                div
                {
                    h1 class="text-3xl font-bold" { "Personal Finance Tracker" }
                    p class="text-gray-600 dark:text-gray-400"
                    {
                        "Track your expenses, manage budgets, and gain insights into your spending habits"
                    }
                }

                button
                    type="button"
                    hx-get=(endpoints::DASHBOARD_VIEW)
                    hx-target=(dashboard_target)
                    hx-swap="outerHTML"
                    class={ "md:w-auto " (BUTTON_SECONDARY_STYLE) }
                {
                    "Refresh"
                }
            }

            (dashboard_content(snapshot, today))
        }
    );

    let scripts = [HeadElement::ScriptLink(ECHARTS_URL.to_owned())];

    base("Dashboard", &scripts, &content)
}

/// Renders the part of the dashboard that is swapped out after every change.
fn dashboard_content(snapshot: &Snapshot, today: Date) -> Markup {
    let (default_tab, _) = TABS[0];
    let charts = build_dashboard_charts(&snapshot.analytics);
    let insights = Insights::from_analytics(&snapshot.analytics);
    let default_month = month_string(today);

    html!(
        div
            id=(DASHBOARD_CONTENT_ID)
            hx-target-error={ "#" (ALERT_CONTAINER_ID) }
            class="w-full"
        {
            (summary_cards_view(snapshot))

            nav class="flex gap-2 mb-6 border-b border-gray-200 dark:border-gray-700"
            {
                @for (tab_id, label) in TABS {
                    button
                        type="button"
                        data-tab=(tab_id)
                        aria-selected=(tab_id == default_tab)
                        class="px-4 py-2 -mb-px border-b-2 border-transparent font-medium
                            aria-selected:border-blue-600 aria-selected:text-blue-600"
                    {
                        (label)
                    }
                }
            }

            div data-tab-panel="transactions" class="grid grid-cols-1 lg:grid-cols-3 gap-6"
            {
                div class="lg:col-span-1"
                {
                    (transaction_form(None, snapshot.categories, today))
                }
                div class="lg:col-span-2"
                {
                    (transaction_list_view(&snapshot.transactions))
                }
            }

            div data-tab-panel="analytics" class="hidden"
            {
                (charts_view(&charts, !snapshot.transactions.is_empty()))
            }

            div data-tab-panel="budgets" class="hidden grid grid-cols-1 lg:grid-cols-3 gap-6"
            {
                div class="lg:col-span-1"
                {
                    (budget_form(snapshot.categories, &default_month))
                }
                div class="lg:col-span-2"
                {
                    (budget_overview_view(&snapshot.analytics.budget_comparison))
                }
            }

            div data-tab-panel="insights" class="hidden"
            {
                (insights_view(&insights))
            }
        }
    )
}
