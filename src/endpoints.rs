//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/transactions/{transaction_id}', use [format_endpoint].

/// The root route which redirects to the dashboard.
pub const ROOT: &str = "/";
/// The page that shows transactions, budgets and analytics.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route for adding a transaction from the dashboard form.
pub const DASHBOARD_TRANSACTIONS: &str = "/dashboard/transactions";
/// The route for updating or deleting a transaction from the dashboard.
pub const DASHBOARD_TRANSACTION: &str = "/dashboard/transactions/{transaction_id}";
/// The route for getting an empty transaction form, i.e. to cancel editing.
pub const DASHBOARD_TRANSACTION_FORM: &str = "/dashboard/transactions/form";
/// The route for getting a transaction form filled in with an existing transaction.
pub const DASHBOARD_EDIT_TRANSACTION_FORM: &str = "/dashboard/transactions/{transaction_id}/edit";
/// The route for setting a budget from the dashboard form.
pub const DASHBOARD_BUDGETS: &str = "/dashboard/budgets";

/// The prefix shared by all JSON API routes.
pub const API_PREFIX: &str = "/api";
/// The route to access transactions.
pub const TRANSACTIONS_API: &str = "/api/transactions";
/// The route to access a single transaction.
pub const TRANSACTION_API: &str = "/api/transactions/{transaction_id}";
/// The route to get the fixed list of categories.
pub const CATEGORIES_API: &str = "/api/categories";
/// The route to access budgets.
pub const BUDGETS_API: &str = "/api/budgets";
/// The route to get the spending analytics.
pub const ANALYTICS_API: &str = "/api/analytics";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/api/transactions/{transaction_id}',
/// '{transaction_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: &str) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
