//! Dashboard module
//!
//! Provides the single page of the app: summary cards, the transaction and
//! budget forms and lists, charts of the analytics and spending insights.

mod cards;
mod charts;
mod forms;
mod handlers;
mod insights;
mod snapshot;
mod tables;

/// The ID of the element holding everything on the dashboard below the header.
pub const DASHBOARD_CONTENT_ID: &str = "dashboard-content";

pub use handlers::{
    DashboardState, add_transaction_from_form, delete_transaction_from_dashboard,
    get_dashboard_page, get_edit_transaction_form, get_transaction_form, set_budget_from_form,
    update_transaction_from_form,
};
