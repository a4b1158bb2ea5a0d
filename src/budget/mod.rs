//! Monthly budgets per category.
//!
//! There is at most one budget per category and month. Setting a budget for a
//! category and month that already has one replaces its amount.

mod core;
mod create_endpoint;
mod list_endpoint;
mod payload;

pub use core::{
    Budget, BudgetUpsert, NewBudget, create_budget_table, get_all_budgets, upsert_budget,
};
pub use create_endpoint::create_budget_endpoint;
pub use list_endpoint::list_budgets_endpoint;
pub use payload::{BudgetForm, BudgetPayload};

#[cfg(test)]
pub(crate) use core::new_budget;
