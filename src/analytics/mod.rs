//! Spending analytics computed from every transaction and budget on each request.

mod aggregation;
mod endpoint;
mod insights;

pub use aggregation::{Analytics, BudgetComparison, compute_analytics};
pub use endpoint::get_analytics_endpoint;
pub use insights::{CategoryTotal, Insights, Recommendation};
