//! The fixed list of spending categories.

use axum::Json;
use serde::Serialize;

/// A spending category that transactions and budgets refer to by `id`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Category {
    /// The identifier stored on transactions and budgets, e.g. "food".
    pub id: &'static str,
    /// The display name, e.g. "Food & Dining".
    pub name: &'static str,
    /// The CSS hex colour used for charts and swatches.
    pub color: &'static str,
}

/// The colour used for category ids that are not in [CATEGORIES].
pub const UNKNOWN_CATEGORY_COLOR: &str = "#666";

/// The categories available to transactions and budgets.
///
/// Categories are not stored in the database and cannot be changed at runtime.
pub const CATEGORIES: [Category; 9] = [
    Category {
        id: "food",
        name: "Food & Dining",
        color: "#FF6B6B",
    },
    Category {
        id: "transport",
        name: "Transportation",
        color: "#4ECDC4",
    },
    Category {
        id: "entertainment",
        name: "Entertainment",
        color: "#45B7D1",
    },
    Category {
        id: "shopping",
        name: "Shopping",
        color: "#96CEB4",
    },
    Category {
        id: "utilities",
        name: "Utilities",
        color: "#FFEAA7",
    },
    Category {
        id: "healthcare",
        name: "Healthcare",
        color: "#DDA0DD",
    },
    Category {
        id: "education",
        name: "Education",
        color: "#98D8C8",
    },
    Category {
        id: "savings",
        name: "Savings",
        color: "#A8E6CF",
    },
    Category {
        id: "other",
        name: "Other",
        color: "#FFD93D",
    },
];

/// Look up a category by its id.
pub fn find_category(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|category| category.id == id)
}

/// The display name for a category id, falling back to the id itself.
pub fn category_name(id: &str) -> &str {
    find_category(id).map_or(id, |category| category.name)
}

/// The colour for a category id, falling back to [UNKNOWN_CATEGORY_COLOR].
pub fn category_color(id: &str) -> &'static str {
    find_category(id).map_or(UNKNOWN_CATEGORY_COLOR, |category| category.color)
}

/// A route handler that returns the fixed list of categories.
pub async fn list_categories_endpoint() -> Json<[Category; 9]> {
    Json(CATEGORIES)
}
