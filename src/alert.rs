//! Alert system for displaying success and error messages to users.
//!
//! This module provides a unified way to display alert messages across the application
//! with proper styling and dismissal functionality.

use axum::response::{Html, IntoResponse, Response};
use maud::{Markup, html};

/// The ID of the element that alerts are swapped into.
pub const ALERT_CONTAINER_ID: &str = "alert-container";

/// A success or error message shown to the user after an action.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// A success message with additional details.
    Success {
        /// The headline of the alert.
        message: String,
        /// More information about what happened.
        details: String,
    },
    /// A success message with no details.
    SuccessSimple {
        /// The headline of the alert.
        message: String,
    },
    /// An error message with additional details, e.g., how to fix the problem.
    Error {
        /// The headline of the alert.
        message: String,
        /// More information about what went wrong.
        details: String,
    },
}

impl Alert {
    /// Render the alert as an HTML fragment.
    pub fn into_html(self) -> Markup {
        let (is_success, message, details) = match self {
            Alert::Success { message, details } => (true, message, details),
            Alert::SuccessSimple { message } => (true, message, String::new()),
            Alert::Error { message, details } => (false, message, details),
        };

        let style = if is_success {
            "text-green-800 bg-green-50 border-green-300 \
            dark:bg-gray-800 dark:text-green-400 dark:border-green-800"
        } else {
            "text-red-800 bg-red-50 border-red-300 \
            dark:bg-gray-800 dark:text-red-400 dark:border-red-800"
        };

        html! {
            div
                role="alert"
                data-alert-kind=(if is_success { "success" } else { "error" })
                class={ "flex items-start p-4 mb-4 text-sm border rounded-lg shadow-lg " (style) }
            {
                div class="flex-1"
                {
                    p class="font-semibold" { (message) }

                    @if !details.is_empty() {
                        p class="mt-1" { (details) }
                    }
                }

                button
                    type="button"
                    class="ms-3 font-bold"
                    aria-label="Close"
                    onclick="dismissAlert()"
                {
                    "×"
                }
            }
        }
    }

    /// Render the alert wrapped in an out-of-band swap so it can be sent
    /// alongside other content in a single htmx response.
    pub fn into_oob_html(self) -> Markup {
        html! {
            div
                id=(ALERT_CONTAINER_ID)
                hx-swap-oob="true"
                class="w-full max-w-md px-4"
                style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
            {
                (self.into_html())
            }
        }
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        Html(self.into_html().into_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use super::Alert;

    #[test]
    fn success_alert_is_marked_as_success() {
        let markup = Alert::SuccessSimple {
            message: "Transaction added successfully".to_owned(),
        }
        .into_html()
        .into_string();

        let html = Html::parse_fragment(&markup);
        let alert = html
            .select(&Selector::parse("div[role='alert']").unwrap())
            .next()
            .expect("no alert found");
        assert_eq!(alert.value().attr("data-alert-kind"), Some("success"));
        assert!(markup.contains("Transaction added successfully"));
    }

    #[test]
    fn error_alert_shows_details() {
        let markup = Alert::Error {
            message: "Could not delete transaction".to_owned(),
            details: "The transaction could not be found.".to_owned(),
        }
        .into_html()
        .into_string();

        let html = Html::parse_fragment(&markup);
        let paragraphs: Vec<_> = html.select(&Selector::parse("p").unwrap()).collect();
        assert_eq!(paragraphs.len(), 2);
        assert!(markup.contains("data-alert-kind=\"error\""));
    }

    #[test]
    fn oob_alert_targets_alert_container() {
        let markup = Alert::SuccessSimple {
            message: "Budget set successfully".to_owned(),
        }
        .into_oob_html()
        .into_string();

        let html = Html::parse_fragment(&markup);
        let container = html
            .select(&Selector::parse("#alert-container").unwrap())
            .next()
            .expect("no alert container found");
        assert_eq!(container.value().attr("hx-swap-oob"), Some("true"));
    }
}
