//! Application router configuration for the JSON API and the dashboard.

use axum::{
    Router,
    response::Redirect,
    routing::{get, post, put},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    analytics::get_analytics_endpoint,
    budget::{create_budget_endpoint, list_budgets_endpoint},
    category::list_categories_endpoint,
    dashboard::{
        add_transaction_from_form, delete_transaction_from_dashboard, get_dashboard_page,
        get_edit_transaction_form, get_transaction_form, set_budget_from_form,
        update_transaction_from_form,
    },
    endpoints,
    not_found::get_404_not_found,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, edit_transaction_endpoint,
        list_transactions_endpoint,
    },
};

/// Return a router with all the app's routes.
///
/// Unknown paths, and known paths with the wrong method, get a 404 response:
/// JSON under `/api` and an HTML page everywhere else.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route(
            endpoints::TRANSACTIONS_API,
            get(list_transactions_endpoint).post(create_transaction_endpoint),
        )
        .route(
            endpoints::TRANSACTION_API,
            put(edit_transaction_endpoint).delete(delete_transaction_endpoint),
        )
        .route(endpoints::CATEGORIES_API, get(list_categories_endpoint))
        .route(
            endpoints::BUDGETS_API,
            get(list_budgets_endpoint).post(create_budget_endpoint),
        )
        .route(endpoints::ANALYTICS_API, get(get_analytics_endpoint));

    let dashboard_routes = Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(
            endpoints::DASHBOARD_TRANSACTIONS,
            post(add_transaction_from_form),
        )
        .route(
            endpoints::DASHBOARD_TRANSACTION_FORM,
            get(get_transaction_form),
        )
        .route(
            endpoints::DASHBOARD_EDIT_TRANSACTION_FORM,
            get(get_edit_transaction_form),
        )
        .route(
            endpoints::DASHBOARD_TRANSACTION,
            put(update_transaction_from_form).delete(delete_transaction_from_dashboard),
        )
        .route(endpoints::DASHBOARD_BUDGETS, post(set_budget_from_form));

    api_routes
        .merge(dashboard_routes)
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .method_not_allowed_fallback(get_404_not_found)
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the dashboard page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::DASHBOARD_VIEW)
}

#[cfg(test)]
mod root_route_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::{endpoints, routing::get_index_page};

    #[tokio::test]
    async fn root_redirects_to_dashboard() {
        let response = get_index_page().await.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let location = response.headers().get("location").unwrap();
        assert_eq!(location, endpoints::DASHBOARD_VIEW);
    }
}


#[cfg(test)]
mod dashboard_tests {
    use axum::http::{HeaderName, HeaderValue, StatusCode};
    use axum_test::TestServer;
    use rusqlite::Connection;
    use scraper::{Html, Selector};

    use crate::{
        AppState, build_router, endpoints,
        test_utils::assert_valid_html,
        transaction::TransactionForm,
    };

    fn get_test_server() -> TestServer {
        let connection = Connection::open_in_memory().expect("Could not open database in memory.");
        let state = AppState::new(connection, "Etc/UTC").expect("Could not create app state.");

        TestServer::try_new(build_router(state)).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn dashboard_page_renders() {
        let server = get_test_server();

        let response = server.get(endpoints::DASHBOARD_VIEW).await;

        response.assert_status_ok();
        let html = Html::parse_document(&response.text());
        assert_valid_html(&html);
        assert!(
            html.select(&Selector::parse("#dashboard-content").unwrap())
                .next()
                .is_some()
        );
    }

    #[tokio::test]
    async fn form_submission_shows_up_in_api() {
        let server = get_test_server();
        let form = TransactionForm {
            amount: Some("12.5".to_owned()),
            description: Some("Coffee".to_owned()),
            date: Some("2024-01-05".to_owned()),
            category: Some("food".to_owned()),
        };

        let response = server
            .post(endpoints::DASHBOARD_TRANSACTIONS)
            .add_header(
                HeaderName::from_static("hx-request"),
                HeaderValue::from_static("true"),
            )
            .form(&form)
            .await;

        response.assert_status_ok();
        assert!(response.text().contains("Transaction added successfully"));

        let transactions: Vec<serde_json::Value> =
            server.get(endpoints::TRANSACTIONS_API).await.json();
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0]["description"], "Coffee");
    }

    #[tokio::test]
    async fn unknown_page_is_html_not_found() {
        let server = get_test_server();

        let response = server.get("/does-not-exist").await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert!(response.text().contains("<html"));
    }
}
