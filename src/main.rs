use axum::response::Html;
use axum::routing::{get, post};
use axum::Router;
use expense_buddy::app_state::AppState;
use expense_buddy::dispatch::Dispatcher;
use expense_buddy::handlers::{
    export_expenses_handler, get_budget_handler, log_expense_handler, reset_expenses_handler,
    saving_tip_handler, set_budget_handler, trends_handler,
};
use expense_buddy::ops::{BudgetTrends, ExpenseLogger, SavingTip};
use expense_buddy::store::ExpenseStore;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::error;
use tracing::info;

#[tokio::main]
async fn main() {
    // initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    dotenv::dotenv().ok();

    // init file-backed store
    let db_file =
        dotenv::var("EXPENSE_DB_FILE").unwrap_or_else(|_| "db/expenses.json".to_string());
    let store = match ExpenseStore::open(db_file) {
        Ok(store) => store,
        Err(e) => {
            error!("Error opening expense store: {:#?}", e);
            return;
        }
    };

    if store.is_empty() {
        info!("Expense store is empty, starting fresh.");
    }

    // register operations on the dispatcher
    let mut dispatcher = Dispatcher::new();
    dispatcher.register(Arc::new(ExpenseLogger::new(store.clone())));
    dispatcher.register(Arc::new(BudgetTrends::new(store.clone())));
    dispatcher.register(Arc::new(SavingTip::new(store.clone())));

    // App State
    let app_state = AppState { store, dispatcher };

    // build our application with a route
    let app = Router::new()
        // `GET /` serves the dashboard
        .route("/", get(dashboard))
        .route("/expense", post(log_expense_handler))
        .route("/expense/trends", get(trends_handler))
        .route("/expense/tip", get(saving_tip_handler))
        .route("/budget", get(get_budget_handler).post(set_budget_handler))
        .route("/expenses/export", get(export_expenses_handler))
        .route("/expenses/reset", post(reset_expenses_handler))
        .with_state(app_state)
        .layer((
            TraceLayer::new_for_http(),
            // Graceful shutdown will wait for outstanding requests to complete. Add a timeout so
            // requests don't hang forever.
            TimeoutLayer::new(Duration::from_secs(10)),
        ));

    let bind_addr = dotenv::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    // run our app with hyper
    let listener = tokio::net::TcpListener::bind(&bind_addr).await.unwrap();
    info!("Listening on {}", bind_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();
}

async fn dashboard() -> Html<&'static str> {
    Html(include_str!("../assets/dashboard.html"))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down.");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down.");
        },
    }
}
