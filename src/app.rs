use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post, put}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/browser", get(handlers::get_browser))
        .route("/api/push", post(handlers::push))
        .route("/api/send", post(handlers::send))
        .route("/api/notifications/:id/click", post(handlers::click_notification))
        .route("/api/windows", post(handlers::open_window))
        .route("/api/permission", put(handlers::set_permission))
        .with_state(state)
}
