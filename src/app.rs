use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/entry", post(handlers::submit_entry))
        .route("/api/day/:date", get(handlers::get_day))
        .route("/api/trend", get(handlers::get_trend))
        .with_state(state)
}
