use crate::errors::AppError;
use crate::models::{Entry, EntryRequest, TrendResponse};
use crate::scorer;
use crate::state::AppState;
use crate::storage::persist_data;
use crate::store;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use chrono::{Local, NaiveDate};
use tracing::info;

pub async fn index() -> Html<String> {
    let date = today_string();
    Html(render_index(&date))
}

pub async fn get_day(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<Option<Entry>>, AppError> {
    let date = parse_date(&date)?;
    let data = state.data.lock().await;
    Ok(Json(store::find_by_date(&data, &date).cloned()))
}

pub async fn get_trend(State(state): State<AppState>) -> Result<Json<TrendResponse>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(store::build_trend(&data, store::TREND_WINDOW)))
}

pub async fn submit_entry(
    State(state): State<AppState>,
    Json(payload): Json<EntryRequest>,
) -> Result<Json<Entry>, AppError> {
    let date = parse_date(&payload.date)?;
    let results = scorer::compute(&payload.inputs);
    let entry = Entry {
        date,
        inputs: payload.inputs,
        results,
    };

    let mut data = state.data.lock().await;
    store::upsert(&mut data, entry.clone());
    persist_data(&state.data_path, &data).await?;

    info!(
        "recorded {}: burnout {} focus {}",
        entry.date, entry.results.burnout_score, entry.results.focus_stability
    );
    Ok(Json(entry))
}

/// Normalizes a request date to the fixed-width ISO form the store keys on.
fn parse_date(raw: &str) -> Result<String, AppError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map(|date| date.to_string())
        .map_err(|_| AppError::bad_request("date must be YYYY-MM-DD"))
}

fn today_string() -> String {
    Local::now().date_naive().to_string()
}
