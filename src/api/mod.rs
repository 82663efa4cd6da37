use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::routing::post;
use axum::{Router, extract::State, http::StatusCode, routing::get};
use serde::Serialize;
use tracing::info;

use crate::error::AppError;
use crate::models::*;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ReportEntry {
    #[serde(flatten)]
    pub occurrence: SessionOccurrence,
    pub summary: String,
}

#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub sessions: Vec<ReportEntry>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/sessions/report", post(generate_report))
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn generate_report(
    State(state): State<AppState>,
    payload: Result<Json<BookingRequest>, JsonRejection>,
) -> Result<Json<ReportResponse>, AppError> {
    let Json(req) = payload?;

    if let Some(max) = state.config.max_total_sessions {
        if req.total_sessions > max {
            return Err(AppError::BadRequest(format!(
                "total_sessions must not exceed {}",
                max
            )));
        }
    }

    let report = state.scheduler.generate_report(&req)?;
    info!("Generated session report with {} sessions", report.len());

    let sessions = report
        .sessions
        .into_iter()
        .map(|occurrence| ReportEntry {
            summary: occurrence.describe(&state.config.date_format),
            occurrence,
        })
        .collect();

    Ok(Json(ReportResponse { sessions }))
}
