//! CSV export endpoint.
//!
//! POST /api/export-leads
//!
//! Takes the client's accumulated lead list and returns it as a
//! date-stamped CSV attachment. An empty list is a no-op: 204, no file.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::domains::leads::export::{export_filename, leads_to_csv};
use crate::domains::leads::Lead;

pub async fn export_handler(Json(leads): Json<Vec<Lead>>) -> Response {
    if leads.is_empty() {
        return StatusCode::NO_CONTENT.into_response();
    }

    let csv = match leads_to_csv(&leads) {
        Ok(csv) => csv,
        Err(error) => {
            tracing::error!(%error, "failed to render CSV export");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let filename = export_filename(chrono::Local::now().date_naive());
    tracing::info!(rows = leads.len(), %filename, "exporting leads");

    (
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        csv,
    )
        .into_response()
}
