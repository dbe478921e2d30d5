//! Lead generation streaming endpoint.
//!
//! POST /api/generate-leads
//!
//! Validates the request, then responds with a one-shot SSE feed: staged
//! progress messages, one `lead` event per synthesized record, a `complete`
//! marker. The producer runs in its own task and stops as soon as the client
//! drops the connection (its channel send fails). A producer fault surfaces
//! to the client only as a stream that ends without a `complete` event.

use std::convert::Infallible;

use axum::{
    extract::Extension,
    response::sse::{Event, Sse},
    Json,
};
use tokio::sync::mpsc;

use crate::domains::leads::{feed, GenerateLeadsRequest, LeadError};
use crate::kernel::sse::sse_response;
use crate::server::app::AppState;

/// Buffered events between the producer task and the SSE body.
const FEED_CHANNEL_CAPACITY: usize = 32;

pub async fn generate_handler(
    Extension(state): Extension<AppState>,
    Json(req): Json<GenerateLeadsRequest>,
) -> Result<Sse<impl futures::Stream<Item = Result<Event, Infallible>>>, LeadError> {
    req.validate()?;

    tracing::info!(
        industries = ?req.industries,
        min_size = req.min_size,
        max_size = req.max_size,
        "starting lead feed"
    );

    let (tx, rx) = mpsc::channel(FEED_CHANNEL_CAPACITY);
    let pacing = state.pacing.clone();
    tokio::spawn(async move {
        if let Err(error) = feed::run(req, pacing, tx).await {
            tracing::debug!(%error, "lead feed stopped early, client disconnected");
        }
    });

    Ok(sse_response(rx))
}
