//! Progressive delivery feed for synthesized leads.
//!
//! One-shot, one-directional event sequence: staged progress messages, then
//! one `lead` event per record, then a single `complete` marker. The whole
//! batch is synthesized up front; the delays are cosmetic UI pacing, not
//! real work.
//!
//! Events go out over an mpsc channel so the producer stops as soon as the
//! consuming SSE body is dropped (client disconnect).

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio::time::sleep;

use super::models::{GenerateLeadsRequest, Lead};
use super::synthesizer::generate_leads;

/// A single feed emission. The `type` tag is the wire discriminator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FeedEvent {
    Progress { message: String },
    Lead { lead: Lead },
    Complete { message: String },
}

/// Cosmetic delays between emissions.
///
/// Nothing downstream depends on these values; `zero()` disables pacing
/// entirely (tests, local dev).
#[derive(Debug, Clone)]
pub struct Pacing {
    pub search: Duration,
    pub filter: Duration,
    pub extract: Duration,
    pub enrich: Duration,
    pub verify: Duration,
    pub per_lead: Duration,
    pub qualify: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            search: Duration::from_millis(1500),
            filter: Duration::from_millis(1200),
            extract: Duration::from_millis(1000),
            enrich: Duration::from_millis(1500),
            verify: Duration::from_millis(1200),
            per_lead: Duration::from_millis(300),
            qualify: Duration::from_millis(800),
        }
    }
}

impl Pacing {
    pub fn zero() -> Self {
        Self {
            search: Duration::ZERO,
            filter: Duration::ZERO,
            extract: Duration::ZERO,
            enrich: Duration::ZERO,
            verify: Duration::ZERO,
            per_lead: Duration::ZERO,
            qualify: Duration::ZERO,
        }
    }
}

type SendResult = Result<(), mpsc::error::SendError<FeedEvent>>;

/// Emit the fixed event sequence for one generation request.
///
/// An `Err` means the receiver was dropped mid-stream; no cleanup event is
/// emitted in that case.
pub async fn run(
    req: GenerateLeadsRequest,
    pacing: Pacing,
    tx: mpsc::Sender<FeedEvent>,
) -> SendResult {
    let industries = req.distinct_industries();

    progress(&tx, "Searching Google business listings in Mumbai...").await?;
    sleep(pacing.search).await;

    progress(
        &tx,
        &format!("Filtering by industries: {}...", industries.join(", ")),
    )
    .await?;
    sleep(pacing.filter).await;

    progress(&tx, "Extracting contact information...").await?;
    sleep(pacing.extract).await;

    let leads = generate_leads(&industries, req.min_size, req.max_size);
    tracing::info!(
        leads = leads.len(),
        industries = industries.len(),
        "lead batch synthesized"
    );

    progress(&tx, "Enriching profiles with LinkedIn data...").await?;
    sleep(pacing.enrich).await;

    progress(&tx, "Verifying domains and websites...").await?;
    sleep(pacing.verify).await;

    let total = leads.len();
    for (i, lead) in leads.into_iter().enumerate() {
        tx.send(FeedEvent::Lead { lead }).await?;
        sleep(pacing.per_lead).await;

        if (i + 1) % 10 == 0 {
            progress(&tx, &format!("Processed {}/{} leads...", i + 1, total)).await?;
        }
    }

    progress(&tx, "Qualifying leads based on criteria...").await?;
    sleep(pacing.qualify).await;

    tx.send(FeedEvent::Complete {
        message: format!("Successfully generated {total} qualified leads!"),
    })
    .await?;

    Ok(())
}

async fn progress(tx: &mpsc::Sender<FeedEvent>, message: &str) -> SendResult {
    tx.send(FeedEvent::Progress {
        message: message.to_string(),
    })
    .await
}
