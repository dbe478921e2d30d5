//! Simulated lead generation for Mumbai.
//!
//! Everything here is fabricated: records are sampled from small fixed
//! vocabularies with no connection to real businesses or people. The feed
//! module paces delivery purely for UI effect.

pub mod export;
pub mod feed;
pub mod models;
pub mod synthesizer;
pub mod vocab;

pub use feed::{FeedEvent, Pacing};
pub use models::{GenerateLeadsRequest, Lead, LeadError, Qualification};
pub use synthesizer::{generate_leads, LEADS_PER_INDUSTRY};
