//! Lead record and request types.
//!
//! Field names serialize in camelCase, the wire contract the embedded UI
//! and the CSV export both depend on.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A synthesized business-contact entry. No connection to real-world data.
///
/// Every field is derived from the random draws made when the record is
/// created; records are never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub company_name: String,
    /// `"<first> <last> (<title>)"`
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    /// Pass-through of the caller-supplied label, not synthesized.
    pub industry: String,
    pub company_website: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_in_profile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualification: Option<String>,
}

/// Qualification tier, derived solely from the synthesized company size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Qualification {
    Hot,
    Warm,
    Qualified,
}

impl Qualification {
    /// Tier thresholds: >500 hot, >200 warm, otherwise a base qualified lead.
    pub fn for_size(size: u32) -> Self {
        if size > 500 {
            Qualification::Hot
        } else if size > 200 {
            Qualification::Warm
        } else {
            Qualification::Qualified
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Qualification::Hot => "Hot Lead",
            Qualification::Warm => "Warm Lead",
            Qualification::Qualified => "Qualified Lead",
        }
    }
}

/// Payload of `POST /api/generate-leads`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateLeadsRequest {
    pub industries: Vec<String>,
    pub min_size: u32,
    pub max_size: u32,
    /// Accepted but unused; the geography is fixed to Mumbai.
    #[serde(default)]
    pub location: Option<String>,
}

impl GenerateLeadsRequest {
    /// Requested industries with duplicates collapsed, first occurrence wins.
    pub fn distinct_industries(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for industry in &self.industries {
            if !seen.contains(industry) {
                seen.push(industry.clone());
            }
        }
        seen
    }

    /// Reject parameter combinations the synthesizer has no defined behavior
    /// for: an empty industry set, or an empty size range `[min, max)`.
    pub fn validate(&self) -> Result<(), LeadError> {
        if self.distinct_industries().is_empty() {
            return Err(LeadError::NoIndustries);
        }
        if self.min_size >= self.max_size {
            return Err(LeadError::InvalidSizeRange {
                min: self.min_size,
                max: self.max_size,
            });
        }
        Ok(())
    }
}

/// Validation errors for lead generation requests
#[derive(Error, Debug)]
pub enum LeadError {
    #[error("at least one industry must be selected")]
    NoIndustries,

    #[error("minSize must be less than maxSize (got {min}..{max})")]
    InvalidSizeRange { min: u32, max: u32 },
}

impl IntoResponse for LeadError {
    fn into_response(self) -> Response {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}
