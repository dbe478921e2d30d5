//! CSV export of accumulated leads.
//!
//! One header row, one row per record, every field double-quote-wrapped,
//! absent optionals rendered as empty strings.

use anyhow::Result;
use chrono::NaiveDate;
use csv::{QuoteStyle, WriterBuilder};

use super::models::Lead;

/// Header row, in record-field order.
pub const CSV_HEADERS: [&str; 10] = [
    "Company Name",
    "Contact Name",
    "Contact Email",
    "Contact Phone",
    "Industry",
    "Company Website",
    "Address",
    "LinkedIn Profile",
    "Company Size",
    "Qualification",
];

/// Render the given records as CSV text.
pub fn leads_to_csv(leads: &[Lead]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADERS)?;
    for lead in leads {
        writer.write_record([
            lead.company_name.as_str(),
            lead.contact_name.as_str(),
            lead.contact_email.as_str(),
            lead.contact_phone.as_str(),
            lead.industry.as_str(),
            lead.company_website.as_str(),
            lead.address.as_str(),
            lead.linked_in_profile.as_deref().unwrap_or(""),
            lead.company_size.as_deref().unwrap_or(""),
            lead.qualification.as_deref().unwrap_or(""),
        ])?;
    }

    let bytes = writer.into_inner()?;
    Ok(String::from_utf8(bytes)?)
}

/// Date-stamped attachment name, e.g. `mumbai-leads-2026-08-05.csv`.
pub fn export_filename(date: NaiveDate) -> String {
    format!("mumbai-leads-{}.csv", date.format("%Y-%m-%d"))
}
