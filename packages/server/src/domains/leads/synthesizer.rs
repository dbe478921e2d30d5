//! Synthesizes lead records from the fixed vocabularies.
//!
//! Sampling is independent per field and per record, from an unseeded thread
//! RNG. Nothing guarantees uniqueness across companies, emails, or phone
//! numbers.

use rand::Rng;

use super::models::{Lead, Qualification};
use super::vocab;

/// Fixed batch size per requested industry.
pub const LEADS_PER_INDUSTRY: usize = 8;

/// Produce `LEADS_PER_INDUSTRY` records for each industry label, in input
/// order. Company sizes fall in `[min_size, max_size)`.
///
/// Callers must pass a non-empty industry list and `min_size < max_size`
/// (enforced by request validation); with that, this cannot fail.
pub fn generate_leads(industries: &[String], min_size: u32, max_size: u32) -> Vec<Lead> {
    let mut rng = rand::rng();
    let mut leads = Vec::with_capacity(industries.len() * LEADS_PER_INDUSTRY);

    for industry in industries {
        let prefixes = vocab::prefixes_for(industry);
        for _ in 0..LEADS_PER_INDUSTRY {
            leads.push(synthesize_one(
                &mut rng, industry, prefixes, min_size, max_size,
            ));
        }
    }

    leads
}

fn synthesize_one(
    rng: &mut impl Rng,
    industry: &str,
    prefixes: &[&str],
    min_size: u32,
    max_size: u32,
) -> Lead {
    let prefix = pick(rng, prefixes);
    let suffix = pick(rng, vocab::COMPANY_SUFFIXES);
    let company_name = format!("{prefix} {suffix}");

    let first = pick(rng, vocab::FIRST_NAMES);
    let last = pick(rng, vocab::LAST_NAMES);
    let title = pick(rng, vocab::CONTACT_TITLES);
    let area = pick(rng, vocab::MUMBAI_AREAS);

    let slug = company_slug(&company_name);
    let company_size = rng.random_range(min_size..max_size);
    let qualification = Qualification::for_size(company_size);

    Lead {
        contact_name: format!("{first} {last} ({title})"),
        contact_email: format!(
            "{}.{}@{}.com",
            first.to_lowercase(),
            last.to_lowercase(),
            slug
        ),
        contact_phone: format!(
            "+91 {} {}",
            rng.random_range(10000..100000),
            rng.random_range(10000..100000)
        ),
        industry: industry.to_string(),
        company_website: format!("https://www.{slug}.com"),
        address: format!(
            "{}, {}, Mumbai, Maharashtra 400{}, India",
            rng.random_range(1..=500),
            area,
            rng.random_range(0..100)
        ),
        linked_in_profile: Some(format!(
            "https://www.linkedin.com/in/{}-{}",
            first.to_lowercase(),
            last.to_lowercase()
        )),
        company_size: Some(company_size.to_string()),
        qualification: Some(qualification.label().to_string()),
        company_name,
    }
}

fn pick<'a>(rng: &mut impl Rng, options: &'a [&'a str]) -> &'a str {
    options[rng.random_range(0..options.len())]
}

/// Domain slug shared by the email and website fields: company name
/// lowercased, whitespace stripped, `pvtltd`/`ltd` removed.
fn company_slug(name: &str) -> String {
    let collapsed: String = name.to_lowercase().split_whitespace().collect();
    collapsed.replace("pvtltd", "").replace("ltd", "")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn industries(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn eight_leads_per_industry_in_input_order() {
        let leads = generate_leads(&industries(&["IT", "Finance"]), 10, 20);

        assert_eq!(leads.len(), 2 * LEADS_PER_INDUSTRY);
        assert!(leads[..8].iter().all(|l| l.industry == "IT"));
        assert!(leads[8..].iter().all(|l| l.industry == "Finance"));
    }

    #[test]
    fn company_size_within_half_open_range() {
        let leads = generate_leads(&industries(&["IT"]), 10, 20);

        for lead in &leads {
            let size: u32 = lead.company_size.as_deref().unwrap().parse().unwrap();
            assert!((10..20).contains(&size), "size {size} out of range");
        }
    }

    #[test]
    fn single_size_value_range() {
        let leads = generate_leads(&industries(&["IT"]), 15, 16);
        assert!(leads
            .iter()
            .all(|l| l.company_size.as_deref() == Some("15")));
    }

    #[test]
    fn qualification_matches_size() {
        // Range wide enough to hit all three tiers over 80 records.
        let batch: Vec<String> = (0..10).map(|_| "IT".to_string()).collect();
        let leads = generate_leads(&batch, 1, 1000);

        for lead in &leads {
            let size: u32 = lead.company_size.as_deref().unwrap().parse().unwrap();
            let expected = Qualification::for_size(size).label();
            assert_eq!(lead.qualification.as_deref(), Some(expected));
        }
    }

    #[test]
    fn email_and_website_share_company_slug() {
        let leads = generate_leads(&industries(&["IT"]), 10, 20);

        for lead in &leads {
            let domain = lead
                .contact_email
                .split('@')
                .nth(1)
                .unwrap()
                .strip_suffix(".com")
                .unwrap()
                .to_string();
            assert_eq!(lead.company_website, format!("https://www.{domain}.com"));
            assert!(!domain.contains("ltd"), "slug kept ltd: {domain}");
            assert!(!domain.contains(' '));
        }
    }

    #[test]
    fn contact_fields_are_derived_from_the_same_name_draws() {
        let leads = generate_leads(&industries(&["Finance"]), 10, 20);

        for lead in &leads {
            // "First Last (Title)"
            let name_part = lead.contact_name.split(" (").next().unwrap();
            let mut parts = name_part.split_whitespace();
            let first = parts.next().unwrap().to_lowercase();
            let last = parts.next().unwrap().to_lowercase();

            assert!(lead.contact_email.starts_with(&format!("{first}.{last}@")));
            assert_eq!(
                lead.linked_in_profile.as_deref(),
                Some(format!("https://www.linkedin.com/in/{first}-{last}").as_str())
            );
        }
    }

    #[test]
    fn phone_is_two_five_digit_groups() {
        let leads = generate_leads(&industries(&["IT"]), 10, 20);

        for lead in &leads {
            let rest = lead.contact_phone.strip_prefix("+91 ").unwrap();
            let groups: Vec<&str> = rest.split(' ').collect();
            assert_eq!(groups.len(), 2);
            for group in groups {
                assert_eq!(group.len(), 5);
                assert!(group.chars().all(|c| c.is_ascii_digit()));
            }
        }
    }

    #[test]
    fn address_carries_fixed_city_suffix() {
        let leads = generate_leads(&industries(&["Healthcare"]), 10, 20);

        for lead in &leads {
            assert!(
                lead.address.contains(", Mumbai, Maharashtra 400"),
                "{}",
                lead.address
            );
            assert!(lead.address.ends_with(", India"));
        }
    }

    #[test]
    fn unknown_industry_uses_generic_fallback() {
        let leads = generate_leads(&industries(&["Agriculture"]), 10, 20);

        assert_eq!(leads.len(), LEADS_PER_INDUSTRY);
        for lead in &leads {
            assert_eq!(lead.industry, "Agriculture");
            assert!(
                lead.company_name.starts_with("Business "),
                "{}",
                lead.company_name
            );
        }
    }
}
