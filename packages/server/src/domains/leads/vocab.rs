//! Fixed vocabularies the synthesizer samples from.
//!
//! Small on purpose; collisions across generated records are expected and
//! acceptable for mock data.

pub const MUMBAI_AREAS: &[&str] = &[
    "Andheri",
    "Bandra",
    "Powai",
    "Lower Parel",
    "BKC",
    "Worli",
    "Goregaon",
    "Malad",
    "Vikhroli",
    "Ghatkopar",
    "Thane",
    "Navi Mumbai",
    "Kurla",
    "Santacruz",
    "Juhu",
    "Borivali",
    "Kandivali",
    "Dadar",
    "Parel",
    "Fort",
    "Nariman Point",
    "Churchgate",
];

pub const CONTACT_TITLES: &[&str] = &[
    "Owner",
    "Manager",
    "Sales Head",
    "IT Manager",
    "CEO",
    "CTO",
    "Founder",
    "Director",
];

pub const COMPANY_SUFFIXES: &[&str] = &[
    "Pvt Ltd",
    "Solutions",
    "Services",
    "Group",
    "Corp",
    "Technologies",
    "Enterprises",
    "India",
];

pub const FIRST_NAMES: &[&str] = &[
    "Rajesh", "Priya", "Amit", "Sneha", "Vikram", "Anjali", "Arjun", "Pooja", "Rohan", "Kavita",
];

pub const LAST_NAMES: &[&str] = &[
    "Sharma", "Patel", "Kumar", "Singh", "Mehta", "Shah", "Desai", "Joshi", "Reddy", "Nair",
];

/// Fallback prefixes for industries outside the known set.
const GENERIC_PREFIXES: &[&str] = &["Business"];

/// Company-name prefixes per industry label (exact match).
///
/// Unknown labels fall back to a generic list rather than failing.
pub fn prefixes_for(industry: &str) -> &'static [&'static str] {
    match industry {
        "IT" => &[
            "Tech", "Infotech", "Systems", "Solutions", "Software", "Digital", "Cyber", "Cloud",
        ],
        "Startups" => &[
            "Innovate", "Venture", "Launch", "Spark", "Rise", "Growth", "Scale", "Next",
        ],
        "Digital Marketing" => &[
            "Media", "Creative", "Brand", "Marketing", "Ads", "Social", "Content", "Strategy",
        ],
        "Finance" => &[
            "Capital",
            "Finance",
            "Wealth",
            "Asset",
            "Investment",
            "Advisory",
            "Fintech",
            "Banking",
        ],
        "E-commerce" => &[
            "Shop", "Market", "Store", "Trade", "Commerce", "Retail", "Buy", "Sell",
        ],
        "Healthcare" => &[
            "Health", "Care", "Medical", "Wellness", "Clinic", "Hospital", "Pharma", "Life",
        ],
        "Education" => &[
            "Edu",
            "Learn",
            "Academy",
            "Institute",
            "School",
            "Training",
            "Skills",
            "Knowledge",
        ],
        "Real Estate" => &[
            "Property",
            "Realty",
            "Estates",
            "Homes",
            "Build",
            "Construction",
            "Developers",
            "Projects",
        ],
        _ => GENERIC_PREFIXES,
    }
}
