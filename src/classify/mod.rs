//! Keyword classification of product prompts.
//!
//! Both classifiers are priority-ordered decision lists: rules are
//! evaluated top-to-bottom over the lowercased prompt and the first rule
//! with any matching keyword wins. There is no scoring. Rule order is a
//! public, load-bearing part of the contract — a prompt mentioning both
//! "software as a service" and "technology" resolves to `saas` because
//! the saas rule is checked first.

mod color;

pub use color::{colors_of, ColorToken, COLOR_RULES};

use crate::taxonomy::{BusinessType, Industry};

/// Ordered industry rules, highest priority first.
///
/// Keywords match as case-insensitive substrings of the prompt.
pub const INDUSTRY_RULES: &[(Industry, &[&str])] = &[
    (
        Industry::Saas,
        &[
            "saas",
            "software as a service",
            "cloud platform",
            "subscription software",
            "crm",
            "project management tool",
        ],
    ),
    (
        Industry::MobileApp,
        &["mobile app", "ios app", "android app", "smartphone app", "app store"],
    ),
    (
        Industry::Game,
        &["game", "gaming", "multiplayer", "esports", "arcade", "puzzle"],
    ),
    (
        Industry::Book,
        &["book", "novel", "memoir", "author", "publishing", "reading list"],
    ),
    (
        Industry::Comic,
        &["comic", "manga", "webtoon", "graphic series", "illustrated stories"],
    ),
    (
        Industry::DigitalProduct,
        &[
            "digital product",
            "digital download",
            "online course",
            "template pack",
            "preset",
            "printable",
        ],
    ),
    (
        Industry::Creative,
        &[
            "portfolio",
            "design studio",
            "photography",
            "illustration",
            "creative agency",
            "artist",
        ],
    ),
    (
        Industry::Productivity,
        &[
            "productivity",
            "todo",
            "task manager",
            "note taking",
            "time tracking",
            "habit tracker",
        ],
    ),
    (
        Industry::Social,
        &[
            "social network",
            "social media",
            "community platform",
            "forum",
            "messaging app",
            "chat app",
        ],
    ),
    (
        Industry::Analytics,
        &[
            "analytics",
            "dashboard",
            "metrics",
            "data insights",
            "reporting",
            "business intelligence",
        ],
    ),
    (
        Industry::Tech,
        &[
            "tech",
            "technology",
            "software",
            "developer",
            "artificial intelligence",
            "machine learning",
            "automation",
        ],
    ),
    (
        Industry::Ecommerce,
        &[
            "ecommerce",
            "e-commerce",
            "online store",
            "storefront",
            "sell products",
            "retail",
            "dropshipping",
        ],
    ),
    (
        Industry::Service,
        &[
            "agency",
            "consulting",
            "freelance",
            "local business",
            "salon",
            "cleaning",
            "plumbing",
            "landscaping",
        ],
    ),
    (
        Industry::Education,
        &[
            "education",
            "learning",
            "course",
            "school",
            "tutoring",
            "students",
            "curriculum",
        ],
    ),
    (
        Industry::Health,
        &[
            "health",
            "fitness",
            "wellness",
            "medical",
            "nutrition",
            "yoga",
            "meditation",
            "workout",
        ],
    ),
    (
        Industry::Finance,
        &[
            "finance",
            "financial",
            "banking",
            "investment",
            "budgeting",
            "accounting",
            "insurance",
            "payments",
        ],
    ),
    (
        Industry::RealEstate,
        &[
            "real estate",
            "property",
            "realtor",
            "housing",
            "mortgage",
            "apartment",
            "rental listings",
        ],
    ),
    (
        Industry::Food,
        &[
            "food",
            "restaurant",
            "recipe",
            "meal",
            "catering",
            "bakery",
            "coffee shop",
        ],
    ),
    (
        Industry::Travel,
        &[
            "travel",
            "vacation",
            "trip planning",
            "tourism",
            "itinerary",
            "flight",
            "adventure",
        ],
    ),
    (
        Industry::Entertainment,
        &[
            "entertainment",
            "music",
            "video",
            "streaming",
            "podcast",
            "movie",
            "events",
        ],
    ),
];

/// Ordered business-type rules, highest priority first.
pub const BUSINESS_TYPE_RULES: &[(BusinessType, &[&str])] = &[
    (
        BusinessType::Marketplace,
        &[
            "marketplace",
            "two-sided",
            "buyers and sellers",
            "connect buyers",
            "vendors",
        ],
    ),
    (
        BusinessType::B2b,
        &[
            "b2b",
            "business to business",
            "for businesses",
            "for teams",
            "for companies",
            "enterprise",
        ],
    ),
    (
        BusinessType::B2c,
        &[
            "b2c",
            "business to consumer",
            "for consumers",
            "for individuals",
            "for everyone",
        ],
    ),
    (
        BusinessType::Subscription,
        &["subscription", "monthly plan", "recurring", "membership"],
    ),
    (
        BusinessType::OneTime,
        &[
            "one-time",
            "one time purchase",
            "pay once",
            "lifetime deal",
            "single purchase",
        ],
    ),
];

/// Classifies a prompt into an industry.
///
/// Total and case-insensitive. Returns [`Industry::General`] when no rule
/// matches, including for empty input.
pub fn industry_of(text: &str) -> Industry {
    let haystack = text.to_lowercase();
    first_match(INDUSTRY_RULES, &haystack).unwrap_or(Industry::General)
}

/// Classifies a prompt into a business type.
///
/// Total and case-insensitive. Returns [`BusinessType::General`] when no
/// rule matches, including for empty input.
pub fn business_type_of(text: &str) -> BusinessType {
    let haystack = text.to_lowercase();
    first_match(BUSINESS_TYPE_RULES, &haystack).unwrap_or(BusinessType::General)
}

fn first_match<L: Copy>(rules: &[(L, &[&str])], haystack: &str) -> Option<L> {
    rules
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| haystack.contains(k)))
        .map(|(label, _)| *label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn industry_no_keywords_is_general() {
        assert_eq!(industry_of("a thing that does stuff"), Industry::General);
    }

    #[test]
    fn industry_empty_is_general() {
        assert_eq!(industry_of(""), Industry::General);
    }

    #[test]
    fn industry_case_insensitive() {
        assert_eq!(industry_of("A SAAS Tool"), Industry::Saas);
        assert_eq!(industry_of("MANGA reader"), Industry::Comic);
    }

    #[test]
    fn industry_saas_beats_tech() {
        // Both rule sets match; saas is higher priority.
        let prompt = "software as a service built on new technology";
        assert_eq!(industry_of(prompt), Industry::Saas);
    }

    #[test]
    fn industry_digital_product_beats_education() {
        // "online course" (digital-product) and "course" (education) both hit.
        let prompt = "an online course about gardening";
        assert_eq!(industry_of(prompt), Industry::DigitalProduct);
    }

    #[test]
    fn industry_priority_is_rule_order() {
        // The rule table itself is the contract: saas before tech,
        // mobile-app before tech, analytics before tech.
        let position = |industry: Industry| {
            INDUSTRY_RULES
                .iter()
                .position(|(label, _)| *label == industry)
                .expect("industry present in rules")
        };
        assert!(position(Industry::Saas) < position(Industry::Tech));
        assert!(position(Industry::MobileApp) < position(Industry::Tech));
        assert!(position(Industry::Analytics) < position(Industry::Tech));
        assert!(position(Industry::Tech) < position(Industry::Ecommerce));
    }

    #[test]
    fn industry_rules_cover_everything_but_general() {
        assert_eq!(INDUSTRY_RULES.len(), 20);
        assert!(INDUSTRY_RULES
            .iter()
            .all(|(label, _)| *label != Industry::General));
    }

    #[test]
    fn business_type_no_keywords_is_general() {
        assert_eq!(business_type_of("a dog walking service"), BusinessType::General);
        assert_eq!(business_type_of(""), BusinessType::General);
    }

    #[test]
    fn business_type_marketplace_beats_b2b() {
        let prompt = "a marketplace for businesses";
        assert_eq!(business_type_of(prompt), BusinessType::Marketplace);
    }

    #[test]
    fn business_type_detects_subscription() {
        assert_eq!(
            business_type_of("a monthly plan for meal kits"),
            BusinessType::Subscription
        );
    }

    #[test]
    fn project_management_prompt_is_saas_general() {
        let prompt = "A SaaS tool for project management with a modern design";
        assert_eq!(industry_of(prompt), Industry::Saas);
        assert_eq!(business_type_of(prompt), BusinessType::General);
    }
}
