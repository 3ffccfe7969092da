//! Category taxonomy for page-forge.
//!
//! Defines the 21 industry labels and 6 business-type labels that drive
//! template selection. Both are closed enumerations with a `general`
//! fallback member that every template table must cover.

use serde::{Deserialize, Serialize};

/// The industry classification of a product prompt.
///
/// This is the primary key for every template-catalog lookup. `General`
/// is the universal fallback and always has a populated entry in every
/// table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Industry {
    Tech,
    Saas,
    MobileApp,
    Game,
    Book,
    Comic,
    Ecommerce,
    Service,
    Education,
    Health,
    Finance,
    RealEstate,
    Food,
    Travel,
    Entertainment,
    DigitalProduct,
    Creative,
    Productivity,
    Social,
    Analytics,
    General,
}

impl Industry {
    /// Returns all industries, fallback last.
    pub fn all() -> Vec<Industry> {
        vec![
            Industry::Tech,
            Industry::Saas,
            Industry::MobileApp,
            Industry::Game,
            Industry::Book,
            Industry::Comic,
            Industry::Ecommerce,
            Industry::Service,
            Industry::Education,
            Industry::Health,
            Industry::Finance,
            Industry::RealEstate,
            Industry::Food,
            Industry::Travel,
            Industry::Entertainment,
            Industry::DigitalProduct,
            Industry::Creative,
            Industry::Productivity,
            Industry::Social,
            Industry::Analytics,
            Industry::General,
        ]
    }

    /// Returns the wire label for this industry (matches the serde form).
    pub fn slug(&self) -> &'static str {
        match self {
            Industry::Tech => "tech",
            Industry::Saas => "saas",
            Industry::MobileApp => "mobile-app",
            Industry::Game => "game",
            Industry::Book => "book",
            Industry::Comic => "comic",
            Industry::Ecommerce => "ecommerce",
            Industry::Service => "service",
            Industry::Education => "education",
            Industry::Health => "health",
            Industry::Finance => "finance",
            Industry::RealEstate => "real-estate",
            Industry::Food => "food",
            Industry::Travel => "travel",
            Industry::Entertainment => "entertainment",
            Industry::DigitalProduct => "digital-product",
            Industry::Creative => "creative",
            Industry::Productivity => "productivity",
            Industry::Social => "social",
            Industry::Analytics => "analytics",
            Industry::General => "general",
        }
    }

    /// Resolves a wire label back to an industry.
    pub fn from_slug(slug: &str) -> Option<Industry> {
        Industry::all().into_iter().find(|i| i.slug() == slug)
    }

    /// Returns the human-readable display name for this industry.
    pub fn display_name(&self) -> &'static str {
        match self {
            Industry::Tech => "Technology",
            Industry::Saas => "SaaS",
            Industry::MobileApp => "Mobile App",
            Industry::Game => "Gaming",
            Industry::Book => "Books & Publishing",
            Industry::Comic => "Comics",
            Industry::Ecommerce => "E-commerce",
            Industry::Service => "Services",
            Industry::Education => "Education",
            Industry::Health => "Health & Wellness",
            Industry::Finance => "Finance",
            Industry::RealEstate => "Real Estate",
            Industry::Food => "Food & Beverage",
            Industry::Travel => "Travel",
            Industry::Entertainment => "Entertainment",
            Industry::DigitalProduct => "Digital Products",
            Industry::Creative => "Creative",
            Industry::Productivity => "Productivity",
            Industry::Social => "Social",
            Industry::Analytics => "Analytics",
            Industry::General => "General",
        }
    }
}

impl std::fmt::Display for Industry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

/// The business-model classification of a product prompt.
///
/// Classified independently of [`Industry`] and recorded on the generated
/// document. It does not select templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BusinessType {
    B2b,
    B2c,
    Marketplace,
    Subscription,
    OneTime,
    General,
}

impl BusinessType {
    /// Returns all business types, fallback last.
    pub fn all() -> Vec<BusinessType> {
        vec![
            BusinessType::B2b,
            BusinessType::B2c,
            BusinessType::Marketplace,
            BusinessType::Subscription,
            BusinessType::OneTime,
            BusinessType::General,
        ]
    }

    /// Returns the wire label for this business type.
    pub fn slug(&self) -> &'static str {
        match self {
            BusinessType::B2b => "b2b",
            BusinessType::B2c => "b2c",
            BusinessType::Marketplace => "marketplace",
            BusinessType::Subscription => "subscription",
            BusinessType::OneTime => "one-time",
            BusinessType::General => "general",
        }
    }

    /// Resolves a wire label back to a business type.
    pub fn from_slug(slug: &str) -> Option<BusinessType> {
        BusinessType::all().into_iter().find(|b| b.slug() == slug)
    }
}

impl std::fmt::Display for BusinessType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_industry_count() {
        assert_eq!(Industry::all().len(), 21);
    }

    #[test]
    fn test_business_type_count() {
        assert_eq!(BusinessType::all().len(), 6);
    }

    #[test]
    fn test_slug_round_trip() {
        for industry in Industry::all() {
            assert_eq!(Industry::from_slug(industry.slug()), Some(industry));
        }
        for business_type in BusinessType::all() {
            assert_eq!(BusinessType::from_slug(business_type.slug()), Some(business_type));
        }
    }

    #[test]
    fn test_slugs_are_unique() {
        let mut slugs: Vec<&str> = Industry::all().iter().map(|i| i.slug()).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), 21);
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        let json = serde_json::to_string(&Industry::RealEstate).expect("serialize");
        assert_eq!(json, "\"real-estate\"");
        let json = serde_json::to_string(&BusinessType::OneTime).expect("serialize");
        assert_eq!(json, "\"one-time\"");
    }

    #[test]
    fn test_from_slug_rejects_unknown() {
        assert_eq!(Industry::from_slug("blockchain"), None);
        assert_eq!(BusinessType::from_slug("b2b2c"), None);
    }
}
