//! Static template catalog keyed by industry.
//!
//! Every lookup in this module is a pure function of [`Industry`]
//! implemented as an exhaustive `match`. Industries without bespoke copy
//! share the general entry through the catch-all arm, so "every key
//! resolves to a populated entry" is a compile-time property rather than a
//! runtime fallback. Only the tagline table carries multiple candidates;
//! all other tables are deterministic per industry.
//!
//! The editorial strings are placeholder copy: their structure and
//! per-industry distinctness are the contract, the wording is not.

mod copy;
mod faqs;
mod media;
mod pricing;
mod social;
mod theme;

pub use copy::{
    benefits, call_to_action, description, features, how_it_works, onboarding_questions,
    taglines, target_audience, value_proposition,
};
pub use faqs::faqs;
pub use media::{components, images};
pub use pricing::pricing;
pub use social::{social_proof, testimonials};
pub use theme::{theme, Palette, Theme, DESIGN_VARIATIONS};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::Industry;

    /// Every industry must resolve to populated content in every table.
    #[test]
    fn all_tables_populated_for_all_industries() {
        for industry in Industry::all() {
            assert!(taglines(industry).len() >= 2, "{industry}: taglines");
            assert!(!description(industry).is_empty(), "{industry}: description");
            assert!(!features(industry).is_empty(), "{industry}: features");
            assert!(!benefits(industry).is_empty(), "{industry}: benefits");
            assert!(!how_it_works(industry).is_empty(), "{industry}: steps");
            assert!(!faqs(industry).is_empty(), "{industry}: faqs");
            assert!(!pricing(industry).is_empty(), "{industry}: pricing");
            assert!(
                !onboarding_questions(industry).is_empty(),
                "{industry}: onboarding"
            );
            assert!(
                !target_audience(industry).is_empty(),
                "{industry}: audience"
            );
            assert!(
                !value_proposition(industry).is_empty(),
                "{industry}: value proposition"
            );
            assert!(
                !call_to_action(industry).is_empty(),
                "{industry}: call to action"
            );
            assert!(!social_proof(industry).is_empty(), "{industry}: social proof");
            assert!(!testimonials(industry).is_empty(), "{industry}: testimonials");

            let theme = theme(industry);
            assert!(!theme.color_scheme.is_empty(), "{industry}: theme");
            assert!(theme.palette.primary.starts_with('#'), "{industry}: palette");

            let images = images(industry);
            assert!(!images.hero.is_empty(), "{industry}: images");

            let components = components(industry);
            assert!(!components.hero.is_empty(), "{industry}: components");
        }
    }

    #[test]
    fn pricing_tiers_have_names_prices_and_features() {
        for industry in Industry::all() {
            for tier in pricing(industry) {
                assert!(!tier.name.is_empty());
                assert!(!tier.price.is_empty());
                assert!(!tier.features.is_empty());
            }
        }
    }

    #[test]
    fn design_variation_set_is_fixed() {
        assert_eq!(DESIGN_VARIATIONS.len(), 8);
        let mut sorted = DESIGN_VARIATIONS.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 8, "variation tokens must be distinct");
    }

    #[test]
    fn distinct_industries_get_distinct_headline_copy() {
        assert_ne!(taglines(Industry::Saas), taglines(Industry::Food));
        assert_ne!(description(Industry::Game), description(Industry::Finance));
        assert_ne!(features(Industry::Health), features(Industry::Travel));
    }
}
