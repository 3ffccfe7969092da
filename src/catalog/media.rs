//! Image-slot and UI-component tables per industry.

use crate::content::{ComponentSet, ImageSet};
use crate::taxonomy::Industry;

/// Image slots for the given industry. Paths are keyed by the industry
/// slug so every industry gets its own asset set.
pub fn images(industry: Industry) -> ImageSet {
    let slug = industry.slug();
    ImageSet {
        hero: format!("/assets/{slug}/hero.webp"),
        feature: format!("/assets/{slug}/feature.webp"),
        testimonial: format!("/assets/{slug}/testimonial.webp"),
        icon: format!("/assets/{slug}/icon.svg"),
        custom_uploads: Vec::new(),
    }
}

fn component_set(
    hero: &str,
    features: &str,
    pricing: &str,
    testimonials: &str,
    faq: &str,
    navigation: &str,
    footer: &str,
) -> ComponentSet {
    ComponentSet {
        hero: hero.to_string(),
        features: features.to_string(),
        pricing: pricing.to_string(),
        testimonials: testimonials.to_string(),
        faq: faq.to_string(),
        navigation: navigation.to_string(),
        footer: footer.to_string(),
    }
}

/// UI component choice per section for the given industry.
pub fn components(industry: Industry) -> ComponentSet {
    match industry {
        Industry::Saas | Industry::Tech | Industry::Analytics => component_set(
            "hero-split-screenshot",
            "features-icon-grid",
            "pricing-three-column",
            "testimonials-logo-wall",
            "faq-accordion",
            "nav-sticky-cta",
            "footer-multi-column",
        ),
        Industry::Ecommerce | Industry::Food => component_set(
            "hero-product-photo",
            "features-alternating",
            "pricing-membership-cards",
            "testimonials-review-cards",
            "faq-two-column",
            "nav-cart-aware",
            "footer-newsletter",
        ),
        Industry::Game | Industry::Entertainment => component_set(
            "hero-fullbleed-video",
            "features-showcase-carousel",
            "pricing-tier-cards",
            "testimonials-quote-slider",
            "faq-accordion",
            "nav-transparent",
            "footer-social-heavy",
        ),
        Industry::Creative | Industry::Book | Industry::Comic => component_set(
            "hero-editorial",
            "features-gallery",
            "pricing-simple-list",
            "testimonials-pull-quotes",
            "faq-minimal",
            "nav-minimal",
            "footer-compact",
        ),
        Industry::Service | Industry::RealEstate => component_set(
            "hero-trust-banner",
            "features-checklist",
            "pricing-quote-cards",
            "testimonials-photo-cards",
            "faq-accordion",
            "nav-phone-cta",
            "footer-contact-map",
        ),
        _ => component_set(
            "hero-centered",
            "features-icon-grid",
            "pricing-three-column",
            "testimonials-quote-slider",
            "faq-accordion",
            "nav-standard",
            "footer-multi-column",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_paths_follow_industry_slug() {
        let set = images(Industry::RealEstate);
        assert_eq!(set.hero, "/assets/real-estate/hero.webp");
        assert_eq!(set.icon, "/assets/real-estate/icon.svg");
        assert!(set.custom_uploads.is_empty());
    }

    #[test]
    fn image_sets_are_distinct_per_industry() {
        assert_ne!(images(Industry::Saas).hero, images(Industry::Game).hero);
    }

    #[test]
    fn component_choices_cover_every_section() {
        for industry in Industry::all() {
            let set = components(industry);
            for choice in [
                &set.hero,
                &set.features,
                &set.pricing,
                &set.testimonials,
                &set.faq,
                &set.navigation,
                &set.footer,
            ] {
                assert!(!choice.is_empty(), "{industry}");
            }
        }
    }
}
