//! Wire types for the synthesized page document.
//!
//! `GeneratedContent` is the complete output of one generation call. It is
//! a plain value: downstream editors copy and mutate it, the engine never
//! does. Field names serialize in camelCase because the document is a JSON
//! contract consumed by rendering and persistence layers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::taxonomy::{BusinessType, Industry};

/// A complete, structurally valid marketing-page content document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    pub company_name: String,
    pub tagline: String,
    pub description: String,
    pub features: Vec<String>,
    pub benefits: Vec<String>,
    /// Ordered "how it works" steps.
    pub how_it_works: Vec<String>,
    pub faqs: Vec<Faq>,
    pub pricing: Vec<PricingTier>,
    pub onboarding_questions: Vec<String>,
    pub target_audience: String,
    pub value_proposition: String,
    pub call_to_action: String,
    /// The industry that drove every template lookup.
    pub industry: Industry,
    /// Recorded metadata; selects no templates.
    pub business_type: BusinessType,
    pub social_proof: BTreeMap<String, String>,
    pub testimonials: Vec<Testimonial>,
    pub style: PageStyle,
    pub images: ImageSet,
    pub components: ComponentSet,
    pub sections: Sections,
}

/// One pricing tier on the pricing section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingTier {
    pub name: String,
    pub price: String,
    pub features: Vec<String>,
}

impl PricingTier {
    pub fn new(name: impl Into<String>, price: impl Into<String>, features: &[&str]) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            features: features.iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// One question/answer pair on the FAQ section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

impl Faq {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// One customer quote on the testimonial section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub content: String,
    /// Star rating, 1..=5.
    pub rating: u8,
}

impl Testimonial {
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        content: impl Into<String>,
        rating: u8,
    ) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            content: content.into(),
            rating: rating.clamp(1, 5),
        }
    }
}

/// The resolved visual style of the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageStyle {
    pub theme: String,
    pub color_scheme: String,
    pub layout: String,
    pub visual_style: String,
    pub typography: String,
    pub animations: String,
    pub custom_colors: CustomColors,
    /// One of the eight fixed variation tokens, chosen per call.
    pub design_variation: String,
}

/// The five-slot page palette.
///
/// Populated from the industry's default palette, then selectively
/// overridden by detected prompt colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub text: String,
    pub background: String,
}

/// Image slots for the page, plus any user-supplied uploads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSet {
    pub hero: String,
    pub feature: String,
    pub testimonial: String,
    pub icon: String,
    /// Filled by editing UIs, never by the engine.
    #[serde(default)]
    pub custom_uploads: Vec<String>,
}

/// Named UI component choice per page section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSet {
    pub hero: String,
    pub features: String,
    pub pricing: String,
    pub testimonials: String,
    pub faq: String,
    pub navigation: String,
    pub footer: String,
}

/// Visibility and ordering of the nine page sections.
///
/// The fixed field set makes the nine-key invariant structural: a document
/// cannot be built with a section missing or an extra one present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sections {
    pub hero: SectionSetting,
    pub features: SectionSetting,
    pub benefits: SectionSetting,
    pub pricing: SectionSetting,
    pub faq: SectionSetting,
    pub onboarding: SectionSetting,
    pub stats: SectionSetting,
    pub testimonials: SectionSetting,
    pub contact: SectionSetting,
}

impl Sections {
    /// The default layout: every section enabled, orders 1..=9.
    pub fn default_layout() -> Self {
        Self {
            hero: SectionSetting::enabled(1),
            features: SectionSetting::enabled(2),
            benefits: SectionSetting::enabled(3),
            pricing: SectionSetting::enabled(4),
            faq: SectionSetting::enabled(5),
            onboarding: SectionSetting::enabled(6),
            stats: SectionSetting::enabled(7),
            testimonials: SectionSetting::enabled(8),
            contact: SectionSetting::enabled(9),
        }
    }

    /// All nine settings in display order, for iteration.
    pub fn ordered(&self) -> Vec<(&'static str, &SectionSetting)> {
        let mut entries = vec![
            ("hero", &self.hero),
            ("features", &self.features),
            ("benefits", &self.benefits),
            ("pricing", &self.pricing),
            ("faq", &self.faq),
            ("onboarding", &self.onboarding),
            ("stats", &self.stats),
            ("testimonials", &self.testimonials),
            ("contact", &self.contact),
        ];
        entries.sort_by_key(|(_, setting)| setting.order);
        entries
    }
}

/// Visibility flag and display order for a single section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionSetting {
    pub enabled: bool,
    pub order: u8,
}

impl SectionSetting {
    pub fn enabled(order: u8) -> Self {
        Self {
            enabled: true,
            order,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_orders_are_one_through_nine() {
        let sections = Sections::default_layout();
        let orders: Vec<u8> = sections.ordered().iter().map(|(_, s)| s.order).collect();
        assert_eq!(orders, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert!(sections.ordered().iter().all(|(_, s)| s.enabled));
    }

    #[test]
    fn sections_serialize_nine_keys() {
        let value =
            serde_json::to_value(Sections::default_layout()).expect("serialize sections");
        let object = value.as_object().expect("sections is an object");
        assert_eq!(object.len(), 9);
        assert!(object.contains_key("hero"));
        assert!(object.contains_key("testimonials"));
    }

    #[test]
    fn testimonial_rating_is_clamped() {
        assert_eq!(Testimonial::new("A", "B", "C", 9).rating, 5);
        assert_eq!(Testimonial::new("A", "B", "C", 0).rating, 1);
    }

    #[test]
    fn pricing_tier_wire_shape() {
        let tier = PricingTier::new("Pro", "$29/mo", &["Everything in Free"]);
        let value = serde_json::to_value(&tier).expect("serialize tier");
        assert_eq!(value["name"], "Pro");
        assert_eq!(value["price"], "$29/mo");
        assert!(value["features"].is_array());
    }
}
