//! The generated page-content document and its constituent records.

mod types;

pub use types::{
    ComponentSet, CustomColors, Faq, GeneratedContent, ImageSet, PageStyle, PricingTier,
    SectionSetting, Sections, Testimonial,
};
