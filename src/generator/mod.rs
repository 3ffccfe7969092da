//! Page content synthesis.
//!
//! The [`Synthesizer`] turns a prompt (plus optional classification hints)
//! into one complete [`GeneratedContent`] document: classify, look up every
//! catalog table for the resolved industry, pick the random tagline and
//! design variation, then apply any detected color overrides.
//!
//! Randomness is injected: `new()` uses the thread RNG, `seeded()` a
//! ChaCha8 RNG for reproducible generation, and `with_rng()` accepts any
//! source for tests. Everything else is a pure function of the input.

use rand::rngs::ThreadRng;
use rand::{Rng, RngExt, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::catalog;
use crate::classify::{business_type_of, colors_of, industry_of, ColorToken};
use crate::content::{CustomColors, GeneratedContent, PageStyle, Sections};
use crate::taxonomy::{BusinessType, Industry};

/// Fallback company name for prompts that contain no usable words.
const DEFAULT_COMPANY_NAME: &str = "Your Company";

/// Stateless content synthesizer carrying only its random source.
pub struct Synthesizer<R> {
    rng: R,
}

impl Synthesizer<ThreadRng> {
    /// Creates a synthesizer backed by the thread-local RNG.
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for Synthesizer<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl Synthesizer<ChaCha8Rng> {
    /// Creates a synthesizer with a deterministic seed. The same seed and
    /// input always produce an identical document.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> Synthesizer<R> {
    /// Creates a synthesizer from any random source.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Synthesizes a complete page document for the given prompt.
    ///
    /// Hints take precedence over classification. The business type is
    /// recorded on the document but selects no templates; every content
    /// lookup is keyed by the resolved industry.
    pub fn synthesize(
        &mut self,
        prompt: &str,
        industry_hint: Option<Industry>,
        business_type_hint: Option<BusinessType>,
    ) -> GeneratedContent {
        let industry = industry_hint.unwrap_or_else(|| industry_of(prompt));
        let business_type = business_type_hint.unwrap_or_else(|| business_type_of(prompt));
        let colors = colors_of(prompt);
        debug!(
            %industry,
            %business_type,
            detected_colors = colors.len(),
            "classified prompt"
        );

        let taglines = catalog::taglines(industry);
        let tagline = taglines[self.rng.random_range(0..taglines.len())];
        let variation =
            catalog::DESIGN_VARIATIONS[self.rng.random_range(0..catalog::DESIGN_VARIATIONS.len())];

        let defaults = catalog::theme(industry);
        let mut custom_colors = CustomColors {
            primary: defaults.palette.primary.to_string(),
            secondary: defaults.palette.secondary.to_string(),
            accent: defaults.palette.accent.to_string(),
            text: defaults.palette.text.to_string(),
            background: defaults.palette.background.to_string(),
        };
        apply_color_overrides(&mut custom_colors, &colors);

        GeneratedContent {
            company_name: company_name(prompt),
            tagline: tagline.to_string(),
            description: catalog::description(industry).to_string(),
            features: owned(catalog::features(industry)),
            benefits: owned(catalog::benefits(industry)),
            how_it_works: owned(catalog::how_it_works(industry)),
            faqs: catalog::faqs(industry),
            pricing: catalog::pricing(industry),
            onboarding_questions: owned(catalog::onboarding_questions(industry)),
            target_audience: catalog::target_audience(industry).to_string(),
            value_proposition: catalog::value_proposition(industry).to_string(),
            call_to_action: catalog::call_to_action(industry).to_string(),
            industry,
            business_type,
            social_proof: catalog::social_proof(industry),
            testimonials: catalog::testimonials(industry),
            style: PageStyle {
                theme: defaults.theme.to_string(),
                color_scheme: defaults.color_scheme.to_string(),
                layout: defaults.layout.to_string(),
                visual_style: defaults.visual_style.to_string(),
                typography: defaults.typography.to_string(),
                animations: defaults.animations.to_string(),
                custom_colors,
                design_variation: variation.to_string(),
            },
            images: catalog::images(industry),
            components: catalog::components(industry),
            sections: Sections::default_layout(),
        }
    }
}

/// Applies detected colors to the default palette.
///
/// Detected colors fill primary, secondary, and accent in order; slots
/// without a corresponding detection keep the industry default. White
/// additionally forces both text and background, wherever it was detected.
fn apply_color_overrides(palette: &mut CustomColors, colors: &[ColorToken]) {
    if let Some(color) = colors.first() {
        palette.primary = color.hex().to_string();
    }
    if let Some(color) = colors.get(1) {
        palette.secondary = color.hex().to_string();
    }
    if let Some(color) = colors.get(2) {
        palette.accent = color.hex().to_string();
    }
    if colors.contains(&ColorToken::White) {
        palette.text = ColorToken::White.hex().to_string();
        palette.background = ColorToken::White.hex().to_string();
    }
}

/// Derives a company name from the prompt's leading words.
fn company_name(prompt: &str) -> String {
    let words: Vec<String> = prompt
        .split_whitespace()
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|word| word.chars().any(char::is_alphabetic))
        .take(3)
        .map(title_case)
        .collect();
    if words.is_empty() {
        DEFAULT_COMPANY_NAME.to_string()
    } else {
        words.join(" ")
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}
