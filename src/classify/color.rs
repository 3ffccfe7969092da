//! Color preference extraction.
//!
//! Scans a prompt for color-family keywords and returns the matched
//! canonical tokens. Matching is case-insensitive substring containment
//! over a synonym list per family; the synonyms are never returned.

use serde::{Deserialize, Serialize};

/// A canonical color family detected in a prompt.
///
/// Each token carries the hex value used when it overrides a palette slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    Brown,
    White,
    Blue,
    Green,
    Red,
    Purple,
    Pink,
    Yellow,
    Orange,
    Gray,
    Black,
}

impl ColorToken {
    /// Returns the canonical name of this color family.
    pub fn name(&self) -> &'static str {
        match self {
            ColorToken::Brown => "brown",
            ColorToken::White => "white",
            ColorToken::Blue => "blue",
            ColorToken::Green => "green",
            ColorToken::Red => "red",
            ColorToken::Purple => "purple",
            ColorToken::Pink => "pink",
            ColorToken::Yellow => "yellow",
            ColorToken::Orange => "orange",
            ColorToken::Gray => "gray",
            ColorToken::Black => "black",
        }
    }

    /// Returns the hex value this family contributes to a palette override.
    pub fn hex(&self) -> &'static str {
        match self {
            ColorToken::Brown => "#8b5a2b",
            ColorToken::White => "#ffffff",
            ColorToken::Blue => "#2563eb",
            ColorToken::Green => "#16a34a",
            ColorToken::Red => "#dc2626",
            ColorToken::Purple => "#7c3aed",
            ColorToken::Pink => "#db2777",
            ColorToken::Yellow => "#eab308",
            ColorToken::Orange => "#ea580c",
            ColorToken::Gray => "#6b7280",
            ColorToken::Black => "#111111",
        }
    }
}

impl std::fmt::Display for ColorToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Color families and their matching synonyms, in canonical order.
///
/// Declaration order decides which detected color is "first" when the
/// palette override fills primary/secondary/accent slots.
pub const COLOR_RULES: &[(ColorToken, &[&str])] = &[
    (
        ColorToken::Brown,
        &["brown", "tan", "beige", "chocolate", "coffee", "caramel", "mocha"],
    ),
    (ColorToken::White, &["white", "ivory", "snow", "pearl"]),
    (
        ColorToken::Blue,
        &["blue", "navy", "azure", "cobalt", "sapphire"],
    ),
    (
        ColorToken::Green,
        &["green", "emerald", "mint", "olive", "forest"],
    ),
    (
        ColorToken::Red,
        &["red", "crimson", "scarlet", "maroon", "ruby"],
    ),
    (
        ColorToken::Purple,
        &["purple", "violet", "lavender", "plum", "lilac"],
    ),
    (
        ColorToken::Pink,
        &["pink", "rose", "fuchsia", "magenta", "blush"],
    ),
    (
        ColorToken::Yellow,
        &["yellow", "gold", "amber", "mustard"],
    ),
    (
        ColorToken::Orange,
        &["orange", "tangerine", "peach", "apricot", "coral"],
    ),
    (
        ColorToken::Gray,
        &["gray", "grey", "silver", "slate", "charcoal"],
    ),
    (
        ColorToken::Black,
        &["black", "onyx", "ebony", "midnight"],
    ),
];

/// Extracts the set of color families mentioned in a prompt.
///
/// Returns tokens in the canonical [`COLOR_RULES`] order, each family at
/// most once. An input with no recognizable color keyword yields an empty
/// vector.
pub fn colors_of(text: &str) -> Vec<ColorToken> {
    let haystack = text.to_lowercase();
    COLOR_RULES
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| haystack.contains(k)))
        .map(|(token, _)| *token)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_colors_yields_empty() {
        assert!(colors_of("a budgeting tool for students").is_empty());
        assert!(colors_of("").is_empty());
    }

    #[test]
    fn duplicates_collapse_to_one_token() {
        // "brown" twice plus the synonym "tan" still yields one token.
        let colors = colors_of("brown fur, brown eyes, tan paws");
        assert_eq!(colors, vec![ColorToken::Brown]);
    }

    #[test]
    fn multiple_families_all_detected() {
        let colors = colors_of("brown and white dog sitting app");
        assert_eq!(colors, vec![ColorToken::Brown, ColorToken::White]);
    }

    #[test]
    fn order_is_canonical_not_textual() {
        // White appears before brown in the text; canonical order wins.
        let colors = colors_of("white and brown bakery branding");
        assert_eq!(colors, vec![ColorToken::Brown, ColorToken::White]);
    }

    #[test]
    fn synonyms_map_to_canonical_token() {
        assert_eq!(colors_of("a navy theme"), vec![ColorToken::Blue]);
        assert_eq!(colors_of("emerald accents"), vec![ColorToken::Green]);
        assert_eq!(colors_of("CHARCOAL look"), vec![ColorToken::Gray]);
    }

    #[test]
    fn every_family_has_synonyms_and_hex() {
        assert_eq!(COLOR_RULES.len(), 11);
        for (token, keywords) in COLOR_RULES {
            assert!(!keywords.is_empty(), "{token} has no synonyms");
            assert!(token.hex().starts_with('#'));
            // Canonical name is always its own synonym.
            assert!(keywords.contains(&token.name()));
        }
    }
}
