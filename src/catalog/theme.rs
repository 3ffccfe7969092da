//! Visual theme defaults and design variations.

use crate::taxonomy::Industry;

/// The eight stylistic variation tokens. One is attached to every
/// generated page, chosen uniformly at random.
pub const DESIGN_VARIATIONS: [&str; 8] = [
    "modern-minimal",
    "bold-contrast",
    "soft-gradient",
    "editorial-serif",
    "playful-rounded",
    "corporate-clean",
    "dark-glass",
    "warm-organic",
];

/// Default five-slot palette for an industry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub text: &'static str,
    pub background: &'static str,
}

/// Default visual theme for an industry, before color overrides and the
/// per-call design variation are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub theme: &'static str,
    pub color_scheme: &'static str,
    pub layout: &'static str,
    pub visual_style: &'static str,
    pub typography: &'static str,
    pub animations: &'static str,
    pub palette: Palette,
}

/// Theme defaults for the given industry.
pub fn theme(industry: Industry) -> Theme {
    match industry {
        Industry::Tech => Theme {
            theme: "dark",
            color_scheme: "electric-indigo",
            layout: "split-hero",
            visual_style: "gradient-mesh",
            typography: "geometric-sans",
            animations: "subtle",
            palette: Palette {
                primary: "#6366f1",
                secondary: "#0ea5e9",
                accent: "#22d3ee",
                text: "#e2e8f0",
                background: "#0f172a",
            },
        },
        Industry::Saas => Theme {
            theme: "light",
            color_scheme: "trusted-blue",
            layout: "centered-hero",
            visual_style: "flat-illustrated",
            typography: "humanist-sans",
            animations: "subtle",
            palette: Palette {
                primary: "#2563eb",
                secondary: "#1e40af",
                accent: "#38bdf8",
                text: "#1e293b",
                background: "#f8fafc",
            },
        },
        Industry::MobileApp => Theme {
            theme: "light",
            color_scheme: "fresh-violet",
            layout: "device-showcase",
            visual_style: "rounded-cards",
            typography: "friendly-sans",
            animations: "playful",
            palette: Palette {
                primary: "#8b5cf6",
                secondary: "#6d28d9",
                accent: "#f472b6",
                text: "#27272a",
                background: "#ffffff",
            },
        },
        Industry::Game => Theme {
            theme: "dark",
            color_scheme: "neon-arcade",
            layout: "fullscreen-hero",
            visual_style: "neon-glow",
            typography: "display-bold",
            animations: "dynamic",
            palette: Palette {
                primary: "#a855f7",
                secondary: "#ec4899",
                accent: "#facc15",
                text: "#f4f4f5",
                background: "#18181b",
            },
        },
        Industry::Book => Theme {
            theme: "light",
            color_scheme: "library-cream",
            layout: "editorial",
            visual_style: "paper-texture",
            typography: "classic-serif",
            animations: "none",
            palette: Palette {
                primary: "#92400e",
                secondary: "#78350f",
                accent: "#d97706",
                text: "#292524",
                background: "#fef3c7",
            },
        },
        Industry::Comic => Theme {
            theme: "light",
            color_scheme: "pop-panel",
            layout: "panel-grid",
            visual_style: "halftone",
            typography: "comic-display",
            animations: "playful",
            palette: Palette {
                primary: "#ef4444",
                secondary: "#facc15",
                accent: "#3b82f6",
                text: "#111827",
                background: "#fffbeb",
            },
        },
        Industry::Ecommerce => Theme {
            theme: "light",
            color_scheme: "boutique-neutral",
            layout: "product-grid",
            visual_style: "photo-forward",
            typography: "refined-sans",
            animations: "subtle",
            palette: Palette {
                primary: "#0f766e",
                secondary: "#115e59",
                accent: "#f59e0b",
                text: "#1c1917",
                background: "#fafaf9",
            },
        },
        Industry::Service => Theme {
            theme: "light",
            color_scheme: "dependable-navy",
            layout: "centered-hero",
            visual_style: "flat-clean",
            typography: "sturdy-sans",
            animations: "none",
            palette: Palette {
                primary: "#1d4ed8",
                secondary: "#1e3a8a",
                accent: "#f97316",
                text: "#1f2937",
                background: "#ffffff",
            },
        },
        Industry::Education => Theme {
            theme: "light",
            color_scheme: "campus-green",
            layout: "split-hero",
            visual_style: "flat-illustrated",
            typography: "readable-sans",
            animations: "subtle",
            palette: Palette {
                primary: "#059669",
                secondary: "#047857",
                accent: "#fbbf24",
                text: "#1f2937",
                background: "#f0fdf4",
            },
        },
        Industry::Health => Theme {
            theme: "light",
            color_scheme: "calm-teal",
            layout: "centered-hero",
            visual_style: "soft-shapes",
            typography: "rounded-sans",
            animations: "gentle",
            palette: Palette {
                primary: "#0d9488",
                secondary: "#0f766e",
                accent: "#a3e635",
                text: "#134e4a",
                background: "#f0fdfa",
            },
        },
        Industry::Finance => Theme {
            theme: "light",
            color_scheme: "vault-green",
            layout: "split-hero",
            visual_style: "precise-lines",
            typography: "tabular-sans",
            animations: "none",
            palette: Palette {
                primary: "#15803d",
                secondary: "#14532d",
                accent: "#eab308",
                text: "#1c1917",
                background: "#f8fafc",
            },
        },
        Industry::RealEstate => Theme {
            theme: "light",
            color_scheme: "estate-slate",
            layout: "photo-hero",
            visual_style: "photo-forward",
            typography: "elegant-serif",
            animations: "subtle",
            palette: Palette {
                primary: "#334155",
                secondary: "#1e293b",
                accent: "#b45309",
                text: "#0f172a",
                background: "#f1f5f9",
            },
        },
        Industry::Food => Theme {
            theme: "light",
            color_scheme: "harvest-warm",
            layout: "photo-hero",
            visual_style: "photo-forward",
            typography: "warm-serif",
            animations: "subtle",
            palette: Palette {
                primary: "#c2410c",
                secondary: "#9a3412",
                accent: "#65a30d",
                text: "#292524",
                background: "#fffbeb",
            },
        },
        Industry::Travel => Theme {
            theme: "light",
            color_scheme: "horizon-sky",
            layout: "fullscreen-hero",
            visual_style: "photo-forward",
            typography: "airy-sans",
            animations: "parallax",
            palette: Palette {
                primary: "#0284c7",
                secondary: "#0369a1",
                accent: "#fb923c",
                text: "#0c4a6e",
                background: "#f0f9ff",
            },
        },
        Industry::Entertainment => Theme {
            theme: "dark",
            color_scheme: "spotlight-red",
            layout: "carousel-hero",
            visual_style: "cinematic",
            typography: "display-bold",
            animations: "dynamic",
            palette: Palette {
                primary: "#e11d48",
                secondary: "#9f1239",
                accent: "#fbbf24",
                text: "#fafafa",
                background: "#0a0a0a",
            },
        },
        Industry::DigitalProduct => Theme {
            theme: "light",
            color_scheme: "studio-violet",
            layout: "product-showcase",
            visual_style: "rounded-cards",
            typography: "modern-sans",
            animations: "subtle",
            palette: Palette {
                primary: "#7c3aed",
                secondary: "#5b21b6",
                accent: "#2dd4bf",
                text: "#1e1b4b",
                background: "#faf5ff",
            },
        },
        Industry::Creative => Theme {
            theme: "light",
            color_scheme: "gallery-mono",
            layout: "masonry",
            visual_style: "whitespace-heavy",
            typography: "statement-serif",
            animations: "reveal",
            palette: Palette {
                primary: "#18181b",
                secondary: "#3f3f46",
                accent: "#f43f5e",
                text: "#09090b",
                background: "#ffffff",
            },
        },
        Industry::Productivity => Theme {
            theme: "light",
            color_scheme: "focus-amber",
            layout: "centered-hero",
            visual_style: "flat-clean",
            typography: "compact-sans",
            animations: "subtle",
            palette: Palette {
                primary: "#d97706",
                secondary: "#b45309",
                accent: "#4f46e5",
                text: "#27272a",
                background: "#fafaf9",
            },
        },
        Industry::Social => Theme {
            theme: "light",
            color_scheme: "community-coral",
            layout: "feed-preview",
            visual_style: "rounded-cards",
            typography: "friendly-sans",
            animations: "playful",
            palette: Palette {
                primary: "#f43f5e",
                secondary: "#be123c",
                accent: "#8b5cf6",
                text: "#1f2937",
                background: "#fff1f2",
            },
        },
        Industry::Analytics => Theme {
            theme: "dark",
            color_scheme: "signal-cyan",
            layout: "dashboard-preview",
            visual_style: "data-viz",
            typography: "tabular-sans",
            animations: "subtle",
            palette: Palette {
                primary: "#06b6d4",
                secondary: "#0e7490",
                accent: "#a78bfa",
                text: "#e2e8f0",
                background: "#111827",
            },
        },
        Industry::General => Theme {
            theme: "light",
            color_scheme: "balanced-blue",
            layout: "centered-hero",
            visual_style: "flat-clean",
            typography: "system-sans",
            animations: "subtle",
            palette: Palette {
                primary: "#3b82f6",
                secondary: "#1d4ed8",
                accent: "#f59e0b",
                text: "#1f2937",
                background: "#ffffff",
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_are_five_hex_slots() {
        for industry in Industry::all() {
            let palette = theme(industry).palette;
            for slot in [
                palette.primary,
                palette.secondary,
                palette.accent,
                palette.text,
                palette.background,
            ] {
                assert!(slot.starts_with('#') && slot.len() == 7, "{industry}: {slot}");
            }
        }
    }

    #[test]
    fn color_schemes_are_distinct_per_industry() {
        let mut schemes: Vec<&str> = Industry::all()
            .into_iter()
            .map(|i| theme(i).color_scheme)
            .collect();
        schemes.sort_unstable();
        schemes.dedup();
        assert_eq!(schemes.len(), Industry::all().len());
    }

    #[test]
    fn theme_token_is_light_or_dark() {
        for industry in Industry::all() {
            assert!(matches!(theme(industry).theme, "light" | "dark"));
        }
    }
}
