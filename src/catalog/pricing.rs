//! Pricing-tier tables per industry.

use crate::content::PricingTier;
use crate::taxonomy::Industry;

/// Pricing tiers for the given industry.
pub fn pricing(industry: Industry) -> Vec<PricingTier> {
    match industry {
        Industry::Saas | Industry::Tech | Industry::Analytics => vec![
            PricingTier::new(
                "Starter",
                "$0/mo",
                &["Up to 3 projects", "2 team members", "Community support"],
            ),
            PricingTier::new(
                "Pro",
                "$29/mo",
                &[
                    "Unlimited projects",
                    "Up to 25 team members",
                    "Integrations and automations",
                    "Priority support",
                ],
            ),
            PricingTier::new(
                "Business",
                "$79/mo",
                &[
                    "Everything in Pro",
                    "Unlimited team members",
                    "Advanced permissions",
                    "Dedicated success manager",
                ],
            ),
        ],
        Industry::MobileApp | Industry::Game | Industry::Entertainment => vec![
            PricingTier::new("Free", "$0", &["Core experience", "Standard quality", "Ads included"]),
            PricingTier::new(
                "Premium",
                "$4.99/mo",
                &["Ad-free", "Exclusive content", "Offline access"],
            ),
            PricingTier::new(
                "Annual",
                "$39.99/yr",
                &["Everything in Premium", "Two months free", "Early access perks"],
            ),
        ],
        Industry::Service => vec![
            PricingTier::new(
                "Essential",
                "From $99",
                &["Single-visit service", "Upfront quote", "Workmanship guarantee"],
            ),
            PricingTier::new(
                "Standard",
                "From $249",
                &["Multi-visit projects", "Materials included", "Priority scheduling"],
            ),
            PricingTier::new(
                "Premium",
                "Custom",
                &["Large or ongoing work", "Dedicated project lead", "Flexible billing"],
            ),
        ],
        Industry::Education | Industry::DigitalProduct => vec![
            PricingTier::new(
                "Single",
                "$49",
                &["One course or pack", "Lifetime access", "All future updates"],
            ),
            PricingTier::new(
                "Bundle",
                "$129",
                &["Three of your choice", "Lifetime access", "Bonus materials"],
            ),
            PricingTier::new(
                "All Access",
                "$19/mo",
                &["Entire library", "New releases included", "Cancel any time"],
            ),
        ],
        Industry::Health => vec![
            PricingTier::new(
                "Basic",
                "$0",
                &["Starter programs", "Progress tracking", "Community access"],
            ),
            PricingTier::new(
                "Plus",
                "$9.99/mo",
                &["All programs", "Personalized plans", "Expert Q&A"],
            ),
            PricingTier::new(
                "Coach",
                "$49/mo",
                &["Everything in Plus", "1-on-1 check-ins", "Custom programming"],
            ),
        ],
        Industry::Ecommerce | Industry::Food => vec![
            PricingTier::new(
                "Guest",
                "$0",
                &["Full catalog access", "Standard shipping", "Email support"],
            ),
            PricingTier::new(
                "Member",
                "$5/mo",
                &["Free shipping always", "Member pricing", "Early sale access"],
            ),
            PricingTier::new(
                "VIP",
                "$15/mo",
                &["Everything in Member", "Exclusive drops", "Concierge support"],
            ),
        ],
        _ => vec![
            PricingTier::new(
                "Free",
                "$0/mo",
                &["Core functionality", "Community support", "No time limit"],
            ),
            PricingTier::new(
                "Pro",
                "$12/mo",
                &["All functionality", "Priority support", "Advanced options"],
            ),
            PricingTier::new(
                "Team",
                "$39/mo",
                &["Everything in Pro", "Shared workspaces", "Admin controls"],
            ),
        ],
    }
}
