//! Social-proof metrics and testimonial tables per industry.

use std::collections::BTreeMap;

use crate::content::Testimonial;
use crate::taxonomy::Industry;

fn metrics(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Social-proof metric map for the given industry.
pub fn social_proof(industry: Industry) -> BTreeMap<String, String> {
    match industry {
        Industry::Saas | Industry::Tech | Industry::Analytics => metrics(&[
            ("teams", "12,000+"),
            ("uptime", "99.9%"),
            ("tasksCompleted", "40M+"),
            ("avgRating", "4.8/5"),
        ]),
        Industry::MobileApp | Industry::Game => metrics(&[
            ("downloads", "1M+"),
            ("dailyPlayers", "150,000+"),
            ("storeRating", "4.7/5"),
        ]),
        Industry::Ecommerce | Industry::Food => metrics(&[
            ("ordersDelivered", "500,000+"),
            ("repeatCustomers", "72%"),
            ("avgRating", "4.9/5"),
        ]),
        Industry::Service => metrics(&[
            ("jobsCompleted", "8,500+"),
            ("yearsInBusiness", "12"),
            ("referralRate", "64%"),
        ]),
        Industry::Education | Industry::DigitalProduct => metrics(&[
            ("students", "85,000+"),
            ("completionRate", "78%"),
            ("avgRating", "4.8/5"),
        ]),
        Industry::Health => metrics(&[
            ("activeMembers", "200,000+"),
            ("sessionsCompleted", "15M+"),
            ("avgStreak", "21 days"),
        ]),
        _ => metrics(&[
            ("happyCustomers", "10,000+"),
            ("countriesServed", "40+"),
            ("avgRating", "4.8/5"),
        ]),
    }
}

/// Testimonials for the given industry.
pub fn testimonials(industry: Industry) -> Vec<Testimonial> {
    match industry {
        Industry::Saas | Industry::Tech | Industry::Analytics => vec![
            Testimonial::new(
                "Maya Chen",
                "Head of Operations",
                "We replaced four tools with this one and our weekly planning meeting went from an hour to fifteen minutes.",
                5,
            ),
            Testimonial::new(
                "Daniel Okafor",
                "Engineering Manager",
                "The first platform my whole team adopted without being asked twice.",
                5,
            ),
            Testimonial::new(
                "Sofia Marques",
                "Founder",
                "Setup took one afternoon. The clarity it gives us is worth many times the price.",
                4,
            ),
        ],
        Industry::Ecommerce | Industry::Food => vec![
            Testimonial::new(
                "Hannah Lee",
                "Verified Buyer",
                "Ordered on Monday, arrived Wednesday, quality better than expected. Already placed my second order.",
                5,
            ),
            Testimonial::new(
                "Marcus Webb",
                "Verified Buyer",
                "The attention to detail in the packaging alone tells you how much they care.",
                5,
            ),
        ],
        Industry::Service => vec![
            Testimonial::new(
                "Priya Natarajan",
                "Homeowner",
                "On time, tidy, and the final bill matched the quote to the dollar.",
                5,
            ),
            Testimonial::new(
                "Tom Gallagher",
                "Property Manager",
                "I manage eleven buildings and this is the only contractor I never have to chase.",
                5,
            ),
        ],
        Industry::Education | Industry::DigitalProduct => vec![
            Testimonial::new(
                "Alex Rivera",
                "Career Changer",
                "Six months ago I knew nothing about this field. Last week I accepted a job offer in it.",
                5,
            ),
            Testimonial::new(
                "Jing Wu",
                "Designer",
                "Worth it for the project files alone. The lessons are a bonus.",
                4,
            ),
        ],
        Industry::Health => vec![
            Testimonial::new(
                "Sarah Donnelly",
                "Member for 2 years",
                "The streak tracking sounds like a gimmick until it quietly rebuilds your whole routine.",
                5,
            ),
            Testimonial::new(
                "Leo Martins",
                "New Member",
                "First program that didn't assume I was already an athlete.",
                5,
            ),
        ],
        _ => vec![
            Testimonial::new(
                "Jordan Avery",
                "Customer",
                "Does exactly what it promises, and support actually answers.",
                5,
            ),
            Testimonial::new(
                "Sam Kowalski",
                "Customer",
                "I recommended it to three friends in the first week.",
                4,
            ),
        ],
    }
}
