//! FAQ tables per industry.

use crate::content::Faq;
use crate::taxonomy::Industry;

/// FAQ entries for the given industry.
pub fn faqs(industry: Industry) -> Vec<Faq> {
    match industry {
        Industry::Saas | Industry::Tech | Industry::Analytics => vec![
            Faq::new(
                "Is there a free trial?",
                "Yes. Every plan starts with a 14-day trial, no credit card required.",
            ),
            Faq::new(
                "Can I change plans later?",
                "Any time. Upgrades apply immediately and downgrades at the next billing cycle.",
            ),
            Faq::new(
                "How is my data protected?",
                "All data is encrypted in transit and at rest, with regular third-party audits.",
            ),
            Faq::new(
                "Do you integrate with the tools we already use?",
                "We connect with the most popular calendars, chat tools, and storage providers out of the box.",
            ),
        ],
        Industry::MobileApp | Industry::Game => vec![
            Faq::new(
                "Which devices are supported?",
                "Recent iOS and Android versions are fully supported, with tablets included.",
            ),
            Faq::new(
                "Does it work offline?",
                "Core functionality works offline and syncs automatically when you reconnect.",
            ),
            Faq::new(
                "Is it really free to start?",
                "Yes. The core experience is free; optional upgrades unlock extras.",
            ),
        ],
        Industry::Ecommerce | Industry::Food => vec![
            Faq::new(
                "How long does delivery take?",
                "Most orders arrive within 3-5 business days; express options are available at checkout.",
            ),
            Faq::new(
                "What is your return policy?",
                "Returns are free within 30 days in original condition, with instant refunds on receipt.",
            ),
            Faq::new(
                "Do you ship internationally?",
                "We ship to most countries; exact options and costs appear at checkout.",
            ),
        ],
        Industry::Service => vec![
            Faq::new(
                "Are you licensed and insured?",
                "Fully. Documentation is available on request before any work begins.",
            ),
            Faq::new(
                "How do quotes work?",
                "Quotes are free, itemized, and honored for 30 days. No hidden fees.",
            ),
            Faq::new(
                "What if I'm not satisfied?",
                "We return and make it right at no extra charge. Your satisfaction is guaranteed.",
            ),
        ],
        Industry::Education | Industry::DigitalProduct => vec![
            Faq::new(
                "How long do I keep access?",
                "Forever. One purchase includes lifetime access and all future updates.",
            ),
            Faq::new(
                "What if it's not for me?",
                "Every purchase comes with a 30-day money-back guarantee, no questions asked.",
            ),
            Faq::new(
                "Do I need prior experience?",
                "No. Everything starts from the fundamentals and builds up step by step.",
            ),
        ],
        Industry::Health => vec![
            Faq::new(
                "Is this suitable for beginners?",
                "Absolutely. Every plan adapts to your current level and progresses at your pace.",
            ),
            Faq::new(
                "Is the content expert-reviewed?",
                "All programs are designed and reviewed by certified professionals.",
            ),
            Faq::new(
                "Can I cancel any time?",
                "Yes, in two taps from your account settings. You keep access until the period ends.",
            ),
        ],
        _ => vec![
            Faq::new(
                "How do I get started?",
                "Sign up in under a minute and follow the guided setup.",
            ),
            Faq::new(
                "What does it cost?",
                "There is a free tier to explore, and paid plans are listed transparently above.",
            ),
            Faq::new(
                "How can I get help?",
                "Our support team answers within one business day, usually much faster.",
            ),
        ],
    }
}
