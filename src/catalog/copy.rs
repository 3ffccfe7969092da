//! Editorial copy tables: taglines, descriptions, features, benefits,
//! steps, onboarding questions, audience, value proposition, and call to
//! action.

use crate::taxonomy::Industry;

/// Tagline candidates per industry. The only multi-candidate table; the
/// synthesizer picks one uniformly at random per call.
pub fn taglines(industry: Industry) -> &'static [&'static str] {
    match industry {
        Industry::Tech => &[
            "Build the future, today",
            "Where innovation meets execution",
            "Engineering tomorrow's breakthroughs",
        ],
        Industry::Saas => &[
            "Work smarter, ship faster",
            "One platform for your entire workflow",
            "The tool your team will actually use",
        ],
        Industry::MobileApp => &[
            "Your pocket-sized superpower",
            "Everything you need, one tap away",
        ],
        Industry::Game => &[
            "Play without limits",
            "Your next obsession starts here",
            "Level up your downtime",
        ],
        Industry::Book => &[
            "Stories worth losing sleep over",
            "Turn the page on ordinary",
        ],
        Industry::Comic => &[
            "Panels that pull you in",
            "Art and story, frame by frame",
        ],
        Industry::Ecommerce => &[
            "Shop what you love, love what you get",
            "Curated finds, delivered to your door",
            "Quality you can checkout with confidence",
        ],
        Industry::Service => &[
            "Done right, the first time",
            "Your to-do list, handled",
        ],
        Industry::Education => &[
            "Learn anything, master everything",
            "Knowledge that sticks",
            "Your classroom, everywhere",
        ],
        Industry::Health => &[
            "Feel better, every day",
            "Your wellness, your way",
            "Small habits, big change",
        ],
        Industry::Finance => &[
            "Money, minus the mystery",
            "Grow what you've earned",
        ],
        Industry::RealEstate => &[
            "Find the place you'll call home",
            "Open the door to what's next",
        ],
        Industry::Food => &[
            "Made fresh, served with love",
            "Flavor worth coming back for",
        ],
        Industry::Travel => &[
            "Go farther, stress less",
            "Adventures, perfectly planned",
        ],
        Industry::Entertainment => &[
            "Never a dull moment",
            "Your front-row seat to everything",
        ],
        Industry::DigitalProduct => &[
            "Instant value, instant download",
            "Made by creators, for creators",
        ],
        Industry::Creative => &[
            "Ideas, beautifully realized",
            "Craft that speaks for itself",
        ],
        Industry::Productivity => &[
            "Get more done with less stress",
            "Focus on what matters",
            "Your day, under control",
        ],
        Industry::Social => &[
            "Where your people are",
            "Conversations that count",
        ],
        Industry::Analytics => &[
            "See what your data is telling you",
            "From numbers to decisions",
        ],
        Industry::General => &[
            "Something great is coming",
            "Built for people like you",
            "The smarter way forward",
        ],
    }
}

/// Lead description per industry.
pub fn description(industry: Industry) -> &'static str {
    match industry {
        Industry::Tech => {
            "A modern technology platform that turns complex problems into elegant, dependable solutions for forward-thinking organizations."
        }
        Industry::Saas => {
            "A cloud platform that brings your projects, people, and processes together so your team can plan, track, and deliver in one place."
        }
        Industry::MobileApp => {
            "A beautifully simple app that puts powerful tools in your pocket, designed for the moments when you need them most."
        }
        Industry::Game => {
            "An immersive gaming experience with rich worlds, rewarding progression, and a community that keeps every session fresh."
        }
        Industry::Book => {
            "A home for readers and writers alike, with curated titles, author spotlights, and stories you won't find anywhere else."
        }
        Industry::Comic => {
            "Original comics and serialized art, published chapter by chapter with creators at the center of everything we do."
        }
        Industry::Ecommerce => {
            "A carefully curated online shop with fast shipping, easy returns, and products chosen for quality you can feel."
        }
        Industry::Service => {
            "Professional, reliable service from a local team that shows up on time, communicates clearly, and stands behind its work."
        }
        Industry::Education => {
            "Structured, engaging lessons built by expert instructors, with practice and feedback designed to make learning stick."
        }
        Industry::Health => {
            "Evidence-based guidance, personalized plans, and gentle accountability to help you build a healthier routine that lasts."
        }
        Industry::Finance => {
            "Clear, trustworthy tools that demystify your money, from everyday budgeting to long-term planning and growth."
        }
        Industry::RealEstate => {
            "Listings, insights, and local expertise that make finding, buying, or renting your next place refreshingly simple."
        }
        Industry::Food => {
            "Honest ingredients and recipes made with care, bringing people together around food worth savoring."
        }
        Industry::Travel => {
            "Personalized trip planning with insider recommendations, so every journey feels effortless from takeoff to touchdown."
        }
        Industry::Entertainment => {
            "A constantly refreshed lineup of shows, sounds, and experiences that turn any evening into an event."
        }
        Industry::DigitalProduct => {
            "Premium digital goods you can download instantly and use forever, crafted with obsessive attention to detail."
        }
        Industry::Creative => {
            "A creative practice built on craft and collaboration, delivering work that is as thoughtful as it is striking."
        }
        Industry::Productivity => {
            "A calm, focused workspace that captures your tasks, organizes your day, and keeps distractions where they belong."
        }
        Industry::Social => {
            "A friendly space to meet people who share your interests, with communities that feel genuinely welcoming."
        }
        Industry::Analytics => {
            "Dashboards and insights that turn raw numbers into clear answers, so every decision is backed by evidence."
        }
        Industry::General => {
            "A thoughtfully built product focused on solving real problems for real people, without the noise."
        }
    }
}

/// Feature list per industry.
pub fn features(industry: Industry) -> &'static [&'static str] {
    match industry {
        Industry::Tech => &[
            "Scalable cloud infrastructure",
            "Developer-friendly integrations",
            "Enterprise-grade security",
            "Real-time collaboration",
            "Automated workflows",
        ],
        Industry::Saas => &[
            "Unlimited projects and boards",
            "Role-based team permissions",
            "Third-party integrations",
            "Automated progress reports",
            "Priority email and chat support",
        ],
        Industry::MobileApp => &[
            "Works offline, syncs everywhere",
            "Push notifications that matter",
            "One-tap quick actions",
            "Home-screen widgets",
            "Privacy-first design",
        ],
        Industry::Game => &[
            "Cross-platform multiplayer",
            "Seasonal events and rewards",
            "Deep character progression",
            "Controller and touch support",
            "Cloud save sync",
        ],
        Industry::Book => &[
            "Curated monthly reading lists",
            "Author interviews and notes",
            "Reading progress tracking",
            "Book club discussion guides",
            "Signed and special editions",
        ],
        Industry::Comic => &[
            "Weekly chapter releases",
            "High-resolution panel viewer",
            "Creator commentary tracks",
            "Offline reading library",
            "Early access for supporters",
        ],
        Industry::Ecommerce => &[
            "Free shipping over threshold",
            "30-day hassle-free returns",
            "Secure one-page checkout",
            "Wishlist and restock alerts",
            "Loyalty rewards program",
        ],
        Industry::Service => &[
            "Online booking and scheduling",
            "Upfront, transparent quotes",
            "Licensed and insured teams",
            "Satisfaction guarantee",
            "Same-week availability",
        ],
        Industry::Education => &[
            "Self-paced video lessons",
            "Hands-on projects and quizzes",
            "Instructor feedback",
            "Completion certificates",
            "Lifetime access to materials",
        ],
        Industry::Health => &[
            "Personalized daily plans",
            "Guided sessions for all levels",
            "Progress and streak tracking",
            "Expert-reviewed content",
            "Gentle reminders and check-ins",
        ],
        Industry::Finance => &[
            "Automatic expense categorization",
            "Goal-based savings buckets",
            "Bank-level encryption",
            "Spending insights and alerts",
            "Exportable statements",
        ],
        Industry::RealEstate => &[
            "Map-based listing search",
            "Virtual tours and floor plans",
            "Neighborhood data and schools",
            "Saved searches with alerts",
            "Agent messaging",
        ],
        Industry::Food => &[
            "Seasonal rotating menu",
            "Online ordering and pickup",
            "Dietary filters and labels",
            "Catering for events",
            "Freshness guarantee",
        ],
        Industry::Travel => &[
            "Smart itinerary builder",
            "Price tracking and deals",
            "Offline maps and guides",
            "Local experience recommendations",
            "24/7 trip support",
        ],
        Industry::Entertainment => &[
            "New releases every week",
            "Personalized recommendations",
            "Watch and listen on any device",
            "Curated playlists and collections",
            "Ad-free experience",
        ],
        Industry::DigitalProduct => &[
            "Instant secure download",
            "Free lifetime updates",
            "Commercial-use license",
            "Step-by-step setup guide",
            "Source files included",
        ],
        Industry::Creative => &[
            "Portfolio-quality deliverables",
            "Collaborative revision rounds",
            "Original, handcrafted assets",
            "Clear timelines and milestones",
            "Full usage rights",
        ],
        Industry::Productivity => &[
            "Quick-capture inbox",
            "Smart task prioritization",
            "Calendar and timeline views",
            "Focus mode with sessions",
            "Cross-device sync",
        ],
        Industry::Social => &[
            "Interest-based communities",
            "Rich profiles and portfolios",
            "Moderation tools that work",
            "Events and meetups",
            "Direct and group messaging",
        ],
        Industry::Analytics => &[
            "Customizable dashboards",
            "Scheduled email reports",
            "Anomaly detection alerts",
            "SQL-free data exploration",
            "Team sharing and embeds",
        ],
        Industry::General => &[
            "Simple, intuitive interface",
            "Fast and reliable performance",
            "Helpful customer support",
            "Regular improvements",
            "Fair, transparent pricing",
        ],
    }
}

/// Benefit list per industry.
pub fn benefits(industry: Industry) -> &'static [&'static str] {
    match industry {
        Industry::Tech => &[
            "Ship products faster with less overhead",
            "Scale confidently as demand grows",
            "Reduce operational risk",
            "Free your team to focus on innovation",
        ],
        Industry::Saas => &[
            "Cut status meetings in half",
            "Keep every stakeholder aligned",
            "Never lose track of a deliverable",
            "Onboard new teammates in minutes",
        ],
        Industry::MobileApp => &[
            "Save time on the go",
            "Stay organized without thinking about it",
            "Your data, always within reach",
            "Less friction, more momentum",
        ],
        Industry::Game => &[
            "Endless replayability",
            "Friends and rivals in every match",
            "Progress that always feels earned",
            "A community that welcomes newcomers",
        ],
        Industry::Book => &[
            "Discover your next favorite read",
            "Support authors directly",
            "Read more, scroll less",
            "Join conversations about great stories",
        ],
        Industry::Comic => &[
            "Never miss a chapter",
            "Support independent creators",
            "Read beautifully on any screen",
            "Discover series before they blow up",
        ],
        Industry::Ecommerce => &[
            "Shop with total confidence",
            "Get exactly what you ordered, fast",
            "Save with member-only pricing",
            "Skip the crowded stores",
        ],
        Industry::Service => &[
            "Reclaim your weekends",
            "No surprises on the invoice",
            "One call handles everything",
            "Peace of mind, guaranteed",
        ],
        Industry::Education => &[
            "Learn on your own schedule",
            "Build job-ready skills",
            "Retain more with active practice",
            "Advance your career with proof of mastery",
        ],
        Industry::Health => &[
            "More energy, every single day",
            "Habits that finally stick",
            "Measurable progress you can see",
            "Support without judgment",
        ],
        Industry::Finance => &[
            "Know exactly where your money goes",
            "Reach savings goals sooner",
            "Sleep easier about the future",
            "Make confident financial decisions",
        ],
        Industry::RealEstate => &[
            "Find hidden-gem listings first",
            "Negotiate from a position of knowledge",
            "Skip the weekend open-house marathon",
            "Move in with zero surprises",
        ],
        Industry::Food => &[
            "Eat better without the planning",
            "Taste the difference fresh makes",
            "Impress guests effortlessly",
            "Support local producers",
        ],
        Industry::Travel => &[
            "Spend vacations relaxing, not researching",
            "Travel like a local anywhere",
            "Stretch your budget further",
            "Memories, not logistics",
        ],
        Industry::Entertainment => &[
            "Always something great to watch",
            "Discover artists you'll love",
            "One subscription, endless options",
            "Entertainment that travels with you",
        ],
        Industry::DigitalProduct => &[
            "Start using it in minutes",
            "Professional results without the learning curve",
            "Pay once, benefit forever",
            "Built by people who use it daily",
        ],
        Industry::Creative => &[
            "Stand out in a crowded market",
            "A brand people remember",
            "Work delivered on time, every time",
            "Creative partners, not vendors",
        ],
        Industry::Productivity => &[
            "End each day with an empty inbox",
            "Make steady progress on big goals",
            "Stop dropping the small stuff",
            "Find calm in a busy week",
        ],
        Industry::Social => &[
            "Meet people who get you",
            "Conversations without the toxicity",
            "Grow your audience authentically",
            "Belong to something real",
        ],
        Industry::Analytics => &[
            "Spot trends before competitors do",
            "Replace gut feelings with evidence",
            "Answer questions in seconds, not sprints",
            "Align the whole team on the numbers",
        ],
        Industry::General => &[
            "Save time every single week",
            "Less stress, better results",
            "Everything in one place",
            "Value that grows with you",
        ],
    }
}

/// Ordered "how it works" steps. Several related industries share a flow.
pub fn how_it_works(industry: Industry) -> &'static [&'static str] {
    match industry {
        Industry::Saas | Industry::Tech | Industry::Analytics | Industry::Productivity => &[
            "Create your workspace in under a minute",
            "Invite your team and connect your tools",
            "Organize work the way you already think",
            "Watch progress update itself",
        ],
        Industry::Ecommerce | Industry::Food => &[
            "Browse the collection",
            "Add your favorites to the cart",
            "Check out securely in seconds",
            "Receive your order at your door",
        ],
        Industry::Service => &[
            "Tell us what you need",
            "Get an upfront quote",
            "Pick a time that suits you",
            "Relax while we handle the rest",
        ],
        Industry::Education | Industry::DigitalProduct => &[
            "Pick the course or pack that fits",
            "Get instant access to everything",
            "Learn and practice at your own pace",
            "Apply your new skills right away",
        ],
        Industry::Health => &[
            "Answer a few questions about your goals",
            "Get a plan tailored to you",
            "Follow short daily sessions",
            "Track your progress week over week",
        ],
        Industry::MobileApp | Industry::Game | Industry::Social | Industry::Entertainment => &[
            "Download and create your account",
            "Personalize your experience",
            "Jump straight in",
            "Come back daily for something new",
        ],
        _ => &[
            "Sign up in seconds",
            "Tell us what you're looking for",
            "Get a setup made for you",
            "Enjoy the results",
        ],
    }
}

/// Onboarding questions asked after generation to refine the page.
pub fn onboarding_questions(industry: Industry) -> &'static [&'static str] {
    match industry {
        Industry::Saas | Industry::Tech => &[
            "How large is your team?",
            "Which tools do you already use?",
            "What outcome matters most this quarter?",
        ],
        Industry::Ecommerce => &[
            "How many products will you sell?",
            "Do you ship internationally?",
            "What makes your products special?",
        ],
        Industry::Service => &[
            "What area do you serve?",
            "What services do you offer?",
            "How should customers contact you?",
        ],
        Industry::Health | Industry::Education => &[
            "Who is your ideal client or student?",
            "What results do they want?",
            "What makes your approach different?",
        ],
        _ => &[
            "Who is your target customer?",
            "What problem do you solve for them?",
            "What should visitors do first?",
        ],
    }
}

/// Target-audience line per industry.
pub fn target_audience(industry: Industry) -> &'static str {
    match industry {
        Industry::Tech => "Engineering leaders and product teams at growing companies",
        Industry::Saas => "Teams of 5-500 who have outgrown spreadsheets",
        Industry::MobileApp => "Busy people who live on their phones",
        Industry::Game => "Players who want depth without a second job",
        Industry::Book => "Readers hungry for their next great story",
        Industry::Comic => "Fans of serialized art and indie storytelling",
        Industry::Ecommerce => "Shoppers who value quality over quantity",
        Industry::Service => "Homeowners and businesses who want it done right",
        Industry::Education => "Lifelong learners and career changers",
        Industry::Health => "Anyone ready to feel better, one habit at a time",
        Industry::Finance => "People who want their money working as hard as they do",
        Industry::RealEstate => "Buyers, renters, and sellers who hate guesswork",
        Industry::Food => "Food lovers who care where their meal comes from",
        Industry::Travel => "Travelers who want adventure without the admin",
        Industry::Entertainment => "Audiences tired of scrolling for something good",
        Industry::DigitalProduct => "Creators and professionals who value their time",
        Industry::Creative => "Brands that refuse to look like everyone else",
        Industry::Productivity => "Professionals juggling more than ever",
        Industry::Social => "People looking for genuine connection online",
        Industry::Analytics => "Data-curious teams drowning in spreadsheets",
        Industry::General => "People who want a better way to get things done",
    }
}

/// Value-proposition line per industry.
pub fn value_proposition(industry: Industry) -> &'static str {
    match industry {
        Industry::Tech => "Enterprise capability without enterprise complexity",
        Industry::Saas => "Everything your team needs, nothing it doesn't",
        Industry::MobileApp => "Powerful enough to rely on, simple enough to love",
        Industry::Game => "Easy to pick up, impossible to put down",
        Industry::Book => "Great stories, thoughtfully curated",
        Industry::Comic => "Creator-first comics, reader-first experience",
        Industry::Ecommerce => "Curation and care in every order",
        Industry::Service => "Professional results with personal service",
        Industry::Education => "Real skills from real practitioners",
        Industry::Health => "Sustainable wellness, not quick fixes",
        Industry::Finance => "Financial clarity without the jargon",
        Industry::RealEstate => "Local expertise meets modern tools",
        Industry::Food => "Fresh, honest food at an honest price",
        Industry::Travel => "Insider trips at independent prices",
        Industry::Entertainment => "More of what you love, less searching",
        Industry::DigitalProduct => "Professional quality, instant delivery",
        Industry::Creative => "Craftsmanship that moves the needle",
        Industry::Productivity => "Your time back, every single day",
        Industry::Social => "Community the way it was meant to be",
        Industry::Analytics => "Answers, not just charts",
        Industry::General => "Quality, simplicity, and real value",
    }
}

/// Call-to-action label per industry.
pub fn call_to_action(industry: Industry) -> &'static str {
    match industry {
        Industry::Tech | Industry::Saas | Industry::Analytics => "Start your free trial",
        Industry::MobileApp | Industry::Game => "Download now",
        Industry::Book | Industry::Comic => "Start reading",
        Industry::Ecommerce => "Shop the collection",
        Industry::Service => "Get a free quote",
        Industry::Education => "Enroll today",
        Industry::Health => "Start your journey",
        Industry::Finance => "Take control of your money",
        Industry::RealEstate => "Browse listings",
        Industry::Food => "Order now",
        Industry::Travel => "Plan your trip",
        Industry::Entertainment => "Start watching",
        Industry::DigitalProduct => "Get instant access",
        Industry::Creative => "See our work",
        Industry::Productivity => "Get organized today",
        Industry::Social => "Join the community",
        Industry::General => "Get started",
    }
}
