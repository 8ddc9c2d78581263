//! Page Copy
//!
//! Static text for the landing and about pages. Long-form copy is Markdown.

use crate::models::{Feature, FeatureImage, PreviewItem, Value};

pub const MARQUEE_ITEMS: &[&str] = &[
    "Exceptional Coffee",
    "Unhurried Luxury",
    "Single Origin",
    "Artisan Bakes",
    "Amsterdam",
    "Bliksem ⚡",
];

pub const FEATURES: &[Feature] = &[
    Feature {
        image: FeatureImage::Latte,
        alt: "Expertly crafted latte",
        label: "Exceptional Coffee",
        description: "Single-origin beans, sourced directly from family farms across three continents. Each cup tells a story of terroir and craft.",
    },
    Feature {
        image: FeatureImage::Interior,
        alt: "Intimate cafe interior",
        label: "Intimate Atmosphere",
        description: "Velvet seating, warm amber light, and the unhurried pace that turns a coffee break into a genuine ritual.",
    },
    Feature {
        image: FeatureImage::Pastry,
        alt: "Artisan pastry",
        label: "Curated Kitchen",
        description: "A rotating menu of house-made pastries and seasonal small plates, crafted to complement every cup on our list.",
    },
];

pub const MENU_PREVIEW: &[PreviewItem] = &[
    PreviewItem {
        name: "Bliksem Signature",
        category: "Specialty Coffee",
        description: "Double ristretto, smoked vanilla syrup, oat milk, served over a single large ice sphere.",
        price: "€6.50",
    },
    PreviewItem {
        name: "Almond Frangipane",
        category: "Patisserie",
        description: "House-made tart shell, almond cream, seasonal stone fruit, glazed with chamomile honey.",
        price: "€5.00",
    },
    PreviewItem {
        name: "Ethiopian Pour Over",
        category: "Filter Coffee",
        description: "Yirgacheffe natural, blueberry and jasmine notes, brewed to order in a Hario V60.",
        price: "€5.50",
    },
];

pub const LANDING_INTRO_HEADING: &str = "Where every cup carries\n*the weight of a story.*";

pub const LANDING_INTRO: &str = "BliksemCafe was born from a simple conviction: that a great cup of coffee is not merely a drink, but a deliberate pause in a hurried world. We source with obsession, roast with care, and serve with warmth.";

pub const ATMOSPHERE_HEADING: &str = "An unhurried ritual,\n*beautifully held.*";

pub const ATMOSPHERE_BODY: &str = "Tucked along Keizersgracht, our space was designed to slow you down. Deep booths, candlelit tables, the smell of roasted single-origin — a deliberate contrast to the city outside.";

pub const BOOKING_CTA_BODY: &str = "Secure your seat at BliksemCafe. Whether a quiet morning alone or an afternoon with friends — we'll be ready for you.";

pub const ABOUT_HERO_HEADING: &str = "Born from\n*a single conviction.*";

pub const FOUNDERS_QUOTE: &str = "“Coffee, at its best, is not a commodity. It is a landscape, a season, a pair of hands you'll never shake. We wanted to build a place that honours all of that.”";

pub const FOUNDERS_SIGNATURE: &str = "— Marieke & Daan, Founders";

pub const STORY_HEADING: &str = "A canal-side café,\nfive years in the making.";

pub const STORY: &str = "\
Marieke spent three years managing specialty cafés in Melbourne before returning to Amsterdam with a single ambition: to open the most thoughtfully sourced café the city had ever seen. Daan, an architect with a long-standing obsession with roasting, joined her the week she signed the lease on Keizersgracht.

They named the place *Bliksem* — lightning — because that's what a perfect cup feels like. A bolt. Sudden clarity. The world sharpened for a moment.

Five years later, the team has grown to seventeen people. The lease is signed for another decade. And the coffee, we'd argue, has never been better.
";

pub const PULL_QUOTE: &str = "“Slowness is not inefficiency.\nIt is the whole point.”";

pub const VALUES: &[Value] = &[
    Value {
        number: "01",
        title: "Obsessive Sourcing",
        body: "We visit every farm we work with. We cup hundreds of lots each season. Only when a coffee moves us does it make it onto the menu.",
    },
    Value {
        number: "02",
        title: "Unhurried Service",
        body: "A good cup takes time. We won't rush yours. Pull up a chair, take your coat off — this is your hour.",
    },
    Value {
        number: "03",
        title: "Honest Craft",
        body: "No shortcuts, no automated machines, no powders. Everything is made by hand, by people who care deeply about what they're making.",
    },
];
