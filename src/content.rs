//! Copy and static records rendered by the landing page sections.

use crate::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FaqCategory {
    Installation,
    Equipment,
    Pricing,
    Support,
}

impl FaqCategory {
    pub const ALL: [FaqCategory; 4] = [
        FaqCategory::Installation,
        FaqCategory::Equipment,
        FaqCategory::Pricing,
        FaqCategory::Support,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FaqCategory::Installation => "Installation",
            FaqCategory::Equipment => "Equipment",
            FaqCategory::Pricing => "Pricing",
            FaqCategory::Support => "Support",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
    pub category: FaqCategory,
}

pub static FAQS: [FaqEntry; 12] = [
    FaqEntry {
        category: FaqCategory::Installation,
        question: "How long does a typical security camera installation take?",
        answer: "Most residential installations are completed within a single day, usually 4 to 8 hours depending on the number of cameras and complexity of the layout. Commercial projects typically take 1 to 3 days. We always give you a clear timeframe during your free assessment so there are no surprises.",
    },
    FaqEntry {
        category: FaqCategory::Installation,
        question: "Do I need to be home during the installation?",
        answer: "Yes, we do require someone to be present at the start of the installation to go over placement, access points, and any preferences. After that initial walkthrough our team can work independently, and we'll do a final walkthrough with you before we leave.",
    },
    FaqEntry {
        category: FaqCategory::Installation,
        question: "Will you install cameras in an existing building without major renovation?",
        answer: "Absolutely. We specialize in clean, low-impact installations. We use the most efficient cabling routes possible and take care to minimize any wall penetrations. For most buildings, the installation requires no renovation work whatsoever.",
    },
    FaqEntry {
        category: FaqCategory::Equipment,
        question: "What camera brands and types do you install?",
        answer: "We work with industry-leading brands known for reliability and image quality. We install HD and 4K IP cameras, PTZ cameras, fisheye cameras, license plate recognition cameras, and doorbell cameras, all selected to match your specific coverage needs and budget.",
    },
    FaqEntry {
        category: FaqCategory::Equipment,
        question: "Can your cameras record at night or in low-light conditions?",
        answer: "Yes. All of our standard camera packages include infrared night vision capable of producing clear footage in complete darkness. We also offer color night vision cameras that use ambient light to deliver full-color footage even at night.",
    },
    FaqEntry {
        category: FaqCategory::Equipment,
        question: "How much footage storage do I get and where is it stored?",
        answer: "We offer both local storage (NVR/DVR hard drives) and cloud storage options. Local storage typically holds 30 to 90 days of footage depending on the number of cameras and recording settings. Cloud plans offer secure off-site backup with 30-day retention and remote access from any device.",
    },
    FaqEntry {
        category: FaqCategory::Pricing,
        question: "How much does a security camera system cost?",
        answer: "Pricing varies based on the number of cameras, equipment tier, and installation complexity. Residential systems typically start around $800 to $1,500 fully installed. Commercial systems are custom-quoted. Every quote is fully itemized, so you'll always know exactly what you're paying for with zero hidden fees.",
    },
    FaqEntry {
        category: FaqCategory::Pricing,
        question: "Do you offer financing or payment plans?",
        answer: "Yes, we offer flexible payment options for larger commercial installs. Ask your technician or mention it during your free assessment and we'll walk you through the available options.",
    },
    FaqEntry {
        category: FaqCategory::Pricing,
        question: "Is the free assessment really free with no obligation?",
        answer: "100% free, 100% no obligation. We'll visit your property, evaluate your security needs, and provide a detailed written quote. You're never pressured to commit. We let our expertise and pricing speak for themselves.",
    },
    FaqEntry {
        category: FaqCategory::Support,
        question: "What happens if a camera stops working after installation?",
        answer: "All our installations are covered by a 5-year warranty on workmanship. Equipment is covered by the manufacturer's warranty. If anything stops working, call our 24/7 support line and we'll troubleshoot remotely or dispatch a technician, usually same or next day.",
    },
    FaqEntry {
        category: FaqCategory::Support,
        question: "Can I access my cameras remotely from my phone?",
        answer: "Yes. We set up remote access on your smartphone, tablet, or computer as part of every installation. You'll be able to view live feeds, review recorded footage, receive motion alerts, and manage settings from anywhere in the world.",
    },
    FaqEntry {
        category: FaqCategory::Support,
        question: "Do you offer maintenance plans for ongoing upkeep?",
        answer: "Yes, we offer annual maintenance packages that include a full system inspection, lens cleaning, firmware updates, and a health check on all recording equipment. This keeps your system performing at peak level year after year.",
    },
];

pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 4],
    pub featured: bool,
}

pub static SERVICES: [Service; 6] = [
    Service {
        id: "01",
        title: "CCTV Camera Installation",
        tagline: "Crystal-clear coverage, everywhere.",
        description: "We design and install professional HD and 4K CCTV systems tailored to your property's unique layout, maximizing coverage with zero blind spots.",
        features: ["HD & 4K resolution cameras", "Indoor & outdoor rated", "Night vision & infrared", "Vandal-resistant housings"],
        featured: true,
    },
    Service {
        id: "02",
        title: "Commercial Security Systems",
        tagline: "Enterprise-grade protection at scale.",
        description: "From retail chains to warehouses and office complexes, we build multi-camera networks with centralized management and access control integration.",
        features: ["Multi-site management", "Access control integration", "License plate recognition", "Custom alert zones"],
        featured: false,
    },
    Service {
        id: "03",
        title: "Residential Security",
        tagline: "Home protection, simplified.",
        description: "Protect your family and property with smart home-compatible systems that are easy to use and professionally installed.",
        features: ["Smart home integration", "Mobile app monitoring", "Doorbell cameras", "Motion-triggered alerts"],
        featured: false,
    },
    Service {
        id: "04",
        title: "Cloud & Remote Monitoring",
        tagline: "Watch from anywhere, anytime.",
        description: "Secure cloud storage and remote access lets you monitor your property live from any device, 24/7, no matter where you are.",
        features: ["Encrypted cloud storage", "Live remote viewing", "30-day footage retention", "Multi-user access controls"],
        featured: false,
    },
    Service {
        id: "05",
        title: "Alarm & Intrusion Detection",
        tagline: "Stop threats before they escalate.",
        description: "Integrated alarm systems with motion detectors, door/window sensors, and instant professional monitoring response.",
        features: ["Motion & glass-break sensors", "24/7 professional monitoring", "Instant SMS & call alerts", "Police dispatch integration"],
        featured: false,
    },
    Service {
        id: "06",
        title: "System Upgrades & Maintenance",
        tagline: "Keep your system at peak performance.",
        description: "Already have a system? We upgrade outdated equipment, fix dead zones, and provide ongoing maintenance to keep everything running flawlessly.",
        features: ["Free system assessment", "Analog to IP upgrades", "Preventive maintenance plans", "Same-day repair service"],
        featured: false,
    },
];

pub struct ProcessStep {
    pub number: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub details: [&'static str; 3],
}

pub static STEPS: [ProcessStep; 5] = [
    ProcessStep {
        number: "01",
        title: "Free Consultation",
        subtitle: "We listen first.",
        description: "Call us or submit a quote request online. Our security specialists will discuss your property, concerns, and goals. No hard sells, just expert guidance.",
        duration: "Same day response",
        details: ["Phone, email, or online form", "No obligation whatsoever", "Speak directly with an expert"],
    },
    ProcessStep {
        number: "02",
        title: "Site Assessment",
        subtitle: "We assess every angle.",
        description: "Our technicians visit your property to conduct a thorough walkthrough. We identify vulnerabilities, blind spots, and the optimal camera positions for full coverage.",
        duration: "1-2 hours on-site",
        details: ["Full property walkthrough", "Blind spot identification", "Written assessment report"],
    },
    ProcessStep {
        number: "03",
        title: "Custom System Design",
        subtitle: "Built around your needs.",
        description: "We design a tailored security blueprint, selecting the right cameras, recorders, storage, and monitoring plan to match your exact requirements and budget.",
        duration: "24-hour turnaround",
        details: ["Camera placement diagram", "Equipment recommendations", "Transparent pricing breakdown"],
    },
    ProcessStep {
        number: "04",
        title: "Professional Installation",
        subtitle: "Clean, fast, zero disruption.",
        description: "Our certified installers handle cabling, mounting, configuration, and testing. We work around your schedule to minimize any interruption to your business or home.",
        duration: "1-3 days typically",
        details: ["Licensed & insured technicians", "Neat cable management", "Full system testing & QA"],
    },
    ProcessStep {
        number: "05",
        title: "Handoff & Ongoing Support",
        subtitle: "You're never on your own.",
        description: "We walk you through every feature, set up your mobile app, and make sure you're fully confident operating your system. Then we stay available 24/7 for support.",
        duration: "Lifetime support",
        details: ["Live app setup & walkthrough", "24/7 technical support line", "Annual maintenance check-ins"],
    },
];

pub struct Reason {
    pub glyph: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
}

pub static REASONS: [Reason; 6] = [
    Reason { glyph: "🛠", title: "Certified Technicians", blurb: "Licensed, background-checked pros. Never subcontractors." },
    Reason { glyph: "⚡", title: "Same-Day Installs", blurb: "Most residential jobs wrapped up in a single visit." },
    Reason { glyph: "🎧", title: "24/7 Live Support", blurb: "Our line never closes. 2AM or 2PM, we pick up." },
    Reason { glyph: "🏅", title: "Premium Equipment", blurb: "Industry-leading brands, full manufacturer warranties." },
    Reason { glyph: "🧾", title: "Flat, Clear Pricing", blurb: "Every quote itemized upfront. Zero hidden charges, ever." },
    Reason { glyph: "🤝", title: "5-Year Warranty", blurb: "Every install backed by our industry-leading guarantee." },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Review {
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub rating: u8,
    pub date: &'static str,
    pub text: &'static str,
    pub initials: &'static str,
    pub color: &'static str,
}

pub static REVIEWS: [Review; 8] = [
    Review {
        name: "James R.",
        role: "Operations Manager",
        company: "Riverside Logistics",
        rating: 5,
        date: "2 weeks ago",
        text: "Tomsburg completely transformed our warehouse security. Professional team, clean installation, and the system has been flawless. Highly recommend to any business owner.",
        initials: "JR",
        color: "#1C1C1F",
    },
    Review {
        name: "Maria S.",
        role: "Property Manager",
        company: "Sunset Realty Group",
        rating: 5,
        date: "1 month ago",
        text: "We hired Tomsburg to upgrade cameras across 4 properties. They finished ahead of schedule and the image quality is stunning. The app monitoring is incredibly easy to use.",
        initials: "MS",
        color: "#D92B2B",
    },
    Review {
        name: "David K.",
        role: "Homeowner",
        company: "Residential Client",
        rating: 5,
        date: "3 weeks ago",
        text: "From the free assessment to final installation, every step was smooth. The technician explained everything clearly and even helped me set up remote access on my phone. Outstanding service.",
        initials: "DK",
        color: "#2563EB",
    },
    Review {
        name: "Patricia L.",
        role: "Store Owner",
        company: "L&M Boutique",
        rating: 5,
        date: "2 months ago",
        text: "Had cameras installed at my boutique and couldn't be happier. The team was respectful, tidy, and done in half a day. Already recommended Tomsburg to three other business owners.",
        initials: "PL",
        color: "#059669",
    },
    Review {
        name: "Tom B.",
        role: "Facility Director",
        company: "Northside Medical Center",
        rating: 5,
        date: "1 month ago",
        text: "Tomsburg handled a complex multi-floor camera setup for our facility. Their planning was thorough, execution was spotless, and the ongoing support has been excellent.",
        initials: "TB",
        color: "#7C3AED",
    },
    Review {
        name: "Angela M.",
        role: "Restaurant Owner",
        company: "Casa Mia Trattoria",
        rating: 5,
        date: "3 months ago",
        text: "I was nervous about the installation disrupting my restaurant but they worked around our hours. Zero mess, zero fuss, and I sleep better knowing my place is protected.",
        initials: "AM",
        color: "#D97706",
    },
    Review {
        name: "Kevin T.",
        role: "IT Manager",
        company: "Apex Tech Solutions",
        rating: 5,
        date: "6 weeks ago",
        text: "As an IT professional I had high expectations. Tomsburg exceeded them: proper cable management, clean config, and a system that integrates with our existing network beautifully.",
        initials: "KT",
        color: "#0891B2",
    },
    Review {
        name: "Sandra W.",
        role: "School Administrator",
        company: "Westbrook Academy",
        rating: 5,
        date: "2 months ago",
        text: "Safety is our top priority and Tomsburg delivered. They understood the sensitivity of a school environment and designed a system that covers every inch without being obtrusive.",
        initials: "SW",
        color: "#BE185D",
    },
];

pub const MARQUEE_ROW_LEN: usize = 4;

/// Splits the reviews into fixed-width rows for the scrolling strips.
pub fn marquee_rows() -> Vec<&'static [Review]> {
    REVIEWS.chunks(MARQUEE_ROW_LEN).collect()
}

/// Rounded mean rating, to one decimal.
pub fn average_rating() -> f32 {
    let total: u32 = REVIEWS.iter().map(|r| r.rating as u32).sum();
    let mean = total as f32 / REVIEWS.len() as f32;
    (mean * 10.0).round() / 10.0
}

pub struct ContactChannel {
    pub glyph: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub sub: &'static str,
    pub href: &'static str,
}

pub static CONTACT_CHANNELS: [ContactChannel; 4] = [
    ContactChannel { glyph: "☎", label: "Call Us", value: "(555) 123-4567", sub: "Mon - Sat, 8AM - 6PM", href: "tel:+15551234567" },
    ContactChannel { glyph: "✉", label: "Email Us", value: "info@tomsburg.com", sub: "We reply within 2 hours", href: "mailto:info@tomsburg.com" },
    ContactChannel { glyph: "⌖", label: "Service Area", value: "Tri-State Region", sub: "NY · NJ · CT", href: "#" },
    ContactChannel { glyph: "⏱", label: "Emergency Line", value: "24/7 Available", sub: "For existing clients", href: "tel:+15551234567" },
];

pub static SERVICE_OPTIONS: [&str; 8] = [
    "CCTV Installation",
    "Commercial Security",
    "Residential Security",
    "Cloud & Remote Monitoring",
    "Alarm & Intrusion Detection",
    "System Upgrade / Repair",
    "Free Assessment",
    "Other",
];

pub static PROPERTY_TYPES: [&str; 4] = [
    "Residential",
    "Small Business",
    "Commercial / Industrial",
    "Multi-Site / Enterprise",
];

#[derive(Clone, PartialEq)]
pub enum LinkTarget {
    Route(Route),
    Href(&'static str),
}

#[derive(Clone, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: LinkTarget,
}

pub fn nav_links() -> Vec<NavLink> {
    vec![
        NavLink { label: "Home", target: LinkTarget::Route(Route::Home) },
        NavLink { label: "Services", target: LinkTarget::Route(Route::Services) },
        NavLink { label: "How It Works", target: LinkTarget::Href("/#how-it-works") },
        NavLink { label: "FAQ", target: LinkTarget::Href("/#faq") },
        NavLink { label: "Contact", target: LinkTarget::Route(Route::Contact) },
    ]
}

pub struct FooterColumn {
    pub heading: &'static str,
    pub links: &'static [(&'static str, &'static str)],
}

pub static FOOTER_COLUMNS: [FooterColumn; 3] = [
    FooterColumn {
        heading: "Services",
        links: &[
            ("CCTV Installation", "/services"),
            ("Commercial Security", "/services"),
            ("Residential Security", "/services"),
            ("Cloud & Remote Monitoring", "/services"),
            ("Alarm & Intrusion Detection", "/services"),
            ("System Upgrades", "/services"),
        ],
    },
    FooterColumn {
        heading: "Company",
        links: &[
            ("How It Works", "/#how-it-works"),
            ("Why Choose Us", "/#why-choose-us"),
            ("Testimonials", "/#testimonials"),
            ("FAQ", "/#faq"),
        ],
    },
    FooterColumn {
        heading: "Contact",
        links: &[
            ("Get a Free Quote", "/contact"),
            ("Schedule Assessment", "/contact"),
            ("Emergency Line", "tel:+15551234567"),
        ],
    },
];

pub static SOCIALS: [(&str, &str); 5] = [
    ("Facebook", "https://facebook.com"),
    ("Instagram", "https://instagram.com"),
    ("LinkedIn", "https://linkedin.com"),
    ("YouTube", "https://youtube.com"),
    ("Google", "https://google.com"),
];

pub static TRUST_BADGES: [&str; 5] = [
    "Licensed & Insured",
    "5-Year Warranty",
    "24/7 Support",
    "No Subcontractors",
    "Free Assessment",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faq_list_has_three_entries_per_category() {
        assert_eq!(FAQS.len(), 12);
        for category in FaqCategory::ALL {
            let count = FAQS.iter().filter(|f| f.category == category).count();
            assert_eq!(count, 3, "{} should have 3 entries", category.label());
        }
    }

    #[test]
    fn marquee_splits_reviews_into_two_rows_of_four() {
        let rows = marquee_rows();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.len() == MARQUEE_ROW_LEN));
        assert_eq!(rows[0][0].name, "James R.");
        assert_eq!(rows[1][0].name, "Tom B.");
    }

    #[test]
    fn average_rating_is_perfect_score() {
        assert_eq!(average_rating(), 5.0);
    }

    #[test]
    fn exactly_one_service_is_featured() {
        assert_eq!(SERVICES.iter().filter(|s| s.featured).count(), 1);
    }
}
