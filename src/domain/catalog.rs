// src/domain/catalog.rs
//
// Static content for the landing page.

use crate::domain::listing::{ListingStatus, Price, PropertyListing, PropertyType};

/// Rendering symbols referenced by content. Resolved to SVG in
/// `templates::components::icon`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Home,
    Users,
    Building2,
    TrendingUp,
    BarChart3,
    PieChart,
    MapPin,
    Bed,
    Bath,
    Move,
    ArrowUpRight,
    Star,
    Eye,
    Target,
    Lightbulb,
    Check,
}

pub fn featured_listings() -> Vec<PropertyListing> {
    vec![
        PropertyListing {
            id: 1,
            title: "Billionaire Mansion",
            location: "River Oaks, Houston, Texas",
            price: Price::Sale(5_500_000),
            property_type: PropertyType::Mansion,
            status: ListingStatus::ForSale,
            beds: 5,
            baths: 6,
            sqft: 8_500,
            image: "luxury-home.jpg",
        },
        PropertyListing {
            id: 2,
            title: "Palazzo di Amore",
            location: "Brooklyn Heights, New York",
            price: Price::MonthlyRent(12_000),
            property_type: PropertyType::Villa,
            status: ListingStatus::ForRent,
            beds: 4,
            baths: 3,
            sqft: 4_200,
            image: "eco-home.jpg",
        },
        PropertyListing {
            id: 3,
            title: "The One Bel Air",
            location: "Bel Air, Los Angeles, California",
            price: Price::Sale(8_900_000),
            property_type: PropertyType::Modern,
            status: ListingStatus::ForSale,
            beds: 7,
            baths: 9,
            sqft: 12_000,
            image: "vacation-home.jpg",
        },
        PropertyListing {
            id: 4,
            title: "Seaside Retreat",
            location: "Malibu, California",
            price: Price::Sale(2_500_000),
            property_type: PropertyType::Villa,
            status: ListingStatus::ForSale,
            beds: 3,
            baths: 2,
            sqft: 2_100,
            image: "luxury-home.jpg",
        },
        PropertyListing {
            id: 5,
            title: "Downtown Penthouse",
            location: "Manhattan, New York",
            price: Price::MonthlyRent(8_500),
            property_type: PropertyType::Apartment,
            status: ListingStatus::ForRent,
            beds: 2,
            baths: 2,
            sqft: 1_800,
            image: "eco-home.jpg",
        },
        PropertyListing {
            id: 6,
            title: "Aspen Ski Lodge",
            location: "Aspen, Colorado",
            price: Price::Sale(4_200_000),
            property_type: PropertyType::Cabin,
            status: ListingStatus::ForSale,
            beds: 5,
            baths: 4,
            sqft: 3_500,
            image: "vacation-home.jpg",
        },
    ]
}

pub struct HeroStat {
    pub number: &'static str,
    pub text: &'static str,
}

pub const HERO_STATS: &[HeroStat] = &[
    HeroStat {
        number: "200+",
        text: "Projects Complete",
    },
    HeroStat {
        number: "$10M+",
        text: "Market Value",
    },
];

pub struct FeatureTab {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
}

pub const FEATURE_TABS: &[FeatureTab] = &[
    FeatureTab {
        title: "Luxury Residences",
        subtitle: "Premium Living",
        description: "Experience unparalleled elegance in our luxury residences, featuring exquisite design, premium amenities, and prime locations for the most discerning tastes.",
    },
    FeatureTab {
        title: "Eco Green Buildings",
        subtitle: "Sustainable Future",
        description: "Sustainable living meets modern luxury. Our eco-friendly designs prioritize energy efficiency and environmental harmony without compromising on comfort.",
    },
    FeatureTab {
        title: "Unique Vacation Homes",
        subtitle: "Global Escapes",
        description: "Discover escapes that inspire. From mountain retreats to seaside villas, our vacation portfolio offers unique experiences in breathtaking locations.",
    },
];

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Property Sales",
        description: "Expertly promoting and selling your property to attract qualified buyers with premium marketing strategies.",
        icon: Icon::Home,
    },
    Service {
        title: "Buyer Representation",
        description: "Guiding you through the home-buying process, prioritizing your interests and negotiating the best deals.",
        icon: Icon::Users,
    },
    Service {
        title: "Rental Management",
        description: "Managing tenant relations, maintenance, and finances to maximize your rental returns hassle-free.",
        icon: Icon::Building2,
    },
    Service {
        title: "Investment Consulting",
        description: "Providing strategic advice to help you capitalize on real estate opportunities and build wealth.",
        icon: Icon::TrendingUp,
    },
    Service {
        title: "Property Valuation",
        description: "Accurately assessing your property's value for sales, purchases, or investment analysis.",
        icon: Icon::BarChart3,
    },
    Service {
        title: "Tailored Solutions",
        description: "Delivering customized real estate services aligned with your specific goals and lifestyle.",
        icon: Icon::PieChart,
    },
];

pub struct Stat {
    pub value: u32,
    pub prefix: &'static str,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat {
        value: 200,
        prefix: "",
        suffix: "+",
        label: "Projects Complete",
    },
    Stat {
        value: 70,
        prefix: "",
        suffix: "+",
        label: "Happy Clients",
    },
    Stat {
        value: 10,
        prefix: "$",
        suffix: "M+",
        label: "Project Value",
    },
    Stat {
        value: 90,
        prefix: "",
        suffix: "%",
        label: "Client Retention",
    },
];

pub struct VisionFeature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

pub const VISION_FEATURES: &[VisionFeature] = &[
    VisionFeature {
        title: "Our Vision",
        description: "To be a leader in the real estate market, offering unparalleled services in luxury, sustainability, and vacation properties.",
        icon: Icon::Eye,
    },
    VisionFeature {
        title: "Expert Team",
        description: "Our team comprises seasoned professionals with extensive experience in luxury real estate, sustainable housing, and vacation rentals.",
        icon: Icon::Target,
    },
    VisionFeature {
        title: "Tailored Solutions",
        description: "We offer customized real estate services that align with your specific lifestyle and investment goals, ensuring a seamless experience.",
        icon: Icon::Lightbulb,
    },
];

pub struct Agent {
    pub name: &'static str,
    pub role: &'static str,
}

pub const AGENTS: &[Agent] = &[
    Agent {
        name: "Benjamin Foster",
        role: "Urban Development Advisor",
    },
    Agent {
        name: "Emily Chen",
        role: "Investment Consultant",
    },
    Agent {
        name: "Michael Anderson",
        role: "Vacation Rental Specialist",
    },
    Agent {
        name: "Charlotte Morgan",
        role: "High-End Consultant",
    },
    Agent {
        name: "Ethan Hughes",
        role: "Green Building Advisor",
    },
    Agent {
        name: "Olivia Bennett",
        role: "Sustainable Housing",
    },
    Agent {
        name: "Sophia Rivera",
        role: "Housing Consultant",
    },
    Agent {
        name: "Liam Carter",
        role: "Commercial Agent",
    },
];

pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Olivia Wilson",
        role: "Corporate Attorney",
        content: "The professionalism and deep understanding of luxury properties gave me complete confidence throughout the process.",
    },
    Testimonial {
        name: "Liam Scott",
        role: "Marketing Strategist",
        content: "Liam helped me secure an excellent deal on a luxury home. His negotiation skills were remarkable.",
    },
    Testimonial {
        name: "Charlotte Evans",
        role: "Interior Designer",
        content: "The architectural insights and design advice made choosing my dream home an inspiring journey.",
    },
    Testimonial {
        name: "Amelia Cooper",
        role: "Graphic Designer",
        content: "Sophia's passion for sustainable housing helped me find a beautiful and eco-friendly home that I absolutely love.",
    },
    Testimonial {
        name: "Lily Ross",
        role: "Eco-Lifestyle Blogger",
        content: "Emma's expertise in sustainable housing exceeded my expectations. She found me the perfect green home for my family.",
    },
    Testimonial {
        name: "Sebastian Turner",
        role: "Hospitality Manager",
        content: "Ethan's creativity and expertise in short-term rentals gave me the confidence to invest in my first vacation property.",
    },
    Testimonial {
        name: "Harper Gray",
        role: "Freelance Writer",
        content: "Charlotte's dedication and efficiency turned my dream of owning a luxury villa into reality much faster than I expected.",
    },
    Testimonial {
        name: "Aurora James",
        role: "Fashion Consultant",
        content: "Emily made buying my luxury home effortless. Her warm and professional demeanor was truly appreciated.",
    },
    Testimonial {
        name: "William Parker",
        role: "Tech Entrepreneur",
        content: "Outstanding service from start to finish. The team truly understands the needs of modern investors.",
    },
];

/// Testimonials split into three display columns of equal height.
pub fn testimonial_columns() -> [&'static [Testimonial]; 3] {
    let third = TESTIMONIALS.len() / 3;
    [
        &TESTIMONIALS[..third],
        &TESTIMONIALS[third..third * 2],
        &TESTIMONIALS[third * 2..],
    ]
}

pub struct BlogPost {
    pub title: &'static str,
    pub date: &'static str,
}

pub const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        title: "The Ultimate Checklist for Selling Your Home Faster",
        date: "April 11, 2025",
    },
    BlogPost {
        title: "Short-Term Rentals vs. Long-Term Leases: Which One's Right for You?",
        date: "April 11, 2025",
    },
    BlogPost {
        title: "Luxury Living Trends in 2025: What Buyers Really Want",
        date: "April 11, 2025",
    },
];

pub struct Faq {
    pub id: u32,
    pub question: &'static str,
    pub answer: &'static str,
}

/// FAQ entry expanded on first render.
pub const FAQ_OPEN_BY_DEFAULT: u32 = 1;

pub const FAQS: &[Faq] = &[
    Faq {
        id: 1,
        question: "What Is The Process For Buying A Property?",
        answer: "The process involves selecting the right property, negotiating terms with the agent, signing the contract, and completing the payment. Our professional agents will guide you through every step to ensure a smooth experience.",
    },
    Faq {
        id: 2,
        question: "How Do I Determine How Much I Can Afford?",
        answer: "We recommend speaking with a financial advisor or mortgage broker to assess your borrowing capacity. Generally, you should consider your income, savings, existing debts, and lifestyle expenses.",
    },
    Faq {
        id: 3,
        question: "What Documents Are Required For Renting?",
        answer: "Typically, you'll need proof of identity (ID/Passport), proof of income (payslips/bank statements), and rental references. Some landlords may require a credit check.",
    },
    Faq {
        id: 4,
        question: "Can I Terminate A Lease Agreement Early?",
        answer: "Lease termination depends on the specific terms of your agreement. Usually, there are penalties or notice periods required. We advise reviewing your contract or discussing it with your property manager.",
    },
    Faq {
        id: 5,
        question: "What Are The Risks Of Investing In Real Estate?",
        answer: "Risks include market fluctuations, vacancy periods, and unexpected maintenance costs. However, real estate is generally considered a stable long-term investment.",
    },
    Faq {
        id: 6,
        question: "How Do I Choose The Right Property To Invest In?",
        answer: "Look for locations with high growth potential, good infrastructure, and strong rental demand. Our investment consultants can provide detailed market analysis to help you decide.",
    },
    Faq {
        id: 7,
        question: "Do High-End Properties Support Virtual Tours?",
        answer: "Yes, most of our luxury listings feature high-definition 3D virtual tours, allowing you to explore the property remotely before scheduling an in-person viewing.",
    },
    Faq {
        id: 8,
        question: "How Long Does The Property Transfer Process Take?",
        answer: "The timeline varies by location and complexity but typically takes between 30 to 60 days from the signing of the contract to final settlement.",
    },
];

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("Home", "/"),
    ("About", "#about"),
    ("Properties", "#properties"),
    ("Agents", "#agents"),
    ("Blogs", "#blog"),
];
