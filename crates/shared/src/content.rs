//! Copy and placeholder media for the three site pages.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Partner {
    pub name: &'static str,
    pub logo: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceHighlight {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    pub rating: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Statistic {
    pub number: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompanyValue {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TeamMember {
    pub name: &'static str,
    pub position: &'static str,
    pub image: &'static str,
    pub bio: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactChannel {
    pub title: &'static str,
    pub details: [&'static str; 2],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Office {
    pub city: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub timezone: &'static str,
}

pub const BRAND_NAME: &str = "Portfolio";
pub const COMPANY_NAME: &str = "Your Company";
pub const PRIMARY_PHONE: &str = "+1 (555) 123-4567";
pub const PRIMARY_EMAIL: &str = "hello@company.com";

pub const NAV_ITEMS: [NavItem; 3] = [
    NavItem { href: "/", label: "Home" },
    NavItem { href: "/about", label: "About" },
    NavItem { href: "/contact", label: "Contact" },
];

pub const PARTNERS: [Partner; 6] = [
    Partner {
        name: "Google",
        logo: "https://via.placeholder.com/120x60/4285f4/ffffff?text=Google",
    },
    Partner {
        name: "Microsoft",
        logo: "https://via.placeholder.com/120x60/00a1f1/ffffff?text=Microsoft",
    },
    Partner {
        name: "Amazon",
        logo: "https://via.placeholder.com/120x60/ff9900/ffffff?text=Amazon",
    },
    Partner {
        name: "Apple",
        logo: "https://via.placeholder.com/120x60/000000/ffffff?text=Apple",
    },
    Partner {
        name: "Meta",
        logo: "https://via.placeholder.com/120x60/1877f2/ffffff?text=Meta",
    },
    Partner {
        name: "Netflix",
        logo: "https://via.placeholder.com/120x60/e50914/ffffff?text=Netflix",
    },
];

pub const SERVICE_HIGHLIGHTS: [ServiceHighlight; 4] = [
    ServiceHighlight {
        title: "Lightning Fast",
        description: "Optimized performance for the best user experience",
    },
    ServiceHighlight {
        title: "Secure & Reliable",
        description: "Enterprise-grade security with 99.9% uptime guarantee",
    },
    ServiceHighlight {
        title: "24/7 Support",
        description: "Round-the-clock customer support from our expert team",
    },
    ServiceHighlight {
        title: "Premium Quality",
        description: "Top-tier solutions crafted with attention to detail",
    },
];

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sarah Johnson",
        role: "CEO, TechStart",
        content: "This service transformed our business. The results exceeded our expectations and the team was incredibly professional.",
        rating: 5,
    },
    Testimonial {
        name: "Michael Chen",
        role: "Founder, InnovateCorp",
        content: "Outstanding quality and support. We've seen a 300% increase in productivity since implementing their solution.",
        rating: 5,
    },
    Testimonial {
        name: "Emily Davis",
        role: "CTO, FutureWorks",
        content: "The most reliable partner we've ever worked with. Their expertise and dedication are unmatched.",
        rating: 5,
    },
];

pub const STATISTICS: [Statistic; 4] = [
    Statistic {
        number: "10+",
        label: "Years of Excellence",
        description: "Delivering outstanding results",
    },
    Statistic {
        number: "1000+",
        label: "Happy Clients",
        description: "Across 50+ countries",
    },
    Statistic {
        number: "500+",
        label: "Projects Completed",
        description: "From startups to enterprises",
    },
    Statistic {
        number: "99.9%",
        label: "Uptime Guarantee",
        description: "Reliable and secure solutions",
    },
];

pub const VALUES: [CompanyValue; 6] = [
    CompanyValue {
        title: "Innovation First",
        description: "We embrace cutting-edge technologies and creative solutions to solve complex challenges.",
    },
    CompanyValue {
        title: "Client Success",
        description: "Your success is our success. We are committed to delivering exceptional value and results.",
    },
    CompanyValue {
        title: "Quality Excellence",
        description: "We maintain the highest standards in everything we do, from code to customer service.",
    },
    CompanyValue {
        title: "Transparency",
        description: "Open communication, honest feedback, and clear processes build lasting partnerships.",
    },
    CompanyValue {
        title: "Social Impact",
        description: "We believe in technology that makes the world a better place for everyone.",
    },
    CompanyValue {
        title: "Continuous Growth",
        description: "We invest in learning, adapting, and evolving to stay ahead of industry trends.",
    },
];

pub const TEAM: [TeamMember; 6] = [
    TeamMember {
        name: "Sarah Johnson",
        position: "CEO & Founder",
        image: "https://via.placeholder.com/300x300/3B82F6/ffffff?text=SJ",
        bio: "Visionary leader with 15+ years in tech. Former VP at Fortune 500 companies.",
    },
    TeamMember {
        name: "Michael Chen",
        position: "CTO",
        image: "https://via.placeholder.com/300x300/10B981/ffffff?text=MC",
        bio: "Tech innovator specializing in scalable architectures and emerging technologies.",
    },
    TeamMember {
        name: "Emily Rodriguez",
        position: "Head of Design",
        image: "https://via.placeholder.com/300x300/8B5CF6/ffffff?text=ER",
        bio: "Award-winning designer focused on creating intuitive and beautiful user experiences.",
    },
    TeamMember {
        name: "David Kim",
        position: "VP of Operations",
        image: "https://via.placeholder.com/300x300/F59E0B/ffffff?text=DK",
        bio: "Operations expert ensuring seamless project delivery and client satisfaction.",
    },
    TeamMember {
        name: "Lisa Thompson",
        position: "Head of Marketing",
        image: "https://via.placeholder.com/300x300/EF4444/ffffff?text=LT",
        bio: "Marketing strategist with expertise in digital growth and brand development.",
    },
    TeamMember {
        name: "Alex Park",
        position: "Lead Developer",
        image: "https://via.placeholder.com/300x300/6366F1/ffffff?text=AP",
        bio: "Full-stack architect building robust and scalable software solutions.",
    },
];

pub const MILESTONES: [Milestone; 6] = [
    Milestone {
        year: "2014",
        title: "Company Founded",
        description: "Started with a vision to transform businesses through technology innovation.",
    },
    Milestone {
        year: "2016",
        title: "First Major Client",
        description: "Secured partnership with leading e-commerce platform, scaling to millions of users.",
    },
    Milestone {
        year: "2018",
        title: "International Expansion",
        description: "Opened offices in Europe and Asia, serving clients across 25 countries.",
    },
    Milestone {
        year: "2020",
        title: "Award Recognition",
        description: "Won \"Tech Innovation Company of the Year\" and achieved ISO 27001 certification.",
    },
    Milestone {
        year: "2022",
        title: "AI Integration",
        description: "Launched AI-powered solutions, revolutionizing how clients approach automation.",
    },
    Milestone {
        year: "2024",
        title: "Sustainable Future",
        description: "Committed to carbon neutrality and launched green technology initiatives.",
    },
];

pub const CONTACT_CHANNELS: [ContactChannel; 4] = [
    ContactChannel {
        title: "Call Us",
        details: ["+1 (555) 123-4567", "+1 (555) 765-4321"],
    },
    ContactChannel {
        title: "Email Us",
        details: ["hello@company.com", "support@company.com"],
    },
    ContactChannel {
        title: "Visit Us",
        details: ["123 Business Ave", "New York, NY 10001"],
    },
    ContactChannel {
        title: "Business Hours",
        details: ["Mon - Fri: 9:00 AM - 6:00 PM", "Weekend: By Appointment"],
    },
];

pub const OFFICES: [Office; 3] = [
    Office {
        city: "New York",
        address: "123 Business Ave, NY 10001",
        phone: "+1 (555) 123-4567",
        email: "ny@company.com",
        timezone: "EST",
    },
    Office {
        city: "London",
        address: "456 Tech Street, London SW1A 1AA",
        phone: "+44 20 7123 4567",
        email: "london@company.com",
        timezone: "GMT",
    },
    Office {
        city: "Tokyo",
        address: "789 Innovation Blvd, Tokyo 100-0001",
        phone: "+81 3 1234 5678",
        email: "tokyo@company.com",
        timezone: "JST",
    },
];

/// Options offered by the contact form's `service` select.
pub const SERVICE_OPTIONS: [&str; 7] = [
    "Web Development",
    "Mobile App Development",
    "UI/UX Design",
    "Digital Marketing",
    "Consulting Services",
    "Support & Maintenance",
    "Other",
];

/// Sections that fade in once scrolled into view, per page.
pub mod sections {
    pub const HOME: [&str; 4] = ["about", "partners", "services", "testimonials"];
    pub const ABOUT: [&str; 3] = ["stats", "mission", "details"];
    pub const CONTACT: [&str; 3] = ["contact-info", "contact-form", "offices"];

    /// Fraction of a section that must be on screen before it counts as seen.
    pub const VISIBILITY_THRESHOLD: f64 = 0.1;
}
