// Build-time page content.

use crate::motion::viewport::{Edge, FloatingLogo};

pub const STUDIO_NAME: &str = "RY Studio";
pub const LOGO_SRC: &str = "/noun.svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Live,
    ComingSoon,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Live => "Live",
            ProjectStatus::ComingSoon => "Coming Soon",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectEntry {
    pub title: &'static str,
    pub category: &'static str,
    pub year: u16,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub status: ProjectStatus,
}

pub const PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        title: "Lumina AI",
        category: "AI Research Platform",
        year: 2025,
        description: "A portfolio for machine learning research with interactive data visualizations and a publication archive, built to make complex work approachable.",
        image: "https://images.unsplash.com/photo-1677442136019-21780ecad995?w=800&q=80",
        tags: &["Next.js 14", "Tailwind", "Framer Motion", "Three.js"],
        status: ProjectStatus::Live,
    },
    ProjectEntry {
        title: "Atelier Noir",
        category: "Architecture Studio",
        year: 2025,
        description: "Minimalist landing page for a Paris-based architecture firm with fullscreen project galleries that let the buildings take center stage.",
        image: "https://images.unsplash.com/photo-1618221195710-dd6b41faaea6?w=800&q=80",
        tags: &["Next.js 14", "Tailwind", "GSAP", "Sanity CMS"],
        status: ProjectStatus::Live,
    },
    ProjectEntry {
        title: "Maya Chen",
        category: "Product Designer",
        year: 2025,
        description: "Personal portfolio with case studies, fluid animations and a custom cursor that reflects the designer's attention to detail.",
        image: "https://images.unsplash.com/photo-1559028012-481c04fa702d?w=800&q=80",
        tags: &["Next.js 14", "Tailwind", "Framer Motion", "MDX"],
        status: ProjectStatus::ComingSoon,
    },
    ProjectEntry {
        title: "Velocity",
        category: "SaaS Startup",
        year: 2024,
        description: "High-converting landing page for a productivity tool, tuned for speed and SEO with an integrated waitlist.",
        image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=800&q=80",
        tags: &["Next.js 14", "Tailwind", "Analytics"],
        status: ProjectStatus::Live,
    },
    ProjectEntry {
        title: "Nova Finance",
        category: "Fintech Startup",
        year: 2024,
        description: "Web platform for a modern banking product with account management, transaction tracking and real-time financial insights.",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&q=80",
        tags: &["Next.js 14", "Tailwind", "Chart.js", "Prisma"],
        status: ProjectStatus::Live,
    },
    ProjectEntry {
        title: "Essence Wellness",
        category: "Health & Wellness",
        year: 2024,
        description: "E-commerce storefront for a premium wellness brand, pairing calm colours with smooth animations and a seamless checkout.",
        image: "https://images.unsplash.com/photo-1540555700478-4be289fbecef?w=800&q=80",
        tags: &["Next.js 14", "Tailwind", "Shopify", "Contentful"],
        status: ProjectStatus::Live,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessStep {
    pub number: &'static str,
    pub title: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
}

pub const PROCESS: &[ProcessStep] = &[
    ProcessStep {
        number: "01",
        title: "Discovery",
        duration: "3-5 days",
        description: "We start with a detailed consultation about your vision, audience and goals, and research your brand and competitors.",
    },
    ProcessStep {
        number: "02",
        title: "Design",
        duration: "1-2 weeks",
        description: "From wireframes to high-fidelity mockups, a custom design that reflects your brand, with interactive prototypes for feedback.",
    },
    ProcessStep {
        number: "03",
        title: "Development",
        duration: "2-3 weeks",
        description: "Clean code, smooth animations and fast loads on every device, with regular updates throughout the build.",
    },
    ProcessStep {
        number: "04",
        title: "Launch",
        duration: "2-3 days",
        description: "Deployment with SEO, domain and analytics setup, followed by post-launch support and training on managing your content.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingTier {
    pub name: &'static str,
    pub price: &'static str,
    pub euro_price: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub highlighted: bool,
}

pub const PRICING: &[PricingTier] = &[
    PricingTier {
        name: "Starter",
        price: "$1,500",
        euro_price: "€1,400",
        description: "For individuals getting started",
        features: &[
            "5-page responsive website",
            "Basic animations and transitions",
            "Contact form with email notifications",
            "SEO fundamentals and meta tags",
            "2 rounds of revisions",
            "2-week delivery timeline",
        ],
        highlighted: false,
    },
    PricingTier {
        name: "Professional",
        price: "$3,000",
        euro_price: "€2,800",
        description: "For established professionals",
        features: &[
            "Custom design system tailored to your brand",
            "Advanced animations and micro-interactions",
            "CMS integration for easy content updates",
            "Comprehensive SEO optimization",
            "Unlimited revisions during the project",
            "3-week delivery timeline",
            "1 month of post-launch support",
        ],
        highlighted: true,
    },
    PricingTier {
        name: "Enterprise",
        price: "$5,500",
        euro_price: "€5,200",
        description: "For growing companies",
        features: &[
            "Multi-page website with complex architecture",
            "Custom interactions and scroll effects",
            "Full CMS with multi-user capabilities",
            "A/B testing setup",
            "Priority support with 24h response time",
            "4-week delivery timeline",
            "3 months of dedicated support",
        ],
        highlighted: false,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { value: "50+", label: "Projects Delivered" },
    Stat { value: "100%", label: "Client Satisfaction" },
    Stat { value: "24h", label: "Response Time" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavSection {
    pub id: &'static str,
    pub label: &'static str,
}

pub const NAV_SECTIONS: &[NavSection] = &[
    NavSection { id: "hero", label: "Home" },
    NavSection { id: "work", label: "Work" },
    NavSection { id: "process", label: "Process" },
    NavSection { id: "pricing", label: "Pricing" },
    NavSection { id: "contact", label: "Contact" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const PROFILE_LINKS: &[ProfileLink] = &[
    ProfileLink { label: "GitHub", href: "https://github.com/RYANX9" },
    ProfileLink { label: "@ry_devv", href: "https://x.com/ry_devv" },
];

/// Page background by scroll offset (px).
pub const BACKGROUND_STOPS: &[(f64, &str)] = &[
    (0.0, "#000000"),
    (900.0, "#0b1120"),
    (2200.0, "#111827"),
    (3400.0, "#1e1b4b"),
    (4600.0, "#000000"),
];

pub const FLOATING_LOGOS: &[FloatingLogo] = &[
    FloatingLogo { size: 120.0, top: 100.0, top_rate: 0.15, edge: Edge::Right, inset: 50.0, inset_rate: -0.08, spin: 0.05, desktop_only: false },
    FloatingLogo { size: 100.0, top: 400.0, top_rate: 0.2, edge: Edge::Left, inset: 20.0, inset_rate: 0.05, spin: -0.03, desktop_only: false },
    FloatingLogo { size: 250.0, top: 800.0, top_rate: 0.25, edge: Edge::Right, inset: -50.0, inset_rate: 0.1, spin: 0.04, desktop_only: true },
    FloatingLogo { size: 140.0, top: 1400.0, top_rate: -0.1, edge: Edge::Left, inset: 30.0, inset_rate: 0.12, spin: 0.06, desktop_only: false },
    FloatingLogo { size: 220.0, top: 1800.0, top_rate: 0.18, edge: Edge::Right, inset: 100.0, inset_rate: -0.07, spin: -0.04, desktop_only: true },
    FloatingLogo { size: 160.0, top: 2400.0, top_rate: 0.22, edge: Edge::Left, inset: 20.0, inset_rate: -0.09, spin: 0.05, desktop_only: false },
    FloatingLogo { size: 160.0, top: 2800.0, top_rate: 0.16, edge: Edge::Right, inset: 50.0, inset_rate: -0.11, spin: -0.05, desktop_only: true },
    FloatingLogo { size: 180.0, top: 3200.0, top_rate: 0.19, edge: Edge::Left, inset: -20.0, inset_rate: 0.13, spin: 0.04, desktop_only: false },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::Gradient;

    #[test]
    fn background_table_is_valid() {
        let gradient = Gradient::from_hex_stops(BACKGROUND_STOPS).unwrap();
        assert_eq!(gradient.stops().len(), BACKGROUND_STOPS.len());
    }

    #[test]
    fn exactly_one_highlighted_tier() {
        assert_eq!(PRICING.iter().filter(|tier| tier.highlighted).count(), 1);
    }

    #[test]
    fn nav_ids_are_unique() {
        let mut ids: Vec<_> = NAV_SECTIONS.iter().map(|section| section.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), NAV_SECTIONS.len());
    }

    #[test]
    fn showcase_has_entries() {
        assert!(!PROJECTS.is_empty());
    }

    #[test]
    fn backdrop_has_eight_logos() {
        assert_eq!(FLOATING_LOGOS.len(), 8);
        let far_right = FLOATING_LOGOS
            .iter()
            .find(|logo| logo.top == 2800.0)
            .unwrap();
        assert_eq!(far_right.edge, Edge::Right);
        assert!(far_right.desktop_only);
        assert!((far_right.position(100.0).2 + 5.0).abs() < 1e-9);
    }
}
