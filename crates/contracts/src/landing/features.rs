use serde::Serialize;

/// Icons available to feature cards. Names match the lucide icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeatureIcon {
    Zap,
    Palette,
    #[serde(rename = "code-2")]
    Code2,
    Sparkles,
    ChevronRight,
}

impl FeatureIcon {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureIcon::Zap => "zap",
            FeatureIcon::Palette => "palette",
            FeatureIcon::Code2 => "code-2",
            FeatureIcon::Sparkles => "sparkles",
            FeatureIcon::ChevronRight => "chevron-right",
        }
    }
}

/// One card of the "Why Choose This Stack?" grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureCard {
    pub icon: FeatureIcon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [FeatureCard; 6] = [
    FeatureCard {
        icon: FeatureIcon::Zap,
        title: "Lightning Fast",
        description: "Optimized performance with Next.js and static generation",
    },
    FeatureCard {
        icon: FeatureIcon::Palette,
        title: "Beautiful Design",
        description: "Tailwind CSS for rapid, responsive styling",
    },
    FeatureCard {
        icon: FeatureIcon::Code2,
        title: "Easy to Build",
        description: "Reusable React components for quick development",
    },
    FeatureCard {
        icon: FeatureIcon::Sparkles,
        title: "Modern Features",
        description: "Built-in animations and dark mode support",
    },
    FeatureCard {
        icon: FeatureIcon::ChevronRight,
        title: "SEO Friendly",
        description: "Server-side rendering for better search rankings",
    },
    FeatureCard {
        icon: FeatureIcon::Code2,
        title: "Developer Friendly",
        description: "TypeScript support and hot reload development",
    },
];
