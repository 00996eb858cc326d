//! Static page copy.

pub const BRAND: &str = "Next.js Landing";
pub const NAV_CTA: &str = "Get Started";

pub const HERO_HEADLINE: &str = "Build Amazing";
pub const HERO_HEADLINE_ACCENT: &str = "Landing Pages";
pub const HERO_LEAD: &str = "Create stunning, fast, and modern landing pages with Next.js, \
Tailwind CSS, and React components. Perfect for startups, SaaS products, and portfolios.";
pub const HERO_PRIMARY: &str = "Get Started";
pub const HERO_SECONDARY: &str = "View Demo";

pub const FEATURES_HEADING: &str = "Why Choose This Stack?";
pub const FEATURES_SUBHEADING: &str = "Everything you need for a modern landing page";

pub const GUIDE_HEADING: &str = "How to Build It";

pub const CODE_SAMPLE_HEADING: &str = "Quick Example";
pub const CODE_SAMPLE: &str = r#"// app/page.tsx
export default function Home() {
  return (
    <main className="min-h-screen bg-slate-950">
      {/* Hero Section */}
      <section className="py-20 px-6 text-center">
        <h1 className="text-6xl font-bold mb-6">
          <span className="bg-linear-to-r from-blue-400
            to-purple-500 bg-clip-text text-transparent">
            Your Amazing Product
          </span>
        </h1>
        <button className="px-8 py-4 bg-blue-600
          hover:bg-blue-700 rounded-lg font-bold">
          Get Started
        </button>
      </section>
    </main>
  )
}"#;

pub const CTA_HEADING: &str = "Ready to Build?";
pub const CTA_TEXT: &str = "Start creating your landing page today";
pub const CTA_BUTTON: &str = "Create Your Landing Page";

pub const FOOTER_TAGLINE: &str = "Build something amazing with Next.js";
pub const FOOTER_COPYRIGHT: &str = "© 2024 Your Company. All rights reserved.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_sample_starts_with_file_comment() {
        assert!(CODE_SAMPLE.starts_with("// app/page.tsx\n"));
        assert!(CODE_SAMPLE.ends_with('}'));
    }

    #[test]
    fn hero_lead_is_single_paragraph() {
        assert!(!HERO_LEAD.contains('\n'));
        assert!(HERO_LEAD.contains("Tailwind CSS, and React"));
    }
}
