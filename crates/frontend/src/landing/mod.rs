//! The single landing page and its sections.

pub mod code_sample;
pub mod cta;
pub mod features;
pub mod guide;
pub mod hero;

use crate::layout::{Footer, Navbar};
use code_sample::CodeSample;
use cta::CallToAction;
use features::Features;
use guide::GuideSection;
use hero::Hero;
use leptos::prelude::*;

/// Page layout, top to bottom:
/// ```text
/// Navbar -> Hero -> Features -> GuideSection -> CodeSample -> CallToAction -> Footer
/// ```
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-slate-950 text-white">
            <Navbar />
            <Hero />
            <Features />
            <GuideSection />
            <CodeSample />
            <CallToAction />
            <Footer />
        </div>
    }
}
