//! "How to Build It" section: tab buttons over the guide registry and a
//! panel listing the steps of the selected section.

pub mod panel;
pub mod tabs;
pub mod view_model;

use contracts::landing::copy;
use leptos::prelude::*;
use panel::GuidePanel;
use tabs::GuideTabs;
pub use view_model::GuideVm;

#[component]
pub fn GuideSection() -> impl IntoView {
    // Selection lives as long as this section is mounted.
    provide_context(GuideVm::new());

    view! {
        <section class="py-20 px-6 max-w-7xl mx-auto">
            <h3 class="text-4xl font-bold text-center mb-12">{copy::GUIDE_HEADING}</h3>
            <GuideTabs />
            <GuidePanel />
        </section>
    }
}
