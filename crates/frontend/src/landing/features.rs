use crate::shared::icons::icon;
use contracts::landing::{copy, FeatureCard, FEATURES};
use leptos::prelude::*;

#[component]
fn FeatureCardView(card: FeatureCard) -> impl IntoView {
    view! {
        <div class="p-6 bg-slate-900 rounded-lg border border-slate-800 hover:border-slate-600 transition">
            {icon(card.icon.as_str(), "w-12 h-12 text-blue-400 mb-4")}
            <h4 class="text-xl font-semibold mb-2">{card.title}</h4>
            <p class="text-slate-400">{card.description}</p>
        </div>
    }
}

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section class="py-20 px-6 max-w-7xl mx-auto">
            <h3 class="text-4xl font-bold text-center mb-4">{copy::FEATURES_HEADING}</h3>
            <p class="text-slate-400 text-center mb-16 text-lg">{copy::FEATURES_SUBHEADING}</p>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                {FEATURES
                    .into_iter()
                    .map(|card| view! { <FeatureCardView card=card /> })
                    .collect_view()}
            </div>
        </section>
    }
}
