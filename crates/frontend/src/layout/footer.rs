use contracts::landing::copy;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer data-zone="footer" class="bg-slate-950 border-t border-slate-800 py-12 px-6">
            <div class="max-w-7xl mx-auto text-center text-slate-400">
                <p>{copy::FOOTER_TAGLINE}</p>
                <p class="mt-2 text-sm">{copy::FOOTER_COPYRIGHT}</p>
            </div>
        </footer>
    }
}
