use contracts::landing::copy;
use leptos::prelude::*;

#[component]
pub fn CodeSample() -> impl IntoView {
    view! {
        <section class="py-20 px-6 max-w-7xl mx-auto">
            <h3 class="text-4xl font-bold mb-8">{copy::CODE_SAMPLE_HEADING}</h3>
            <div class="bg-slate-900 rounded-lg p-6 border border-slate-800 overflow-x-auto">
                <pre class="text-sm text-slate-300">{copy::CODE_SAMPLE}</pre>
            </div>
        </section>
    }
}
