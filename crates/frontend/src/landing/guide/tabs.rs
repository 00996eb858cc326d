use super::GuideVm;
use contracts::landing::GUIDE_REGISTRY;
use leptos::prelude::*;

pub fn tab_button_class(active: bool) -> &'static str {
    if active {
        "px-6 py-3 rounded-lg font-semibold transition bg-blue-600 text-white"
    } else {
        "px-6 py-3 rounded-lg font-semibold transition bg-slate-800 text-slate-300 hover:bg-slate-700"
    }
}

/// One button per guide section, labelled with the section title.
#[component]
pub fn GuideTabs() -> impl IntoView {
    let vm = use_context::<GuideVm>().expect("GuideVm context not found");

    view! {
        <div class="flex flex-wrap gap-2 justify-center mb-8" role="tablist">
            {GUIDE_REGISTRY
                .iter()
                .enumerate()
                .map(|(i, section)| {
                    view! {
                        <button
                            type="button"
                            role="tab"
                            class=move || tab_button_class(vm.is_active(i))
                            aria-selected=move || if vm.is_active(i) { "true" } else { "false" }
                            on:click=move |_| vm.select(i)
                        >
                            {section.title}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
