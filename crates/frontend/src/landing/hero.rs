use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use contracts::landing::copy;
use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="relative min-h-screen flex items-center justify-center overflow-hidden px-6">
            <div class="absolute inset-0 bg-linear-to-b from-blue-600/10 via-transparent to-transparent" />

            <div class="relative z-10 max-w-4xl mx-auto text-center">
                <h2 class="text-6xl md:text-7xl font-bold mb-6 leading-tight">
                    {copy::HERO_HEADLINE}
                    <span class="block bg-linear-to-r from-blue-400 via-purple-400 to-yellow-400 bg-clip-text text-transparent">
                        {copy::HERO_HEADLINE_ACCENT}
                    </span>
                </h2>

                <p class="text-xl text-slate-400 mb-12 max-w-2xl mx-auto">
                    {copy::HERO_LEAD}
                </p>

                <div class="flex gap-4 justify-center flex-wrap">
                    <Button>
                        {copy::HERO_PRIMARY}
                        {icon("chevron-right", "w-5 h-5")}
                    </Button>
                    <Button variant="outline">{copy::HERO_SECONDARY}</Button>
                </div>
            </div>
        </section>
    }
}
