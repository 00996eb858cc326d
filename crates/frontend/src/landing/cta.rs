use crate::shared::components::ui::Button;
use contracts::landing::copy;
use leptos::prelude::*;

#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <section class="py-20 px-6 bg-linear-to-r from-blue-600 to-red-800 text-center">
            <h3 class="text-4xl font-bold mb-4">{copy::CTA_HEADING}</h3>
            <p class="text-lg mb-8 opacity-90">{copy::CTA_TEXT}</p>
            <div class="flex justify-center">
                <Button variant="light">{copy::CTA_BUTTON}</Button>
            </div>
        </section>
    }
}
