use crate::shared::components::ui::Button;
use contracts::landing::copy;
use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav data-zone="navbar" class="sticky top-0 z-50 bg-slate-950/80 backdrop-blur-lg border-b border-slate-800">
            <div class="max-w-7xl mx-auto px-6 py-4 flex justify-between items-center">
                <h1 class="text-xl font-bold bg-linear-to-r from-blue-400 to-purple-500 bg-clip-text text-transparent">
                    {copy::BRAND}
                </h1>
                <Button variant="nav">{copy::NAV_CTA}</Button>
            </div>
        </nav>
    }
}
