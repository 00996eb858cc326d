use leptos::prelude::*;

/// Tailwind classes for a button variant. Unknown variants fall back to `primary`.
pub fn variant_class(variant: &str) -> &'static str {
    match variant {
        "outline" => "px-8 py-4 border-2 border-slate-600 hover:border-slate-400 rounded-lg font-semibold transition",
        "nav" => "rounded-md bg-slate-800 py-2 px-4 border border-transparent text-center text-sm text-white transition-all shadow-md hover:shadow-lg focus:bg-slate-700 focus:shadow-none active:bg-slate-700 hover:bg-slate-700 active:shadow-none disabled:pointer-events-none disabled:opacity-50 disabled:shadow-none ml-2",
        "light" => "px-8 py-4 bg-white text-blue-600 hover:bg-slate-100 rounded-lg font-bold transition transform hover:scale-105 disabled:opacity-50 disabled:pointer-events-none",
        _ => "px-8 py-4 bg-blue-600 hover:bg-blue-700 rounded-lg font-semibold flex items-center gap-2 transition transform hover:scale-105",
    }
}

/// Static button with variants (primary, outline, nav, light)
#[component]
pub fn Button(
    /// Button variant: "primary" (default), "outline", "nav" or "light"
    #[prop(default = "primary")]
    variant: &'static str,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    view! {
        <button type="button" class=variant_class(variant)>
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_variant_falls_back_to_primary() {
        assert_eq!(variant_class("ghost"), variant_class("primary"));
    }

    #[test]
    fn variants_are_distinct() {
        let classes = ["primary", "outline", "nav", "light"].map(variant_class);
        for (i, a) in classes.iter().enumerate() {
            for b in &classes[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(variant_class("light").contains("bg-white"));
    }
}
