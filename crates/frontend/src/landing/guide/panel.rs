use super::GuideVm;
use leptos::prelude::*;

/// Steps are numbered from 1.
pub fn step_number(position: usize) -> String {
    (position + 1).to_string()
}

/// Title and numbered steps of the selected guide section.
#[component]
pub fn GuidePanel() -> impl IntoView {
    let vm = use_context::<GuideVm>().expect("GuideVm context not found");

    view! {
        <div class="bg-slate-900 p-8 rounded-lg border border-slate-800" role="tabpanel">
            <h4 class="text-2xl font-bold mb-6">{move || vm.current().title}</h4>
            <ul class="space-y-4">
                {move || {
                    vm.current()
                        .steps
                        .iter()
                        .enumerate()
                        .map(|(i, step)| {
                            view! {
                                <li class="flex gap-4">
                                    <span class="text-blue-400 font-bold shrink-0">{step_number(i)}</span>
                                    <span class="text-slate-300">{*step}</span>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbering_starts_at_one() {
        assert_eq!(step_number(0), "1");
        assert_eq!(step_number(4), "5");
    }
}
