//! ViewModel for the guide tabs

use contracts::landing::{GuideSelection, Section};
use leptos::prelude::*;

/// Reactive holder of the active guide tab.
///
/// `select` is the only writer; the tab buttons and the panel read through
/// `is_active` and `current`.
#[derive(Clone, Copy)]
pub struct GuideVm {
    selection: RwSignal<GuideSelection>,
}

impl GuideVm {
    pub fn new() -> Self {
        Self {
            selection: RwSignal::new(GuideSelection::new()),
        }
    }

    /// Switch to tab `index`. Out-of-range indices are logged and ignored.
    pub fn select(&self, index: usize) {
        let mut next = self.selection.get_untracked();
        if next.is_selected(index) {
            return;
        }
        match next.try_select(index) {
            Ok(()) => {
                log::debug!("guide tab selected: {} ({})", index, next.current().title);
                self.selection.set(next);
            }
            Err(e) => log::warn!("guide tab selection ignored: {}", e),
        }
    }

    pub fn index(&self) -> usize {
        self.selection.with(|s| s.index())
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.selection.with(|s| s.is_selected(index))
    }

    pub fn current(&self) -> &'static Section {
        self.selection.with(|s| s.current())
    }
}

impl Default for GuideVm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn starts_on_first_tab() {
        Owner::new().with(|| {
            let vm = GuideVm::new();
            assert_eq!(vm.index(), 0);
            assert!(vm.is_active(0));
            assert_eq!(vm.current().title, "Project Setup");
        });
    }

    #[test]
    fn select_switches_panel_content() {
        Owner::new().with(|| {
            let vm = GuideVm::new();
            vm.select(1);
            assert_eq!(vm.current().title, "Key Components");
            assert_eq!(vm.current().steps.len(), 5);
            assert!(!vm.is_active(0));

            vm.select(2);
            assert_eq!(
                vm.current().steps[2],
                "Dark mode - next-themes package for theme switching"
            );
        });
    }

    #[test]
    fn out_of_range_keeps_selection() {
        Owner::new().with(|| {
            let vm = GuideVm::new();
            vm.select(2);
            vm.select(3);
            vm.select(usize::MAX);
            assert_eq!(vm.index(), 2);
        });
    }
}
