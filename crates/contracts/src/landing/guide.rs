//! "How to Build It" guide: the fixed section registry and the tab selection.
//!
//! The registry is compile-time data and is never mutated. [`GuideSelection`]
//! is the only mutable piece of state on the page: the index of the active tab.

use crate::error::SelectionError;
use serde::Serialize;

/// Number of sections in the guide registry.
pub const GUIDE_SECTION_COUNT: usize = 3;

/// One named group of steps shown under a guide tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: &'static str,
    pub steps: &'static [&'static str],
}

/// Fixed, ordered list of guide sections.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Registry {
    sections: [Section; GUIDE_SECTION_COUNT],
}

impl Registry {
    pub const fn new(sections: [Section; GUIDE_SECTION_COUNT]) -> Self {
        Self { sections }
    }

    pub const fn len(&self) -> usize {
        GUIDE_SECTION_COUNT
    }

    pub const fn is_empty(&self) -> bool {
        GUIDE_SECTION_COUNT == 0
    }

    pub fn get(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Section titles in tab order.
    pub fn titles(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.sections.iter().map(|s| s.title)
    }
}

pub static GUIDE_REGISTRY: Registry = Registry::new([
    Section {
        title: "Project Setup",
        steps: &[
            "npx create-next-app@latest my-landing --typescript --tailwind",
            "cd my-landing",
            "npm install lucide-react (for icons)",
            "Set up folder structure: app/, components/, public/",
        ],
    },
    Section {
        title: "Key Components",
        steps: &[
            "Hero Section - Large headline, CTA buttons, background gradients",
            "Features Grid - Icon + description cards in responsive grid",
            "Pricing/Plans - Comparison cards with features",
            "Testimonials - Rotating sponsor/client section",
            "CTA Section - Final call-to-action with social links",
        ],
    },
    Section {
        title: "Design Elements",
        steps: &[
            "Gradient backgrounds - Use Tailwind's gradient utilities",
            "Animated elements - Framer Motion for smooth transitions",
            "Dark mode - next-themes package for theme switching",
            "Responsive design - Mobile-first Tailwind classes",
            "Typography - Font optimization with next/font",
        ],
    },
]);

/// Index of the active guide tab.
///
/// Invariant: `index < GUIDE_REGISTRY.len()`. The field is private, so the
/// only way to change it is through [`GuideSelection::try_select`] or
/// [`GuideSelection::select`], both of which reject out-of-range indices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GuideSelection {
    index: usize,
}

impl GuideSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.index == index
    }

    /// Switches to tab `index`, or reports why it cannot.
    pub fn try_select(&mut self, index: usize) -> Result<(), SelectionError> {
        let len = GUIDE_REGISTRY.len();
        if index >= len {
            return Err(SelectionError::OutOfRange { index, len });
        }
        self.index = index;
        Ok(())
    }

    /// Switches to tab `index`; out-of-range indices are ignored.
    /// Returns `true` when the index was accepted.
    pub fn select(&mut self, index: usize) -> bool {
        self.try_select(index).is_ok()
    }

    pub fn current(&self) -> &'static Section {
        &GUIDE_REGISTRY.sections[self.index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_project_setup() {
        let selection = GuideSelection::new();
        assert_eq!(selection.index(), 0);
        assert_eq!(selection.current().title, "Project Setup");
        assert_eq!(selection.current().steps.len(), 4);
    }

    #[test]
    fn select_then_current_returns_registry_entry() {
        for i in 0..GUIDE_REGISTRY.len() {
            let mut selection = GuideSelection::new();
            assert!(selection.select(i));
            assert_eq!(Some(selection.current()), GUIDE_REGISTRY.get(i));
            assert!(selection.is_selected(i));
        }
    }

    #[test]
    fn select_is_idempotent() {
        let mut once = GuideSelection::new();
        once.select(2);

        let mut twice = GuideSelection::new();
        twice.select(2);
        twice.select(2);

        assert_eq!(once, twice);
        assert_eq!(once.current(), twice.current());
    }

    #[test]
    fn out_of_range_select_is_ignored() {
        let mut selection = GuideSelection::new();
        selection.select(1);

        assert!(!selection.select(GUIDE_REGISTRY.len()));
        assert_eq!(selection.index(), 1);

        assert!(!selection.select(usize::MAX));
        assert_eq!(selection.index(), 1);
    }

    #[test]
    fn try_select_reports_out_of_range() {
        let mut selection = GuideSelection::new();
        assert_eq!(
            selection.try_select(3),
            Err(SelectionError::OutOfRange { index: 3, len: 3 })
        );
        assert_eq!(selection.try_select(2), Ok(()));
        assert_eq!(selection.index(), 2);
    }

    #[test]
    fn registry_unchanged_by_selection() {
        let before: Vec<(&str, Vec<&str>)> = GUIDE_REGISTRY
            .iter()
            .map(|s| (s.title, s.steps.to_vec()))
            .collect();

        let mut selection = GuideSelection::new();
        for i in [2, 0, 7, 1, 1, usize::MAX, 2] {
            selection.select(i);
        }

        let after: Vec<(&str, Vec<&str>)> = GUIDE_REGISTRY
            .iter()
            .map(|s| (s.title, s.steps.to_vec()))
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn key_components_tab() {
        let mut selection = GuideSelection::new();
        selection.select(1);
        let section = selection.current();
        assert_eq!(section.title, "Key Components");
        assert_eq!(section.steps.len(), 5);
        assert_eq!(
            section.steps[0],
            "Hero Section - Large headline, CTA buttons, background gradients"
        );
    }

    #[test]
    fn design_elements_tab() {
        let mut selection = GuideSelection::new();
        selection.select(2);
        let section = selection.current();
        assert_eq!(section.title, "Design Elements");
        assert_eq!(
            section.steps[2],
            "Dark mode - next-themes package for theme switching"
        );
    }

    #[test]
    fn every_section_is_populated() {
        assert_eq!(GUIDE_REGISTRY.len(), 3);
        assert!(!GUIDE_REGISTRY.is_empty());
        for section in GUIDE_REGISTRY.iter() {
            assert!(!section.title.is_empty());
            assert!(!section.steps.is_empty());
            assert!(section.steps.iter().all(|step| !step.is_empty()));
        }
        assert_eq!(
            GUIDE_REGISTRY.titles().collect::<Vec<_>>(),
            ["Project Setup", "Key Components", "Design Elements"]
        );
    }

    #[test]
    fn registry_serializes_as_section_list() {
        let json = serde_json::to_value(&GUIDE_REGISTRY).unwrap();
        let sections = json.as_array().unwrap();
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[1]["title"], "Key Components");
        assert_eq!(sections[0]["steps"][1], "cd my-landing");
    }
}
