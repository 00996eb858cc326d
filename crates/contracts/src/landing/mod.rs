pub mod copy;
pub mod features;
pub mod guide;

pub use features::{FeatureCard, FeatureIcon, FEATURES};
pub use guide::{GuideSelection, Registry, Section, GUIDE_REGISTRY, GUIDE_SECTION_COUNT};
