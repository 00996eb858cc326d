//! Shared content and view-state types for the landing page.
//!
//! Everything here is plain Rust with no browser dependencies, so the page
//! content and the guide selection logic can be unit tested natively.

pub mod error;
pub mod landing;

pub use error::SelectionError;
