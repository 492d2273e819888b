//! Domain models for lookup results.

pub mod axis;
pub mod category;
pub mod component;
pub mod website;

pub use axis::Axis;
pub use category::{Category, CategoryBand};
pub use component::Component;
pub use website::{Website, DEFAULT_MIN_CONFIDENCE, DEFAULT_THRESHOLD};
