pub mod config;
pub mod error;
pub mod extract;
pub mod features;
pub mod figma;

pub use error::{FigmaFeaturesError, Result};
pub use features::FeatureSuggestion;
