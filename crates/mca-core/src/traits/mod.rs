//! Seams between the engine's components.

mod classifier;
mod context_filter;
mod extractor;

pub use classifier::IPatternClassifier;
pub use context_filter::IContextFilter;
pub use extractor::IFeatureExtractor;
