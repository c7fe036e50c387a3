pub mod features;

pub use features::FeatureRenderer;
