pub mod source;

// Re-exports for convenience
pub use source::{MapboxStyleSource, TileSource};
