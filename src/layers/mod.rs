pub mod registry;

// Re-exports for convenience
pub use registry::{LayerEntry, LayerGroup, LayerRegistry};
