// Adapters layer: concrete implementations for external systems.

pub mod source;

pub use source::FetchingSource;
