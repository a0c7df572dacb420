//! Service modules for label composition and selection

pub mod address_splitter;
pub mod label_composer;
pub mod selection_filter;

// Re-export service types
pub use address_splitter::AddressSplitter;
pub use label_composer::LabelComposer;
pub use selection_filter::{select_records, Selection};
