//! Input handling: file type routing and text extraction
//!
//! Extraction failures are collaborator-visible errors; the batch loop decides
//! whether to skip the document or abort.

pub mod manager;
pub mod text_extractor;

pub use manager::InputManager;
