pub mod layout;
pub mod mcq;
pub mod resource;

// Re-export the document entry point
pub use layout::document;
