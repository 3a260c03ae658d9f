//! Routine document export: layout, PDF rendering and watermarking.

pub mod document;
pub mod layout;
pub mod watermark;

pub use document::{
    document_filename, ExportError, RenderedDocument, RoutineDocument, StudentLookup,
};
pub use watermark::{WatermarkError, WatermarkTile};
