//! Domain layer - Core types and the export workflow

pub mod error;
pub mod export;
pub mod variant;

pub use error::DomainError;
pub use export::{ExportOptions, ExportRequest, ExportRunner, SegmentationModel};
pub use variant::{ModelFactory, ModelRegistry, ModelType};
