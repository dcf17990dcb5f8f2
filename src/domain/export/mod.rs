//! Export configuration, the export capability and the export workflow

mod model;
mod options;
mod request;
mod runner;

pub use model::SegmentationModel;
pub use options::{ExportOptions, DEFAULT_BATCH_SIZE, DEFAULT_INPUT_SIZE, DEFAULT_OPSET_VERSION};
pub use request::ExportRequest;
pub use runner::ExportRunner;

#[cfg(test)]
pub use model::MockSegmentationModel;
