//! RF-DETR Segmentation Export
//!
//! Command-line driver for the rfdetr ONNX exporter:
//! - Six model sizes, from nano to 2xlarge
//! - Export arguments forwarded as keyword arguments
//! - Progress report on stdout, structured logs on stderr

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::{
    DomainError, ExportOptions, ExportRequest, ExportRunner, ModelRegistry, ModelType,
    SegmentationModel,
};
