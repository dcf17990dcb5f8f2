//! Infrastructure layer - exporter backends and logging

pub mod exporter;
pub mod logging;

pub use exporter::{PythonModelFactory, PythonSegmentationModel};
