//! Exporter implementations

mod factory;
mod python;

pub use factory::PythonModelFactory;
pub use python::PythonSegmentationModel;
