use once_cell::sync::Lazy;
use regex::Regex;

use super::PythonSegmentationModel;
use crate::config::ExporterConfig;
use crate::domain::{DomainError, ModelRegistry, ModelType, SegmentationModel};

/// Dotted Python module path, e.g. `rfdetr` or `vendor.rfdetr`
static MODULE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)*$")
        .expect("module pattern is valid")
});

/// Factory for the Python-backed variants
#[derive(Debug)]
pub struct PythonModelFactory;

impl PythonModelFactory {
    /// Registry with all six variants served by the configured interpreter
    pub fn registry(config: &ExporterConfig) -> Result<ModelRegistry, DomainError> {
        Self::validate_config(config)?;

        let mut registry = ModelRegistry::new();
        for model_type in ModelType::ALL {
            let config = config.clone();
            registry.register(model_type, move || Self::create(&config, model_type));
        }

        Ok(registry)
    }

    /// Create a single variant
    pub fn create(
        config: &ExporterConfig,
        model_type: ModelType,
    ) -> Result<Box<dyn SegmentationModel>, DomainError> {
        Ok(Box::new(PythonSegmentationModel::new(
            &config.python,
            &config.module,
            model_type,
        )))
    }

    fn validate_config(config: &ExporterConfig) -> Result<(), DomainError> {
        if config.python.trim().is_empty() {
            return Err(DomainError::configuration(
                "exporter.python must name an interpreter",
            ));
        }

        if !MODULE_PATTERN.is_match(&config.module) {
            return Err(DomainError::configuration(format!(
                "exporter.module '{}' is not a valid Python module path",
                config.module
            )));
        }

        Ok(())
    }
}
