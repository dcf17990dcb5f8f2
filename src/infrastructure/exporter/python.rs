//! Variants backed by the rfdetr Python package

use std::process::Command;

use tracing::{debug, info};

use crate::domain::{DomainError, ExportRequest, ModelType, SegmentationModel};

/// A segmentation variant exported by a child Python process.
///
/// The child imports the variant class from `module`, instantiates it and
/// calls `export(**request)`. Its stdout and stderr are inherited.
#[derive(Debug, Clone)]
pub struct PythonSegmentationModel {
    python: String,
    module: String,
    model_type: ModelType,
}

impl PythonSegmentationModel {
    pub fn new(
        python: impl Into<String>,
        module: impl Into<String>,
        model_type: ModelType,
    ) -> Self {
        Self {
            python: python.into(),
            module: module.into(),
            model_type,
        }
    }

    /// Source passed to `python -c`; the request arrives as `sys.argv[1]`
    pub fn script(&self) -> String {
        let class = self.model_type.class_name();
        format!(
            "import json, sys\nfrom {module} import {class}\n{class}().export(**json.loads(sys.argv[1]))\n",
            module = self.module,
            class = class,
        )
    }

    pub fn build_command(&self, request: &ExportRequest) -> Result<Command, DomainError> {
        let arguments = request.to_json().map_err(|e| {
            DomainError::exporter(self.name(), format!("cannot encode export request: {}", e))
        })?;

        let mut command = Command::new(&self.python);
        command.arg("-c").arg(self.script()).arg(arguments);
        Ok(command)
    }
}

impl SegmentationModel for PythonSegmentationModel {
    fn name(&self) -> &'static str {
        self.model_type.class_name()
    }

    fn export(&self, request: &ExportRequest) -> Result<(), DomainError> {
        let mut command = self.build_command(request)?;
        info!(
            python = %self.python,
            module = %self.module,
            variant = self.name(),
            "Invoking exporter"
        );
        debug!(request = ?request, "Export request");

        let status = command.status().map_err(|e| {
            DomainError::exporter(
                self.name(),
                format!("failed to start '{}': {}", self.python, e),
            )
        })?;

        if !status.success() {
            return Err(DomainError::exporter(
                self.name(),
                format!("'{}' exited with {}", self.python, status),
            ));
        }

        Ok(())
    }
}
