//! Export workflow: select a variant, delegate to it, report progress

use std::io::Write;

use tracing::{debug, info, instrument};

use super::{ExportOptions, ExportRequest};
use crate::domain::variant::ModelRegistry;
use crate::domain::DomainError;

const RULE_WIDTH: usize = 60;

/// Runs one export from parsed options to a finished model file
#[derive(Debug)]
pub struct ExportRunner {
    registry: ModelRegistry,
}

impl ExportRunner {
    pub fn new(registry: ModelRegistry) -> Self {
        Self { registry }
    }

    /// Execute the export, writing the progress report to `out`.
    ///
    /// Nothing after the `[2/2]` block is written unless the exporter
    /// succeeds, so a failed run never shows the completion banner.
    #[instrument(name = "export", skip_all, fields(model_type = %options.model_type))]
    pub fn run<W: Write>(
        &self,
        options: &ExportOptions,
        out: &mut W,
    ) -> Result<ExportRequest, DomainError> {
        options.validate()?;

        let rule = "=".repeat(RULE_WIDTH);
        writeln!(out, "{}", rule)?;
        writeln!(out, "RF-DETR Segmentation Model Export")?;
        writeln!(out, "{}", rule)?;

        writeln!(
            out,
            "\n[1/2] Loading RF-DETR Segmentation model ({})...",
            options.model_type
        )?;
        let model = self.registry.create(options.model_type)?;
        info!(model_type = %options.model_type, variant = model.name(), "Model variant selected");

        let request = options.to_request()?;

        writeln!(out, "\n[2/2] Exporting to ONNX format...")?;
        writeln!(out, "  - Batch size: {}", options.batch_size)?;
        writeln!(
            out,
            "  - Input size: {}x{}",
            options.input_size, options.input_size
        )?;
        writeln!(out, "  - ONNX opset: {}", options.opset_version)?;
        writeln!(out, "  - Simplify: {}", options.simplify)?;
        out.flush()?;

        if let Err(e) = model.export(&request) {
            debug!(variant = model.name(), error = %e, "Export failed");
            return Err(e);
        }
        info!(variant = model.name(), "Export finished");

        writeln!(out, "\n{}", rule)?;
        writeln!(out, "\u{2713} Export complete!")?;
        writeln!(out, "{}", rule)?;
        writeln!(out, "\nModel outputs:")?;
        writeln!(out, "  - dets: Bounding boxes [batch, num_queries, 4]")?;
        writeln!(
            out,
            "  - labels: Class logits [batch, num_queries, num_classes]"
        )?;
        writeln!(
            out,
            "  - masks: Segmentation masks [batch, num_queries, H, W]"
        )?;
        writeln!(
            out,
            "\nNote: This is a segmentation model with mask prediction capability."
        )?;
        writeln!(out, "{}", rule)?;

        Ok(request)
    }
}
