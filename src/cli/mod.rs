//! CLI module for the RF-DETR segmentation exporter
//!
//! The command line mirrors the exporter's keyword arguments:
//! `--output_dir`, `--opset_version`, `--simplify`, `--batch_size`,
//! `--input_size` and `--model_type`.

pub mod export;

use std::path::PathBuf;

use clap::Parser;

use crate::domain::export::{DEFAULT_BATCH_SIZE, DEFAULT_INPUT_SIZE, DEFAULT_OPSET_VERSION};
use crate::domain::{ExportOptions, ModelType};

/// Export RF-DETR segmentation model to ONNX format
#[derive(Parser, Debug, Clone)]
#[command(name = "rfdetr-seg-export")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to save exported model (default: current directory)
    #[arg(long = "output_dir", alias = "output-dir")]
    pub output_dir: Option<PathBuf>,

    /// ONNX opset version
    #[arg(
        long = "opset_version",
        alias = "opset-version",
        default_value_t = DEFAULT_OPSET_VERSION,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub opset_version: u32,

    /// Simplify ONNX model using onnxsim
    #[arg(long)]
    pub simplify: bool,

    /// Batch size for export
    #[arg(
        long = "batch_size",
        alias = "batch-size",
        default_value_t = DEFAULT_BATCH_SIZE,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub batch_size: u32,

    /// Input image size
    #[arg(
        long = "input_size",
        alias = "input-size",
        default_value_t = DEFAULT_INPUT_SIZE,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub input_size: u32,

    /// Model type
    #[arg(
        long = "model_type",
        alias = "model-type",
        value_enum,
        default_value_t = ModelType::Medium
    )]
    pub model_type: ModelType,
}

impl Cli {
    /// Convert parsed arguments into export options
    pub fn to_options(&self) -> ExportOptions {
        let mut options = ExportOptions::new(self.model_type)
            .with_opset_version(self.opset_version)
            .with_simplify(self.simplify)
            .with_batch_size(self.batch_size)
            .with_input_size(self.input_size);

        if let Some(dir) = &self.output_dir {
            options = options.with_output_dir(dir.clone());
        }

        options
    }
}
