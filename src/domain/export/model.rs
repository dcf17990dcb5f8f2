//! The export capability shared by every variant

use std::fmt::Debug;

#[cfg(test)]
use mockall::automock;

use super::ExportRequest;
use crate::domain::DomainError;

/// A constructed segmentation model that can serialize itself to ONNX.
///
/// Graph tracing, serialization and simplification all happen behind this
/// trait; callers only hand over an [`ExportRequest`].
#[cfg_attr(test, automock)]
pub trait SegmentationModel: Send + Sync + Debug {
    /// Name of the variant, as the exporter library knows it
    fn name(&self) -> &'static str;

    /// Export the model using the given request
    fn export(&self, request: &ExportRequest) -> Result<(), DomainError>;
}
