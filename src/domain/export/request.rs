use serde::Serialize;

/// Keyword arguments handed to a variant's export routine.
///
/// `output_dir` is only present when the caller chose a destination; the
/// exporter falls back to its own default otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRequest {
    pub opset_version: u32,
    pub simplify: bool,
    pub batch_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<String>,
}

impl ExportRequest {
    pub fn new(opset_version: u32, simplify: bool, batch_size: u32) -> Self {
        Self {
            opset_version,
            simplify,
            batch_size,
            output_dir: None,
        }
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<String>) -> Self {
        self.output_dir = Some(output_dir.into());
        self
    }

    /// Serialize as a JSON object of keyword arguments
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
