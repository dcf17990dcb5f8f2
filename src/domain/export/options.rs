use std::path::PathBuf;

use super::ExportRequest;
use crate::domain::variant::ModelType;
use crate::domain::DomainError;

pub const DEFAULT_OPSET_VERSION: u32 = 17;
pub const DEFAULT_BATCH_SIZE: u32 = 1;
pub const DEFAULT_INPUT_SIZE: u32 = 640;

/// Everything the user asked for in one export run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Which variant to build
    pub model_type: ModelType,

    /// Destination directory; `None` leaves the choice to the exporter
    pub output_dir: Option<PathBuf>,

    /// ONNX opset to target
    pub opset_version: u32,

    /// Run the exporter's simplification pass
    pub simplify: bool,

    /// Batch dimension of the exported graph
    pub batch_size: u32,

    /// Square input resolution, shown in the progress report only
    pub input_size: u32,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            model_type: ModelType::default(),
            output_dir: None,
            opset_version: DEFAULT_OPSET_VERSION,
            simplify: false,
            batch_size: DEFAULT_BATCH_SIZE,
            input_size: DEFAULT_INPUT_SIZE,
        }
    }
}

impl ExportOptions {
    pub fn new(model_type: ModelType) -> Self {
        Self {
            model_type,
            ..Self::default()
        }
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(output_dir.into());
        self
    }

    pub fn with_opset_version(mut self, opset_version: u32) -> Self {
        self.opset_version = opset_version;
        self
    }

    pub fn with_simplify(mut self, simplify: bool) -> Self {
        self.simplify = simplify;
        self
    }

    pub fn with_batch_size(mut self, batch_size: u32) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_input_size(mut self, input_size: u32) -> Self {
        self.input_size = input_size;
        self
    }

    /// Reject zero for any of the numeric settings and an output directory
    /// that cannot be passed on unchanged
    pub fn validate(&self) -> Result<(), DomainError> {
        self.output_dir_arg()?;

        let fields = [
            ("opset_version", self.opset_version),
            ("batch_size", self.batch_size),
            ("input_size", self.input_size),
        ];

        for (name, value) in fields {
            if value == 0 {
                return Err(DomainError::validation(format!(
                    "{} must be a positive integer",
                    name
                )));
            }
        }

        Ok(())
    }

    /// Build the exporter arguments. `input_size` is never forwarded, and an
    /// empty output directory counts as not given.
    pub fn to_request(&self) -> Result<ExportRequest, DomainError> {
        let request = ExportRequest::new(self.opset_version, self.simplify, self.batch_size);

        Ok(match self.output_dir_arg()? {
            Some(dir) => request.with_output_dir(dir),
            None => request,
        })
    }

    /// The output directory as the exporter will receive it. Paths that are
    /// not valid UTF-8 are rejected rather than rewritten.
    fn output_dir_arg(&self) -> Result<Option<&str>, DomainError> {
        let Some(dir) = self
            .output_dir
            .as_ref()
            .filter(|dir| !dir.as_os_str().is_empty())
        else {
            return Ok(None);
        };

        dir.to_str().map(Some).ok_or_else(|| {
            DomainError::validation(format!(
                "output_dir '{}' is not valid UTF-8",
                dir.display()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let options = ExportOptions::default();
        assert_eq!(options.model_type, ModelType::Medium);
        assert_eq!(options.output_dir, None);
        assert_eq!(options.opset_version, 17);
        assert!(!options.simplify);
        assert_eq!(options.batch_size, 1);
        assert_eq!(options.input_size, 640);
    }

    #[test]
    fn test_default_request() {
        let request = ExportOptions::default().to_request().unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"opset_version": 17, "simplify": false, "batch_size": 1})
        );
    }

    #[test]
    fn test_request_mirrors_flags() {
        let request = ExportOptions::new(ModelType::Nano)
            .with_batch_size(4)
            .with_simplify(true)
            .to_request()
            .unwrap();

        assert_eq!(request, ExportRequest::new(17, true, 4));
    }

    #[test]
    fn test_request_carries_output_dir() {
        let request = ExportOptions::new(ModelType::XLarge)
            .with_output_dir("/tmp/out")
            .with_opset_version(13)
            .to_request()
            .unwrap();

        assert_eq!(
            request,
            ExportRequest::new(13, false, 1).with_output_dir("/tmp/out")
        );
    }

    #[test]
    fn test_empty_output_dir_is_dropped() {
        let request = ExportOptions::default()
            .with_output_dir("")
            .to_request()
            .unwrap();
        assert_eq!(request.output_dir, None);
    }

    #[test]
    fn test_input_size_never_forwarded() {
        for input_size in [1, 320, 640, 1280, u32::MAX] {
            let request = ExportOptions::default()
                .with_input_size(input_size)
                .to_request()
                .unwrap();
            let value = serde_json::to_value(&request).unwrap();

            assert!(value.get("input_size").is_none());
            assert_eq!(request, ExportRequest::new(17, false, 1));
        }
    }

    #[test]
    fn test_validate_rejects_zero() {
        assert!(ExportOptions::default().validate().is_ok());

        let err = ExportOptions::default()
            .with_batch_size(0)
            .validate()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: batch_size must be a positive integer"
        );

        assert!(ExportOptions::default().with_opset_version(0).validate().is_err());
        assert!(ExportOptions::default().with_input_size(0).validate().is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_output_dir_is_rejected() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let options = ExportOptions::default()
            .with_output_dir(OsString::from_vec(b"/tmp/out\xff".to_vec()));

        let err = options.to_request().unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));
        assert!(err.to_string().contains("not valid UTF-8"));
        assert!(matches!(
            options.validate().unwrap_err(),
            DomainError::Validation { .. }
        ));
    }

    #[test]
    fn test_utf8_output_dir_is_forwarded_unchanged() {
        let request = ExportOptions::default()
            .with_output_dir("/data/modèles/seg out")
            .to_request()
            .unwrap();

        assert_eq!(request.output_dir.as_deref(), Some("/data/modèles/seg out"));
    }
}
