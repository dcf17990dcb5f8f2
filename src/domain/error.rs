use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Unsupported model type: {model_type}")]
    UnsupportedModelType { model_type: String },

    #[error("Exporter error: {variant} - {message}")]
    Exporter { variant: String, message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn unsupported_model_type(model_type: impl Into<String>) -> Self {
        Self::UnsupportedModelType {
            model_type: model_type.into(),
        }
    }

    pub fn exporter(variant: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Exporter {
            variant: variant.into(),
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_model_type_error() {
        let error = DomainError::unsupported_model_type("huge");
        assert_eq!(error.to_string(), "Unsupported model type: huge");
    }

    #[test]
    fn test_exporter_error() {
        let error = DomainError::exporter("RFDETRSegNano", "exited with status 1");
        assert_eq!(
            error.to_string(),
            "Exporter error: RFDETRSegNano - exited with status 1"
        );
    }

    #[test]
    fn test_validation_error() {
        let error = DomainError::validation("batch_size must be positive");
        assert_eq!(
            error.to_string(),
            "Validation error: batch_size must be positive"
        );
    }
}
