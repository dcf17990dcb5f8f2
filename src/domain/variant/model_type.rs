//! Model size variants

use std::fmt;
use std::str::FromStr;

use crate::domain::DomainError;

/// One of the six RF-DETR segmentation model sizes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum ModelType {
    Nano,
    Small,
    #[default]
    Medium,
    Large,
    #[value(name = "xlarge")]
    XLarge,
    #[value(name = "2xlarge")]
    TwoXLarge,
}

impl ModelType {
    /// Every variant, smallest first
    pub const ALL: [ModelType; 6] = [
        ModelType::Nano,
        ModelType::Small,
        ModelType::Medium,
        ModelType::Large,
        ModelType::XLarge,
        ModelType::TwoXLarge,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nano => "nano",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::XLarge => "xlarge",
            Self::TwoXLarge => "2xlarge",
        }
    }

    /// Name of the class that builds this variant in the exporter library
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Nano => "RFDETRSegNano",
            Self::Small => "RFDETRSegSmall",
            Self::Medium => "RFDETRSegMedium",
            Self::Large => "RFDETRSegLarge",
            Self::XLarge => "RFDETRSegXLarge",
            Self::TwoXLarge => "RFDETRSeg2XLarge",
        }
    }
}

/// Parsing for callers that hold a name rather than a parsed flag
impl FromStr for ModelType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|model_type| model_type.as_str() == s)
            .ok_or_else(|| DomainError::unsupported_model_type(s))
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use clap::ValueEnum;

    use super::*;

    #[test]
    fn test_names_round_trip() {
        for model_type in ModelType::ALL {
            assert_eq!(model_type.as_str().parse::<ModelType>().unwrap(), model_type);
        }
    }

    #[test]
    fn test_cli_names_match_display() {
        let names: Vec<String> = ModelType::value_variants()
            .iter()
            .filter_map(|model_type| model_type.to_possible_value())
            .map(|value| value.get_name().to_string())
            .collect();

        assert_eq!(
            names,
            vec!["nano", "small", "medium", "large", "xlarge", "2xlarge"]
        );
        for model_type in ModelType::value_variants() {
            let value = model_type.to_possible_value().unwrap();
            assert_eq!(value.get_name(), model_type.to_string());
        }
    }

    #[test]
    fn test_default_is_medium() {
        assert_eq!(ModelType::default(), ModelType::Medium);
    }

    #[test]
    fn test_class_names() {
        assert_eq!(ModelType::Nano.class_name(), "RFDETRSegNano");
        assert_eq!(ModelType::XLarge.class_name(), "RFDETRSegXLarge");
        assert_eq!(ModelType::TwoXLarge.class_name(), "RFDETRSeg2XLarge");
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        let err = "huge".parse::<ModelType>().unwrap_err();
        assert!(matches!(err, DomainError::UnsupportedModelType { .. }));
        assert!("Medium".parse::<ModelType>().is_err());
        assert!("".parse::<ModelType>().is_err());
    }
}
