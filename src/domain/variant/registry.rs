//! Lookup table from model size to variant constructor

use std::collections::HashMap;
use std::fmt;

use crate::domain::export::SegmentationModel;
use crate::domain::DomainError;

use super::ModelType;

/// Zero-argument constructor for one variant
pub type ModelFactory =
    Box<dyn Fn() -> Result<Box<dyn SegmentationModel>, DomainError> + Send + Sync>;

/// Registry mapping each [`ModelType`] to the factory that builds it
#[derive(Default)]
pub struct ModelRegistry {
    factories: HashMap<ModelType, ModelFactory>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the factory for a model type
    pub fn register<F>(&mut self, model_type: ModelType, factory: F)
    where
        F: Fn() -> Result<Box<dyn SegmentationModel>, DomainError> + Send + Sync + 'static,
    {
        self.factories.insert(model_type, Box::new(factory));
    }

    /// Builder-style variant of [`ModelRegistry::register`]
    pub fn with<F>(mut self, model_type: ModelType, factory: F) -> Self
    where
        F: Fn() -> Result<Box<dyn SegmentationModel>, DomainError> + Send + Sync + 'static,
    {
        self.register(model_type, factory);
        self
    }

    /// Construct the variant registered for `model_type`.
    ///
    /// A model type without a factory is an unsupported-type error; the CLI
    /// restricts its choices to registered names so this path is defensive.
    pub fn create(&self, model_type: ModelType) -> Result<Box<dyn SegmentationModel>, DomainError> {
        let factory = self
            .factories
            .get(&model_type)
            .ok_or_else(|| DomainError::unsupported_model_type(model_type.as_str()))?;

        factory()
    }

    pub fn contains(&self, model_type: ModelType) -> bool {
        self.factories.contains_key(&model_type)
    }

    /// Registered model types, smallest first
    pub fn registered(&self) -> Vec<ModelType> {
        ModelType::ALL
            .into_iter()
            .filter(|model_type| self.contains(*model_type))
            .collect()
    }
}

impl fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("registered", &self.registered())
            .finish()
    }
}
