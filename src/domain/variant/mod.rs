//! Model variants and their constructors

mod model_type;
mod registry;

pub use model_type::ModelType;
pub use registry::{ModelFactory, ModelRegistry};
