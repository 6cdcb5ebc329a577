pub mod compute;
pub mod error;
pub mod layer;
pub mod tensor;

pub use error::LayerError;
