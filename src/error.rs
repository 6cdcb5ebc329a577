use thiserror::Error;

use crate::tensor::TensorDesc;

#[derive(Error, Debug, PartialEq)]
pub enum LayerError {
    // Blob list arity
    #[error("{layer} layer requires at least {min} inputs, got {got}")]
    InputCount { layer: &'static str, min: usize, got: usize },

    #[error("{layer} layer requires exactly {expected} outputs, got {got}")]
    OutputCount { layer: &'static str, expected: usize, got: usize },

    #[error("{layer} layer: propagate_down has {got} flags for {expected} inputs")]
    PropagateCount { layer: &'static str, expected: usize, got: usize },

    // Shapes
    #[error("candidate {index} has shape {got}, expected {expected}")]
    CandidateShape { index: usize, expected: TensorDesc, got: TensorDesc },

    #[error("selector has shape {got}, expected {num}x1x1x1")]
    SelectorShape { num: usize, got: TensorDesc },

    #[error("output has shape {got}, expected {expected}")]
    OutputShape { expected: TensorDesc, got: TensorDesc },

    #[error("{layer} layer used before reshape")]
    NotReshaped { layer: &'static str },

    // Selector values
    #[error("selector value {value} at batch item {item} is not an integer")]
    NonIntegralSelector { item: usize, value: f64 },

    #[error("selector value {value} at batch item {item} is out of range for {candidates} candidates")]
    SelectorOutOfRange { item: usize, value: f64, candidates: usize },

    // Compute setup
    #[error("Invalid compute config: {0}")]
    InvalidConfig(String),

    #[error("Thread pool error: {0}")]
    ThreadPool(String),
}
