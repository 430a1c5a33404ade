/// Errors reported by tensor construction, access and the operator layer.
#[derive(Debug, thiserror::Error)]
pub enum TensorError {
    #[error("Shape Mismatch: {0}")]
    ShapeMismatch(String),
    #[error("Index Out of Bounds: {0}")]
    IndexOutOfBounds(String),
    #[error("Malformed Construction: {0}")]
    MalformedConstruction(String),
    #[error("Range Invalid: {0}")]
    RangeInvalid(String),
    #[error("Unsupported Operation: {0}")]
    UnsupportedOperation(String),
    #[error("Thread Pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
