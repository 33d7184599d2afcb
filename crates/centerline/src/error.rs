use std::path::PathBuf;

/// Missing or malformed sample files.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("data file {} does not exist", path.display())]
    Missing { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line}: {reason}", path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("need at least {required} samples, got {provided}")]
    TooFewSamples { required: usize, provided: usize },
}

/// Degenerate geometric input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("centerline points {index} and {} coincide", index + 1)]
    CoincidentPoints { index: usize },

    #[error("zero-length tangent at centerline point {index}")]
    DegenerateTangent { index: usize },

    #[error("spline abscissa is not strictly increasing at sample {index}")]
    NonIncreasingAbscissa { index: usize },

    #[error("spline needs as many values as knots, got {knots} knots and {values} values")]
    SampleMismatch { knots: usize, values: usize },

    #[error("spline needs at least 2 knots, got {provided}")]
    TooFewKnots { provided: usize },

    #[error("spline system is singular")]
    SingularSystem,
}

/// Any failure while building a centerline path.
#[derive(Debug, thiserror::Error)]
pub enum CenterlineError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error("resample factor must be at least 1, got {factor}")]
    InvalidResampleFactor { factor: usize },
}
