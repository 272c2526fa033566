use std::error::Error;

/// Errors produced while building or drawing a decision-boundary plot.
#[derive(Debug, thiserror::Error)]
pub enum BoundaryError {
    /// The feature matrix does not have exactly two columns.
    #[error("Expected a two-column feature matrix, got {found} columns")]
    FeatureWidth { found: usize },
    /// The feature matrix has no rows, so no bounding box exists.
    #[error("Feature matrix is empty")]
    EmptyFeatures,
    /// Labels are not aligned with the feature rows.
    #[error("Got {labels} labels for {rows} feature rows")]
    LabelLength { rows: usize, labels: usize },
    /// The grid needs at least two subdivisions per axis.
    #[error("Grid resolution must be at least 2, got {0}")]
    Resolution(usize),
    /// The margin ratio cannot be represented in the feature float type.
    #[error("Margin ratio {0} is not representable")]
    MarginRatio(f64),
    /// The background needs two colors to span the predicted classes.
    #[error("Need at least two background colors, got {0}")]
    BackgroundColors(usize),
    /// A color specifier could not be parsed.
    #[error("Invalid color {spec:?}: {source}")]
    Color {
        spec: String,
        source: colorgrad::ParseColorError,
    },
    /// The background gradient could not be built.
    #[error("Invalid background gradient: {0}")]
    Gradient(#[from] colorgrad::CustomGradientError),
    /// The model failed; its error is passed through untouched.
    #[error("Prediction failed: {0}")]
    Predict(#[source] Box<dyn Error + Send + Sync>),
    /// The model returned a different number of labels than grid points.
    #[error("Model returned {found} predictions for {expected} grid points")]
    PredictionLength { expected: usize, found: usize },
    #[error(transparent)]
    Shape(#[from] ndarray::ShapeError),
    /// The output image has no pixels.
    #[error("Output size must be non-zero, got {width}x{height}")]
    Size { width: u32, height: u32 },
    /// The drawing backend reported an error.
    #[error("Rendering failed: {0}")]
    Draw(String),
    /// [`init_backend`](crate::init_backend) has not been called yet.
    #[error("No rendering backend registered; call init_backend first")]
    BackendNotInitialized,
}
