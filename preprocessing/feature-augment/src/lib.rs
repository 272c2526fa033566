//! Derived housing features as a `fit` / `transform` pipeline step.

mod frame;

pub use frame::Frame;

use ndarray::{Array1, ArrayView2};
use sensorplot_helpers::{Float, Transformer};
use tracing::debug;

/// Errors raised while building or augmenting a [`Frame`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AugmentError {
    #[error("Got {names} column names for {columns} columns")]
    ColumnCount { names: usize, columns: usize },
    #[error("Required column {0:?} is missing")]
    MissingColumn(String),
    #[error("Column {0:?} already exists")]
    DuplicateColumn(String),
    #[error(transparent)]
    Shape(#[from] ndarray::ShapeError),
}

/// Columns appended by [`FeatureAugmenter::transform`], in order.
pub const DERIVED_COLUMNS: [&str; 5] = [
    "rooms_per_household",
    "bedrooms_per_household",
    "population_per_household",
    "rooms_per_bedroom",
    "degree_of_bottomleft",
];

/// Pipeline step that appends per-household ratios and a location score.
///
/// The step learns nothing: `fit` hands back the same instance. `transform`
/// names the incoming columns with `column_names` and needs at least
/// `total_rooms`, `total_bedrooms`, `population`, `households`, `latitude`
/// and `longitude` among them. Zero denominators yield `inf` or `NaN`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde_crate::Serialize, serde_crate::Deserialize),
    serde(crate = "serde_crate")
)]
pub struct FeatureAugmenter {
    column_names: Vec<String>,
}

impl FeatureAugmenter {
    pub fn new<I, S>(column_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            column_names: column_names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }
}

impl<F: Float> Transformer<F> for FeatureAugmenter {
    type Output = Frame<F>;
    type Error = AugmentError;

    fn fit(&mut self, _data: ArrayView2<F>) -> Result<&mut Self, AugmentError> {
        Ok(self)
    }

    #[tracing::instrument(skip_all, fields(rows = data.nrows(), cols = data.ncols()))]
    fn transform(&self, data: ArrayView2<F>) -> Result<Frame<F>, AugmentError> {
        let frame = Frame::new(self.column_names.clone(), data.to_owned())?;

        let derived: [Array1<F>; 5] = {
            let rooms = frame.require("total_rooms")?;
            let bedrooms = frame.require("total_bedrooms")?;
            let population = frame.require("population")?;
            let households = frame.require("households")?;
            let latitude = frame.require("latitude")?;
            let longitude = frame.require("longitude")?;
            [
                &rooms / &households,
                &bedrooms / &households,
                &population / &households,
                &rooms / &bedrooms,
                &latitude + &longitude,
            ]
        };

        let frame = DERIVED_COLUMNS
            .into_iter()
            .zip(derived)
            .try_fold(frame, |frame, (name, values)| frame.with_column(name, values))?;
        debug!(columns = frame.columns().len(), "augmented frame");
        Ok(frame)
    }
}
