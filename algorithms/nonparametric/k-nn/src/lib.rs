use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use ndarray::{Array1, ArrayView1, ArrayView2};
// These are the core components from our shared library.
use sensorplot_helpers::{Classifier, DataPoint, Distance, Float};
use tracing::debug;

/// Errors that can occur when using the k-NN classifier.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KnnError {
    /// k cannot be zero for a k-NN classifier
    #[error("k cannot be zero for a k-NN classifier")]
    InvalidK,
    /// Cannot predict with an empty training set
    #[error("Cannot predict with an empty training set")]
    EmptyTrainingSet,
    /// Query width differs from the training features
    #[error("Expected {expected} features per point, got {found}")]
    DimensionMismatch { expected: usize, found: usize },
    /// Invalid distance comparison (likely due to NaN values in data)
    #[error("Invalid distance comparison (likely due to NaN values in data)")]
    InvalidDistance,
}

/// A k-Nearest Neighbors (k-NN) classifier.
///
/// This classifier predicts the label of a new data point by finding the `k`
/// most similar points in its training set and taking a majority vote among their labels.
/// A tied vote goes to the tied label whose closest neighbour is nearest to the query.
///
/// # Type Parameters
///
/// * `L`: The type of the label (e.g., `String`, `i32`, or a custom `enum`).
/// * `F`: The float type for the features (e.g., `f32`, `f64`).
/// * `D`: The distance metric, which must implement the `Distance` trait.
#[derive(Debug, Clone)]
pub struct KnnClassifier<L, F, D>
where
    L: Clone + Eq + Hash + Debug,
    F: Float,
    D: Distance<F>,
{
    k: usize,
    training_data: Vec<DataPoint<L, F>>,
    distance: D,
}

impl<L, F, D> KnnClassifier<L, F, D>
where
    L: Clone + Eq + Hash + Debug,
    F: Float,
    D: Distance<F>,
{
    /// Creates a new k-NN classifier.
    ///
    /// # Arguments
    ///
    /// * `k`: The number of neighbors to consider for classification. Must be greater than 0.
    /// * `training_data`: A vector of `DataPoint`s that the classifier will learn from.
    /// * `distance`: An instance of a struct that implements the `Distance` trait (e.g., `L2Dist`).
    ///
    /// # Errors
    ///
    /// Returns `KnnError::InvalidK` if `k` is 0, as this is not a valid configuration.
    pub fn new(
        k: usize,
        training_data: Vec<DataPoint<L, F>>,
        distance: D,
    ) -> Result<Self, KnnError> {
        if k == 0 {
            return Err(KnnError::InvalidK);
        }
        Ok(Self {
            k,
            training_data,
            distance,
        })
    }

    /// Predicts the label for a single unseen data point.
    ///
    /// # Errors
    ///
    /// Returns `KnnError::EmptyTrainingSet` if the training data is empty.
    /// Returns `KnnError::DimensionMismatch` if `features` has the wrong length.
    /// Returns `KnnError::InvalidDistance` if a distance is NaN.
    pub fn predict_one(&self, features: ArrayView1<F>) -> Result<L, KnnError> {
        let expected = self
            .training_data
            .first()
            .ok_or(KnnError::EmptyTrainingSet)?
            .features
            .len();
        if features.len() != expected {
            return Err(KnnError::DimensionMismatch {
                expected,
                found: features.len(),
            });
        }

        // Relative distances (e.g. squared Euclidean) keep the ordering and skip the sqrt.
        let mut distances: Vec<(F, &L)> = Vec::with_capacity(self.training_data.len());
        for dp in &self.training_data {
            let dist = self.distance.rdistance(dp.features.view(), features);
            if dist.is_nan() {
                return Err(KnnError::InvalidDistance);
            }
            distances.push((dist, &dp.label));
        }

        // Stable sort: equal distances keep training order, so ties are deterministic.
        distances.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

        let num_neighbors = self.k.min(distances.len());
        let neighbors = &distances[..num_neighbors];

        let mut votes: HashMap<&L, usize> = HashMap::new();
        for (_, label) in neighbors {
            *votes.entry(*label).or_insert(0) += 1;
        }
        let max_votes = votes.values().copied().max().unwrap_or(0);

        // Neighbours are nearest-first, so the first one carrying a winning label breaks ties.
        neighbors
            .iter()
            .find(|(_, label)| votes.get(*label) == Some(&max_votes))
            .map(|(_, label)| (*label).clone())
            .ok_or(KnnError::EmptyTrainingSet)
    }
}

impl<L, F, D> Classifier<F> for KnnClassifier<L, F, D>
where
    L: Clone + Eq + Hash + Debug,
    F: Float,
    D: Distance<F>,
{
    type Label = L;
    type Error = KnnError;

    fn predict(&self, batch: ArrayView2<F>) -> Result<Array1<L>, KnnError> {
        debug!(
            rows = batch.nrows(),
            k = self.k,
            training = self.training_data.len(),
            "k-NN batch prediction"
        );
        batch
            .rows()
            .into_iter()
            .map(|row| self.predict_one(row))
            .collect::<Result<Vec<_>, _>>()
            .map(Array1::from)
    }
}
