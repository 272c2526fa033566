use ndarray::{Array1, ArrayView2};

use crate::Float;

/// A fitted model that assigns one label to every row of a feature batch.
///
/// Training, persistence and hyperparameters are the implementor's business;
/// consumers such as the decision-boundary renderer only ever call `predict`.
pub trait Classifier<F: Float> {
    type Label;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Predicts a label for each row of `batch`, in row order.
    fn predict(&self, batch: ArrayView2<F>) -> Result<Array1<Self::Label>, Self::Error>;
}

/// A pipeline step with a `fit` / `transform` contract.
pub trait Transformer<F: Float> {
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Learns whatever state the step needs from `data` and hands the step back.
    fn fit(&mut self, data: ArrayView2<F>) -> Result<&mut Self, Self::Error>;

    fn transform(&self, data: ArrayView2<F>) -> Result<Self::Output, Self::Error>;

    fn fit_transform(&mut self, data: ArrayView2<F>) -> Result<Self::Output, Self::Error> {
        self.fit(data)?.transform(data)
    }
}
