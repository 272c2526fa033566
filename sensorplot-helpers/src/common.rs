use ndarray::{Array1, ArrayView2};
use crate::Float;
use std::fmt::Debug;

/// A single labeled sample.
///
/// L: The type of the label (e.g., String, i32, enum).
/// F: The float type for the features (e.g., f32, f64).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde_crate::Serialize, serde_crate::Deserialize),
    serde(crate = "serde_crate")
)]
pub struct DataPoint<L, F>
where
    L: Clone + Eq + std::hash::Hash + Debug,
    F: Float,
{
    pub features: Array1<F>,
    pub label: L,
}

impl<L, F> DataPoint<L, F>
where
    L: Clone + Eq + std::hash::Hash + Debug,
    F: Float,
{
    pub fn new(features: Array1<F>, label: L) -> Self {
        DataPoint { features, label }
    }

    /// Pairs every row of `features` with the label at the same index.
    ///
    /// Extra rows or labels beyond the shorter of the two are dropped.
    pub fn from_rows(features: ArrayView2<F>, labels: &[L]) -> Vec<Self> {
        features
            .rows()
            .into_iter()
            .zip(labels)
            .map(|(row, label)| DataPoint::new(row.to_owned(), label.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_from_rows_aligns_labels() {
        let x = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let points = DataPoint::from_rows(x.view(), &["a", "b"]);
        assert_eq!(points.len(), 2);
        assert_eq!(points[1].features, array![3.0, 4.0]);
        assert_eq!(points[1].label, "b");
    }
}
