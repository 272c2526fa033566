use ndarray::{Array1, Array2, ArrayView1, ArrayView2, s};
use sensorplot_helpers::{Classifier, Float};
use tracing::debug;

use crate::BoundaryError;

/// Axis-aligned plotting box in feature space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<F> {
    pub x_min: F,
    pub x_max: F,
    pub y_min: F,
    pub y_max: F,
}

/// Predicted labels over a regular lattice spanning `bounds`.
///
/// Row 0 of `cells` is the top of the plot (largest vertical value), column 0
/// the left edge.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionGrid<F, L> {
    pub bounds: Bounds<F>,
    pub cells: Array2<L>,
}

impl<F, L> DecisionGrid<F, L> {
    pub fn resolution(&self) -> usize {
        self.cells.nrows()
    }
}

/// Computes the padded bounding box of a two-column feature matrix.
///
/// Each axis is padded by `margin_ratio` times that column's maximum value,
/// not its span, so the box is lopsided for data far from the origin and
/// shrinks instead of growing when the maximum is negative.
pub fn padded_bounds<F: Float>(
    features: ArrayView2<F>,
    margin_ratio: f64,
) -> Result<Bounds<F>, BoundaryError> {
    if features.ncols() != 2 {
        return Err(BoundaryError::FeatureWidth {
            found: features.ncols(),
        });
    }
    if features.nrows() == 0 {
        return Err(BoundaryError::EmptyFeatures);
    }
    let ratio = F::cast(margin_ratio).ok_or(BoundaryError::MarginRatio(margin_ratio))?;

    let (x_min, x_max) = min_max(features.column(0));
    let (y_min, y_max) = min_max(features.column(1));
    let x_margin = x_max * ratio;
    let y_margin = y_max * ratio;

    Ok(Bounds {
        x_min: x_min - x_margin,
        x_max: x_max + x_margin,
        y_min: y_min - y_margin,
        y_max: y_max + y_margin,
    })
}

fn min_max<F: Float>(column: ArrayView1<F>) -> (F, F) {
    column.fold((F::infinity(), F::neg_infinity()), |(lo, hi), &v| {
        (lo.min(v), hi.max(v))
    })
}

/// Evaluates `model` at every point of a `resolution x resolution` lattice
/// over `bounds`.
///
/// All points go to the model in a single batch, ordered row-major with the
/// horizontal coordinate varying fastest. The reshaped predictions are then
/// flipped so the first row is the top of the image.
pub fn decision_grid<M, F>(
    model: &M,
    bounds: &Bounds<F>,
    resolution: usize,
) -> Result<DecisionGrid<F, M::Label>, BoundaryError>
where
    M: Classifier<F>,
    M::Label: Clone,
    F: Float,
{
    if resolution < 2 {
        return Err(BoundaryError::Resolution(resolution));
    }
    let xs = Array1::linspace(bounds.x_min, bounds.x_max, resolution);
    let ys = Array1::linspace(bounds.y_min, bounds.y_max, resolution);

    let n_points = resolution * resolution;
    let mut batch = Array2::<F>::zeros((n_points, 2));
    for (idx, mut row) in batch.rows_mut().into_iter().enumerate() {
        row[0] = xs[idx % resolution];
        row[1] = ys[idx / resolution];
    }

    debug!(points = n_points, "predicting decision grid");
    let predictions = model
        .predict(batch.view())
        .map_err(|e| BoundaryError::Predict(Box::new(e)))?;
    if predictions.len() != n_points {
        return Err(BoundaryError::PredictionLength {
            expected: n_points,
            found: predictions.len(),
        });
    }

    let cells = Array2::from_shape_vec((resolution, resolution), predictions.to_vec())?;
    Ok(DecisionGrid {
        bounds: *bounds,
        cells: flip_rows(cells.view()),
    })
}

/// Reverses the row order of a grid.
pub fn flip_rows<L: Clone>(grid: ArrayView2<L>) -> Array2<L> {
    grid.slice(s![..;-1, ..]).to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use std::cell::Cell;
    use std::convert::Infallible;

    /// Labels a point by which side of `x = threshold` it falls on and
    /// counts how many batches it was asked for.
    struct Threshold {
        threshold: f64,
        calls: Cell<usize>,
    }

    impl Threshold {
        fn new(threshold: f64) -> Self {
            Self {
                threshold,
                calls: Cell::new(0),
            }
        }
    }

    impl Classifier<f64> for Threshold {
        type Label = u8;
        type Error = Infallible;

        fn predict(&self, batch: ArrayView2<f64>) -> Result<Array1<u8>, Infallible> {
            self.calls.set(self.calls.get() + 1);
            Ok(batch.rows().into_iter().map(|r| u8::from(r[0] > self.threshold)).collect())
        }
    }

    /// Labels a point by whether it lies in the upper half of the box.
    struct Upper(f64);

    impl Classifier<f64> for Upper {
        type Label = &'static str;
        type Error = Infallible;

        fn predict(&self, batch: ArrayView2<f64>) -> Result<Array1<&'static str>, Infallible> {
            Ok(batch
                .rows()
                .into_iter()
                .map(|r| if r[1] > self.0 { "top" } else { "bottom" })
                .collect())
        }
    }

    #[test]
    fn test_bounds_pad_by_tenth_of_max() {
        let x = array![[1.0, 20.0], [4.0, 50.0], [2.0, 30.0]];
        let b = padded_bounds(x.view(), 0.1).unwrap();
        assert_eq!(b.x_min, 1.0 - 0.1 * 4.0);
        assert_eq!(b.x_max, 4.0 + 0.1 * 4.0);
        assert_eq!(b.y_min, 20.0 - 0.1 * 50.0);
        assert_eq!(b.y_max, 50.0 + 0.1 * 50.0);
    }

    #[test]
    fn test_bounds_use_max_not_span() {
        // Span is 1 on both axes; a span-based margin would be 0.1.
        let x = array![[100.0, -3.0], [101.0, -2.0]];
        let b = padded_bounds(x.view(), 0.1).unwrap();
        assert_eq!(b.x_min, 100.0 - 0.1 * 101.0);
        assert_eq!(b.x_max, 101.0 + 0.1 * 101.0);
        // A negative max pulls both edges inward.
        assert_eq!(b.y_min, -3.0 - 0.1 * -2.0);
        assert_eq!(b.y_max, -2.0 + 0.1 * -2.0);
    }

    #[test]
    fn test_bounds_reject_three_columns() {
        let x = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let result = padded_bounds(x.view(), 0.1);
        assert!(matches!(result, Err(BoundaryError::FeatureWidth { found: 3 })));
    }

    #[test]
    fn test_bounds_reject_empty() {
        let x = Array2::<f64>::zeros((0, 2));
        assert!(matches!(
            padded_bounds(x.view(), 0.1),
            Err(BoundaryError::EmptyFeatures)
        ));
    }

    #[test]
    fn test_grid_is_200_by_200_for_any_row_count() {
        for n in [1usize, 3, 57] {
            let x = Array2::from_shape_fn((n, 2), |(i, j)| (i + j) as f64 + 1.0);
            let bounds = padded_bounds(x.view(), 0.1).unwrap();
            let model = Threshold::new(1.5);
            let grid = decision_grid(&model, &bounds, 200).unwrap();
            assert_eq!(grid.cells.dim(), (200, 200));
            assert_eq!(model.calls.get(), 1);
        }
    }

    #[test]
    fn test_grid_columns_follow_horizontal_axis() {
        let bounds = Bounds {
            x_min: 0.0,
            x_max: 1.0,
            y_min: 0.0,
            y_max: 1.0,
        };
        let grid = decision_grid(&Threshold::new(0.5), &bounds, 4).unwrap();
        // linspace(0, 1, 4) = [0, 1/3, 2/3, 1]
        for row in grid.cells.rows() {
            assert_eq!(row.to_vec(), vec![0, 0, 1, 1]);
        }
    }

    #[test]
    fn test_grid_first_row_is_top() {
        let bounds = Bounds {
            x_min: 0.0,
            x_max: 1.0,
            y_min: 0.0,
            y_max: 1.0,
        };
        let grid = decision_grid(&Upper(0.5), &bounds, 4).unwrap();
        assert!(grid.cells.row(0).iter().all(|&l| l == "top"));
        assert!(grid.cells.row(3).iter().all(|&l| l == "bottom"));
    }

    #[test]
    fn test_flip_rows_twice_is_identity() {
        let z = array![[1, 2, 3], [4, 5, 6], [7, 8, 9]];
        let flipped = flip_rows(z.view());
        assert_eq!(flipped, array![[7, 8, 9], [4, 5, 6], [1, 2, 3]]);
        assert_eq!(flip_rows(flipped.view()), z);
    }

    #[test]
    fn test_resolution_below_two_is_rejected() {
        let bounds = Bounds {
            x_min: 0.0,
            x_max: 1.0,
            y_min: 0.0,
            y_max: 1.0,
        };
        assert!(matches!(
            decision_grid(&Threshold::new(0.5), &bounds, 1),
            Err(BoundaryError::Resolution(1))
        ));
    }
}
