//! Decision-boundary plots and feature augmentation for two-sensor
//! classification experiments.
//!
//! The workspace crates are re-exported here so applications depend on a
//! single crate.

pub mod logging;

pub use decision_boundary::{
    Backend, BoundaryError, Bounds, DecisionGrid, RenderOptions, Rendered, Visual,
    active_backend, decision_grid, flip_rows, init_backend, padded_bounds, render,
    render_with_backend,
};
pub use feature_augment::{AugmentError, DERIVED_COLUMNS, FeatureAugmenter, Frame};
pub use k_nn::{KnnClassifier, KnnError};
pub use sensorplot_helpers::{
    Classifier, DataPoint, Distance, Float, L1Dist, L2Dist, LInfDist, Transformer,
};

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, Axis, array, stack};

    #[test]
    fn test_augmented_ratios_feed_the_renderer() {
        let housing = [
            "longitude",
            "latitude",
            "housing_median_age",
            "total_rooms",
            "total_bedrooms",
            "population",
            "households",
            "median_income",
        ];
        let x = array![
            [-118.0, 34.0, 20.0, 10.0, 2.0, 20.0, 5.0, 3.5],
            [-122.0, 37.5, 41.0, 880.0, 129.0, 322.0, 126.0, 8.3],
            [-121.0, 38.0, 30.0, 600.0, 150.0, 900.0, 200.0, 2.1],
            [-119.5, 36.0, 15.0, 2000.0, 300.0, 800.0, 250.0, 6.0],
        ];
        let frame = FeatureAugmenter::new(housing).transform(x.view()).unwrap();

        let features: Array2<f64> = stack(
            Axis(1),
            &[
                frame.column("rooms_per_household").unwrap(),
                frame.column("population_per_household").unwrap(),
            ],
        )
        .unwrap();
        let labels: Vec<bool> = frame
            .column("median_income")
            .unwrap()
            .iter()
            .map(|&income| income > 5.0)
            .collect();

        let model =
            KnnClassifier::new(1, DataPoint::from_rows(features.view(), &labels), L2Dist).unwrap();
        let visual = render_with_backend(
            Backend::Svg,
            &model,
            features.view(),
            &labels,
            &RenderOptions::new().resolution(40),
        )
        .unwrap();

        assert_eq!(visual.grid.resolution(), 40);
        assert_eq!(visual.markers.len(), 2);
        assert!(visual.svg().is_some());
    }
}
