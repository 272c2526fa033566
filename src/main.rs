// Renders the decision boundary of a k-NN model over three clusters of
// sensor readings and writes it as SVG (default `boundary.svg`).
use std::env;
use std::error::Error;

use ndarray::array;
use sensorplot::{
    Backend, DataPoint, KnnClassifier, L2Dist, RenderOptions, init_backend, logging, render,
};
use tracing::info;

fn main() -> Result<(), Box<dyn Error>> {
    logging::init("info")?;
    init_backend(Backend::Svg);

    let out = env::args().nth(1).unwrap_or_else(|| "boundary.svg".to_string());

    let features = array![
        [4.8, 3.1],
        [5.1, 3.5],
        [4.6, 3.4],
        [5.0, 3.0],
        [6.4, 2.9],
        [6.9, 3.1],
        [6.0, 2.7],
        [6.6, 3.0],
        [7.7, 3.8],
        [7.2, 3.6],
        [7.9, 3.8],
        [7.4, 3.3],
    ];
    let labels = vec![0u8, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 2];

    let model = KnnClassifier::new(3, DataPoint::from_rows(features.view(), &labels), L2Dist)?;
    let options = RenderOptions::new().title("k-NN (k = 3)");
    let visual = render(&model, features.view(), &labels, &options)?;
    visual.save(&out)?;

    info!(
        path = %out,
        classes = visual.background.len(),
        "wrote decision boundary"
    );
    Ok(())
}
