//! Shows how the batch `Classifier` interface surfaces k-NN failures.
//!
//! Every failure comes back as a `KnnError` value; nothing here panics.

use k_nn::{KnnClassifier, KnnError};
use ndarray::array;
use sensorplot_helpers::{Classifier, DataPoint, L2Dist};

fn main() {
    println!("k-NN batch prediction error handling");
    println!("====================================");

    println!("\n1. k = 0:");
    let training_data = vec![
        DataPoint::new(array![1.0, 1.0], "A"),
        DataPoint::new(array![2.0, 2.0], "A"),
    ];
    match KnnClassifier::new(0, training_data, L2Dist) {
        Ok(_) => println!("   classifier created"),
        Err(e) => println!("   caught: {}", e),
    }

    println!("\n2. Empty training set:");
    let empty: Vec<DataPoint<&str, f64>> = vec![];
    if let Ok(classifier) = KnnClassifier::new(3, empty, L2Dist) {
        match classifier.predict(array![[1.0, 1.0]].view()) {
            Err(KnnError::EmptyTrainingSet) => println!("   caught: {}", KnnError::EmptyTrainingSet),
            other => println!("   unexpected: {:?}", other),
        }
    }

    println!("\n3. Three-column batch against two-feature training data:");
    let training_data = vec![
        DataPoint::new(array![1.0, 1.0], "Class A"),
        DataPoint::new(array![2.0, 2.0], "Class A"),
        DataPoint::new(array![8.0, 8.0], "Class B"),
        DataPoint::new(array![9.0, 8.0], "Class B"),
    ];
    let classifier = match KnnClassifier::new(3, training_data, L2Dist) {
        Ok(classifier) => classifier,
        Err(e) => {
            println!("   could not build classifier: {}", e);
            return;
        }
    };
    match classifier.predict(array![[1.0, 1.0, 1.0]].view()) {
        Ok(labels) => println!("   unexpected success: {:?}", labels),
        Err(e) => println!("   caught: {}", e),
    }

    println!("\n4. Valid batch:");
    match classifier.predict(array![[2.5, 2.5], [7.5, 8.5]].view()) {
        Ok(labels) => println!("   predicted {:?}", labels.to_vec()),
        Err(e) => println!("   prediction failed: {}", e),
    }
}
