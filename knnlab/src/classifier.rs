// BSD 3-Clause License
//
// Copyright (c) 2025, BlackPortal ○
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice, this
//    list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
//    this list of conditions and the following disclaimer in the documentation
//    and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its
//    contributors may be used to endorse or promote products derived from
//    this software without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
// DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
// FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
// DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
// SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
// CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
// OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

use log::{debug, info};
use ndarray::{Array1, Array2, Axis};

use crate::errors::{KnnError, ModelError};
use crate::neighbors::{TrainingSet, find_neighbors};
use crate::scalers::{Scaler, StandardScaler};
use crate::vote::aggregate;

/// Classifies every row of `queries` against `training`.
///
/// Each query is resolved independently: its `k` nearest neighbors are selected and their
/// labels aggregated by majority vote. Output order follows the row order of `queries`, and an
/// empty query matrix yields an empty prediction vector.
///
/// # Errors
/// The first failing query aborts the whole batch with `ModelError::Query`, carrying the query
/// index and the underlying `KnnError`. No partial predictions are returned.
pub fn predict(
    training: &TrainingSet,
    queries: &Array2<f64>,
    k: usize,
    num_classes: usize,
) -> Result<Array1<usize>, ModelError> {
    let mut predictions = Array1::zeros(queries.nrows());
    for (index, query) in queries.axis_iter(Axis(0)).enumerate() {
        let label = find_neighbors(training, query, k)
            .and_then(|neighbors| aggregate(&neighbors, num_classes))
            .map_err(|source| ModelError::Query { index, source })?;
        debug!("Query {}: predicted class {}", index, label);
        predictions[index] = label;
    }
    Ok(predictions)
}

/// Fraction of positions where `predictions` and `truth` agree.
///
/// Returns `NaN` for two empty vectors, the mean of an empty indicator.
///
/// # Errors
/// `KnnError::LengthMismatch` when the vectors differ in length.
pub fn score(predictions: &Array1<usize>, truth: &Array1<usize>) -> Result<f64, KnnError> {
    if predictions.len() != truth.len() {
        return Err(KnnError::LengthMismatch {
            predictions: predictions.len(),
            truth: truth.len(),
        });
    }
    let correct =
        predictions.iter().zip(truth.iter()).filter(|(pred, actual)| pred == actual).count();
    Ok(correct as f64 / predictions.len() as f64)
}

pub struct KNNBuilder {
    k: usize,
    num_classes: Option<usize>,
    normalize: bool,
}

impl KNNBuilder {
    pub fn k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Fixes the number of classes instead of inferring it from the training labels.
    pub fn num_classes(mut self, num_classes: usize) -> Self {
        self.num_classes = Some(num_classes);
        self
    }

    pub fn normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    pub fn build(self) -> KNN {
        KNN {
            training: None,
            k: self.k,
            num_classes: self.num_classes,
            fitted_classes: 0,
            normalize: self.normalize,
            x_scaler: StandardScaler::new(),
        }
    }
}

/// A k-Nearest Neighbors classifier holding its training set between `fit` and `predict`.
pub struct KNN {
    training: Option<TrainingSet>,
    k: usize,
    num_classes: Option<usize>,
    fitted_classes: usize,
    normalize: bool,
    x_scaler: StandardScaler,
}

impl KNN {
    pub fn new() -> KNNBuilder {
        KNNBuilder { k: 3, num_classes: None, normalize: false }
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// Number of classes used for voting; zero until the model is fitted.
    pub fn num_classes(&self) -> usize {
        self.fitted_classes
    }

    pub fn fit(&mut self, x: &Array2<f64>, y: &Array1<usize>) -> Result<(), ModelError> {
        if self.k == 0 || self.k > x.nrows() {
            return Err(KnnError::InvalidK { k: self.k, max: x.nrows() }.into());
        }

        let x_scaled = if self.normalize { self.x_scaler.fit_transform(x)? } else { x.clone() };
        let training = TrainingSet::new(x_scaled, y.clone())?;

        self.fitted_classes = self
            .num_classes
            .unwrap_or_else(|| training.labels().iter().max().map_or(0, |&max| max + 1));
        info!(
            "Fitted on {} samples with {} features, {} classes, k = {}",
            training.len(),
            training.n_features(),
            self.fitted_classes,
            self.k
        );
        self.training = Some(training);
        Ok(())
    }

    pub fn predict(&self, x: &Array2<f64>) -> Result<Array1<usize>, ModelError> {
        let training = self.training.as_ref().ok_or(ModelError::NotFitted)?;

        if x.nrows() > 0 && x.ncols() != training.n_features() {
            return Err(ModelError::Query {
                index: 0,
                source: KnnError::DimensionMismatch {
                    expected: training.n_features(),
                    actual: x.ncols(),
                },
            });
        }

        if self.normalize && x.nrows() > 0 {
            let x_scaled = self.x_scaler.transform(x)?;
            predict(training, &x_scaled, self.k, self.fitted_classes)
        } else {
            predict(training, x, self.k, self.fitted_classes)
        }
    }

    pub fn calculate_accuracy(
        &self,
        predictions: &Array1<usize>,
        y_test: &Array1<usize>,
    ) -> Result<f64, KnnError> {
        score(predictions, y_test)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn toy_training_set() -> TrainingSet {
        TrainingSet::new(
            array![[0.0, 0.0], [0.0, 1.0], [10.0, 10.0], [10.0, 11.0]],
            array![0, 0, 1, 1],
        )
        .unwrap()
    }

    #[test]
    fn predict_single_nearest_neighbor() {
        let training = toy_training_set();
        let predictions = predict(&training, &array![[0.0, 0.5]], 1, 2).unwrap();
        assert_eq!(predictions, array![0]);
    }

    #[test]
    fn predict_majority_of_three() {
        // Distances from [10, 10.5]: 0.5, 0.5, sqrt(190.25) -> labels 1, 1, 0.
        let training = toy_training_set();
        let predictions = predict(&training, &array![[10.0, 10.5]], 3, 2).unwrap();
        assert_eq!(predictions, array![1]);
    }

    #[test]
    fn predict_preserves_query_order() {
        let training = toy_training_set();
        let queries = array![[9.0, 9.0], [1.0, 0.0], [11.0, 12.0], [0.0, -3.0]];
        let predictions = predict(&training, &queries, 1, 2).unwrap();
        assert_eq!(predictions, array![1, 0, 1, 0]);
    }

    #[test]
    fn predict_empty_queries() {
        let training = toy_training_set();
        let queries: Array2<f64> = Array2::zeros((0, 2));
        let predictions = predict(&training, &queries, 3, 2).unwrap();
        assert!(predictions.is_empty());
    }

    #[test]
    fn predict_reports_failing_query_index() {
        let training = TrainingSet::new(array![[0.0], [1.0]], array![0, 5]).unwrap();
        let queries = array![[-1.0], [2.0]];
        let result = predict(&training, &queries, 1, 2);
        assert!(matches!(
            result,
            Err(ModelError::Query {
                index: 1,
                source: KnnError::LabelOutOfRange { label: 5, num_classes: 2 }
            })
        ));
    }

    #[test]
    fn predict_invalid_k() {
        let training = toy_training_set();
        let result = predict(&training, &array![[0.0, 0.0]], 5, 2);
        assert!(matches!(
            result,
            Err(ModelError::Query { index: 0, source: KnnError::InvalidK { k: 5, max: 4 } })
        ));
    }

    #[test]
    fn score_perfect_predictions() {
        let labels = array![0, 1, 2, 1];
        assert_eq!(score(&labels, &labels).unwrap(), 1.0);
    }

    #[test]
    fn score_all_wrong() {
        let predictions = array![0, 0, 0];
        let truth = array![1, 2, 1];
        assert_eq!(score(&predictions, &truth).unwrap(), 0.0);
    }

    #[test]
    fn score_partial() {
        let predictions = array![0, 1, 2, 2];
        let truth = array![0, 1, 1, 0];
        assert!((score(&predictions, &truth).unwrap() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn score_length_mismatch() {
        let result = score(&array![0, 1], &array![0, 1, 2]);
        assert_eq!(result, Err(KnnError::LengthMismatch { predictions: 2, truth: 3 }));
    }

    #[test]
    fn score_empty_is_nan() {
        let empty: Array1<usize> = Array1::zeros(0);
        assert!(score(&empty, &empty).unwrap().is_nan());
    }

    #[test]
    fn knn_fit_predict() {
        let mut knn = KNN::new().k(3).build();
        let x = array![[0.0, 0.0], [0.0, 1.0], [10.0, 10.0], [10.0, 11.0]];
        let y = array![0, 0, 1, 1];
        knn.fit(&x, &y).unwrap();
        assert_eq!(knn.num_classes(), 2);

        let predictions = knn.predict(&array![[0.0, 0.5], [10.0, 10.5]]).unwrap();
        assert_eq!(predictions, array![0, 1]);
        assert_eq!(knn.calculate_accuracy(&predictions, &array![0, 1]).unwrap(), 1.0);
    }

    #[test]
    fn knn_fit_predict_normalized() {
        let mut knn = KNN::new().k(1).normalize(true).build();
        let x = array![[0.0, 100.0], [1.0, 300.0], [5.0, 100.0], [6.0, 300.0]];
        let y = array![0, 0, 1, 1];
        knn.fit(&x, &y).unwrap();
        let predictions = knn.predict(&array![[5.5, 110.0]]).unwrap();
        assert_eq!(predictions, array![1]);
    }

    #[test]
    fn knn_fixed_num_classes_rejects_out_of_range_labels() {
        let mut knn = KNN::new().k(1).num_classes(2).build();
        knn.fit(&array![[0.0], [1.0]], &array![0, 2]).unwrap();
        let result = knn.predict(&array![[1.0]]);
        assert!(matches!(
            result,
            Err(ModelError::Query {
                index: 0,
                source: KnnError::LabelOutOfRange { label: 2, num_classes: 2 }
            })
        ));
    }

    #[test]
    fn knn_normalize_rejects_infinite_feature() {
        let mut knn = KNN::new().k(1).normalize(true).build();
        let x = array![[0.0, f64::INFINITY], [1.0, 2.0]];
        let result = knn.fit(&x, &array![0, 1]);
        assert!(matches!(result, Err(ModelError::Knn(KnnError::NonFiniteFeature { .. }))));
    }

    #[test]
    fn knn_invalid_k() {
        let mut knn = KNN::new().k(5).build();
        let x = array![[1.0, 2.0], [2.0, 3.0]];
        let y = array![0, 1];
        let result = knn.fit(&x, &y);
        assert!(matches!(result, Err(ModelError::Knn(KnnError::InvalidK { k: 5, max: 2 }))));
    }

    #[test]
    fn knn_fit_shape_mismatch() {
        let mut knn = KNN::new().k(1).build();
        let x = array![[1.0, 2.0], [3.0, 4.0]];
        let y = array![0, 1, 2];
        let result = knn.fit(&x, &y);
        assert!(matches!(
            result,
            Err(ModelError::Knn(KnnError::ShapeMismatch { rows: 2, labels: 3 }))
        ));
    }

    #[test]
    fn knn_not_fitted() {
        let knn = KNN::new().build();
        let result = knn.predict(&array![[1.0, 2.0]]);
        assert!(matches!(result, Err(ModelError::NotFitted)));
    }

    #[test]
    fn knn_predict_dimension_mismatch() {
        let mut knn = KNN::new().k(1).normalize(true).build();
        knn.fit(&array![[1.0, 2.0], [3.0, 4.0]], &array![0, 1]).unwrap();
        let result = knn.predict(&array![[1.0, 2.0, 3.0]]);
        assert!(matches!(
            result,
            Err(ModelError::Query {
                index: 0,
                source: KnnError::DimensionMismatch { expected: 2, actual: 3 }
            })
        ));
    }
}
