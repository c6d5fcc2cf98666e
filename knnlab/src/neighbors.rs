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

use log::debug;
use ndarray::{Array1, Array2, ArrayView1, Axis};

use crate::distance::euclidean_distance;
use crate::errors::KnnError;

/// A labeled collection of feature vectors, one row per example.
///
/// All rows share the same dimensionality and each row is paired with exactly one class label.
/// The set is never mutated once constructed.
#[derive(Debug, Clone)]
pub struct TrainingSet {
    features: Array2<f64>,
    labels: Array1<usize>,
}

impl TrainingSet {
    /// Creates a training set from a feature matrix and its labels.
    ///
    /// # Arguments
    /// - `features`: A 2D array of shape `(n_samples, n_features)`.
    /// - `labels`: A 1D array of `n_samples` class labels.
    ///
    /// # Errors
    /// - `KnnError::ShapeMismatch` when the row and label counts differ.
    /// - `KnnError::NonFiniteFeature` when any feature is NaN or infinite.
    pub fn new(features: Array2<f64>, labels: Array1<usize>) -> Result<Self, KnnError> {
        if features.nrows() != labels.len() {
            return Err(KnnError::ShapeMismatch { rows: features.nrows(), labels: labels.len() });
        }
        if let Some(row) =
            features.axis_iter(Axis(0)).position(|row| row.iter().any(|v| !v.is_finite()))
        {
            return Err(KnnError::NonFiniteFeature { row });
        }
        Ok(TrainingSet { features, labels })
    }

    pub fn features(&self) -> &Array2<f64> {
        &self.features
    }

    pub fn labels(&self) -> &Array1<usize> {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Dimensionality shared by every row.
    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }
}

/// One training example together with its distance to the query being resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor<'a> {
    /// Position of the example in the training set.
    pub index: usize,
    pub features: ArrayView1<'a, f64>,
    pub label: usize,
    pub distance: f64,
}

/// Finds the `k` training examples closest to `query`.
///
/// Distances are computed against every training row (brute force), then sorted ascending.
/// The sort is stable, so examples at equal distance keep their training-set order.
///
/// # Arguments
/// - `training`: The training set to search.
/// - `query`: The feature vector to classify.
/// - `k`: The number of neighbors to return, `1 <= k <= training.len()`.
///
/// # Returns
/// Exactly `k` neighbors sorted non-decreasing by distance.
///
/// # Errors
/// - `KnnError::InvalidK` if `k` is out of range. Checked before any distance is computed.
/// - `KnnError::DimensionMismatch` if `query` does not match the training dimensionality.
pub fn find_neighbors<'a>(
    training: &'a TrainingSet,
    query: ArrayView1<f64>,
    k: usize,
) -> Result<Vec<Neighbor<'a>>, KnnError> {
    if k == 0 || k > training.len() {
        return Err(KnnError::InvalidK { k, max: training.len() });
    }
    if query.len() != training.n_features() {
        return Err(KnnError::DimensionMismatch {
            expected: training.n_features(),
            actual: query.len(),
        });
    }

    let mut neighbors = training
        .features
        .axis_iter(Axis(0))
        .zip(training.labels.iter())
        .enumerate()
        .map(|(index, (row, &label))| {
            let distance = euclidean_distance(query, row)?;
            Ok(Neighbor { index, features: row, label, distance })
        })
        .collect::<Result<Vec<_>, KnnError>>()?;

    // NaN of either sign sorts after every real distance.
    neighbors.sort_by(|a, b| {
        a.distance.is_nan().cmp(&b.distance.is_nan()).then(a.distance.total_cmp(&b.distance))
    });
    neighbors.truncate(k);

    debug!(
        "Selected {} of {} training examples, max distance {:.4}",
        neighbors.len(),
        training.len(),
        neighbors.last().map_or(0.0, |n| n.distance)
    );
    Ok(neighbors)
}
