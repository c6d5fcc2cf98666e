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

use log::info;
use ndarray::{Array1, Array2, Axis};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::errors::DataError;

/// Configuration for a reproducible train/test split.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitConfig {
    /// Fraction of samples assigned to the training partition, strictly inside `(0, 1)`.
    pub split: f64,
    /// Seed for the row shuffle.
    pub seed: u64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        SplitConfig { split: 0.75, seed: 123 }
    }
}

impl SplitConfig {
    pub fn new(split: f64) -> Self {
        SplitConfig { split, ..Default::default() }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Train and test partitions of a labeled dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Split {
    pub x_train: Array2<f64>,
    pub x_test: Array2<f64>,
    pub y_train: Array1<usize>,
    pub y_test: Array1<usize>,
}

/// Shuffles the rows of a dataset and partitions them into train and test sets.
///
/// The test partition receives `ceil(n * (1 - split))` rows and the training partition the
/// rest. The same seed always yields the same partitions.
///
/// # Errors
/// - `DataError::InvalidSplit` if `split` is not strictly between 0 and 1.
/// - `DataError::ShapeMismatch` if the feature rows and labels differ in count.
/// - `DataError::EmptyPartition` if either partition would be empty.
pub fn train_test_split(
    features: &Array2<f64>,
    labels: &Array1<usize>,
    config: &SplitConfig,
) -> Result<Split, DataError> {
    let split = config.split;
    if !(split > 0.0 && split < 1.0) {
        return Err(DataError::InvalidSplit { split });
    }
    let n_samples = features.nrows();
    if n_samples != labels.len() {
        return Err(DataError::ShapeMismatch { rows: n_samples, labels: labels.len() });
    }

    let n_test = ((1.0 - split) * n_samples as f64).ceil() as usize;
    let n_train = n_samples.saturating_sub(n_test);
    if n_test == 0 || n_train == 0 {
        return Err(DataError::EmptyPartition { n_samples, split });
    }

    let mut indices: Vec<usize> = (0..n_samples).collect();
    let mut rng = StdRng::seed_from_u64(config.seed);
    indices.shuffle(&mut rng);
    let (test_idx, train_idx) = indices.split_at(n_test);

    info!("Split {} samples into {} train / {} test", n_samples, n_train, n_test);

    Ok(Split {
        x_train: features.select(Axis(0), train_idx),
        x_test: features.select(Axis(0), test_idx),
        y_train: labels.select(Axis(0), train_idx),
        y_test: labels.select(Axis(0), test_idx),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(n: usize) -> (Array2<f64>, Array1<usize>) {
        let features = Array2::from_shape_fn((n, 2), |(i, j)| (i * 10 + j) as f64);
        let labels = Array1::from_shape_fn(n, |i| i % 3);
        (features, labels)
    }

    #[test]
    fn split_sizes_follow_ratio() {
        let (x, y) = dataset(150);
        let split = train_test_split(&x, &y, &SplitConfig::new(0.75)).unwrap();
        assert_eq!(split.x_train.nrows(), 112);
        assert_eq!(split.x_test.nrows(), 38);
        assert_eq!(split.y_train.len(), 112);
        assert_eq!(split.y_test.len(), 38);
    }

    #[test]
    fn split_is_deterministic_for_a_seed() {
        let (x, y) = dataset(40);
        let config = SplitConfig::new(0.5).with_seed(7);
        let first = train_test_split(&x, &y, &config).unwrap();
        let second = train_test_split(&x, &y, &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn split_keeps_rows_paired_with_labels() {
        let (x, y) = dataset(30);
        let split = train_test_split(&x, &y, &SplitConfig::default()).unwrap();
        for (row, &label) in split.x_train.rows().into_iter().zip(split.y_train.iter()) {
            let original = (row[0] / 10.0) as usize;
            assert_eq!(original % 3, label);
        }
    }

    #[test]
    fn split_partitions_every_row_once() {
        let (x, y) = dataset(25);
        let split = train_test_split(&x, &y, &SplitConfig::new(0.6)).unwrap();
        let mut seen: Vec<usize> = split
            .x_train
            .rows()
            .into_iter()
            .chain(split.x_test.rows())
            .map(|row| (row[0] / 10.0) as usize)
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..25).collect::<Vec<_>>());
    }

    #[test]
    fn split_rejects_out_of_range_ratio() {
        let (x, y) = dataset(10);
        for split in [0.0, 1.0, -0.5, 1.5, f64::NAN] {
            let result = train_test_split(&x, &y, &SplitConfig::new(split));
            assert!(matches!(result, Err(DataError::InvalidSplit { .. })), "split = {}", split);
        }
    }

    #[test]
    fn split_rejects_empty_training_partition() {
        let (x, y) = dataset(2);
        let result = train_test_split(&x, &y, &SplitConfig::new(0.1));
        assert!(matches!(result, Err(DataError::EmptyPartition { n_samples: 2, .. })));
    }

    #[test]
    fn split_rejects_shape_mismatch() {
        let (x, _) = dataset(4);
        let y = Array1::zeros(3);
        let result = train_test_split(&x, &y, &SplitConfig::default());
        assert!(matches!(result, Err(DataError::ShapeMismatch { rows: 4, labels: 3 })));
    }
}
