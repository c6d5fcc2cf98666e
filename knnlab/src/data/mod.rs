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

pub mod csv;
pub mod iris;
pub mod split;

pub use self::csv::{CsvHeadersLoader, CsvLoader};
pub use iris::load_iris;
pub use split::{Split, SplitConfig, train_test_split};

use ndarray::{Array1, Array2};

/// A feature matrix with one integer class label per row.
///
/// `class_names` is present when the source stored labels as names rather than integers; the
/// name at position `i` is the one encoded as label `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledData {
    pub features: Array2<f64>,
    pub labels: Array1<usize>,
    pub feature_names: Option<Vec<String>>,
    pub class_names: Option<Vec<String>>,
}

impl LabeledData {
    pub fn n_samples(&self) -> usize {
        self.features.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }
}

/// A trait for loading labeled data from files.
///
/// Implementors read a file from a given path and return a 2D feature array of shape
/// `(n_rows, n_features)` together with `n_rows` integer class labels. Each implementation
/// defines its own error type.
///
/// # Associated Types
/// - `Error`: The error type returned by the `load` method, which must implement
///   `std::error::Error` and have a `'static` lifetime.
pub trait DataLoader {
    /// Loads data from a file into a feature matrix and label vector.
    ///
    /// # Parameters
    /// - `path`: The path to the data file, accepting any type that implements `AsRef<Path>`.
    fn load<P: AsRef<std::path::Path>>(path: P) -> Result<LabeledData, Self::Error>;

    /// The error type returned by the `load` method.
    type Error: std::error::Error + 'static;
}

/// Loads data from a file using a specified `DataLoader` implementation.
///
/// # Type Parameters
/// - `T`: The type implementing `DataLoader`, determining the file format and error type.
/// - `P`: The path type, constrained to implement `AsRef<Path>`.
pub fn load_data<T: DataLoader, P: AsRef<std::path::Path>>(
    path: P,
) -> Result<LabeledData, T::Error> {
    T::load(path)
}
