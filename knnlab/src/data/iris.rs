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
use ndarray::{Array1, Array2};

use super::LabeledData;
use crate::errors::DataError;

pub const IRIS_FEATURE_NAMES: [&str; 4] =
    ["sepal length", "sepal width", "petal length", "petal width"];

pub const IRIS_CLASS_NAMES: [&str; 3] = ["setosa", "versicolor", "virginica"];

/// Loads the 150-sample iris dataset bundled with `linfa-datasets`.
///
/// Rows keep their original order: 50 samples of each species, labeled 0, 1 and 2.
pub fn load_iris() -> Result<LabeledData, DataError> {
    let dataset = linfa_datasets::iris();
    let records = dataset.records();
    let (n_rows, n_cols) = (records.nrows(), records.ncols());

    let features = Array2::from_shape_vec((n_rows, n_cols), records.iter().copied().collect())?;
    let labels: Array1<usize> = dataset.targets().iter().copied().collect();
    if labels.len() != n_rows {
        return Err(DataError::ShapeMismatch { rows: n_rows, labels: labels.len() });
    }

    info!("Loaded iris dataset: {} samples, {} features", n_rows, n_cols);
    Ok(LabeledData {
        features,
        labels,
        feature_names: Some(IRIS_FEATURE_NAMES.iter().map(|s| s.to_string()).collect()),
        class_names: Some(IRIS_CLASS_NAMES.iter().map(|s| s.to_string()).collect()),
    })
}
