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

use thiserror::Error;

/// Precondition violations raised by the classification core.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KnnError {
    #[error("Dimension mismatch: expected {expected} features, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Invalid k = {k}: must satisfy 1 <= k <= {max}")]
    InvalidK { k: usize, max: usize },

    #[error("Cannot aggregate votes over an empty neighbor set")]
    EmptyNeighborSet,

    #[error("Label {label} is outside the valid range [0, {num_classes})")]
    LabelOutOfRange { label: usize, num_classes: usize },

    #[error("Length mismatch: {predictions} predictions but {truth} ground-truth labels")]
    LengthMismatch { predictions: usize, truth: usize },

    #[error("Training set has {rows} feature rows but {labels} labels")]
    ShapeMismatch { rows: usize, labels: usize },

    #[error("Training row {row} contains a NaN or infinite feature")]
    NonFiniteFeature { row: usize },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScalerError {
    #[error("Input data is empty")]
    EmptyInput,

    #[error("Scaler has not been fitted")]
    NotFitted,

    #[error("Dimension mismatch: expected {expected} features, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Query {index} failed: {source}")]
    Query { index: usize, source: KnnError },

    #[error(transparent)]
    Knn(#[from] KnnError),

    #[error("Scaler error: {0}")]
    Scaler(#[from] ScalerError),

    #[error("Model has not been fitted")]
    NotFitted,
}

#[derive(Error, Debug)]
pub enum DataError {
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    #[error("Split ratio {split} must lie strictly between 0 and 1")]
    InvalidSplit { split: f64 },

    #[error("Split ratio {split} leaves an empty partition for {n_samples} samples")]
    EmptyPartition { n_samples: usize, split: f64 },

    #[error("Dataset has {rows} feature rows but {labels} labels")]
    ShapeMismatch { rows: usize, labels: usize },

    #[error("Failed to shape data into array: {0}")]
    ArrayShape(#[from] ndarray::ShapeError),
}

#[derive(Error, Debug)]
pub enum CsvError {
    #[error("Failed to open file: {0}")]
    FileOpen(#[from] std::io::Error),

    #[error("CSV file is empty")]
    EmptyFile,

    #[error("CSV must have at least one feature and one label column")]
    InsufficientColumns,

    #[error("Inconsistent column count: line {row} has {actual} columns, expected {expected}")]
    InconsistentColumns { row: usize, actual: usize, expected: usize },

    #[error("Invalid numeric value '{value}' at line {row}: {source}")]
    InvalidNumeric { value: String, row: usize, source: std::num::ParseFloatError },

    #[error("Non-finite value '{value}' at line {row}")]
    NonFiniteValue { value: String, row: usize },

    #[error("Failed to shape data into array: {0}")]
    ArrayShape(#[from] ndarray::ShapeError),

    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),
}
