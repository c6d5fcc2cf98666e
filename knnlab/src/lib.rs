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

//! A k-Nearest Neighbors classifier built from first principles.
//!
//! Classification runs in four steps: Euclidean distances from the query to every training
//! example ([`distance`]), selection of the `k` closest examples ([`neighbors`]), an unweighted
//! majority vote over their labels ([`vote`]) and batch prediction with accuracy scoring
//! ([`classifier`]).
//!
//! ```no_run
//! use knnlab::classifier::KNN;
//! use knnlab::data::{SplitConfig, load_iris, train_test_split};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let iris = load_iris()?;
//! let split = train_test_split(&iris.features, &iris.labels, &SplitConfig::default())?;
//!
//! let mut model = KNN::new().k(3).build();
//! model.fit(&split.x_train, &split.y_train)?;
//! let predictions = model.predict(&split.x_test)?;
//! println!("Accuracy = {}", model.calculate_accuracy(&predictions, &split.y_test)?);
//! # Ok(())
//! # }
//! ```

pub mod classifier;
pub mod data;
pub mod distance;
pub mod errors;
pub mod labels;
pub mod neighbors;
pub mod scalers;
pub mod vote;

pub use classifier::{KNN, KNNBuilder, predict, score};
pub use distance::euclidean_distance;
pub use errors::{DataError, KnnError, ModelError};
pub use labels::LabelNames;
pub use neighbors::{Neighbor, TrainingSet, find_neighbors};
pub use vote::aggregate;

pub use ndarray;
