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

use ndarray::ArrayView1;

use crate::errors::KnnError;

/// Computes the Euclidean distance between two feature vectors.
///
/// # Arguments
/// - `a`: The first feature vector.
/// - `b`: The second feature vector.
///
/// # Returns
/// `sqrt(sum((a[i] - b[i])^2))`, or `KnnError::DimensionMismatch` when the vectors differ
/// in length. The result is symmetric in its arguments and zero only for identical vectors.
pub fn euclidean_distance(a: ArrayView1<f64>, b: ArrayView1<f64>) -> Result<f64, KnnError> {
    if a.len() != b.len() {
        return Err(KnnError::DimensionMismatch { expected: a.len(), actual: b.len() });
    }

    let squared_sum = ndarray::Zip::from(a).and(b).fold(0.0, |acc, &a_i, &b_i| {
        let diff = a_i - b_i;
        acc + diff * diff
    });
    Ok(squared_sum.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_euclidean_distance_hand_computed() {
        let a = array![0.0, 0.0];
        let b = array![3.0, 4.0];
        let d = euclidean_distance(a.view(), b.view()).unwrap();
        assert!((d - 5.0).abs() < 1e-12, "Expected 5.0, got {}", d);
    }

    #[test]
    fn test_euclidean_distance_is_symmetric() {
        let a = array![5.1, 3.5, 1.4, 0.2];
        let b = array![6.7, 3.0, 5.2, 2.3];
        let ab = euclidean_distance(a.view(), b.view()).unwrap();
        let ba = euclidean_distance(b.view(), a.view()).unwrap();
        assert_eq!(ab, ba);
    }

    #[test]
    fn test_euclidean_distance_to_self_is_zero() {
        let a = array![1.5, -2.0, 7.25];
        assert_eq!(euclidean_distance(a.view(), a.view()).unwrap(), 0.0);
    }

    #[test]
    fn test_euclidean_distance_positive_for_distinct_points() {
        let a = array![1.0, 2.0, 3.0];
        let b = array![1.0, 2.0, 3.000001];
        assert!(euclidean_distance(a.view(), b.view()).unwrap() > 0.0);
    }

    #[test]
    fn test_euclidean_distance_dimension_mismatch() {
        let a = array![1.0, 2.0];
        let b = array![1.0, 2.0, 3.0];
        let result = euclidean_distance(a.view(), b.view());
        assert_eq!(result, Err(KnnError::DimensionMismatch { expected: 2, actual: 3 }));
    }

    #[test]
    fn test_euclidean_distance_empty_vectors() {
        let a: ndarray::Array1<f64> = array![];
        assert_eq!(euclidean_distance(a.view(), a.view()).unwrap(), 0.0);
    }
}
