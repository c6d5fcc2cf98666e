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

use ndarray::{Array1, Array2, Axis};

use crate::errors::ScalerError;

pub trait Scaler {
    fn fit(&mut self, x: &Array2<f64>) -> Result<(), ScalerError>;

    fn transform(&self, x: &Array2<f64>) -> Result<Array2<f64>, ScalerError>;

    fn fit_transform(&mut self, x: &Array2<f64>) -> Result<Array2<f64>, ScalerError> {
        self.fit(x)?;
        self.transform(x)
    }
}

/// Standardises every feature column to zero mean and unit sample standard deviation.
///
/// Columns with zero variance keep a divisor of one, so they are only centred.
#[derive(Debug, Clone, Default)]
pub struct StandardScaler {
    mean: Option<Array1<f64>>,
    std: Option<Array1<f64>>,
}

impl StandardScaler {
    pub fn new() -> Self {
        StandardScaler { mean: None, std: None }
    }
}

impl Scaler for StandardScaler {
    fn fit(&mut self, x: &Array2<f64>) -> Result<(), ScalerError> {
        let mean = x.mean_axis(Axis(0)).ok_or(ScalerError::EmptyInput)?;
        let ddof = if x.nrows() > 1 { 1.0 } else { 0.0 };
        let std = x.var_axis(Axis(0), ddof).mapv(|v| v.sqrt());
        self.mean = Some(mean);
        self.std = Some(std.mapv(|s| if s == 0.0 { 1.0 } else { s }));
        Ok(())
    }

    fn transform(&self, x: &Array2<f64>) -> Result<Array2<f64>, ScalerError> {
        let mean = self.mean.as_ref().ok_or(ScalerError::NotFitted)?;
        let std = self.std.as_ref().ok_or(ScalerError::NotFitted)?;
        if x.ncols() != mean.len() {
            return Err(ScalerError::DimensionMismatch { expected: mean.len(), actual: x.ncols() });
        }
        Ok((x - mean) / std)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_standard_scaler_fit_transform() {
        let x = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let mut scaler = StandardScaler::new();
        let x_scaled = scaler.fit_transform(&x).unwrap();

        let mean = x_scaled.mean_axis(Axis(0)).unwrap();
        let std = x_scaled.var_axis(Axis(0), 1.0).mapv(|v| v.sqrt());
        for &m in mean.iter() {
            assert!(m.abs() < 1e-10, "Mean should be ~0, got {}", m);
        }
        for &s in std.iter() {
            assert!((s - 1.0).abs() < 1e-10, "Std should be ~1, got {}", s);
        }
    }

    #[test]
    fn test_standard_scaler_zero_variance() {
        let x = array![[1.0, 2.0], [1.0, 4.0], [1.0, 6.0]];
        let mut scaler = StandardScaler::new();
        let x_scaled = scaler.fit_transform(&x).unwrap();
        assert_eq!(x_scaled.column(0), array![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_standard_scaler_single_row() {
        let x = array![[3.0, -1.0]];
        let mut scaler = StandardScaler::new();
        let x_scaled = scaler.fit_transform(&x).unwrap();
        assert_eq!(x_scaled, array![[0.0, 0.0]]);
    }

    #[test]
    fn test_standard_scaler_empty_input() {
        let x: Array2<f64> = Array2::zeros((0, 2));
        let mut scaler = StandardScaler::new();
        assert_eq!(scaler.fit(&x), Err(ScalerError::EmptyInput));
    }

    #[test]
    fn test_standard_scaler_not_fitted() {
        let scaler = StandardScaler::new();
        let x = array![[1.0, 2.0]];
        assert_eq!(scaler.transform(&x), Err(ScalerError::NotFitted));
    }

    #[test]
    fn test_standard_scaler_dimension_mismatch() {
        let mut scaler = StandardScaler::new();
        scaler.fit(&array![[1.0, 2.0], [3.0, 4.0]]).unwrap();
        let result = scaler.transform(&array![[1.0, 2.0, 3.0]]);
        assert_eq!(result, Err(ScalerError::DimensionMismatch { expected: 2, actual: 3 }));
    }
}
