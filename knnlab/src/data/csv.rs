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

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use log::debug;
use ndarray::{Array1, Array2};

use super::{DataLoader, LabeledData};
use crate::errors::CsvError;

pub struct CsvLoader;
pub struct CsvHeadersLoader;

/// Parses a label cell written as a non-negative integer (`2` or `2.0`).
fn parse_label(value: &str) -> Option<usize> {
    if let Ok(label) = value.parse::<usize>() {
        return Some(label);
    }
    let float = value.parse::<f64>().ok()?;
    (float >= 0.0 && float.fract() == 0.0 && float <= usize::MAX as f64).then_some(float as usize)
}

/// Encodes label cells as integers.
///
/// Integer cells are used verbatim. If any cell is not an integer, every distinct cell value is
/// assigned the next free label in order of first appearance, and the names are returned.
fn encode_labels(cells: &[String]) -> (Vec<usize>, Option<Vec<String>>) {
    if let Some(labels) = cells.iter().map(|c| parse_label(c)).collect::<Option<Vec<_>>>() {
        return (labels, None);
    }

    let mut encoder: HashMap<&str, usize> = HashMap::new();
    let mut names = Vec::new();
    let labels = cells
        .iter()
        .map(|cell| {
            *encoder.entry(cell.as_str()).or_insert_with(|| {
                names.push(cell.clone());
                names.len() - 1
            })
        })
        .collect();
    (labels, Some(names))
}

fn load_csv_common<P: AsRef<Path>>(path: P, has_headers: bool) -> Result<LabeledData, CsvError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut rdr =
        csv::ReaderBuilder::new().has_headers(has_headers).flexible(true).from_reader(file);

    let feature_names = if has_headers {
        let headers = rdr.headers()?;
        let n = headers.len().saturating_sub(1);
        Some(headers.iter().take(n).map(str::to_string).collect::<Vec<_>>())
    } else {
        None
    };

    // Rows are paired with their 1-based line in the file, header included.
    let header_lines = usize::from(has_headers);
    let mut lines: Vec<usize> = Vec::new();
    let mut data: Vec<Vec<String>> = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let record = result?;
        let line = record.position().map_or(i + 1 + header_lines, |pos| pos.line() as usize);
        let row: Vec<String> = record.iter().map(|s| s.trim().to_string()).collect();
        if i > 0 && row.len() != data[0].len() {
            return Err(CsvError::InconsistentColumns {
                row: line,
                actual: row.len(),
                expected: data[0].len(),
            });
        }
        lines.push(line);
        data.push(row);
    }

    let n_rows = data.len();
    if n_rows == 0 {
        return Err(CsvError::EmptyFile);
    }
    let n_cols = data[0].len();
    if n_cols < 2 {
        return Err(CsvError::InsufficientColumns);
    }

    let mut feature_data: Vec<f64> = Vec::with_capacity(n_rows * (n_cols - 1));
    let mut label_cells: Vec<String> = Vec::with_capacity(n_rows);
    for (line, mut row) in lines.into_iter().zip(data) {
        label_cells.extend(row.pop());
        for value in row {
            let num = value.parse::<f64>().map_err(|e| CsvError::InvalidNumeric {
                value: value.clone(),
                row: line,
                source: e,
            })?;
            if !num.is_finite() {
                return Err(CsvError::NonFiniteValue { value, row: line });
            }
            feature_data.push(num);
        }
    }

    let (labels, class_names) = encode_labels(&label_cells);
    debug!(
        "Loaded {} rows with {} features from {}",
        n_rows,
        n_cols - 1,
        path.display()
    );

    Ok(LabeledData {
        features: Array2::from_shape_vec((n_rows, n_cols - 1), feature_data)?,
        labels: Array1::from_vec(labels),
        feature_names,
        class_names,
    })
}

impl DataLoader for CsvLoader {
    type Error = CsvError;

    fn load<P: AsRef<Path>>(path: P) -> Result<LabeledData, Self::Error> {
        load_csv_common(path, false)
    }
}

impl DataLoader for CsvHeadersLoader {
    type Error = CsvError;

    fn load<P: AsRef<Path>>(path: P) -> Result<LabeledData, Self::Error> {
        load_csv_common(path, true)
    }
}
