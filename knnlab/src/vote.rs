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

use log::debug;

use crate::errors::KnnError;
use crate::neighbors::Neighbor;

/// Returns the majority class among `neighbors`.
///
/// Each neighbor casts one unweighted vote for its own label. When several classes share the
/// highest vote count, the label of the nearest neighbor (`neighbors[0]`) wins. The input is
/// expected to be sorted by distance, as returned by `find_neighbors`.
///
/// Breaking ties in favour of the lowest tied label is deliberately not supported: the nearest
/// neighbor rule is the only tie-break policy.
///
/// # Arguments
/// - `neighbors`: The k nearest neighbors, sorted ascending by distance.
/// - `num_classes`: Number of classes `C`; every label must lie in `[0, C)`.
///
/// # Errors
/// - `KnnError::EmptyNeighborSet` if `neighbors` is empty.
/// - `KnnError::LabelOutOfRange` if any label is `>= num_classes`.
pub fn aggregate(neighbors: &[Neighbor<'_>], num_classes: usize) -> Result<usize, KnnError> {
    let nearest = neighbors.first().ok_or(KnnError::EmptyNeighborSet)?;

    let mut class_votes: HashMap<usize, usize> = HashMap::new();
    for neighbor in neighbors {
        if neighbor.label >= num_classes {
            return Err(KnnError::LabelOutOfRange { label: neighbor.label, num_classes });
        }
        *class_votes.entry(neighbor.label).or_insert(0) += 1;
    }

    let max_votes = class_votes.values().copied().max().unwrap_or(0);
    let mut winners = class_votes.iter().filter(|&(_, &v)| v == max_votes);

    let label = match (winners.next(), winners.next()) {
        (Some((&label, _)), None) => label,
        _ => {
            debug!(
                "Vote tie at {} votes, using nearest neighbor label {}",
                max_votes, nearest.label
            );
            nearest.label
        }
    };
    Ok(label)
}
