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

use std::path::PathBuf;

use clap::Parser;

/// Classify a tabular dataset with k-Nearest Neighbors and report test accuracy.
#[derive(Parser, Debug)]
#[command(name = "knnlab-iris", version, about = "k-Nearest Neighbors on iris or a CSV dataset")]
pub struct Cli {
    /// Fraction of samples used for training, strictly between 0 and 1.
    #[arg(long, default_value_t = 0.75)]
    pub split: f64,

    /// Number of neighbors consulted per prediction.
    #[arg(
        short,
        long,
        default_value_t = 3,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub k: usize,

    /// Seed for the train/test shuffle.
    #[arg(long, default_value_t = 123)]
    pub seed: u64,

    /// Load a CSV dataset (last column is the class) instead of the bundled iris data.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// The CSV file starts with a header row.
    #[arg(long, requires = "csv")]
    pub headers: bool,

    /// Standardise features before computing distances.
    #[arg(long)]
    pub normalize: bool,

    /// Print every test sample with its predicted and true class.
    #[arg(long)]
    pub show_predictions: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_run() {
        let cli = Cli::parse_from(["knnlab-iris"]);
        assert_eq!(cli.split, 0.75);
        assert_eq!(cli.k, 3);
        assert_eq!(cli.seed, 123);
        assert!(cli.csv.is_none());
        assert!(!cli.normalize);
    }

    #[test]
    fn zero_k_is_rejected() {
        assert!(Cli::try_parse_from(["knnlab-iris", "-k", "0"]).is_err());
    }

    #[test]
    fn k_parses_as_usize() {
        let cli = Cli::parse_from(["knnlab-iris", "-k", "7"]);
        let k: usize = cli.k;
        assert_eq!(k, 7);
    }

    #[test]
    fn headers_requires_csv() {
        assert!(Cli::try_parse_from(["knnlab-iris", "--headers"]).is_err());
    }

    #[test]
    fn verbosity_is_counted() {
        let cli = Cli::parse_from(["knnlab-iris", "-vv", "--csv", "data.csv", "--headers"]);
        assert_eq!(cli.verbose, 2);
        assert!(cli.headers);
    }
}
